//! "Sản phẩm mới" strip on the home page.

use super::product_card::ProductCard;
use crate::core::listing::newest_active;
use crate::entities::Product;
use crate::pages::PageContext;
use crate::ui::ViewState;
use tracing::error;

const LOAD_FAILED: &str = "Không thể tải danh sách sản phẩm mới. Vui lòng thử lại sau.";

/// Newest active products.
pub struct NewProducts {
    ctx: PageContext,
    state: ViewState<Vec<ProductCard>>,
}

impl NewProducts {
    /// Creates the strip in the loading state.
    #[must_use]
    pub const fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            state: ViewState::Loading,
        }
    }

    /// Fetches every product and keeps the newest active ones.
    pub async fn load(&mut self) {
        self.state = match self.ctx.service::<Product>().index().await {
            Ok(products) => {
                let limit = self.ctx.config.storefront.new_products;
                ViewState::Ready(
                    newest_active(products, limit)
                        .iter()
                        .map(|p| ProductCard::new(p, &self.ctx))
                        .collect(),
                )
            }
            Err(e) => {
                error!("Error fetching new products: {}", e);
                ViewState::Failed(LOAD_FAILED.to_string())
            }
        };
    }

    /// Current view state.
    #[must_use]
    pub const fn state(&self) -> &ViewState<Vec<ProductCard>> {
        &self.state
    }
}
