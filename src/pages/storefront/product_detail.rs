//! Product page, reached by `/chi-tiet-san-pham/<id>`.

use super::product_card::ProductCard;
use crate::core::format::{discount_badge, format_price};
use crate::entities::Product;
use crate::pages::{PageContext, UploadFolder};
use crate::ui::ViewState;
use tracing::{error, warn};

const LOAD_FAILED: &str = "Không tìm thấy sản phẩm. Vui lòng thử lại sau.";

/// What the product page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductView {
    /// The product
    pub product: Product,
    /// Image URL or the product placeholder
    pub image: String,
    /// Regular price, digits grouped
    pub price: String,
    /// Sale price when set
    pub sale_price: Option<String>,
    /// `-N%`
    pub badge: Option<String>,
    /// Embedded category name
    pub category: Option<String>,
    /// Up to four products of the same category
    pub related: Vec<ProductCard>,
}

/// Product detail page.
pub struct ProductDetailPage {
    ctx: PageContext,
    id: i64,
    state: ViewState<ProductView>,
}

impl ProductDetailPage {
    /// Creates the page for product `id`.
    #[must_use]
    pub const fn new(ctx: PageContext, id: i64) -> Self {
        Self {
            ctx,
            id,
            state: ViewState::Loading,
        }
    }

    /// Fetches the product, then its related products. A related-products
    /// failure only leaves that list empty.
    pub async fn load(&mut self) {
        let service = self.ctx.service::<Product>();
        let product = match service.detail(self.id).await {
            Ok(product) => product,
            Err(e) => {
                error!("Error fetching product {}: {}", self.id, e);
                self.state = ViewState::Failed(LOAD_FAILED.to_string());
                return;
            }
        };

        let related = match product.category_id {
            Some(category) => match service.by_category(category).await {
                Ok(items) => items
                    .iter()
                    .filter(|p| p.id != product.id)
                    .take(self.ctx.config.storefront.related_products)
                    .map(|p| ProductCard::new(p, &self.ctx))
                    .collect(),
                Err(e) => {
                    warn!("Error fetching related products of {}: {}", self.id, e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        let sale = product.effective_sale();
        self.state = ViewState::Ready(ProductView {
            image: self
                .ctx
                .upload_url(UploadFolder::Products, product.image.as_deref())
                .unwrap_or_else(|| self.ctx.config.assets.placeholder_product.clone()),
            price: format_price(product.price),
            sale_price: sale.map(format_price),
            badge: discount_badge(product.price, sale),
            category: product.category_name(&[]).map(str::to_string),
            related,
            product,
        });
    }

    /// Current view state.
    #[must_use]
    pub const fn state(&self) -> &ViewState<ProductView> {
        &self.state
    }
}
