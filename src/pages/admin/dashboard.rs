//! Admin dashboard - product and order counts and settled revenue.

use super::messages;
use crate::core::format::format_vnd;
use crate::core::order::revenue;
use crate::entities::Product;
use crate::pages::PageContext;
use crate::ui::ViewState;
use tracing::error;

/// Figures shown on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    /// Number of products
    pub products: usize,
    /// Number of orders
    pub orders: usize,
    /// Total of delivered and paid orders
    pub revenue: f64,
}

impl DashboardStats {
    /// Revenue formatted as VND.
    #[must_use]
    pub fn revenue_display(&self) -> String {
        format_vnd(self.revenue)
    }
}

/// Dashboard page.
pub struct DashboardPage {
    ctx: PageContext,
    state: ViewState<DashboardStats>,
}

impl DashboardPage {
    /// Creates the page in the loading state.
    #[must_use]
    pub const fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            state: ViewState::Loading,
        }
    }

    /// Fetches products and orders concurrently.
    pub async fn load(&mut self) {
        let products = self.ctx.service::<Product>();
        let orders = self.ctx.orders();
        self.state = match tokio::try_join!(products.index(), orders.index()) {
            Ok((products, orders)) => ViewState::Ready(DashboardStats {
                products: products.len(),
                orders: orders.len(),
                revenue: revenue(&orders),
            }),
            Err(e) => {
                error!("Error fetching dashboard data: {}", e);
                ViewState::Failed(messages::DASHBOARD_FAILED.to_string())
            }
        };
    }

    /// Current view state.
    #[must_use]
    pub const fn state(&self) -> &ViewState<DashboardStats> {
        &self.state
    }
}
