//! Product tile shared by the product listings.

use super::product_route;
use crate::core::format::{discount_badge, format_price};
use crate::entities::Product;
use crate::pages::{PageContext, UploadFolder};

/// What a product tile shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    /// Product id
    pub id: i64,
    /// Product name
    pub name: String,
    /// Image URL or the product placeholder
    pub image: String,
    /// Regular price, digits grouped with `,`
    pub price: String,
    /// Sale price when the product has one
    pub sale_price: Option<String>,
    /// `-N%`
    pub badge: Option<String>,
    /// Detail route
    pub link: String,
}

impl ProductCard {
    /// Builds the card of `product`.
    #[must_use]
    pub fn new(product: &Product, ctx: &PageContext) -> Self {
        let sale = product.effective_sale();
        Self {
            id: product.id,
            name: product.name.clone(),
            image: ctx
                .upload_url(UploadFolder::Products, product.image.as_deref())
                .unwrap_or_else(|| ctx.config.assets.placeholder_product.clone()),
            price: format_price(product.price),
            sale_price: sale.map(format_price),
            badge: discount_badge(product.price, sale),
            link: product_route(product.id),
        }
    }

    /// One-line text rendering: name, prices (regular one struck through) and badge.
    #[must_use]
    pub fn summary(&self) -> String {
        match (&self.sale_price, &self.badge) {
            (Some(sale), Some(badge)) => {
                format!("{} - {sale}₫ ~{}₫~ {badge}", self.name, self.price)
            }
            (Some(sale), None) => format!("{} - {sale}₫ ~{}₫~", self.name, self.price),
            _ => format!("{} - {}₫", self.name, self.price),
        }
    }
}
