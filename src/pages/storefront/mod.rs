//! Public storefront pages.

/// Rotating banner strip
pub mod banner;
/// Product listing with URL-synchronised filters
pub mod catalog;
/// Landing page
pub mod home;
/// One post and its related posts
pub mod post_detail;
/// Newest posts strip
pub mod post_new;
/// Product card display model
pub mod product_card;
/// One product and its related products
pub mod product_detail;
/// Newest products strip
pub mod product_new;
/// Post cards and the all-posts listing
pub mod posts;
/// Posts of one topic
pub mod topic_posts;

pub use banner::{BannerCarousel, Slide};
pub use catalog::{CatalogFilters, CatalogScope, ProductCatalog};
pub use home::HomePage;
pub use post_detail::{PostDetailPage, PostView};
pub use post_new::NewPosts;
pub use product_card::ProductCard;
pub use product_detail::{ProductDetailPage, ProductView};
pub use product_new::NewProducts;
pub use posts::{AllPosts, PostCard};
pub use topic_posts::TopicPosts;

/// Storefront route of a product.
#[must_use]
pub fn product_route(id: i64) -> String {
    format!("/chi-tiet-san-pham/{id}")
}
