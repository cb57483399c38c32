//! Landing page: banner carousel, newest products and newest posts.

use super::banner::BannerCarousel;
use super::post_new::NewPosts;
use super::product_new::NewProducts;
use crate::pages::PageContext;
use crate::ui::ViewState;
use std::fmt::Write as _;

/// Home page.
pub struct HomePage {
    /// Banner strip
    pub carousel: BannerCarousel,
    /// "Sản phẩm mới"
    pub products: NewProducts,
    /// "Bài viết mới"
    pub posts: NewPosts,
}

fn section<T>(out: &mut String, title: &str, state: &ViewState<Vec<T>>, line: impl Fn(&T) -> String) {
    let _ = writeln!(out, "== {title} ==");
    match state {
        ViewState::Loading => out.push_str("...\n"),
        ViewState::Failed(message) => {
            let _ = writeln!(out, "{message}");
        }
        ViewState::Ready(items) => {
            for item in items {
                let _ = writeln!(out, "- {}", line(item));
            }
        }
    }
}

impl HomePage {
    /// Creates the three sections.
    #[must_use]
    pub fn new(ctx: &PageContext) -> Self {
        Self {
            carousel: BannerCarousel::new(ctx.clone()),
            products: NewProducts::new(ctx.clone()),
            posts: NewPosts::new(ctx.clone()),
        }
    }

    /// Loads every section concurrently; each fails on its own.
    pub async fn load(&mut self) {
        tokio::join!(
            self.carousel.load(),
            self.products.load(),
            self.posts.load()
        );
    }

    /// Plain-text rendering of the page.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        section(&mut out, "Banner", self.carousel.state(), |slide| {
            format!("{} ({})", slide.title, slide.image)
        });
        section(&mut out, "Sản phẩm mới", self.products.state(), |card| card.summary());
        section(&mut out, "Bài viết mới", self.posts.state(), |card| {
            format!("{} - {} [{}]", card.title, card.excerpt, card.link)
        });
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Method;
    use crate::test_utils::Harness;
    use serde_json::json;

    #[tokio::test(start_paused = true)]
    async fn test_sections_fail_independently() {
        let harness = Harness::new();
        harness.transport.on(
            Method::Get,
            "banners",
            json!([{"id": 1, "title": "Sale", "status": 1}]),
        );
        harness.transport.unreachable(Method::Get, "products");
        harness.transport.on(
            Method::Get,
            "posts",
            json!([{"id": 2, "title": "Tin", "content": "<b>Mới</b>", "status": 1}]),
        );
        harness.transport.on(Method::Get, "topics", json!([]));
        let mut home = HomePage::new(&harness.context());

        home.load().await;

        let text = home.render();
        assert!(text.contains("- Sale (/placeholder-image.jpg)"));
        assert!(text.contains("Không thể tải danh sách sản phẩm mới. Vui lòng thử lại sau."));
        assert!(text.contains("- Tin - Mới... [/post/post-2]"));
    }
}
