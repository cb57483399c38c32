//! "Bài viết mới" strip on the home page.

use super::posts::{CARD_EXCERPT, PostCard};
use crate::core::listing::newest_active;
use crate::entities::{Post, Topic};
use crate::pages::PageContext;
use crate::ui::ViewState;
use tracing::error;

const LOAD_FAILED: &str = "Không thể tải bài viết mới nhất.";

/// Newest active posts.
pub struct NewPosts {
    ctx: PageContext,
    state: ViewState<Vec<PostCard>>,
}

impl NewPosts {
    /// Creates the strip in the loading state.
    #[must_use]
    pub const fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            state: ViewState::Loading,
        }
    }

    /// Fetches posts and topics together and keeps the newest active posts.
    pub async fn load(&mut self) {
        let posts = self.ctx.service::<Post>();
        let topics = self.ctx.service::<Topic>();
        self.state = match tokio::try_join!(posts.index(), topics.index()) {
            Ok((posts, topics)) => {
                let limit = self.ctx.config.storefront.new_posts;
                ViewState::Ready(
                    newest_active(posts, limit)
                        .iter()
                        .map(|p| PostCard::new(p, &topics, &self.ctx, CARD_EXCERPT))
                        .collect(),
                )
            }
            Err(e) => {
                error!("Error fetching latest posts: {}", e);
                ViewState::Failed(LOAD_FAILED.to_string())
            }
        };
    }

    /// Current view state.
    #[must_use]
    pub const fn state(&self) -> &ViewState<Vec<PostCard>> {
        &self.state
    }
}
