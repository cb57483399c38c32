//! Posts of one topic, reached by `/posts/topic/<slug or id>`.

use super::posts::{CARD_EXCERPT, PostCard};
use crate::core::listing::{Pagination, sort_newest};
use crate::entities::{Post, Topic};
use crate::pages::PageContext;
use crate::ui::ViewState;
use tracing::{error, warn};

const NOT_FOUND: &str = "Không tìm thấy chủ đề.";
const LOAD_FAILED: &str = "Không thể tải dữ liệu.";

/// Topic page.
pub struct TopicPosts {
    ctx: PageContext,
    key: String,
    state: ViewState<(Topic, Vec<PostCard>)>,
    pagination: Pagination,
}

impl TopicPosts {
    /// Creates the page for the topic designated by `key` (slug or id).
    #[must_use]
    pub fn new(ctx: PageContext, key: impl Into<String>) -> Self {
        let page_size = ctx.config.storefront.page_size;
        Self {
            ctx,
            key: key.into(),
            state: ViewState::Loading,
            pagination: Pagination::new(page_size),
        }
    }

    fn matches(&self, topic: &Topic) -> bool {
        topic.slug.as_deref() == Some(self.key.as_str()) || topic.id.to_string() == self.key
    }

    /// Fetches topics and posts, then keeps the topic's posts, newest first.
    pub async fn load(&mut self) {
        let topics = self.ctx.service::<Topic>();
        let posts = self.ctx.service::<Post>();
        self.state = match tokio::try_join!(topics.index(), posts.index()) {
            Ok((topics, posts)) => match topics.iter().find(|t| self.matches(t)) {
                Some(topic) => {
                    let mut own: Vec<Post> = posts
                        .into_iter()
                        .filter(|p| p.topic_id == Some(topic.id))
                        .collect();
                    sort_newest(&mut own);
                    let cards: Vec<PostCard> = own
                        .iter()
                        .map(|p| PostCard::new(p, &topics, &self.ctx, CARD_EXCERPT))
                        .collect();
                    self.pagination.set_total(cards.len() as u64);
                    self.pagination.reset_to(1);
                    ViewState::Ready((topic.clone(), cards))
                }
                None => {
                    warn!("No topic matches {}", self.key);
                    ViewState::Failed(NOT_FOUND.to_string())
                }
            },
            Err(e) => {
                error!("Error fetching topic posts: {}", e);
                ViewState::Failed(LOAD_FAILED.to_string())
            }
        };
    }

    /// Current view state.
    #[must_use]
    pub const fn state(&self) -> &ViewState<(Topic, Vec<PostCard>)> {
        &self.state
    }

    /// `CHỦ ĐỀ: <NAME>` heading.
    #[must_use]
    pub fn heading(&self) -> Option<String> {
        self.state
            .data()
            .map(|(topic, _)| format!("CHỦ ĐỀ: {}", topic.name.to_uppercase()))
    }

    /// Cards on the current page.
    #[must_use]
    pub fn posts(&self) -> &[PostCard] {
        self.state
            .data()
            .map_or(&[], |(_, cards)| self.pagination.slice(cards))
    }

    /// Moves to `page` when it exists.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        self.pagination.go_to(page)
    }
}
