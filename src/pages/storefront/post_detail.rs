//! Single post page, reached by `/post/<slug>`.

use super::posts::PostCard;
use crate::core::listing::sort_newest;
use crate::core::post::topic_name;
use crate::entities::{Post, Topic};
use crate::pages::{PageContext, UploadFolder};
use crate::ui::ViewState;
use tracing::{error, warn};

const NOT_FOUND: &str = "Không tìm thấy bài viết.";
const LOAD_FAILED: &str = "Không thể tải thông tin bài viết.";
const UNKNOWN_TOPIC: &str = "Chủ đề không xác định";
const RELATED_EXCERPT: usize = 100;

/// What the post page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct PostView {
    /// The post
    pub post: Post,
    /// Image URL or placeholder
    pub image: String,
    /// Topic name or the unknown-topic label
    pub topic: String,
    /// `dd/mm/yyyy`
    pub date: Option<String>,
    /// Topic page route (slug, else id)
    pub topic_link: Option<String>,
    /// Other posts of the same topic
    pub related: Vec<PostCard>,
}

/// Post detail page.
pub struct PostDetailPage {
    ctx: PageContext,
    slug: String,
    state: ViewState<PostView>,
}

impl PostDetailPage {
    /// Creates the page for `slug` (`post-<id>` for posts without one).
    #[must_use]
    pub fn new(ctx: PageContext, slug: impl Into<String>) -> Self {
        Self {
            ctx,
            slug: slug.into(),
            state: ViewState::Loading,
        }
    }

    /// Fetches posts and topics, finds the post and its related posts.
    pub async fn load(&mut self) {
        let posts = self.ctx.service::<Post>();
        let topics = self.ctx.service::<Topic>();
        self.state = match tokio::try_join!(posts.index(), topics.index()) {
            Ok((posts, topics)) => match posts.iter().find(|p| self.matches(p)) {
                Some(post) => ViewState::Ready(self.view(post, &posts, &topics)),
                None => {
                    warn!("No post with slug {}", self.slug);
                    ViewState::Failed(NOT_FOUND.to_string())
                }
            },
            Err(e) => {
                error!("Error fetching post {}: {}", self.slug, e);
                ViewState::Failed(LOAD_FAILED.to_string())
            }
        };
    }

    fn matches(&self, post: &Post) -> bool {
        post.slug.as_deref() == Some(self.slug.as_str()) || format!("post-{}", post.id) == self.slug
    }

    fn view(&self, post: &Post, posts: &[Post], topics: &[Topic]) -> PostView {
        let mut related: Vec<Post> = posts
            .iter()
            .filter(|p| p.id != post.id && p.topic_id.is_some() && p.topic_id == post.topic_id)
            .cloned()
            .collect();
        sort_newest(&mut related);
        related.truncate(self.ctx.config.storefront.related_posts);

        let topic_link = post.topic_id.map(|id| {
            let key = topics
                .iter()
                .find(|t| t.id == id)
                .and_then(|t| t.slug.clone())
                .unwrap_or_else(|| id.to_string());
            format!("/posts/topic/{key}")
        });

        PostView {
            image: self
                .ctx
                .image_or_placeholder(UploadFolder::Posts, post.image.as_deref()),
            topic: topic_name(post, topics).unwrap_or(UNKNOWN_TOPIC).to_string(),
            date: post.created_at.as_ref().map(|t| t.date()),
            topic_link,
            related: related
                .iter()
                .map(|p| PostCard::new(p, topics, &self.ctx, RELATED_EXCERPT))
                .collect(),
            post: post.clone(),
        }
    }

    /// Current view state.
    #[must_use]
    pub const fn state(&self) -> &ViewState<PostView> {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Method;
    use crate::test_utils::Harness;
    use serde_json::json;

    fn script(harness: &Harness) {
        harness.transport.on(
            Method::Get,
            "posts",
            json!([
                {"id": 1, "title": "Chính", "slug": "bai-chinh", "topicId": 1},
                {"id": 2, "title": "Cùng chủ đề", "topicId": 1},
                {"id": 3, "title": "Khác", "topicId": 2},
                {"id": 4, "title": "Cùng 2", "topicId": 1},
                {"id": 5, "title": "Cùng 3", "topicId": 1},
                {"id": 6, "title": "Cùng 4", "topicId": 1},
                {"id": 7, "title": "Không chủ đề"}
            ]),
        );
        harness
            .transport
            .on(Method::Get, "topics", json!([{"id": 1, "name": "Tin", "slug": "tin"}]));
    }

    #[tokio::test]
    async fn test_related_same_topic_top_three() {
        let harness = Harness::new();
        script(&harness);
        let mut page = PostDetailPage::new(harness.context(), "bai-chinh");

        page.load().await;

        let view = page.state().data().cloned();
        let related: Vec<i64> = view
            .as_ref()
            .map(|v| v.related.iter().map(|c| c.id).collect())
            .unwrap_or_default();
        assert_eq!(related, vec![6, 5, 4]);
        assert_eq!(view.as_ref().map(|v| v.topic.as_str()), Some("Tin"));
        assert_eq!(
            view.and_then(|v| v.topic_link).as_deref(),
            Some("/posts/topic/tin")
        );
    }

    #[tokio::test]
    async fn test_id_route_reaches_slugged_post() {
        let harness = Harness::new();
        script(&harness);
        let mut page = PostDetailPage::new(harness.context(), "post-1");

        page.load().await;

        assert_eq!(page.state().data().map(|v| v.post.id), Some(1));
        assert_eq!(page.state().data().map(|v| v.related.len()), Some(3));
    }

    #[tokio::test]
    async fn test_default_slug_and_unknown_topic() {
        let harness = Harness::new();
        script(&harness);
        let mut page = PostDetailPage::new(harness.context(), "post-3");

        page.load().await;

        let view = page.state().data().cloned();
        assert_eq!(view.as_ref().map(|v| v.post.id), Some(3));
        assert_eq!(view.as_ref().map(|v| v.topic.as_str()), Some(UNKNOWN_TOPIC));
        assert_eq!(view.as_ref().and_then(|v| v.topic_link.clone()).as_deref(), Some("/posts/topic/2"));
    }

    #[tokio::test]
    async fn test_related_excerpt_length() {
        let harness = Harness::new();
        harness.transport.on(Method::Get, "topics", json!([]));
        harness.transport.on(
            Method::Get,
            "posts",
            json!([
                {"id": 1, "title": "Chính", "slug": "bai-chinh", "topicId": 1},
                {"id": 2, "title": "Cùng", "topicId": 1, "content": format!("<p>{}</p>", "a".repeat(200))}
            ]),
        );
        let mut page = PostDetailPage::new(harness.context(), "bai-chinh");
        page.load().await;
        let excerpt = page
            .state()
            .data()
            .and_then(|v| v.related.first())
            .map(|c| c.excerpt.clone())
            .unwrap_or_default();
        assert_eq!(excerpt, format!("{}...", "a".repeat(100)));
    }

    #[tokio::test]
    async fn test_missing_post() {
        let harness = Harness::new();
        script(&harness);
        let mut page = PostDetailPage::new(harness.context(), "khong-co");
        page.load().await;
        assert_eq!(page.state().error(), Some(NOT_FOUND));
    }
}
