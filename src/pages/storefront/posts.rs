//! Post cards and the "Tất cả bài viết" listing.

use crate::core::format::excerpt;
use crate::core::listing::{Pagination, sort_newest};
use crate::core::post::topic_name;
use crate::entities::{Post, Topic};
use crate::errors::Result;
use crate::pages::{PageContext, UploadFolder};
use crate::ui::{QueryString, ViewState};
use tracing::{error, info};

const LOAD_FAILED: &str = "Không thể tải dữ liệu.";
const TOPIC_LOAD_FAILED: &str = "Không thể tải dữ liệu theo chủ đề.";

/// Excerpt length on listing cards.
pub const CARD_EXCERPT: usize = 150;

/// What a post tile shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    /// Post id
    pub id: i64,
    /// Title
    pub title: String,
    /// Image URL or placeholder
    pub image: String,
    /// Plain-text excerpt
    pub excerpt: String,
    /// `/post/<slug>`
    pub link: String,
    /// `dd/mm/yyyy`
    pub date: Option<String>,
    /// Topic name when it could be resolved
    pub topic: Option<String>,
    /// Topic id
    pub topic_id: Option<i64>,
}

impl PostCard {
    /// Builds the card of `post`, cutting the excerpt at `excerpt_chars`.
    #[must_use]
    pub fn new(post: &Post, topics: &[Topic], ctx: &PageContext, excerpt_chars: usize) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            image: ctx.image_or_placeholder(UploadFolder::Posts, post.image.as_deref()),
            excerpt: excerpt(&post.content, excerpt_chars),
            link: post.link(),
            date: post.created_at.as_ref().map(|t| t.date()),
            topic: topic_name(post, topics).map(str::to_string),
            topic_id: post.topic_id,
        }
    }
}

#[derive(Debug, Default)]
struct Listing {
    topics: Vec<Topic>,
    posts: Vec<PostCard>,
}

/// All posts with an optional topic filter and client-side pagination.
pub struct AllPosts {
    ctx: PageContext,
    state: ViewState<()>,
    listing: Listing,
    selected: Option<i64>,
    pagination: Pagination,
}

impl AllPosts {
    /// Creates the page in the loading state.
    #[must_use]
    pub fn new(ctx: PageContext) -> Self {
        let page_size = ctx.config.storefront.page_size;
        Self {
            ctx,
            state: ViewState::Loading,
            listing: Listing::default(),
            selected: None,
            pagination: Pagination::new(page_size),
        }
    }

    /// Fetches the topics, resolves `?topic=` and fetches the matching posts.
    pub async fn load(&mut self) {
        let result = async {
            let topics = self.ctx.service::<Topic>().index().await?;
            let key = self.ctx.navigator.query().get_non_empty("topic").map(str::to_string);
            let selected = key.and_then(|k| topics.iter().find(|t| t.matches_key(&k)).map(|t| t.id));
            let posts = self.fetch_posts(selected).await?;
            Ok::<_, crate::errors::Error>((topics, selected, posts))
        }
        .await;

        match result {
            Ok((topics, selected, posts)) => {
                self.selected = selected;
                self.listing.topics = topics;
                self.set_posts(posts);
                self.state = ViewState::Ready(());
            }
            Err(e) => {
                error!("Error fetching posts: {}", e);
                self.state = ViewState::Failed(LOAD_FAILED.to_string());
            }
        }
    }

    async fn fetch_posts(&self, topic: Option<i64>) -> Result<Vec<Post>> {
        let service = self.ctx.service::<Post>();
        match topic {
            Some(id) => service.by_topic(id).await,
            None => service.index().await,
        }
    }

    fn set_posts(&mut self, mut posts: Vec<Post>) {
        sort_newest(&mut posts);
        self.listing.posts = posts
            .iter()
            .map(|p| PostCard::new(p, &self.listing.topics, &self.ctx, CARD_EXCERPT))
            .collect();
        self.pagination.set_total(self.listing.posts.len() as u64);
        self.pagination.reset_to(1);
    }

    /// Toggles the topic filter.
    ///
    /// Choosing a topic writes `?topic=<key>` and fetches its posts; choosing
    /// the active topic again clears the query and fetches everything.
    pub async fn select_topic(&mut self, topic_id: i64) {
        let clearing = self.selected == Some(topic_id);
        let mut query = QueryString::new();
        if clearing {
            self.selected = None;
        } else {
            self.selected = Some(topic_id);
            if let Some(topic) = self.listing.topics.iter().find(|t| t.id == topic_id) {
                query.set("topic", topic.query_key());
            }
        }
        self.ctx.navigator.set_query(&query);

        match self.fetch_posts(self.selected).await {
            Ok(posts) => {
                info!("Topic filter now {:?}", self.selected);
                self.set_posts(posts);
                self.state = ViewState::Ready(());
            }
            Err(e) => {
                error!("Error fetching posts by topic: {}", e);
                let message = if clearing { LOAD_FAILED } else { TOPIC_LOAD_FAILED };
                self.state = ViewState::Failed(message.to_string());
            }
        }
    }

    /// Moves to `page` when it exists.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        self.pagination.go_to(page)
    }

    /// Loading gate.
    #[must_use]
    pub const fn state(&self) -> &ViewState<()> {
        &self.state
    }

    /// Topic buttons.
    #[must_use]
    pub fn topics(&self) -> &[Topic] {
        &self.listing.topics
    }

    /// Selected topic id.
    #[must_use]
    pub const fn selected_topic(&self) -> Option<i64> {
        self.selected
    }

    /// Cards on the current page.
    #[must_use]
    pub fn posts(&self) -> &[PostCard] {
        self.pagination.slice(&self.listing.posts)
    }

    /// Page bookkeeping.
    #[must_use]
    pub const fn pagination(&self) -> &Pagination {
        &self.pagination
    }
}
