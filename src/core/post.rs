//! Post-specific operations.

use super::service::EntityService;
use crate::client::envelope::decode_list;
use crate::entities::{Post, Topic};
use crate::errors::Result;

/// Post service: the generic contract plus topic filtering.
pub type PostService = EntityService<Post>;

/// Topic service.
pub type TopicService = EntityService<Topic>;

impl EntityService<Post> {
    /// `GET posts/topic/:id`.
    ///
    /// # Errors
    /// Returns an error if the request fails or a post cannot be decoded.
    pub async fn by_topic(&self, topic_id: i64) -> Result<Vec<Post>> {
        decode_list(self.client().get(&format!("posts/topic/{topic_id}")).await?)
    }
}

/// Topic display name for a post: embedded name first, then a lookup in `topics`.
#[must_use]
pub fn topic_name<'a>(post: &'a Post, topics: &'a [Topic]) -> Option<&'a str> {
    post.topic
        .as_ref()
        .and_then(|t| t.name.as_deref())
        .or_else(|| {
            let id = post.topic_id?;
            topics.iter().find(|t| t.id == id).map(|t| t.name.as_str())
        })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::client::Method;
    use crate::test_utils::{MockTransport, test_client};
    use serde_json::json;

    #[tokio::test]
    async fn test_by_topic_route() -> Result<()> {
        let transport = MockTransport::new();
        transport.on(Method::Get, "posts/topic/4", json!({"data": [{"id": 1, "topic_id": 4}]}));
        let posts = PostService::new(test_client(&transport)).by_topic(4).await?;
        assert_eq!(posts[0].topic_id, Some(4));
        Ok(())
    }

    #[test]
    fn test_topic_name_lookup() {
        let topics: Vec<Topic> =
            serde_json::from_value(json!([{"id": 4, "name": "Tin tức"}])).unwrap();
        let post: Post = serde_json::from_value(json!({"id": 1, "topicId": 4})).unwrap();
        assert_eq!(topic_name(&post, &topics), Some("Tin tức"));

        let orphan: Post = serde_json::from_value(json!({"id": 2, "topicId": 5})).unwrap();
        assert_eq!(topic_name(&orphan, &topics), None);
    }
}
