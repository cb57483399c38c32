//! Category-specific operations.

use super::service::EntityService;
use crate::entities::Category;
use crate::errors::Result;

/// Category service.
pub type CategoryService = EntityService<Category>;

/// Categories that may be chosen as parent of `editing`.
///
/// Only the record itself is removed; deeper cycles are left to the server.
#[must_use]
pub fn parent_candidates(all: Vec<Category>, editing: Option<i64>) -> Vec<Category> {
    all.into_iter()
        .filter(|c| Some(c.id) != editing)
        .collect()
}

impl EntityService<Category> {
    /// Fetches every category and drops `editing` from the list.
    ///
    /// # Errors
    /// Returns an error if the request fails.
    pub async fn parent_candidates(&self, editing: Option<i64>) -> Result<Vec<Category>> {
        Ok(parent_candidates(self.index().await?, editing))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::client::Method;
    use crate::test_utils::{MockTransport, test_client};
    use serde_json::json;

    #[tokio::test]
    async fn test_self_parent_excluded() -> Result<()> {
        let transport = MockTransport::new();
        transport.on(
            Method::Get,
            "categories",
            json!([{"id": 1, "name": "A"}, {"id": 2, "name": "B"}, {"id": 3, "name": "C"}]),
        );
        let service = CategoryService::new(test_client(&transport));

        let ids: Vec<i64> = service
            .parent_candidates(Some(2))
            .await?
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);

        let all = service.parent_candidates(None).await?;
        assert_eq!(all.len(), 3);
        Ok(())
    }
}
