//! Row selection and all-or-nothing batch dispatch.

use crate::errors::Result;
use futures_util::future::try_join_all;
use std::future::Future;

/// Ids ticked in an admin table, in the order they were ticked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<i64>,
}

impl Selection {
    /// Empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Ticks or unticks one row.
    pub fn toggle(&mut self, id: i64) {
        if let Some(pos) = self.ids.iter().position(|x| *x == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id);
        }
    }

    /// Header checkbox: selects every row, or clears when all are already selected.
    pub fn toggle_all(&mut self, all: &[i64]) {
        if !all.is_empty() && all.iter().all(|id| self.ids.contains(id)) {
            self.ids.clear();
        } else {
            self.ids = all.to_vec();
        }
    }

    /// Whether the row is ticked.
    #[must_use]
    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    /// Whether every one of `all` is ticked.
    #[must_use]
    pub fn covers(&self, all: &[i64]) -> bool {
        !all.is_empty() && all.iter().all(|id| self.ids.contains(id))
    }

    /// Selected ids.
    #[must_use]
    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    /// Number of selected rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Unticks everything.
    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

/// Runs one operation per id concurrently and succeeds only if all do.
///
/// Every future is built before any is polled, so all requests go out
/// together. The first failure is returned; requests that already completed
/// are not rolled back.
///
/// # Errors
/// Returns the first error produced by any operation.
pub async fn all_or_nothing<F, Fut, T>(ids: &[i64], op: F) -> Result<Vec<T>>
where
    F: Fn(i64) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let pending: Vec<Fut> = ids.iter().map(|id| op(*id)).collect();
    try_join_all(pending).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn test_toggle_and_toggle_all() {
        let mut selection = Selection::new();
        selection.toggle(2);
        selection.toggle(3);
        selection.toggle(2);
        assert_eq!(selection.ids(), &[3]);

        selection.toggle_all(&[1, 2, 3]);
        assert_eq!(selection.len(), 3);
        assert!(selection.covers(&[1, 2, 3]));
        selection.toggle_all(&[1, 2, 3]);
        assert!(selection.is_empty());
    }

    #[tokio::test]
    async fn test_all_or_nothing() {
        let ok = all_or_nothing(&[1, 2, 3], |id| async move { Ok(id * 10) }).await;
        assert_eq!(ok.ok(), Some(vec![10, 20, 30]));

        let failed = all_or_nothing(&[1, 2, 3], |id| async move {
            if id == 2 {
                Err(Error::Network("boom".into()))
            } else {
                Ok(id)
            }
        })
        .await;
        assert!(failed.is_err());
    }
}
