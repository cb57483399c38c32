//! Object URLs for fetched image bytes.
//!
//! An [`ObjectUrl`] owns one URL created by a [`BlobStore`] and revokes it
//! when dropped, so every acquired URL is released exactly once.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Creates and revokes object URLs.
pub trait BlobStore: Send + Sync {
    /// Stores `bytes` and returns a URL that renders them.
    fn create(&self, bytes: Vec<u8>, content_type: Option<&str>) -> String;

    /// Releases a URL previously returned by [`BlobStore::create`].
    fn revoke(&self, url: &str);
}

/// Owned object URL; revoked on drop.
pub struct ObjectUrl {
    url: String,
    store: Arc<dyn BlobStore>,
}

impl ObjectUrl {
    /// Creates a URL for `bytes` in `store`.
    pub fn create(store: &Arc<dyn BlobStore>, bytes: Vec<u8>, content_type: Option<&str>) -> Self {
        Self {
            url: store.create(bytes, content_type),
            store: Arc::clone(store),
        }
    }

    /// The URL.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl std::fmt::Debug for ObjectUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ObjectUrl").field(&self.url).finish()
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        self.store.revoke(&self.url);
    }
}

#[derive(Debug, Default)]
struct Blobs {
    next: u64,
    live: BTreeMap<String, usize>,
    revocations: BTreeMap<String, usize>,
}

/// Keeps blobs in memory and counts revocations per URL.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<Blobs>,
}

impl MemoryBlobStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with<R>(&self, f: impl FnOnce(&mut Blobs) -> R) -> R {
        match self.blobs.lock() {
            Ok(mut guard) => f(&mut guard),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        }
    }

    /// How many times `url` was revoked.
    #[must_use]
    pub fn revocations(&self, url: &str) -> usize {
        self.with(|b| b.revocations.get(url).copied().unwrap_or(0))
    }

    /// URLs created and not yet revoked.
    #[must_use]
    pub fn live(&self) -> usize {
        self.with(|b| b.live.len())
    }
}

impl BlobStore for MemoryBlobStore {
    fn create(&self, bytes: Vec<u8>, _content_type: Option<&str>) -> String {
        self.with(|b| {
            b.next += 1;
            let url = format!("blob:storefront/{}", b.next);
            b.live.insert(url.clone(), bytes.len());
            url
        })
    }

    fn revoke(&self, url: &str) {
        self.with(|b| {
            b.live.remove(url);
            *b.revocations.entry(url.to_string()).or_default() += 1;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_revokes_once() {
        let memory = Arc::new(MemoryBlobStore::new());
        let store: Arc<dyn BlobStore> = memory.clone();

        let url = {
            let object = ObjectUrl::create(&store, vec![1, 2, 3], Some("image/png"));
            assert_eq!(memory.live(), 1);
            object.as_str().to_string()
        };

        assert_eq!(memory.live(), 0);
        assert_eq!(memory.revocations(&url), 1);
    }
}
