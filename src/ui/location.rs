//! URL query state and navigation.
//!
//! Listing pages mirror their filters into the query string so a reload or a
//! back navigation restores them.

use std::borrow::Cow;
use std::fmt;
use std::sync::Mutex;

/// Ordered query parameters with `URLSearchParams` semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    /// Empty query.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Parses `?a=1&b=x%20y` (leading `?` optional, `+` is a space).
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let pairs = raw
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode(key), decode(value))
            })
            .collect();
        Self { pairs }
    }

    /// First value of `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First value of `key`, ignoring empty values.
    #[must_use]
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Replaces the first `key` in place and drops any others, or appends.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(pos) => {
                self.pairs[pos].1 = value;
                let mut seen = false;
                self.pairs.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    let keep = !seen;
                    seen = true;
                    keep
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    /// Removes every `key`.
    pub fn delete(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    /// Whether there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Parameters in order.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", urlencoding::encode(key), urlencoding::encode(value))?;
        }
        Ok(())
    }
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).map_or_else(|_| spaced.clone(), Cow::into_owned)
}

/// The browser location as pages see it.
pub trait Navigator: Send + Sync {
    /// Goes to another route (history push).
    fn navigate(&self, route: &str);

    /// Query string of the current location.
    fn query(&self) -> QueryString;

    /// Replaces the query string of the current location.
    fn set_query(&self, query: &QueryString);
}

#[derive(Debug, Default)]
struct History {
    entries: Vec<String>,
    query: QueryString,
}

/// In-process navigator keeping a history of visited routes.
#[derive(Debug, Default)]
pub struct MemoryNavigator {
    history: Mutex<History>,
}

impl MemoryNavigator {
    /// Starts at `route` with the given query.
    #[must_use]
    pub fn at(route: &str, query: &str) -> Self {
        Self {
            history: Mutex::new(History {
                entries: vec![route.to_string()],
                query: QueryString::parse(query),
            }),
        }
    }

    fn with<R>(&self, f: impl FnOnce(&mut History) -> R) -> R {
        match self.history.lock() {
            Ok(mut guard) => f(&mut guard),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        }
    }

    /// Current route.
    #[must_use]
    pub fn current(&self) -> Option<String> {
        self.with(|h| h.entries.last().cloned())
    }

    /// Every route visited, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.with(|h| h.entries.clone())
    }
}

impl Navigator for MemoryNavigator {
    fn navigate(&self, route: &str) {
        self.with(|h| {
            h.entries.push(route.to_string());
            h.query = QueryString::new();
        });
    }

    fn query(&self) -> QueryString {
        self.with(|h| h.query.clone())
    }

    fn set_query(&self, query: &QueryString) {
        self.with(|h| h.query = query.clone());
    }
}
