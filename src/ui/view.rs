//! Loading/ready/failed gate every page renders through.

/// What a page currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState<T> {
    /// A fetch is in flight (initial state)
    #[default]
    Loading,
    /// Data arrived; an empty collection is still `Ready`
    Ready(T),
    /// The fetch failed; holds the user-facing message
    Failed(String),
}

impl<T> ViewState<T> {
    /// Whether a fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Loaded data, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// Mutable loaded data, if any.
    pub const fn data_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// User-facing error message, if the fetch failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
