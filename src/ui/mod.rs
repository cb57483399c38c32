//! Platform seams the pages are written against: dialogs, the URL bar,
//! object URLs, timers, and the shared view-state gate.

/// Confirm/alert dialogs
pub mod dialog;
/// Authenticated image slot
pub mod image;
/// Query string state and navigation
pub mod location;
/// Object URL creation and revocation
pub mod object_url;
/// Cancellable periodic task
pub mod timer;
/// Loading/ready/failed state
pub mod view;

pub use dialog::{ConsoleDialogs, Dialogs};
pub use image::{AuthenticatedImage, ImageSource};
pub use location::{MemoryNavigator, Navigator, QueryString};
pub use object_url::{BlobStore, MemoryBlobStore, ObjectUrl};
pub use timer::ScheduledTask;
pub use view::ViewState;
