//! Home page banner carousel.
//!
//! Active banners, newest first, rotate on a timer. The slide index lives in
//! an atomic shared with the timer task so manual navigation and
//! auto-advance never disagree.

use crate::core::listing::{active, sort_newest};
use crate::entities::Banner;
use crate::pages::{PageContext, UploadFolder};
use crate::ui::{ScheduledTask, ViewState};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, error};

const LOAD_FAILED: &str = "Không thể tải danh sách banner. Vui lòng thử lại sau.";

/// One carousel slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    /// Banner id
    pub id: i64,
    /// Caption
    pub title: String,
    /// Image URL or placeholder
    pub image: String,
    /// Target link
    pub link: Option<String>,
}

/// Banner carousel.
pub struct BannerCarousel {
    ctx: PageContext,
    state: ViewState<Vec<Slide>>,
    index: Arc<AtomicUsize>,
    timer: Option<ScheduledTask>,
    timed_count: usize,
}

fn step(index: &AtomicUsize, count: usize, forward: bool) {
    if count == 0 {
        return;
    }
    index
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |i| {
            Some(if forward {
                (i + 1) % count
            } else {
                (i + count - 1) % count
            })
        })
        .ok();
}

impl BannerCarousel {
    /// Creates the carousel in the loading state. No timer runs yet.
    #[must_use]
    pub fn new(ctx: PageContext) -> Self {
        Self {
            ctx,
            state: ViewState::Loading,
            index: Arc::new(AtomicUsize::new(0)),
            timer: None,
            timed_count: 0,
        }
    }

    /// Fetches the banners and (re)starts auto-advance.
    pub async fn load(&mut self) {
        match self.ctx.service::<Banner>().index().await {
            Ok(banners) => {
                let mut banners = active(banners);
                sort_newest(&mut banners);
                let slides: Vec<Slide> = banners
                    .iter()
                    .map(|b| Slide {
                        id: b.id,
                        title: b.name.clone(),
                        image: self
                            .ctx
                            .image_or_placeholder(UploadFolder::Banners, b.image.as_deref()),
                        link: b.link.clone(),
                    })
                    .collect();
                debug!("Carousel has {} slides", slides.len());
                self.state = ViewState::Ready(slides);
            }
            Err(e) => {
                error!("Error fetching banners: {}", e);
                self.state = ViewState::Failed(LOAD_FAILED.to_string());
            }
        }
        self.sync_timer();
    }

    // Restarts the timer only when the number of slides changed.
    fn sync_timer(&mut self) {
        let count = self.len();
        if count == self.timed_count && (self.timer.is_some() || count == 0) {
            return;
        }
        self.timed_count = count;
        if let Some(previous) = self.timer.take() {
            previous.cancel();
        }
        if self.index.load(Ordering::SeqCst) >= count {
            self.index.store(0, Ordering::SeqCst);
        }
        self.timer = (count > 0).then(|| {
            let index = Arc::clone(&self.index);
            ScheduledTask::every(self.ctx.config.storefront.carousel_interval(), move || {
                step(&index, count, true);
            })
        });
    }

    /// Current view state.
    #[must_use]
    pub const fn state(&self) -> &ViewState<Vec<Slide>> {
        &self.state
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.data().map_or(0, Vec::len)
    }

    /// Whether there is nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index of the visible slide.
    #[must_use]
    pub fn current(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }

    /// The visible slide.
    #[must_use]
    pub fn current_slide(&self) -> Option<&Slide> {
        self.state.data().and_then(|s| s.get(self.current()))
    }

    /// Next slide, wrapping to the first.
    pub fn next(&self) {
        step(&self.index, self.len(), true);
    }

    /// Previous slide, wrapping to the last.
    pub fn prev(&self) {
        step(&self.index, self.len(), false);
    }

    /// Jumps to slide `index` if it exists.
    pub fn go_to(&self, index: usize) {
        if index < self.len() {
            self.index.store(index, Ordering::SeqCst);
        }
    }

    /// `current/total` counter, 1-based.
    #[must_use]
    pub fn counter(&self) -> String {
        format!("{}/{}", self.current() + 1, self.len())
    }
}
