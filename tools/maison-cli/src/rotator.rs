//! Decorative hero-image rotation.
//!
//! Purely presentational: a recurring task advancing an index, with no
//! access to cart or search state. The task must be cancelled when its
//! owning view is torn down, which `stop`/`Drop` guarantee.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Compute the next hero index, wrapping around.
pub(crate) fn advance(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

/// Auto-advancing hero image index.
///
/// Owned by the view that displays it; dropping the rotator cancels
/// the underlying task so no callback outlives its view.
pub struct HeroRotator {
    index: Arc<AtomicUsize>,
    handle: Option<JoinHandle<()>>,
}

impl HeroRotator {
    /// Start rotating over `len` images, advancing every `every`.
    ///
    /// With fewer than two images there is nothing to rotate and no
    /// task is spawned.
    pub fn start(len: usize, every: Duration) -> Self {
        let index = Arc::new(AtomicUsize::new(0));

        let handle = if len > 1 {
            let index = index.clone();
            Some(tokio::spawn(async move {
                let mut ticker = tokio::time::interval(every);
                // The first tick completes immediately; swallow it so the
                // initial image stays up for a full interval.
                ticker.tick().await;
                loop {
                    ticker.tick().await;
                    let current = index.load(Ordering::SeqCst);
                    index.store(advance(current, len), Ordering::SeqCst);
                }
            }))
        } else {
            None
        };

        Self { index, handle }
    }

    /// The index currently showing.
    pub fn current(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }

    /// Cancel the rotation task.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for HeroRotator {
    fn drop(&mut self) {
        self.stop();
    }
}
