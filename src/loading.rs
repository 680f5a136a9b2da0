use std::sync::atomic::{AtomicUsize, Ordering};

/// Host-side hook for in-flight request feedback. The fetcher calls
/// `start_loading` and `end_loading` exactly once each per fetch, whether the
/// result comes from the cache or the network.
pub trait LoadingIndicator: Send + Sync {
    /// Called when a fetch begins. `hint` is the caller-supplied loading hint,
    /// passed through untouched.
    fn start_loading(&self, hint: Option<&str>);

    /// Called when the fetch settles, success or failure.
    fn end_loading(&self);
}

/// Counts in-flight requests. Hosts can poll [`in_flight`](Self::in_flight)
/// to drive a spinner or progress UI.
#[derive(Default)]
pub struct LoadingTracker {
    in_flight: AtomicUsize,
}

impl LoadingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }
}

impl LoadingIndicator for LoadingTracker {
    fn start_loading(&self, hint: Option<&str>) {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        if let Some(hint) = hint {
            log::debug!("loading: {}", hint);
        }
    }

    fn end_loading(&self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Used as a default when the host has no loading UI.
#[derive(Default)]
pub struct NoopIndicator;

impl LoadingIndicator for NoopIndicator {
    fn start_loading(&self, _hint: Option<&str>) {}
    fn end_loading(&self) {}
}
