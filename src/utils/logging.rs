use log::{Level, log_enabled, warn};
use std::time::Instant;

/// Simple scoped timer for profiling critical sections.
pub struct ScopedTimer<'a> {
    label: &'a str,
    start: Instant,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl<'a> Drop for ScopedTimer<'a> {
    fn drop(&mut self) {
        if log_enabled!(Level::Trace) {
            let elapsed = self.start.elapsed();
            log::trace!("{} took {} µs", self.label, elapsed.as_micros());
        }
    }
}

/// Warns when a single update had to drain an unusually deep step backlog,
/// which usually means the caller stalled between frames.
pub fn warn_on_step_backlog(steps: u32, threshold: u32) {
    if steps > threshold {
        warn!("update drained {steps} fixed steps in one call (threshold {threshold})");
    }
}
