use std::time::{Duration, Instant};

use crate::Profiler;

/// Guard returned by [`Profiler::start`].
///
/// The elapsed time is recorded exactly once: on [`stop`](Self::stop), or when
/// the guard is dropped, including by an early return or a panic unwinding
/// through the scope.
#[must_use = "the timer records when dropped; binding it to `_` drops it immediately"]
pub struct ScopedTimer<'a> {
    profiler: &'a mut Profiler,
    name: Option<String>,
    start: Instant,
}

impl<'a> ScopedTimer<'a> {
    pub(crate) fn new(profiler: &'a mut Profiler, name: String, start: Instant) -> Self {
        Self {
            profiler,
            name: Some(name),
            start,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Records now and returns the elapsed time.
    pub fn stop(mut self) -> Duration {
        self.finish()
    }

    fn finish(&mut self) -> Duration {
        let elapsed = self.start.elapsed();
        if let Some(name) = self.name.take() {
            self.profiler.record(&name, elapsed);
        }
        elapsed
    }
}

impl Drop for ScopedTimer<'_> {
    fn drop(&mut self) {
        self.finish();
    }
}
