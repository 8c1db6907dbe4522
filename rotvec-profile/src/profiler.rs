use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::timer::ScopedTimer;

/// Accumulated timings for one name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Entry {
    call_count: u64,
    total_time: Duration,
}

impl Entry {
    pub fn call_count(&self) -> u64 {
        self.call_count
    }

    pub fn total_time(&self) -> Duration {
        self.total_time
    }

    /// Mean time per call, zero when nothing has been recorded.
    pub fn mean_time(&self) -> Duration {
        match u32::try_from(self.call_count) {
            Ok(0) => Duration::ZERO,
            Ok(n) => self.total_time / n,
            Err(_) => Duration::from_secs_f64(self.total_time.as_secs_f64() / self.call_count as f64),
        }
    }

    fn add(&mut self, elapsed: Duration) {
        self.call_count += 1;
        self.total_time += elapsed;
    }
}

/// Summary of an [`Entry`] as reported by [`Profiler::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub call_count: u64,
    pub total_time: Duration,
    pub mean_time: Duration,
}

impl From<&Entry> for Stats {
    fn from(entry: &Entry) -> Self {
        Self {
            call_count: entry.call_count(),
            total_time: entry.total_time(),
            mean_time: entry.mean_time(),
        }
    }
}

/// Call counts and wall-clock totals keyed by name.
///
/// Every profiler owns its data. Two profilers never see each other's
/// timings, and dropping a profiler discards what it collected.
#[derive(Debug, Clone, Default)]
pub struct Profiler {
    entries: HashMap<String, Entry>,
}

impl Profiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` and records its wall time under `name`.
    pub fn time<T>(&mut self, name: &str, f: impl FnOnce() -> T) -> T {
        let _timer = self.start(name);
        f()
    }

    /// Like [`time`](Self::time), keyed by the type name of `f`.
    ///
    /// For a plain function this is its path, e.g. `my_crate::solve`; closures
    /// get a compiler-generated name containing `{{closure}}`.
    pub fn time_fn<F, T>(&mut self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        let name = std::any::type_name::<F>();
        self.time(name, f)
    }

    /// Starts a timer that records under `name` when dropped.
    pub fn start(&mut self, name: impl Into<String>) -> ScopedTimer<'_> {
        ScopedTimer::new(self, name.into(), Instant::now())
    }

    /// Adds one call of `elapsed` to `name`.
    pub fn record(&mut self, name: &str, elapsed: Duration) {
        let entry = self.entries.entry(name.to_owned()).or_default();
        entry.add(elapsed);
        debug!(
            name,
            elapsed_us = elapsed.as_secs_f64() * 1e6,
            calls = entry.call_count,
            "profiled call"
        );
    }

    pub fn get(&self, name: &str) -> Option<Stats> {
        self.entries.get(name).map(Stats::from)
    }

    /// Stats for every recorded name.
    pub fn stats(&self) -> HashMap<String, Stats> {
        self.entries
            .iter()
            .map(|(name, entry)| (name.clone(), Stats::from(entry)))
            .collect()
    }

    /// Stats sorted by total time, largest first.
    pub fn ranked(&self) -> Vec<(String, Stats)> {
        let mut ranked: Vec<_> = self.stats().into_iter().collect();
        ranked.sort_by(|a, b| b.1.total_time.cmp(&a.1.total_time).then_with(|| a.0.cmp(&b.0)));
        ranked
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clears all recorded timings.
    pub fn reset(&mut self) {
        self.entries.clear();
    }
}

/// Runs `f` once and returns its result alongside the elapsed wall time.
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}
