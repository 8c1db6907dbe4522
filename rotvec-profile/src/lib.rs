//! Call counting and wall-clock timing with explicitly owned profilers.
//!
//! A [`Profiler`] accumulates, per name, how many times something ran and for
//! how long. Timings are taken either around a closure ([`Profiler::time`]) or
//! for a scope via the [`ScopedTimer`] guard returned by [`Profiler::start`].
//!
//! ```
//! use rotvec_profile::Profiler;
//!
//! let mut profiler = Profiler::new();
//! let sum: u64 = profiler.time("sum", || (1..=100).sum());
//! {
//!     let _timer = profiler.start("scope");
//! }
//!
//! assert_eq!(sum, 5050);
//! assert_eq!(profiler.get("sum").unwrap().call_count, 1);
//! assert_eq!(profiler.stats().len(), 2);
//! ```
//!
//! Each recorded call is also emitted as a `tracing` debug event.

pub mod profiler;
pub mod timer;

pub use profiler::{measure, Entry, Profiler, Stats};
pub use timer::ScopedTimer;
