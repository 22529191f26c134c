//! Shared utilities.
//!
//! Interpolation helpers plus the headless playback collaborators: an
//! interval timer and a logging status sink.

pub mod interpolation;
/// Fixed-interval playback timer.
pub mod interval_timer;
/// Status sink that reports through `log`.
pub mod status_log;

pub use interval_timer::IntervalTimer;
pub use status_log::LogStatusSink;
