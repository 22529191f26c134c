use web_time::{Duration, Instant};

use crate::collaborators::PlaybackTimer;

/// Fixed-interval playback timer polled from the host's frame loop.
///
/// At most one tick is reported per poll; a host that stalls resumes at the
/// normal rate instead of bursting through missed frames.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    /// Time between ticks
    interval: Duration,
    /// Next tick time, `None` while stopped
    next_due: Option<Instant>,
}

impl Default for IntervalTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl IntervalTimer {
    /// A stopped timer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            interval: Duration::ZERO,
            next_due: None,
        }
    }

    /// Start ticking every `interval`, with the first tick one interval
    /// after `now`.
    pub fn start_at(&mut self, interval: Duration, now: Instant) {
        self.interval = interval;
        self.next_due = Some(now + interval);
    }

    /// Current tick interval.
    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl PlaybackTimer for IntervalTimer {
    fn start(&mut self, interval: Duration) {
        self.start_at(interval, Instant::now());
    }

    fn cancel(&mut self) {
        self.next_due = None;
    }

    fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}
