use crate::collaborators::StatusSink;
use crate::fly::PlaybackStatus;

/// Status sink that reports fly-through progress through `log`.
///
/// Keeps the most recent status so a headless host can show it on demand.
#[derive(Debug, Clone, Default)]
pub struct LogStatusSink {
    last: Option<PlaybackStatus>,
    finished: bool,
}

impl LogStatusSink {
    /// A sink with nothing reported yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent progress report.
    #[must_use]
    pub fn last_status(&self) -> Option<PlaybackStatus> {
        self.last
    }

    /// Whether playback ran to the end since the last progress report.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl StatusSink for LogStatusSink {
    fn playback_progress(&mut self, status: &PlaybackStatus) {
        log::debug!("{status}");
        self.last = Some(*status);
        self.finished = false;
    }

    fn playback_finished(&mut self) {
        log::info!("fly-through finished");
        self.finished = true;
    }
}
