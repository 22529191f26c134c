//! Fly-through planning and playback.

use super::{FlySource, ViewpointController};
use crate::collaborators::{
    CameraCarrier, PlaybackTimer, SceneSelector, StatusSink, WaypointPath,
};
use crate::error::VantageError;
use crate::fly::{self, FlyParameters, PlaybackState, PlaybackStatus};
use crate::viewpoint::ViewpointStore;

impl<C, S, T, K> ViewpointController<C, S, T, K>
where
    C: CameraCarrier,
    S: SceneSelector,
    T: PlaybackTimer,
    K: StatusSink,
{
    /// Plan a fly-through over the saved viewpoints. Any running playback
    /// stops and the next start begins at the first frame. Later edits to
    /// the viewpoint list drop the plan so the next start flies the
    /// edited list.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` has zero inbetweens or a zero frame
    /// duration.
    pub fn fly_viewpoints(
        &mut self,
        params: FlyParameters,
    ) -> Result<(), VantageError> {
        params.validate()?;
        self.fly.source = FlySource::Viewpoints;
        let sequence = self.plan_sequence(&params)?;
        self.install_sequence(params, sequence);
        Ok(())
    }

    /// Plan a fly-through along `path` at `params.path_height` above the
    /// terrain. Any running playback stops and the next start begins at
    /// the first frame. The path is kept so a parameter change, the path
    /// height included, replans along it.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` has zero inbetweens or a zero frame
    /// duration.
    pub fn fly_path<P: WaypointPath + 'static>(
        &mut self,
        path: P,
        params: FlyParameters,
    ) -> Result<(), VantageError> {
        params.validate()?;
        self.fly.source = FlySource::Path(Box::new(path));
        let sequence = self.plan_sequence(&params)?;
        self.install_sequence(params, sequence);
        Ok(())
    }

    /// Replace the fly-through parameters. The planned sequence is dropped
    /// and rebuilt on the next start from whatever it was planned from,
    /// the saved viewpoints or the last flown path; running playback
    /// stops.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` has zero inbetweens or a zero frame
    /// duration. The previous parameters stay in effect.
    pub fn set_fly_parameters(
        &mut self,
        params: FlyParameters,
    ) -> Result<(), VantageError> {
        if let Err(e) = params.validate() {
            log::warn!("rejected fly-through parameters: {e}");
            return Err(e);
        }
        self.stop_fly_through();
        self.fly.params = params;
        self.fly.sequence = None;
        Ok(())
    }

    /// Start or resume playback. Resuming from pause keeps the frame index.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::EmptySequence`] when there is nothing to
    /// play, or a parameter error if the sequence has to be planned and the
    /// parameters are invalid. An empty plan is not kept, so a later start
    /// plans again.
    pub fn start_fly_through(&mut self) -> Result<(), VantageError> {
        let params = self.fly.params.clone();
        params.validate()?;
        if self.fly.sequence.is_none() {
            let sequence = self.plan_sequence(&params)?;
            if sequence.is_empty() {
                return Err(VantageError::EmptySequence);
            }
            log::debug!("replanned fly-through of {} frames", sequence.len());
            self.fly.sequence = Some(sequence);
            self.fly.frame = 0;
        }
        if self.fly.sequence.as_deref().unwrap_or_default().is_empty() {
            return Err(VantageError::EmptySequence);
        }

        self.timer.start(params.frame_interval());
        log::debug!(
            "fly-through {} at frame {}",
            if self.fly.state == PlaybackState::Paused {
                "resumed"
            } else {
                "started"
            },
            self.fly.frame
        );
        self.fly.state = PlaybackState::Playing;
        Ok(())
    }

    /// Pause playback, keeping the frame index.
    pub fn pause_fly_through(&mut self) {
        if self.fly.state == PlaybackState::Playing {
            self.timer.cancel();
            self.fly.state = PlaybackState::Paused;
            log::debug!("fly-through paused at frame {}", self.fly.frame);
        }
    }

    /// Stop playback and rewind to the first frame.
    pub fn stop_fly_through(&mut self) {
        self.timer.cancel();
        self.fly.frame = 0;
        if self.fly.state != PlaybackState::Idle {
            log::debug!("fly-through stopped");
        }
        self.fly.state = PlaybackState::Idle;
    }

    /// Show the current frame and advance. Called when the timer is due.
    /// Returns whether a frame was shown.
    pub fn fly_tick(&mut self) -> bool {
        if self.fly.state != PlaybackState::Playing {
            return false;
        }
        let Some(sequence) = self.fly.sequence.as_ref() else {
            return false;
        };
        let Some(viewpoint) = sequence.get(self.fly.frame) else {
            self.fly.frame = 0;
            return false;
        };

        self.carrier.apply_viewpoint(viewpoint, false, false);
        self.status.playback_progress(&PlaybackStatus::at_frame(
            self.fly.frame,
            self.fly.params.millis_per_frame,
        ));

        self.fly.frame += 1;
        if self.fly.frame >= sequence.len() {
            self.fly.frame = 0;
            if !self.fly.params.looping {
                self.timer.cancel();
                self.fly.state = PlaybackState::Idle;
                log::debug!("fly-through finished");
                self.status.playback_finished();
            }
        }
        true
    }

    /// Current playback state.
    #[must_use]
    pub fn playback_state(&self) -> PlaybackState {
        self.fly.state
    }

    /// Parameters for the current or next fly-through.
    #[must_use]
    pub fn fly_parameters(&self) -> &FlyParameters {
        &self.fly.params
    }

    /// Planned frames, if any.
    #[must_use]
    pub fn fly_sequence(&self) -> Option<&[ViewpointStore]> {
        self.fly.sequence.as_deref()
    }

    /// Next frame to show.
    #[must_use]
    pub fn frame_index(&self) -> usize {
        self.fly.frame
    }

    /// Whether playback is running or paused.
    #[must_use]
    pub fn is_flying(&self) -> bool {
        self.fly.state != PlaybackState::Idle
    }

    /// Drop a plan made from the saved viewpoints; playback stops. Called
    /// whenever the viewpoint list changes.
    pub(super) fn invalidate_viewpoint_plan(&mut self) {
        if matches!(self.fly.source, FlySource::Viewpoints)
            && self.fly.sequence.is_some()
        {
            self.stop_fly_through();
            self.fly.sequence = None;
        }
    }

    fn plan_sequence(
        &self,
        params: &FlyParameters,
    ) -> Result<Vec<ViewpointStore>, VantageError> {
        match &self.fly.source {
            FlySource::Viewpoints => fly::plan_from_viewpoints(
                self.viewpoints.as_slice(),
                params.num_inbetweens,
            ),
            FlySource::Path(path) => fly::plan_from_path(
                &**path,
                &self.carrier.camera(),
                &self.carrier.scene_bounds(),
                params.num_inbetweens,
                params.path_height,
            ),
        }
    }

    fn install_sequence(
        &mut self,
        params: FlyParameters,
        sequence: Vec<ViewpointStore>,
    ) {
        self.timer.cancel();
        log::debug!(
            "planned fly-through of {} frames ({} inbetweens, {} ms/frame)",
            sequence.len(),
            params.num_inbetweens,
            params.millis_per_frame
        );
        self.fly.params = params;
        self.fly.sequence = Some(sequence);
        self.fly.frame = 0;
        self.fly.state = PlaybackState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use web_time::{Duration, Instant};

    use crate::collaborators::PlaybackTimer;
    use crate::controller::testing::{controller, Call, LinePath, TestController};
    use crate::error::VantageError;
    use crate::fly::{FlyParameters, PlaybackState};

    fn params(num_inbetweens: u32, looping: bool) -> FlyParameters {
        FlyParameters {
            num_inbetweens,
            millis_per_frame: 40,
            looping,
            ..FlyParameters::default()
        }
    }

    /// Two saved viewpoints at distinct poses.
    fn with_two() -> TestController {
        let mut controller = controller();
        controller.add_viewpoint(0, "first");
        controller.scroll(1.0, false);
        controller.add_viewpoint(1, "second");
        let _ = controller.carrier_mut().take();
        controller
    }

    #[test]
    fn empty_list_cannot_start() {
        let mut controller = controller();
        assert!(matches!(
            controller.start_fly_through(),
            Err(VantageError::EmptySequence)
        ));
        assert_eq!(controller.playback_state(), PlaybackState::Idle);
        assert!(!controller.timer().is_running());
        assert!(controller.fly_sequence().is_none());
    }

    #[test]
    fn start_after_adding_viewpoints_plans_again() {
        let mut controller = controller();
        assert!(controller.start_fly_through().is_err());

        controller.add_viewpoint(0, "first");
        controller.scroll(1.0, false);
        controller.add_viewpoint(1, "second");
        controller.start_fly_through().unwrap();
        assert_eq!(controller.fly_sequence().unwrap().len(), 11);
        assert!(controller.is_flying());
    }

    #[test]
    fn viewpoint_edits_drop_the_tour() {
        let mut controller = with_two();
        controller.fly_viewpoints(params(4, false)).unwrap();
        controller.start_fly_through().unwrap();
        assert!(controller.fly_tick());

        controller.add_viewpoint(2, "third");
        assert!(controller.fly_sequence().is_none());
        assert_eq!(controller.playback_state(), PlaybackState::Idle);
        assert!(!controller.timer().is_running());

        controller.start_fly_through().unwrap();
        let sequence = controller.fly_sequence().unwrap();
        assert_eq!(sequence.len(), 9);
        assert_eq!(sequence[8].name(), "third");

        let third = controller.viewpoints().as_slice()[2].clone();
        assert!(controller.remove_viewpoint(&third).is_some());
        assert!(controller.fly_sequence().is_none());

        controller.fly_viewpoints(params(4, false)).unwrap();
        let list = controller.viewpoints().clone();
        controller.set_viewpoints(list);
        assert!(controller.fly_sequence().is_none());
    }

    #[test]
    fn viewpoint_edits_keep_a_path_plan() {
        let mut controller = with_two();
        controller
            .fly_path(LinePath { points: 2 }, params(4, false))
            .unwrap();
        controller.add_viewpoint(2, "third");
        assert_eq!(controller.fly_sequence().unwrap().len(), 5);
    }

    #[test]
    fn zero_inbetweens_rejected() {
        let mut controller = with_two();
        assert!(matches!(
            controller.fly_viewpoints(params(0, false)),
            Err(VantageError::InvalidInbetweens(0))
        ));
        assert!(controller.set_fly_parameters(params(0, false)).is_err());
        assert_eq!(controller.fly_parameters().num_inbetweens, 10);
    }

    #[test]
    fn plays_to_end_and_finishes_once() {
        let mut controller = with_two();
        controller.fly_viewpoints(params(4, false)).unwrap();
        let sequence = controller.fly_sequence().unwrap().to_vec();
        assert_eq!(sequence.len(), 5);

        controller.start_fly_through().unwrap();
        assert_eq!(
            controller.timer().interval,
            Some(Duration::from_millis(40))
        );
        for _ in 0..sequence.len() {
            assert!(controller.fly_tick());
        }
        assert!(!controller.fly_tick());

        let applied: Vec<_> = controller
            .carrier()
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Apply(vp, recenter, animate) => {
                    assert!(!recenter && !animate);
                    Some(vp.clone())
                }
                _ => None,
            })
            .collect();
        assert_eq!(applied, sequence);

        let status = controller.status();
        assert_eq!(status.finished, 1);
        assert_eq!(status.progress.len(), 5);
        assert_eq!(status.progress[3].frame, 3);
        assert_eq!(status.progress[3].elapsed, Duration::from_millis(120));
        assert_eq!(controller.playback_state(), PlaybackState::Idle);
        assert_eq!(controller.frame_index(), 0);
        assert!(!controller.timer().is_running());
    }

    #[test]
    fn looping_wraps_to_first_frame() {
        let mut controller = with_two();
        controller.fly_viewpoints(params(4, true)).unwrap();
        controller.start_fly_through().unwrap();
        for _ in 0..5 {
            assert!(controller.fly_tick());
        }
        assert_eq!(controller.frame_index(), 0);
        assert!(controller.is_flying());

        let _ = controller.carrier_mut().take();
        assert!(controller.fly_tick());
        let first = controller.fly_sequence().unwrap()[0].clone();
        assert_eq!(
            controller.carrier_mut().take(),
            vec![Call::Apply(first, false, false)]
        );
        assert_eq!(controller.status().finished, 0);
    }

    #[test]
    fn pause_keeps_frame_and_stop_rewinds() {
        let mut controller = with_two();
        controller.fly_viewpoints(params(4, false)).unwrap();
        controller.start_fly_through().unwrap();
        assert!(controller.fly_tick());
        assert!(controller.fly_tick());

        controller.pause_fly_through();
        assert_eq!(controller.playback_state(), PlaybackState::Paused);
        assert_eq!(controller.frame_index(), 2);
        assert!(!controller.timer().is_running());
        assert!(!controller.fly_tick());

        controller.start_fly_through().unwrap();
        assert_eq!(controller.frame_index(), 2);
        assert_eq!(controller.playback_state(), PlaybackState::Playing);

        controller.stop_fly_through();
        assert_eq!(controller.frame_index(), 0);
        assert_eq!(controller.playback_state(), PlaybackState::Idle);
        assert!(!controller.is_flying());
        assert_eq!(controller.status().finished, 0);
    }

    #[test]
    fn parameter_change_replans_on_start() {
        let mut controller = with_two();
        controller.fly_viewpoints(params(4, false)).unwrap();
        controller.start_fly_through().unwrap();
        assert!(controller.fly_tick());

        controller.set_fly_parameters(params(2, false)).unwrap();
        assert!(controller.fly_sequence().is_none());
        assert_eq!(controller.playback_state(), PlaybackState::Idle);

        controller.start_fly_through().unwrap();
        assert_eq!(controller.fly_sequence().unwrap().len(), 3);
        assert_eq!(controller.frame_index(), 0);
    }

    #[test]
    fn replanning_stops_playback() {
        let mut controller = with_two();
        controller.fly_viewpoints(params(4, false)).unwrap();
        controller.start_fly_through().unwrap();
        assert!(controller.fly_tick());
        controller.fly_viewpoints(params(3, false)).unwrap();
        assert_eq!(controller.playback_state(), PlaybackState::Idle);
        assert_eq!(controller.frame_index(), 0);
        assert!(!controller.timer().is_running());
    }

    #[test]
    fn path_fly_through_uses_waypoints() {
        let mut controller = controller();
        let params = FlyParameters {
            path_height: 8.0,
            ..params(5, false)
        };
        controller.fly_path(LinePath { points: 3 }, params).unwrap();
        let sequence = controller.fly_sequence().unwrap();
        assert_eq!(sequence.len(), 11);
        assert_eq!(sequence[10].name(), "wp2");
        assert!(sequence.iter().all(|v| (v.location().z - 8.0).abs() < 1e-9));
    }

    #[test]
    fn path_height_change_replans_along_path() {
        let mut controller = controller();
        let params = FlyParameters {
            path_height: 8.0,
            ..params(5, false)
        };
        controller.fly_path(LinePath { points: 3 }, params).unwrap();
        assert_eq!(controller.fly_sequence().unwrap().len(), 11);

        controller
            .set_option("fly", "path_height", serde_json::json!(20.0))
            .unwrap();
        assert!(controller.fly_sequence().is_none());

        controller.start_fly_through().unwrap();
        let sequence = controller.fly_sequence().unwrap();
        assert_eq!(sequence.len(), 11);
        assert_eq!(sequence[10].name(), "wp2");
        assert!(sequence
            .iter()
            .all(|v| (v.location().z - 20.0).abs() < 1e-9));
        assert!((sequence[10].distance() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn update_plays_when_timer_fires() {
        let mut controller = with_two();
        controller.fly_viewpoints(params(4, false)).unwrap();
        controller.start_fly_through().unwrap();
        let now = Instant::now();

        controller.update(now);
        assert!(controller.carrier().applied().is_empty());

        controller.timer.fire();
        controller.update(now);
        assert_eq!(controller.carrier().applied().len(), 1);
        assert_eq!(controller.frame_index(), 1);
    }
}
