//! The viewpoint controller.
//!
//! [`ViewpointController`] sits between the host's input events and its
//! camera. It owns the transient input state (pointer tracking, held
//! button, precision modifier, momentum), the saved viewpoint list, and the
//! fly-through playback state machine. Methods are split by concern:
//!
//! - `input` - pointer, wheel and keyboard handling
//! - `viewpoints` - saved viewpoint list operations
//! - `playback` - fly-through planning and playback
//!
//! Everything runs on the host's event thread; nothing here blocks or
//! spawns.

mod input;
mod playback;
mod viewpoints;

use std::path::Path;

use glam::DVec2;
use web_time::Instant;

use crate::collaborators::{
    CameraCarrier, PlaybackTimer, SceneSelector, StatusSink, WaypointPath,
};
use crate::error::VantageError;
use crate::fly::{FlyParameters, PlaybackState};
use crate::input::DragButton;
use crate::kinetic::{CoastStep, KineticScroller};
use crate::options::{ControllerOptions, KeybindingOptions, Options};
use crate::viewpoint::{ViewpointList, ViewpointStore};

/// What a fly-through sequence is planned from.
#[derive(Default)]
enum FlySource {
    /// The saved viewpoint list.
    #[default]
    Viewpoints,
    /// A path tool, re-queried at the current path height on every plan.
    Path(Box<dyn WaypointPath>),
}

/// Fly-through playback state.
#[derive(Default)]
struct FlyThrough {
    /// Parameters the current sequence was (or will be) built from.
    params: FlyParameters,
    source: FlySource,
    /// Planned frames; `None` until built, after parameters change, or
    /// after the viewpoint list it was planned from changed.
    sequence: Option<Vec<ViewpointStore>>,
    /// Next frame to show.
    frame: usize,
    state: PlaybackState,
}

/// Orchestrates input, saved viewpoints and fly-through playback over a
/// camera carrier.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// controller.handle_input(event, Instant::now());
/// // Once per frame:
/// controller.update(Instant::now());
/// ```
pub struct ViewpointController<C, S, T, K> {
    carrier: C,
    selector: S,
    timer: T,
    status: K,

    options: ControllerOptions,
    keybindings: KeybindingOptions,
    kinetic: KineticScroller,

    viewpoints: ViewpointList,
    fly: FlyThrough,

    /// Last tracked pointer position; `None` while no button is held.
    last_pointer: Option<DVec2>,
    /// Cursor position from the most recent move event.
    cursor: DVec2,
    /// Camera operation of the held mouse button.
    held: Option<DragButton>,
    /// Whether the precision modifier is held.
    precise: bool,
    /// Viewport center in pixels.
    center: DVec2,
    /// Wheel magnifies instead of dollying.
    zoom: bool,
}

impl<C, S, T, K> ViewpointController<C, S, T, K>
where
    C: CameraCarrier,
    S: SceneSelector,
    T: PlaybackTimer,
    K: StatusSink,
{
    /// Controller over the given collaborators.
    #[must_use]
    pub fn new(
        carrier: C,
        selector: S,
        timer: T,
        status: K,
        options: Options,
    ) -> Self {
        let camera = carrier.camera();
        Self {
            carrier,
            selector,
            timer,
            status,
            options: options.controller,
            keybindings: options.keybindings,
            kinetic: KineticScroller::new(options.kinetic),
            viewpoints: ViewpointList::new(),
            fly: FlyThrough {
                params: options.fly,
                ..FlyThrough::default()
            },
            last_pointer: None,
            cursor: DVec2::ZERO,
            held: None,
            precise: false,
            center: (camera.viewport * 0.5).floor(),
            zoom: false,
        }
    }

    /// The camera carrier.
    #[must_use]
    pub fn carrier(&self) -> &C {
        &self.carrier
    }

    /// Mutable access to the camera carrier.
    pub fn carrier_mut(&mut self) -> &mut C {
        &mut self.carrier
    }

    /// The scene selector used for center picks.
    #[must_use]
    pub fn selector(&self) -> &S {
        &self.selector
    }

    /// The playback timer.
    #[must_use]
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// The playback status sink.
    #[must_use]
    pub fn status(&self) -> &K {
        &self.status
    }

    /// Input policy constants.
    #[must_use]
    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    /// Momentum model.
    #[must_use]
    pub fn kinetic(&self) -> &KineticScroller {
        &self.kinetic
    }

    /// Apply new options. The fly-through sequence is rebuilt on next
    /// start when the fly parameters changed.
    pub fn set_options(&mut self, options: Options) {
        self.options = options.controller;
        self.keybindings = options.keybindings;
        self.kinetic.set_options(options.kinetic);
        if options.fly != self.fly.params {
            if let Err(e) = self.set_fly_parameters(options.fly) {
                log::warn!("keeping previous fly-through parameters: {e}");
            }
        }
    }

    /// All current options, including the fly-through parameters.
    #[must_use]
    pub fn all_options(&self) -> Options {
        Options {
            controller: self.options.clone(),
            kinetic: self.kinetic.options().clone(),
            fly: self.fly.params.clone(),
            keybindings: self.keybindings.clone(),
        }
    }

    /// Set a single option by section and field name.
    ///
    /// # Errors
    ///
    /// Returns [`VantageError::OptionsParse`] for an unknown field or a
    /// value of the wrong type, or a parameter error for fly-through
    /// values that cannot drive playback. Nothing changes on error.
    pub fn set_option(
        &mut self,
        section: &str,
        field: &str,
        value: serde_json::Value,
    ) -> Result<(), VantageError> {
        let updated = self.all_options().with_field(section, field, value)?;
        updated.fly.validate()?;
        self.set_options(updated);
        Ok(())
    }

    /// Load the preset `name` from `presets_dir` and apply it.
    ///
    /// # Errors
    ///
    /// Returns the load error, or a parameter error if the preset's
    /// fly-through values cannot drive playback.
    pub fn load_preset(
        &mut self,
        name: &str,
        presets_dir: &Path,
    ) -> Result<(), VantageError> {
        let options = Options::load(&presets_dir.join(format!("{name}.toml")))?;
        options.fly.validate()?;
        log::info!("applying preset '{name}'");
        self.set_options(options);
        Ok(())
    }

    /// Switch the wheel between magnify (`true`) and dolly.
    pub fn enable_zoom(&mut self, enable: bool) {
        self.zoom = enable;
    }

    /// Whether the wheel magnifies.
    #[must_use]
    pub fn is_zoom(&self) -> bool {
        self.zoom
    }

    /// The viewport changed size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.center = DVec2::new(f64::from(width / 2), f64::from(height / 2));
        self.carrier.resize(width, height);
    }

    /// Re-resolve the look-at pivot to whatever lies under the viewport
    /// center. Returns whether anything was hit.
    pub fn center_pick(&mut self) -> bool {
        let ray = self.carrier.pick_ray(self.center);
        match self.selector.pick(&ray) {
            Some(hit) => {
                self.carrier.set_look_at(hit.point);
                true
            }
            None => false,
        }
    }

    /// Per-frame driver: advance coasting, then show the next fly-through
    /// frame if the timer is due.
    pub fn update(&mut self, now: Instant) {
        match self.kinetic.tick(now) {
            CoastStep::Drag(delta) => self.carrier.drag(delta.x, delta.y),
            CoastStep::Stopped => {
                let _ = self.center_pick();
            }
            CoastStep::Idle => {}
        }
        if self.timer.poll(now) {
            let _ = self.fly_tick();
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording collaborators for controller tests.

    use glam::DVec3;
    use web_time::{Duration, Instant};

    use super::ViewpointController;
    use crate::collaborators::{
        CameraCarrier, CameraSnapshot, PickHit, PlaybackTimer, Ray,
        SceneBounds, SceneSelector, StatusSink, WaypointPath,
    };
    use crate::fly::PlaybackStatus;
    use crate::options::Options;
    use crate::viewpoint::ViewpointStore;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Call {
        Drag(f64, f64),
        Translate(f64, f64),
        Rotate(f64, f64),
        Dolly(f64),
        Magnify(f64),
        SetLookAt(DVec3),
        Resize(u32, u32),
        Apply(ViewpointStore, bool, bool),
    }

    #[derive(Debug, Default)]
    pub(crate) struct RecordingCarrier {
        pub(crate) calls: Vec<Call>,
    }

    impl RecordingCarrier {
        pub(crate) fn take(&mut self) -> Vec<Call> {
            std::mem::take(&mut self.calls)
        }

        pub(crate) fn applied(&self) -> Vec<&ViewpointStore> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Apply(vp, _, _) => Some(vp),
                    _ => None,
                })
                .collect()
        }
    }

    impl CameraCarrier for RecordingCarrier {
        fn drag(&mut self, dx: f64, dy: f64) {
            self.calls.push(Call::Drag(dx, dy));
        }
        fn translate_in_screen_plane(&mut self, dx: f64, dy: f64) {
            self.calls.push(Call::Translate(dx, dy));
        }
        fn rotate(&mut self, d_pitch: f64, d_yaw: f64) {
            self.calls.push(Call::Rotate(d_pitch, d_yaw));
        }
        fn dolly(&mut self, amount: f64) {
            self.calls.push(Call::Dolly(amount));
        }
        fn magnify(&mut self, amount: f64) {
            self.calls.push(Call::Magnify(amount));
        }
        fn set_look_at(&mut self, point: DVec3) {
            self.calls.push(Call::SetLookAt(point));
        }
        fn resize(&mut self, width: u32, height: u32) {
            self.calls.push(Call::Resize(width, height));
        }
        fn camera(&self) -> CameraSnapshot {
            CameraSnapshot::default()
        }
        fn scene_bounds(&self) -> SceneBounds {
            SceneBounds {
                min: DVec3::splat(-1000.0),
                max: DVec3::splat(1000.0),
            }
        }
        fn capture_viewpoint(&self, name: &str) -> ViewpointStore {
            ViewpointStore::from_pose(
                name,
                DVec3::new(self.calls.len() as f64 * 10.0, -100.0, 100.0),
                DVec3::new(0.0, 1.0, -1.0),
                141.0,
                1.0,
            )
        }
        fn apply_viewpoint(
            &mut self,
            viewpoint: &ViewpointStore,
            recenter: bool,
            animate: bool,
        ) {
            self.calls
                .push(Call::Apply(viewpoint.clone(), recenter, animate));
        }
    }

    /// Selector that always returns the same hit (or always misses).
    pub(crate) struct FixedSelector {
        pub(crate) hit: Option<DVec3>,
    }

    impl SceneSelector for FixedSelector {
        fn pick(&self, _ray: &Ray) -> Option<PickHit> {
            self.hit.map(|point| PickHit {
                point,
                normal: DVec3::Z,
                object: 7,
            })
        }
    }

    /// Timer that ticks only when told to.
    #[derive(Debug, Default)]
    pub(crate) struct ManualTimer {
        pub(crate) interval: Option<Duration>,
        pub(crate) pending: bool,
    }

    impl ManualTimer {
        pub(crate) fn fire(&mut self) {
            self.pending = true;
        }
    }

    impl PlaybackTimer for ManualTimer {
        fn start(&mut self, interval: Duration) {
            self.interval = Some(interval);
        }
        fn cancel(&mut self) {
            self.interval = None;
            self.pending = false;
        }
        fn is_running(&self) -> bool {
            self.interval.is_some()
        }
        fn poll(&mut self, _now: Instant) -> bool {
            let due = self.is_running() && self.pending;
            self.pending = false;
            due
        }
    }

    #[derive(Debug, Default)]
    pub(crate) struct RecordingSink {
        pub(crate) progress: Vec<PlaybackStatus>,
        pub(crate) finished: usize,
    }

    impl StatusSink for RecordingSink {
        fn playback_progress(&mut self, status: &PlaybackStatus) {
            self.progress.push(*status);
        }
        fn playback_finished(&mut self) {
            self.finished += 1;
        }
    }

    pub(crate) struct LinePath {
        pub(crate) points: usize,
    }

    impl WaypointPath for LinePath {
        fn waypoint_viewpoint(
            &self,
            index: usize,
            height: f64,
            _camera: &CameraSnapshot,
            _bounds: &SceneBounds,
        ) -> ViewpointStore {
            ViewpointStore::from_pose(
                format!("wp{index}"),
                DVec3::new(index as f64 * 50.0, 0.0, height),
                DVec3::new(1.0, 0.0, -0.2),
                height * 5.0,
                1.0,
            )
        }
        fn number_of_points(&self) -> usize {
            self.points
        }
    }

    pub(crate) type TestController = ViewpointController<
        RecordingCarrier,
        FixedSelector,
        ManualTimer,
        RecordingSink,
    >;

    pub(crate) const GROUND_HIT: DVec3 = DVec3::new(3.0, 4.0, 0.0);

    pub(crate) fn controller() -> TestController {
        controller_with(Options::default(), Some(GROUND_HIT))
    }

    pub(crate) fn controller_with(
        options: Options,
        hit: Option<DVec3>,
    ) -> TestController {
        ViewpointController::new(
            RecordingCarrier::default(),
            FixedSelector { hit },
            ManualTimer::default(),
            RecordingSink::default(),
            options,
        )
    }
}
