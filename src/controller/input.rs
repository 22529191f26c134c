//! Pointer, wheel and keyboard handling.

use glam::DVec2;
use web_time::Instant;

use super::ViewpointController;
use crate::collaborators::{
    CameraCarrier, PlaybackTimer, SceneSelector, StatusSink,
};
use crate::input::{DragButton, InputEvent, KeyAction, StepDirection};
use crate::kinetic::Release;

impl<C, S, T, K> ViewpointController<C, S, T, K>
where
    C: CameraCarrier,
    S: SceneSelector,
    T: PlaybackTimer,
    K: StatusSink,
{
    /// Process a platform-agnostic input event, tracking button and
    /// modifier state across events.
    pub fn handle_input(&mut self, event: InputEvent, now: Instant) {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = DVec2::new(x, y);
                self.pointer_moved(self.cursor, self.held, self.precise, now);
            }
            InputEvent::MouseButton { button, pressed } => {
                let button = DragButton::from(button);
                if pressed {
                    self.held = Some(button);
                    self.pointer_pressed(self.cursor, now);
                } else {
                    if self.held == Some(button) {
                        self.held = None;
                    }
                    self.pointer_released(self.cursor, now);
                }
            }
            InputEvent::Scroll { delta } => self.scroll(delta, self.precise),
            InputEvent::ModifiersChanged { control } => self.precise = control,
        }
    }

    /// Pointer moved to `position` with `button` held.
    ///
    /// The delta is measured from the last tracked position and dropped
    /// when there is none or when either axis jumps past the configured
    /// threshold. Moving with no button held forgets the position.
    pub fn pointer_moved(
        &mut self,
        position: DVec2,
        button: Option<DragButton>,
        precise: bool,
        now: Instant,
    ) {
        let delta = self.pointer_delta(position);
        self.last_pointer = button.map(|_| position);
        let Some(button) = button else {
            return;
        };

        let scale = if precise {
            self.options.precision_scale
        } else {
            1.0
        };
        match button {
            DragButton::Pan if precise => {
                self.carrier.drag(scale * delta.x, scale * delta.y);
            }
            DragButton::Pan => {
                let applied = self.kinetic.drag(delta, now);
                self.carrier.drag(applied.x, applied.y);
            }
            DragButton::Translate => {
                self.carrier
                    .translate_in_screen_plane(-scale * delta.x, -scale * delta.y);
            }
            DragButton::Rotate => {
                self.carrier.rotate(scale * delta.y, scale * delta.x);
            }
        }
    }

    /// A button went down at `position`. Any momentum is dropped.
    pub fn pointer_pressed(&mut self, position: DVec2, now: Instant) {
        self.last_pointer = Some(position);
        self.kinetic.press(now);
    }

    /// A button came up at `position`. A fast pan keeps coasting; anything
    /// else re-resolves the look-at pivot right away.
    pub fn pointer_released(&mut self, position: DVec2, now: Instant) {
        self.last_pointer = Some(position);
        if self.kinetic.release(now) == Release::Settled {
            let _ = self.center_pick();
        }
    }

    /// Wheel turned by `delta` steps.
    pub fn scroll(&mut self, delta: f64, precise: bool) {
        let sign = self.options.scroll_direction.sign();
        if self.zoom {
            self.carrier.magnify(-sign * delta);
            return;
        }
        let speed = if precise {
            self.options.precise_dolly_scale
        } else {
            self.options.dolly_scale
        };
        self.carrier.dolly(sign * speed * delta);
        let _ = self.center_pick();
    }

    /// One arrow-key rotation step.
    pub fn step(&mut self, direction: StepDirection) {
        let (pitch, yaw) = direction.rotation();
        let step = self.options.key_step;
        self.carrier.rotate(pitch * step, yaw * step);
    }

    /// Run the action bound to `key`. Returns `false` for unbound keys.
    pub fn handle_key(&mut self, key: &str) -> bool {
        let Some(action) = self.keybindings.lookup(key) else {
            return false;
        };
        match action {
            KeyAction::StepLeft => self.step(StepDirection::Left),
            KeyAction::StepRight => self.step(StepDirection::Right),
            KeyAction::StepUp => self.step(StepDirection::Up),
            KeyAction::StepDown => self.step(StepDirection::Down),
            KeyAction::PreviousViewpoint => {
                let _ = self.previous_viewpoint();
            }
            KeyAction::NextViewpoint => {
                let _ = self.next_viewpoint();
            }
            KeyAction::ToggleZoom => self.zoom = !self.zoom,
            KeyAction::StopFlyThrough => self.stop_fly_through(),
        }
        true
    }

    fn pointer_delta(&self, position: DVec2) -> DVec2 {
        let Some(last) = self.last_pointer else {
            return DVec2::ZERO;
        };
        let delta = position - last;
        let threshold = self.options.jump_threshold;
        if delta.x.abs() > threshold || delta.y.abs() > threshold {
            DVec2::ZERO
        } else {
            delta
        }
    }
}
