use serde::{Deserialize, Serialize};

/// Controller actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// step_left = "ArrowLeft"
/// next_viewpoint = "PageDown"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Rotate one step left.
    StepLeft,
    /// Rotate one step right.
    StepRight,
    /// Rotate one step up.
    StepUp,
    /// Rotate one step down.
    StepDown,
    /// Go to the previous saved viewpoint.
    PreviousViewpoint,
    /// Go to the next saved viewpoint.
    NextViewpoint,
    /// Switch the wheel between dolly and magnify.
    ToggleZoom,
    /// Stop fly-through playback.
    StopFlyThrough,
}

/// Fixed-increment rotation from the arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// Yaw left.
    Left,
    /// Yaw right.
    Right,
    /// Pitch up.
    Up,
    /// Pitch down.
    Down,
}

impl StepDirection {
    /// `(pitch, yaw)` unit increments.
    #[must_use]
    pub fn rotation(self) -> (f64, f64) {
        match self {
            Self::Left => (0.0, 1.0),
            Self::Right => (0.0, -1.0),
            Self::Up => (1.0, 0.0),
            Self::Down => (-1.0, 0.0),
        }
    }
}
