/// Platform-agnostic input events.
///
/// These are fed into
/// [`ViewpointController::handle_input`](crate::controller::ViewpointController::handle_input),
/// which tracks button and modifier state across events.
///
/// # Example
///
/// ```ignore
/// controller.handle_input(InputEvent::CursorMoved { x: 100.0, y: 200.0 }, now);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in pixels.
        x: f64,
        /// Vertical position in pixels.
        y: f64,
    },
    /// Mouse button pressed or released at the current cursor position.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel steps.
    Scroll {
        /// Scroll amount in wheel steps.
        delta: f64,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether the control key (precision mode) is held.
        control: bool,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

/// Camera operation bound to a held mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragButton {
    /// Slide the terrain along its plane, with momentum.
    Pan,
    /// Move the camera parallel to the screen.
    Translate,
    /// Orbit about the look-at pivot.
    Rotate,
}

impl From<MouseButton> for DragButton {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Self::Pan,
            MouseButton::Middle => Self::Translate,
            MouseButton::Right => Self::Rotate,
        }
    }
}

/// Only the three camera buttons convert; side and extra buttons come
/// back as the error so the host can ignore them.
#[cfg(feature = "winit")]
impl TryFrom<winit::event::MouseButton> for MouseButton {
    type Error = winit::event::MouseButton;

    fn try_from(
        button: winit::event::MouseButton,
    ) -> Result<Self, Self::Error> {
        match button {
            winit::event::MouseButton::Left => Ok(Self::Left),
            winit::event::MouseButton::Right => Ok(Self::Right),
            winit::event::MouseButton::Middle => Ok(Self::Middle),
            other => Err(other),
        }
    }
}
