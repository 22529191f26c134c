//! Input vocabulary: platform-agnostic events, drag buttons, and bindable
//! key actions.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions and arrow-key steps.
pub mod keyboard;

pub use event::{DragButton, InputEvent, MouseButton};
pub use keyboard::{KeyAction, StepDirection};
