use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Whether wheel scrolling dollies/magnifies with or against the scroll
/// direction.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ScrollDirection {
    /// Scrolling forward pulls the camera back.
    #[default]
    Against,
    /// Scrolling forward pushes the camera in.
    With,
}

impl ScrollDirection {
    /// Multiplier applied to wheel deltas.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Against => -1.0,
            Self::With => 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controller", inline)]
#[serde(default)]
/// Input-to-camera policy constants.
pub struct ControllerOptions {
    /// Wheel direction for dolly and magnify.
    #[schemars(title = "Scroll Direction")]
    pub scroll_direction: ScrollDirection,
    /// Pointer jumps larger than this on either axis are ignored.
    #[schemars(skip)]
    pub jump_threshold: f64,
    /// Delta multiplier while the precision modifier is held.
    #[schemars(title = "Precision Scale", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub precision_scale: f64,
    /// Dolly per wheel step.
    #[schemars(title = "Dolly Speed", range(min = 0.1, max = 20.0), extend("step" = 0.1))]
    pub dolly_scale: f64,
    /// Dolly per wheel step while the precision modifier is held.
    #[schemars(title = "Precise Dolly Speed", range(min = 0.01, max = 2.0), extend("step" = 0.01))]
    pub precise_dolly_scale: f64,
    /// Rotation per arrow-key step.
    #[schemars(skip)]
    pub key_step: f64,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            scroll_direction: ScrollDirection::Against,
            jump_threshold: 100.0,
            precision_scale: 0.1,
            dolly_scale: 2.0,
            precise_dolly_scale: 0.2,
            key_step: 1.0,
        }
    }
}
