use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Kinetic Scrolling", inline)]
#[serde(default)]
/// Momentum tuning. The defaults were tuned by eye on a desktop display.
pub struct KineticOptions {
    /// Pointer-delta to speed multiplier.
    #[schemars(skip)]
    pub velocity_scale: f64,
    /// Weight of the newest speed sample in the smoothed velocity.
    #[schemars(skip)]
    pub smoothing: f64,
    /// Release speed above which the drag keeps coasting.
    #[schemars(title = "Coast Threshold", range(min = 0.0, max = 1000.0), extend("step" = 1.0))]
    pub coast_threshold: f64,
    /// Fraction of the release speed carried into coasting.
    #[schemars(title = "Momentum", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub amplitude_factor: f64,
    /// Exponential decay time constant in milliseconds.
    #[schemars(title = "Decay (ms)", range(min = 10.0, max = 5000.0), extend("step" = 5.0))]
    pub time_constant_ms: f64,
    /// Coasting stops once a step would be shorter than this.
    #[schemars(skip)]
    pub min_step: f64,
}

impl Default for KineticOptions {
    fn default() -> Self {
        Self {
            velocity_scale: 100.0,
            smoothing: 0.8,
            coast_threshold: 10.0,
            amplitude_factor: 0.8,
            time_constant_ms: 325.0,
            min_step: 0.5,
        }
    }
}
