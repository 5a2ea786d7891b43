use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Label shown when the model classifies the tract as disadvantaged.
pub const DISADVANTAGED_LABEL: &str = "Disadvantaged Community";

/// Label shown for every other classification value.
pub const NOT_DISADVANTAGED_LABEL: &str = "Not Disadvantaged";

/// Classification returned by the predict endpoint.
///
/// Replaced wholesale on every successful response; failed requests leave the
/// previous prediction in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Prediction {
    /// Binary class indicator, `1` for a disadvantaged community.
    pub prediction: f64,
    /// Probability of the positive class, in `[0, 1]`.
    pub confidence: f64,
}

impl Prediction {
    pub fn is_disadvantaged(&self) -> bool {
        self.prediction == 1.0
    }

    /// Human-readable classification label.
    pub fn label(&self) -> &'static str {
        if self.is_disadvantaged() {
            DISADVANTAGED_LABEL
        } else {
            NOT_DISADVANTAGED_LABEL
        }
    }

    /// Confidence as a whole percentage, rounded to the nearest point.
    pub fn confidence_percent(&self) -> i64 {
        (self.confidence * 100.0).round() as i64
    }
}
