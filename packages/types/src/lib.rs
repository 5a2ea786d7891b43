pub use anyhow::{Error, Result, anyhow, bail};
pub use serde_json::Value;

pub mod indicator;
pub mod prediction;

pub use indicator::{Indicator, InputRecord};
pub use prediction::Prediction;

pub mod json {
    pub use serde_json::*;
}
