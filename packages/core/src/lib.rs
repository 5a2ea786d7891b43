//! Form state and prediction client for the CalEnviroScreen predictor.

pub mod client;
pub mod form;

pub use client::{BACKEND_ERROR_NOTICE, DEFAULT_ENDPOINT, PredictionClient, PredictionError};
pub use form::{FieldParseError, FormEvent, FormSession, SubmissionPhase};
