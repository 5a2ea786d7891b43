use enviroscreen_types::{Indicator, InputRecord, Prediction};
use thiserror::Error;

/// Raised when field input does not parse as a finite number.
///
/// The stored value is left unchanged, so the record stays serializable.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("'{raw}' does not parse as a number for {indicator}")]
pub struct FieldParseError {
    pub indicator: Indicator,
    pub raw: String,
}

/// Emitted to subscribers whenever session state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// A field value was updated.
    FieldChanged { indicator: Indicator, value: f64 },
    /// A submission went out.
    SubmissionStarted,
    /// A successful response replaced the stored prediction.
    ResultUpdated(Prediction),
    /// A submission failed; the stored prediction is untouched.
    SubmissionFailed,
}

/// Whether any submission is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Pending,
}

type Listener = Box<dyn FnMut(&FormEvent)>;

/// Single source of truth for one page session.
///
/// Owns the input record, the most recent prediction and the listeners that
/// re-render bound fields. All mutation happens through the methods below, on
/// the single event-driven thread of the page; listeners run synchronously
/// inside each mutation.
#[derive(Default)]
pub struct FormSession {
    record: InputRecord,
    result: Option<Prediction>,
    in_flight: usize,
    listeners: Vec<Listener>,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &InputRecord {
        &self.record
    }

    pub fn result(&self) -> Option<&Prediction> {
        self.result.as_ref()
    }

    pub fn phase(&self) -> SubmissionPhase {
        if self.in_flight > 0 {
            SubmissionPhase::Pending
        } else {
            SubmissionPhase::Idle
        }
    }

    /// Register a listener invoked on every state change.
    pub fn subscribe(&mut self, listener: impl FnMut(&FormEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self, event: FormEvent) {
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    /// Parse `raw` and store it under `indicator`.
    ///
    /// Surrounding whitespace is ignored. Input that does not parse as a
    /// finite number is rejected and the stored value stays as it was.
    pub fn set_field(&mut self, indicator: Indicator, raw: &str) -> Result<f64, FieldParseError> {
        let Some(value) = raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
        else {
            return Err(FieldParseError {
                indicator,
                raw: raw.to_string(),
            });
        };
        self.set_value(indicator, value);
        Ok(value)
    }

    /// Store a value directly, bypassing text parsing.
    pub fn set_value(&mut self, indicator: Indicator, value: f64) {
        self.record.set(indicator, value);
        self.notify(FormEvent::FieldChanged { indicator, value });
    }

    /// Mark a submission in flight and snapshot the record to send.
    ///
    /// The caller may keep editing fields while the request is outstanding;
    /// the snapshot is what goes on the wire.
    pub fn begin_submission(&mut self) -> InputRecord {
        self.in_flight += 1;
        let snapshot = self.record;
        self.notify(FormEvent::SubmissionStarted);
        snapshot
    }

    /// Record a successful response.
    ///
    /// The latest arrival wins, whatever the issuance order of overlapping
    /// submissions.
    pub fn complete_submission(&mut self, prediction: Prediction) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.result = Some(prediction);
        self.notify(FormEvent::ResultUpdated(prediction));
    }

    /// Record a failed submission; the displayed prediction, if any, stays.
    pub fn fail_submission(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.notify(FormEvent::SubmissionFailed);
    }
}
