use thiserror::Error;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("{}", summarize(.errors))]
    Invalid {
        instrument_id: String,
        errors: Vec<ValidationError>,
    },

    #[error("unknown item '{subscale_id}' for instrument '{instrument_id}'")]
    UnknownSubscale {
        instrument_id: String,
        subscale_id: String,
    },
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
