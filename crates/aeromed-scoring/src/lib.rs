//! aeromed-scoring
//!
//! Health scoring engine. Pure data and arithmetic, no I/O: BMI
//! classification, IPAQ activity level, NASA-TLX workload aggregation and
//! the Fatigue-Injury Index, plus the questionnaire definitions used to
//! validate submitted answers.

pub mod activity;
pub mod bmi;
pub mod error;
pub mod fatigue;
pub mod indices;
pub mod instruments;
pub mod location;
pub mod scoring;
pub mod workload;

use error::ScoringError;
use scoring::{Domain, ScoreEntry, ValidationError};

/// Trait implemented by each questionnaire the pilots fill in.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "ipaq", "nasa_tlx").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "IPAQ", "NASA-TLX").
    fn name(&self) -> &str;

    /// The domains and items this instrument collects.
    fn domains(&self) -> &[Domain];

    /// Number of answerable items across all domains.
    fn item_count(&self) -> usize {
        self.domains().iter().map(|d| d.subscales.len()).sum()
    }

    /// Validate a set of score entries against this instrument's rules.
    fn validate_scores(&self, scores: &[ScoreEntry]) -> Vec<ValidationError> {
        let all_subscales: Vec<_> = self
            .domains()
            .iter()
            .flat_map(|d| &d.subscales)
            .collect();

        let mut errors = Vec::new();
        for entry in scores {
            if let Some(subscale) = all_subscales.iter().find(|s| s.id == entry.subscale_id)
                && !subscale.range.contains(entry.value)
            {
                errors.push(ValidationError {
                    subscale_id: entry.subscale_id.clone(),
                    value: entry.value,
                    expected_range: subscale.range,
                    score_type: subscale.score_type,
                    message: format!(
                        "{}: {} value {} is outside range [{}, {}]",
                        self.name(),
                        subscale.name,
                        entry.value,
                        subscale.range.min,
                        subscale.range.max,
                    ),
                });
            }
        }
        errors
    }

    /// Like [`Instrument::validate_scores`], but also rejects entries that do
    /// not belong to this instrument and folds the outcome into a `Result`.
    fn check_scores(&self, scores: &[ScoreEntry]) -> Result<(), ScoringError> {
        let known = |id: &str| {
            self.domains()
                .iter()
                .flat_map(|d| &d.subscales)
                .any(|s| s.id == id)
        };
        if let Some(entry) = scores.iter().find(|e| !known(&e.subscale_id)) {
            return Err(ScoringError::UnknownSubscale {
                instrument_id: self.id().to_string(),
                subscale_id: entry.subscale_id.clone(),
            });
        }

        let errors = self.validate_scores(scores);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ScoringError::Invalid {
                instrument_id: self.id().to_string(),
                errors,
            })
        }
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::ipaq::Ipaq),
        Box::new(instruments::nasa_tlx::NasaTlx),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Validate `scores` against the instrument registered as `id`.
pub fn check_instrument_scores(id: &str, scores: &[ScoreEntry]) -> Result<(), ScoringError> {
    get_instrument(id)
        .ok_or_else(|| ScoringError::UnknownInstrument(id.to_string()))?
        .check_scores(scores)
}
