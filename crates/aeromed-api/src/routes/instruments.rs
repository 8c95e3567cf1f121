use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use aeromed_scoring::error::ScoringError;
use aeromed_scoring::scoring::Domain;
use aeromed_scoring::{all_instruments, get_instrument, Instrument};

use crate::error::ApiError;

/// A questionnaire as offered to the pilot forms.
#[derive(Serialize)]
pub struct Questionnaire {
    id: String,
    name: String,
    item_count: usize,
    /// Endpoint that scores a filled-in form.
    scoring_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    domains: Option<Vec<Domain>>,
}

impl Questionnaire {
    fn summary(instrument: &dyn Instrument) -> Self {
        Self {
            id: instrument.id().to_string(),
            name: instrument.name().to_string(),
            item_count: instrument.item_count(),
            scoring_path: format!("/scoring/{}", instrument.id().replace('_', "-")),
            domains: None,
        }
    }
}

pub async fn list_instruments() -> Json<Vec<Questionnaire>> {
    Json(
        all_instruments()
            .iter()
            .map(|i| Questionnaire::summary(i.as_ref()))
            .collect(),
    )
}

/// Full item layout, ranges included, for rendering a form.
pub async fn get_instrument_detail(
    Path(id): Path<String>,
) -> Result<Json<Questionnaire>, ApiError> {
    let instrument = get_instrument(&id).ok_or(ScoringError::UnknownInstrument(id))?;
    Ok(Json(Questionnaire {
        domains: Some(instrument.domains().to_vec()),
        ..Questionnaire::summary(instrument.as_ref())
    }))
}
