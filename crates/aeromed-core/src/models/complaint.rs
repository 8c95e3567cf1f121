use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// Upper bound of the pain intensity scale.
pub const MAX_INTENSITY: f64 = 10.0;

/// Form codes for flight impact, indexed by level.
pub const FLIGHT_IMPACT_CODES: [&str; 4] =
    ["sem_impacto", "impacto_leve", "impacto_moderado", "incapaz_voar"];

/// A musculoskeletal complaint registered by a pilot.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Complaint {
    pub id: Uuid,
    pub pilot_user_id: Uuid,
    /// Body region, as submitted by the form.
    pub location: String,
    /// Pain intensity, 0–10.
    pub intensity: Option<f64>,
    pub loss_of_movement: bool,
    pub used_medication: bool,
    /// 0 = no impact .. 3 = unable to fly.
    pub flight_impact: Option<u8>,
    pub onset: Option<String>,
    pub history: Option<String>,
    pub submitted_at: jiff::Timestamp,
}

/// Complaint wizard payload. Each step of the form arrives as its own object.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewComplaint {
    pub step2_location: Option<LocationStep>,
    #[serde(default)]
    pub step3_details: Option<DetailsStep>,
    #[serde(default)]
    pub step4_history: Option<HistoryStep>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LocationStep {
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DetailsStep {
    pub intensity: Option<f64>,
    #[serde(default)]
    pub loss_of_movement: bool,
    #[serde(default)]
    pub medication_used: bool,
    /// Level 0–3, or one of [`FLIGHT_IMPACT_CODES`] on input.
    #[serde(default, deserialize_with = "flight_impact_level")]
    #[ts(type = "number | string | null")]
    pub flight_impact: Option<u8>,
}

/// Accepts a numeric level or a form code. Unrecognised codes read as no
/// impact.
fn flight_impact_level<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Level(u8),
        Code(String),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Level(level) => level,
        Raw::Code(code) => FLIGHT_IMPACT_CODES
            .iter()
            .zip(0u8..)
            .find_map(|(known, level)| (*known == code).then_some(level))
            .unwrap_or(0),
    }))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HistoryStep {
    pub onset: Option<String>,
    pub history: Option<String>,
}

impl NewComplaint {
    /// Check the payload and turn it into a complaint owned by `pilot_user_id`.
    pub fn into_complaint(
        self,
        pilot_user_id: Uuid,
        now: jiff::Timestamp,
    ) -> Result<Complaint, CoreError> {
        let location = self
            .step2_location
            .and_then(|step| step.location)
            .filter(|loc| !loc.trim().is_empty())
            .ok_or_else(|| CoreError::MissingField("location".to_string()))?;

        let details = self.step3_details.unwrap_or_default();
        if let Some(intensity) = details.intensity
            && !(0.0..=MAX_INTENSITY).contains(&intensity)
        {
            return Err(CoreError::InvalidValue {
                field: "intensity".to_string(),
                reason: format!("{intensity} is outside [0, {MAX_INTENSITY}]"),
            });
        }
        if let Some(impact) = details.flight_impact
            && impact > 3
        {
            return Err(CoreError::InvalidValue {
                field: "flight_impact".to_string(),
                reason: format!("{impact} is outside [0, 3]"),
            });
        }

        let history = self.step4_history.unwrap_or_default();
        Ok(Complaint {
            id: Uuid::new_v4(),
            pilot_user_id,
            location,
            intensity: details.intensity,
            loss_of_movement: details.loss_of_movement,
            used_medication: details.medication_used,
            flight_impact: details.flight_impact,
            onset: history.onset,
            history: history.history,
            submitted_at: now,
        })
    }
}
