//! Fatigue-Injury Index (IFL).
//!
//! `intensity × workload × location weight`, rounded to two decimals.

use crate::location::{location_weight, BodyLocation};
use crate::scoring::round2;

/// Index for a complaint at a free-text location.
///
/// `None` when intensity or workload is missing or zero, or when the
/// location carries no weight. A zero reading is indistinguishable from an
/// unanswered field in the stored records, so both are treated alike.
pub fn fatigue_injury_index(
    intensity: Option<f64>,
    workload_score: Option<f64>,
    location: &str,
) -> Option<f64> {
    weighted_index(intensity, workload_score, location_weight(location))
}

/// Same as [`fatigue_injury_index`] for an already-parsed region.
pub fn fatigue_injury_index_at(
    intensity: Option<f64>,
    workload_score: Option<f64>,
    location: BodyLocation,
) -> Option<f64> {
    weighted_index(intensity, workload_score, location.weight())
}

fn weighted_index(intensity: Option<f64>, workload_score: Option<f64>, weight: u8) -> Option<f64> {
    let intensity = intensity.filter(|v| is_present(*v))?;
    let workload = workload_score.filter(|v| is_present(*v))?;
    if weight == 0 {
        return None;
    }
    Some(round2(intensity * workload * f64::from(weight)))
}

fn is_present(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}
