//! NASA-TLX weighted workload score.

use aeromed_core::models::questionnaire::{NasaTlxRatings, NasaTlxWeights};

/// Top of the subscale rating scale, and so of the overall score.
pub const MAX_RATING: f64 = 100.0;

/// Weighted mean of the six subscale ratings: `Σ(rating × weight) / Σ(weight)`.
///
/// `None` when every weight is zero, since the mean is undefined.
pub fn overall_workload_score(ratings: &NasaTlxRatings, weights: &NasaTlxWeights) -> Option<f64> {
    let pairs = [
        (ratings.mental, weights.mental),
        (ratings.physical, weights.physical),
        (ratings.temporal, weights.temporal),
        (ratings.performance, weights.performance),
        (ratings.effort, weights.effort),
        (ratings.frustration, weights.frustration),
    ];

    let weight_sum: u32 = pairs.iter().map(|(_, w)| u32::from(*w)).sum();
    if weight_sum == 0 {
        return None;
    }

    let weighted: f64 = pairs.iter().map(|(r, w)| r * f64::from(*w)).sum();
    Some(weighted / f64::from(weight_sum))
}
