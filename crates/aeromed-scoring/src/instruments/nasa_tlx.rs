use aeromed_core::models::questionnaire::{NasaTlxRatings, NasaTlxWeights};

use crate::scoring::{Domain, ScoreEntry, ScoreRange, ScoreType, Subscale};
use crate::workload::MAX_RATING;
use crate::Instrument;

/// NASA-TLX: NASA Task Load Index.
/// Six subscales rated 0–100, each weighted 0–5 by pairwise comparison.
pub struct NasaTlx;

const SUBSCALES: [(&str, &str); 6] = [
    ("mental", "Mental Demand"),
    ("physical", "Physical Demand"),
    ("temporal", "Temporal Demand"),
    ("performance", "Performance"),
    ("effort", "Effort"),
    ("frustration", "Frustration"),
];

impl Instrument for NasaTlx {
    fn id(&self) -> &str {
        "nasa_tlx"
    }

    fn name(&self) -> &str {
        "NASA-TLX"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            let rating = ScoreRange {
                min: 0.0,
                max: MAX_RATING,
                step: None,
            };
            let weight = ScoreRange {
                min: 0.0,
                max: 5.0,
                step: Some(1.0),
            };

            let subscales = |suffix: &str, label: &str, score_type: ScoreType, range: ScoreRange| {
                SUBSCALES
                    .iter()
                    .map(|(id, name)| Subscale {
                        id: format!("{id}_{suffix}"),
                        name: format!("{name} {label}"),
                        score_type,
                        range,
                        description: None,
                    })
                    .collect::<Vec<_>>()
            };

            vec![
                Domain {
                    id: "ratings".to_string(),
                    name: "Ratings".to_string(),
                    subscales: subscales("rating", "rating", ScoreType::Rating, rating),
                    description: Some("0 = very low, 100 = very high".to_string()),
                },
                Domain {
                    id: "weights".to_string(),
                    name: "Weights".to_string(),
                    subscales: subscales("weight", "weight", ScoreType::Weight, weight),
                    description: Some(
                        "Times each subscale was chosen across the 15 pairwise comparisons"
                            .to_string(),
                    ),
                },
            ]
        });
        &DOMAINS
    }
}

/// Entries for all twelve items.
pub fn entries(ratings: &NasaTlxRatings, weights: &NasaTlxWeights) -> Vec<ScoreEntry> {
    let rating_values = [
        ratings.mental,
        ratings.physical,
        ratings.temporal,
        ratings.performance,
        ratings.effort,
        ratings.frustration,
    ];
    let weight_values = [
        weights.mental,
        weights.physical,
        weights.temporal,
        weights.performance,
        weights.effort,
        weights.frustration,
    ];

    let rating_entries = SUBSCALES
        .iter()
        .zip(rating_values)
        .map(|((id, _), value)| ScoreEntry::new(format!("{id}_rating"), value));
    let weight_entries = SUBSCALES
        .iter()
        .zip(weight_values)
        .map(|((id, _), value)| ScoreEntry::new(format!("{id}_weight"), f64::from(value)));

    rating_entries.chain(weight_entries).collect()
}
