use aeromed_core::models::questionnaire::IpaqAnswers;

use crate::scoring::{Domain, ScoreEntry, ScoreRange, ScoreType, Subscale};
use crate::Instrument;

/// IPAQ: International Physical Activity Questionnaire, short form.
/// Days per week and minutes per day for vigorous, moderate and walking
/// activity, plus daily sitting time.
pub struct Ipaq;

impl Instrument for Ipaq {
    fn id(&self) -> &str {
        "ipaq"
    }

    fn name(&self) -> &str {
        "IPAQ"
    }

    fn domains(&self) -> &[Domain] {
        static DOMAINS: std::sync::LazyLock<Vec<Domain>> = std::sync::LazyLock::new(|| {
            let days = ScoreRange {
                min: 0.0,
                max: 7.0,
                step: Some(1.0),
            };
            let minutes = ScoreRange {
                min: 0.0,
                max: 1440.0,
                step: Some(1.0),
            };

            vec![
                band("vigorous", "Vigorous Activity", "8.0 MET", days, minutes),
                band("moderate", "Moderate Activity", "4.0 MET", days, minutes),
                Domain {
                    id: "walking".to_string(),
                    name: "Walking".to_string(),
                    subscales: vec![
                        item("walking_days", "Walking days", ScoreType::Days, days),
                        item("walking_minutes", "Walking minutes per day", ScoreType::Minutes, minutes),
                    ],
                    description: Some("3.3 MET".to_string()),
                },
                Domain {
                    id: "sitting".to_string(),
                    name: "Sitting".to_string(),
                    subscales: vec![item(
                        "sitting_minutes",
                        "Sitting minutes per weekday",
                        ScoreType::Minutes,
                        minutes,
                    )],
                    description: None,
                },
            ]
        });
        &DOMAINS
    }
}

fn band(id: &str, name: &str, met: &str, days: ScoreRange, minutes: ScoreRange) -> Domain {
    Domain {
        id: id.to_string(),
        name: name.to_string(),
        subscales: vec![
            item(
                &format!("{id}_activity_days"),
                &format!("{name} days"),
                ScoreType::Days,
                days,
            ),
            item(
                &format!("{id}_activity_minutes"),
                &format!("{name} minutes per day"),
                ScoreType::Minutes,
                minutes,
            ),
        ],
        description: Some(met.to_string()),
    }
}

fn item(id: &str, name: &str, score_type: ScoreType, range: ScoreRange) -> Subscale {
    Subscale {
        id: id.to_string(),
        name: name.to_string(),
        score_type,
        range,
        description: None,
    }
}

/// Entries for every answered field, keyed like the instrument's items.
pub fn entries(answers: &IpaqAnswers) -> Vec<ScoreEntry> {
    [
        ("vigorous_activity_days", answers.vigorous_activity_days),
        ("vigorous_activity_minutes", answers.vigorous_activity_minutes),
        ("moderate_activity_days", answers.moderate_activity_days),
        ("moderate_activity_minutes", answers.moderate_activity_minutes),
        ("walking_days", answers.walking_days),
        ("walking_minutes", answers.walking_minutes),
        ("sitting_minutes", answers.sitting_minutes),
    ]
    .into_iter()
    .filter_map(|(id, value)| value.map(|v| ScoreEntry::new(id, f64::from(v))))
    .collect()
}
