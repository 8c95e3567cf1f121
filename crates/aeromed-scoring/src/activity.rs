//! IPAQ short-form physical activity classification.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use aeromed_core::models::questionnaire::IpaqAnswers;

/// MET multipliers per intensity band.
pub const VIGOROUS_MET: f64 = 8.0;
pub const MODERATE_MET: f64 = 4.0;
pub const WALKING_MET: f64 = 3.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ActivityLevel {
    #[serde(rename = "Not informed")]
    NotInformed,
    #[serde(rename = "Insufficiently Active")]
    InsufficientlyActive,
    #[serde(rename = "Active")]
    Active,
    #[serde(rename = "Very Active")]
    VeryActive,
}

impl ActivityLevel {
    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::NotInformed => "Not informed",
            ActivityLevel::InsufficientlyActive => "Insufficiently Active",
            ActivityLevel::Active => "Active",
            ActivityLevel::VeryActive => "Very Active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A submitted IPAQ report. Fields left blank on the form are zero here;
/// the absence of a report altogether is `Option::None` at the call site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ActivityReport {
    pub vigorous_days: u32,
    pub vigorous_minutes: u32,
    pub moderate_days: u32,
    pub moderate_minutes: u32,
    pub walking_days: u32,
    pub walking_minutes: u32,
    pub sitting_minutes: Option<u32>,
}

impl ActivityReport {
    /// Build a report from raw stored answers.
    ///
    /// The moderate-days answer is what marks a questionnaire as filled in,
    /// so `None` is returned when it is null regardless of the other fields.
    pub fn from_answers(answers: &IpaqAnswers) -> Option<Self> {
        let moderate_days = answers.moderate_activity_days?;
        Some(Self {
            vigorous_days: answers.vigorous_activity_days.unwrap_or(0),
            vigorous_minutes: answers.vigorous_activity_minutes.unwrap_or(0),
            moderate_days,
            moderate_minutes: answers.moderate_activity_minutes.unwrap_or(0),
            walking_days: answers.walking_days.unwrap_or(0),
            walking_minutes: answers.walking_minutes.unwrap_or(0),
            sitting_minutes: answers.sitting_minutes,
        })
    }

    pub fn met_summary(&self) -> MetSummary {
        let vigorous = band_met(VIGOROUS_MET, self.vigorous_days, self.vigorous_minutes);
        let moderate = band_met(MODERATE_MET, self.moderate_days, self.moderate_minutes);
        let walking = band_met(WALKING_MET, self.walking_days, self.walking_minutes);

        MetSummary {
            vigorous,
            moderate,
            walking,
            total: vigorous + moderate + walking,
            total_days: self
                .vigorous_days
                .saturating_add(self.moderate_days)
                .saturating_add(self.walking_days),
            vigorous_moderate_minutes: self
                .vigorous_days
                .saturating_mul(self.vigorous_minutes)
                .saturating_add(self.moderate_days.saturating_mul(self.moderate_minutes)),
        }
    }
}

fn band_met(met: f64, days: u32, minutes: u32) -> f64 {
    met * f64::from(days) * f64::from(minutes)
}

/// Weekly MET-minutes per intensity band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetSummary {
    pub vigorous: f64,
    pub moderate: f64,
    pub walking: f64,
    pub total: f64,
    pub total_days: u32,
    /// Weekly minutes spent in vigorous or moderate activity.
    pub vigorous_moderate_minutes: u32,
}

/// Classify a report. `None` means no questionnaire was submitted.
///
/// Rules are checked in order and the first match wins:
/// 1. very active: 3+ vigorous days with 1500+ MET-minutes, or 7+ total
///    days with 3000+ MET-minutes;
/// 2. active: 3+ vigorous days, 5+ moderate days, or 5+ total days with
///    600+ vigorous and moderate MET-minutes;
/// 3. otherwise insufficiently active.
pub fn classify_activity(report: Option<&ActivityReport>) -> ActivityLevel {
    let Some(report) = report else {
        return ActivityLevel::NotInformed;
    };
    let met = report.met_summary();

    if (report.vigorous_days >= 3 && met.total >= 1500.0)
        || (met.total_days >= 7 && met.total >= 3000.0)
    {
        ActivityLevel::VeryActive
    } else if report.vigorous_days >= 3
        || report.moderate_days >= 5
        || (met.total_days >= 5 && met.vigorous + met.moderate >= 600.0)
    {
        ActivityLevel::Active
    } else {
        ActivityLevel::InsufficientlyActive
    }
}
