use std::collections::BTreeMap;

use serde::Serialize;

use aeromed_core::models::user::Role;

use crate::store::Store;

/// Aggregate figures for the reviewer dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_pilots: usize,
    pub total_complaints: usize,
    /// Mean reported intensity, one decimal. Zero when nothing was reported.
    pub average_intensity: f64,
    pub complaints_by_region: BTreeMap<String, u64>,
    pub flight_impact_distribution: BTreeMap<String, u64>,
    /// Keyed by `YYYY-MM` (UTC).
    pub complaints_per_month: BTreeMap<String, u64>,
    pub loss_of_movement: BTreeMap<String, u64>,
    pub medication_use: BTreeMap<String, u64>,
    pub onset_distribution: BTreeMap<String, u64>,
}

pub fn flight_impact_label(impact: Option<u8>) -> &'static str {
    match impact {
        Some(0) => "No impact",
        Some(1) => "Mild impact",
        Some(2) => "Moderate impact",
        Some(3) => "Unable to fly",
        _ => "Unknown",
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

fn bump(map: &mut BTreeMap<String, u64>, key: impl Into<String>) {
    *map.entry(key.into()).or_insert(0) += 1;
}

impl Store {
    pub async fn report_summary(&self) -> ReportSummary {
        let tables = self.tables.read().await;

        let mut summary = ReportSummary {
            total_pilots: tables.users.values().filter(|u| u.role == Role::Pilot).count(),
            total_complaints: tables.complaints.len(),
            average_intensity: 0.0,
            complaints_by_region: BTreeMap::new(),
            flight_impact_distribution: BTreeMap::new(),
            complaints_per_month: BTreeMap::new(),
            loss_of_movement: BTreeMap::new(),
            medication_use: BTreeMap::new(),
            onset_distribution: BTreeMap::new(),
        };

        let (mut intensity_sum, mut intensity_count) = (0.0, 0u32);
        for complaint in &tables.complaints {
            if let Some(intensity) = complaint.intensity {
                intensity_sum += intensity;
                intensity_count += 1;
            }
            bump(&mut summary.complaints_by_region, complaint.location.as_str());
            bump(
                &mut summary.flight_impact_distribution,
                flight_impact_label(complaint.flight_impact),
            );
            bump(
                &mut summary.complaints_per_month,
                complaint.submitted_at.strftime("%Y-%m").to_string(),
            );
            bump(&mut summary.loss_of_movement, yes_no(complaint.loss_of_movement));
            bump(&mut summary.medication_use, yes_no(complaint.used_medication));
            bump(
                &mut summary.onset_distribution,
                complaint.onset.as_deref().unwrap_or("Not informed"),
            );
        }

        if intensity_count > 0 {
            let mean = intensity_sum / f64::from(intensity_count);
            summary.average_intensity = (mean * 10.0).round() / 10.0;
        }
        summary
    }
}
