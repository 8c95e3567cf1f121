use serde::{Deserialize, Serialize};
use uuid::Uuid;

use aeromed_core::models::complaint::Complaint;
use aeromed_core::models::notification::Notification;
use aeromed_core::models::opinion::HealthAssessment;
use aeromed_core::models::profile::PilotProfile;
use aeromed_core::models::questionnaire::{
    IpaqAnswers, IpaqAssessment, NasaTlxAssessment, NasaTlxRatings, NasaTlxWeights,
};
use aeromed_core::models::user::User;

use crate::error::StoreError;
use crate::store::{Store, Tables};

/// Optional filters for the reviewer complaint list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComplaintFilter {
    /// Case-insensitive substring of the pilot's name.
    pub search: Option<String>,
    /// Exact body region.
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComplaintSummary {
    pub id: Uuid,
    pub location: String,
    pub intensity: Option<f64>,
    pub pilot_name: String,
    pub submitted_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssessmentStatus {
    #[serde(rename = "Opinion available")]
    OpinionAvailable,
    #[serde(rename = "Awaiting assessment")]
    AwaitingAssessment,
}

/// A pilot's own complaint, as listed on their dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct OwnComplaintSummary {
    pub id: Uuid,
    pub main_complaint: String,
    pub submitted_at: jiff::Timestamp,
    pub assessment_status: AssessmentStatus,
}

/// An opinion together with the name of the professional who wrote it.
#[derive(Debug, Clone, Serialize)]
pub struct SignedOpinion {
    #[serde(flatten)]
    pub opinion: HealthAssessment,
    pub professional_name: Option<String>,
}

/// A complaint joined with everything recorded about it.
#[derive(Debug, Clone, Serialize)]
pub struct ComplaintRecord {
    pub complaint: Complaint,
    pub pilot: User,
    pub profile: Option<PilotProfile>,
    pub ipaq: Option<IpaqAssessment>,
    pub nasa_tlx: Option<NasaTlxAssessment>,
    pub opinion: Option<SignedOpinion>,
}

impl Tables {
    fn record(&self, complaint: &Complaint) -> Result<ComplaintRecord, StoreError> {
        let pilot = self.user(complaint.pilot_user_id)?.clone();
        // Later submissions supersede earlier ones.
        let ipaq = self
            .ipaq
            .iter()
            .rev()
            .find(|a| a.complaint_id == complaint.id)
            .cloned();
        let nasa_tlx = self
            .nasa_tlx
            .iter()
            .rev()
            .find(|a| a.complaint_id == complaint.id)
            .cloned();
        let opinion = self
            .opinions
            .iter()
            .rev()
            .find(|o| o.complaint_id == complaint.id)
            .map(|opinion| SignedOpinion {
                professional_name: self
                    .users
                    .get(&opinion.assessing_professional_id)
                    .map(|u| u.name.clone()),
                opinion: opinion.clone(),
            });

        Ok(ComplaintRecord {
            complaint: complaint.clone(),
            profile: self.pilot_profiles.get(&pilot.id).cloned(),
            pilot,
            ipaq,
            nasa_tlx,
            opinion,
        })
    }

    fn owned_complaint(&self, pilot_id: Uuid, complaint_id: Uuid) -> Result<&Complaint, StoreError> {
        let complaint = self.complaint(complaint_id)?;
        if complaint.pilot_user_id != pilot_id {
            return Err(StoreError::NotOwner {
                kind: "complaint",
                id: complaint_id,
                user_id: pilot_id,
            });
        }
        Ok(complaint)
    }
}

impl Store {
    /// Store a complaint and notify every health professional assigned to
    /// the pilot's base.
    pub async fn create_complaint(&self, complaint: Complaint) -> Result<Complaint, StoreError> {
        let mut tables = self.tables.write().await;
        let pilot = tables.user(complaint.pilot_user_id)?.clone();

        let base_id = tables
            .pilot_profiles
            .get(&pilot.id)
            .and_then(|p| p.base_id);
        if let Some(base_id) = base_id {
            let message = format!(
                "Pilot {} registered a new complaint of {}.",
                pilot.name, complaint.location
            );
            let link = format!("/complaint/{}", complaint.id);
            let recipients: Vec<Uuid> = tables
                .professional_profiles
                .values()
                .filter(|p| p.base_id == Some(base_id))
                .map(|p| p.user_id)
                .collect();

            tracing::info!(
                complaint_id = %complaint.id,
                recipients = recipients.len(),
                "notifying base health professionals"
            );
            for user_id in recipients {
                tables.notifications.push(Notification::new(
                    user_id,
                    message.clone(),
                    link.clone(),
                    complaint.submitted_at,
                ));
            }
        }

        tables.complaints.push(complaint.clone());
        Ok(complaint)
    }

    /// Reviewer list, newest first.
    pub async fn list_complaints(&self, filter: &ComplaintFilter) -> Vec<ComplaintSummary> {
        let tables = self.tables.read().await;
        let search = filter.search.as_deref().map(str::to_lowercase);

        tables
            .complaints
            .iter()
            .rev()
            .filter_map(|c| {
                let pilot = tables.users.get(&c.pilot_user_id)?;
                Some((c, pilot))
            })
            .filter(|(c, _)| {
                filter
                    .location
                    .as_deref()
                    .is_none_or(|location| c.location == location)
            })
            .filter(|(_, pilot)| {
                search
                    .as_deref()
                    .is_none_or(|needle| pilot.name.to_lowercase().contains(needle))
            })
            .map(|(c, pilot)| ComplaintSummary {
                id: c.id,
                location: c.location.clone(),
                intensity: c.intensity,
                pilot_name: pilot.name.clone(),
                submitted_at: c.submitted_at,
            })
            .collect()
    }

    pub async fn complaint_record(&self, id: Uuid) -> Result<ComplaintRecord, StoreError> {
        let tables = self.tables.read().await;
        let complaint = tables.complaint(id)?;
        tables.record(complaint)
    }

    /// A pilot's own complaints, newest first.
    pub async fn own_complaints(&self, pilot_id: Uuid) -> Vec<OwnComplaintSummary> {
        let tables = self.tables.read().await;
        tables
            .complaints
            .iter()
            .rev()
            .filter(|c| c.pilot_user_id == pilot_id)
            .map(|c| OwnComplaintSummary {
                id: c.id,
                main_complaint: c.location.clone(),
                submitted_at: c.submitted_at,
                assessment_status: if tables.opinions.iter().any(|o| o.complaint_id == c.id) {
                    AssessmentStatus::OpinionAvailable
                } else {
                    AssessmentStatus::AwaitingAssessment
                },
            })
            .collect()
    }

    /// Fetch one of the pilot's own complaints. Viewing it marks the
    /// professional opinion, if any, as seen.
    pub async fn own_complaint_record(
        &self,
        pilot_id: Uuid,
        complaint_id: Uuid,
    ) -> Result<ComplaintRecord, StoreError> {
        let mut tables = self.tables.write().await;
        tables.owned_complaint(pilot_id, complaint_id)?;

        if let Some(opinion) = tables
            .opinions
            .iter_mut()
            .rev()
            .find(|o| o.complaint_id == complaint_id)
        {
            opinion.pilot_has_seen = true;
        }

        let complaint = tables.complaint(complaint_id)?;
        tables.record(complaint)
    }

    /// Attach IPAQ answers to one of the pilot's complaints.
    pub async fn save_ipaq(
        &self,
        user_id: Uuid,
        complaint_id: Uuid,
        answers: IpaqAnswers,
    ) -> Result<IpaqAssessment, StoreError> {
        let mut tables = self.tables.write().await;
        tables.owned_complaint(user_id, complaint_id)?;

        let assessment = IpaqAssessment {
            id: Uuid::new_v4(),
            user_id,
            complaint_id,
            answers,
            assessed_at: jiff::Timestamp::now(),
        };
        tables.ipaq.push(assessment.clone());
        Ok(assessment)
    }

    /// Attach NASA-TLX answers to one of the pilot's complaints.
    pub async fn save_nasa_tlx(
        &self,
        user_id: Uuid,
        complaint_id: Uuid,
        ratings: NasaTlxRatings,
        weights: NasaTlxWeights,
        overall_score: Option<f64>,
    ) -> Result<NasaTlxAssessment, StoreError> {
        let mut tables = self.tables.write().await;
        tables.owned_complaint(user_id, complaint_id)?;

        let assessment = NasaTlxAssessment {
            id: Uuid::new_v4(),
            user_id,
            complaint_id,
            ratings,
            weights,
            overall_score,
            assessed_at: jiff::Timestamp::now(),
        };
        tables.nasa_tlx.push(assessment.clone());
        Ok(assessment)
    }

    /// Record a professional opinion and notify the pilot.
    pub async fn save_opinion(
        &self,
        professional_id: Uuid,
        complaint_id: Uuid,
        diagnosis: String,
        treatment_plan: String,
        notes: Option<String>,
    ) -> Result<HealthAssessment, StoreError> {
        let mut tables = self.tables.write().await;
        tables.user(professional_id)?;
        let complaint = tables.complaint(complaint_id)?;
        let (pilot_id, location) = (complaint.pilot_user_id, complaint.location.clone());

        let now = jiff::Timestamp::now();
        let opinion = HealthAssessment {
            id: Uuid::new_v4(),
            complaint_id,
            assessing_professional_id: professional_id,
            diagnosis,
            treatment_plan,
            notes,
            pilot_has_seen: false,
            assessed_at: now,
        };
        tables.opinions.push(opinion.clone());
        tables.notifications.push(Notification::new(
            pilot_id,
            format!("The professional opinion for your complaint of {location} is available."),
            format!("/my-complaints/{complaint_id}"),
            now,
        ));

        Ok(opinion)
    }
}
