use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Who a user is within the squadron health programme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum Role {
    Pilot,
    HealthProfessional,
    Manager,
}

impl Role {
    /// Professionals and managers may review complaints and reports.
    pub fn is_reviewer(self) -> bool {
        matches!(self, Role::HealthProfessional | Role::Manager)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
}
