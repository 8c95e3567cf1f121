use std::path::Path;

use serde::{Deserialize, Serialize};

use aeromed_core::models::base::AirBase;
use aeromed_core::models::profile::{PilotProfile, ProfessionalProfile};
use aeromed_core::models::user::User;

use crate::error::StoreError;

/// Initial directory data loaded at startup: users come from the external
/// identity provider, bases and profiles from the squadron roster.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Seed {
    pub bases: Vec<AirBase>,
    pub users: Vec<User>,
    pub pilot_profiles: Vec<PilotProfile>,
    pub professional_profiles: Vec<ProfessionalProfile>,
}

impl Seed {
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let contents = std::fs::read_to_string(path).map_err(|source| StoreError::SeedRead {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }
}
