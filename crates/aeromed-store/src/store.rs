use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use aeromed_core::models::base::AirBase;
use aeromed_core::models::complaint::Complaint;
use aeromed_core::models::notification::Notification;
use aeromed_core::models::opinion::HealthAssessment;
use aeromed_core::models::profile::{
    PilotProfile, PilotProfileUpdate, ProfessionalProfile, ProfessionalProfileUpdate,
};
use aeromed_core::models::questionnaire::{IpaqAssessment, NasaTlxAssessment};
use aeromed_core::models::user::{Role, User};

use crate::error::StoreError;
use crate::seed::Seed;

/// Backing tables. Row vectors keep insertion order, which is also
/// submission order.
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub(crate) users: HashMap<Uuid, User>,
    pub(crate) pilot_profiles: HashMap<Uuid, PilotProfile>,
    pub(crate) professional_profiles: HashMap<Uuid, ProfessionalProfile>,
    pub(crate) bases: Vec<AirBase>,
    pub(crate) complaints: Vec<Complaint>,
    pub(crate) ipaq: Vec<IpaqAssessment>,
    pub(crate) nasa_tlx: Vec<NasaTlxAssessment>,
    pub(crate) opinions: Vec<HealthAssessment>,
    pub(crate) notifications: Vec<Notification>,
}

impl Tables {
    pub(crate) fn user(&self, id: Uuid) -> Result<&User, StoreError> {
        self.users
            .get(&id)
            .ok_or(StoreError::NotFound { kind: "user", id })
    }

    pub(crate) fn complaint(&self, id: Uuid) -> Result<&Complaint, StoreError> {
        self.complaints
            .iter()
            .find(|c| c.id == id)
            .ok_or(StoreError::NotFound {
                kind: "complaint",
                id,
            })
    }
}

/// Shared handle to the record store. Cloning is cheap.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub(crate) tables: Arc<RwLock<Tables>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with users, bases and profiles.
    pub async fn from_seed(seed: Seed) -> Result<Self, StoreError> {
        let store = Self::new();
        for base in seed.bases {
            store.add_base(base).await;
        }
        for user in seed.users {
            store.add_user(user).await?;
        }
        {
            let mut tables = store.tables.write().await;
            for profile in seed.pilot_profiles {
                tables.pilot_profiles.insert(profile.user_id, profile);
            }
            for profile in seed.professional_profiles {
                tables.professional_profiles.insert(profile.user_id, profile);
            }
        }
        Ok(store)
    }

    /// Register a user. Pilots and health professionals get an empty profile.
    pub async fn add_user(&self, user: User) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        if tables.users.contains_key(&user.id) {
            return Err(StoreError::Duplicate {
                kind: "user",
                id: user.id,
            });
        }

        match user.role {
            Role::Pilot => {
                tables
                    .pilot_profiles
                    .entry(user.id)
                    .or_insert_with(|| PilotProfile {
                        user_id: user.id,
                        ..Default::default()
                    });
            }
            Role::HealthProfessional => {
                tables
                    .professional_profiles
                    .entry(user.id)
                    .or_insert_with(|| ProfessionalProfile {
                        user_id: user.id,
                        ..Default::default()
                    });
            }
            Role::Manager => {}
        }

        tracing::debug!(user_id = %user.id, role = ?user.role, "user added");
        tables.users.insert(user.id, user);
        Ok(())
    }

    pub async fn user(&self, id: Uuid) -> Result<User, StoreError> {
        self.tables.read().await.user(id).cloned()
    }

    pub async fn add_base(&self, base: AirBase) {
        self.tables.write().await.bases.push(base);
    }

    /// All air bases, sorted by name.
    pub async fn bases(&self) -> Vec<AirBase> {
        let mut bases = self.tables.read().await.bases.clone();
        bases.sort_by(|a, b| a.name.cmp(&b.name));
        bases
    }

    pub async fn pilot_profile(&self, user_id: Uuid) -> Option<PilotProfile> {
        self.tables.read().await.pilot_profiles.get(&user_id).cloned()
    }

    pub async fn professional_profile(&self, user_id: Uuid) -> Option<ProfessionalProfile> {
        self.tables
            .read()
            .await
            .professional_profiles
            .get(&user_id)
            .cloned()
    }

    pub async fn update_pilot_profile(
        &self,
        user_id: Uuid,
        update: PilotProfileUpdate,
    ) -> Result<PilotProfile, StoreError> {
        let mut tables = self.tables.write().await;
        tables.user(user_id)?;
        let profile = tables
            .pilot_profiles
            .entry(user_id)
            .or_insert_with(|| PilotProfile {
                user_id,
                ..Default::default()
            });
        profile.apply(update, jiff::Timestamp::now());
        Ok(profile.clone())
    }

    pub async fn update_professional_profile(
        &self,
        user_id: Uuid,
        update: ProfessionalProfileUpdate,
    ) -> Result<ProfessionalProfile, StoreError> {
        let mut tables = self.tables.write().await;
        tables.user(user_id)?;
        let profile = tables
            .professional_profiles
            .entry(user_id)
            .or_insert_with(|| ProfessionalProfile {
                user_id,
                ..Default::default()
            });
        profile.apply(update, jiff::Timestamp::now());
        Ok(profile.clone())
    }
}
