use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Service record and anthropometrics of a pilot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PilotProfile {
    pub user_id: Uuid,
    pub rank: Option<String>,
    /// Military registration number.
    pub saram: Option<String>,
    pub whatsapp: Option<String>,
    pub birth_date: Option<jiff::civil::Date>,
    pub aircraft_type: Option<String>,
    pub weight_kg: Option<f64>,
    pub height_m: Option<f64>,
    pub base_id: Option<Uuid>,
    pub updated_at: Option<jiff::Timestamp>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProfessionalProfile {
    pub user_id: Uuid,
    /// Professional council registration (CRM / CREFITO).
    pub crm_crefito: Option<String>,
    pub whatsapp: Option<String>,
    pub base_id: Option<Uuid>,
    pub updated_at: Option<jiff::Timestamp>,
}

/// Fields a pilot may change on their own profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PilotProfileUpdate {
    pub rank: Option<String>,
    pub saram: Option<String>,
    pub whatsapp: Option<String>,
    pub birth_date: Option<jiff::civil::Date>,
    pub aircraft_type: Option<String>,
    pub weight_kg: Option<f64>,
    pub height_m: Option<f64>,
    pub base_id: Option<Uuid>,
}

/// Fields a health professional may change on their own profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProfessionalProfileUpdate {
    pub crm_crefito: Option<String>,
    pub whatsapp: Option<String>,
    pub base_id: Option<Uuid>,
}

impl PilotProfile {
    /// Overwrite every editable field, mirroring a full-form save.
    pub fn apply(&mut self, update: PilotProfileUpdate, now: jiff::Timestamp) {
        self.rank = update.rank;
        self.saram = update.saram;
        self.whatsapp = update.whatsapp;
        self.birth_date = update.birth_date;
        self.aircraft_type = update.aircraft_type;
        self.weight_kg = update.weight_kg;
        self.height_m = update.height_m;
        self.base_id = update.base_id;
        self.updated_at = Some(now);
    }
}

impl ProfessionalProfile {
    pub fn apply(&mut self, update: ProfessionalProfileUpdate, now: jiff::Timestamp) {
        self.crm_crefito = update.crm_crefito;
        self.whatsapp = update.whatsapp;
        self.base_id = update.base_id;
        self.updated_at = Some(now);
    }
}
