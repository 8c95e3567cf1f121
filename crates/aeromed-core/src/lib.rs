//! aeromed-core
//!
//! Pure domain types shared by every AeroMed crate: users and roles,
//! profiles, complaints, questionnaire records, professional opinions and
//! notifications. No storage or HTTP dependency.

pub mod error;
pub mod models;
