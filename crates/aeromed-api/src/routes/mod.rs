pub mod assessments;
pub mod bases;
pub mod complaints;
pub mod health;
pub mod instruments;
pub mod my_complaints;
pub mod notifications;
pub mod profile;
pub mod reports;
pub mod scoring;
