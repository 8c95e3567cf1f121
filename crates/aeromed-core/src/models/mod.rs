pub mod base;
pub mod complaint;
pub mod notification;
pub mod opinion;
pub mod profile;
pub mod questionnaire;
pub mod user;
