//! aeromed-store
//!
//! In-process record store for users, complaints, questionnaires, opinions
//! and notifications, plus the aggregate queries behind the reports page.

pub mod complaints;
pub mod error;
pub mod notifications;
pub mod reports;
pub mod seed;
pub mod store;

pub use store::Store;
