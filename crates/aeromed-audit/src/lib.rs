//! aeromed-audit
//!
//! Application-level audit events for writes to health records.

pub mod events;
