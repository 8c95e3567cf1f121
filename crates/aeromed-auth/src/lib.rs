//! aeromed-auth
//!
//! Bearer token claims and HS256 signing. Credential checks happen in the
//! identity provider; this crate only issues and verifies the tokens it
//! hands out.

pub mod error;
pub mod jwt;
