//! screening-core
//!
//! Pure domain types for the health screening intake: parameters, the
//! measurement record, patient details, fundus uploads and diagnosis
//! results. No I/O. This is the shared vocabulary of every other crate.

pub mod error;
pub mod models;
