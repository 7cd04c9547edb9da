//! screening-intake
//!
//! The three-step intake as an explicit state machine: collect patient
//! details, accept both fundus images with the lab values, then hold the
//! finished report. The caller owns the workflow value and passes it
//! around; nothing lives in global session storage.

pub mod error;
pub mod record;
pub mod workflow;
