//! screening-report
//!
//! Turns a finished intake into a readable report via Tera templates.

pub mod context;
pub mod error;
pub mod render;
