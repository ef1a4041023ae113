//! Domain logic for ceramic tile quality control.
//!
//! Pure functions and constants only; no database or HTTP access.

pub mod analytics;
pub mod batch;
pub mod compliance;
pub mod corrective_action;
pub mod defect;
pub mod error;
pub mod locale;
pub mod measurement;
pub mod pagination;
pub mod parameter;
pub mod report;
pub mod roles;
pub mod types;
