pub mod batch;
pub mod dashboard;
pub mod defect;
pub mod measurement;
pub mod parameter;
pub mod profile;
pub mod report;
pub mod settings;
