//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) where the entity is mutable

pub mod batch;
pub mod dashboard;
pub mod defect;
pub mod measurement;
pub mod profile;
pub mod quality_parameter;
pub mod report;
