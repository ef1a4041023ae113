//! Well-known staff role constants.
//!
//! These must match the `profiles.role` check constraint.

use crate::error::CoreError;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_QUALITY_MANAGER: &str = "qualityManager";
pub const ROLE_PRODUCTION_STAFF: &str = "productionStaff";
pub const ROLE_AUDITOR: &str = "auditor";

pub const VALID_ROLES: &[&str] = &[
    ROLE_ADMIN,
    ROLE_QUALITY_MANAGER,
    ROLE_PRODUCTION_STAFF,
    ROLE_AUDITOR,
];

pub fn validate_role(role: &str) -> Result<(), CoreError> {
    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown role: '{role}'. Valid roles: {}",
            VALID_ROLES.join(", ")
        )))
    }
}
