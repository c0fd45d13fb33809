//! Admin-access request lifecycle.
//!
//! A profile starts with no request (`NULL` status). Submitting a request
//! moves it to `pending`; an admin then approves (which also grants the
//! `admin` role) or rejects it. A rejected user may ask again.

use crate::roles::is_admin;

pub const REQUEST_PENDING: &str = "pending";
pub const REQUEST_APPROVED: &str = "approved";
pub const REQUEST_REJECTED: &str = "rejected";

/// Decisions an admin may record on a pending request.
pub const VALID_DECISIONS: &[&str] = &[REQUEST_APPROVED, REQUEST_REJECTED];

/// Maximum length of the free-text reason attached to a request.
pub const MAX_REASON_LEN: usize = 1000;

/// Validate that a decision string is one of the accepted values.
pub fn validate_decision(decision: &str) -> Result<(), String> {
    if VALID_DECISIONS.contains(&decision) {
        Ok(())
    } else {
        Err(format!(
            "Invalid decision '{decision}'. Must be one of: {}",
            VALID_DECISIONS.join(", ")
        ))
    }
}

/// Validate the reason text of a new request.
pub fn validate_reason(reason: &str) -> Result<(), String> {
    let trimmed = reason.trim();
    if trimmed.is_empty() {
        return Err("A reason is required when requesting admin access".to_string());
    }
    if trimmed.chars().count() > MAX_REASON_LEN {
        return Err(format!(
            "Reason must be at most {MAX_REASON_LEN} characters"
        ));
    }
    Ok(())
}

/// Check whether a profile may submit a new admin request.
///
/// Returns the conflict message when it may not.
pub fn check_can_request(role: &str, current_status: Option<&str>) -> Result<(), String> {
    if is_admin(role) {
        return Err("User is already an admin".to_string());
    }
    if current_status == Some(REQUEST_PENDING) {
        return Err("An admin request is already pending".to_string());
    }
    Ok(())
}

/// Check whether a request in `current_status` can be decided by an admin.
pub fn check_can_decide(current_status: Option<&str>) -> Result<(), String> {
    match current_status {
        Some(REQUEST_PENDING) => Ok(()),
        Some(other) => Err(format!("Admin request is already {other}")),
        None => Err("User has no admin request".to_string()),
    }
}
