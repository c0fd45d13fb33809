//! Casting call moderation states, categories, and validation helpers.
//!
//! Used by the DB layer to build listing queries and by the API layer to
//! validate submissions and admin status transitions.

/// Newly submitted, awaiting admin review. Never publicly listed.
pub const STATUS_PENDING: &str = "pending";

/// Approved by an admin and visible in public listings.
pub const STATUS_APPROVED: &str = "approved";

/// Rejected by an admin.
pub const STATUS_REJECTED: &str = "rejected";

/// Statuses an admin may transition a casting call into.
pub const REVIEW_STATUSES: &[&str] = &[STATUS_APPROVED, STATUS_REJECTED];

/// Known casting call categories, stored in the `type` column.
pub const CASTING_TYPES: &[&str] = &[
    "Film",
    "TV",
    "Theater",
    "Commercial",
    "Voice Over",
    "Music Video",
    "Web Series",
    "Student Film",
];

pub const GENDER_MALE: &str = "male";
pub const GENDER_FEMALE: &str = "female";
/// Open to any gender. As a listing filter this means "no filter".
pub const GENDER_ANY: &str = "any";

/// All valid gender constraint values.
pub const VALID_GENDERS: &[&str] = &[GENDER_MALE, GENDER_FEMALE, GENDER_ANY];

/// Image used when a submission does not provide one.
pub const DEFAULT_IMAGE: &str = "https://images.unsplash.com/photo-1598899134739-24c46f58b8c0";

/// Inclusive upper bound for `min_age` / `max_age`.
pub const MAX_AGE: i32 = 120;

/// Number of casting calls per listing page.
pub const PAGE_SIZE: i64 = 8;

/// Validate the target status of an admin review. `pending` is not a target.
pub fn validate_review_status(status: &str) -> Result<(), String> {
    if REVIEW_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid review status '{status}'. Must be one of: {}",
            REVIEW_STATUSES.join(", ")
        ))
    }
}

/// Validate that a category is one of [`CASTING_TYPES`].
pub fn validate_casting_type(casting_type: &str) -> Result<(), String> {
    if CASTING_TYPES.contains(&casting_type) {
        Ok(())
    } else {
        Err(format!(
            "Invalid casting type '{casting_type}'. Must be one of: {}",
            CASTING_TYPES.join(", ")
        ))
    }
}

/// Validate a gender constraint value.
pub fn validate_gender(gender: &str) -> Result<(), String> {
    if VALID_GENDERS.contains(&gender) {
        Ok(())
    } else {
        Err(format!(
            "Invalid gender '{gender}'. Must be one of: {}",
            VALID_GENDERS.join(", ")
        ))
    }
}

/// Validate optional age bounds: each within `0..=MAX_AGE` and `min <= max`.
pub fn validate_age_range(min_age: Option<i32>, max_age: Option<i32>) -> Result<(), String> {
    for (label, age) in [("min_age", min_age), ("max_age", max_age)] {
        if let Some(age) = age {
            if !(0..=MAX_AGE).contains(&age) {
                return Err(format!("{label} must be between 0 and {MAX_AGE}"));
            }
        }
    }
    if let (Some(min), Some(max)) = (min_age, max_age) {
        if min > max {
            return Err("min_age must not exceed max_age".to_string());
        }
    }
    Ok(())
}

/// Normalize a gender listing filter. Empty and `any` mean "do not filter".
///
/// Stored genders are lowercase, so the filter is lowercased too.
pub fn gender_filter(gender: Option<&str>) -> Option<String> {
    gender
        .map(|g| g.trim().to_lowercase())
        .filter(|g| !g.is_empty() && g != GENDER_ANY)
}

/// Normalize a category listing filter. Empty means "do not filter".
pub fn category_filter(category: Option<&str>) -> Option<&str> {
    category.map(str::trim).filter(|c| !c.is_empty())
}

/// Row offset of the first item on `page`. Negative pages clamp to 0.
pub fn page_offset(page: i64) -> i64 {
    page.max(0).saturating_mul(PAGE_SIZE)
}

/// Whether more pages may exist after one that returned `returned` items.
///
/// Only a full page signals more. When the final page is exactly full this
/// reports `true` and the following page comes back empty.
pub fn has_more(returned: usize) -> bool {
    returned as i64 == PAGE_SIZE
}
