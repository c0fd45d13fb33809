//! Shared query parameter types for API handlers.

use castboard_core::casting::{category_filter, gender_filter};
use castboard_core::search::contains_pattern;
use castboard_db::models::casting_call::CastingCallFilter;
use serde::Deserialize;

/// Query parameters for the public casting-call listing
/// (`?page=&category=&gender=&min_age=&max_age=&q=`).
#[derive(Debug, Default, Deserialize)]
pub struct ListingParams {
    /// Zero-based page cursor. Missing or negative means the first page.
    pub page: Option<i64>,
    pub category: Option<String>,
    /// `any` or empty means no gender filter.
    pub gender: Option<String>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    /// Free-text search over title, description, and role.
    pub q: Option<String>,
}

impl ListingParams {
    /// The page to fetch, clamped at zero.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(0).max(0)
    }

    /// Normalize into a repository filter.
    pub fn to_filter(&self) -> CastingCallFilter {
        CastingCallFilter {
            category: category_filter(self.category.as_deref()).map(str::to_string),
            gender: gender_filter(self.gender.as_deref()),
            min_age: self.min_age,
            max_age: self.max_age,
            search_pattern: contains_pattern(self.q.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_mean_first_unfiltered_page() {
        let params = ListingParams::default();
        assert_eq!(params.page(), 0);

        let filter = params.to_filter();
        assert!(filter.category.is_none());
        assert!(filter.gender.is_none());
        assert!(filter.search_pattern.is_none());
    }

    #[test]
    fn any_gender_and_blank_category_are_dropped() {
        let params = ListingParams {
            page: Some(-3),
            category: Some("  ".into()),
            gender: Some("any".into()),
            q: Some("50%".into()),
            ..Default::default()
        };
        assert_eq!(params.page(), 0);

        let filter = params.to_filter();
        assert!(filter.category.is_none());
        assert!(filter.gender.is_none());
        assert_eq!(filter.search_pattern.as_deref(), Some("%50\\%%"));
    }

    #[test]
    fn gender_filter_ignores_case() {
        let params = ListingParams {
            gender: Some("Female".into()),
            ..Default::default()
        };
        assert_eq!(params.to_filter().gender.as_deref(), Some("female"));
    }
}
