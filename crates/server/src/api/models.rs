//! Request and response data transfer objects for the REST API.
//!
//! Member bodies are validated in `roster-core` and serialized straight from
//! [`Member`](roster_core::member::Member); only the wrappers live here.

use roster_core::member::FieldIssue;
use roster_core::query::QuerySpec;
use serde::Serialize;

/// Query string for `GET /api/members`.
///
/// Every value is kept as a raw string so that bad numbers fall back to
/// defaults instead of failing extraction.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListMembersParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub search: Option<String>,
}

impl ListMembersParams {
    /// Collects the known keys from raw query pairs.
    ///
    /// The first occurrence of a repeated key wins and unknown keys are
    /// ignored, so one odd parameter never discards the others.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                "sortBy" => &mut params.sort_by,
                "order" => &mut params.order,
                "search" => &mut params.search,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }

    /// Normalizes the raw parameters into a query specification.
    pub fn to_spec(&self) -> QuerySpec {
        QuerySpec::from_params(
            self.page.as_deref(),
            self.limit.as_deref(),
            self.sort_by.as_deref(),
            self.order.as_deref(),
            self.search.as_deref(),
        )
    }
}

/// Error body: `{"message": "..."}`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error body for a rejected member payload.
#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    pub message: String,
    pub errors: Vec<FieldIssue>,
}

/// Response body for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub members: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_pairs_reads_known_keys() {
        let params = ListMembersParams::from_pairs(pairs(&[
            ("page", "2"),
            ("limit", "5"),
            ("sortBy", "email"),
            ("order", "desc"),
            ("search", "ann"),
            ("unknown", "x"),
        ]));
        assert_eq!(params.page.as_deref(), Some("2"));
        assert_eq!(params.limit.as_deref(), Some("5"));
        assert_eq!(params.sort_by.as_deref(), Some("email"));
        assert_eq!(params.order.as_deref(), Some("desc"));
        assert_eq!(params.search.as_deref(), Some("ann"));
    }

    #[test]
    fn test_repeated_key_keeps_first_and_others_survive() {
        let params = ListMembersParams::from_pairs(pairs(&[
            ("search", "ann"),
            ("limit", "5"),
            ("limit", "6"),
        ]));
        let spec = params.to_spec();
        assert_eq!(spec.limit, 5);
        assert_eq!(spec.search, "ann");
        assert_eq!(spec.page, 1);
    }

    #[test]
    fn test_empty_pairs_are_defaults() {
        let params = ListMembersParams::from_pairs(Vec::new());
        assert_eq!(params, ListMembersParams::default());
        assert_eq!(params.to_spec(), QuerySpec::default());
    }
}
