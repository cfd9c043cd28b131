//! Query specification for list requests.
//!
//! [`QuerySpec::from_params`] turns raw, optional query-string values into a
//! fully-defaulted specification. It never fails: anything unusable falls
//! back to the default for that parameter.

use crate::config;
use crate::member::Member;
use std::cmp::Ordering;
use std::fmt;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// `desc` (any case) is descending; everything else is ascending.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("desc") {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }
}

/// A member field that list results can be sorted by.
///
/// Each variant maps to a typed comparator in [`SortField::compare`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    Id,
    #[default]
    Name,
    UserName,
    Avatar,
    IsActive,
    Role,
    Email,
    Teams,
}

impl SortField {
    /// Every sortable field, in declaration order.
    pub const ALL: [SortField; 8] = [
        SortField::Id,
        SortField::Name,
        SortField::UserName,
        SortField::Avatar,
        SortField::IsActive,
        SortField::Role,
        SortField::Email,
        SortField::Teams,
    ];

    /// The JSON field name this variant sorts on.
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::UserName => "userName",
            SortField::Avatar => "avatar",
            SortField::IsActive => "isActive",
            SortField::Role => "role",
            SortField::Email => "email",
            SortField::Teams => "teams",
        }
    }

    /// Looks up a field by its exact JSON name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == name)
    }

    /// Compares two members on this field in ascending order.
    ///
    /// `isActive` orders `false` before `true`. `teams` compares the
    /// comma-joined rendering, so `["a", "b"]` sorts as `"a,b"`.
    pub fn compare(self, a: &Member, b: &Member) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Name => a.name.cmp(&b.name),
            SortField::UserName => a.user_name.cmp(&b.user_name),
            SortField::Avatar => a.avatar.cmp(&b.avatar),
            SortField::IsActive => a.is_active.cmp(&b.is_active),
            SortField::Role => a.role.cmp(&b.role),
            SortField::Email => a.email.cmp(&b.email),
            SortField::Teams => a.teams.join(",").cmp(&b.teams.join(",")),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters controlling one list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuerySpec {
    /// 1-based page number.
    pub page: usize,
    /// Page size, at least 1.
    pub limit: usize,
    pub sort_by: SortField,
    pub order: SortOrder,
    /// Case-insensitive substring; empty matches everything.
    pub search: String,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            page: config::DEFAULT_PAGE,
            limit: config::DEFAULT_LIMIT,
            sort_by: SortField::default(),
            order: SortOrder::default(),
            search: String::new(),
        }
    }
}

impl QuerySpec {
    /// Builds a spec from raw query-string values.
    ///
    /// `page` and `limit` must parse as positive integers or they take their
    /// defaults. An unknown `sort_by` falls back to `name`.
    pub fn from_params(
        page: Option<&str>,
        limit: Option<&str>,
        sort_by: Option<&str>,
        order: Option<&str>,
        search: Option<&str>,
    ) -> Self {
        let sort_by = match sort_by {
            None => SortField::default(),
            Some(raw) => SortField::from_name(raw.trim()).unwrap_or_else(|| {
                tracing::debug!(sort_by = raw, "Unknown sort field, using default");
                SortField::default()
            }),
        };
        Self {
            page: positive_or(page, config::DEFAULT_PAGE),
            limit: positive_or(limit, config::DEFAULT_LIMIT),
            sort_by,
            order: order.map(SortOrder::parse).unwrap_or_default(),
            search: search.unwrap_or_default().to_string(),
        }
    }
}

fn positive_or(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let spec = QuerySpec::from_params(None, None, None, None, None);
        assert_eq!(spec, QuerySpec::default());
        assert_eq!(spec.page, 1);
        assert_eq!(spec.limit, 10);
        assert_eq!(spec.sort_by, SortField::Name);
        assert_eq!(spec.order, SortOrder::Asc);
        assert!(spec.search.is_empty());
    }

    #[test]
    fn test_parses_all_params() {
        let spec = QuerySpec::from_params(
            Some("3"),
            Some("25"),
            Some("userName"),
            Some("desc"),
            Some("ann"),
        );
        assert_eq!(spec.page, 3);
        assert_eq!(spec.limit, 25);
        assert_eq!(spec.sort_by, SortField::UserName);
        assert_eq!(spec.order, SortOrder::Desc);
        assert_eq!(spec.search, "ann");
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let spec = QuerySpec::from_params(Some("abc"), Some("-4"), None, None, None);
        assert_eq!(spec.page, 1);
        assert_eq!(spec.limit, 10);

        let spec = QuerySpec::from_params(Some("0"), Some("0"), None, None, None);
        assert_eq!(spec.page, 1);
        assert_eq!(spec.limit, 10);
    }

    #[test]
    fn test_unknown_sort_field_defaults_to_name() {
        let spec = QuerySpec::from_params(None, None, Some("password"), None, None);
        assert_eq!(spec.sort_by, SortField::Name);
    }

    #[test]
    fn test_order_parsing() {
        assert_eq!(SortOrder::parse("DESC"), SortOrder::Desc);
        assert_eq!(SortOrder::parse("asc"), SortOrder::Asc);
        assert_eq!(SortOrder::parse("sideways"), SortOrder::Asc);
    }

    #[test]
    fn test_sort_field_names_round_trip() {
        for field in SortField::ALL {
            assert_eq!(SortField::from_name(field.as_str()), Some(field));
        }
        assert_eq!(SortField::from_name("Name"), None);
    }
}
