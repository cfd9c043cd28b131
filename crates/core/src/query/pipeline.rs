//! The list pipeline: filter, then sort, then paginate.
//!
//! The order is fixed. `count` is taken after filtering and before
//! pagination, so clients can page through filtered results with it.

use crate::member::Member;
use crate::query::filter::matches_lowercase;
use crate::query::spec::{QuerySpec, SortOrder};
use serde::Serialize;
use std::sync::Arc;

/// One page of list results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultPage {
    /// Members on this page, in sorted order.
    pub items: Vec<Member>,
    /// Number of members that matched the search, across all pages.
    pub count: usize,
    pub page: usize,
    pub limit: usize,
}

/// Runs `spec` against a snapshot of the collection.
///
/// Sorting is stable in both directions: members that compare equal keep
/// their snapshot order. A page past the end is empty, not an error.
pub fn run_query(members: &[Arc<Member>], spec: &QuerySpec) -> ResultPage {
    let needle = spec.search.to_lowercase();
    let mut filtered: Vec<&Member> = members
        .iter()
        .map(Arc::as_ref)
        .filter(|m| matches_lowercase(m, &needle))
        .collect();

    filtered.sort_by(|a, b| {
        let ord = spec.sort_by.compare(a, b);
        match spec.order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });

    let count = filtered.len();
    let start = spec.page.saturating_sub(1).saturating_mul(spec.limit);
    let items = if start >= count {
        Vec::new()
    } else {
        let end = start.saturating_add(spec.limit).min(count);
        filtered[start..end].iter().map(|m| Member::clone(m)).collect()
    };

    ResultPage {
        items,
        count,
        page: spec.page,
        limit: spec.limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::spec::SortField;
    use proptest::prelude::*;

    fn member(id: u64, name: &str, role: &str, active: bool) -> Arc<Member> {
        Arc::new(Member {
            id,
            name: name.to_string(),
            user_name: name.to_lowercase(),
            avatar: format!("https://cdn.example.com/{}.png", id),
            is_active: active,
            role: role.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            teams: vec![],
        })
    }

    fn spec(page: usize, limit: usize, sort_by: SortField, order: SortOrder, search: &str) -> QuerySpec {
        QuerySpec {
            page,
            limit,
            sort_by,
            order,
            search: search.to_string(),
        }
    }

    fn ids(page: &ResultPage) -> Vec<u64> {
        page.items.iter().map(|m| m.id).collect()
    }

    fn roster() -> Vec<Arc<Member>> {
        vec![
            member(1, "Carol", "dev", true),
            member(2, "Ann", "admin", true),
            member(3, "Bob", "dev", false),
            member(4, "Dave", "admin", false),
            member(5, "Eve", "dev", true),
        ]
    }

    // ── Search ─────────────────────────────────────────────────────────

    #[test]
    fn test_search_ann_scenario() {
        let members = vec![member(1, "Ann", "x", true), member(2, "Bob", "y", true)];
        let page = run_query(&members, &spec(1, 10, SortField::Name, SortOrder::Asc, "ann"));
        assert_eq!(ids(&page), vec![1]);
        assert_eq!(page.count, 1);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 10);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let page = run_query(&roster(), &spec(1, 10, SortField::Id, SortOrder::Asc, "ADMIN"));
        assert_eq!(ids(&page), vec![2, 4]);
    }

    #[test]
    fn test_empty_search_returns_everything() {
        let page = run_query(&roster(), &QuerySpec::default());
        assert_eq!(page.count, 5);
    }

    #[test]
    fn test_search_without_match() {
        let page = run_query(&roster(), &spec(1, 10, SortField::Name, SortOrder::Asc, "nobody"));
        assert!(page.items.is_empty());
        assert_eq!(page.count, 0);
    }

    // ── Sort ───────────────────────────────────────────────────────────

    #[test]
    fn test_sort_by_name_asc_and_desc() {
        let asc = run_query(&roster(), &spec(1, 10, SortField::Name, SortOrder::Asc, ""));
        assert_eq!(ids(&asc), vec![2, 3, 1, 4, 5]);
        let desc = run_query(&roster(), &spec(1, 10, SortField::Name, SortOrder::Desc, ""));
        assert_eq!(ids(&desc), vec![5, 4, 1, 3, 2]);
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let asc = run_query(&roster(), &spec(1, 10, SortField::Role, SortOrder::Asc, ""));
        assert_eq!(ids(&asc), vec![2, 4, 1, 3, 5]);
        let desc = run_query(&roster(), &spec(1, 10, SortField::Role, SortOrder::Desc, ""));
        assert_eq!(ids(&desc), vec![1, 3, 5, 2, 4]);
    }

    #[test]
    fn test_sort_by_is_active() {
        let page = run_query(&roster(), &spec(1, 10, SortField::IsActive, SortOrder::Asc, ""));
        assert_eq!(ids(&page), vec![3, 4, 1, 2, 5]);
    }

    #[test]
    fn test_sort_by_id_desc() {
        let page = run_query(&roster(), &spec(1, 10, SortField::Id, SortOrder::Desc, ""));
        assert_eq!(ids(&page), vec![5, 4, 3, 2, 1]);
    }

    // ── Pagination ─────────────────────────────────────────────────────

    #[test]
    fn test_paginates_after_sort() {
        let page = run_query(&roster(), &spec(2, 2, SortField::Name, SortOrder::Asc, ""));
        assert_eq!(ids(&page), vec![1, 4]);
        assert_eq!(page.count, 5);
        assert_eq!(page.page, 2);
        assert_eq!(page.limit, 2);
    }

    #[test]
    fn test_last_partial_page() {
        let page = run_query(&roster(), &spec(3, 2, SortField::Name, SortOrder::Asc, ""));
        assert_eq!(ids(&page), vec![5]);
    }

    #[test]
    fn test_page_out_of_range_is_empty() {
        let page = run_query(&roster(), &spec(99, 10, SortField::Name, SortOrder::Asc, ""));
        assert!(page.items.is_empty());
        assert_eq!(page.count, 5);
        assert_eq!(page.page, 99);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let page = run_query(
            &roster(),
            &spec(usize::MAX, usize::MAX, SortField::Name, SortOrder::Asc, ""),
        );
        assert!(page.items.is_empty());
        assert_eq!(page.count, 5);
    }

    #[test]
    fn test_does_not_mutate_snapshot() {
        let members = roster();
        let before: Vec<u64> = members.iter().map(|m| m.id).collect();
        run_query(&members, &spec(1, 2, SortField::Name, SortOrder::Desc, "e"));
        let after: Vec<u64> = members.iter().map(|m| m.id).collect();
        assert_eq!(before, after);
    }

    // ── Properties ─────────────────────────────────────────────────────

    fn arb_members() -> impl Strategy<Value = Vec<Arc<Member>>> {
        proptest::collection::vec(("[a-c]{1,2}", "[xy]", any::<bool>()), 0..40).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (name, role, active))| member(i as u64 + 1, &name, &role, active))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_page_size_and_count(members in arb_members(), page in 1usize..8, limit in 1usize..12) {
            let result = run_query(&members, &spec(page, limit, SortField::Name, SortOrder::Asc, ""));
            let n = members.len();
            let expected = n.saturating_sub((page - 1) * limit).min(limit);
            prop_assert_eq!(result.items.len(), expected);
            prop_assert_eq!(result.count, n);
        }

        #[test]
        fn prop_count_independent_of_page(members in arb_members(), limit in 1usize..12, search in "[a-cxy]?") {
            let first = run_query(&members, &spec(1, limit, SortField::Role, SortOrder::Asc, &search));
            let later = run_query(&members, &spec(5, limit, SortField::Role, SortOrder::Asc, &search));
            prop_assert_eq!(first.count, later.count);
        }

        #[test]
        fn prop_ties_keep_snapshot_order(members in arb_members(), desc in any::<bool>()) {
            let order = if desc { SortOrder::Desc } else { SortOrder::Asc };
            let result = run_query(&members, &spec(1, usize::MAX, SortField::Role, order, ""));
            for pair in result.items.windows(2) {
                if pair[0].role == pair[1].role {
                    prop_assert!(pair[0].id < pair[1].id);
                }
            }
        }
    }
}
