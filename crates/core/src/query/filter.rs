//! Free-text search filter.
//!
//! A member matches when the lowercase text of any of its fields contains
//! the lowercase needle. Fields render as the API serializes them: `id` in
//! decimal, `isActive` as `true`/`false`, and `teams` joined with `,`.

use crate::member::Member;

/// Check if any field of `member` contains `needle`, ignoring case.
/// An empty needle matches everything.
pub fn matches_search(member: &Member, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    matches_lowercase(member, &needle.to_lowercase())
}

/// Same as [`matches_search`] for a needle that is already lowercase, so a
/// caller filtering many members lowercases it once.
pub(crate) fn matches_lowercase(member: &Member, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let contains = |text: &str| text.to_lowercase().contains(needle);
    contains(&member.name)
        || contains(&member.user_name)
        || contains(&member.avatar)
        || contains(&member.role)
        || contains(&member.email)
        || member.id.to_string().contains(needle)
        || (if member.is_active { "true" } else { "false" }).contains(needle)
        || contains(&member.teams.join(","))
}
