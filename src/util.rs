//! A module of utility functions for name matching. Exported content names
//! are inconsistent in case, so most heuristics compare without it.

/// Returns true if `haystack` contains `needle`, ignoring ASCII case
#[must_use]
pub fn icontains(haystack: &str, needle: &str) -> bool {
    if needle.len() > haystack.len() {
        return false;
    }
    if needle.is_empty() {
        return true;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|w| w.eq_ignore_ascii_case(needle.as_bytes()))
}

/// Returns true if the names are equal, ignoring ASCII case
#[must_use]
pub fn iequals(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}
