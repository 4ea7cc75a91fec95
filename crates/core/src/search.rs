//! Search and pagination helpers for the video catalog.
//!
//! Kept in `core` so the repository layer and the HTTP layer agree on the
//! same defaults and bounds.

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of videos per page.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum number of videos per page.
pub const MAX_PAGE_SIZE: i64 = 100;

/// A resolved `LIMIT` / `OFFSET` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: i64,
    pub offset: i64,
}

/// Clamp a user-provided page size to valid bounds.
pub fn clamp_size(size: Option<i64>) -> i64 {
    size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
}

/// Clamp a user-provided 0-based page number to non-negative.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(0).max(0)
}

/// Translate a 0-based `page` and `size` into a limit/offset window.
///
/// The offset saturates instead of overflowing on absurd page numbers.
pub fn page_window(page: Option<i64>, size: Option<i64>) -> PageWindow {
    let limit = clamp_size(size);
    let offset = clamp_page(page).saturating_mul(limit);
    PageWindow { limit, offset }
}

// ---------------------------------------------------------------------------
// Query builder helpers
// ---------------------------------------------------------------------------

/// Split user input into terms usable in a tsquery.
///
/// Any character other than alphanumerics and `_` separates terms, so the
/// result never contains tsquery operators.
fn sanitize_terms(query: &str) -> Option<Vec<&str>> {
    let terms: Vec<&str> = query
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|t| !t.is_empty())
        .collect();

    if terms.is_empty() {
        None
    } else {
        Some(terms)
    }
}

/// Convert user input into a PostgreSQL prefix `tsquery` string.
///
/// Terms are AND-ed and each one matches as a prefix, so `"act"` finds
/// "Action".
///
/// ```
/// use vidcat_core::search::build_tsquery;
/// assert_eq!(build_tsquery("space opera"), Some("space:* & opera:*".to_string()));
/// assert_eq!(build_tsquery("  "), None);
/// ```
pub fn build_tsquery(query: &str) -> Option<String> {
    sanitize_terms(query).map(|terms| {
        terms
            .iter()
            .map(|t| format!("{t}:*"))
            .collect::<Vec<_>>()
            .join(" & ")
    })
}
