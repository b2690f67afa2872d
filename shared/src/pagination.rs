//! Pagination types
//!
//! `page` and `limit` arrive as raw query strings. They are coerced leniently:
//! a leading integer is taken, anything unusable falls back to the default,
//! and the result is never below 1.

use serde::{Deserialize, Serialize};

/// Page used when `page` is absent or unusable
pub const DEFAULT_PAGE: u64 = 1;
/// Page size used when `limit` is absent or unusable
pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Upper bound for `limit`; larger requests are clamped
pub const MAX_PAGE_SIZE: u64 = 100;

/// Effective page selection (1-based page, bounded page size)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Coerce raw `page` / `limit` query values
    pub fn from_raw(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: coerce_positive(page, DEFAULT_PAGE),
            limit: coerce_positive(limit, DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE),
        }
    }

    /// Rows to skip before this page
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }

    /// Number of pages needed for `total` rows
    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(self.limit.max(1))
    }
}

/// Missing, unparsable or zero → `default`; negative → 1.
fn coerce_positive(raw: Option<&str>, default: u64) -> u64 {
    match raw.and_then(parse_leading_int) {
        None | Some(0) => default,
        Some(n) if n < 0 => 1,
        Some(n) => n as u64,
    }
}

/// Parse the integer prefix of `s`: optional whitespace, an optional sign,
/// then decimal digits. Trailing characters are ignored ("12abc" → 12).
/// Returns `None` when no digit follows the sign. Saturates on overflow.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Paginated list response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Rows of the requested page
    pub data: Vec<T>,
    /// Effective page number
    pub page: u64,
    /// Effective page size
    pub limit: u64,
    /// Rows matching the filters, across all pages
    pub total: u64,
    /// Number of pages for `total` at this `limit`
    pub total_pages: u64,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            data,
            page: request.page,
            limit: request.limit,
            total,
            total_pages: request.total_pages(total),
        }
    }
}
