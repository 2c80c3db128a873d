//! "Newest first" ordering of content ids
//!
//! Ids carry no timestamp. Recency is read off the id itself: `P11` is newer
//! than `P2` because of its numeric suffix. Ids without a numeric suffix
//! (merged-layout problem ids like `C12A`) fall back to plain string order.

use std::cmp::Reverse;

/// Sort key of a content id
///
/// Numeric ids order after textual ones so the key stays a total order even
/// when a listing mixes both shapes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum IdSortKey {
    Text(String),
    Numeric(u64),
}

impl IdSortKey {
    /// Key for `id`: the number after the leading letter when there is one
    pub fn of(id: &str) -> Self {
        let mut chars = id.chars();
        let suffix = match chars.next() {
            Some(_) => chars.as_str(),
            None => "",
        };

        if !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = suffix.parse() {
                return Self::Numeric(n);
            }
        }
        Self::Text(id.to_string())
    }
}

/// Sort `items` by id, newest first
pub fn sort_newest_first<T, F>(items: &mut [T], id: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by_cached_key(|item| Reverse(IdSortKey::of(id(item))));
}
