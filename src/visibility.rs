//! Public visibility rules.
//!
//! A record reaches a public page only when every gate that applies to its
//! kind is open. Public lists of kinds with a `sortOrder` come back in
//! ascending order; ties keep their storage order.

use crate::content::Record;

/// Public visibility for moderated kinds.
pub fn visible_to_public(is_active: bool, is_approved: bool, is_public: bool) -> bool {
    is_active && is_approved && is_public
}

/// Records that may be shown publicly, sorted where the kind defines an order.
pub fn visible_set<M: Record>(records: Vec<M>) -> Vec<M> {
    let mut visible: Vec<M> = records.into_iter().filter(M::is_visible).collect();
    sort_by_order(&mut visible);
    visible
}

/// Stable ascending sort by `sortOrder`. Kinds without one keep their order.
pub fn sort_by_order<M: Record>(records: &mut [M]) {
    records.sort_by_key(|record| record.sort_order().unwrap_or(0));
}

/// Records whose category equals `category` exactly. Kinds without a
/// category never match.
pub fn in_category<M: Record>(records: Vec<M>, category: &str) -> Vec<M> {
    records
        .into_iter()
        .filter(|record| record.category() == Some(category))
        .collect()
}
