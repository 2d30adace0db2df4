//! Merge per-statement record batches into one date-ordered sequence.

use crate::record::Transaction;

/// Concatenate batches preserving intra-batch order, then stable-sort by date.
///
/// Equal-date records keep their relative input order and nothing is deduped;
/// an empty batch list yields an empty sequence.
pub fn consolidate(batches: Vec<Vec<Transaction>>) -> Vec<Transaction> {
    let mut all: Vec<Transaction> = batches.into_iter().flatten().collect();
    all.sort_by_key(|t| t.date);
    all
}
