//! Threshold-table lookups for regulatory constants.
//!
//! Tables are ordered immutable sequences of (threshold, value) pairs,
//! ascending by threshold. The lookup returns the value of the largest
//! threshold less than or equal to the query and never interpolates
//! between rows.

/// Floor lookup over an ascending `(threshold, value)` table.
///
/// Returns `None` when the query is below the first threshold. Tables that
/// carry a zero floor entry therefore always match.
pub fn floor_lookup<K, V>(table: &[(K, V)], query: K) -> Option<V>
where
    K: PartialOrd + Copy,
    V: Copy,
{
    let mut found = None;
    for (threshold, value) in table {
        if query >= *threshold {
            found = Some(*value);
        } else {
            break;
        }
    }
    found
}
