//! Bracketed rendering for demonstration output
//!
//! Sequences print as `[a b c]`, maps as `map[k:v k:v]`, nested sequences
//! as `[[0 1] [1 2]]`. Records supply their own `Display` (`{Alice 18}`)
//! and are rendered through `seq`.

use std::collections::BTreeMap;
use std::fmt::Display;

/// Render any iterable of displayable items as `[a b c]`.
pub fn seq<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let parts: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    format!("[{}]", parts.join(" "))
}

/// Render a two-dimensional array row by row.
pub fn grid<const R: usize, const C: usize>(rows: &[[i64; C]; R]) -> String {
    seq(rows.iter().map(|row| seq(row.iter())))
}

/// Render an ordered map as `map[k:v k:v]`.
pub fn map<K: Display, V: Display>(entries: &BTreeMap<K, V>) -> String {
    let parts: Vec<String> = entries
        .iter()
        .map(|(key, value)| format!("{}:{}", key, value))
        .collect();
    format!("map[{}]", parts.join(" "))
}
