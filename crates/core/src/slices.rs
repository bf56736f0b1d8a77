//! Growable sequences
//!
//! `Vec<T>` owns a resizable buffer; `&[T]` borrows a window into one.
//! Extending appends another sequence in order, and a sub-range `low..high`
//! starts at `low` and stops just before `high`.

use crate::error::CoreError;
use crate::format;
use std::fmt;

pub const INITIAL_COLORS: [&str; 3] = ["Red", "Black", "Purple"];
pub const MORE_COLORS: [&str; 3] = ["Yellow", "Blue", "Orange"];

/// Result of the slice demonstration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceDemo {
    pub initial: Vec<String>,
    pub extended: Vec<String>,
    /// `extended[1..4]`
    pub subset: Vec<String>,
}

/// Append every element of `more` to `base`, preserving order.
pub fn extend_with<T: Clone>(mut base: Vec<T>, more: &[T]) -> Vec<T> {
    base.extend_from_slice(more);
    base
}

/// Borrow `items[low..high]`, or report the bad bounds.
pub fn subrange<T>(items: &[T], low: usize, high: usize) -> Result<&[T], CoreError> {
    items.get(low..high).ok_or(CoreError::RangeOutOfBounds {
        low,
        high,
        len: items.len(),
    })
}

pub fn demonstrate() -> Result<SliceDemo, CoreError> {
    let initial: Vec<String> = INITIAL_COLORS.iter().map(|c| c.to_string()).collect();
    let more: Vec<String> = MORE_COLORS.iter().map(|c| c.to_string()).collect();

    let extended = extend_with(initial.clone(), &more);
    let subset = subrange(&extended, 1, 4)?.to_vec();

    Ok(SliceDemo {
        initial,
        extended,
        subset,
    })
}

impl fmt::Display for SliceDemo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Initial colors slice: {}", format::seq(&self.initial))?;
        writeln!(f, "Extended colors slice: {}", format::seq(&self.extended))?;
        write!(f, "Sub-set of colors: {}", format::seq(&self.subset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extended_keeps_order() {
        let demo = demonstrate().unwrap();
        assert_eq!(
            demo.extended,
            vec!["Red", "Black", "Purple", "Yellow", "Blue", "Orange"]
        );
        assert_eq!(demo.initial, vec!["Red", "Black", "Purple"]);
    }

    #[test]
    fn test_subset_is_half_open() {
        let demo = demonstrate().unwrap();
        assert_eq!(demo.subset, vec!["Black", "Purple", "Yellow"]);
    }

    #[test]
    fn test_subrange_rejects_bad_bounds() {
        let items = [1, 2, 3];
        assert_eq!(
            subrange(&items, 2, 5),
            Err(CoreError::RangeOutOfBounds {
                low: 2,
                high: 5,
                len: 3
            })
        );
        // low > high is also out of range
        assert!(subrange(&items, 2, 1).is_err());
        assert_eq!(subrange(&items, 3, 3).unwrap(), &[] as &[i32]);
    }

    #[test]
    fn test_display() {
        let rendered = demonstrate().unwrap().to_string();
        assert!(rendered.contains("Sub-set of colors: [Black Purple Yellow]"));
    }
}
