//! Key-value maps
//!
//! A `BTreeMap` keeps its keys sorted, so printing the map always lists the
//! entries in the same order regardless of insertion history.

use crate::format;
use std::collections::BTreeMap;
use std::fmt;

pub type UserAges = BTreeMap<String, u32>;

/// Result of the map demonstration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapDemo {
    /// State after adding `"Tupac"`
    pub after_insert: UserAges,
    /// State after also removing `"Bob Marley"`
    pub after_delete: UserAges,
}

/// The starting map
pub fn initial_ages() -> UserAges {
    BTreeMap::from([
        ("Bob Marley".to_string(), 33),
        ("Jimmi Hendrix".to_string(), 27),
    ])
}

pub fn demonstrate() -> MapDemo {
    let mut ages = initial_ages();

    ages.insert("Tupac".to_string(), 23);
    let after_insert = ages.clone();

    ages.remove("Bob Marley");

    MapDemo {
        after_insert,
        after_delete: ages,
    }
}

impl fmt::Display for MapDemo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "User ages with Tupac added: {}",
            format::map(&self.after_insert)
        )?;
        write!(
            f,
            "User ages after deleting Bob Marley: {}",
            format::map(&self.after_delete)
        )
    }
}
