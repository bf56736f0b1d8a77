//! Primer Core: plain-data demonstrations
//!
//! Each module builds a small value, manipulates it, and hands the result back
//! so callers decide how to print it. Nothing here blocks or spawns.
//!
//! # Modules
//!
//! - `arrays`: fixed-size and multi-dimensional arrays
//! - `slices`: growable sequences, extension, sub-ranges
//! - `maps`: ordered key-value insert/delete
//! - `records`: a sequence of `Person` records with in-place mutation
//! - `animals`: tagged-variant `speak` and the `Mover` capability trait
//! - `arithmetic`: fallible division
//! - `error`: `CoreError`
//! - `format`: bracketed rendering for sequences, maps and records

pub mod animals;
pub mod arithmetic;
pub mod arrays;
pub mod error;
pub mod format;
pub mod maps;
pub mod records;
pub mod slices;

pub use animals::{Animal, Bird, Car, Fish, Mover, move_all};
pub use arithmetic::divide;
pub use error::CoreError;
pub use records::Person;
