//! The two tutorial programs
//!
//! `collections` walks arrays, slices, maps and records. `concepts` covers
//! polymorphism, the timed receive race, and fallible division. Line
//! builders are kept separate from printing so they can be tested.

use primer_core::animals::{Animal, move_all, sample_movers};
use primer_core::{CoreError, arrays, divide, maps, records, slices};
use primer_runtime::{ConduitError, receive_with_timeout, write_block, write_line};
use std::time::Duration;

/// (producer delay, timeout) pairs raced by the concepts program
pub const REFERENCE_RACES: [(Duration, Duration); 2] = [
    (Duration::from_secs(1), Duration::from_secs(2)),
    (Duration::from_secs(3), Duration::from_secs(1)),
];

/// Every line the collections program prints, in order
pub fn collections_lines() -> Result<Vec<String>, CoreError> {
    let mut lines = Vec::new();
    lines.push(arrays::demonstrate().to_string());
    lines.push(slices::demonstrate()?.to_string());
    lines.push(maps::demonstrate().to_string());
    lines.push(records::render(&records::demonstrate()?));
    Ok(lines)
}

pub fn run_collections() -> Result<(), CoreError> {
    for block in collections_lines()? {
        write_block(&block);
    }
    Ok(())
}

pub fn polymorphism_lines() -> Vec<String> {
    let mut lines: Vec<String> = Animal::ALL.iter().map(|a| a.to_string()).collect();
    lines.extend(move_all(&sample_movers()));
    lines
}

/// Divide 10 by 2, then 10 by 0. The first error is reported and ends the
/// sequence.
pub fn division_lines() -> Vec<String> {
    let mut lines = Vec::new();
    for (a, b) in [(10.0, 2.0), (10.0, 0.0)] {
        match divide(a, b) {
            Ok(result) => lines.push(format!("Result: {}", result)),
            Err(e) => {
                lines.push(format!("Error: {}", e));
                return lines;
            }
        }
    }
    lines
}

pub fn run_race(producer_delay: Duration, timeout: Duration) -> Result<(), ConduitError> {
    write_line(&format!(
        "Waiting up to {:?} for a producer that sleeps {:?}",
        timeout, producer_delay
    ));
    receive_with_timeout(producer_delay, timeout)?;
    Ok(())
}

pub fn run_concepts() -> Result<(), ConduitError> {
    for line in polymorphism_lines() {
        write_line(&line);
    }
    for (delay, timeout) in REFERENCE_RACES {
        run_race(delay, timeout)?;
    }
    for line in division_lines() {
        write_line(&line);
    }
    Ok(())
}
