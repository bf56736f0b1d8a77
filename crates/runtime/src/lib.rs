//! Primer Runtime: strands, a one-slot conduit, and a timed receive race
//!
//! Key pieces:
//! - Strand: a May coroutine spawned through `scheduler::spawn_strand`
//! - Conduit: capacity-one channel split into writer and reader capabilities
//! - Race: a producer strand's single delivery raced against a deadline

pub mod conduit;
pub mod config;
pub mod error;
pub mod io;
pub mod receiver;
pub mod report;
pub mod scheduler;

pub use conduit::{ConduitReader, ConduitWriter, conduit};
pub use config::RuntimeConfig;
pub use error::ConduitError;
pub use io::{write_block, write_line};
pub use receiver::{
    MAX_WAIT, Outcome, PRODUCER_MESSAGE, bounded_wait, race_with_timeout, receive_with_timeout,
};
pub use report::{ReportConfig, emit_report};
pub use scheduler::{
    scheduler_elapsed, scheduler_init, scheduler_init_with, spawn_strand, wait_all_strands,
    yield_strand,
};
