//! Timed message receiver
//!
//! Spawns one producer strand that delivers a single value into a fresh
//! one-slot conduit, then waits on the conduit with a deadline. Whichever
//! happens first decides the `Outcome`:
//!
//! ```text
//!   Waiting ──value arrives──▶ Resolved(Message)
//!      │
//!      └──deadline passes───▶ Resolved(TimedOut)
//! ```
//!
//! The producer is never cancelled. When the deadline wins, its later write
//! lands in the abandoned conduit (or finds it closed) and nobody looks.
//! Equal delay and timeout is a genuine race with no guaranteed winner.

use crate::conduit::conduit;
use crate::error::ConduitError;
use crate::io::write_line;
use crate::scheduler::spawn_strand;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::debug;

/// Text the reference producer delivers
pub const PRODUCER_MESSAGE: &str = "message from goroutine";

/// Longest producer delay or receive deadline handed to May's timer.
///
/// May adds the wait to a nanosecond clock in a `u64`, so waits near
/// `Duration::MAX` overflow on its timer thread. Longer requests are clamped.
pub const MAX_WAIT: Duration = Duration::from_secs(24 * 60 * 60);

/// Races resolved by a delivered value
pub static RACES_DELIVERED: AtomicU64 = AtomicU64::new(0);

/// Races resolved by the deadline
pub static RACES_TIMED_OUT: AtomicU64 = AtomicU64::new(0);

/// How a timed race resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T = String> {
    Message(T),
    TimedOut,
}

impl<T> Outcome<T> {
    pub fn is_timed_out(&self) -> bool {
        matches!(self, Outcome::TimedOut)
    }

    pub fn message(self) -> Option<T> {
        match self {
            Outcome::Message(value) => Some(value),
            Outcome::TimedOut => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Message(value) => write!(f, "Received: {}", value),
            Outcome::TimedOut => write!(f, "Timeout: no message received"),
        }
    }
}

/// Clamp `wait` to `MAX_WAIT`.
pub fn bounded_wait(wait: Duration) -> Duration {
    if wait > MAX_WAIT {
        debug!(
            requested_ms = wait.as_millis() as u64,
            max_ms = MAX_WAIT.as_millis() as u64,
            "wait clamped"
        );
        MAX_WAIT
    } else {
        wait
    }
}

/// Run `producer` in its own strand and race its single value against
/// `timeout`.
///
/// `Err(Closed)` means the producer dropped its writer without delivering,
/// which only happens if it panicked. `timeout` is clamped to `MAX_WAIT`.
pub fn race_with_timeout<T, F>(producer: F, timeout: Duration) -> Result<Outcome<T>, ConduitError>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (writer, reader) = conduit();

    let strand_id = spawn_strand(move || {
        let value = producer();
        if let Err(e) = writer.send(value) {
            debug!("producer finished after the race was abandoned: {}", e);
        }
    });

    let timeout = bounded_wait(timeout);
    let outcome = match reader.recv_timeout(timeout) {
        Ok(value) => {
            RACES_DELIVERED.fetch_add(1, Ordering::Relaxed);
            Outcome::Message(value)
        }
        Err(ConduitError::TimedOut) => {
            RACES_TIMED_OUT.fetch_add(1, Ordering::Relaxed);
            Outcome::TimedOut
        }
        Err(e) => return Err(e),
    };

    debug!(
        strand_id,
        timeout_ms = timeout.as_millis() as u64,
        timed_out = outcome.is_timed_out(),
        "race resolved"
    );

    Ok(outcome)
}

/// Producer sleeps `producer_delay`, then sends `PRODUCER_MESSAGE`; the
/// caller gives up after `timeout`. Prints which side won. Both waits are
/// clamped to `MAX_WAIT`.
pub fn receive_with_timeout(
    producer_delay: Duration,
    timeout: Duration,
) -> Result<Outcome, ConduitError> {
    let producer_delay = bounded_wait(producer_delay);
    let outcome = race_with_timeout(
        move || {
            may::coroutine::sleep(producer_delay);
            PRODUCER_MESSAGE.to_string()
        },
        timeout,
    )?;

    write_line(&outcome.to_string());
    Ok(outcome)
}
