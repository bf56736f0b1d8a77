//! Scheduler - Green Thread Management with May
//!
//! Each strand is a lightweight May coroutine. Strands are fire-and-forget:
//! callers get an id back, not a join handle, and `wait_all_strands` is the
//! one place that waits for them.
//!
//! ## Lifecycle tracking
//!
//! - `ACTIVE_STRANDS`: lock-free counter, incremented on spawn and
//!   decremented when the strand body returns or unwinds.
//! - `SHUTDOWN_CONDVAR`/`SHUTDOWN_MUTEX`: cold path only, wakes
//!   `wait_all_strands` when the last strand exits.
//! - `TOTAL_SPAWNED`, `TOTAL_COMPLETED`, `PEAK_STRANDS`: monotonic
//!   statistics for the at-exit report.

use crate::config::RuntimeConfig;
use may::coroutine;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Condvar, Mutex, Once, OnceLock};
use std::time::{Duration, Instant};
use tracing::debug;

static SCHEDULER_INIT: Once = Once::new();
static SCHEDULER_START_TIME: OnceLock<Instant> = OnceLock::new();

pub static ACTIVE_STRANDS: AtomicUsize = AtomicUsize::new(0);
static SHUTDOWN_CONDVAR: Condvar = Condvar::new();
static SHUTDOWN_MUTEX: Mutex<()> = Mutex::new(());

pub static TOTAL_SPAWNED: AtomicU64 = AtomicU64::new(0);
pub static TOTAL_COMPLETED: AtomicU64 = AtomicU64::new(0);
pub static PEAK_STRANDS: AtomicUsize = AtomicUsize::new(0);

static NEXT_STRAND_ID: AtomicU64 = AtomicU64::new(1);

/// Initialize the scheduler from the environment.
///
/// Idempotent. `spawn_strand` calls it, so explicit calls are only needed to
/// start the wall clock early or to install the SIGINT handler up front.
pub fn scheduler_init() {
    scheduler_init_with(&RuntimeConfig::from_env());
}

/// Initialize the scheduler with an explicit configuration.
///
/// Only the first call (from either entry point) has any effect.
pub fn scheduler_init_with(config: &RuntimeConfig) {
    SCHEDULER_INIT.call_once(|| {
        config.apply();
        SCHEDULER_START_TIME.get_or_init(Instant::now);

        debug!(
            stack_size = config.stack_size,
            pool_capacity = config.pool_capacity,
            workers = ?config.workers,
            "scheduler initialized"
        );

        // Ctrl-C must still work while the main thread is parked in a race
        #[cfg(unix)]
        {
            use std::sync::atomic::AtomicBool;
            static SIGINT_RECEIVED: AtomicBool = AtomicBool::new(false);

            extern "C" fn sigint_handler(_: libc::c_int) {
                if SIGINT_RECEIVED.swap(true, Ordering::SeqCst) {
                    // Second SIGINT - exit immediately
                    unsafe { libc::_exit(130) };
                }
                std::process::exit(130);
            }

            // SAFETY: the handler only touches an atomic and exits the process
            unsafe {
                libc::signal(
                    libc::SIGINT,
                    sigint_handler as *const () as libc::sighandler_t,
                );
            }
        }
    });
}

/// Time since the scheduler was initialized
pub fn scheduler_elapsed() -> Option<Duration> {
    SCHEDULER_START_TIME.get().map(|start| start.elapsed())
}

/// Decrements the live-strand count when the strand body finishes,
/// including when it unwinds.
struct StrandGuard {
    strand_id: u64,
}

impl Drop for StrandGuard {
    fn drop(&mut self) {
        let prev_count = ACTIVE_STRANDS.fetch_sub(1, Ordering::AcqRel);
        TOTAL_COMPLETED.fetch_add(1, Ordering::Release);
        debug!(strand_id = self.strand_id, "strand completed");

        if prev_count == 1 {
            // Hold the mutex while notifying so a waiter cannot miss the wakeup
            let _guard = SHUTDOWN_MUTEX
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            SHUTDOWN_CONDVAR.notify_all();
        }
    }
}

/// Spawn a strand running `body`, returning its unique, positive id.
///
/// The strand is never joined individually; use `wait_all_strands` to wait
/// for every outstanding strand.
pub fn spawn_strand<F>(body: F) -> u64
where
    F: FnOnce() + Send + 'static,
{
    scheduler_init();

    let strand_id = NEXT_STRAND_ID.fetch_add(1, Ordering::Relaxed);

    let new_count = ACTIVE_STRANDS.fetch_add(1, Ordering::Release) + 1;
    TOTAL_SPAWNED.fetch_add(1, Ordering::Relaxed);

    // CAS loop keeps the high-water mark monotonic without a lock
    let mut peak = PEAK_STRANDS.load(Ordering::Acquire);
    while new_count > peak {
        match PEAK_STRANDS.compare_exchange_weak(
            peak,
            new_count,
            Ordering::Release,
            Ordering::Relaxed,
        ) {
            Ok(_) => break,
            Err(current) => peak = current,
        }
    }

    debug!(strand_id, active = new_count, "strand spawned");

    // SAFETY: May marks spawn unsafe because coroutines can migrate between
    // worker threads. Strand bodies do not hold thread-local references
    // across yield points.
    unsafe {
        coroutine::spawn(move || {
            let _guard = StrandGuard { strand_id };
            body();
        });
    }

    strand_id
}

/// Yield the current strand to the scheduler
pub fn yield_strand() {
    coroutine::yield_now();
}

/// Block the calling OS thread until every spawned strand has completed.
///
/// Uses the shutdown condvar, so there is no polling. Must not be called from
/// inside a strand: it parks the worker thread the strands need.
pub fn wait_all_strands() {
    let mut guard = SHUTDOWN_MUTEX
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    while ACTIVE_STRANDS.load(Ordering::Acquire) > 0 {
        guard = SHUTDOWN_CONDVAR
            .wait(guard)
            .unwrap_or_else(|poisoned| poisoned.into_inner());
    }
}
