//! Runtime tuning from environment variables
//!
//! - `PRIMER_STACK_SIZE`: coroutine stack size in bytes (default 128KB)
//! - `PRIMER_POOL_CAPACITY`: coroutine stack pool size (default 10000)
//! - `PRIMER_WORKERS`: scheduler worker threads (default: May's own choice)
//!
//! Zero or non-numeric values are ignored with a warning.

use tracing::warn;

/// Default coroutine stack size: 128KB (0x20000 bytes)
pub const DEFAULT_STACK_SIZE: usize = 0x20000;

/// Default coroutine pool capacity (10x May's own default of 1000)
pub const DEFAULT_POOL_CAPACITY: usize = 10000;

pub const STACK_SIZE_VAR: &str = "PRIMER_STACK_SIZE";
pub const POOL_CAPACITY_VAR: &str = "PRIMER_POOL_CAPACITY";
pub const WORKERS_VAR: &str = "PRIMER_WORKERS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub stack_size: usize,
    pub pool_capacity: usize,
    /// `None` leaves May's worker count alone
    pub workers: Option<usize>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig {
            stack_size: DEFAULT_STACK_SIZE,
            pool_capacity: DEFAULT_POOL_CAPACITY,
            workers: None,
        }
    }
}

impl RuntimeConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        RuntimeConfig {
            stack_size: parse_positive(STACK_SIZE_VAR, lookup(STACK_SIZE_VAR))
                .unwrap_or(DEFAULT_STACK_SIZE),
            pool_capacity: parse_positive(POOL_CAPACITY_VAR, lookup(POOL_CAPACITY_VAR))
                .unwrap_or(DEFAULT_POOL_CAPACITY),
            workers: parse_positive(WORKERS_VAR, lookup(WORKERS_VAR)),
        }
    }

    /// Push the settings into May's global configuration.
    ///
    /// Must run before the first coroutine is spawned to take effect.
    pub fn apply(&self) {
        let config = may::config();
        config
            .set_stack_size(self.stack_size)
            .set_pool_capacity(self.pool_capacity);
        if let Some(workers) = self.workers {
            config.set_workers(workers);
        }
    }
}

/// Parse a strictly positive integer, warning on anything else.
fn parse_positive(name: &str, value: Option<String>) -> Option<usize> {
    let raw = value?;
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<usize>() {
        Ok(0) => {
            warn!("{}=0 is invalid, using default", name);
            None
        }
        Ok(n) => Some(n),
        Err(_) => {
            warn!("{}='{}' is not a valid number, using default", name, raw);
            None
        }
    }
}
