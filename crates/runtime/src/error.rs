//! Conduit errors
//!
//! Every fallible conduit operation returns `ConduitError` rather than
//! panicking. `TimedOut` is an ordinary outcome of a deadline race; `Closed`
//! means the other side of the conduit is gone.

/// Error from a conduit send or receive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConduitError {
    /// The opposite capability was dropped and no value is buffered
    Closed,
    /// The single slot is occupied (non-blocking send only)
    Full,
    /// The deadline passed before a value arrived
    TimedOut,
}

impl std::fmt::Display for ConduitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConduitError::Closed => write!(f, "conduit closed"),
            ConduitError::Full => write!(f, "conduit slot is full"),
            ConduitError::TimedOut => write!(f, "timed out waiting on conduit"),
        }
    }
}

impl std::error::Error for ConduitError {}
