//! Error type for the data demonstrations.
//!
//! Only division is fallible in the tutorial proper; the range and index
//! variants exist so sub-slicing and record updates return an error instead
//! of panicking on bad bounds.

/// Error raised by a core demonstration.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Divisor was zero
    DivisionByZero { dividend: f64 },
    /// `low..high` does not fit a sequence of length `len`
    RangeOutOfBounds { low: usize, high: usize, len: usize },
    /// `index` is past the end of a sequence of length `len`
    IndexOutOfBounds { index: usize, len: usize },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoreError::DivisionByZero { dividend } => {
                write!(f, "cannot divide {} by zero", dividend)
            }
            CoreError::RangeOutOfBounds { low, high, len } => write!(
                f,
                "slice bounds out of range [{}:{}] with length {}",
                low, high, len
            ),
            CoreError::IndexOutOfBounds { index, len } => {
                write!(f, "index {} out of range with length {}", index, len)
            }
        }
    }
}

impl std::error::Error for CoreError {}
