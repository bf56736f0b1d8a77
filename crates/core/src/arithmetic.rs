//! Fallible division
//!
//! A zero divisor is reported as `CoreError::DivisionByZero` instead of
//! producing infinity or NaN. Callers are expected to check the result
//! immediately and stop on error.

use crate::error::CoreError;

pub fn divide(a: f64, b: f64) -> Result<f64, CoreError> {
    if b == 0.0 {
        return Err(CoreError::DivisionByZero { dividend: a });
    }
    Ok(a / b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divide() {
        assert_eq!(divide(10.0, 2.0), Ok(5.0));
        assert_eq!(divide(-9.0, 3.0), Ok(-3.0));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            divide(10.0, 0.0),
            Err(CoreError::DivisionByZero { dividend: 10.0 })
        );
    }

    #[test]
    fn test_negative_zero_divisor() {
        // -0.0 == 0.0, so it is rejected too
        assert!(divide(1.0, -0.0).is_err());
    }
}
