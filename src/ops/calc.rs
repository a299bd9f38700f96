//! Calculator - derived numeric facts for one input number.
//!
//! Pure function from a number to squared/cubed/root/parity/factorial.
//! The only fallible path in the crate: non-finite input is rejected with
//! [`CalcError::InvalidInput`] and rendered at the call site.

use thiserror::Error;

/// Errors from the calculator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Input did not parse as a finite number.
    #[error("input is not a finite number: {0}")]
    InvalidInput(String),
}

/// Derived facts about one number.
#[derive(Debug, Clone, PartialEq)]
pub struct CalcReport {
    pub squared: f64,
    pub cubed: f64,
    /// Square root formatted with two decimals (NaN for negative input,
    /// matching f64 semantics).
    pub square_root: String,
    pub is_even: bool,
    /// Factorial. Defined only for non-negative integers that fit in u64;
    /// absent for negative, non-integer, or overflowing input.
    pub factorial: Option<u64>,
}

/// Compute the report for `n`.
///
/// # Errors
///
/// Returns [`CalcError::InvalidInput`] when `n` is NaN or infinite.
///
/// # Example
///
/// ```
/// use chalkboard::ops::calc::compute;
///
/// let report = compute(5.0).unwrap();
/// assert_eq!(report.squared, 25.0);
/// assert_eq!(report.cubed, 125.0);
/// assert_eq!(report.square_root, "2.24");
/// assert!(!report.is_even);
/// assert_eq!(report.factorial, Some(120));
/// ```
pub fn compute(n: f64) -> Result<CalcReport, CalcError> {
    if !n.is_finite() {
        return Err(CalcError::InvalidInput(n.to_string()));
    }

    Ok(CalcReport {
        squared: n * n,
        cubed: n * n * n,
        square_root: format!("{:.2}", n.sqrt()),
        is_even: n % 2.0 == 0.0,
        factorial: factorial(n),
    })
}

/// Compute the report for raw text input.
///
/// # Errors
///
/// Returns [`CalcError::InvalidInput`] when the text does not parse as a
/// finite number. This is the handler-facing entry point, so the whole
/// "not a number" taxonomy lives here rather than at each call site.
pub fn compute_str(input: &str) -> Result<CalcReport, CalcError> {
    let n: f64 = input
        .trim()
        .parse()
        .map_err(|_| CalcError::InvalidInput(input.to_string()))?;
    compute(n)
}

/// Factorial of `n`, when defined.
///
/// - 0 and 1 give `Some(1)`
/// - positive integers give the iterative product, `None` on u64 overflow
///   (anything above 20)
/// - negative and non-integer input give `None`
pub fn factorial(n: f64) -> Option<u64> {
    if n < 0.0 || n.fract() != 0.0 {
        return None;
    }
    if n > u64::MAX as f64 {
        return None;
    }

    let n = n as u64;
    let mut result: u64 = 1;
    for i in 2..=n {
        result = result.checked_mul(i)?;
    }
    Some(result)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_factorial_base_cases() {
        assert_eq!(factorial(0.0), Some(1));
        assert_eq!(factorial(1.0), Some(1));
    }

    #[test]
    fn test_factorial_matches_recursive_definition() {
        fn recursive(n: u64) -> u64 {
            if n <= 1 { 1 } else { n * recursive(n - 1) }
        }
        for n in 0..=20u64 {
            assert_eq!(factorial(n as f64), Some(recursive(n)), "n = {n}");
        }
    }

    #[test]
    fn test_factorial_undefined_inputs() {
        assert_eq!(factorial(-1.0), None);
        assert_eq!(factorial(-0.5), None);
        assert_eq!(factorial(3.7), None);
        // 21! overflows u64
        assert_eq!(factorial(21.0), None);
    }

    #[test]
    fn test_compute_rejects_non_finite() {
        assert!(matches!(
            compute(f64::NAN),
            Err(CalcError::InvalidInput(_))
        ));
        assert!(matches!(
            compute(f64::INFINITY),
            Err(CalcError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_compute_str_parses_or_rejects() {
        assert_eq!(compute_str("5").unwrap().factorial, Some(120));
        assert_eq!(compute_str("  2.5 ").unwrap().squared, 6.25);
        assert_eq!(
            compute_str("banana"),
            Err(CalcError::InvalidInput("banana".to_string()))
        );
        assert!(compute_str("").is_err());
    }

    #[test]
    fn test_compute_parity() {
        assert!(compute(4.0).unwrap().is_even);
        assert!(!compute(7.0).unwrap().is_even);
        assert!(compute(0.0).unwrap().is_even);
        assert!(compute(-2.0).unwrap().is_even);
    }

    #[test]
    fn test_square_root_two_decimals() {
        assert_eq!(compute(2.0).unwrap().square_root, "1.41");
        assert_eq!(compute(9.0).unwrap().square_root, "3.00");
        // Negative input: sqrt is NaN, formatted as-is
        assert_eq!(compute(-4.0).unwrap().square_root, "NaN");
    }

    proptest! {
        #[test]
        fn prop_square_and_cube(x in -1.0e6f64..1.0e6) {
            let report = compute(x).unwrap();
            prop_assert_eq!(report.squared, x * x);
            prop_assert_eq!(report.cubed, x * x * x);
            prop_assert_eq!(report.is_even, x % 2.0 == 0.0);
        }

        #[test]
        fn prop_negative_factorial_absent(x in -1.0e6f64..-f64::EPSILON) {
            prop_assert_eq!(factorial(x), None);
        }
    }
}
