//! Assertion macros for testing resilmap operations.
//!
//! - [`crate::assert_score_eq!`] - Assert two scores agree within a tolerance
//!
//! # Example
//!
//! ```rust
//! use resilmap::assert_score_eq;
//!
//! assert_score_eq!(0.7700000001, 0.77);
//! ```

/// Assert two scores are equal within 1e-9 (or an explicit tolerance).
#[macro_export]
macro_rules! assert_score_eq {
    ($left:expr, $right:expr) => {
        $crate::assert_score_eq!($left, $right, 1e-9)
    };
    ($left:expr, $right:expr, $tolerance:expr) => {{
        let (left, right): (f64, f64) = ($left, $right);
        assert!(
            (left - right).abs() <= $tolerance,
            "scores differ: {} vs {} (tolerance {})",
            left,
            right,
            $tolerance
        );
    }};
}
