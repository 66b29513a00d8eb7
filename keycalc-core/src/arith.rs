//! Arithmetic engine
//!
//! Pure two-operand integer arithmetic. Every input has a defined result:
//! overflow wraps at the `i32` width, and undefined operations produce the
//! sentinel [`SENTINEL`] instead of an error.

use crate::key::Operator;

/// Result of an undefined operation (division by zero, missing operator)
pub const SENTINEL: i32 = 0;

/// Apply `op` to `a` and `b`
///
/// Division truncates toward zero; dividing by zero yields [`SENTINEL`].
pub fn evaluate(a: i32, b: i32, op: Operator) -> i32 {
    match op {
        Operator::Add => a.wrapping_add(b),
        Operator::Sub => a.wrapping_sub(b),
        Operator::Mul => a.wrapping_mul(b),
        Operator::Div => {
            if b == 0 {
                SENTINEL
            } else {
                a.wrapping_div(b)
            }
        }
    }
}

/// Evaluate with an operator that may not have been entered
///
/// `=` pressed with nothing pending lands here with `None`.
pub fn evaluate_pending(a: i32, b: i32, op: Option<Operator>) -> i32 {
    op.map_or(SENTINEL, |op| evaluate(a, b, op))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(evaluate(12, 3, Operator::Add), 15);
        assert_eq!(evaluate(12, 3, Operator::Sub), 9);
        assert_eq!(evaluate(3, 12, Operator::Sub), -9);
        assert_eq!(evaluate(12, 3, Operator::Mul), 36);
        assert_eq!(evaluate(12, 3, Operator::Div), 4);
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        assert_eq!(evaluate(7, 2, Operator::Div), 3);
        assert_eq!(evaluate(-7, 2, Operator::Div), -3);
        assert_eq!(evaluate(7, -2, Operator::Div), -3);
        assert_eq!(evaluate(1, 5, Operator::Div), 0);
    }

    #[test]
    fn test_divide_by_zero_is_sentinel() {
        assert_eq!(evaluate(5, 0, Operator::Div), 0);
        assert_eq!(evaluate(0, 0, Operator::Div), 0);
        assert_eq!(evaluate(i32::MIN, 0, Operator::Div), 0);
    }

    #[test]
    fn test_overflow_wraps() {
        assert_eq!(evaluate(i32::MAX, 1, Operator::Add), i32::MIN);
        assert_eq!(evaluate(i32::MIN, 1, Operator::Sub), i32::MAX);
        assert_eq!(evaluate(i32::MIN, -1, Operator::Div), i32::MIN);
        assert_eq!(evaluate(65536, 65536, Operator::Mul), 0);
    }

    #[test]
    fn test_missing_operator() {
        assert_eq!(evaluate_pending(12, 0, None), 0);
        assert_eq!(evaluate_pending(12, 3, Some(Operator::Add)), 15);
    }

    proptest! {
        #[test]
        fn prop_add_sub_mul_match_native(a in -10_000i32..10_000, b in -10_000i32..10_000) {
            prop_assert_eq!(evaluate(a, b, Operator::Add), a + b);
            prop_assert_eq!(evaluate(a, b, Operator::Sub), a - b);
            prop_assert_eq!(evaluate(a, b, Operator::Mul), a * b);
        }

        #[test]
        fn prop_wrapping_over_full_range(a in any::<i32>(), b in any::<i32>()) {
            prop_assert_eq!(evaluate(a, b, Operator::Add), a.wrapping_add(b));
            prop_assert_eq!(evaluate(a, b, Operator::Sub), a.wrapping_sub(b));
            prop_assert_eq!(evaluate(a, b, Operator::Mul), a.wrapping_mul(b));
        }

        #[test]
        fn prop_divide_by_zero(a in any::<i32>()) {
            prop_assert_eq!(evaluate(a, 0, Operator::Div), 0);
        }

        #[test]
        fn prop_division_truncates(a in any::<i32>(), b in any::<i32>().prop_filter("non-zero", |b| *b != 0)) {
            let q = evaluate(a, b, Operator::Div);
            prop_assert_eq!(q, a.wrapping_div(b));
            if !(a == i32::MIN && b == -1) {
                // Truncated quotient, remainder carries the sign of a
                prop_assert_eq!(q, a / b);
                prop_assert_eq!(a - q * b, a % b);
            }
        }
    }
}
