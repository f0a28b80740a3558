use crate::traits::{DivisionRing, Field, Normed, Ordered, Ring, Rounding};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;

/// Exact arbitrary precision rationals. Equality is exact, so matrix inversion over this algebra never
/// mistakes a tiny pivot for zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rationals;

impl Rationals {
    /// Builds `numerator / denominator` in lowest terms, `None` for a zero denominator.
    pub fn ratio(&self, numerator: i64, denominator: i64) -> Option<BigRational> {
        if denominator == 0 {
            None
        } else {
            Some(BigRational::new(numerator.into(), denominator.into()))
        }
    }
}

impl Ring for Rationals {
    type Element = BigRational;

    fn zero(&self) -> BigRational {
        BigRational::zero()
    }

    fn unity(&self) -> BigRational {
        BigRational::one()
    }

    fn from_i64(&self, value: i64) -> BigRational {
        BigRational::from_integer(BigInt::from(value))
    }

    fn add(&self, a: &BigRational, b: &BigRational) -> BigRational {
        a + b
    }

    fn subtract(&self, a: &BigRational, b: &BigRational) -> BigRational {
        a - b
    }

    fn multiply(&self, a: &BigRational, b: &BigRational) -> BigRational {
        a * b
    }

    fn negate(&self, a: &BigRational) -> BigRational {
        -a
    }

    fn is_equal(&self, a: &BigRational, b: &BigRational) -> bool {
        a == b
    }

    fn is_zero(&self, a: &BigRational) -> bool {
        a.is_zero()
    }
}

impl Field for Rationals {
    fn invert(&self, a: &BigRational) -> Option<BigRational> {
        if a.is_zero() { None } else { Some(a.recip()) }
    }
}

impl DivisionRing for Rationals {}

impl Normed for Rationals {
    type Real = BigRational;

    fn norm(&self, a: &BigRational) -> BigRational {
        a.abs()
    }

    fn norm_squared(&self, a: &BigRational) -> BigRational {
        a * a
    }
}

impl Ordered for Rationals {
    fn compare(&self, a: &BigRational, b: &BigRational) -> Option<Ordering> {
        Some(a.cmp(b))
    }
}

impl Rounding for Rationals {
    fn floor(&self, a: &BigRational) -> BigRational {
        a.floor()
    }

    fn ceil(&self, a: &BigRational) -> BigRational {
        a.ceil()
    }

    fn round(&self, a: &BigRational) -> BigRational {
        a.round()
    }

    fn trunc(&self, a: &BigRational) -> BigRational {
        a.trunc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_arithmetic() {
        let q = Rationals;
        let third = q.ratio(1, 3).unwrap();
        let sixth = q.ratio(1, 6).unwrap();

        assert_eq!(q.add(&third, &sixth), q.ratio(1, 2).unwrap());
        assert_eq!(q.subtract(&sixth, &third), q.ratio(-1, 6).unwrap());
        assert_eq!(q.multiply(&third, &sixth), q.ratio(1, 18).unwrap());
        assert_eq!(q.negate(&third), q.ratio(-1, 3).unwrap());
        assert!(q.ratio(1, 0).is_none());
    }

    #[test]
    fn test_invert_and_divide() {
        let q = Rationals;
        let two = q.from_i64(2);

        assert_eq!(q.invert(&two), q.ratio(1, 2));
        assert_eq!(q.invert(&q.zero()), None);
        assert_eq!(q.divide(&q.from_i64(3), &two), q.ratio(3, 2));
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        let q = Rationals;
        let value = q.ratio(-5, 2).unwrap();

        assert_eq!(q.round(&value), q.from_i64(-3));
        assert_eq!(q.floor(&value), q.from_i64(-3));
        assert_eq!(q.ceil(&value), q.from_i64(-2));
        assert_eq!(q.trunc(&value), q.from_i64(-2));
        assert_eq!(q.norm(&value), q.ratio(5, 2).unwrap());
        assert_eq!(q.norm_squared(&value), q.ratio(25, 4).unwrap());
        assert!(q.is_less(&value, &q.zero()));
    }
}
