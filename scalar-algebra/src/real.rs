use crate::traits::{Conjugate, DivisionRing, Field, Normed, Ordered, Ring, Rounding, Transcendental};
use num_traits::Float;
use std::cmp::Ordering;
use std::fmt;

/// Real numbers represented by a floating point type: `half::f16`, `f32` or `f64`.
///
/// Equality is exact unless a tolerance is configured, in which case two values are equal when their
/// absolute difference does not exceed it. The tolerance also drives [`Ring::is_zero`], which is what
/// pivot selection in matrix inversion relies on.
#[derive(Clone, Copy, Debug)]
pub struct Reals<F> {
    tolerance: F,
}

impl<F: Float> Reals<F> {
    /// Creates an algebra with exact equality.
    pub fn new() -> Self {
        Self {
            tolerance: F::zero(),
        }
    }

    /// Creates an algebra treating values within `tolerance` of each other as equal.
    pub fn with_tolerance(tolerance: F) -> Self {
        Self {
            tolerance: tolerance.abs(),
        }
    }

    pub fn tolerance(&self) -> F {
        self.tolerance
    }
}

impl<F: Float> Default for Reals<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Compares two floats either exactly or within an absolute tolerance. Infinities compare equal only
/// to themselves.
pub(crate) fn approx_eq<F: Float>(a: F, b: F, tolerance: F) -> bool {
    a == b || (a - b).abs() <= tolerance
}

/// Converts an integer to a float, producing NaN when the target type cannot represent the conversion.
pub(crate) fn float_from_i64<F: Float>(value: i64) -> F {
    num_traits::cast::<i64, F>(value).unwrap_or_else(F::nan)
}

impl<F: Float + fmt::Debug> Ring for Reals<F> {
    type Element = F;

    fn zero(&self) -> F {
        F::zero()
    }

    fn unity(&self) -> F {
        F::one()
    }

    fn from_i64(&self, value: i64) -> F {
        float_from_i64(value)
    }

    fn add(&self, a: &F, b: &F) -> F {
        *a + *b
    }

    fn subtract(&self, a: &F, b: &F) -> F {
        *a - *b
    }

    fn multiply(&self, a: &F, b: &F) -> F {
        *a * *b
    }

    fn negate(&self, a: &F) -> F {
        -*a
    }

    fn is_equal(&self, a: &F, b: &F) -> bool {
        approx_eq(*a, *b, self.tolerance)
    }
}

impl<F: Float + fmt::Debug> Field for Reals<F> {
    fn invert(&self, a: &F) -> Option<F> {
        if self.is_zero(a) {
            None
        } else {
            Some(a.recip())
        }
    }
}

impl<F: Float + fmt::Debug> DivisionRing for Reals<F> {}

impl<F: Float + fmt::Debug> Conjugate for Reals<F> {
    fn conjugate(&self, a: &F) -> F {
        *a
    }
}

impl<F: Float + fmt::Debug> Normed for Reals<F> {
    type Real = F;

    fn norm(&self, a: &F) -> F {
        a.abs()
    }

    fn norm_squared(&self, a: &F) -> F {
        *a * *a
    }
}

impl<F: Float + fmt::Debug> Ordered for Reals<F> {
    fn compare(&self, a: &F, b: &F) -> Option<Ordering> {
        if self.is_equal(a, b) {
            Some(Ordering::Equal)
        } else {
            a.partial_cmp(b)
        }
    }
}

impl<F: Float + fmt::Debug> Rounding for Reals<F> {
    fn floor(&self, a: &F) -> F {
        a.floor()
    }

    fn ceil(&self, a: &F) -> F {
        a.ceil()
    }

    fn round(&self, a: &F) -> F {
        a.round()
    }

    fn trunc(&self, a: &F) -> F {
        a.trunc()
    }
}

impl<F: Float + fmt::Debug> Transcendental for Reals<F> {
    fn exp(&self, a: &F) -> F {
        a.exp()
    }

    fn ln(&self, a: &F) -> F {
        a.ln()
    }

    fn sqrt(&self, a: &F) -> F {
        a.sqrt()
    }

    fn sin(&self, a: &F) -> F {
        a.sin()
    }

    fn cos(&self, a: &F) -> F {
        a.cos()
    }

    fn tan(&self, a: &F) -> F {
        a.tan()
    }
}
