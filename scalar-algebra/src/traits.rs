//! Capability traits implemented by scalar algebras.
//!
//! Every trait takes `&self` so that algebras can carry immutable configuration (for example an
//! equality tolerance), but no operation mutates the algebra: one value can be shared by reference
//! across any number of containers.

use std::cmp::Ordering;
use std::fmt;

/// Ring operations: the minimum a type needs to be stored in a tensor and multiplied as a matrix.
///
/// Multiplication is not assumed to be commutative or associative, containers keep operand order
/// as written (`multiply(a, b)` is `a * b`).
pub trait Ring {
    type Element: Clone + fmt::Debug;

    /// Additive identity.
    fn zero(&self) -> Self::Element;

    /// Multiplicative identity.
    fn unity(&self) -> Self::Element;

    /// Embeds an integer, wrapping or rounding the way the number system does.
    fn from_i64(&self, value: i64) -> Self::Element;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    fn subtract(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    fn multiply(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    fn negate(&self, a: &Self::Element) -> Self::Element;

    /// Equality as the algebra defines it; may be approximate for floating point algebras.
    fn is_equal(&self, a: &Self::Element, b: &Self::Element) -> bool;

    fn is_zero(&self, a: &Self::Element) -> bool {
        self.is_equal(a, &self.zero())
    }

    fn is_unity(&self, a: &Self::Element) -> bool {
        self.is_equal(a, &self.unity())
    }
}

/// Division algebra operations: every nonzero element has a two-sided inverse. Multiplication is not
/// required to be associative, so octonions qualify.
pub trait Field: Ring {
    /// Multiplicative inverse, `None` when `a` is zero according to [`Ring::is_zero`].
    fn invert(&self, a: &Self::Element) -> Option<Self::Element>;

    /// Right division `a * b^-1`, `None` when `b` is zero.
    fn divide(&self, a: &Self::Element, b: &Self::Element) -> Option<Self::Element> {
        let inverse = self.invert(b)?;
        Some(self.multiply(a, &inverse))
    }
}

/// Associative division ring: `(a * b) * c == a * (b * c)` on top of [`Field`].
///
/// Matrix inversion and determinants eliminate with chains of row operations and are only meaningful
/// under this bound. Reals, complex numbers, quaternions and rationals implement it, octonions do not.
pub trait DivisionRing: Field {}

/// Involution reversing the sign of imaginary components.
pub trait Conjugate: Ring {
    fn conjugate(&self, a: &Self::Element) -> Self::Element;
}

/// Magnitude of an element expressed in an associated real type.
pub trait Normed: Ring {
    type Real: Clone + fmt::Debug;

    fn norm(&self, a: &Self::Element) -> Self::Real;

    fn norm_squared(&self, a: &Self::Element) -> Self::Real;
}

pub trait Ordered: Ring {
    /// Returns `None` for unordered pairs such as NaN.
    fn compare(&self, a: &Self::Element, b: &Self::Element) -> Option<Ordering>;

    fn is_less(&self, a: &Self::Element, b: &Self::Element) -> bool {
        self.compare(a, b) == Some(Ordering::Less)
    }
}

/// Rounding to integral values, applied componentwise for multi-component types.
pub trait Rounding: Ring {
    fn floor(&self, a: &Self::Element) -> Self::Element;

    fn ceil(&self, a: &Self::Element) -> Self::Element;

    /// Rounds half away from zero.
    fn round(&self, a: &Self::Element) -> Self::Element;

    fn trunc(&self, a: &Self::Element) -> Self::Element;
}

/// Exponential, logarithmic and trigonometric functions (principal branches).
pub trait Transcendental: Ring {
    fn exp(&self, a: &Self::Element) -> Self::Element;

    fn ln(&self, a: &Self::Element) -> Self::Element;

    fn sqrt(&self, a: &Self::Element) -> Self::Element;

    fn sin(&self, a: &Self::Element) -> Self::Element;

    fn cos(&self, a: &Self::Element) -> Self::Element;

    fn tan(&self, a: &Self::Element) -> Self::Element;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Complexes, Quaternions, Reals};

    fn elimination_ready<A: DivisionRing>(alg: &A, a: &A::Element) -> bool {
        alg.invert(a).is_some()
    }

    #[test]
    fn test_associative_division_rings() {
        assert!(elimination_ready(&Reals::<f32>::new(), &2.0));
        assert!(elimination_ready(&Complexes::<f64>::new(), &num_complex::Complex::new(0.0, 1.0)));
        assert!(elimination_ready(&Quaternions::<f64>::new(), &crate::Quaternion::one()));
        #[cfg(feature = "bignum")]
        assert!(elimination_ready(&crate::Rationals, &num_rational::BigRational::from_integer(3.into())));
    }
}
