use crate::quaternion::Quaternion;
use crate::real::{approx_eq, float_from_i64};
use crate::traits::{Conjugate, Field, Normed, Ring, Rounding};
use num_traits::Float;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Octonion built as a Cayley-Dickson pair of quaternions: `low + high * l`.
///
/// Components `e0..e3` live in `low`, `e4..e7` in `high`. Multiplication is neither commutative nor
/// associative, but the algebra is alternative, so every nonzero element has a two-sided inverse.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Octonion<F> {
    pub low: Quaternion<F>,
    pub high: Quaternion<F>,
}

impl<F: Float> Octonion<F> {
    pub fn new(low: Quaternion<F>, high: Quaternion<F>) -> Self {
        Self { low, high }
    }

    pub fn from_components(e: [F; 8]) -> Self {
        Self::new(
            Quaternion::new(e[0], e[1], e[2], e[3]),
            Quaternion::new(e[4], e[5], e[6], e[7]),
        )
    }

    pub fn from_real(r: F) -> Self {
        Self::new(Quaternion::from_real(r), Quaternion::zero())
    }

    /// Unit `e_n`; `e0` is the real unit. `None` for `n >= 8`.
    pub fn unit(n: usize) -> Option<Self> {
        let mut e = [F::zero(); 8];
        *e.get_mut(n)? = F::one();
        Some(Self::from_components(e))
    }

    pub fn components(&self) -> [F; 8] {
        let [a, b, c, d] = self.low.components();
        let [e, f, g, h] = self.high.components();
        [a, b, c, d, e, f, g, h]
    }

    /// `(conj(low), -high)`
    pub fn conj(&self) -> Self {
        Self::new(self.low.conj(), -self.high)
    }

    pub fn norm_sqr(&self) -> F {
        self.low.norm_sqr() + self.high.norm_sqr()
    }

    fn map(&self, f: impl Fn(F) -> F + Copy) -> Self {
        Self::new(self.low.map(f), self.high.map(f))
    }
}

impl<F: Float> Add for Octonion<F> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.low + other.low, self.high + other.high)
    }
}

impl<F: Float> Sub for Octonion<F> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.low - other.low, self.high - other.high)
    }
}

impl<F: Float> Neg for Octonion<F> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.low, -self.high)
    }
}

// (a, b)(c, d) = (ac - conj(d)b, da + b conj(c))
impl<F: Float> Mul for Octonion<F> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let (a, b) = (self.low, self.high);
        let (c, d) = (other.low, other.high);

        Self::new(a * c - d.conj() * b, d * a + b * c.conj())
    }
}

impl<F: fmt::Display + Float> fmt::Display for Octonion<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (n, c) in self.components().iter().enumerate() {
            if n > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "}}")
    }
}

/// Octonions over a floating point component type.
#[derive(Clone, Copy, Debug)]
pub struct Octonions<F> {
    tolerance: F,
}

impl<F: Float> Octonions<F> {
    pub fn new() -> Self {
        Self {
            tolerance: F::zero(),
        }
    }

    pub fn with_tolerance(tolerance: F) -> Self {
        Self {
            tolerance: tolerance.abs(),
        }
    }
}

impl<F: Float> Default for Octonions<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float + fmt::Debug> Ring for Octonions<F> {
    type Element = Octonion<F>;

    fn zero(&self) -> Octonion<F> {
        Octonion::from_real(F::zero())
    }

    fn unity(&self) -> Octonion<F> {
        Octonion::from_real(F::one())
    }

    fn from_i64(&self, value: i64) -> Octonion<F> {
        Octonion::from_real(float_from_i64(value))
    }

    fn add(&self, a: &Octonion<F>, b: &Octonion<F>) -> Octonion<F> {
        *a + *b
    }

    fn subtract(&self, a: &Octonion<F>, b: &Octonion<F>) -> Octonion<F> {
        *a - *b
    }

    fn multiply(&self, a: &Octonion<F>, b: &Octonion<F>) -> Octonion<F> {
        *a * *b
    }

    fn negate(&self, a: &Octonion<F>) -> Octonion<F> {
        -*a
    }

    fn is_equal(&self, a: &Octonion<F>, b: &Octonion<F>) -> bool {
        a.components()
            .iter()
            .zip(b.components().iter())
            .all(|(&x, &y)| approx_eq(x, y, self.tolerance))
    }
}

impl<F: Float + fmt::Debug> Field for Octonions<F> {
    fn invert(&self, a: &Octonion<F>) -> Option<Octonion<F>> {
        if self.is_zero(a) {
            return None;
        }
        let scale = a.norm_sqr().recip();
        Some(a.conj().map(|c| c * scale))
    }
}

impl<F: Float + fmt::Debug> Conjugate for Octonions<F> {
    fn conjugate(&self, a: &Octonion<F>) -> Octonion<F> {
        a.conj()
    }
}

impl<F: Float + fmt::Debug> Normed for Octonions<F> {
    type Real = F;

    fn norm(&self, a: &Octonion<F>) -> F {
        a.norm_sqr().sqrt()
    }

    fn norm_squared(&self, a: &Octonion<F>) -> F {
        a.norm_sqr()
    }
}

impl<F: Float + fmt::Debug> Rounding for Octonions<F> {
    fn floor(&self, a: &Octonion<F>) -> Octonion<F> {
        a.map(F::floor)
    }

    fn ceil(&self, a: &Octonion<F>) -> Octonion<F> {
        a.map(F::ceil)
    }

    fn round(&self, a: &Octonion<F>) -> Octonion<F> {
        a.map(F::round)
    }

    fn trunc(&self, a: &Octonion<F>) -> Octonion<F> {
        a.map(F::trunc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imaginary_units_square_to_minus_one() {
        let o = Octonions::<f64>::new();
        let minus_one = o.from_i64(-1);

        for n in 1..8 {
            let e = Octonion::unit(n).unwrap();
            assert_eq!(o.multiply(&e, &e), minus_one, "e{n}^2");
        }
    }

    #[test]
    fn test_unit_rejects_out_of_range_index() {
        assert!(Octonion::<f64>::unit(8).is_none());
        assert!(Octonion::<f64>::unit(9).is_none());
        assert_eq!(Octonion::<f64>::unit(7).map(|e| e.components()[7]), Some(1.0));
    }

    #[test]
    fn test_multiplication_is_not_associative() {
        let o = Octonions::<f64>::new();
        let (i, j, l) = (
            Octonion::unit(1).unwrap(),
            Octonion::unit(2).unwrap(),
            Octonion::unit(4).unwrap(),
        );

        let left = o.multiply(&o.multiply(&i, &j), &l);
        let right = o.multiply(&i, &o.multiply(&j, &l));

        assert!(!o.is_equal(&left, &right));
        assert_eq!(left, o.negate(&right));
    }

    #[test]
    fn test_quaternion_subalgebra_is_preserved() {
        let o = Octonions::<f64>::new();
        let p = Quaternion::new(1.0, 2.0, -1.0, 0.5);
        let q = Quaternion::new(0.0, -3.0, 2.0, 1.0);

        let product = o.multiply(
            &Octonion::new(p, Quaternion::zero()),
            &Octonion::new(q, Quaternion::zero()),
        );

        assert_eq!(product, Octonion::new(p * q, Quaternion::zero()));
    }

    #[test]
    fn test_inverse_and_norm() {
        let o = Octonions::<f64>::with_tolerance(1e-12);
        let x = Octonion::from_components([1.0, -1.0, 2.0, 0.0, 0.5, 3.0, -2.0, 1.0]);

        let inverse = o.invert(&x).unwrap();
        assert!(o.is_unity(&o.multiply(&x, &inverse)));
        assert!(o.is_unity(&o.multiply(&inverse, &x)));
        assert_eq!(o.norm_squared(&x), 20.25);
        assert_eq!(o.norm(&x), 4.5);
        assert!(o.invert(&o.zero()).is_none());
        assert_eq!(o.conjugate(&o.conjugate(&x)), x);
    }

    #[test]
    fn test_display() {
        let x = Octonion::from_components([1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -2.5]);
        assert_eq!(x.to_string(), "{1, 0, 0, 0, 0, 0, 0, -2.5}");

        let o = Octonions::<f64>::new();
        assert_eq!(o.round(&x), Octonion::from_components([1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -3.0]));
    }
}
