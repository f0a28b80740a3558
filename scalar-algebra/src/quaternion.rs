use crate::real::{approx_eq, float_from_i64};
use crate::traits::{Conjugate, DivisionRing, Field, Normed, Ring, Rounding};
use num_traits::Float;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Quaternion `r + i*x + j*y + k*z`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Quaternion<F> {
    pub r: F,
    pub i: F,
    pub j: F,
    pub k: F,
}

impl<F: Float> Quaternion<F> {
    pub fn new(r: F, i: F, j: F, k: F) -> Self {
        Self { r, i, j, k }
    }

    pub fn from_real(r: F) -> Self {
        Self::new(r, F::zero(), F::zero(), F::zero())
    }

    pub fn zero() -> Self {
        Self::from_real(F::zero())
    }

    pub fn one() -> Self {
        Self::from_real(F::one())
    }

    /// `(r, -i, -j, -k)`
    pub fn conj(&self) -> Self {
        Self::new(self.r, -self.i, -self.j, -self.k)
    }

    pub fn norm_sqr(&self) -> F {
        self.r * self.r + self.i * self.i + self.j * self.j + self.k * self.k
    }

    pub fn scale(&self, factor: F) -> Self {
        self.map(|c| c * factor)
    }

    pub(crate) fn map(&self, f: impl Fn(F) -> F) -> Self {
        Self::new(f(self.r), f(self.i), f(self.j), f(self.k))
    }

    pub(crate) fn components(&self) -> [F; 4] {
        [self.r, self.i, self.j, self.k]
    }
}

impl<F: Float> Add for Quaternion<F> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(
            self.r + other.r,
            self.i + other.i,
            self.j + other.j,
            self.k + other.k,
        )
    }
}

impl<F: Float> Sub for Quaternion<F> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(
            self.r - other.r,
            self.i - other.i,
            self.j - other.j,
            self.k - other.k,
        )
    }
}

impl<F: Float> Neg for Quaternion<F> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

// Hamilton product, i^2 = j^2 = k^2 = ijk = -1
impl<F: Float> Mul for Quaternion<F> {
    type Output = Self;

    fn mul(self, o: Self) -> Self {
        Self::new(
            self.r * o.r - self.i * o.i - self.j * o.j - self.k * o.k,
            self.r * o.i + self.i * o.r + self.j * o.k - self.k * o.j,
            self.r * o.j - self.i * o.k + self.j * o.r + self.k * o.i,
            self.r * o.k + self.i * o.j - self.j * o.i + self.k * o.r,
        )
    }
}

impl<F: fmt::Display> fmt::Display for Quaternion<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}, {}, {}}}", self.r, self.i, self.j, self.k)
    }
}

/// Quaternions over a floating point component type: a non-commutative division ring.
#[derive(Clone, Copy, Debug)]
pub struct Quaternions<F> {
    tolerance: F,
}

impl<F: Float> Quaternions<F> {
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

impl<F: Float> Default for Quaternions<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float + fmt::Debug> Ring for Quaternions<F> {
    type Element = Quaternion<F>;

    fn zero(&self) -> Quaternion<F> {
        Quaternion::zero()
    }

    fn unity(&self) -> Quaternion<F> {
        Quaternion::one()
    }

    fn from_i64(&self, value: i64) -> Quaternion<F> {
        Quaternion::from_real(float_from_i64(value))
    }

    fn add(&self, a: &Quaternion<F>, b: &Quaternion<F>) -> Quaternion<F> {
        *a + *b
    }

    fn subtract(&self, a: &Quaternion<F>, b: &Quaternion<F>) -> Quaternion<F> {
        *a - *b
    }

    fn multiply(&self, a: &Quaternion<F>, b: &Quaternion<F>) -> Quaternion<F> {
        *a * *b
    }

    fn negate(&self, a: &Quaternion<F>) -> Quaternion<F> {
        -*a
    }

    fn is_equal(&self, a: &Quaternion<F>, b: &Quaternion<F>) -> bool {
        a.components()
            .iter()
            .zip(b.components().iter())
            .all(|(&x, &y)| approx_eq(x, y, self.tolerance))
    }
}

impl<F: Float + fmt::Debug> Field for Quaternions<F> {
    /// `q^-1 = conj(q) / |q|^2`, a two-sided inverse.
    fn invert(&self, a: &Quaternion<F>) -> Option<Quaternion<F>> {
        if self.is_zero(a) {
            return None;
        }
        Some(a.conj().scale(a.norm_sqr().recip()))
    }
}

impl<F: Float + fmt::Debug> DivisionRing for Quaternions<F> {}

impl<F: Float + fmt::Debug> Conjugate for Quaternions<F> {
    fn conjugate(&self, a: &Quaternion<F>) -> Quaternion<F> {
        a.conj()
    }
}

impl<F: Float + fmt::Debug> Normed for Quaternions<F> {
    type Real = F;

    fn norm(&self, a: &Quaternion<F>) -> F {
        a.norm_sqr().sqrt()
    }

    fn norm_squared(&self, a: &Quaternion<F>) -> F {
        a.norm_sqr()
    }
}

impl<F: Float + fmt::Debug> Rounding for Quaternions<F> {
    fn floor(&self, a: &Quaternion<F>) -> Quaternion<F> {
        a.map(F::floor)
    }

    fn ceil(&self, a: &Quaternion<F>) -> Quaternion<F> {
        a.map(F::ceil)
    }

    fn round(&self, a: &Quaternion<F>) -> Quaternion<F> {
        a.map(F::round)
    }

    fn trunc(&self, a: &Quaternion<F>) -> Quaternion<F> {
        a.map(F::trunc)
    }
}
