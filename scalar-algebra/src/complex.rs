use crate::real::{approx_eq, float_from_i64};
use crate::traits::{Conjugate, DivisionRing, Field, Normed, Ring, Rounding, Transcendental};
use num_complex::Complex;
use num_traits::Float;
use std::fmt;

/// Complex numbers over a floating point component type.
///
/// The optional tolerance applies to each component separately.
#[derive(Clone, Copy, Debug)]
pub struct Complexes<F> {
    tolerance: F,
}

impl<F: Float> Complexes<F> {
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

impl<F: Float> Default for Complexes<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float + fmt::Debug> Ring for Complexes<F> {
    type Element = Complex<F>;

    fn zero(&self) -> Complex<F> {
        Complex::new(F::zero(), F::zero())
    }

    fn unity(&self) -> Complex<F> {
        Complex::new(F::one(), F::zero())
    }

    fn from_i64(&self, value: i64) -> Complex<F> {
        Complex::new(float_from_i64(value), F::zero())
    }

    fn add(&self, a: &Complex<F>, b: &Complex<F>) -> Complex<F> {
        *a + *b
    }

    fn subtract(&self, a: &Complex<F>, b: &Complex<F>) -> Complex<F> {
        *a - *b
    }

    fn multiply(&self, a: &Complex<F>, b: &Complex<F>) -> Complex<F> {
        *a * *b
    }

    fn negate(&self, a: &Complex<F>) -> Complex<F> {
        -*a
    }

    fn is_equal(&self, a: &Complex<F>, b: &Complex<F>) -> bool {
        approx_eq(a.re, b.re, self.tolerance) && approx_eq(a.im, b.im, self.tolerance)
    }
}

impl<F: Float + fmt::Debug> Field for Complexes<F> {
    fn invert(&self, a: &Complex<F>) -> Option<Complex<F>> {
        if self.is_zero(a) { None } else { Some(a.inv()) }
    }
}

impl<F: Float + fmt::Debug> DivisionRing for Complexes<F> {}

impl<F: Float + fmt::Debug> Conjugate for Complexes<F> {
    fn conjugate(&self, a: &Complex<F>) -> Complex<F> {
        a.conj()
    }
}

impl<F: Float + fmt::Debug> Normed for Complexes<F> {
    type Real = F;

    fn norm(&self, a: &Complex<F>) -> F {
        a.norm()
    }

    fn norm_squared(&self, a: &Complex<F>) -> F {
        a.norm_sqr()
    }
}

impl<F: Float + fmt::Debug> Rounding for Complexes<F> {
    fn floor(&self, a: &Complex<F>) -> Complex<F> {
        Complex::new(a.re.floor(), a.im.floor())
    }

    fn ceil(&self, a: &Complex<F>) -> Complex<F> {
        Complex::new(a.re.ceil(), a.im.ceil())
    }

    fn round(&self, a: &Complex<F>) -> Complex<F> {
        Complex::new(a.re.round(), a.im.round())
    }

    fn trunc(&self, a: &Complex<F>) -> Complex<F> {
        Complex::new(a.re.trunc(), a.im.trunc())
    }
}

impl<F: Float + fmt::Debug> Transcendental for Complexes<F> {
    fn exp(&self, a: &Complex<F>) -> Complex<F> {
        a.exp()
    }

    fn ln(&self, a: &Complex<F>) -> Complex<F> {
        a.ln()
    }

    fn sqrt(&self, a: &Complex<F>) -> Complex<F> {
        a.sqrt()
    }

    fn sin(&self, a: &Complex<F>) -> Complex<F> {
        a.sin()
    }

    fn cos(&self, a: &Complex<F>) -> Complex<F> {
        a.cos()
    }

    fn tan(&self, a: &Complex<F>) -> Complex<F> {
        a.tan()
    }
}
