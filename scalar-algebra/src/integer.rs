use crate::traits::{Ordered, Ring};
use num_traits::{AsPrimitive, PrimInt, WrappingAdd, WrappingMul, WrappingNeg, WrappingSub};
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// Fixed-width integers with two's-complement wraparound, e.g. `Integers::<u8>::new()` or
/// `Integers::<i64>::new()`.
///
/// Every ring operation wraps: `127i8 + 1 == -128` and `-(-128i8) == -128`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Integers<I> {
    _marker: PhantomData<I>,
}

impl<I> Integers<I> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<I> Ring for Integers<I>
where
    I: PrimInt + WrappingAdd + WrappingSub + WrappingMul + WrappingNeg + fmt::Debug + 'static,
    i64: AsPrimitive<I>,
{
    type Element = I;

    fn zero(&self) -> I {
        I::zero()
    }

    fn unity(&self) -> I {
        I::one()
    }

    fn from_i64(&self, value: i64) -> I {
        value.as_()
    }

    fn add(&self, a: &I, b: &I) -> I {
        a.wrapping_add(b)
    }

    fn subtract(&self, a: &I, b: &I) -> I {
        a.wrapping_sub(b)
    }

    fn multiply(&self, a: &I, b: &I) -> I {
        a.wrapping_mul(b)
    }

    fn negate(&self, a: &I) -> I {
        a.wrapping_neg()
    }

    fn is_equal(&self, a: &I, b: &I) -> bool {
        a == b
    }
}

impl<I> Ordered for Integers<I>
where
    I: PrimInt + WrappingAdd + WrappingSub + WrappingMul + WrappingNeg + fmt::Debug + 'static,
    i64: AsPrimitive<I>,
{
    fn compare(&self, a: &I, b: &I) -> Option<Ordering> {
        Some(a.cmp(b))
    }
}

/// Arbitrary precision integers.
#[cfg(feature = "bignum")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BigIntegers;

#[cfg(feature = "bignum")]
impl Ring for BigIntegers {
    type Element = num_bigint::BigInt;

    fn zero(&self) -> Self::Element {
        num_traits::Zero::zero()
    }

    fn unity(&self) -> Self::Element {
        num_traits::One::one()
    }

    fn from_i64(&self, value: i64) -> Self::Element {
        value.into()
    }

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a + b
    }

    fn subtract(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a - b
    }

    fn multiply(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a * b
    }

    fn negate(&self, a: &Self::Element) -> Self::Element {
        -a
    }

    fn is_equal(&self, a: &Self::Element, b: &Self::Element) -> bool {
        a == b
    }
}

#[cfg(feature = "bignum")]
impl Ordered for BigIntegers {
    fn compare(&self, a: &Self::Element, b: &Self::Element) -> Option<Ordering> {
        Some(a.cmp(b))
    }
}
