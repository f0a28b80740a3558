//! Library crate for scalar_algebra
//!
//! An algebra is a stateless value describing how to compute with one scalar type: it hands out
//! zero and unity, adds, multiplies, inverts and compares elements. Containers such as tensors and
//! matrices only ever talk to their elements through an algebra, so the same container code works for
//! wrapping integers, exact rationals, floats of any width, complex numbers, quaternions and octonions.
//!
//! Capabilities are split into small traits (see [`traits`]) and each algebra implements only the ones
//! its number system supports: quaternions are a [`Field`] but not [`Ordered`], wrapping integers are a
//! [`Ring`] but not a [`Field`].

mod complex;
mod integer;
mod octonion;
mod quaternion;
mod real;
pub mod traits;

#[cfg(feature = "bignum")]
mod rational;

#[cfg(test)]
mod property_tests;

pub use crate::complex::Complexes;
pub use crate::integer::Integers;
pub use crate::octonion::{Octonion, Octonions};
pub use crate::quaternion::{Quaternion, Quaternions};
pub use crate::real::Reals;
pub use crate::traits::{Conjugate, DivisionRing, Field, Normed, Ordered, Ring, Rounding, Transcendental};

pub use num_complex::Complex;

#[cfg(feature = "bignum")]
pub use crate::integer::BigIntegers;
#[cfg(feature = "bignum")]
pub use crate::rational::Rationals;
#[cfg(feature = "bignum")]
pub use num_bigint::BigInt;
#[cfg(feature = "bignum")]
pub use num_rational::BigRational;

#[cfg(feature = "f16")]
pub use half::f16;
