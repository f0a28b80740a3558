//! Position-wise combinators and the algebra-bound entrywise operations built on them.
//!
//! The free functions require every input and the destination to share one shape and never reshape
//! the destination. Since a destination cannot alias a borrowed input, the in-place variants cover the
//! `a = op(a, b)` case.

use crate::shape::ensure_same_shape;
use crate::{Result, Tensor, TensorError};
use scalar_algebra::{Conjugate, Field, Ring};

/// `dst[i] = op(src[i])`
pub fn map<T, U, const N: usize>(
    src: &Tensor<T, N>,
    dst: &mut Tensor<U, N>,
    mut op: impl FnMut(&T) -> U,
) -> Result<()> {
    ensure_same_shape("map destination", src.shape(), dst.shape())?;

    for (out, x) in dst.data.iter_mut().zip(&src.data) {
        *out = op(x);
    }
    Ok(())
}

/// `dst[i] = op(a[i], b[i])`
pub fn zip<T, U, V, const N: usize>(
    a: &Tensor<T, N>,
    b: &Tensor<U, N>,
    dst: &mut Tensor<V, N>,
    mut op: impl FnMut(&T, &U) -> V,
) -> Result<()> {
    ensure_same_shape("zip operand", a.shape(), b.shape())?;
    ensure_same_shape("zip destination", a.shape(), dst.shape())?;

    for ((out, x), y) in dst.data.iter_mut().zip(&a.data).zip(&b.data) {
        *out = op(x, y);
    }
    Ok(())
}

/// `dst[i] = op(a[i], b[i], c[i])`
pub fn zip3<T, U, V, W, const N: usize>(
    a: &Tensor<T, N>,
    b: &Tensor<U, N>,
    c: &Tensor<V, N>,
    dst: &mut Tensor<W, N>,
    mut op: impl FnMut(&T, &U, &V) -> W,
) -> Result<()> {
    ensure_same_shape("zip3 operand", a.shape(), b.shape())?;
    ensure_same_shape("zip3 operand", a.shape(), c.shape())?;
    ensure_same_shape("zip3 destination", a.shape(), dst.shape())?;

    for (((out, x), y), z) in dst.data.iter_mut().zip(&a.data).zip(&b.data).zip(&c.data) {
        *out = op(x, y, z);
    }
    Ok(())
}

/// `dst[i] = op(dst[i])`
pub fn map_in_place<T, const N: usize>(dst: &mut Tensor<T, N>, mut op: impl FnMut(&T) -> T) {
    for x in dst.data.iter_mut() {
        *x = op(&*x);
    }
}

/// `dst[i] = op(dst[i], b[i])`
pub fn zip_in_place<T, U, const N: usize>(
    dst: &mut Tensor<T, N>,
    b: &Tensor<U, N>,
    mut op: impl FnMut(&T, &U) -> T,
) -> Result<()> {
    ensure_same_shape("zip operand", dst.shape(), b.shape())?;

    for (x, y) in dst.data.iter_mut().zip(&b.data) {
        *x = op(&*x, y);
    }
    Ok(())
}

fn map_new<T, U, const N: usize>(src: &Tensor<T, N>, op: impl FnMut(&T) -> U) -> Tensor<U, N> {
    Tensor {
        data: src.data.iter().map(op).collect(),
        index: src.index.clone(),
    }
}

fn zip_new<T, U, V, const N: usize>(
    a: &Tensor<T, N>,
    b: &Tensor<U, N>,
    mut op: impl FnMut(&T, &U) -> V,
) -> Result<Tensor<V, N>> {
    ensure_same_shape("zip operand", a.shape(), b.shape())?;

    Ok(Tensor {
        data: a.data.iter().zip(&b.data).map(|(x, y)| op(x, y)).collect(),
        index: a.index.clone(),
    })
}

impl<T: Clone, const N: usize> Tensor<T, N> {
    pub fn add<A: Ring<Element = T>>(&self, alg: &A, other: &Self) -> Result<Self> {
        zip_new(self, other, |x, y| alg.add(x, y))
    }

    pub fn add_into<A: Ring<Element = T>>(&self, alg: &A, other: &Self, dst: &mut Self) -> Result<()> {
        zip(self, other, dst, |x, y| alg.add(x, y))
    }

    pub fn add_assign<A: Ring<Element = T>>(&mut self, alg: &A, other: &Self) -> Result<()> {
        zip_in_place(self, other, |x, y| alg.add(x, y))
    }

    pub fn subtract<A: Ring<Element = T>>(&self, alg: &A, other: &Self) -> Result<Self> {
        zip_new(self, other, |x, y| alg.subtract(x, y))
    }

    pub fn subtract_into<A: Ring<Element = T>>(
        &self,
        alg: &A,
        other: &Self,
        dst: &mut Self,
    ) -> Result<()> {
        zip(self, other, dst, |x, y| alg.subtract(x, y))
    }

    pub fn subtract_assign<A: Ring<Element = T>>(&mut self, alg: &A, other: &Self) -> Result<()> {
        zip_in_place(self, other, |x, y| alg.subtract(x, y))
    }

    /// Hadamard product, `self[i] * other[i]`.
    pub fn multiply_entrywise<A: Ring<Element = T>>(&self, alg: &A, other: &Self) -> Result<Self> {
        zip_new(self, other, |x, y| alg.multiply(x, y))
    }

    pub fn multiply_entrywise_into<A: Ring<Element = T>>(
        &self,
        alg: &A,
        other: &Self,
        dst: &mut Self,
    ) -> Result<()> {
        zip(self, other, dst, |x, y| alg.multiply(x, y))
    }

    pub fn multiply_entrywise_assign<A: Ring<Element = T>>(
        &mut self,
        alg: &A,
        other: &Self,
    ) -> Result<()> {
        zip_in_place(self, other, |x, y| alg.multiply(x, y))
    }

    pub fn negate<A: Ring<Element = T>>(&self, alg: &A) -> Self {
        map_new(self, |x| alg.negate(x))
    }

    pub fn negate_into<A: Ring<Element = T>>(&self, alg: &A, dst: &mut Self) -> Result<()> {
        map(self, dst, |x| alg.negate(x))
    }

    pub fn negate_assign<A: Ring<Element = T>>(&mut self, alg: &A) {
        map_in_place(self, |x| alg.negate(x));
    }

    /// Left scalar multiplication, `factor * self[i]`.
    pub fn scale<A: Ring<Element = T>>(&self, alg: &A, factor: &T) -> Self {
        map_new(self, |x| alg.multiply(factor, x))
    }

    pub fn scale_into<A: Ring<Element = T>>(&self, alg: &A, factor: &T, dst: &mut Self) -> Result<()> {
        map(self, dst, |x| alg.multiply(factor, x))
    }

    pub fn scale_assign<A: Ring<Element = T>>(&mut self, alg: &A, factor: &T) {
        map_in_place(self, |x| alg.multiply(factor, x));
    }

    /// Fused `self[i] * b[i] + c[i]`.
    pub fn multiply_add<A: Ring<Element = T>>(&self, alg: &A, b: &Self, c: &Self) -> Result<Self> {
        let mut dst = Self {
            data: self.data.clone(),
            index: self.index.clone(),
        };
        self.multiply_add_into(alg, b, c, &mut dst)?;
        Ok(dst)
    }

    pub fn multiply_add_into<A: Ring<Element = T>>(
        &self,
        alg: &A,
        b: &Self,
        c: &Self,
        dst: &mut Self,
    ) -> Result<()> {
        zip3(self, b, c, dst, |x, y, z| alg.add(&alg.multiply(x, y), z))
    }

    pub fn multiply_add_assign<A: Ring<Element = T>>(&mut self, alg: &A, b: &Self, c: &Self) -> Result<()> {
        ensure_same_shape("multiply_add operand", self.shape(), b.shape())?;
        ensure_same_shape("multiply_add operand", self.shape(), c.shape())?;

        for ((x, y), z) in self.data.iter_mut().zip(&b.data).zip(&c.data) {
            *x = alg.add(&alg.multiply(x, y), z);
        }
        Ok(())
    }

    /// Entrywise right division `self[i] * other[i]^-1`. Fails before writing anything when a divisor
    /// is zero.
    pub fn divide_entrywise<A: Field<Element = T>>(&self, alg: &A, other: &Self) -> Result<Self> {
        let inverses = invert_all(alg, other)?;
        zip_new(self, &inverses, |x, y| alg.multiply(x, y))
    }

    pub fn divide_entrywise_into<A: Field<Element = T>>(
        &self,
        alg: &A,
        other: &Self,
        dst: &mut Self,
    ) -> Result<()> {
        ensure_same_shape("divide destination", self.shape(), dst.shape())?;
        let inverses = invert_all(alg, other)?;
        zip(self, &inverses, dst, |x, y| alg.multiply(x, y))
    }

    pub fn divide_entrywise_assign<A: Field<Element = T>>(&mut self, alg: &A, other: &Self) -> Result<()> {
        ensure_same_shape("divide operand", self.shape(), other.shape())?;
        let inverses = invert_all(alg, other)?;
        zip_in_place(self, &inverses, |x, y| alg.multiply(x, y))
    }

    pub fn conjugate<A: Conjugate<Element = T>>(&self, alg: &A) -> Self {
        map_new(self, |x| alg.conjugate(x))
    }

    pub fn conjugate_into<A: Conjugate<Element = T>>(&self, alg: &A, dst: &mut Self) -> Result<()> {
        map(self, dst, |x| alg.conjugate(x))
    }

    pub fn conjugate_assign<A: Conjugate<Element = T>>(&mut self, alg: &A) {
        map_in_place(self, |x| alg.conjugate(x));
    }
}

fn invert_all<A: Field, const N: usize>(alg: &A, src: &Tensor<A::Element, N>) -> Result<Tensor<A::Element, N>> {
    let data = src
        .data
        .iter()
        .enumerate()
        .map(|(offset, x)| {
            alg.invert(x).ok_or_else(|| {
                TensorError::InvalidArgument(format!("Division by zero at offset {offset}"))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Tensor {
        data,
        index: src.index.clone(),
    })
}
