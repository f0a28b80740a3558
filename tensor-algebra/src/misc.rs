use super::*;
use scalar_algebra::Ring;
use std::fmt;

impl<T: PartialEq, const N: usize> PartialEq for Tensor<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.data == other.data
    }
}

impl<T: Eq, const N: usize> Eq for Tensor<T, N> {}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Tensor<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape())
            .field("elements", &self.data)
            .finish()
    }
}

impl<T, const N: usize> Tensor<T, N> {
    /// Equal shapes and elements equal under the algebra's equality, which may be approximate.
    pub fn is_equal<A: Ring<Element = T>>(&self, alg: &A, other: &Self) -> bool {
        self.shape() == other.shape()
            && self.data.iter().zip(&other.data).all(|(a, b)| alg.is_equal(a, b))
    }
}
