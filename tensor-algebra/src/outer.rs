use super::*;
use scalar_algebra::Ring;
use tracing::debug;

impl<T: Clone, const N: usize> Tensor<T, N> {
    /// Tensor (outer) product `self ⊗ other` of two Cartesian tensors over the same dimension.
    pub fn outer<A: Ring<Element = T>>(&self, alg: &A, other: &Self) -> Result<Self> {
        let mut dst = Self::scalar(alg.zero());
        self.outer_into(alg, other, &mut dst)?;
        Ok(dst)
    }

    /// Same as [`Tensor::outer`].
    pub fn multiply<A: Ring<Element = T>>(&self, alg: &A, other: &Self) -> Result<Self> {
        self.outer(alg, other)
    }

    /// Writes `self ⊗ other` into `dst`, which ends up with rank `self.rank() + other.rank()`.
    ///
    /// Element `dst[fa * other.len() + fb]` is `self[fa] * other[fb]` for flat offsets `fa` and `fb`,
    /// so the left operand's coordinates come first. A rank 0 operand combines with any dimension.
    pub fn outer_into<A: Ring<Element = T>>(&self, alg: &A, other: &Self, dst: &mut Self) -> Result<()> {
        if !self.is_cartesian() || !other.is_cartesian() {
            return Err(TensorError::ShapeMismatch(format!(
                "Outer product requires Cartesian tensors, got {:?} and {:?}",
                self.shape(),
                other.shape()
            )));
        }
        if let (Some(left), Some(right)) = (self.index.dim(), other.index.dim()) {
            if left != right {
                return Err(TensorError::ShapeMismatch(format!(
                    "Outer product operands have dimensions {left} and {right}"
                )));
            }
        }

        let out_shape: SmallVec<usize, N> = self.shape().iter().chain(other.shape()).copied().collect();

        debug!(left = ?self.shape(), right = ?other.shape(), "outer");
        dst.alloc(alg, &out_shape)?;

        let stride = other.len();
        for (fa, x) in self.data.iter().enumerate() {
            for (fb, y) in other.data.iter().enumerate() {
                dst.data[fa * stride + fb] = alg.multiply(x, y);
            }
        }

        Ok(())
    }
}
