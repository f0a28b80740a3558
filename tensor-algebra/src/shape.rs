use super::*;
use scalar_algebra::Ring;
use tracing::trace;

/// True when both tensors have the same rank and equal length along every axis.
pub fn shapes_match<T, U, const N: usize>(a: &Tensor<T, N>, b: &Tensor<U, N>) -> bool {
    a.shape() == b.shape()
}

/// Reshapes `dst` to the shape of `src` following the [`Tensor::alloc`] policy.
pub fn shape_result<A, U, const N: usize>(
    alg: &A,
    src: &Tensor<U, N>,
    dst: &mut Tensor<A::Element, N>,
) -> Result<bool>
where
    A: Ring,
{
    dst.alloc(alg, src.shape())
}

pub(crate) fn ensure_same_shape(op: &str, expected: &[usize], actual: &[usize]) -> Result<()> {
    if expected != actual {
        return Err(TensorError::ShapeMismatch(format!(
            "{op} expects shape {expected:?}, got {actual:?}"
        )));
    }
    Ok(())
}

impl<T: Clone, const N: usize> Tensor<T, N> {
    /// Gives the tensor a new shape.
    ///
    /// An identical shape leaves everything untouched. A shape with the same element count only
    /// replaces the index map and keeps the existing elements in flat order. Any other shape resets the
    /// buffer to `alg.zero()` elements, reusing the allocation when capacity allows.
    ///
    /// Returns `true` when the buffer was reset.
    pub fn alloc<A: Ring<Element = T>>(&mut self, alg: &A, shape: &[usize]) -> Result<bool> {
        if self.shape() == shape {
            return Ok(false);
        }

        let index = IndexMap::new(shape)?;
        if index.len() == self.data.len() {
            trace!(from = ?self.shape(), to = ?shape, "reshaping in place");
            self.index = index;
            return Ok(false);
        }

        trace!(from = ?self.shape(), to = ?shape, len = index.len(), "resetting buffer");
        self.data.clear();
        self.data.resize(index.len(), alg.zero());
        self.index = index;

        Ok(true)
    }

    /// Deep-copies `src` into `self`, reusing the existing allocation when it is large enough.
    pub fn assign(&mut self, src: &Self) {
        self.data.clone_from(&src.data);
        self.index.clone_from(&src.index);
    }

    /// Overwrites every element with `value`, keeping the shape.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    pub fn zero<A: Ring<Element = T>>(&mut self, alg: &A) {
        self.fill(alg.zero());
    }
}
