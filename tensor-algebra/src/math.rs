use super::*;
use scalar_algebra::{Conjugate, Ring};

impl<T: Clone, const N: usize> Tensor<T, N> {
    /// Computes the dot product of two vectors, `sum_i self[i] * other[i]`.
    /// Returns an error if the tensors are not rank 1 or have different sizes.
    pub fn dot<A: Ring<Element = T>>(&self, alg: &A, other: &Self) -> Result<T> {
        if self.rank() != 1 || other.rank() != 1 {
            return Err(TensorError::ShapeMismatch(format!(
                "Dot product requires vectors, but got shapes {:?} and {:?}",
                self.shape(),
                other.shape()
            )));
        }

        if self.len() != other.len() {
            return Err(TensorError::ShapeMismatch(format!(
                "Vectors must have the same size for dot product: {} != {}",
                self.len(),
                other.len()
            )));
        }

        let mut result = alg.zero();
        for (a, b) in self.data.iter().zip(&other.data) {
            result = alg.add(&result, &alg.multiply(a, b));
        }

        Ok(result)
    }

    /// Transposes the tensor by swapping two axes.
    /// Returns a new tensor with the elements rearranged, or an error if an axis is out of bounds.
    pub fn transpose(&self, axis0: usize, axis1: usize) -> Result<Self> {
        let rank = self.rank();
        if axis0 >= rank || axis1 >= rank {
            return Err(TensorError::InvalidArgument(format!(
                "Invalid axes for transpose of rank {rank}: {axis0} and {axis1}"
            )));
        }

        let mut shape: SmallVec<usize, N> = SmallVec::from(self.shape());
        shape.swap(axis0, axis1);
        let index = IndexMap::new(&shape)?;

        let data = index
            .indices()
            .map(|mut idx| {
                idx.swap(axis0, axis1);
                self.index.to_flat(&idx).map(|offset| self.data[offset].clone())
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { data, index })
    }

    /// Conjugate transpose of a matrix.
    pub fn conjugate_transpose<A: Conjugate<Element = T>>(&self, alg: &A) -> Result<Self> {
        self.matrix_dims("conjugate_transpose")?;

        let mut transposed = self.transpose(0, 1)?;
        transposed.conjugate_assign(alg);
        Ok(transposed)
    }

    /// Sum of the diagonal of a square matrix.
    pub fn trace<A: Ring<Element = T>>(&self, alg: &A) -> Result<T> {
        self.square_dim("trace")?;
        self.contract(alg, 0, 1)?.into_scalar()
    }
}
