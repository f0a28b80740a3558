use super::*;
use scalar_algebra::Ring;
use tracing::debug;

impl<T: Clone, const N: usize> Tensor<T, N> {
    /// Sums over the diagonal of axes `i` and `j`, returning a tensor of rank `rank - 2`.
    pub fn contract<A: Ring<Element = T>>(&self, alg: &A, i: usize, j: usize) -> Result<Self> {
        let mut dst = Self::scalar(alg.zero());
        self.contract_into(alg, i, j, &mut dst)?;
        Ok(dst)
    }

    /// Contracts axes `i` and `j` into `dst`, reshaping it to the remaining axes in their original
    /// order.
    ///
    /// Each output element is `sum_k self[.., k, .., k, ..]`, accumulated from `alg.zero()` with `k`
    /// ascending.
    pub fn contract_into<A: Ring<Element = T>>(
        &self,
        alg: &A,
        i: usize,
        j: usize,
        dst: &mut Self,
    ) -> Result<()> {
        let rank = self.rank();
        if i == j {
            return Err(TensorError::InvalidArgument(format!(
                "Cannot contract axis {i} with itself"
            )));
        }
        if i >= rank || j >= rank {
            return Err(TensorError::InvalidArgument(format!(
                "Contraction axes ({i}, {j}) out of range for rank {rank}"
            )));
        }

        let shape = self.shape();
        if shape[i] != shape[j] {
            return Err(TensorError::ShapeMismatch(format!(
                "Contracted axes differ in length: {} != {}",
                shape[i], shape[j]
            )));
        }

        let free_axes: SmallVec<usize, N> = (0..rank).filter(|&axis| axis != i && axis != j).collect();
        let out_shape: SmallVec<usize, N> = free_axes.iter().map(|&axis| shape[axis]).collect();

        debug!(shape = ?shape, i, j, "contract");
        dst.alloc(alg, &out_shape)?;

        let multipliers = self.index.multipliers();
        let diagonal_step = multipliers[i] + multipliers[j];
        let dim = shape[i];

        for (out, idx) in dst.data.iter_mut().zip(dst.index.indices()) {
            let base: usize = idx
                .iter()
                .zip(&free_axes)
                .map(|(&coordinate, &axis)| coordinate * multipliers[axis])
                .sum();

            let mut acc = alg.zero();
            for k in 0..dim {
                acc = alg.add(&acc, &self.data[base + k * diagonal_step]);
            }
            *out = acc;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scalar_algebra::{Integers, Reals};

    #[test]
    fn test_matrix_trace() -> Result<()> {
        let ints = Integers::<i32>::new();
        let matrix = Tensor::<i32>::try_from(vec![[1, 2], [3, 4]])?;

        let trace = matrix.contract(&ints, 0, 1)?;
        assert_eq!(trace.rank(), 0);
        assert_eq!(trace.into_scalar()?, 5);

        Ok(())
    }

    #[test]
    fn test_contract_rank_three() -> Result<()> {
        let ints = Integers::<i64>::new();
        let tensor = Tensor::<i64>::new((0..12).collect(), &[2, 3, 2])?;

        let contracted = tensor.contract(&ints, 0, 2)?;
        assert_eq!(contracted.shape(), &[3]);
        assert_eq!(contracted.as_slice(), &[7, 11, 15]);

        let swapped = tensor.contract(&ints, 2, 0)?;
        assert_eq!(swapped.as_slice(), contracted.as_slice());

        Ok(())
    }

    #[test]
    fn test_contract_into_reuses_destination() -> Result<()> {
        let reals = Reals::<f64>::new();
        let tensor = Tensor::<f64>::filled(&[3, 3, 3, 3], 1.0)?;
        let mut dst = Tensor::<f64>::zeros(&reals, &[3, 3])?;
        let ptr = dst.as_slice().as_ptr();

        tensor.contract_into(&reals, 1, 3, &mut dst)?;
        assert_eq!(dst.shape(), &[3, 3]);
        assert!(dst.elements().all(|&v| v == 3.0));
        assert_eq!(dst.as_slice().as_ptr(), ptr);

        Ok(())
    }

    #[test]
    fn test_contract_rejects_bad_axes() -> Result<()> {
        let ints = Integers::<i32>::new();
        let tensor = Tensor::<i32>::new((0..6).collect(), &[2, 3])?;
        let square = Tensor::<i32>::new((0..4).collect(), &[2, 2])?;

        assert!(matches!(tensor.contract(&ints, 0, 1), Err(TensorError::ShapeMismatch(_))));
        assert!(matches!(square.contract(&ints, 1, 1), Err(TensorError::InvalidArgument(_))));
        assert!(matches!(square.contract(&ints, 0, 2), Err(TensorError::InvalidArgument(_))));

        let mut dst = Tensor::<i32>::from(vec![9, 9]);
        assert!(square.contract_into(&ints, 0, 5, &mut dst).is_err());
        assert_eq!(dst.as_slice(), &[9, 9]);

        Ok(())
    }
}
