use super::*;
use scalar_algebra::Ring;
use tracing::debug;

impl<T: Clone, const N: usize> Tensor<T, N> {
    /// Performs matrix multiplication between two rank 2 tensors.
    /// The number of columns of `self` must match the number of rows of `other`.
    pub fn matmul<A: Ring<Element = T>>(&self, alg: &A, other: &Self) -> Result<Self> {
        let mut dst = Self::scalar(alg.zero());
        self.matmul_into(alg, other, &mut dst)?;
        Ok(dst)
    }

    /// Writes `self * other` into `dst`, reshaping it to `rows(self) x cols(other)`.
    pub fn matmul_into<A: Ring<Element = T>>(&self, alg: &A, other: &Self, dst: &mut Self) -> Result<()> {
        let (m, k) = self.matrix_dims("matmul")?;
        let (k2, n) = other.matrix_dims("matmul")?;

        if k != k2 {
            return Err(TensorError::ShapeMismatch(format!(
                "Matrix dimensions incompatible for multiplication: {m}x{k} @ {k2}x{n}"
            )));
        }

        debug!(m, k, n, "matmul");
        dst.alloc(alg, &[m, n])?;

        for i in 0..m {
            let row = &self.data[i * k..(i + 1) * k];
            for j in 0..n {
                let mut sum = alg.zero();
                for (l, a_val) in row.iter().enumerate() {
                    sum = alg.add(&sum, &alg.multiply(a_val, &other.data[l * n + j]));
                }
                dst.data[i * n + j] = sum;
            }
        }

        Ok(())
    }

    /// Applies a matrix to a vector: `self * v` for `v` of length `cols(self)`.
    pub fn transform<A: Ring<Element = T>>(&self, alg: &A, v: &Self) -> Result<Self> {
        let mut dst = Self::scalar(alg.zero());
        self.transform_into(alg, v, &mut dst)?;
        Ok(dst)
    }

    pub fn transform_into<A: Ring<Element = T>>(&self, alg: &A, v: &Self, dst: &mut Self) -> Result<()> {
        let (m, k) = self.matrix_dims("transform")?;
        if v.rank() != 1 || v.len() != k {
            return Err(TensorError::ShapeMismatch(format!(
                "Cannot transform vector of shape {:?} with {m}x{k} matrix",
                v.shape()
            )));
        }

        dst.alloc(alg, &[m])?;

        for (i, out) in dst.data.iter_mut().enumerate() {
            let row = &self.data[i * k..(i + 1) * k];
            let mut sum = alg.zero();
            for (a_val, x) in row.iter().zip(&v.data) {
                sum = alg.add(&sum, &alg.multiply(a_val, x));
            }
            *out = sum;
        }

        Ok(())
    }
}

impl<T, const N: usize> Tensor<T, N> {
    /// `(rows, cols)` of a rank 2 tensor.
    pub(crate) fn matrix_dims(&self, op: &str) -> Result<(usize, usize)> {
        match self.shape() {
            &[rows, cols] => Ok((rows, cols)),
            shape => Err(TensorError::ShapeMismatch(format!(
                "{op} requires a matrix, got shape {shape:?}"
            ))),
        }
    }

    /// Side length of a square matrix.
    pub(crate) fn square_dim(&self, op: &str) -> Result<usize> {
        match self.matrix_dims(op)? {
            (rows, cols) if rows == cols => Ok(rows),
            (rows, cols) => Err(TensorError::ShapeMismatch(format!(
                "{op} requires a square matrix, got {rows}x{cols}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scalar_algebra::{Integers, Quaternion, Quaternions, Reals};

    #[test]
    fn test_matmul() -> Result<()> {
        let ints = Integers::<i32>::new();
        let a = Tensor::<i32>::new((0..12).collect(), &[3, 4])?;
        let b = Tensor::<i32>::new((0..12).collect(), &[4, 3])?;
        let result = a.matmul(&ints, &b)?;
        assert_eq!(result.shape(), &[3, 3]);
        assert_eq!(*result.get(&[0, 0])?, 42);
        assert_eq!(*result.get(&[0, 1])?, 48);
        assert_eq!(*result.get(&[0, 2])?, 54);

        Ok(())
    }

    #[test]
    fn test_matmul_into_reuses_destination() -> Result<()> {
        let ints = Integers::<i64>::new();
        let a = Tensor::<i64>::new((1..=12).collect(), &[3, 4])?;
        let b = Tensor::<i64>::new((1..=12).collect(), &[4, 3])?;
        let expected = Tensor::<i64>::try_from(vec![[70, 80, 90], [158, 184, 210], [246, 288, 330]])?;

        let mut dst = Tensor::<i64>::zeros(&ints, &[3, 3])?;
        let ptr = dst.as_slice().as_ptr();
        a.matmul_into(&ints, &b, &mut dst)?;

        assert_eq!(dst, expected);
        assert_eq!(dst.as_slice().as_ptr(), ptr);

        Ok(())
    }

    #[test]
    fn test_matmul_rejects_bad_shapes() -> Result<()> {
        let reals = Reals::<f32>::new();
        let a = Tensor::<f32>::filled(&[2, 3], 1.0)?;
        let v = Tensor::<f32>::from(vec![1.0, 2.0, 3.0]);

        assert!(matches!(a.matmul(&reals, &a), Err(TensorError::ShapeMismatch(_))));
        assert!(matches!(a.matmul(&reals, &v), Err(TensorError::ShapeMismatch(_))));
        assert!(matches!(v.transform(&reals, &v), Err(TensorError::ShapeMismatch(_))));

        Ok(())
    }

    #[test]
    fn test_transform() -> Result<()> {
        let reals = Reals::<f64>::new();
        let rotation = Tensor::<f64>::try_from(vec![[0.0, -1.0], [1.0, 0.0]])?;
        let v = Tensor::<f64>::from(vec![2.0, 3.0]);

        let rotated = rotation.transform(&reals, &v)?;
        assert_eq!(rotated.shape(), &[2]);
        assert_eq!(rotated.as_slice(), &[-3.0, 2.0]);

        let a = Tensor::<f64>::new((1..=6).map(f64::from).collect(), &[2, 3])?;
        let w = Tensor::<f64>::from(vec![1.0, 0.0, -1.0]);
        assert_eq!(a.transform(&reals, &w)?.as_slice(), &[-2.0, -2.0]);

        Ok(())
    }

    #[test]
    fn test_quaternion_matmul_is_ordered() -> Result<()> {
        let quats = Quaternions::<f64>::new();
        let i = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let j = Quaternion::new(0.0, 0.0, 1.0, 0.0);

        let a = Tensor::<Quaternion<f64>>::new(vec![i], &[1, 1])?;
        let b = Tensor::<Quaternion<f64>>::new(vec![j], &[1, 1])?;

        assert_eq!(a.matmul(&quats, &b)?.as_slice(), &[Quaternion::new(0.0, 0.0, 0.0, 1.0)]);
        assert_eq!(b.matmul(&quats, &a)?.as_slice(), &[Quaternion::new(0.0, 0.0, 0.0, -1.0)]);

        Ok(())
    }
}
