use super::*;
use scalar_algebra::Ring;

impl<T, const N: usize> Tensor<T, N> {
    /// Creates a tensor from row-major data. Fails when the data length differs from the element count
    /// of `shape`.
    pub fn new(data: Vec<T>, shape: &[usize]) -> Result<Self> {
        let index = IndexMap::new(shape)?;
        if data.len() != index.len() {
            return Err(TensorError::ShapeMismatch(format!(
                "Data length {} does not match shape {shape:?} with {} elements",
                data.len(),
                index.len()
            )));
        }
        Ok(Self { data, index })
    }

    /// Creates a rank 0 tensor holding `value`.
    pub fn scalar(value: T) -> Self {
        Self {
            data: vec![value],
            index: IndexMap::scalar(),
        }
    }

    /// Creates a tensor computing every element from its multi-index.
    pub fn from_fn(shape: &[usize], mut f: impl FnMut(&[usize]) -> T) -> Result<Self> {
        let index = IndexMap::new(shape)?;
        let data = index.indices().map(|idx| f(&idx)).collect();
        Ok(Self { data, index })
    }
}

impl<T: Clone, const N: usize> Tensor<T, N> {
    /// Creates a tensor with every element set to `value`.
    pub fn filled(shape: &[usize], value: T) -> Result<Self> {
        let index = IndexMap::new(shape)?;
        let data = vec![value; index.len()];
        Ok(Self { data, index })
    }

    /// Creates a zero tensor of the given shape.
    pub fn zeros<A: Ring<Element = T>>(alg: &A, shape: &[usize]) -> Result<Self> {
        Self::filled(shape, alg.zero())
    }

    /// Creates a zero Cartesian tensor: `rank` axes of length `dim`.
    pub fn cartesian<A: Ring<Element = T>>(alg: &A, rank: usize, dim: usize) -> Result<Self> {
        let index = IndexMap::cartesian(rank, dim)?;
        let data = vec![alg.zero(); index.len()];
        Ok(Self { data, index })
    }

    /// Creates the `n x n` identity matrix.
    pub fn identity<A: Ring<Element = T>>(alg: &A, n: usize) -> Result<Self> {
        let mut identity = Self::zeros(alg, &[n, n])?;
        for i in 0..n {
            identity.data[i * n + i] = alg.unity();
        }
        Ok(identity)
    }
}

/// A vector (rank 1 tensor).
impl<T, const N: usize> From<Vec<T>> for Tensor<T, N> {
    fn from(data: Vec<T>) -> Self {
        let index = IndexMap::vector(data.len());
        Self { data, index }
    }
}

/// A matrix from its rows.
impl<T, const M: usize, const N: usize> TryFrom<Vec<[T; M]>> for Tensor<T, N> {
    type Error = TensorError;

    fn try_from(rows: Vec<[T; M]>) -> Result<Self> {
        let shape = [rows.len(), M];
        let data = rows.into_iter().flatten().collect();
        Self::new(data, &shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scalar_algebra::{Integers, Reals};

    #[test]
    fn test_new_checks_length() -> Result<()> {
        let tensor = Tensor::<i32>::new(vec![1, 2, 3, 4, 5, 6], &[2, 3])?;
        assert_eq!(tensor.shape(), &[2, 3]);

        assert!(matches!(
            Tensor::<i32>::new(vec![1, 2, 3], &[2, 2]),
            Err(TensorError::ShapeMismatch(_))
        ));

        Ok(())
    }

    #[test]
    fn test_cartesian_and_identity() -> Result<()> {
        let ints = Integers::<i64>::new();

        let cube = Tensor::<i64>::cartesian(&ints, 3, 2)?;
        assert_eq!(cube.shape(), &[2, 2, 2]);
        assert!(cube.elements().all(|&v| v == 0));

        let identity = Tensor::<i64>::identity(&ints, 3)?;
        assert_eq!(identity.as_slice(), &[1, 0, 0, 0, 1, 0, 0, 0, 1]);

        let scalar = Tensor::<f64>::cartesian(&Reals::new(), 0, 5)?;
        assert_eq!(scalar.len(), 1);

        Ok(())
    }

    #[test]
    fn test_from_rows_and_fn() -> Result<()> {
        let matrix = Tensor::<i32>::try_from(vec![[1, 2, 3], [4, 5, 6]])?;
        assert_eq!(matrix.shape(), &[2, 3]);
        assert_eq!(*matrix.get(&[1, 0])?, 4);

        let generated = Tensor::<usize>::from_fn(&[2, 3], |idx| 10 * idx[0] + idx[1])?;
        assert_eq!(generated.as_slice(), &[0, 1, 2, 10, 11, 12]);

        let vector = Tensor::<i32>::from(vec![7, 8, 9]);
        assert_eq!(vector.shape(), &[3]);
        assert_eq!(*vector.get(&[2])?, 9);

        Ok(())
    }
}
