use super::*;

impl<T, const N: usize> Tensor<T, N> {
    // Get element at multi-dimensional index
    pub fn get(&self, index: &[usize]) -> Result<&T> {
        let offset = self.index.to_flat(index)?;
        Ok(&self.data[offset])
    }

    pub fn get_mut(&mut self, index: &[usize]) -> Result<&mut T> {
        let offset = self.index.to_flat(index)?;
        Ok(&mut self.data[offset])
    }

    /// Replaces the element at `index`.
    pub fn set(&mut self, index: &[usize], value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Element at a flat row-major offset.
    pub fn get_flat(&self, offset: usize) -> Result<&T> {
        self.data.get(offset).ok_or_else(|| {
            TensorError::IndexOutOfRange(format!(
                "Offset {offset} out of range for {} elements",
                self.data.len()
            ))
        })
    }

    pub fn shape(&self) -> &[usize] {
        self.index.shape()
    }

    pub fn rank(&self) -> usize {
        self.index.rank()
    }

    /// Number of elements (1 for a rank 0 tensor).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True when every axis has the same length.
    pub fn is_cartesian(&self) -> bool {
        self.index.is_cartesian()
    }

    pub fn index_map(&self) -> &IndexMap<N> {
        &self.index
    }

    /// Elements in row-major order.
    pub fn elements(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Extracts the single element of a rank 0 tensor.
    pub fn into_scalar(self) -> Result<T> {
        if self.rank() != 0 {
            return Err(TensorError::ShapeMismatch(format!(
                "Expected a rank 0 tensor, got shape {:?}",
                self.shape()
            )));
        }
        self.data.into_iter().next().ok_or_else(|| {
            TensorError::IndexOutOfRange("Rank 0 tensor has no element".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set() -> Result<()> {
        let mut tensor = Tensor::<i32>::new((0..6).collect(), &[2, 3])?;
        assert_eq!(*tensor.get(&[0, 0])?, 0);
        assert_eq!(*tensor.get(&[1, 0])?, 3);
        assert_eq!(*tensor.get(&[1, 2])?, 5);

        tensor.set(&[0, 1], 42)?;
        *tensor.get_mut(&[1, 1])? += 100;
        assert_eq!(tensor.as_slice(), &[0, 42, 2, 3, 104, 5]);

        assert!(tensor.get(&[2, 0]).is_err());
        assert!(tensor.set(&[0, 3], 1).is_err());
        assert_eq!(*tensor.get_flat(4)?, 104);
        assert!(tensor.get_flat(6).is_err());

        Ok(())
    }

    #[test]
    fn test_rank_zero_access() -> Result<()> {
        let mut tensor = Tensor::<i32>::scalar(7);
        assert_eq!(tensor.rank(), 0);
        assert_eq!(tensor.len(), 1);
        assert_eq!(*tensor.get(&[])?, 7);

        tensor.set(&[0], 8)?;
        assert_eq!(tensor.into_scalar()?, 8);
        assert!(Tensor::<i32>::from(vec![1]).into_scalar().is_err());

        Ok(())
    }
}
