use crate::{MultiIndex, Result, TensorError};
use small_vec::{SmallVec, small_vec};

/// Bidirectional mapping between flat buffer offsets and multi-indices for one shape.
///
/// Layout is row-major: the last axis varies fastest, so `multipliers[rank - 1] == 1` and
/// `multipliers[i] == multipliers[i + 1] * shape[i + 1]`. A nested literal `[[1, 2], [3, 4]]` is stored
/// as `1, 2, 3, 4`.
///
/// Multi-indices may be longer than the rank: the extra trailing coordinates describe an implicit
/// padding with axes of length 1 and must therefore be zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexMap<const N: usize = 4> {
    shape: SmallVec<usize, N>,
    multipliers: SmallVec<usize, N>,
    len: usize,
}

impl<const N: usize> IndexMap<N> {
    /// Builds the map for an arbitrary shape. Fails when the element count overflows `usize`.
    pub fn new(shape: &[usize]) -> Result<Self> {
        let mut multipliers: SmallVec<usize, N> = small_vec![1; shape.len()];
        let mut len: usize = 1;

        for axis in (0..shape.len()).rev() {
            multipliers[axis] = len;
            len = len.checked_mul(shape[axis]).ok_or_else(|| {
                TensorError::InvalidArgument(format!("Element count of shape {shape:?} overflows"))
            })?;
        }

        Ok(Self {
            shape: SmallVec::from(shape),
            multipliers,
            len,
        })
    }

    /// Builds the map of a Cartesian tensor: `rank` axes, each of length `dim`.
    pub fn cartesian(rank: usize, dim: usize) -> Result<Self> {
        let shape: SmallVec<usize, N> = small_vec![dim; rank];
        Self::new(&shape)
    }

    /// The scalar map: rank 0, one element at offset 0.
    pub fn scalar() -> Self {
        Self {
            shape: SmallVec::new(),
            multipliers: SmallVec::new(),
            len: 1,
        }
    }

    pub(crate) fn vector(len: usize) -> Self {
        Self {
            shape: small_vec![len],
            multipliers: small_vec![1],
            len,
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn multipliers(&self) -> &[usize] {
        &self.multipliers
    }

    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Number of addressable elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when every axis has the same length. Rank 0 is trivially Cartesian.
    pub fn is_cartesian(&self) -> bool {
        self.shape.windows(2).all(|pair| pair[0] == pair[1])
    }

    /// The common axis length of a Cartesian shape, `None` for rank 0 or mixed lengths.
    pub fn dim(&self) -> Option<usize> {
        match self.shape.first() {
            Some(&dim) if self.is_cartesian() => Some(dim),
            _ => None,
        }
    }

    /// Converts a multi-index into a flat offset.
    pub fn to_flat(&self, index: &[usize]) -> Result<usize> {
        if index.len() < self.rank() {
            return Err(TensorError::IndexOutOfRange(format!(
                "Index {index:?} has fewer coordinates than rank {}",
                self.rank()
            )));
        }

        let mut offset = 0;
        for (axis, &coordinate) in index.iter().enumerate() {
            match self.shape.get(axis) {
                Some(&size) if coordinate >= size => {
                    return Err(TensorError::IndexOutOfRange(format!(
                        "Index {coordinate} out of range for axis {axis} with size {size}"
                    )));
                }
                Some(_) => offset += coordinate * self.multipliers[axis],
                None if coordinate != 0 => {
                    return Err(TensorError::IndexOutOfRange(format!(
                        "Index {coordinate} at axis {axis} beyond rank {} must be zero",
                        self.rank()
                    )));
                }
                None => {}
            }
        }

        Ok(offset)
    }

    /// Decodes a flat offset into `out`, filling coordinates past the rank with zero.
    pub fn to_index(&self, offset: usize, out: &mut [usize]) -> Result<()> {
        if offset >= self.len {
            return Err(TensorError::IndexOutOfRange(format!(
                "Offset {offset} out of range for {} elements",
                self.len
            )));
        }
        if out.len() < self.rank() {
            return Err(TensorError::IndexOutOfRange(format!(
                "Index buffer of length {} cannot hold rank {}",
                out.len(),
                self.rank()
            )));
        }

        let mut remainder = offset;
        for (axis, slot) in out.iter_mut().enumerate() {
            *slot = match self.multipliers.get(axis) {
                Some(&multiplier) => {
                    let coordinate = remainder / multiplier;
                    remainder %= multiplier;
                    coordinate
                }
                None => 0,
            };
        }

        Ok(())
    }

    /// Decodes a flat offset into a multi-index of exactly `rank` coordinates.
    pub fn index_of(&self, offset: usize) -> Result<MultiIndex<N>> {
        let mut index: MultiIndex<N> = small_vec![0; self.rank()];
        self.to_index(offset, &mut index)?;
        Ok(index)
    }

    /// Iterates over every multi-index in flat offset order.
    pub fn indices(&self) -> MultiIndexIter<'_, N> {
        MultiIndexIter {
            map: self,
            current: small_vec![0; self.rank()],
            is_done: self.is_empty(),
        }
    }
}

/// Odometer over the multi-indices of an [`IndexMap`]: the last coordinate advances first.
pub struct MultiIndexIter<'a, const N: usize> {
    map: &'a IndexMap<N>,
    current: MultiIndex<N>,
    is_done: bool,
}

impl<const N: usize> Iterator for MultiIndexIter<'_, N> {
    type Item = MultiIndex<N>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_done {
            return None;
        }

        let item = self.current.clone();

        let mut axis = self.map.rank();
        loop {
            if axis == 0 {
                self.is_done = true;
                break;
            }
            axis -= 1;
            self.current[axis] += 1;
            if self.current[axis] < self.map.shape[axis] {
                break;
            }
            self.current[axis] = 0;
        }

        Some(item)
    }
}
