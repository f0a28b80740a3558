use super::*;
use std::fmt;

/// Renders nested brackets in row-major order, `[[1, 2], [3, 4]]` for a 2x2 matrix. A rank 0 tensor
/// renders as its bare element.
impl<T: fmt::Display, const N: usize> fmt::Display for Tensor<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rank() == 0 {
            return match self.data.first() {
                Some(value) => write!(f, "{value}"),
                None => Ok(()),
            };
        }
        self.fmt_axis(f, 0, 0)
    }
}

impl<T: fmt::Display, const N: usize> Tensor<T, N> {
    fn fmt_axis(&self, f: &mut fmt::Formatter<'_>, axis: usize, offset: usize) -> fmt::Result {
        let step = self.index.multipliers()[axis];
        let is_innermost = axis + 1 == self.rank();

        write!(f, "[")?;
        for k in 0..self.shape()[axis] {
            if k > 0 {
                write!(f, ", ")?;
            }
            let at = offset + k * step;
            if is_innermost {
                write!(f, "{}", self.data[at])?;
            } else {
                self.fmt_axis(f, axis + 1, at)?;
            }
        }
        write!(f, "]")
    }
}
