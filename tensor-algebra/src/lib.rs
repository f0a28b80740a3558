//! Library crate for tensor_algebra
//!
//! Cartesian tensors, vectors (rank 1, also called R-modules) and matrices (rank 2) whose elements
//! are computed with a caller supplied scalar algebra from [`scalar_algebra`]. The same contraction,
//! outer product and elimination code therefore serves wrapping integers, exact rationals, floats,
//! complex numbers, quaternions and octonions.
//!
//! Every operation comes in two forms: an allocating one returning a fresh tensor (`contract`,
//! `matmul`, ...) and an `_into` form writing into a caller owned destination whose buffer is reused
//! when its shape already matches.

use small_vec::SmallVec;

mod access;
mod constructive;
mod contraction;
mod display;
pub mod elementwise;
mod error;
mod index;
mod linalg;
mod math;
mod matmul;
mod misc;
mod outer;
mod shape;


pub use crate::error::TensorError;
pub use crate::index::{IndexMap, MultiIndexIter};
pub use crate::shape::{shape_result, shapes_match};
pub use scalar_algebra;

pub type Result<T> = std::result::Result<T, error::TensorError>;

/// A coordinate per axis; short ranks stay inline.
pub type MultiIndex<const N: usize = 4> = SmallVec<usize, N>;

/// Represents a multi-dimensional tensor with generic element type T; up to N axes are described
/// without heap allocation.
///
/// The tensor owns a contiguous row-major buffer (last axis fastest) of exactly `product(shape)`
/// elements, one element for rank 0. Elements are only ever combined through an algebra passed to each
/// operation, the tensor itself places no arithmetic bounds on T.
///
/// Cloning deep-copies the buffer. Operations writing into a destination tensor reshape it first and
/// reuse its allocation whenever the element count is unchanged.
#[derive(Clone)]
pub struct Tensor<T, const N: usize = 4> {
    data: Vec<T>,
    index: IndexMap<N>,
}
