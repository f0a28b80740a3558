//! Square matrix algorithms: inversion, determinant and integer powers.
//!
//! Inversion and the determinant share one Gauss-Jordan elimination. Row operations always multiply
//! from the left, so the computed inverse is a left inverse even over non-commutative division rings
//! such as the quaternions, where it is also the two-sided inverse. Elimination composes row
//! operations and needs associativity, hence the [`DivisionRing`] bound: octonion matrices are
//! rejected at compile time.
//!
//! ```compile_fail
//! use tensor_algebra::Tensor;
//! use tensor_algebra::scalar_algebra::{Octonion, Octonions};
//!
//! let octonions = Octonions::<f64>::new();
//! let matrix = Tensor::<Octonion<f64>>::identity(&octonions, 2).unwrap();
//! let _ = matrix.invert(&octonions);
//! ```

use super::*;
use scalar_algebra::{DivisionRing, Ring};

impl<T: Clone, const N: usize> Tensor<T, N> {
    /// Inverse of a square matrix over a division ring.
    pub fn invert<A: DivisionRing<Element = T>>(&self, alg: &A) -> Result<Self> {
        let mut dst = Self::scalar(alg.zero());
        self.invert_into(alg, &mut dst)?;
        Ok(dst)
    }

    /// Writes the inverse into `dst`. On failure `dst` is left untouched.
    #[tracing::instrument(level = "debug", skip_all, fields(shape = ?self.shape()))]
    pub fn invert_into<A: DivisionRing<Element = T>>(&self, alg: &A, dst: &mut Self) -> Result<()> {
        let n = self.square_dim("invert")?;

        let mut work = self.data.clone();
        let mut inverse = Self::identity(alg, n)?.data;

        if eliminate(alg, n, &mut work, Some(inverse.as_mut_slice())).is_none() {
            return Err(TensorError::SingularMatrix(format!(
                "No nonzero pivot found while inverting {n}x{n} matrix"
            )));
        }

        dst.alloc(alg, &[n, n])?;
        dst.data.clone_from_slice(&inverse);

        Ok(())
    }

    /// Determinant computed by the same elimination as [`Tensor::invert`]: the signed product of the
    /// pivots in elimination order. It is `alg.zero()` exactly when inversion fails.
    pub fn determinant<A: DivisionRing<Element = T>>(&self, alg: &A) -> Result<T> {
        let n = self.square_dim("determinant")?;

        let mut work = self.data.clone();
        Ok(eliminate(alg, n, &mut work, None).unwrap_or_else(|| alg.zero()))
    }

    /// Raises a square matrix to a non-negative power by repeated squaring.
    ///
    /// `n == 0` yields the identity and is rejected for the all-zero matrix, where `0^0` is undefined.
    #[tracing::instrument(level = "debug", skip_all, fields(shape = ?self.shape(), exponent = n))]
    pub fn power<A: Ring<Element = T>>(&self, alg: &A, n: i64) -> Result<Self> {
        self.square_dim("power")?;

        if n < 0 {
            return Err(TensorError::InvalidArgument(format!(
                "Negative exponent {n} requires inversion, use power_signed"
            )));
        }
        if n == 0 && self.data.iter().all(|x| alg.is_zero(x)) {
            return Err(TensorError::InvalidArgument(
                "Zero matrix raised to the power 0".to_string(),
            ));
        }

        self.power_unsigned(alg, n.unsigned_abs())
    }

    /// Like [`Tensor::power`], but a negative exponent raises the inverse.
    pub fn power_signed<A: DivisionRing<Element = T>>(&self, alg: &A, n: i64) -> Result<Self> {
        if n < 0 {
            return self.invert(alg)?.power_unsigned(alg, n.unsigned_abs());
        }
        self.power(alg, n)
    }

    fn power_unsigned<A: Ring<Element = T>>(&self, alg: &A, mut exp: u64) -> Result<Self> {
        let n = self.square_dim("power")?;

        let mut result = Self::identity(alg, n)?;
        let mut base = self.clone();
        let mut scratch = Self::zeros(alg, &[n, n])?;

        while exp > 0 {
            if exp & 1 == 1 {
                result.matmul_into(alg, &base, &mut scratch)?;
                std::mem::swap(&mut result, &mut scratch);
            }
            exp >>= 1;
            if exp > 0 {
                base.matmul_into(alg, &base, &mut scratch)?;
                std::mem::swap(&mut base, &mut scratch);
            }
        }

        Ok(result)
    }
}

/// Gauss-Jordan elimination of the row-major `n x n` matrix in `work`, mirroring every row operation
/// on `inverse` when given. Returns the determinant, or `None` when some column has no nonzero pivot.
fn eliminate<A: DivisionRing>(
    alg: &A,
    n: usize,
    work: &mut [A::Element],
    mut inverse: Option<&mut [A::Element]>,
) -> Option<A::Element> {
    let mut det = alg.unity();

    for col in 0..n {
        let pivot_row = (col..n).find(|&row| !alg.is_zero(&work[row * n + col]))?;

        if pivot_row != col {
            swap_rows(work, n, pivot_row, col);
            if let Some(inverse) = inverse.as_deref_mut() {
                swap_rows(inverse, n, pivot_row, col);
            }
            det = alg.negate(&det);
        }

        let pivot = work[col * n + col].clone();
        let pivot_inverse = alg.invert(&pivot)?;
        det = alg.multiply(&det, &pivot);

        scale_row(alg, work, n, col, &pivot_inverse);
        if let Some(inverse) = inverse.as_deref_mut() {
            scale_row(alg, inverse, n, col, &pivot_inverse);
        }

        for row in (0..n).filter(|&row| row != col) {
            let factor = work[row * n + col].clone();
            if alg.is_zero(&factor) {
                continue;
            }
            subtract_row(alg, work, n, row, col, &factor);
            if let Some(inverse) = inverse.as_deref_mut() {
                subtract_row(alg, inverse, n, row, col, &factor);
            }
        }
    }

    Some(det)
}

fn swap_rows<T>(matrix: &mut [T], n: usize, a: usize, b: usize) {
    for k in 0..n {
        matrix.swap(a * n + k, b * n + k);
    }
}

/// `row = factor * row`
fn scale_row<A: Ring>(alg: &A, matrix: &mut [A::Element], n: usize, row: usize, factor: &A::Element) {
    for x in &mut matrix[row * n..(row + 1) * n] {
        *x = alg.multiply(factor, x);
    }
}

/// `target = target - factor * source`
fn subtract_row<A: Ring>(
    alg: &A,
    matrix: &mut [A::Element],
    n: usize,
    target: usize,
    source: usize,
    factor: &A::Element,
) {
    for k in 0..n {
        let delta = alg.multiply(factor, &matrix[source * n + k]);
        matrix[target * n + k] = alg.subtract(&matrix[target * n + k], &delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scalar_algebra::{Integers, Quaternion, Quaternions, Reals};
    #[cfg(feature = "bignum")]
    use scalar_algebra::{BigRational, Rationals};

    #[cfg(feature = "bignum")]
    fn rational(n: i64, d: i64) -> BigRational {
        BigRational::new(n.into(), d.into())
    }

    #[test]
    #[cfg(feature = "bignum")]
    fn test_rational_inverse() -> Result<()> {
        let rationals = Rationals;
        let two = rational(2, 1);
        let zero = rational(0, 1);
        let half = rational(1, 2);

        let matrix = Tensor::<BigRational>::try_from(vec![[two.clone(), zero.clone()], [zero.clone(), two]])?;
        let inverse = matrix.invert(&rationals)?;

        assert_eq!(inverse, Tensor::<BigRational>::try_from(vec![[half.clone(), zero.clone()], [zero, half]])?);
        assert_eq!(matrix.determinant(&rationals)?, rational(4, 1));

        Ok(())
    }

    #[test]
    #[cfg(feature = "bignum")]
    fn test_inverse_with_row_exchange() -> Result<()> {
        let rationals = Rationals;
        let matrix = Tensor::<BigRational>::try_from(vec![
            [rational(0, 1), rational(1, 1)],
            [rational(2, 1), rational(3, 1)],
        ])?;

        let inverse = matrix.invert(&rationals)?;
        let expected = Tensor::<BigRational>::try_from(vec![
            [rational(-3, 2), rational(1, 2)],
            [rational(1, 1), rational(0, 1)],
        ])?;
        assert_eq!(inverse, expected);
        assert_eq!(matrix.determinant(&rationals)?, rational(-2, 1));

        let identity = Tensor::<BigRational>::identity(&rationals, 2)?;
        assert_eq!(matrix.matmul(&rationals, &inverse)?, identity);
        assert_eq!(inverse.matmul(&rationals, &matrix)?, identity);

        Ok(())
    }

    #[test]
    fn test_singular_matrix() -> Result<()> {
        let reals = Reals::<f64>::new();
        let singular = Tensor::<f64>::try_from(vec![[1.0, 2.0], [2.0, 4.0]])?;
        let mut dst = Tensor::<f64>::from(vec![7.0]);

        assert!(matches!(
            singular.invert_into(&reals, &mut dst),
            Err(TensorError::SingularMatrix(_))
        ));
        assert_eq!(dst.as_slice(), &[7.0]);
        assert_eq!(dst.shape(), &[1]);
        assert_eq!(singular.determinant(&reals)?, 0.0);

        let rectangular = Tensor::<f64>::filled(&[2, 3], 1.0)?;
        assert!(matches!(rectangular.invert(&reals), Err(TensorError::ShapeMismatch(_))));

        Ok(())
    }

    #[test]
    fn test_quaternion_inverse_round_trip() -> Result<()> {
        let quats = Quaternions::<f64>::with_tolerance(1e-12);
        let matrix = Tensor::<Quaternion<f64>>::try_from(vec![
            [Quaternion::new(1.0, 2.0, 0.0, -1.0), Quaternion::new(0.0, 1.0, 1.0, 0.0)],
            [Quaternion::new(3.0, 0.0, 0.0, 1.0), Quaternion::new(0.5, 0.0, -2.0, 1.0)],
        ])?;

        let inverse = matrix.invert(&quats)?;
        let identity = Tensor::<Quaternion<f64>>::identity(&quats, 2)?;

        assert!(inverse.matmul(&quats, &matrix)?.is_equal(&quats, &identity));
        assert!(matrix.matmul(&quats, &inverse)?.is_equal(&quats, &identity));

        Ok(())
    }

    #[test]
    fn test_power() -> Result<()> {
        let ints = Integers::<i64>::new();
        let fibonacci = Tensor::<i64>::try_from(vec![[1, 1], [1, 0]])?;

        assert_eq!(fibonacci.power(&ints, 10)?.as_slice(), &[89, 55, 55, 34]);
        assert_eq!(fibonacci.power(&ints, 1)?, fibonacci);
        assert_eq!(fibonacci.power(&ints, 0)?, Tensor::<i64>::identity(&ints, 2)?);

        let zero = Tensor::<i64>::zeros(&ints, &[2, 2])?;
        assert!(matches!(zero.power(&ints, 0), Err(TensorError::InvalidArgument(_))));
        assert_eq!(zero.power(&ints, 3)?, zero);
        assert!(matches!(fibonacci.power(&ints, -1), Err(TensorError::InvalidArgument(_))));

        Ok(())
    }

    #[test]
    #[cfg(feature = "bignum")]
    fn test_power_signed() -> Result<()> {
        let rationals = Rationals;
        let matrix = Tensor::<BigRational>::try_from(vec![
            [rational(2, 1), rational(0, 1)],
            [rational(0, 1), rational(1, 3)],
        ])?;

        let cubed_inverse = matrix.power_signed(&rationals, -3)?;
        assert_eq!(
            cubed_inverse,
            Tensor::<BigRational>::try_from(vec![[rational(1, 8), rational(0, 1)], [rational(0, 1), rational(27, 1)]])?
        );
        assert_eq!(matrix.power_signed(&rationals, 2)?, matrix.power(&rationals, 2)?);

        Ok(())
    }
}
