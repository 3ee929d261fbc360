use super::Backend;
use ndarray::{Array1, Array2};

/// Tensor backend implemented on top of the `ndarray` crate.
///
/// # Type mappings
/// - `Scalar`: `f64`
/// - `Tensor1D`: `ndarray::Array1<f64>`
/// - `Tensor2D`: [`NdarrayTensor2D`] wrapper around `ndarray::Array2<f64>`
///
/// Matrix-vector products go through `ndarray`'s `dot`, which is what makes this backend
/// faster than [`super::CpuBackend`] on wide feature matrices.
#[derive(Clone, Debug, Copy)]
pub struct NdarrayBackend;

/// Wrapper type for 2D tensors using ndarray's `Array2<f64>`.
///
/// # Example
/// ```
/// use logreg_rs::backend::NdarrayTensor2D;
///
/// let tensor = NdarrayTensor2D::from(&[
///     vec![1.0f64, 2.0, 3.0],
///     vec![4.0f64, 5.0, 6.0],
/// ][..]);
/// assert_eq!(tensor.0.shape(), &[2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct NdarrayTensor2D(pub Array2<f64>);

impl From<&[Vec<f64>]> for NdarrayTensor2D {
    /// Converts a slice of row vectors into a 2D tensor.
    ///
    /// # Panics
    /// Panics if rows have inconsistent lengths.
    fn from(x: &[Vec<f64>]) -> Self {
        let rows = x.len();
        let cols = x.first().map_or(0, Vec::len);
        assert!(
            x.iter().all(|r| r.len() == cols),
            "All rows must have same length"
        );
        NdarrayTensor2D(Array2::from_shape_fn((rows, cols), |(i, j)| x[i][j]))
    }
}

impl Backend for NdarrayBackend {
    type Scalar = f64;
    type Tensor1D = Array1<f64>;
    type Tensor2D = NdarrayTensor2D;

    fn zeros_1d(len: usize) -> Self::Tensor1D {
        Array1::zeros(len)
    }

    fn from_vec_1d(data: Vec<f32>) -> Self::Tensor1D {
        data.into_iter().map(f64::from).collect()
    }

    fn from_f64_vec_1d(data: Vec<f64>) -> Self::Tensor1D {
        Array1::from_vec(data)
    }

    /// Builds a row-major matrix.
    ///
    /// # Panics
    /// If `data.len() != rows * cols`.
    fn from_vec_2d(data: Vec<f32>, rows: usize, cols: usize) -> Self::Tensor2D {
        assert_eq!(data.len(), rows * cols, "Inconsistent shape");
        NdarrayTensor2D(Array2::from_shape_fn((rows, cols), |(i, j)| {
            f64::from(data[i * cols + j])
        }))
    }

    fn from_f64_vec_2d(data: Vec<f64>, rows: usize, cols: usize) -> Self::Tensor2D {
        assert_eq!(data.len(), rows * cols, "Inconsistent shape");
        NdarrayTensor2D(Array2::from_shape_fn((rows, cols), |(i, j)| data[i * cols + j]))
    }

    // --- Element-wise binary ops (1D) ---

    fn add_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a + b
    }

    fn sub_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a - b
    }

    fn mul_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a * b
    }

    fn div_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a / b
    }

    fn mul_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D {
        t * *s
    }

    fn add_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D {
        t + *s
    }

    fn scaled_add_1d(t: &mut Self::Tensor1D, alpha: &Self::Scalar, x: &Self::Tensor1D) {
        t.scaled_add(*alpha, x);
    }

    fn maximum_1d(x: &Self::Tensor1D, other: &Self::Tensor1D) -> Self::Tensor1D {
        ndarray::Zip::from(x)
            .and(other)
            .map_collect(|&a, &b| a.max(b))
    }

    // --- Element-wise non-linear ops (1D) ---

    fn exp_1d(x: &Self::Tensor1D) -> Self::Tensor1D {
        x.mapv(f64::exp)
    }

    fn log_1d(x: &Self::Tensor1D) -> Self::Tensor1D {
        x.mapv(f64::ln)
    }

    /// Max-shift logistic function.
    ///
    /// # Example
    /// ```
    /// use logreg_rs::backend::{Backend, NdarrayBackend};
    /// use ndarray::Array1;
    ///
    /// let p = NdarrayBackend::sigmoid_1d(&Array1::from_vec(vec![-1e6, 0.0, 1e6]));
    /// assert_eq!(p.to_vec(), vec![0.0, 0.5, 1.0]);
    /// ```
    fn sigmoid_1d(x: &Self::Tensor1D) -> Self::Tensor1D {
        x.mapv(|z| {
            let m = z.max(0.0);
            let num = (z - m).exp();
            num / ((-m).exp() + num)
        })
    }

    // --- Reductions ---

    fn mean_all_1d(t: &Self::Tensor1D) -> Self::Scalar {
        t.mean().unwrap_or(f64::NAN)
    }

    fn sum_all_1d(t: &Self::Tensor1D) -> Self::Scalar {
        t.sum()
    }

    fn all_finite_1d(t: &Self::Tensor1D) -> bool {
        t.iter().all(|v| v.is_finite())
    }

    fn scalar_f64(value: f64) -> Self::Scalar {
        value
    }

    fn to_vec_1d(t: &Self::Tensor1D) -> Vec<f64> {
        t.to_vec()
    }

    fn len_1d(t: &Self::Tensor1D) -> usize {
        t.len()
    }

    fn shape(t: &Self::Tensor2D) -> (usize, usize) {
        t.0.dim()
    }

    // --- Linear algebra ---

    fn matvec(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D {
        a.0.dot(x)
    }

    fn matvec_transposed(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D {
        a.0.t().dot(x)
    }
}
