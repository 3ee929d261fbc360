use super::Backend;

/// Pure-Rust backend storing vectors as `Vec<f64>` and matrices row-major.
///
/// No external dependencies; always compiled.
#[derive(Clone, Debug, Copy)]
pub struct CpuBackend;

/// Row-major matrix: `(data, rows, cols)`.
#[derive(Debug, Clone)]
pub struct CpuTensor2D(pub Vec<f64>, pub usize, pub usize);

impl CpuTensor2D {
    /// # Panics
    /// If `data.len() != rows * cols`.
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> Self {
        assert_eq!(data.len(), rows * cols, "Inconsistent shape");
        Self(data, rows, cols)
    }

    fn row(&self, i: usize) -> &[f64] {
        &self.0[i * self.2..(i + 1) * self.2]
    }
}

impl From<&[Vec<f64>]> for CpuTensor2D {
    fn from(x: &[Vec<f64>]) -> Self {
        if x.is_empty() {
            return CpuTensor2D::new(Vec::new(), 0, 0);
        }
        let rows = x.len();
        let cols = x[0].len();
        assert!(
            x.iter().all(|row| row.len() == cols),
            "All rows must have same length"
        );
        let data: Vec<f64> = x.iter().flat_map(|row| row.iter()).copied().collect();
        CpuTensor2D::new(data, rows, cols)
    }
}

impl Backend for CpuBackend {
    type Scalar = f64;
    type Tensor1D = Vec<f64>;
    type Tensor2D = CpuTensor2D;

    // --- Constructors ---
    fn zeros_1d(len: usize) -> Self::Tensor1D {
        vec![0.; len]
    }

    fn from_vec_1d(data: Vec<f32>) -> Self::Tensor1D {
        data.into_iter().map(f64::from).collect()
    }

    fn from_f64_vec_1d(data: Vec<f64>) -> Self::Tensor1D {
        data
    }

    fn from_vec_2d(data: Vec<f32>, rows: usize, cols: usize) -> Self::Tensor2D {
        CpuTensor2D::new(data.into_iter().map(f64::from).collect(), rows, cols)
    }

    fn from_f64_vec_2d(data: Vec<f64>, rows: usize, cols: usize) -> Self::Tensor2D {
        CpuTensor2D::new(data, rows, cols)
    }

    // --- Element-wise ops ---
    fn add_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a.iter().zip(b.iter()).map(|(a, b)| a + b).collect()
    }

    fn sub_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a.iter().zip(b.iter()).map(|(a, b)| a - b).collect()
    }

    fn mul_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a.iter().zip(b.iter()).map(|(a, b)| a * b).collect()
    }

    fn div_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a.iter().zip(b.iter()).map(|(a, b)| a / b).collect()
    }

    fn mul_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D {
        t.iter().map(|x| x * s).collect()
    }

    fn add_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D {
        t.iter().map(|x| x + s).collect()
    }

    fn scaled_add_1d(t: &mut Self::Tensor1D, alpha: &Self::Scalar, x: &Self::Tensor1D) {
        assert_eq!(t.len(), x.len(), "scaled_add: length mismatch");
        for (ti, xi) in t.iter_mut().zip(x.iter()) {
            *ti += alpha * xi;
        }
    }

    fn maximum_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a.iter().zip(b).map(|(&x, &y)| x.max(y)).collect()
    }

    fn exp_1d(x: &Self::Tensor1D) -> Self::Tensor1D {
        x.iter().map(|&v| v.exp()).collect()
    }

    fn log_1d(x: &Self::Tensor1D) -> Self::Tensor1D {
        x.iter().map(|&v| v.ln()).collect()
    }

    fn sigmoid_1d(x: &Self::Tensor1D) -> Self::Tensor1D {
        x.iter()
            .map(|&z| {
                let m = z.max(0.0);
                let num = (z - m).exp();
                num / ((-m).exp() + num)
            })
            .collect()
    }

    // --- Reductions ---
    fn mean_all_1d(t: &Self::Tensor1D) -> Self::Scalar {
        t.iter().sum::<f64>() / t.len() as f64
    }

    fn sum_all_1d(t: &Self::Tensor1D) -> Self::Scalar {
        t.iter().sum::<f64>()
    }

    fn all_finite_1d(t: &Self::Tensor1D) -> bool {
        t.iter().all(|v| v.is_finite())
    }

    fn scalar_f64(value: f64) -> Self::Scalar {
        value
    }

    // --- Access ---
    fn to_vec_1d(t: &Self::Tensor1D) -> Vec<f64> {
        t.clone()
    }

    fn len_1d(t: &Self::Tensor1D) -> usize {
        t.len()
    }

    fn shape(t: &Self::Tensor2D) -> (usize, usize) {
        (t.1, t.2)
    }

    // --- Linear algebra ---
    fn matvec(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D {
        assert_eq!(a.2, x.len(), "matvec: A.cols() != x.len()");
        (0..a.1)
            .map(|i| a.row(i).iter().zip(x.iter()).map(|(a, b)| a * b).sum())
            .collect()
    }

    fn matvec_transposed(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D {
        assert_eq!(a.1, x.len(), "matvec_transposed: A.rows() != x.len()");
        // Accumulate row by row to walk the row-major buffer contiguously.
        let mut out = vec![0.0; a.2];
        for (i, xi) in x.iter().enumerate() {
            for (o, aij) in out.iter_mut().zip(a.row(i)) {
                *o += aij * xi;
            }
        }
        out
    }
}
