//! # Backend Abstraction
//!
//! Trait-based abstraction over the tensor storage used by the trainer, so the same
//! logistic regression code runs on a plain `Vec<f64>` implementation or on `ndarray`.
//!
//! ## Design
//!
//! - **Minimal trait surface**: only the operations the training loop and the stable
//!   math primitives need (element-wise ops, reductions, matrix-vector products).
//! - **Compile-time selection**: the backend is a type parameter; there is no dynamic
//!   dispatch in the hot loop.
//! - **Typed wrappers**: [`Tensor1D`], [`Tensor2D`] and [`Scalar`] carry their backend in a
//!   `PhantomData`, so tensors from different backends cannot be mixed.
//!
//! ## Available Backends
//!
//! | Backend          | Feature   | Storage                          |
//! |------------------|-----------|----------------------------------|
//! | `CpuBackend`     | always on | `Vec<f64>`, row-major matrices   |
//! | `NdarrayBackend` | `ndarray` | `ndarray::Array1` / `Array2`     |
//!
//! ## Example
//!
//! ```rust
//! use logreg_rs::backend::{CpuBackend, Tensor1D, Tensor2D};
//!
//! let x: Tensor2D<CpuBackend> = Tensor2D::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
//! let w: Tensor1D<CpuBackend> = Tensor1D::new(vec![0.5, 0.5]);
//!
//! let logits = x.dot(&w);
//! assert_eq!(logits.to_vec(), vec![1.5, 3.5]);
//! ```

pub mod cpu;
/// Pure-Rust CPU backend.
pub use cpu::{CpuBackend, CpuTensor2D};

#[cfg(feature = "ndarray")]
mod ndarray_backend;
#[cfg(feature = "ndarray")]
/// Backend backed by the `ndarray` crate.
pub use ndarray_backend::{NdarrayBackend, NdarrayTensor2D};

/// Scalar value representation and arithmetic operations.
pub mod scalar;
/// One-dimensional tensor abstraction.
pub mod tensor1d;
/// Two-dimensional tensor abstraction.
pub mod tensor2d;
/// Shared element-wise operations trait.
pub mod tensorlike;

pub use scalar::{Scalar, ScalarOps};
pub use tensor1d::Tensor1D;
pub use tensor2d::Tensor2D;
pub use tensorlike::TensorLike;

/// Abstraction over tensor storage and the numeric kernels run on it.
///
/// Implementations provide concrete tensor types; the typed wrappers in this module
/// expose them with a uniform API.
///
/// # Shape checking
///
/// `matvec` and `matvec_transposed` panic on incompatible shapes. Callers that take
/// user input (the predictor, the trainer) validate dimensions first and report
/// [`crate::error::TrainError::ShapeMismatch`] instead.
///
/// # Example Implementation Sketch
///
/// ```ignore
/// use logreg_rs::backend::Backend;
///
/// #[derive(Clone, Debug, Copy)]
/// struct MyBackend;
///
/// impl Backend for MyBackend {
///     type Scalar = f64;
///     type Tensor1D = Vec<f64>;
///     type Tensor2D = MyMatrix;
///     // ... implement all required methods
/// }
/// ```
pub trait Backend: Clone + Copy + Send + Sync + 'static {
    /// Scalar type supporting arithmetic operations.
    type Scalar: ScalarOps;

    /// One-dimensional tensor type.
    type Tensor1D: Clone + Send + Sync;

    /// Two-dimensional tensor type.
    type Tensor2D: Clone + Send + Sync;

    // --- Constructors ---

    /// Creates a 1D tensor filled with zeros of given length.
    fn zeros_1d(len: usize) -> Self::Tensor1D;

    /// Constructs a 1D tensor from `f32` host data, widening to backend precision.
    fn from_vec_1d(data: Vec<f32>) -> Self::Tensor1D;

    /// Constructs a 1D tensor from `f64` host data without any precision change.
    fn from_f64_vec_1d(data: Vec<f64>) -> Self::Tensor1D;

    /// Constructs a 2D tensor from row-major ordered data.
    ///
    /// # Panics
    /// If `data.len() != rows * cols`.
    fn from_vec_2d(data: Vec<f32>, rows: usize, cols: usize) -> Self::Tensor2D;

    /// Row-major 2D constructor for `f64` host data.
    ///
    /// # Panics
    /// If `data.len() != rows * cols`.
    fn from_f64_vec_2d(data: Vec<f64>, rows: usize, cols: usize) -> Self::Tensor2D;

    // --- Element-wise operations ---

    /// Element-wise addition of two 1D tensors.
    fn add_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D;

    /// Element-wise subtraction of two 1D tensors.
    fn sub_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D;

    /// Element-wise multiplication of two 1D tensors.
    fn mul_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D;

    /// Element-wise division of two 1D tensors.
    fn div_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D;

    /// Multiplies each element of tensor by a scalar.
    fn mul_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D;

    /// Adds a scalar to each element of tensor.
    fn add_scalar_1d(t: &Self::Tensor1D, s: &Self::Scalar) -> Self::Tensor1D;

    /// In-place `t ← t + alpha * x`.
    ///
    /// This is the only mutating kernel; parameter updates go through it so the
    /// weight buffer is never reallocated during training.
    fn scaled_add_1d(t: &mut Self::Tensor1D, alpha: &Self::Scalar, x: &Self::Tensor1D);

    /// Element-wise maximum between two tensors.
    fn maximum_1d(x: &Self::Tensor1D, other: &Self::Tensor1D) -> Self::Tensor1D;

    /// Element-wise exponential function (e^x).
    fn exp_1d(x: &Self::Tensor1D) -> Self::Tensor1D;

    /// Element-wise natural logarithm.
    fn log_1d(x: &Self::Tensor1D) -> Self::Tensor1D;

    /// Element-wise logistic function.
    ///
    /// Implementations must use the max-shift form
    /// `exp(z - m) / (exp(-m) + exp(z - m))` with `m = max(0, z)` so no positive
    /// argument is ever exponentiated.
    fn sigmoid_1d(x: &Self::Tensor1D) -> Self::Tensor1D;

    // --- Reductions ---

    /// Arithmetic mean of all elements in a 1D tensor.
    fn mean_all_1d(t: &Self::Tensor1D) -> Self::Scalar;

    /// Sum of all elements in a 1D tensor.
    fn sum_all_1d(t: &Self::Tensor1D) -> Self::Scalar;

    /// Returns `true` when no element is NaN or infinite.
    fn all_finite_1d(t: &Self::Tensor1D) -> bool;

    // --- Scalar operations ---

    /// Creates a backend-specific scalar from an f64 value.
    fn scalar_f64(value: f64) -> Self::Scalar;

    // --- Data access ---

    /// Copies a 1D tensor into a host `Vec<f64>`.
    fn to_vec_1d(t: &Self::Tensor1D) -> Vec<f64>;

    /// Number of elements in a 1D tensor.
    fn len_1d(t: &Self::Tensor1D) -> usize;

    /// Shape of a 2D tensor as `(rows, cols)`.
    fn shape(t: &Self::Tensor2D) -> (usize, usize);

    // --- Linear algebra ---

    /// Computes `A · x` where `A` is (m × n) and `x` is (n,).
    ///
    /// # Panics
    /// If `A.cols() != x.len()`.
    fn matvec(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D;

    /// Computes `Aᵀ · x` where `A` is (m × n) and `x` is (m,).
    ///
    /// # Panics
    /// If `A.rows() != x.len()`.
    fn matvec_transposed(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D;
}
