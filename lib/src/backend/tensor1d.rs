use super::scalar::Scalar;
use crate::backend::Backend;
use std::marker::PhantomData;

/// Backend-typed 1D tensor.
///
/// Wraps a backend's native vector (`B::Tensor1D`) and carries the backend as a phantom
/// type, so vectors from different backends cannot be mixed:
///
/// ```compile_fail
/// use logreg_rs::backend::{CpuBackend, NdarrayBackend, Tensor1D, TensorLike};
///
/// let cpu_tensor: Tensor1D<CpuBackend> = Tensor1D::zeros(3);
/// let ndarray_tensor: Tensor1D<NdarrayBackend> = Tensor1D::zeros(3);
/// let _ = cpu_tensor.sub(&ndarray_tensor);
/// ```
///
/// # Precision semantics
/// - [`Tensor1D::new`] accepts `Vec<f32>` (the input format of datasets); values are
///   widened to backend precision (`f64`) immediately.
/// - [`Tensor1D::from_f64`] keeps full precision, used for parameter snapshots and for
///   logits passed directly to the stable math primitives.
/// - `to_vec()` returns `Vec<f64>`.
///
/// # Example
/// ```
/// use logreg_rs::backend::{CpuBackend, Scalar, Tensor1D};
///
/// let x: Tensor1D<CpuBackend> = Tensor1D::new(vec![1.0f32, 2.0, 3.0]);
/// let y = x.scale(&Scalar::new(2.0));
/// assert_eq!(y.to_vec(), vec![2.0, 4.0, 6.0]);
/// ```
#[derive(Clone)]
pub struct Tensor1D<B: Backend> {
    pub(crate) data: B::Tensor1D,
    pub(crate) backend: PhantomData<B>,
}

impl<B: Backend> Tensor1D<B> {
    pub(crate) fn from_raw(data: B::Tensor1D) -> Self {
        Self {
            data,
            backend: PhantomData,
        }
    }

    /// Creates a new 1D tensor from `f32` values.
    ///
    /// # Example
    /// ```
    /// use logreg_rs::backend::{CpuBackend, Tensor1D};
    ///
    /// let t: Tensor1D<CpuBackend> = Tensor1D::new(vec![1.0f32, 2.5, 3.75]);
    /// assert_eq!(t.to_vec(), vec![1.0, 2.5, 3.75]);
    /// ```
    pub fn new(data: Vec<f32>) -> Self {
        Self::from_raw(B::from_vec_1d(data))
    }

    /// Creates a new 1D tensor from `f64` values without narrowing.
    pub fn from_f64(data: Vec<f64>) -> Self {
        Self::from_raw(B::from_f64_vec_1d(data))
    }

    /// Creates a 1D tensor filled with zeros.
    pub fn zeros(len: usize) -> Self {
        Self::from_raw(B::zeros_1d(len))
    }

    /// Arithmetic mean of all elements. NaN for an empty tensor.
    ///
    /// # Example
    /// ```
    /// use logreg_rs::backend::{CpuBackend, Tensor1D};
    ///
    /// let t = Tensor1D::<CpuBackend>::new(vec![1.0f32, 2.0, 3.0, 4.0]);
    /// assert!((t.mean().to_f64() - 2.5).abs() < 1e-12);
    /// ```
    pub fn mean(&self) -> Scalar<B> {
        Scalar::from_raw(B::mean_all_1d(&self.data))
    }

    /// Sum of all elements.
    pub fn sum(&self) -> Scalar<B> {
        Scalar::from_raw(B::sum_all_1d(&self.data))
    }

    /// Copies the tensor into a host `Vec<f64>`.
    pub fn to_vec(&self) -> Vec<f64> {
        B::to_vec_1d(&self.data)
    }

    /// Inner product.
    ///
    /// # Example
    /// ```
    /// use logreg_rs::backend::{CpuBackend, Tensor1D};
    ///
    /// let a = Tensor1D::<CpuBackend>::new(vec![1.0, 2.0, 3.0]);
    /// let b = Tensor1D::<CpuBackend>::new(vec![4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b).to_f64(), 32.0);
    /// ```
    pub fn dot(&self, other: &Self) -> Scalar<B> {
        Scalar::from_raw(B::sum_all_1d(&B::mul_1d(&self.data, &other.data)))
    }

    pub fn len(&self) -> usize {
        B::len_1d(&self.data)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Multiplies every element by `a`.
    pub fn scale(&self, a: &Scalar<B>) -> Self {
        Self::from_raw(B::mul_scalar_1d(&self.data, &a.data))
    }

    /// Adds `a` to every element.
    pub fn add_scalar(&self, a: &Scalar<B>) -> Self {
        Self::from_raw(B::add_scalar_1d(&self.data, &a.data))
    }

    /// In-place `self ← self + alpha * other`.
    ///
    /// # Panics
    /// If lengths differ.
    ///
    /// # Example
    /// ```
    /// use logreg_rs::backend::{CpuBackend, Scalar, Tensor1D};
    ///
    /// let mut w = Tensor1D::<CpuBackend>::new(vec![1.0, 1.0]);
    /// let g = Tensor1D::<CpuBackend>::new(vec![2.0, -2.0]);
    /// w.scaled_add_assign(&Scalar::new(-0.5), &g);
    /// assert_eq!(w.to_vec(), vec![0.0, 2.0]);
    /// ```
    pub fn scaled_add_assign(&mut self, alpha: &Scalar<B>, other: &Self) {
        B::scaled_add_1d(&mut self.data, &alpha.data, &other.data);
    }

    /// Element-wise maximum.
    pub fn maximum(&self, other: &Self) -> Self {
        Self::from_raw(B::maximum_1d(&self.data, &other.data))
    }

    /// Element-wise `max(x, 0)`.
    pub fn clamp_min_zero(&self) -> Self {
        self.maximum(&Self::zeros(self.len()))
    }

    pub fn exp(&self) -> Self {
        Self::from_raw(B::exp_1d(&self.data))
    }

    /// Element-wise natural logarithm.
    pub fn log(&self) -> Self {
        Self::from_raw(B::log_1d(&self.data))
    }

    /// Element-wise logistic function (backend kernel, max-shift form).
    ///
    /// # Example
    /// ```
    /// use logreg_rs::backend::{CpuBackend, Tensor1D};
    ///
    /// let p = Tensor1D::<CpuBackend>::new(vec![0.0]).sigmoid();
    /// assert_eq!(p.to_vec(), vec![0.5]);
    /// ```
    pub fn sigmoid(&self) -> Self {
        Self::from_raw(B::sigmoid_1d(&self.data))
    }

    /// `true` when no element is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        B::all_finite_1d(&self.data)
    }
}

impl<B: Backend> std::fmt::Debug for Tensor1D<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Tensor1D").field(&self.to_vec()).finish()
    }
}
