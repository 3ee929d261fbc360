//! Overflow-safe logistic primitives.
//!
//! Every function here shifts its argument by `m = max(0, z)` before exponentiating, so
//! the only values ever passed to `exp` are `-m` and `z - m`, both non-positive. The
//! results are mathematically identical to the textbook formulas but stay finite for
//! logits of any magnitude:
//!
//! ```text
//! sigmoid(z)      = exp(z - m) / (exp(-m) + exp(z - m))
//! log_sum_exp(z)  = m + ln(exp(-m) + exp(z - m))          = ln(1 + e^z)
//! log_loss(y, z)  = -(y * (z - lse) + (1 - y) * (-lse))
//! ```
//!
//! # Example
//!
//! ```rust
//! use logreg_rs::backend::{CpuBackend, Tensor1D};
//! use logreg_rs::stable;
//!
//! let z = Tensor1D::<CpuBackend>::from_f64(vec![-1e6, 0.0, 1e6]);
//! let y = Tensor1D::<CpuBackend>::new(vec![0.0, 1.0, 1.0]);
//!
//! let p = stable::sigmoid(&z).to_vec();
//! assert_eq!(p, vec![0.0, 0.5, 1.0]);
//!
//! let loss = stable::log_loss(&y, &z).to_f64();
//! assert!((loss - std::f64::consts::LN_2 / 3.0).abs() < 1e-12);
//! ```

use crate::backend::{Backend, Scalar, Tensor1D, TensorLike};

/// The shift `m = max(0, z)` and the two bounded exponentials `(exp(-m), exp(z - m))`.
fn shifted_exps<B: Backend>(z: &Tensor1D<B>) -> (Tensor1D<B>, Tensor1D<B>, Tensor1D<B>) {
    let m = z.clamp_min_zero();
    let neg_m = m.scale(&Scalar::new(-1.0)).exp();
    let z_m = z.sub(&m).exp();
    (m, neg_m, z_m)
}

/// Element-wise probability `1 / (1 + e^-z)`, computed in max-shift form.
///
/// Runs on the backend's [`Backend::sigmoid_1d`] kernel.
pub fn sigmoid<B: Backend>(z: &Tensor1D<B>) -> Tensor1D<B> {
    z.sigmoid()
}

/// Element-wise `ln(1 + e^z)`.
pub fn log_sum_exp<B: Backend>(z: &Tensor1D<B>) -> Tensor1D<B> {
    let (m, neg_m, z_m) = shifted_exps(z);
    m.add(&neg_m.add(&z_m).log())
}

/// Per-example cross-entropy between labels `y` and logits `z`.
///
/// Non-negative for labels in {0, 1}.
///
/// # Panics
/// If `y` and `z` differ in length.
pub fn log_loss_per_example<B: Backend>(y: &Tensor1D<B>, z: &Tensor1D<B>) -> Tensor1D<B> {
    assert_eq!(y.len(), z.len(), "log_loss: labels and logits differ in length");
    let lse = log_sum_exp(z);
    // -(y*(z - lse) + (1 - y)*(-lse)) simplifies to lse - y*z
    lse.sub(&y.mul(z))
}

/// Mean cross-entropy over a batch.
///
/// # Example
/// ```
/// use logreg_rs::backend::{CpuBackend, Tensor1D};
/// use logreg_rs::stable::log_loss;
///
/// let y = Tensor1D::<CpuBackend>::new(vec![1.0, 0.0]);
/// let z = Tensor1D::<CpuBackend>::new(vec![0.0, 0.0]);
/// assert!((log_loss(&y, &z).to_f64() - std::f64::consts::LN_2).abs() < 1e-12);
/// ```
pub fn log_loss<B: Backend>(y: &Tensor1D<B>, z: &Tensor1D<B>) -> Scalar<B> {
    log_loss_per_example(y, z).mean()
}

/// Scalar form of [`sigmoid`].
pub fn sigmoid_scalar(z: f64) -> f64 {
    let m = z.max(0.0);
    let num = (z - m).exp();
    num / ((-m).exp() + num)
}

/// Scalar form of [`log_loss_per_example`].
pub fn log_loss_scalar(y: f64, z: f64) -> f64 {
    let m = z.max(0.0);
    let lse = m + ((-m).exp() + (z - m).exp()).ln();
    -(y * (z - lse) + (1.0 - y) * (-lse))
}
