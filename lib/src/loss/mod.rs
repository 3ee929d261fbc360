use crate::backend::{Backend, Scalar, Tensor1D, TensorLike};
use crate::stable;

/// A differentiable loss used during training.
///
/// Implementors define:
/// - the scalar loss value (for epoch reporting);
/// - the gradient of the loss w.r.t. the model's raw output, which is handed to the
///   model's `backward()`.
pub trait Loss<B: Backend> {
    type Prediction: TensorLike<B>;
    type Target: TensorLike<B>;

    /// Mean loss over the batch.
    fn loss(&self, prediction: &Self::Prediction, target: &Self::Target) -> Scalar<B>;

    /// Gradient of the mean loss w.r.t. the prediction: ∂L/∂pred.
    fn grad_wrt_prediction(
        &self,
        prediction: &Self::Prediction,
        target: &Self::Target,
    ) -> Self::Prediction;
}

/// Binary cross-entropy on logits.
///
/// The forward value uses [`stable::log_loss`], so it stays finite for any logit.
/// The gradient w.r.t. logits is the closed form `(σ(z) - y) / n`; it does not depend on
/// the stabilization, which only concerns the forward value.
///
/// # Example
/// ```
/// use logreg_rs::backend::{CpuBackend, Tensor1D};
/// use logreg_rs::loss::{BCEWithLogitsLoss, Loss};
///
/// let z = Tensor1D::<CpuBackend>::new(vec![0.0, 0.0]);
/// let y = Tensor1D::<CpuBackend>::new(vec![1.0, 0.0]);
/// let g = BCEWithLogitsLoss.grad_wrt_prediction(&z, &y);
/// assert_eq!(g.to_vec(), vec![-0.25, 0.25]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct BCEWithLogitsLoss;

impl<B: Backend> Loss<B> for BCEWithLogitsLoss {
    type Prediction = Tensor1D<B>;
    type Target = Tensor1D<B>;

    fn loss(&self, logits: &Self::Prediction, targets: &Self::Target) -> Scalar<B> {
        stable::log_loss(targets, logits)
    }

    fn grad_wrt_prediction(
        &self,
        logits: &Self::Prediction,
        targets: &Self::Target,
    ) -> Self::Prediction {
        let n = Scalar::<B>::new(1.0 / logits.len() as f64);
        stable::sigmoid(logits).sub(targets).scale(&n)
    }
}
