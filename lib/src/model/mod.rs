//! Models with their training state encoded in the type.
//!
//! - [`TrainableModel`]: forward/backward passes and in-place parameter steps, available
//!   on `Unfitted` models.
//! - [`InferenceModel`]: read-only prediction, available on `Fitted` models.

pub mod logistic;
pub mod params;
pub mod state;

pub use logistic::{LogisticModel, LogisticRegression};
pub use params::{Coefficients, LogisticParams};
pub use state::{Fitted, Unfitted};

use crate::backend::Backend;
use crate::error::TrainError;
use crate::optimizer::Optimizer;

/// Training-time interface.
pub trait TrainableModel<B: Backend> {
    type Input;
    type Prediction;
    type Params;
    type Gradients;
    type Output;

    /// Raw model output (logits for logistic regression).
    fn forward(&self, input: &Self::Input) -> Self::Prediction;

    /// Gradients of the loss w.r.t. the parameters, given ∂L/∂prediction.
    fn backward(&self, input: &Self::Input, grad_output: &Self::Prediction) -> Self::Gradients;

    fn params(&self) -> &Self::Params;

    /// Applies one optimizer step to the parameters in place.
    ///
    /// Gradients share the parameter layout, so `grads` is typed as `Self::Params`.
    fn apply_step<O: Optimizer<B, Self::Params>>(&mut self, optimizer: &O, grads: &Self::Params);

    /// Number of input features the model expects.
    fn n_features(&self) -> usize;

    fn into_fitted(self) -> Self::Output;
}

/// Inference-time interface.
///
/// Implementations must not mutate state: a fitted model may be shared across threads
/// and queried concurrently.
pub trait InferenceModel<B: Backend> {
    type InputSingle;
    type OutputSingle;
    type InputBatch;
    type OutputBatch;
    /// Host-side parameter representation.
    type ParamsRepr;

    fn predict(&self, input: &Self::InputSingle) -> Result<Self::OutputSingle, TrainError>;

    fn predict_batch(&self, input: &Self::InputBatch) -> Result<Self::OutputBatch, TrainError>;

    fn extract_params(&self) -> Self::ParamsRepr;

    fn from_params(params: Self::ParamsRepr) -> Result<Self, TrainError>
    where
        Self: Sized;
}
