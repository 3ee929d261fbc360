//! Binary logistic regression: `p(y = 1 | x) = σ(w·x + b)`.
//!
//! - [`LogisticRegression`] = `LogisticModel<B, Unfitted>`: zero-initialized, consumed by
//!   [`crate::trainer::Trainer::fit`].
//! - `LogisticModel<B, Fitted>`: the predictor. Read-only, `Send + Sync`.
//!
//! The fitted model carries only weights and bias. Prediction is a pure forward pass and
//! never re-initializes or touches the trained values.

use crate::backend::{Backend, Scalar, Tensor1D, Tensor2D};
use crate::error::TrainError;
use crate::model::{
    Coefficients, Fitted, InferenceModel, LogisticParams, TrainableModel, Unfitted,
};
use crate::optimizer::Optimizer;
use crate::stable;
use std::marker::PhantomData;

/// Logistic regression with its training state encoded at the type level.
///
/// - `S = Unfitted`: implements [`TrainableModel`].
/// - `S = Fitted`: implements [`InferenceModel`].
///
/// Calling `predict` on an untrained model does not compile:
///
/// ```compile_fail
/// use logreg_rs::backend::{CpuBackend, Tensor2D};
/// use logreg_rs::model::{InferenceModel, LogisticRegression};
///
/// let model = LogisticRegression::<CpuBackend>::new(2);
/// let x = Tensor2D::<CpuBackend>::new(vec![1.0, 2.0], 1, 2);
/// let _ = model.predict_batch(&x);
/// ```
#[derive(Clone, Debug)]
pub struct LogisticModel<B: Backend, S> {
    params: LogisticParams<B>,
    _state: PhantomData<S>,
}

/// Alias for an **unfitted** logistic regression model.
pub type LogisticRegression<B> = LogisticModel<B, Unfitted>;

impl<B: Backend> LogisticRegression<B> {
    /// Creates a model with zero weights and zero bias.
    ///
    /// # Parameters
    /// - `n_features`: dimensionality of each input row.
    pub fn new(n_features: usize) -> Self {
        Self {
            params: LogisticParams::zeros(n_features),
            _state: PhantomData,
        }
    }
}

impl<B: Backend, S> LogisticModel<B, S> {
    /// Logits `X·w + b` after checking the feature dimension.
    fn checked_logits(&self, x: &Tensor2D<B>) -> Result<Tensor1D<B>, TrainError> {
        let expected = self.params.n_features();
        if x.cols() != expected {
            return Err(TrainError::ShapeMismatch {
                what: "input features",
                expected,
                got: x.cols(),
            });
        }
        Ok(x.dot(&self.params.weights).add_scalar(&self.params.bias))
    }
}

/// Training interface.
///
/// Forward pass: `X·w + b` (logits).
/// Backward pass: given `g = ∂L/∂logits`, returns `∇w = Xᵀ·g`, `∇b = Σg`.
/// With `g = (σ(z) - y) / m` this is the mean cross-entropy gradient.
impl<B: Backend> TrainableModel<B> for LogisticModel<B, Unfitted> {
    type Input = Tensor2D<B>;
    type Prediction = Tensor1D<B>;
    type Params = LogisticParams<B>;
    type Gradients = LogisticParams<B>;
    type Output = LogisticModel<B, Fitted>;

    fn forward(&self, x: &Self::Input) -> Self::Prediction {
        x.dot(&self.params.weights).add_scalar(&self.params.bias)
    }

    fn backward(&self, x: &Self::Input, grad_output: &Self::Prediction) -> Self::Gradients {
        LogisticParams {
            weights: x.tdot(grad_output),
            bias: grad_output.sum(),
        }
    }

    fn params(&self) -> &Self::Params {
        &self.params
    }

    fn apply_step<O: Optimizer<B, Self::Params>>(&mut self, optimizer: &O, grads: &Self::Params) {
        optimizer.step(&mut self.params, grads);
    }

    fn n_features(&self) -> usize {
        self.params.n_features()
    }

    fn into_fitted(self) -> LogisticModel<B, Fitted> {
        LogisticModel {
            params: self.params,
            _state: PhantomData,
        }
    }
}

impl<B: Backend> LogisticModel<B, Fitted> {
    /// Builds a predictor directly from coefficients.
    ///
    /// # Example
    /// ```
    /// use logreg_rs::backend::{CpuBackend, Tensor2D};
    /// use logreg_rs::model::{Coefficients, InferenceModel, LogisticModel, Fitted};
    ///
    /// let model = LogisticModel::<CpuBackend, Fitted>::from_coefficients(&Coefficients {
    ///     weights: vec![1.0, -1.0],
    ///     bias: 0.0,
    /// })
    /// .unwrap();
    ///
    /// let x = Tensor2D::<CpuBackend>::new(vec![2.0, 2.0, 0.0, 0.0], 2, 2);
    /// assert_eq!(model.predict_batch(&x).unwrap().to_vec(), vec![0.5, 0.5]);
    /// ```
    pub fn from_coefficients(coefficients: &Coefficients) -> Result<Self, TrainError> {
        coefficients.validate()?;
        Ok(Self {
            params: LogisticParams::from_coefficients(coefficients),
            _state: PhantomData,
        })
    }

    /// Logits `X·w + b` for every row.
    pub fn decision_function(&self, x: &Tensor2D<B>) -> Result<Tensor1D<B>, TrainError> {
        self.checked_logits(x)
    }

    /// Hard labels: `1.0` where the probability exceeds `threshold`, else `0.0`.
    pub fn predict_classes(&self, x: &Tensor2D<B>, threshold: f64) -> Result<Vec<f32>, TrainError> {
        Ok(self
            .predict_batch(x)?
            .to_vec()
            .into_iter()
            .map(|p| if p > threshold { 1.0 } else { 0.0 })
            .collect())
    }

    /// Current weights and bias as host values.
    pub fn coefficients(&self) -> Coefficients {
        self.params.snapshot()
    }

    pub fn n_features(&self) -> usize {
        self.params.n_features()
    }
}

/// Prediction interface: probabilities `σ(X·w + b)`.
///
/// - Single row: [`Tensor1D<B>`] → [`Scalar<B>`]
/// - Batch: [`Tensor2D<B>`] with N rows → [`Tensor1D<B>`] of length N
impl<B: Backend> InferenceModel<B> for LogisticModel<B, Fitted> {
    type InputSingle = Tensor1D<B>;
    type OutputSingle = Scalar<B>;
    type InputBatch = Tensor2D<B>;
    type OutputBatch = Tensor1D<B>;
    type ParamsRepr = Coefficients;

    fn predict(&self, input: &Self::InputSingle) -> Result<Self::OutputSingle, TrainError> {
        let expected = self.params.n_features();
        if input.len() != expected {
            return Err(TrainError::ShapeMismatch {
                what: "input features",
                expected,
                got: input.len(),
            });
        }
        let z = self.params.weights.dot(input) + self.params.bias;
        Ok(Scalar::new(stable::sigmoid_scalar(z.to_f64())))
    }

    fn predict_batch(&self, input: &Self::InputBatch) -> Result<Self::OutputBatch, TrainError> {
        Ok(stable::sigmoid(&self.checked_logits(input)?))
    }

    fn extract_params(&self) -> Self::ParamsRepr {
        self.coefficients()
    }

    fn from_params(params: Self::ParamsRepr) -> Result<Self, TrainError> {
        Self::from_coefficients(&params)
    }
}
