use crate::backend::{Backend, Scalar, Tensor1D};
use crate::error::TrainError;
use serde::{Deserialize, Serialize};

/// Weight vector and bias of a logistic regression model.
///
/// Owned by the model. During training the only way to change it is
/// [`LogisticParams::apply_update`], which the optimizer calls once per batch.
#[derive(Clone, Debug)]
pub struct LogisticParams<B: Backend> {
    pub weights: Tensor1D<B>,
    pub bias: Scalar<B>,
}

impl<B: Backend> LogisticParams<B> {
    /// Zero weights of length `n_features` and a zero bias.
    pub fn zeros(n_features: usize) -> Self {
        Self {
            weights: Tensor1D::zeros(n_features),
            bias: Scalar::new(0.0),
        }
    }

    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    /// In-place gradient step: `w ← w - lr·dw`, `b ← b - lr·db`.
    ///
    /// No clipping or normalization is applied.
    ///
    /// # Panics
    /// If `grads` has a different number of weights.
    ///
    /// # Example
    /// ```
    /// use logreg_rs::backend::{CpuBackend, Scalar, Tensor1D};
    /// use logreg_rs::model::LogisticParams;
    ///
    /// let mut params = LogisticParams::<CpuBackend>::zeros(2);
    /// let grads = LogisticParams {
    ///     weights: Tensor1D::new(vec![-0.75, -0.5]),
    ///     bias: Scalar::new(0.25),
    /// };
    /// params.apply_update(&grads, Scalar::new(1.0));
    ///
    /// let c = params.snapshot();
    /// assert_eq!(c.weights, vec![0.75, 0.5]);
    /// assert_eq!(c.bias, -0.25);
    /// ```
    pub fn apply_update(&mut self, grads: &Self, lr: Scalar<B>) {
        let neg_lr = Scalar::new(0.0) - lr;
        self.weights.scaled_add_assign(&neg_lr, &grads.weights);
        self.bias = self.bias - lr * grads.bias;
    }

    /// `true` when neither the weights nor the bias contain NaN or infinity.
    pub fn is_finite(&self) -> bool {
        self.weights.is_finite() && self.bias.is_finite()
    }

    /// Host-side copy of the current values.
    pub fn snapshot(&self) -> Coefficients {
        Coefficients {
            weights: self.weights.to_vec(),
            bias: self.bias.to_f64(),
        }
    }

    /// Rebuilds backend parameters from a host-side copy.
    pub fn from_coefficients(coefficients: &Coefficients) -> Self {
        Self {
            weights: Tensor1D::from_f64(coefficients.weights.clone()),
            bias: Scalar::new(coefficients.bias),
        }
    }
}

/// Backend-independent copy of a model's parameters.
///
/// Serializable for reports and logs; it is not a model file format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl Coefficients {
    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    /// Rejects empty or non-finite coefficient sets.
    pub fn validate(&self) -> Result<(), TrainError> {
        if self.weights.is_empty() {
            return Err(TrainError::invalid("coefficients have no weights"));
        }
        if !self.bias.is_finite() || self.weights.iter().any(|w| !w.is_finite()) {
            return Err(TrainError::invalid("coefficients contain non-finite values"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::CpuBackend;

    fn params(w: Vec<f32>, b: f64) -> LogisticParams<CpuBackend> {
        LogisticParams {
            weights: Tensor1D::new(w),
            bias: Scalar::new(b),
        }
    }

    #[test]
    fn test_zeros() {
        let p = LogisticParams::<CpuBackend>::zeros(3);
        assert_eq!(p.weights.to_vec(), vec![0.0; 3]);
        assert_eq!(p.bias.to_f64(), 0.0);
        assert_eq!(p.n_features(), 3);
    }

    #[test]
    fn test_apply_update() {
        // w: [2.0 - 0.1*1.0, 3.0 - 0.1*(-1.0)] = [1.9, 3.1]; b: 1.0 - 0.1*0.5 = 0.95
        let mut p = params(vec![2.0, 3.0], 1.0);
        let g = params(vec![1.0, -1.0], 0.5);
        p.apply_update(&g, Scalar::new(0.1));

        let c = p.snapshot();
        assert!((c.weights[0] - 1.9).abs() < 1e-12);
        assert!((c.weights[1] - 3.1).abs() < 1e-12);
        assert!((c.bias - 0.95).abs() < 1e-12);
    }

    #[test]
    fn test_apply_update_zero_gradient_is_noop() {
        let mut p = params(vec![5.0, -1.0], 2.0);
        p.apply_update(&LogisticParams::zeros(2), Scalar::new(10.0));
        assert_eq!(p.snapshot().weights, vec![5.0, -1.0]);
        assert_eq!(p.snapshot().bias, 2.0);
    }

    #[test]
    fn test_apply_update_is_not_clipped() {
        let mut p = LogisticParams::<CpuBackend>::zeros(1);
        p.apply_update(&params(vec![1.0], 1.0), Scalar::new(1e12));
        assert_eq!(p.snapshot().weights, vec![-1e12]);
        assert_eq!(p.snapshot().bias, -1e12);
    }

    #[test]
    fn test_is_finite() {
        assert!(LogisticParams::<CpuBackend>::zeros(2).is_finite());
        assert!(!params(vec![1.0], f64::NAN).is_finite());
        assert!(!params(vec![f32::INFINITY], 0.0).is_finite());
    }

    #[test]
    fn test_coefficients_roundtrip_through_backend() {
        let c = Coefficients {
            weights: vec![0.1, -2.5e-7],
            bias: 3.25,
        };
        let p = LogisticParams::<CpuBackend>::from_coefficients(&c);
        assert_eq!(p.snapshot(), c);
    }

    #[test]
    fn test_coefficients_json() {
        let c = Coefficients {
            weights: vec![0.5, -1.0],
            bias: 0.25,
        };
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"weights":[0.5,-1.0],"bias":0.25}"#);
        let back: Coefficients = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_coefficients_validate() {
        let ok = Coefficients {
            weights: vec![1.0],
            bias: 0.0,
        };
        assert!(ok.validate().is_ok());

        let empty = Coefficients {
            weights: vec![],
            bias: 0.0,
        };
        assert!(matches!(
            empty.validate(),
            Err(TrainError::InvalidConfiguration(_))
        ));

        let nan = Coefficients {
            weights: vec![f64::NAN],
            bias: 0.0,
        };
        assert!(nan.validate().is_err());
    }
}
