use crate::backend::{Backend, Scalar};
use crate::model::LogisticParams;

/// Trait for gradient-based optimizers.
///
/// Training logic ([`crate::trainer::Trainer`]) is decoupled from the update rule: the
/// trainer hands gradients to the model, the model hands its parameters to the optimizer.
///
/// # Type Parameters
/// * `B`: computation backend
/// * `P`: parameter type (e.g. [`LogisticParams`]); gradients share its layout
///
/// # Example
/// ```rust
/// use logreg_rs::backend::{CpuBackend, Scalar, Tensor1D};
/// use logreg_rs::model::LogisticParams;
/// use logreg_rs::optimizer::{Optimizer, SGD};
///
/// let mut params = LogisticParams::<CpuBackend>::zeros(3);
/// let grads = LogisticParams {
///     weights: Tensor1D::new(vec![0.1, -0.2, 0.05]),
///     bias: Scalar::new(-0.01),
/// };
/// SGD::<CpuBackend>::new(0.01).step(&mut params, &grads);
/// ```
pub trait Optimizer<B: Backend, P> {
    /// Updates `params` in place from `gradients`.
    fn step(&self, params: &mut P, gradients: &P);

    fn learning_rate(&self) -> f64;
}

/// Plain stochastic gradient descent: `θ ← θ - η · ∇L(θ)`.
///
/// Stateless: no momentum, no schedule, no gradient clipping. A learning rate large
/// enough to diverge will diverge.
///
/// # Example
/// ```rust
/// use logreg_rs::backend::CpuBackend;
/// use logreg_rs::optimizer::{Optimizer, SGD};
///
/// let optimizer = SGD::<CpuBackend>::new(0.01);
/// assert_eq!(optimizer.learning_rate(), 0.01);
/// ```
#[derive(Clone, Debug)]
pub struct SGD<B: Backend> {
    /// Learning rate (η), kept as a backend scalar.
    lr: Scalar<B>,
}

impl<B: Backend> SGD<B> {
    /// Creates a new SGD optimizer.
    ///
    /// The value is not validated here; [`crate::trainer::TrainerBuilder::build`] rejects
    /// non-positive and non-finite rates.
    pub fn new(lr: f64) -> Self {
        Self {
            lr: Scalar::new(lr),
        }
    }
}

impl<B: Backend> Optimizer<B, LogisticParams<B>> for SGD<B> {
    fn step(&self, params: &mut LogisticParams<B>, grads: &LogisticParams<B>) {
        params.apply_update(grads, self.lr);
    }

    fn learning_rate(&self) -> f64 {
        self.lr.to_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{CpuBackend, Tensor1D};

    fn params(w: Vec<f32>, b: f64) -> LogisticParams<CpuBackend> {
        LogisticParams {
            weights: Tensor1D::new(w),
            bias: Scalar::new(b),
        }
    }

    #[test]
    fn test_sgd_learning_rate_accessor() {
        let sgd = SGD::<CpuBackend>::new(0.001);
        assert_eq!(
            Optimizer::<CpuBackend, LogisticParams<CpuBackend>>::learning_rate(&sgd),
            0.001
        );
    }

    #[test]
    fn test_sgd_step_correctness() {
        let mut p = params(vec![2.0, 3.0], 2.0);
        let g = params(vec![1.0, -1.0], -1.0);
        SGD::<CpuBackend>::new(0.05).step(&mut p, &g);

        let c = p.snapshot();
        assert!((c.weights[0] - 1.95).abs() < 1e-12);
        assert!((c.weights[1] - 3.05).abs() < 1e-12);
        // 2.0 - 0.05*(-1.0) = 2.05
        assert!((c.bias - 2.05).abs() < 1e-12);
    }

    #[test]
    fn test_sgd_zero_learning_rate_is_noop() {
        let mut p = params(vec![1.0, -1.0], 0.5);
        SGD::<CpuBackend>::new(0.0).step(&mut p, &params(vec![10.0, 10.0], 10.0));
        assert_eq!(p.snapshot().weights, vec![1.0, -1.0]);
        assert_eq!(p.snapshot().bias, 0.5);
    }

    #[test]
    fn test_sgd_repeated_steps_accumulate() {
        let mut p = params(vec![0.0], 0.0);
        let g = params(vec![1.0], 1.0);
        let sgd = SGD::<CpuBackend>::new(0.25);
        for _ in 0..4 {
            sgd.step(&mut p, &g);
        }
        assert_eq!(p.snapshot().weights, vec![-1.0]);
        assert_eq!(p.snapshot().bias, -1.0);
    }
}
