use logreg_rs::stable;
use serde::{Deserialize, Serialize};

/// Metrics for evaluating binary classifiers.
pub struct Metrics;

impl Metrics {
    /// Fraction of positions where the label equals the prediction.
    ///
    /// Predictions are hard 0/1 labels. Empty input gives 0.
    ///
    /// # Panics
    /// If the slices differ in length.
    ///
    /// # Example
    /// ```
    /// use logreg_benchmarks::metrics::Metrics;
    ///
    /// assert_eq!(Metrics::accuracy(&[0.0, 1.0, 1.0, 0.0], &[0.0, 1.0, 0.0, 0.0]), 0.75);
    /// ```
    pub fn accuracy(y_true: &[f32], y_pred: &[f32]) -> f64 {
        assert_eq!(
            y_true.len(),
            y_pred.len(),
            "Arrays must have the same length"
        );

        if y_true.is_empty() {
            return 0.0;
        }

        let correct = y_true
            .iter()
            .zip(y_pred.iter())
            .filter(|(t, p)| t == p)
            .count();

        correct as f64 / y_true.len() as f64
    }

    /// Mean cross-entropy of probabilities `p` against 0/1 labels.
    ///
    /// Probabilities are clipped to `[1e-15, 1 - 1e-15]`.
    pub fn log_loss(y_true: &[f32], p: &[f64]) -> f64 {
        assert_eq!(y_true.len(), p.len(), "Arrays must have the same length");

        if y_true.is_empty() {
            return 0.0;
        }

        let eps = 1e-15;
        let total: f64 = y_true
            .iter()
            .zip(p.iter())
            .map(|(&y, &p)| {
                let p = p.clamp(eps, 1.0 - eps);
                -(y as f64 * p.ln() + (1.0 - y as f64) * (1.0 - p).ln())
            })
            .sum();

        total / y_true.len() as f64
    }

    /// Mean cross-entropy computed from logits with the overflow-free formula.
    pub fn log_loss_from_logits(y_true: &[f32], logits: &[f64]) -> f64 {
        assert_eq!(
            y_true.len(),
            logits.len(),
            "Arrays must have the same length"
        );

        if y_true.is_empty() {
            return 0.0;
        }

        let total: f64 = y_true
            .iter()
            .zip(logits.iter())
            .map(|(&y, &z)| stable::log_loss_scalar(y as f64, z))
            .sum();

        total / y_true.len() as f64
    }

    /// Hard labels from probabilities: 1 where `p > threshold`.
    pub fn threshold(p: &[f64], threshold: f64) -> Vec<f32> {
        p.iter()
            .map(|&v| if v > threshold { 1.0 } else { 0.0 })
            .collect()
    }
}

/// Summary of a classifier on one split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationMetrics {
    pub accuracy: f64,
    pub log_loss: f64,
}

impl ClassificationMetrics {
    pub fn from_probabilities(y_true: &[f32], p: &[f64]) -> Self {
        Self {
            accuracy: Metrics::accuracy(y_true, &Metrics::threshold(p, 0.5)),
            log_loss: Metrics::log_loss(y_true, p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_perfect() {
        let y = [0.0, 1.0, 1.0];
        assert_eq!(Metrics::accuracy(&y, &y), 1.0);
    }

    #[test]
    fn test_accuracy_empty() {
        assert_eq!(Metrics::accuracy(&[], &[]), 0.0);
    }

    #[test]
    #[should_panic(expected = "Arrays must have the same length")]
    fn test_accuracy_length_mismatch() {
        Metrics::accuracy(&[0.0, 1.0], &[0.0]);
    }

    #[test]
    fn test_log_loss_half_is_ln2() {
        let loss = Metrics::log_loss(&[0.0, 1.0], &[0.5, 0.5]);
        assert!((loss - std::f64::consts::LN_2).abs() < 1e-12);
    }

    #[test]
    fn test_log_loss_clips_certain_mistakes() {
        let loss = Metrics::log_loss(&[1.0], &[0.0]);
        assert!(loss.is_finite());
        assert!(loss > 30.0);
    }

    #[test]
    fn test_log_loss_from_logits_matches_probabilities() {
        let y = [0.0, 1.0, 1.0];
        let z = [-1.5, 0.3, 2.0];
        let p: Vec<f64> = z.iter().map(|&v| stable::sigmoid_scalar(v)).collect();
        let a = Metrics::log_loss_from_logits(&y, &z);
        let b = Metrics::log_loss(&y, &p);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn test_threshold_is_strict() {
        assert_eq!(Metrics::threshold(&[0.2, 0.5, 0.51], 0.5), vec![0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_classification_metrics() {
        let m = ClassificationMetrics::from_probabilities(&[0.0, 1.0], &[0.1, 0.4]);
        assert_eq!(m.accuracy, 0.5);
        assert!(m.log_loss > 0.0);
    }
}
