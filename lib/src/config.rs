//! Trainer hyperparameters as plain data.

use crate::error::TrainError;
use serde::{Deserialize, Serialize};

/// Hyperparameters accepted by [`crate::trainer::Trainer::from_config`].
///
/// Every field has a default, so a partial JSON object is enough:
///
/// ```
/// use logreg_rs::config::TrainerConfig;
///
/// let cfg = TrainerConfig::from_json_str(r#"{ "learning_rate": 1.0, "shuffle": false }"#).unwrap();
/// assert_eq!(cfg.learning_rate, 1.0);
/// assert!(!cfg.shuffle);
/// assert_eq!(cfg.batch_size, 64);
/// assert_eq!(cfg.n_epochs, 1000);
/// assert_eq!(cfg.seed, Some(71));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrainerConfig {
    pub batch_size: usize,
    pub learning_rate: f64,
    pub n_epochs: usize,
    /// Shuffle the example order once per `fit`.
    pub shuffle: bool,
    /// Seed for the shuffle. `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Log the epoch loss every `report_every` epochs (0-indexed).
    pub report_every: usize,
    pub verbose: bool,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            batch_size: 64,
            learning_rate: 0.01,
            n_epochs: 1000,
            shuffle: true,
            seed: Some(71),
            report_every: 100,
            verbose: true,
        }
    }
}

impl TrainerConfig {
    pub fn from_json_str(s: &str) -> Result<Self, TrainError> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Checks every numeric field is in range.
    pub fn validate(&self) -> Result<(), TrainError> {
        validate_hyperparameters(
            self.batch_size,
            self.n_epochs,
            self.learning_rate,
            self.report_every,
        )
    }
}

pub(crate) fn validate_hyperparameters(
    batch_size: usize,
    n_epochs: usize,
    learning_rate: f64,
    report_every: usize,
) -> Result<(), TrainError> {
    if batch_size == 0 {
        return Err(TrainError::invalid("batch_size must be positive"));
    }
    if n_epochs == 0 {
        return Err(TrainError::invalid("n_epochs must be positive"));
    }
    if !(learning_rate.is_finite() && learning_rate > 0.0) {
        return Err(TrainError::invalid(format!(
            "learning_rate must be positive and finite, got {}",
            learning_rate
        )));
    }
    if report_every == 0 {
        return Err(TrainError::invalid("report_every must be positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(TrainerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_from_json_full() {
        let cfg = TrainerConfig::from_json_str(
            r#"{
                "batch_size": 4,
                "learning_rate": 0.5,
                "n_epochs": 20,
                "shuffle": true,
                "seed": null,
                "report_every": 5,
                "verbose": false
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.batch_size, 4);
        assert_eq!(cfg.seed, None);
        assert!(!cfg.verbose);
    }

    #[test]
    fn test_from_json_rejects_invalid_values() {
        for json in [
            r#"{ "batch_size": 0 }"#,
            r#"{ "n_epochs": 0 }"#,
            r#"{ "learning_rate": 0.0 }"#,
            r#"{ "learning_rate": -0.1 }"#,
            r#"{ "report_every": 0 }"#,
        ] {
            assert!(
                matches!(
                    TrainerConfig::from_json_str(json),
                    Err(TrainError::InvalidConfiguration(_))
                ),
                "{}",
                json
            );
        }
    }

    #[test]
    fn test_from_json_rejects_unknown_and_malformed() {
        assert!(matches!(
            TrainerConfig::from_json_str(r#"{ "momentum": 0.9 }"#),
            Err(TrainError::Config(_))
        ));
        assert!(matches!(
            TrainerConfig::from_json_str("not json"),
            Err(TrainError::Config(_))
        ));
    }

    #[test]
    fn test_validate_rejects_non_finite_learning_rate() {
        let cfg = TrainerConfig {
            learning_rate: f64::NAN,
            ..TrainerConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = TrainerConfig {
            learning_rate: f64::INFINITY,
            ..TrainerConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let cfg = TrainerConfig {
            batch_size: 8,
            ..TrainerConfig::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(TrainerConfig::from_json_str(&json).unwrap(), cfg);
    }
}
