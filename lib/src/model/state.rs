/// Marker for a model that has **not been trained yet**.
///
/// `LogisticModel<B, Unfitted>` implements [`super::TrainableModel`] and is consumed by
/// [`crate::trainer::Trainer::fit`]. It has no prediction methods.
#[derive(Debug, Clone, Copy)]
pub struct Unfitted;

/// Marker for a **trained** model.
///
/// `LogisticModel<B, Fitted>` implements [`super::InferenceModel`] only: it holds the
/// final parameters and nothing from training (no optimizer, no batch order). It cannot
/// be passed back to `fit`; retraining starts from a new zero-initialized model.
#[derive(Debug, Clone, Copy)]
pub struct Fitted;
