//! Fit a logistic regression on two Gaussian blobs and print the result.
//!
//! Run with `RUST_LOG=info cargo run --example separable_blobs` to see epoch losses.

use logreg_rs::{
    backend::CpuBackend,
    dataset::InMemoryDataset,
    loss::BCEWithLogitsLoss,
    model::{InferenceModel, LogisticRegression},
    optimizer::SGD,
    trainer::Trainer,
    TrainError,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn blobs(n: usize, seed: u64) -> (Vec<Vec<f32>>, Vec<f32>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    for i in 0..n {
        let label = (i % 2) as f32;
        let center = if label == 1.0 { 1.5 } else { -1.5 };
        x.push(vec![
            center + rng.random_range(-1.0..1.0),
            center + rng.random_range(-1.0..1.0),
        ]);
        y.push(label);
    }
    (x, y)
}

fn main() -> Result<(), TrainError> {
    env_logger::init();

    let (x, y) = blobs(500, 71);
    let dataset = InMemoryDataset::new(x, y)?;

    let trainer = Trainer::builder(BCEWithLogitsLoss, SGD::new(1.0))
        .batch_size(64)
        .max_epochs(300)
        .report_every(50)
        .build()?;

    let (fitted, history) =
        trainer.fit_with_history(LogisticRegression::<CpuBackend>::new(2), &dataset)?;

    let (features, labels) = dataset.to_tensors::<CpuBackend>();
    let predicted = fitted.predict_classes(&features, 0.5)?;
    let correct = predicted
        .iter()
        .zip(labels.to_vec())
        .filter(|(p, l)| **p as f64 == *l)
        .count();

    println!("final loss: {:?}", history.final_loss());
    println!(
        "training accuracy: {}",
        correct as f64 / dataset.labels().len() as f64
    );
    println!("coefficients: {:?}", fitted.coefficients());
    println!(
        "p(y=1 | [0, 0]) = {}",
        fitted
            .predict(&logreg_rs::Tensor1D::new(vec![0.0, 0.0]))?
            .to_f64()
    );
    Ok(())
}
