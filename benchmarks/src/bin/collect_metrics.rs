//! Collect accuracy, loss and training time on synthetic blobs.
//!
//! Runs each configuration once per backend and records:
//! - Training time
//! - Final training loss
//! - Train/test accuracy and log-loss

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde_json::json;

use logreg_benchmarks::{synthetic_blobs, ClassificationMetrics, Timer};
use logreg_rs::{
    backend::Backend,
    loss::BCEWithLogitsLoss,
    model::{InferenceModel, LogisticRegression},
    optimizer::SGD,
    trainer::Trainer,
    CpuBackend, NdarrayBackend,
};

#[derive(Parser, Debug)]
#[command(name = "collect_metrics", about = "Logistic regression metrics on synthetic data")]
struct Args {
    #[arg(long, default_value = "2000")]
    samples: usize,

    #[arg(long, default_value = "100")]
    epochs: usize,

    #[arg(long, default_value = "0.5")]
    lr: f64,

    #[arg(long, default_value = "71")]
    seed: u64,

    /// Write the JSON results here as well as to stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn collect<B: Backend>(
    args: &Args,
    n_features: usize,
    batch_size: usize,
    backend: &str,
) -> anyhow::Result<serde_json::Value> {
    let mut data = synthetic_blobs(args.samples, n_features, 0.5, args.seed);
    data.standardize();
    let (train, test) = data.split(0.2);
    let dataset = train.to_in_memory_dataset()?;

    let trainer = Trainer::builder(BCEWithLogitsLoss, SGD::<B>::new(args.lr))
        .batch_size(batch_size)
        .max_epochs(args.epochs)
        .seed(Some(args.seed))
        .verbose(false)
        .build()?;

    let mut timer = Timer::new();
    timer.start();
    let (fitted, history) =
        trainer.fit_with_history(LogisticRegression::<B>::new(n_features), &dataset)?;
    timer.stop();

    let p_train = fitted.predict_batch(&train.to_tensor2d::<B>())?.to_vec();
    let p_test = fitted.predict_batch(&test.to_tensor2d::<B>())?.to_vec();

    Ok(json!({
        "backend": backend,
        "n_features": n_features,
        "batch_size": batch_size,
        "train_time_ms": timer.total_ms(),
        "final_train_loss": history.final_loss(),
        "train": ClassificationMetrics::from_probabilities(train.labels(), &p_train),
        "test": ClassificationMetrics::from_probabilities(test.labels(), &p_test),
    }))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut results = Vec::new();
    for n_features in [2, 8, 32] {
        for batch_size in [16, 64, 256] {
            eprintln!(
                "Collecting metrics for {} features, batch size {}...",
                n_features, batch_size
            );
            results.push(collect::<CpuBackend>(&args, n_features, batch_size, "cpu")?);
            results.push(collect::<NdarrayBackend>(
                &args, n_features, batch_size, "ndarray",
            )?);
        }
    }

    let output = serde_json::to_string_pretty(&json!({ "results": results }))?;
    println!("{}", output);
    if let Some(path) = &args.output {
        std::fs::write(path, &output).with_context(|| format!("writing {}", path.display()))?;
    }

    Ok(())
}
