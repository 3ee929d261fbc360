//! Train a logistic regression on a CSV file and report accuracy.
//!
//! Usage: train_csv --data data.csv [--label-column diagnosis] [options]
//!
//! Features are standardized with statistics of the whole file, the last
//! `--test-ratio` of the rows is held out, and the model is trained on the rest.
//! Without `--data`, two synthetic Gaussian blobs are used.
//! Set `RUST_LOG=info` to see the epoch losses.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::info;
use serde::Serialize;

use logreg_benchmarks::{
    synthetic_blobs, time_fn, BinaryClassificationData, ClassificationMetrics,
};
use logreg_rs::{
    backend::Backend,
    loss::BCEWithLogitsLoss,
    model::{Coefficients, Fitted, InferenceModel, LogisticModel, LogisticRegression},
    optimizer::SGD,
    trainer::Trainer,
    CpuBackend, NdarrayBackend, TrainerConfig,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum BackendKind {
    Cpu,
    Ndarray,
}

#[derive(Parser, Debug)]
#[command(name = "train_csv", about = "Train logistic regression on a CSV file")]
struct Args {
    /// Headed CSV with numeric features and a 0/1 label column.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Name of the label column (default: last column).
    #[arg(long)]
    label_column: Option<String>,

    /// Trainer config JSON. When given, the hyperparameter flags below are ignored.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value = "64")]
    batch_size: usize,

    #[arg(long, default_value = "1.0")]
    lr: f64,

    #[arg(long, default_value = "1000")]
    epochs: usize,

    #[arg(long, default_value = "71")]
    seed: u64,

    /// Keep rows in file order instead of shuffling once per fit.
    #[arg(long)]
    no_shuffle: bool,

    #[arg(long, default_value = "100")]
    report_every: usize,

    /// Fraction of rows, taken from the end, held out for testing.
    #[arg(long, default_value = "0.2")]
    test_ratio: f64,

    #[arg(long, value_enum, default_value = "cpu")]
    backend: BackendKind,

    /// Samples in the synthetic dataset when `--data` is absent.
    #[arg(long, default_value = "1000")]
    synthetic_samples: usize,

    /// Write the JSON report here as well as to stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct Report {
    backend: String,
    n_train: usize,
    n_test: usize,
    n_features: usize,
    train_time_ms: f64,
    final_train_loss: Option<f64>,
    train: ClassificationMetrics,
    test: Option<ClassificationMetrics>,
    coefficients: Coefficients,
}

fn trainer_config(args: &Args) -> anyhow::Result<TrainerConfig> {
    let config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            TrainerConfig::from_json_str(&json)?
        }
        None => TrainerConfig {
            batch_size: args.batch_size,
            learning_rate: args.lr,
            n_epochs: args.epochs,
            shuffle: !args.no_shuffle,
            seed: Some(args.seed),
            report_every: args.report_every,
            verbose: true,
        },
    };
    config.validate()?;
    Ok(config)
}

fn evaluate<B: Backend>(
    model: &LogisticModel<B, Fitted>,
    data: &BinaryClassificationData,
) -> anyhow::Result<ClassificationMetrics> {
    let p = model.predict_batch(&data.to_tensor2d::<B>())?.to_vec();
    Ok(ClassificationMetrics::from_probabilities(data.labels(), &p))
}

fn run<B: Backend>(
    config: &TrainerConfig,
    train: &BinaryClassificationData,
    test: &BinaryClassificationData,
    backend: &str,
) -> anyhow::Result<Report> {
    let dataset = train.to_in_memory_dataset()?;
    let trainer: Trainer<B, BCEWithLogitsLoss, SGD<B>, LogisticRegression<B>> =
        Trainer::from_config(BCEWithLogitsLoss, config)?;

    let (result, elapsed) = time_fn(|| {
        trainer.fit_with_history(LogisticRegression::<B>::new(train.n_features()), &dataset)
    });
    let (fitted, history) = result?;
    info!("trained in {:.1} ms", elapsed.as_secs_f64() * 1000.0);

    let test_metrics = if test.is_empty() {
        None
    } else {
        Some(evaluate(&fitted, test)?)
    };

    Ok(Report {
        backend: backend.to_string(),
        n_train: train.len(),
        n_test: test.len(),
        n_features: train.n_features(),
        train_time_ms: elapsed.as_secs_f64() * 1000.0,
        final_train_loss: history.final_loss(),
        train: evaluate(&fitted, train)?,
        test: test_metrics,
        coefficients: fitted.coefficients(),
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if !(0.0..1.0).contains(&args.test_ratio) {
        anyhow::bail!("--test-ratio must be in [0, 1), got {}", args.test_ratio);
    }

    let config = trainer_config(&args)?;

    let mut data = match &args.data {
        Some(path) => BinaryClassificationData::load(path, args.label_column.as_deref())
            .with_context(|| format!("loading {}", path.display()))?,
        None => {
            info!(
                "no --data given; using {} synthetic samples",
                args.synthetic_samples
            );
            synthetic_blobs(args.synthetic_samples, 4, 1.0, args.seed)
        }
    };
    data.standardize();
    let (train, test) = data.split(args.test_ratio);

    let report = match args.backend {
        BackendKind::Cpu => run::<CpuBackend>(&config, &train, &test, "cpu")?,
        BackendKind::Ndarray => run::<NdarrayBackend>(&config, &train, &test, "ndarray")?,
    };

    println!("Training accuracy: {}", report.train.accuracy);
    if let Some(test) = &report.test {
        println!("Test accuracy: {}", test.accuracy);
    }

    let json = serde_json::to_string_pretty(&report)?;
    println!("{}", json);
    if let Some(path) = &args.output {
        std::fs::write(path, &json).with_context(|| format!("writing {}", path.display()))?;
    }

    Ok(())
}
