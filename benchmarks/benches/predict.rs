use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use logreg_benchmarks::synthetic_blobs;
use logreg_rs::{
    backend::{Backend, Tensor1D, Tensor2D},
    loss::BCEWithLogitsLoss,
    model::{Fitted, InferenceModel, LogisticModel, LogisticRegression},
    optimizer::SGD,
    trainer::Trainer,
    CpuBackend, NdarrayBackend,
};

const N_FEATURES: usize = 8;

/// Train a model once for prediction benchmarks
fn train_model_for_prediction<B: Backend>() -> LogisticModel<B, Fitted> {
    let mut data = synthetic_blobs(1024, N_FEATURES, 1.0, 71);
    data.standardize();
    let dataset = data
        .to_in_memory_dataset()
        .expect("Failed to create dataset");

    let trainer = Trainer::builder(BCEWithLogitsLoss, SGD::<B>::new(0.5))
        .batch_size(64)
        .max_epochs(20)
        .verbose(false)
        .build()
        .expect("valid hyperparameters");

    trainer
        .fit(LogisticRegression::<B>::new(N_FEATURES), &dataset)
        .expect("Failed to fit model")
}

fn test_rows(n: usize) -> Vec<f32> {
    (0..n * N_FEATURES)
        .map(|i| ((i % 17) as f32 - 8.0) * 0.25)
        .collect()
}

fn bench_predict_single(c: &mut Criterion) {
    let model = train_model_for_prediction::<CpuBackend>();

    c.bench_function("predict_single", |b| {
        let input_tensor = Tensor1D::<CpuBackend>::new(test_rows(1));
        b.iter(|| {
            let pred = model.predict(black_box(&input_tensor));
            black_box(pred)
        });
    });
}

fn bench_predict_batch_backend<B: Backend>(c: &mut Criterion, name: &str) {
    let model = train_model_for_prediction::<B>();

    for batch_size in [10, 100, 1000, 10000].iter() {
        c.bench_with_input(
            BenchmarkId::new(format!("predict_batch_{}", name), batch_size),
            batch_size,
            |b, &bs| {
                let x = Tensor2D::<B>::new(test_rows(bs), bs, N_FEATURES);
                b.iter(|| {
                    let predictions = model.predict_batch(black_box(&x));
                    black_box(predictions)
                });
            },
        );
    }
}

fn bench_predict_batch_cpu(c: &mut Criterion) {
    bench_predict_batch_backend::<CpuBackend>(c, "cpu");
}

fn bench_predict_batch_ndarray(c: &mut Criterion) {
    bench_predict_batch_backend::<NdarrayBackend>(c, "ndarray");
}

fn bench_predict_classes(c: &mut Criterion) {
    let model = train_model_for_prediction::<CpuBackend>();
    let x = Tensor2D::<CpuBackend>::new(test_rows(1000), 1000, N_FEATURES);

    c.bench_function("predict_classes_1000", |b| {
        b.iter(|| {
            let labels = model.predict_classes(black_box(&x), 0.5);
            black_box(labels)
        });
    });
}

criterion_group!(
    benches,
    bench_predict_single,
    bench_predict_batch_cpu,
    bench_predict_batch_ndarray,
    bench_predict_classes
);
criterion_main!(benches);
