//! Benchmarks for trial execution and aggregation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use trialbench::bench::{benchmark, median, run_trial};
use trialbench::data::{DatasetProvider, SplitPoint, SyntheticDigits};
use trialbench::eval::{ClassificationReport, ClassificationScorer};
use trialbench::model::{KernelClassifier, MajorityClassifier};

fn bench_kernel_trial(c: &mut Criterion) {
    let set = SyntheticDigits::new(400)
        .sample_set(SplitPoint::Midpoint)
        .expect("synthetic data must load");
    let factory = || KernelClassifier::new(0.001);
    let scorer = ClassificationScorer::default();

    c.bench_function("kernel_trial_400_samples", |b| {
        b.iter(|| black_box(run_trial(&set, &factory, &scorer).expect("trial must succeed")));
    });
}

fn bench_majority_benchmark(c: &mut Criterion) {
    let set = SyntheticDigits::new(1797)
        .sample_set(SplitPoint::Midpoint)
        .expect("synthetic data must load");
    let scorer = ClassificationScorer::default();

    c.bench_function("majority_benchmark_10_repeats", |b| {
        b.iter(|| {
            black_box(
                benchmark(&set, &MajorityClassifier::new, &scorer, 10)
                    .expect("benchmark must succeed"),
            )
        });
    });
}

fn bench_report(c: &mut Criterion) {
    let y_true: Vec<usize> = (0..1000).map(|i| i % 10).collect();
    let y_pred: Vec<usize> = (0..1000).map(|i| (i * 7) % 10).collect();

    c.bench_function("classification_report_1000", |b| {
        b.iter(|| black_box(ClassificationReport::from_predictions(&y_pred, &y_true)));
    });
}

fn bench_median(c: &mut Criterion) {
    let values: Vec<f64> = (0..1001).map(|i| f64::from((i * 37) % 1001)).collect();

    c.bench_function("median_1001", |b| {
        b.iter(|| black_box(median(&values)));
    });
}

criterion_group!(
    benches,
    bench_kernel_trial,
    bench_majority_benchmark,
    bench_report,
    bench_median
);
criterion_main!(benches);
