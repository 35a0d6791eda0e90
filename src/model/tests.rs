//! Tests for the bundled classifiers

use super::*;

fn two_clusters() -> (Vec<Vec<f64>>, Vec<usize>) {
    let features = vec![
        vec![0.0, 0.0],
        vec![0.5, 0.0],
        vec![0.0, 0.5],
        vec![10.0, 10.0],
        vec![10.5, 10.0],
        vec![10.0, 10.5],
    ];
    (features, vec![0, 0, 0, 1, 1, 1])
}

#[test]
fn test_majority_predicts_most_frequent_label() {
    let mut model = MajorityClassifier::new();
    model.fit(&[vec![1.0], vec![2.0], vec![3.0]], &[2, 1, 2]).unwrap();
    assert_eq!(model.majority_label(), Some(2));
    assert_eq!(model.predict(&[vec![0.0], vec![9.0]]).unwrap(), vec![2, 2]);
}

#[test]
fn test_majority_tie_goes_to_smallest_label() {
    let mut model = MajorityClassifier::new();
    model.fit(&vec![vec![0.0]; 4], &[3, 1, 3, 1]).unwrap();
    assert_eq!(model.majority_label(), Some(1));
}

#[test]
fn test_majority_errors() {
    let model = MajorityClassifier::new();
    assert_eq!(model.predict(&[vec![0.0]]), Err(ModelError::NotFitted));

    let mut model = MajorityClassifier::new();
    assert_eq!(model.fit(&[], &[]), Err(ModelError::EmptyTrainingSet));
    assert_eq!(
        model.fit(&[vec![0.0]], &[1, 2]),
        Err(ModelError::LengthMismatch { features: 1, labels: 2 })
    );

    model.fit(&[vec![0.0, 1.0]], &[1]).unwrap();
    assert_eq!(
        model.predict(&[vec![0.0]]),
        Err(ModelError::DimensionMismatch { expected: 2, actual: 1 })
    );
}

#[test]
fn test_kernel_separates_clusters() {
    let (features, labels) = two_clusters();
    let mut model = KernelClassifier::new(0.1);
    model.fit(&features, &labels).unwrap();

    let predicted = model.predict(&[vec![0.2, 0.2], vec![9.8, 10.1]]).unwrap();
    assert_eq!(predicted, vec![0, 1]);
}

#[test]
fn test_kernel_is_deterministic() {
    let (features, labels) = two_clusters();
    let mut a = KernelClassifier::new(0.5);
    let mut b = KernelClassifier::new(0.5);
    a.fit(&features, &labels).unwrap();
    b.fit(&features, &labels).unwrap();
    assert_eq!(a.predict(&features).unwrap(), b.predict(&features).unwrap());
}

#[test]
fn test_kernel_sparse_and_extreme_labels() {
    let (features, _) = two_clusters();
    let sparse = 1_000_000_000;
    let labels = vec![sparse, sparse, sparse, usize::MAX, usize::MAX, usize::MAX];
    let mut model = KernelClassifier::new(0.1);
    model.fit(&features, &labels).unwrap();
    assert_eq!(model.classes(), &[sparse, usize::MAX]);

    let predicted = model.predict(&[vec![0.2, 0.2], vec![9.8, 10.1]]).unwrap();
    assert_eq!(predicted, vec![sparse, usize::MAX]);
}

#[test]
fn test_kernel_predicts_only_training_labels() {
    let mut model = KernelClassifier::new(1.0);
    model.fit(&[vec![0.0], vec![1.0]], &[3, 5]).unwrap();

    // Every kernel term underflows to zero far from the training rows.
    let predicted = model.predict(&[vec![1000.0], vec![-1000.0], vec![0.9]]).unwrap();
    assert_eq!(predicted, vec![3, 3, 5]);
    assert!(predicted.iter().all(|label| [3, 5].contains(label)));
}

#[test]
fn test_kernel_rejects_invalid_gamma() {
    let (features, labels) = two_clusters();
    for gamma in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let mut model = KernelClassifier::new(gamma);
        assert!(matches!(model.fit(&features, &labels), Err(ModelError::Other(_))));
    }
}

#[test]
fn test_kernel_predict_before_fit() {
    let model = KernelClassifier::new(0.01);
    assert_eq!(model.predict(&[vec![1.0]]), Err(ModelError::NotFitted));
}

#[test]
fn test_closure_is_factory() {
    let factory = || MajorityClassifier::new();
    let model = factory.create();
    assert_eq!(model.name(), "majority");
}

#[test]
fn test_model_spec_builds_fresh_instances() {
    let spec = ModelSpec::kernel(0.01);
    let (features, labels) = two_clusters();

    let mut first = spec.build();
    first.fit(&features, &labels).unwrap();
    let second = spec.build();

    assert_eq!(first.name(), "kernel");
    assert!(first.predict(&features).is_ok());
    assert_eq!(second.predict(&features), Err(ModelError::NotFitted));
}

#[test]
fn test_model_spec_gamma_range() {
    assert!(ModelSpec::gamma_in_range(0.001));
    assert!(ModelSpec::gamma_in_range(GAMMA_MAX));
    assert!(!ModelSpec::gamma_in_range(0.0));
    assert!(!ModelSpec::gamma_in_range(1.5));
    assert!(!ModelSpec::gamma_in_range(f64::NAN));
}

#[test]
fn test_model_spec_yaml() {
    let spec: ModelSpec = serde_yaml::from_str("kind: kernel\ngamma: 0.01\n").unwrap();
    assert_eq!(spec, ModelSpec::kernel(0.01));

    let spec: ModelSpec = serde_yaml::from_str("kind: kernel\n").unwrap();
    assert_eq!(spec, ModelSpec::kernel(DEFAULT_GAMMA));

    let spec: ModelSpec = serde_yaml::from_str("kind: majority\n").unwrap();
    assert_eq!(spec, ModelSpec::Majority);
    assert_eq!(spec.to_string(), "majority");
}
