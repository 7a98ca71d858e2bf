// =========================================================================
// FALSIFY-MF: matrix factorization engine contract (recetar recommend)
//
// Invariants under test:
//   - factor matrix shapes track the efficacy matrix and k
//   - epoch MSE trends downward over the positive entries
//   - top-N retrieval returns exactly top_n distinct in-range indices
//   - unknown conditions and invalid parameters fail with typed errors
//   - fixed seed implies bit-identical train + recommend runs
//
// References:
//   - Koren, Bell, Volinsky (2009) "Matrix Factorization Techniques for
//     Recommender Systems"
// =========================================================================

use super::*;
use crate::catalog::CatalogBuilder;

fn sample_catalog() -> Catalog {
    CatalogBuilder::new()
        .medication("A", ["X"])
        .medication("B", ["X", "Y"])
        .medication("C", ["Y"])
        .build()
        .expect("valid catalog")
}

/// FALSIFY-MF-001: Shape invariant — P.rows = medications, Q.rows =
/// conditions, P.cols = Q.cols = k
#[test]
fn falsify_mf_001_factor_shapes() {
    let model = MedicationRecommender::new(sample_catalog()).with_n_factors(4);

    assert_eq!(
        model.medication_factors().shape(),
        (3, 4),
        "FALSIFIED MF-001: P shape {:?}, expected (3, 4)",
        model.medication_factors().shape()
    );
    assert_eq!(
        model.condition_factors().shape(),
        (2, 4),
        "FALSIFIED MF-001: Q shape {:?}, expected (2, 4)",
        model.condition_factors().shape()
    );
}

/// FALSIFY-MF-002: Error trend — MSE decreases across epoch checkpoints
#[test]
fn falsify_mf_002_mse_trend_decreasing() {
    let mut model = MedicationRecommender::new(sample_catalog())
        .with_n_factors(2)
        .with_random_state(7);
    let report = model.train().expect("valid hyperparameters");

    let errors = report.epoch_errors();
    assert_eq!(errors.len(), 100);
    // Checkpoint trend, not per-step monotonicity: SGD noise is tolerated.
    assert!(
        errors[99] < errors[9],
        "FALSIFIED MF-002: error[99] = {} >= error[9] = {}",
        errors[99],
        errors[9]
    );
    assert!(
        errors[49] < errors[4],
        "FALSIFIED MF-002: error[49] = {} >= error[4] = {}",
        errors[49],
        errors[4]
    );
    assert!(
        report.final_error().expect("100 epochs ran") < errors[0],
        "FALSIFIED MF-002: final error not below first-epoch error"
    );
}

/// FALSIFY-MF-003: Retrieval shape — exactly top_n distinct in-range indices
/// per queried condition
#[test]
fn falsify_mf_003_retrieval_shape() {
    let mut model = MedicationRecommender::new(sample_catalog())
        .with_n_factors(2)
        .with_random_state(42);
    model.train().expect("valid hyperparameters");

    let rankings = model.recommend(&["X", "Y"], 2).expect("known conditions");
    assert_eq!(rankings.len(), 2);
    for ranking in &rankings {
        assert_eq!(
            ranking.len(),
            2,
            "FALSIFIED MF-003: expected 2 indices, got {}",
            ranking.len()
        );
        for &medication in ranking {
            assert!(
                medication < 3,
                "FALSIFIED MF-003: index {medication} out of range"
            );
        }
        assert_ne!(
            ranking[0], ranking[1],
            "FALSIFIED MF-003: duplicate index within one condition's result"
        );
    }
}

/// FALSIFY-MF-004: Unknown condition — typed error, no output
#[test]
fn falsify_mf_004_unknown_condition() {
    let mut model = MedicationRecommender::new(sample_catalog()).with_random_state(1);
    model.train().expect("valid hyperparameters");

    let err = model.recommend(&["X", "Z"], 1).unwrap_err();
    assert!(
        matches!(err, RecetarError::UnknownCondition { ref name } if name == "Z"),
        "FALSIFIED MF-004: expected UnknownCondition for Z, got {err}"
    );
}

/// FALSIFY-MF-005: top_n bounds — zero and above-count rejected eagerly
#[test]
fn falsify_mf_005_top_n_bounds() {
    let model = MedicationRecommender::new(sample_catalog()).with_random_state(1);

    let err = model.recommend(&["X"], 0).unwrap_err();
    assert!(
        matches!(err, RecetarError::InvalidHyperparameter { ref param, .. } if param == "top_n"),
        "FALSIFIED MF-005: top_n = 0 not rejected"
    );

    let err = model.recommend(&["X"], 4).unwrap_err();
    assert!(
        matches!(err, RecetarError::InvalidHyperparameter { ref param, .. } if param == "top_n"),
        "FALSIFIED MF-005: top_n above medication count not rejected"
    );
}

/// FALSIFY-MF-006: Determinism — fixed seed gives identical runs
#[test]
fn falsify_mf_006_seeded_determinism() {
    let run = || {
        let mut model = MedicationRecommender::new(sample_catalog())
            .with_n_factors(2)
            .with_random_state(42);
        let report = model.train().expect("valid hyperparameters");
        let rankings = model.recommend(&["X", "Y"], 3).expect("known conditions");
        (report.epoch_errors().to_vec(), rankings)
    };

    let (errors_a, rankings_a) = run();
    let (errors_b, rankings_b) = run();
    assert_eq!(
        errors_a, errors_b,
        "FALSIFIED MF-006: error trajectories differ for the same seed"
    );
    assert_eq!(
        rankings_a, rankings_b,
        "FALSIFIED MF-006: rankings differ for the same seed"
    );
}

/// FALSIFY-MF-007: Reference scenario — {"A": [X], "B": [X, Y], "C": [Y]},
/// k=2, lr=0.01, reg=0.01, 100 epochs
#[test]
fn falsify_mf_007_reference_scenario() {
    let mut model = MedicationRecommender::new(sample_catalog())
        .with_n_factors(2)
        .with_learning_rate(0.01)
        .with_regularization(0.01)
        .with_epochs(100)
        .with_random_state(42);
    model.train().expect("valid hyperparameters");

    let rankings = model.recommend(&["X"], 2).expect("X is in the vocabulary");
    let ranking = &rankings[0];
    assert_eq!(ranking.len(), 2);
    assert_ne!(ranking[0], ranking[1]);
    assert!(ranking.iter().all(|&i| i < 3));
}

/// FALSIFY-MF-008: Treating medications outrank non-treating — with enough
/// epochs, A and B (which treat X) score above C (which does not)
#[test]
fn falsify_mf_008_treating_medications_ranked_first() {
    let mut model = MedicationRecommender::new(sample_catalog())
        .with_n_factors(2)
        .with_epochs(300)
        .with_random_state(42);
    let report = model.train().expect("valid hyperparameters");
    assert!(
        report.final_error().expect("300 epochs ran") < 0.05,
        "FALSIFIED MF-008: model did not converge, MSE = {:?}",
        report.final_error()
    );

    let rankings = model.recommend(&["X"], 2).expect("X is in the vocabulary");
    let mut top: Vec<usize> = rankings[0].clone();
    top.sort_unstable();
    assert_eq!(
        top,
        vec![0, 1],
        "FALSIFIED MF-008: top-2 for X is {top:?}, expected medications A and B"
    );
}

/// FALSIFY-MF-009: top_n equal to medication count returns the full ranking
#[test]
fn falsify_mf_009_full_ranking() {
    let mut model = MedicationRecommender::new(sample_catalog())
        .with_n_factors(2)
        .with_random_state(3);
    model.train().expect("valid hyperparameters");

    let rankings = model.recommend(&["Y"], 3).expect("known condition");
    let mut all: Vec<usize> = rankings[0].clone();
    all.sort_unstable();
    assert_eq!(
        all,
        vec![0, 1, 2],
        "FALSIFIED MF-009: full ranking is not a permutation of all medications"
    );
}

/// FALSIFY-MF-010: Zero hyperparameters rejected before any epoch runs
#[test]
fn falsify_mf_010_zero_hyperparameters_rejected() {
    let mut model = MedicationRecommender::new(sample_catalog()).with_n_factors(0);
    let err = model.train().unwrap_err();
    assert!(
        matches!(err, RecetarError::InvalidHyperparameter { ref param, .. } if param == "n_factors"),
        "FALSIFIED MF-010: n_factors = 0 not rejected"
    );

    let mut model = MedicationRecommender::new(sample_catalog()).with_epochs(0);
    let err = model.train().unwrap_err();
    assert!(
        matches!(err, RecetarError::InvalidHyperparameter { ref param, .. } if param == "n_epochs"),
        "FALSIFIED MF-010: n_epochs = 0 not rejected"
    );
}

/// FALSIFY-MF-011: Untrained recommend — permitted degenerate mode, still
/// shape-correct
#[test]
fn falsify_mf_011_untrained_recommend_is_valid() {
    let model = MedicationRecommender::new(sample_catalog())
        .with_n_factors(2)
        .with_random_state(11);

    let rankings = model.recommend(&["X"], 3).expect("known condition");
    let mut all: Vec<usize> = rankings[0].clone();
    all.sort_unstable();
    assert_eq!(all, vec![0, 1, 2]);
}

#[test]
fn test_recommend_names_maps_indices() {
    let mut model = MedicationRecommender::new(sample_catalog())
        .with_n_factors(2)
        .with_epochs(300)
        .with_random_state(42);
    model.train().expect("valid hyperparameters");

    let names = model
        .recommend_names(&["X"], 2)
        .expect("X is in the vocabulary");
    assert_eq!(names[0].len(), 2);
    for name in &names[0] {
        assert!(["A", "B", "C"].contains(&name.as_str()));
    }
}

#[test]
fn test_training_report_accessors() {
    let mut model = MedicationRecommender::new(sample_catalog())
        .with_n_factors(2)
        .with_epochs(5)
        .with_random_state(1);
    let report = model.train().expect("valid hyperparameters");

    assert_eq!(report.n_epochs(), 5);
    assert_eq!(report.epoch_errors().len(), 5);
    assert_eq!(report.final_error(), report.epoch_errors().last().copied());
}

#[test]
fn test_mean_squared_error_nonnegative() {
    let model = MedicationRecommender::new(sample_catalog()).with_random_state(9);
    assert!(model.mean_squared_error() >= 0.0);
}
