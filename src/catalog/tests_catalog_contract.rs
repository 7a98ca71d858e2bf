// =========================================================================
// FALSIFY-CB: catalog builder contract (recetar catalog)
//
// Invariants under test:
//   - vocabulary is sorted and duplicate-free
//   - efficacy matrix has a 1.0 exactly where the source list says so
//   - construction is deterministic for a fixed entry order
// =========================================================================

use super::*;

/// FALSIFY-CB-001: Vocabulary sorted — conditions ascend lexicographically
#[test]
fn falsify_cb_001_vocabulary_sorted() {
    let catalog = CatalogBuilder::new()
        .medication("Warfarin", ["Blood Clots", "Stroke Prevention"])
        .medication("Cetirizine", ["Allergies", "Hay Fever"])
        .medication("Albuterol", ["Asthma"])
        .build()
        .expect("valid catalog");

    let conditions = catalog.conditions();
    for pair in conditions.windows(2) {
        assert!(
            pair[0] < pair[1],
            "FALSIFIED CB-001: {:?} not strictly before {:?}",
            pair[0],
            pair[1]
        );
    }
}

/// FALSIFY-CB-002: No duplicates — shared conditions appear once
#[test]
fn falsify_cb_002_vocabulary_deduplicated() {
    let catalog = CatalogBuilder::new()
        .medication("Sertraline", ["Depression", "Anxiety Disorders"])
        .medication("Fluoxetine", ["Depression", "Anxiety Disorders"])
        .medication("Escitalopram", ["Depression", "Anxiety Disorders"])
        .build()
        .expect("valid catalog");

    assert_eq!(
        catalog.n_conditions(),
        2,
        "FALSIFIED CB-002: expected 2 unique conditions, got {}",
        catalog.n_conditions()
    );
}

/// FALSIFY-CB-003: Matrix membership — M[i][j] = 1 iff medication i treats
/// condition j
#[test]
fn falsify_cb_003_matrix_matches_membership() {
    let entries: Vec<(&str, Vec<&str>)> = vec![
        ("Aspirin", vec!["Pain", "Fever", "Inflammation"]),
        ("Paracetamol", vec!["Pain", "Fever"]),
        ("Metformin", vec!["Type 2 Diabetes"]),
    ];

    let mut builder = CatalogBuilder::new();
    for (name, conditions) in &entries {
        builder = builder.medication(*name, conditions.clone());
    }
    let catalog = builder.build().expect("valid catalog");

    let m = catalog.efficacy();
    for (i, (_, conditions)) in entries.iter().enumerate() {
        for (j, condition) in catalog.conditions().iter().enumerate() {
            let expected = if conditions.contains(&condition.as_str()) {
                1.0
            } else {
                0.0
            };
            assert!(
                (m.get(i, j) - expected).abs() < 1e-6,
                "FALSIFIED CB-003: M[{i}][{j}] = {}, expected {expected}",
                m.get(i, j)
            );
        }
    }
}

/// FALSIFY-CB-004: Determinism — identical entries give identical catalogs
#[test]
fn falsify_cb_004_deterministic_build() {
    let build = || {
        CatalogBuilder::new()
            .medication("Omeprazole", ["GERD", "Ulcers"])
            .medication("Pantoprazole", ["GERD", "Ulcers"])
            .build()
            .expect("valid catalog")
    };

    let a = build();
    let b = build();
    assert_eq!(a.medications(), b.medications());
    assert_eq!(a.conditions(), b.conditions());
    assert_eq!(
        a.efficacy(),
        b.efficacy(),
        "FALSIFIED CB-004: efficacy matrices differ between identical builds"
    );
}

/// FALSIFY-CB-005: Row sums — each row has exactly as many 1s as unique
/// conditions in its source list
#[test]
fn falsify_cb_005_row_sums() {
    let catalog = CatalogBuilder::new()
        .medication("Metoprolol", ["Hypertension", "Angina", "Heart Failure"])
        .medication("Furosemide", ["Edema", "Heart Failure"])
        .build()
        .expect("valid catalog");

    let m = catalog.efficacy();
    let expected = [3.0, 2.0];
    for (i, want) in expected.iter().enumerate() {
        let row_sum = m.row(i).sum();
        assert!(
            (row_sum - want).abs() < 1e-6,
            "FALSIFIED CB-005: row {i} sum = {row_sum}, expected {want}"
        );
    }
}
