//! Latent-factor medication recommendation.
//!
//! This module implements collaborative-filtering style recommendation over a
//! binary medication × condition efficacy matrix. Matrix factorization learns
//! a low-dimensional factor vector per medication and per condition by
//! stochastic gradient descent over the observed (positive) entries; dot
//! products between factor vectors score unseen pairs, and top-N retrieval
//! ranks medications per queried condition.
//!
//! Zero entries are never used as training signal: absence of a recorded
//! efficacy relation is not negative evidence (implicit feedback).
//!
//! # Quick Start
//!
//! ```
//! use recetar::catalog::CatalogBuilder;
//! use recetar::recommend::MedicationRecommender;
//!
//! let catalog = CatalogBuilder::new()
//!     .medication("Aspirin", ["Pain", "Fever", "Inflammation"])
//!     .medication("Paracetamol", ["Pain", "Fever"])
//!     .medication("Metformin", ["Type 2 Diabetes"])
//!     .build()
//!     .expect("valid catalog");
//!
//! let mut model = MedicationRecommender::new(catalog)
//!     .with_n_factors(2)
//!     .with_epochs(50)
//!     .with_random_state(42);
//!
//! let report = model.train().expect("valid hyperparameters");
//! assert_eq!(report.n_epochs(), 50);
//!
//! let ranked = model.recommend(&["Pain"], 2).expect("condition is in the vocabulary");
//! assert_eq!(ranked[0].len(), 2);
//! ```

mod factorization;

pub use factorization::{MedicationRecommender, TrainingReport};
