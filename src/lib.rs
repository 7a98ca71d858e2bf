//! Recetar: medication recommendation via latent-factor matrix factorization.
//!
//! Recetar learns low-dimensional factor vectors for medications and
//! conditions from a binary efficacy matrix (which medications are known to
//! treat which conditions), using stochastic gradient descent over the
//! observed entries. Dot products between learned factors score unseen
//! medication/condition pairs, and top-N retrieval ranks medications for each
//! queried condition.
//!
//! # Quick Start
//!
//! ```
//! use recetar::prelude::*;
//!
//! let catalog = CatalogBuilder::new()
//!     .medication("Aspirin", ["Pain", "Fever", "Inflammation"])
//!     .medication("Paracetamol", ["Pain", "Fever"])
//!     .medication("Ibuprofen", ["Pain", "Fever", "Inflammation"])
//!     .medication("Metformin", ["Type 2 Diabetes"])
//!     .build()
//!     .expect("non-empty catalog with non-empty condition lists");
//!
//! let mut model = MedicationRecommender::new(catalog)
//!     .with_n_factors(3)
//!     .with_epochs(100)
//!     .with_random_state(42);
//!
//! model.train().expect("valid hyperparameters");
//!
//! let recommendations = model
//!     .recommend_names(&["Pain"], 2)
//!     .expect("condition is in the vocabulary");
//! assert_eq!(recommendations[0].len(), 2);
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Catalog construction (condition vocabulary + efficacy matrix)
//! - [`recommend`]: Matrix factorization engine and top-N retrieval
//! - [`primitives`]: Core Vector and Matrix types
//! - [`metrics`]: Ranking metrics (Hit@K, reciprocal rank)
//! - [`error`]: Crate error type and Result alias

pub mod catalog;
pub mod error;
pub mod metrics;
pub mod prelude;
pub mod primitives;
pub mod recommend;
