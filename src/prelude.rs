//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use recetar::prelude::*;
//! ```

pub use crate::catalog::{Catalog, CatalogBuilder};
pub use crate::error::{RecetarError, Result};
pub use crate::metrics::{hit_at_k, reciprocal_rank};
pub use crate::primitives::{Matrix, Vector};
pub use crate::recommend::{MedicationRecommender, TrainingReport};
