//! Medication catalog and binary efficacy matrix construction.
//!
//! [`CatalogBuilder`] turns an ordered medication → conditions mapping into a
//! [`Catalog`]: a sorted, deduplicated condition vocabulary, the medication
//! names in insertion order, and a dense medications × conditions matrix with
//! 1.0 where a medication treats a condition. The catalog is immutable after
//! construction; index positions are the canonical identifiers used by the
//! recommendation engine.
//!
//! # Examples
//!
//! ```
//! use recetar::catalog::CatalogBuilder;
//!
//! let catalog = CatalogBuilder::new()
//!     .medication("Aspirin", ["Pain", "Fever", "Inflammation"])
//!     .medication("Paracetamol", ["Pain", "Fever"])
//!     .build()
//!     .expect("two medications with non-empty condition lists");
//!
//! assert_eq!(catalog.n_medications(), 2);
//! assert_eq!(catalog.conditions(), ["Fever", "Inflammation", "Pain"]);
//! assert_eq!(catalog.condition_index("Pain").expect("in vocabulary"), 2);
//! ```

use crate::error::{RecetarError, Result};
use crate::primitives::Matrix;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Builder for [`Catalog`].
///
/// Medications are recorded in insertion order; that order is the canonical
/// medication index in the resulting catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    entries: Vec<(String, Vec<String>)>,
}

impl CatalogBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a medication and the conditions it treats.
    #[must_use]
    pub fn medication(
        mut self,
        name: impl Into<String>,
        conditions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.entries.push((
            name.into(),
            conditions.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Validates the entries and builds the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`RecetarError::EmptyCatalog`] when no medications were added,
    /// [`RecetarError::EmptyConditionList`] when a medication lists no
    /// conditions, and [`RecetarError::DuplicateMedication`] when a medication
    /// name repeats.
    pub fn build(self) -> Result<Catalog> {
        if self.entries.is_empty() {
            return Err(RecetarError::EmptyCatalog);
        }

        let mut seen = BTreeSet::new();
        let mut vocabulary = BTreeSet::new();
        for (name, conditions) in &self.entries {
            if conditions.is_empty() {
                return Err(RecetarError::EmptyConditionList {
                    medication: name.clone(),
                });
            }
            if !seen.insert(name.as_str()) {
                return Err(RecetarError::DuplicateMedication {
                    medication: name.clone(),
                });
            }
            for condition in conditions {
                vocabulary.insert(condition.clone());
            }
        }
        let conditions: Vec<String> = vocabulary.into_iter().collect();

        let mut data = Vec::with_capacity(self.entries.len() * conditions.len());
        for (_, treated) in &self.entries {
            let treated: BTreeSet<&str> = treated.iter().map(String::as_str).collect();
            for condition in &conditions {
                data.push(if treated.contains(condition.as_str()) {
                    1.0
                } else {
                    0.0
                });
            }
        }
        let efficacy = Matrix::from_vec(self.entries.len(), conditions.len(), data)?;

        Ok(Catalog {
            medications: self.entries.into_iter().map(|(name, _)| name).collect(),
            conditions,
            efficacy,
        })
    }
}

/// Immutable medication catalog with its efficacy matrix.
///
/// Index positions are canonical: `medications()[i]` is medication `i`
/// everywhere in the crate, `conditions()[j]` is condition `j`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    medications: Vec<String>,
    conditions: Vec<String>,
    efficacy: Matrix<f32>,
}

impl Catalog {
    /// Medication names in insertion order.
    #[must_use]
    pub fn medications(&self) -> &[String] {
        &self.medications
    }

    /// Condition vocabulary, sorted lexicographically.
    #[must_use]
    pub fn conditions(&self) -> &[String] {
        &self.conditions
    }

    /// The medications × conditions efficacy matrix (entries 0.0 or 1.0).
    #[must_use]
    pub fn efficacy(&self) -> &Matrix<f32> {
        &self.efficacy
    }

    /// Number of medications.
    #[must_use]
    pub fn n_medications(&self) -> usize {
        self.medications.len()
    }

    /// Number of conditions in the vocabulary.
    #[must_use]
    pub fn n_conditions(&self) -> usize {
        self.conditions.len()
    }

    /// Resolves a condition name to its vocabulary index.
    ///
    /// # Errors
    ///
    /// Returns [`RecetarError::UnknownCondition`] if the name is not in the
    /// vocabulary.
    pub fn condition_index(&self, name: &str) -> Result<usize> {
        self.conditions
            .binary_search_by(|c| c.as_str().cmp(name))
            .map_err(|_| RecetarError::UnknownCondition {
                name: name.to_string(),
            })
    }

    /// Returns the medication name at the given index, if any.
    #[must_use]
    pub fn medication_name(&self, index: usize) -> Option<&str> {
        self.medications.get(index).map(String::as_str)
    }
}


#[cfg(test)]
#[path = "tests_catalog_contract.rs"]
mod tests_catalog_contract;
