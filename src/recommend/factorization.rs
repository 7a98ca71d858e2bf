//! Matrix factorization engine trained by stochastic gradient descent.

use crate::catalog::Catalog;
use crate::error::{RecetarError, Result};
use crate::primitives::Matrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Latent-factor recommender over a medication catalog.
///
/// Owns the catalog's efficacy matrix `M` plus two learned factor matrices:
/// medication factors `P` (medications × k) and condition factors `Q`
/// (conditions × k). Training minimizes the squared error of `dot(P[i], Q[j])`
/// against `M[i][j]` over the positive entries, with L2 regularization.
///
/// Factor matrices are drawn from N(0, 1/k) at construction; builder setters
/// that affect initialization (`with_n_factors`, `with_random_state`) redraw
/// them. Calling [`recommend`](Self::recommend) before
/// [`train`](Self::train) is permitted and scores with the initial random
/// factors, which is near-random output rather than an error.
///
/// # Hyperparameters
///
/// - **n_factors** (k): latent dimensionality, default 5
/// - **learning_rate** (η): SGD step size, default 0.01
/// - **regularization** (λ): L2 shrinkage, default 0.01
/// - **n_epochs** (E): full passes over the positive entries, default 100
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicationRecommender {
    catalog: Catalog,
    n_factors: usize,
    learning_rate: f32,
    regularization: f32,
    n_epochs: usize,
    random_state: Option<u64>,
    medication_factors: Matrix<f32>,
    condition_factors: Matrix<f32>,
}

impl MedicationRecommender {
    /// Creates a recommender over the given catalog with default
    /// hyperparameters and entropy-seeded factor initialization.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let mut model = Self {
            catalog,
            n_factors: 5,
            learning_rate: 0.01,
            regularization: 0.01,
            n_epochs: 100,
            random_state: None,
            medication_factors: Matrix::zeros(0, 0),
            condition_factors: Matrix::zeros(0, 0),
        };
        model.init_factors();
        model
    }

    /// Sets the number of latent factors and redraws the factor matrices.
    #[must_use]
    pub fn with_n_factors(mut self, n_factors: usize) -> Self {
        self.n_factors = n_factors;
        self.init_factors();
        self
    }

    /// Sets the SGD learning rate.
    #[must_use]
    pub fn with_learning_rate(mut self, learning_rate: f32) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Sets the L2 regularization strength.
    #[must_use]
    pub fn with_regularization(mut self, regularization: f32) -> Self {
        self.regularization = regularization;
        self
    }

    /// Sets the number of training epochs.
    #[must_use]
    pub fn with_epochs(mut self, n_epochs: usize) -> Self {
        self.n_epochs = n_epochs;
        self
    }

    /// Sets the random seed and redraws the factor matrices.
    ///
    /// With a fixed seed, repeated train + recommend runs on identical input
    /// produce identical output.
    #[must_use]
    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.random_state = Some(seed);
        self.init_factors();
        self
    }

    /// The catalog this recommender was built over.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Learned medication factors `P` (medications × k).
    #[must_use]
    pub fn medication_factors(&self) -> &Matrix<f32> {
        &self.medication_factors
    }

    /// Learned condition factors `Q` (conditions × k).
    #[must_use]
    pub fn condition_factors(&self) -> &Matrix<f32> {
        &self.condition_factors
    }

    fn init_factors(&mut self) {
        let scale = 1.0 / self.n_factors as f32;
        let mut rng = match self.random_state {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.medication_factors = normal_matrix(
            self.catalog.n_medications(),
            self.n_factors,
            scale,
            &mut rng,
        );
        self.condition_factors = normal_matrix(
            self.catalog.n_conditions(),
            self.n_factors,
            scale,
            &mut rng,
        );
    }

    /// Trains the factor matrices by SGD over the positive efficacy entries.
    ///
    /// Each epoch visits every `(i, j)` with `M[i][j] > 0` in row-major order
    /// and applies the update immediately, so later pairs in the same epoch
    /// observe factors already updated by earlier pairs. The condition row
    /// update uses the medication row updated in the same step. After each
    /// epoch the mean squared error over the positive entries is emitted as a
    /// `tracing` debug event and recorded in the returned report.
    ///
    /// # Errors
    ///
    /// Returns [`RecetarError::InvalidHyperparameter`] when `n_factors` or
    /// `n_epochs` is zero.
    pub fn train(&mut self) -> Result<TrainingReport> {
        if self.n_factors == 0 {
            return Err(RecetarError::invalid_hyperparameter(
                "n_factors",
                self.n_factors,
                ">= 1",
            ));
        }
        if self.n_epochs == 0 {
            return Err(RecetarError::invalid_hyperparameter(
                "n_epochs",
                self.n_epochs,
                ">= 1",
            ));
        }

        let efficacy = self.catalog.efficacy().clone();
        let (n_medications, n_conditions) = efficacy.shape();
        let mut errors = Vec::with_capacity(self.n_epochs);

        for epoch in 0..self.n_epochs {
            for i in 0..n_medications {
                for j in 0..n_conditions {
                    let observed = efficacy.get(i, j);
                    if observed > 0.0 {
                        let predicted = self
                            .medication_factors
                            .row(i)
                            .dot(&self.condition_factors.row(j));
                        let e = observed - predicted;
                        for f in 0..self.n_factors {
                            let p = self.medication_factors.get(i, f);
                            let q = self.condition_factors.get(j, f);
                            let p_next =
                                p + self.learning_rate * (e * q - self.regularization * p);
                            let q_next =
                                q + self.learning_rate * (e * p_next - self.regularization * q);
                            self.medication_factors.set(i, f, p_next);
                            self.condition_factors.set(j, f, q_next);
                        }
                    }
                }
            }
            let error = self.mean_squared_error();
            tracing::debug!(epoch, error, "training epoch complete");
            errors.push(error);
        }

        Ok(TrainingReport { errors })
    }

    /// Mean squared error of the current factors over the positive entries.
    #[must_use]
    pub fn mean_squared_error(&self) -> f32 {
        let efficacy = self.catalog.efficacy();
        let (n_medications, n_conditions) = efficacy.shape();
        let mut sum = 0.0;
        let mut count = 0usize;
        for i in 0..n_medications {
            for j in 0..n_conditions {
                let observed = efficacy.get(i, j);
                if observed > 0.0 {
                    let predicted = self
                        .medication_factors
                        .row(i)
                        .dot(&self.condition_factors.row(j));
                    sum += (observed - predicted) * (observed - predicted);
                    count += 1;
                }
            }
        }
        if count == 0 {
            0.0
        } else {
            sum / count as f32
        }
    }

    /// Returns the `top_n` medication indices per queried condition, ranked
    /// by descending factor-product score.
    ///
    /// Scores are `S = P · Q_selected^T` where `Q_selected` restricts `Q` to
    /// the queried conditions; each condition's column is ranked
    /// independently. Ties in score break by ascending medication index, so
    /// the ranking is deterministic.
    ///
    /// The result has one inner vector per queried condition, in query order.
    /// Indices map back to names through [`Catalog::medications`].
    ///
    /// # Errors
    ///
    /// Returns [`RecetarError::InvalidHyperparameter`] when `top_n` is zero
    /// or exceeds the medication count, and
    /// [`RecetarError::UnknownCondition`] when a queried name is not in the
    /// vocabulary. No partial output is produced on error.
    pub fn recommend(&self, conditions: &[&str], top_n: usize) -> Result<Vec<Vec<usize>>> {
        let n_medications = self.catalog.n_medications();
        if top_n == 0 {
            return Err(RecetarError::invalid_hyperparameter("top_n", top_n, ">= 1"));
        }
        if top_n > n_medications {
            return Err(RecetarError::invalid_hyperparameter(
                "top_n",
                top_n,
                &format!("<= {n_medications} (medication count)"),
            ));
        }

        let condition_indices = conditions
            .iter()
            .map(|name| self.catalog.condition_index(name))
            .collect::<Result<Vec<usize>>>()?;

        let mut selected = Vec::with_capacity(condition_indices.len() * self.n_factors);
        for &j in &condition_indices {
            selected.extend_from_slice(self.condition_factors.row(j).as_slice());
        }
        let q_selected = Matrix::from_vec(condition_indices.len(), self.n_factors, selected)?;
        let scores = self.medication_factors.matmul(&q_selected.transpose())?;

        let mut rankings = Vec::with_capacity(condition_indices.len());
        for query in 0..condition_indices.len() {
            let column = scores.column(query);
            let mut ranked: Vec<(f32, usize)> = column
                .iter()
                .enumerate()
                .map(|(medication, &score)| (score, medication))
                .collect();
            ranked.sort_by(|a, b| {
                b.0.partial_cmp(&a.0)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| a.1.cmp(&b.1))
            });
            rankings.push(ranked.into_iter().take(top_n).map(|(_, i)| i).collect());
        }
        Ok(rankings)
    }

    /// Like [`recommend`](Self::recommend), with indices mapped to
    /// medication names through the catalog.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`recommend`](Self::recommend).
    pub fn recommend_names(&self, conditions: &[&str], top_n: usize) -> Result<Vec<Vec<String>>> {
        let rankings = self.recommend(conditions, top_n)?;
        Ok(rankings
            .into_iter()
            .map(|indices| {
                indices
                    .into_iter()
                    .filter_map(|i| self.catalog.medication_name(i))
                    .map(String::from)
                    .collect()
            })
            .collect())
    }
}

/// Per-epoch training diagnostics.
///
/// Advisory output: consumers should not parse the error trajectory as an API
/// contract, but tests use it to check the error trend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingReport {
    errors: Vec<f32>,
}

impl TrainingReport {
    /// Mean squared error after each epoch, in epoch order.
    #[must_use]
    pub fn epoch_errors(&self) -> &[f32] {
        &self.errors
    }

    /// Error after the final epoch, if any epochs ran.
    #[must_use]
    pub fn final_error(&self) -> Option<f32> {
        self.errors.last().copied()
    }

    /// Number of epochs run.
    #[must_use]
    pub fn n_epochs(&self) -> usize {
        self.errors.len()
    }
}

/// Draws a rows × cols matrix from N(0, scale) using the Box-Muller
/// transform.
fn normal_matrix(rows: usize, cols: usize, scale: f32, rng: &mut StdRng) -> Matrix<f32> {
    let data: Vec<f32> = (0..rows * cols)
        .map(|_| {
            let u1: f32 = rng.gen_range(0.0001_f32..1.0_f32);
            let u2: f32 = rng.gen_range(0.0_f32..1.0_f32);
            let z = (-2.0_f32 * u1.ln()).sqrt() * (2.0_f32 * std::f32::consts::PI * u2).cos();
            scale * z
        })
        .collect();
    Matrix::from_vec(rows, cols, data).expect("rows * cols elements generated")
}

#[cfg(test)]
#[path = "tests_factorization_contract.rs"]
mod tests_factorization_contract;
