//! Ranking metrics for recommendation quality checks.
//!
//! These evaluate how well a ranked medication list surfaces the relevant
//! item. They are diagnostic helpers, not part of the training loop.

/// Hit@K: whether the target item appears in the top-K of a ranked list.
///
/// Returns 1.0 if the target is in the top K predictions, 0.0 otherwise.
///
/// # Examples
///
/// ```
/// use recetar::metrics::hit_at_k;
///
/// // Ranked medication indices for one condition
/// let ranked = vec![2, 0, 1];
///
/// assert_eq!(hit_at_k(&ranked, &0, 1), 0.0); // medication 0 is not first
/// assert_eq!(hit_at_k(&ranked, &0, 2), 1.0); // but it is in the top 2
/// ```
#[must_use]
pub fn hit_at_k<T: PartialEq>(ranked: &[T], target: &T, k: usize) -> f32 {
    if ranked.iter().take(k).any(|item| item == target) {
        1.0
    } else {
        0.0
    }
}

/// Reciprocal rank: 1/rank of the target in a ranked list, 0.0 if absent.
///
/// # Examples
///
/// ```
/// use recetar::metrics::reciprocal_rank;
///
/// let ranked = vec![2, 0, 1];
///
/// assert!((reciprocal_rank(&ranked, &2) - 1.0).abs() < 1e-6);
/// assert!((reciprocal_rank(&ranked, &0) - 0.5).abs() < 1e-6);
/// assert!((reciprocal_rank(&ranked, &9) - 0.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn reciprocal_rank<T: PartialEq>(ranked: &[T], target: &T) -> f32 {
    ranked
        .iter()
        .position(|item| item == target)
        .map_or(0.0, |rank| 1.0 / (rank + 1) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_at_k_first_position() {
        let ranked = vec![5, 3, 1];
        assert_eq!(hit_at_k(&ranked, &5, 1), 1.0);
    }

    #[test]
    fn test_hit_at_k_outside_window() {
        let ranked = vec![5, 3, 1];
        assert_eq!(hit_at_k(&ranked, &1, 2), 0.0);
        assert_eq!(hit_at_k(&ranked, &1, 3), 1.0);
    }

    #[test]
    fn test_hit_at_k_absent_target() {
        let ranked = vec![5, 3, 1];
        assert_eq!(hit_at_k(&ranked, &7, 3), 0.0);
    }

    #[test]
    fn test_hit_at_k_empty_ranking() {
        let ranked: Vec<usize> = vec![];
        assert_eq!(hit_at_k(&ranked, &0, 5), 0.0);
    }

    #[test]
    fn test_reciprocal_rank_positions() {
        let ranked = vec![5, 3, 1, 4];
        assert!((reciprocal_rank(&ranked, &5) - 1.0).abs() < 1e-6);
        assert!((reciprocal_rank(&ranked, &3) - 0.5).abs() < 1e-6);
        assert!((reciprocal_rank(&ranked, &4) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_reciprocal_rank_absent() {
        let ranked = vec![5, 3, 1];
        assert!((reciprocal_rank(&ranked, &2) - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_works_with_names() {
        let ranked = vec!["Aspirin".to_string(), "Ibuprofen".to_string()];
        assert_eq!(hit_at_k(&ranked, &"Ibuprofen".to_string(), 2), 1.0);
    }
}
