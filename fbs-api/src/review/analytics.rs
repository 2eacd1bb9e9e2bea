//! Rating analytics aggregation

use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregated view over all stored ratings
///
/// `rating_distribution` always carries all five keys 1..=5, zero-count
/// included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsSummary {
    pub total_reviews: u64,
    pub average_rating: f64,
    pub rating_distribution: BTreeMap<u8, u64>,
}

/// Aggregate count, mean, and per-star histogram over the given ratings
///
/// The mean is rounded to 2 decimal places, half away from zero
/// (`f64::round` semantics). Zero records yield a zeroed summary.
pub fn compute_analytics(ratings: &[u8]) -> AnalyticsSummary {
    let mut rating_distribution: BTreeMap<u8, u64> = (1..=5).map(|k| (k, 0)).collect();

    for &rating in ratings {
        if let Some(count) = rating_distribution.get_mut(&rating) {
            *count += 1;
        }
    }

    let total_reviews = ratings.len() as u64;
    let average_rating = if total_reviews == 0 {
        0.0
    } else {
        let mean = ratings.iter().map(|&r| r as u64).sum::<u64>() as f64 / total_reviews as f64;
        (mean * 100.0).round() / 100.0
    };

    AnalyticsSummary {
        total_reviews,
        average_rating,
        rating_distribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_yields_zeroed_summary() {
        let summary = compute_analytics(&[]);

        assert_eq!(summary.total_reviews, 0);
        assert_eq!(summary.average_rating, 0.0);
        assert_eq!(summary.rating_distribution.len(), 5);
        assert!(summary.rating_distribution.values().all(|&c| c == 0));
    }

    #[test]
    fn test_mixed_ratings() {
        let summary = compute_analytics(&[5, 5, 4, 1]);

        assert_eq!(summary.total_reviews, 4);
        assert_eq!(summary.average_rating, 3.75);
        let expected: BTreeMap<u8, u64> =
            [(1, 1), (2, 0), (3, 0), (4, 1), (5, 2)].into_iter().collect();
        assert_eq!(summary.rating_distribution, expected);
    }

    #[test]
    fn test_mean_rounds_to_two_decimals() {
        // 13 / 3 = 4.333... -> 4.33
        let summary = compute_analytics(&[4, 4, 5]);
        assert_eq!(summary.average_rating, 4.33);

        // 5 / 3 = 1.666... -> 1.67
        let summary = compute_analytics(&[1, 2, 2]);
        assert_eq!(summary.average_rating, 1.67);
    }

    #[test]
    fn test_halfway_values_round_away_from_zero() {
        // 9 / 8 = 1.125 -> 1.13 under half-away-from-zero
        let summary = compute_analytics(&[1, 1, 1, 1, 1, 1, 1, 2]);
        assert_eq!(summary.average_rating, 1.13);
    }

    #[test]
    fn test_idempotent_and_distribution_sums_to_total() {
        let ratings = [3, 3, 5, 1, 2, 4, 4, 4];
        let first = compute_analytics(&ratings);
        let second = compute_analytics(&ratings);

        assert_eq!(first, second);
        assert_eq!(
            first.rating_distribution.values().sum::<u64>(),
            first.total_reviews
        );
    }

    #[test]
    fn test_distribution_keys_always_present() {
        let summary = compute_analytics(&[3]);
        let keys: Vec<u8> = summary.rating_distribution.keys().copied().collect();
        assert_eq!(keys, vec![1, 2, 3, 4, 5]);
    }
}
