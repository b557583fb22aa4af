//! Relevance scoring from the SVD factors.
//!
//! The number of relevant singular values is chosen by walking the
//! descending spectrum against a `σ₀ / 2` threshold; row scores of `U` and
//! `V` are singular-value-weighted row norms over that leading block,
//! normalized by the row maximum.

use ndarray::Array2;
use rayon::prelude::*;

/// Index of the last singular value included in scoring.
///
/// Starting at 0, the index advances while `sigma[index] >= sigma[0] / 2`
/// and `index < len - 1`. The returned index is *inclusive* in the scoring
/// sum, so when the walk stops on a below-threshold value that value still
/// contributes: one more index than the count of above-threshold values.
/// The bias is part of the scoring contract; do not tighten it.
pub fn relevant_singular_values(sigma: &[f64]) -> usize {
    let threshold = sigma[0] / 2.0;
    let mut index = 0;
    while sigma[index] >= threshold && index < sigma.len() - 1 {
        index += 1;
    }
    index
}

/// Per-row scores `sqrt(Σ_{i=0..=last} M[r,i]² · sigma[i]²)`.
///
/// Rows are scored in parallel; the output order matches row order.
pub fn row_scores(m: &Array2<f64>, sigma: &[f64], last: usize) -> Vec<f64> {
    (0..m.nrows())
        .into_par_iter()
        .map(|row| {
            let mut sum = 0.0;
            for i in 0..=last {
                let weighted = m[[row, i]] * sigma[i];
                sum += weighted * weighted;
            }
            sum.sqrt()
        })
        .collect()
}

/// Divide by the maximum score in place; all-zero input stays zero.
pub fn normalize_max(scores: &mut [f64]) {
    let max = scores.iter().copied().fold(0.0, f64::max);
    if max > 0.0 {
        for score in scores.iter_mut() {
            *score /= max;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_relevant_stops_before_last_index() {
        // Walk passes 10 and 6 (both >= 5) and lands on 1.
        assert_eq!(relevant_singular_values(&[10.0, 6.0, 1.0]), 2);
        // Walk passes 10 and stops on 1 immediately.
        assert_eq!(relevant_singular_values(&[10.0, 1.0, 0.5]), 1);
    }

    #[test]
    fn test_relevant_clamped_to_spectrum() {
        assert_eq!(relevant_singular_values(&[3.0]), 0);
        // All values above threshold: the walk is stopped by the length
        // bound, not the threshold.
        assert_eq!(relevant_singular_values(&[4.0, 4.0, 4.0]), 2);
    }

    #[test]
    fn test_relevant_zero_spectrum() {
        // 0 >= 0 holds, so the walk runs to the end.
        assert_eq!(relevant_singular_values(&[0.0, 0.0]), 1);
    }

    #[test]
    fn test_row_scores_weighted_norm() {
        let m = array![[1.0, 0.0], [0.5, 0.5]];
        let sigma = [2.0, 1.0];
        let scores = row_scores(&m, &sigma, 1);
        assert!((scores[0] - 2.0).abs() < 1e-12);
        let expected = (0.5f64 * 2.0).powi(2) + (0.5f64 * 1.0).powi(2);
        assert!((scores[1] - expected.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_row_scores_truncation() {
        let m = array![[1.0, 1.0]];
        let sigma = [1.0, 1.0];
        // Only the first column contributes.
        let scores = row_scores(&m, &sigma, 0);
        assert!((scores[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_max_unit_maximum() {
        let mut scores = vec![0.5, 2.0, 1.0];
        normalize_max(&mut scores);
        assert_eq!(scores[1], 1.0);
        assert!((scores[0] - 0.25).abs() < 1e-12);
        assert!((scores[2] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_all_zero_stays_zero() {
        let mut scores = vec![0.0, 0.0];
        normalize_max(&mut scores);
        assert_eq!(scores, vec![0.0, 0.0]);
    }
}
