use rand::Rng;

/// Cumulative-sum selection over a discrete distribution.
///
/// Returns the first index whose running sum exceeds `draw`. When rounding
/// leaves the draw unresolved (weights summing just below 1.0) the last
/// index is returned.
pub fn pick_weighted(weights: &[f64], draw: f64) -> usize {
    let mut cumulative = 0.0;
    for (idx, weight) in weights.iter().enumerate() {
        cumulative += weight;
        if draw < cumulative {
            return idx;
        }
    }
    weights.len().saturating_sub(1)
}

/// Draws a uniform value in `[0, 1)` and selects an index from `weights`.
pub fn sample_weighted<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    pick_weighted(weights, rng.random::<f64>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_first_bucket_exceeding_draw() {
        let weights = [0.5, 0.45, 0.05];
        assert_eq!(pick_weighted(&weights, 0.0), 0);
        assert_eq!(pick_weighted(&weights, 0.49), 0);
        assert_eq!(pick_weighted(&weights, 0.5), 1);
        assert_eq!(pick_weighted(&weights, 0.94), 1);
        assert_eq!(pick_weighted(&weights, 0.96), 2);
    }

    #[test]
    fn unresolved_draw_falls_back_to_last_bucket() {
        let weights = [0.3, 0.3, 0.3999];
        assert_eq!(pick_weighted(&weights, 0.99995), 2);
        assert_eq!(pick_weighted(&[], 0.5), 0);
    }
}
