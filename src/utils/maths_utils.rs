use argminmax::ArgMinMax;

/// Equal-width binning of a closed value range, used for histograms.
#[derive(serde::Deserialize, serde::Serialize, Default, Debug, Clone)]
pub struct RangeF64 {
    pub start_range: f64,
    pub end_range: f64,
    pub n_chunks: usize,
}

impl RangeF64 {
    pub fn new(start_range: f64, end_range: f64, n_chunks: usize) -> Self {
        debug_assert!(n_chunks > 0);
        Self {
            start_range,
            end_range,
            n_chunks,
        }
    }

    #[inline]
    pub fn n_chunks(&self) -> usize {
        self.n_chunks
    }

    pub fn range_length(&self) -> f64 {
        self.end_range - self.start_range
    }

    pub fn chunk_size(&self) -> f64 {
        self.range_length() / (self.n_chunks as f64)
    }

    pub fn chunk_index(&self, value: f64) -> usize {
        // A degenerate (zero-width) range puts everything in the first chunk
        if self.range_length() <= 0.0 {
            return 0;
        }
        let index = (value - self.start_range) / self.chunk_size();
        let chunk_index = index.max(0.0) as usize;

        // Clamping handles floating-point inaccuracies at the boundary.
        chunk_index.min(self.n_chunks - 1)
    }

    pub fn chunk_bounds(&self, chunk_index: usize) -> (f64, f64) {
        debug_assert!(chunk_index < self.n_chunks);
        let lower_bound = self.start_range + chunk_index as f64 * self.chunk_size();
        let upper_bound = self.start_range + (chunk_index + 1) as f64 * self.chunk_size();
        (lower_bound, upper_bound)
    }
}

/// Quantile of an ascending-sorted slice using linear interpolation between
/// order statistics: rank = q * (n - 1).
/// Returns `None` for an empty slice or a `q` outside [0, 1].
pub fn quantile_linear(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }
    debug_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

    let rank = q * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let fraction = rank - lower as f64;

    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}

/// Sorted copy of `values`. Input is left untouched.
pub fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

pub fn get_max(vec: &[f64]) -> Option<f64> {
    if vec.is_empty() {
        return None;
    }
    let max_index: usize = vec.argmax();
    Some(vec[max_index])
}

pub fn get_min(vec: &[f64]) -> Option<f64> {
    if vec.is_empty() {
        return None;
    }
    let min_index: usize = vec.argmin();
    Some(vec[min_index])
}

pub fn get_min_max(vec: &[f64]) -> Option<(f64, f64)> {
    Some((get_min(vec)?, get_max(vec)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantile_three_points() {
        let sorted = [5000.0, 7000.0, 9000.0];
        assert_eq!(quantile_linear(&sorted, 0.25), Some(6000.0));
        assert_eq!(quantile_linear(&sorted, 0.5), Some(7000.0));
        assert_eq!(quantile_linear(&sorted, 0.75), Some(8000.0));
    }

    #[test]
    fn test_quantile_four_points_interpolates() {
        // rank for 0.25 = 0.75 -> 10 + 0.75 * 10 = 17.5
        let sorted = [10.0, 20.0, 30.0, 40.0];
        assert_eq!(quantile_linear(&sorted, 0.25), Some(17.5));
        assert_eq!(quantile_linear(&sorted, 0.5), Some(25.0));
        assert_eq!(quantile_linear(&sorted, 0.75), Some(32.5));
    }

    #[test]
    fn test_quantile_single_and_empty() {
        assert_eq!(quantile_linear(&[4200.0], 0.75), Some(4200.0));
        assert_eq!(quantile_linear(&[], 0.5), None);
        assert_eq!(quantile_linear(&[1.0, 2.0], 1.5), None);
    }

    #[test]
    fn test_chunk_index_clamps_to_last_chunk() {
        let range = RangeF64::new(0.0, 100.0, 10);
        assert_eq!(range.chunk_index(0.0), 0);
        assert_eq!(range.chunk_index(55.0), 5);
        assert_eq!(range.chunk_index(100.0), 9);
        assert_eq!(range.chunk_bounds(9), (90.0, 100.0));
    }

    #[test]
    fn test_degenerate_range_uses_first_chunk() {
        let range = RangeF64::new(5000.0, 5000.0, 10);
        assert_eq!(range.chunk_index(5000.0), 0);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(get_min_max(&[3.0, 1.0, 2.0]), Some((1.0, 3.0)));
        assert_eq!(get_min_max(&[]), None);
    }
}
