/// Evenly spaced sample positions along the string. The first sample is exactly `0` and the last
/// is exactly `upper_bound`.
#[derive(Clone, Debug, PartialEq)]
pub struct SpatialGrid {
    xs: Vec<f64>,
}

impl SpatialGrid {
    pub const UPPER_BOUND: f64 = 10.0;
    pub const NUM_SAMPLES: usize = 400;

    pub fn new(upper_bound: f64, num_samples: usize) -> Self {
        let xs = match num_samples {
            0 => Vec::new(),
            1 => vec![0.0],
            n => {
                let step = upper_bound / (n - 1) as f64;
                let mut xs = (0..n).map(|i| i as f64 * step).collect::<Vec<_>>();
                xs[n - 1] = upper_bound;
                xs
            }
        };
        Self { xs }
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn upper_bound(&self) -> f64 {
        self.xs.last().copied().unwrap_or(0.0)
    }
}

impl Default for SpatialGrid {
    fn default() -> Self {
        Self::new(Self::UPPER_BOUND, Self::NUM_SAMPLES)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_grid_shape() {
        let grid = SpatialGrid::default();
        assert_eq!(grid.len(), 400);
        assert_eq!(grid.xs()[0], 0.0);
        assert_eq!(grid.upper_bound(), 10.0);
    }

    #[test]
    fn strictly_ascending() {
        let grid = SpatialGrid::default();
        assert!(grid.xs().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn degenerate_sizes() {
        assert!(SpatialGrid::new(10.0, 0).is_empty());
        assert_eq!(SpatialGrid::new(10.0, 1).xs(), &[0.0]);
        assert_eq!(SpatialGrid::new(10.0, 2).xs(), &[0.0, 10.0]);
    }
}
