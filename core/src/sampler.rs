use crate::{grid::SpatialGrid, params::WaveParameters};

/// The two travelling waves and their superposition, sampled at every grid position.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveSamples {
    pub rightward: Vec<f64>,
    pub leftward: Vec<f64>,
    pub total: Vec<f64>,
}

/// Samples `A·sin(k(x - vt))` and `A·sin(k(x + vt))` along the grid at time `t`.
pub fn sample_waves(
    params: &WaveParameters,
    t: f64,
    grid: &SpatialGrid,
) -> WaveSamples {
    let WaveParameters {
        amplitude, speed, ..
    } = *params;
    let k = params.wave_number();
    let offset = speed * t;
    let rightward = grid
        .xs()
        .iter()
        .map(|&x| amplitude * (k * (x - offset)).sin())
        .collect::<Vec<_>>();
    let leftward = grid
        .xs()
        .iter()
        .map(|&x| amplitude * (k * (x + offset)).sin())
        .collect::<Vec<_>>();
    let total = rightward
        .iter()
        .zip(leftward.iter())
        .map(|(y1, y2)| y1 + y2)
        .collect();
    WaveSamples {
        rightward,
        leftward,
        total,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn params(amplitude: f64, frequency: f64, speed: f64) -> WaveParameters {
        WaveParameters {
            amplitude,
            frequency,
            speed,
        }
    }

    #[test]
    fn lengths_match_grid() {
        let grid = SpatialGrid::default();
        let samples = sample_waves(&WaveParameters::default(), 1.3, &grid);
        assert_eq!(samples.rightward.len(), grid.len());
        assert_eq!(samples.leftward.len(), grid.len());
        assert_eq!(samples.total.len(), grid.len());
    }

    #[test]
    fn total_is_exact_sum() {
        let grid = SpatialGrid::default();
        for &t in &[0.0, 0.05, 0.7, 13.35] {
            for p in [params(1.0, 1.0, 2.0), params(1.7, 2.3, 4.1)] {
                let s = sample_waves(&p, t, &grid);
                for i in 0..grid.len() {
                    assert_eq!(s.total[i], s.rightward[i] + s.leftward[i]);
                }
            }
        }
    }

    #[test]
    fn waves_are_time_mirrors() {
        let grid = SpatialGrid::default();
        let p = params(1.3, 0.8, 3.3);
        for &t in &[0.05, 1.0, 7.25] {
            let forward = sample_waves(&p, t, &grid);
            let backward = sample_waves(&p, -t, &grid);
            assert_eq!(forward.rightward, backward.leftward);
        }
    }

    #[test]
    fn waves_coincide_at_time_zero() {
        let grid = SpatialGrid::default();
        let s = sample_waves(&params(0.4, 2.9, 1.2), 0.0, &grid);
        assert_eq!(s.rightward, s.leftward);
        for i in 0..grid.len() {
            assert_eq!(s.total[i], 2.0 * s.rightward[i]);
        }
    }

    #[test]
    fn amplitude_bounds_each_wave() {
        let grid = SpatialGrid::default();
        let s = sample_waves(&params(2.0, 3.0, 1.0), 0.35, &grid);
        assert!(s.rightward.iter().all(|y| y.abs() <= 2.0));
        assert!(s.total.iter().all(|y| y.abs() <= 4.0));
    }
}
