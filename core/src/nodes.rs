use std::f64::consts::PI;

// Absorbs rounding in `k * x_max / PI` so a node that falls exactly on `x_max` isn't lost.
const COUNT_TOLERANCE: f64 = 1e-9;

/// Positions in `[0, x_max]` where `sin(k * x) == 0`, that is `x = n * PI / k`, in ascending
/// order. A wave number of zero has no well-defined nodes and produces an empty list.
pub fn locate_nodes(wave_number: f64, x_max: f64) -> Vec<f64> {
    if wave_number == 0.0 || !wave_number.is_finite() || x_max < 0.0 {
        return Vec::new();
    }
    let k = wave_number.abs();
    let max_index = ((k * x_max / PI) + COUNT_TOLERANCE).floor() as usize;
    (0..=max_index)
        .map(|n| ((n as f64 * PI) / k).min(x_max))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::params::WaveParameters;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "{actual:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-12, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn zero_wave_number_has_no_nodes() {
        assert!(locate_nodes(0.0, 10.0).is_empty());
        let params = WaveParameters {
            frequency: 0.0,
            ..WaveParameters::default()
        };
        assert!(locate_nodes(params.wave_number(), 10.0).is_empty());
    }

    #[test]
    fn unit_spacing() {
        let params = WaveParameters {
            amplitude: 1.0,
            frequency: 1.0,
            speed: 2.0,
        };
        let nodes = locate_nodes(params.wave_number(), 10.0);
        assert_close(
            &nodes,
            &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
        );
    }

    #[test]
    fn double_spacing() {
        let params = WaveParameters {
            amplitude: 1.0,
            frequency: 0.5,
            speed: 2.0,
        };
        let nodes = locate_nodes(params.wave_number(), 10.0);
        assert_close(&nodes, &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn nodes_are_zeros_of_sine() {
        for frequency in [0.1, 0.7, 1.3, 2.2, 3.0] {
            for speed in [1.0, 1.9, 3.4, 5.0] {
                let k = WaveParameters {
                    amplitude: 1.0,
                    frequency,
                    speed,
                }
                .wave_number();
                let nodes = locate_nodes(k, 10.0);
                assert!(!nodes.is_empty());
                assert!(nodes.windows(2).all(|w| w[0] < w[1]));
                for &x in &nodes {
                    assert!((0.0..=10.0).contains(&x));
                    let r = (k * x).rem_euclid(PI);
                    assert!(r < 1e-9 || PI - r < 1e-9, "k={k} x={x} r={r}");
                }
            }
        }
    }

    #[test]
    fn first_node_is_origin() {
        assert_eq!(locate_nodes(0.2, 10.0), vec![0.0]);
        assert_eq!(locate_nodes(5.0, 0.0), vec![0.0]);
    }
}
