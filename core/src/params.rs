use std::f64::consts::PI;

/// The values a single parameter control can produce.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl ParameterRange {
    pub const AMPLITUDE: Self = Self {
        min: 0.1,
        max: 2.0,
        step: 0.1,
        default: 1.0,
    };

    pub const FREQUENCY: Self = Self {
        min: 0.1,
        max: 3.0,
        step: 0.1,
        default: 1.0,
    };

    pub const SPEED: Self = Self {
        min: 1.0,
        max: 5.0,
        step: 0.1,
        default: 2.0,
    };

    pub fn num_steps(&self) -> u32 {
        ((self.max - self.min) / self.step).round() as u32
    }

    /// Clamps `value` into the range and snaps it to the nearest step counted from `min`.
    pub fn quantize(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        let steps = ((value - self.min) / self.step)
            .round()
            .clamp(0.0, self.num_steps() as f64);
        // Round away the representation error of `step` so that e.g. 0.1 + 2 * 0.1 prints as 0.3.
        let snapped = self.min + (steps * self.step);
        ((snapped * 1e9).round() / 1e9).clamp(self.min, self.max)
    }

    /// Position of `value` within the range, between 0 and 1.
    pub fn value_to_01(&self, value: f64) -> f64 {
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    pub fn value_from_01(&self, value_01: f64) -> f64 {
        self.quantize(self.min + (value_01.clamp(0.0, 1.0) * (self.max - self.min)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveParameters {
    pub amplitude: f64,
    /// Hz
    pub frequency: f64,
    pub speed: f64,
}

impl Default for WaveParameters {
    fn default() -> Self {
        Self {
            amplitude: ParameterRange::AMPLITUDE.default,
            frequency: ParameterRange::FREQUENCY.default,
            speed: ParameterRange::SPEED.default,
        }
    }
}

impl WaveParameters {
    pub fn angular_frequency(&self) -> f64 {
        2.0 * PI * self.frequency
    }

    /// Zero when the speed is zero, rather than infinite. A zero wave number has no nodes.
    pub fn wave_number(&self) -> f64 {
        if self.speed == 0.0 {
            0.0
        } else {
            self.angular_frequency() / self.speed
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_are_on_the_step_grid() {
        for range in [
            ParameterRange::AMPLITUDE,
            ParameterRange::FREQUENCY,
            ParameterRange::SPEED,
        ] {
            assert_eq!(range.quantize(range.default), range.default);
        }
    }

    #[test]
    fn quantize_clamps_to_range() {
        let range = ParameterRange::AMPLITUDE;
        assert_eq!(range.quantize(-3.0), 0.1);
        assert_eq!(range.quantize(9.0), 2.0);
        assert_eq!(range.quantize(f64::NAN), 1.0);
    }

    #[test]
    fn quantize_snaps_to_step() {
        let range = ParameterRange::SPEED;
        assert_eq!(range.quantize(2.34), 2.3);
        assert_eq!(range.quantize(2.36), 2.4);
        assert_eq!(ParameterRange::FREQUENCY.quantize(0.3), 0.3);
    }

    #[test]
    fn value_01_mapping() {
        let range = ParameterRange::FREQUENCY;
        assert_eq!(range.num_steps(), 29);
        assert_eq!(range.value_from_01(0.0), 0.1);
        assert_eq!(range.value_from_01(1.0), 3.0);
        assert_eq!(range.value_to_01(3.0), 1.0);
        assert_eq!(range.value_from_01(range.value_to_01(1.7)), 1.7);
    }

    #[test]
    fn default_wave_number_is_pi() {
        let params = WaveParameters::default();
        assert_eq!(params.angular_frequency(), 2.0 * PI);
        assert_eq!(params.wave_number(), PI);
    }

    #[test]
    fn zero_speed_has_zero_wave_number() {
        let params = WaveParameters {
            speed: 0.0,
            ..WaveParameters::default()
        };
        assert_eq!(params.wave_number(), 0.0);
    }
}
