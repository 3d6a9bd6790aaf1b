//! Equal-tempered pitch math.
//!
//! Pure functions, no audio dependencies. Callers validate the base frequency
//! (see [`is_valid_base_freq`]) before it reaches [`frequency`].

use serde::{Deserialize, Serialize};

/// Convert a semitone offset from `base_freq` into an absolute frequency (12-TET).
pub fn frequency(base_freq: f64, semitones: f64) -> f64 {
    base_freq * 2.0_f64.powf(semitones / 12.0)
}

/// Signed interval from `to` up to `from`, in semitones.
pub fn semitone_distance(from: f64, to: f64) -> f64 {
    12.0 * (from / to).log2()
}

/// Every frequency the engine derives or sounds must be finite and strictly positive.
pub fn is_valid_frequency(freq: f64) -> bool {
    freq.is_finite() && freq > 0.0
}

pub fn is_valid_base_freq(freq: f64) -> bool {
    is_valid_frequency(freq)
}

/// Quick-select reference pitches for the global base frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaseFreqPreset {
    A2,
    A3,
    A4,
}

impl BaseFreqPreset {
    pub const ALL: [BaseFreqPreset; 3] =
        [BaseFreqPreset::A2, BaseFreqPreset::A3, BaseFreqPreset::A4];

    pub fn hz(&self) -> f64 {
        match self {
            BaseFreqPreset::A2 => 110.0,
            BaseFreqPreset::A3 => 220.0,
            BaseFreqPreset::A4 => 440.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BaseFreqPreset::A2 => "A2",
            BaseFreqPreset::A3 => "A3",
            BaseFreqPreset::A4 => "A4",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_offset_is_identity() {
        assert!((frequency(440.0, 0.0) - 440.0).abs() < 1e-12);
    }

    #[test]
    fn octave_up_doubles() {
        for base in [27.5, 110.0, 261.6256, 440.0, 1234.5] {
            let up = frequency(base, 12.0);
            assert!((up - 2.0 * base).abs() < 1e-9, "base={} up={}", base, up);
        }
    }

    #[test]
    fn octave_down_halves() {
        for base in [27.5, 110.0, 261.6256, 440.0, 1234.5] {
            let down = frequency(base, -12.0);
            assert!((down - base / 2.0).abs() < 1e-9, "base={} down={}", base, down);
        }
    }

    #[test]
    fn fractional_semitones() {
        let freq = frequency(440.0, 0.5);
        assert!((freq - 452.893).abs() < 1e-3, "got {}", freq);
    }

    #[test]
    fn semitone_distance_inverts_frequency() {
        let f = frequency(220.0, 7.0);
        assert!((semitone_distance(f, 220.0) - 7.0).abs() < 1e-9);
        assert!((semitone_distance(220.0, f) + 7.0).abs() < 1e-9);
    }

    #[test]
    fn base_freq_validation() {
        assert!(is_valid_base_freq(440.0));
        assert!(is_valid_base_freq(0.001));
        assert!(!is_valid_base_freq(0.0));
        assert!(!is_valid_base_freq(-110.0));
        assert!(!is_valid_base_freq(f64::NAN));
        assert!(!is_valid_base_freq(f64::INFINITY));
    }

    #[test]
    fn base_freq_presets_are_octaves_of_a() {
        assert_eq!(BaseFreqPreset::A2.hz(), 110.0);
        assert_eq!(BaseFreqPreset::A3.hz(), 220.0);
        assert_eq!(BaseFreqPreset::A4.hz(), 440.0);
        assert_eq!(BaseFreqPreset::from_name("a3"), Some(BaseFreqPreset::A3));
        assert_eq!(BaseFreqPreset::from_name("A5"), None);
    }
}
