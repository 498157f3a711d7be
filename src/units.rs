//! Conversions from wall-clock and musical units into sample units.
//!
//! Everything in the crate is measured in samples: durations are sample
//! counts, oscillators take periods in samples, and the LFO-style effects
//! take frequencies in cycles per sample. These helpers translate the units
//! people actually think in.

/// Duration of `secs` seconds in samples.
///
/// # Examples
///
/// ```
/// use ditty::{units, DEFAULT_SAMPLE_RATE};
///
/// assert_eq!(units::seconds(DEFAULT_SAMPLE_RATE, 2.0), 88_200);
/// assert_eq!(units::seconds(8_000, 0.5), 4_000);
/// ```
pub fn seconds(sample_rate: u32, secs: f64) -> usize {
    (sample_rate as f64 * secs).round() as usize
}

/// Period in samples of a tone at `hz`, for the oscillators.
///
/// # Examples
///
/// ```
/// use ditty::{units, DEFAULT_SAMPLE_RATE};
///
/// // Concert A at CD rate: just over 100 samples per cycle.
/// let a4 = units::period(DEFAULT_SAMPLE_RATE, 440.0);
/// assert!((a4 - 100.227_27).abs() < 1e-3);
/// ```
pub fn period(sample_rate: u32, hz: f64) -> f32 {
    (sample_rate as f64 / hz) as f32
}

/// Frequency in cycles per sample of a tone at `hz`, for the LFO-driven
/// effects.
///
/// # Examples
///
/// ```
/// use ditty::units;
///
/// // A 5 Hz tremolo at 8 kHz advances 1/1600 of a cycle per sample.
/// assert_eq!(units::cycles_per_sample(8_000, 5.0), 0.000_625);
/// ```
pub fn cycles_per_sample(sample_rate: u32, hz: f64) -> f32 {
    (hz / sample_rate as f64) as f32
}

/// Duration of one beat at `bpm` in samples.
///
/// # Examples
///
/// ```
/// use ditty::{units, DEFAULT_SAMPLE_RATE};
///
/// assert_eq!(units::beat(DEFAULT_SAMPLE_RATE, 120.0), 22_050);
/// ```
pub fn beat(sample_rate: u32, bpm: f64) -> usize {
    (60.0 / bpm * sample_rate as f64).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_rounds_to_nearest_sample() {
        assert_eq!(seconds(44_100, 1.0), 44_100);
        assert_eq!(seconds(44_100, 0.1), 4_410);
        // 1/3 second at CD rate is 14700 exactly
        assert_eq!(seconds(44_100, 1.0 / 3.0), 14_700);
    }

    #[test]
    fn test_period_and_cycles_are_reciprocal() {
        let p = period(44_100, 440.0) as f64;
        let c = cycles_per_sample(44_100, 440.0) as f64;
        assert!((p * c - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_beat_at_common_tempos() {
        assert_eq!(beat(44_100, 60.0), 44_100);
        assert_eq!(beat(44_100, 120.0), 22_050);
        assert_eq!(beat(44_100, 90.0), 29_400);
    }
}
