//! Channel descriptors and the derived sampling frequency.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed multiplier mapping a channel tick to its sampling frequency in Hz.
pub const TICK_FREQUENCY_FACTOR: i64 = 100;

/// Derives the sampling frequency of a channel from its tick interval.
///
/// Every channel of a valid recording must derive the same value; the
/// comparison is exact, not within a tolerance.
#[inline]
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sampling_frequency_hz(tick: i64) -> f32 {
    (tick * TICK_FREQUENCY_FACTOR) as f32
}

/// Per-channel acquisition metadata, one entry per physical channel.
///
/// Read once from the channel-descriptor table of a channel group and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChannelInfo {
    /// Channel identifier within the recording.
    pub channel_id: i32,
    /// Row of this channel in the 2-D sample array.
    pub row_index: i32,
    /// Acquisition group identifier.
    pub group_id: i32,
    /// Electrode group on the array.
    pub electrode_group: i32,
    /// Channel label (electrode name).
    pub label: String,
    /// On-disk sample representation reported by the acquisition system.
    pub raw_data_type: String,
    /// Physical unit of converted samples.
    pub unit: String,
    /// Decimal exponent applied to converted samples.
    pub exponent: i32,
    /// ADC output corresponding to zero input.
    pub ad_zero: i32,
    /// Sampling interval tick.
    pub tick: i64,
    /// Scale factor from raw counts to physical values.
    pub conversion_factor: i64,
    /// ADC resolution in bits.
    pub adc_bits: i32,
    /// High-pass filter type.
    pub high_pass_filter_type: String,
    /// High-pass filter cutoff.
    pub high_pass_filter_cutoff: String,
    /// High-pass filter order.
    pub high_pass_filter_order: i32,
    /// Low-pass filter type.
    pub low_pass_filter_type: String,
    /// Low-pass filter cutoff.
    pub low_pass_filter_cutoff: String,
    /// Low-pass filter order.
    pub low_pass_filter_order: i32,
}

impl ChannelInfo {
    /// Returns the sampling frequency derived from this channel's tick.
    #[inline]
    #[must_use]
    pub fn sampling_frequency(&self) -> f32 {
        sampling_frequency_hz(self.tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sampling_frequency_from_tick() {
        assert_relative_eq!(sampling_frequency_hz(100), 10_000.0);
        assert_relative_eq!(sampling_frequency_hz(200), 20_000.0);
    }

    #[test]
    fn test_equal_ticks_derive_equal_frequencies() {
        // Exact equality is what the recording validator relies on.
        assert_eq!(sampling_frequency_hz(100), sampling_frequency_hz(100));
        assert_ne!(sampling_frequency_hz(100), sampling_frequency_hz(101));
    }
}
