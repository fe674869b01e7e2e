//! Byte-to-pulse encoding.
//!
//! Pure conversion from color channel bytes to the pulse train the
//! strip protocol expects. No I/O, no allocation; the caller provides
//! the destination buffer.

use crate::timing::TimingProfile;

/// One transmitted bit: the line is driven high for `high` ticks, then
/// low for `low` ticks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pulse {
    /// High time, in ticks.
    pub high: u16,
    /// Low time, in ticks.
    pub low: u16,
}

impl Pulse {
    /// The pulse encoding a `0` bit under `profile`.
    pub const fn zero(profile: &TimingProfile) -> Self {
        Self {
            high: profile.zero_high,
            low: profile.zero_low,
        }
    }

    /// The pulse encoding a `1` bit under `profile`.
    pub const fn one(profile: &TimingProfile) -> Self {
        Self {
            high: profile.one_high,
            low: profile.one_low,
        }
    }
}

/// Number of pulses needed to encode `byte_count` bytes.
pub const fn pulse_count(byte_count: usize) -> usize {
    byte_count * 8
}

/// Encode `bytes` into `out`, most significant bit first.
///
/// Every byte produces exactly eight pulses; nothing is skipped,
/// reordered, or coalesced. `out` must hold at least
/// [`pulse_count(bytes.len())`](pulse_count) entries — a shorter buffer
/// is a caller bug and panics. Entries past the encoded prefix are left
/// untouched. Returns the number of pulses written.
pub fn encode_into(bytes: &[u8], profile: &TimingProfile, out: &mut [Pulse]) -> usize {
    debug_assert!(out.len() >= pulse_count(bytes.len()));

    let zero = Pulse::zero(profile);
    let one = Pulse::one(profile);

    for (byte_index, &byte) in bytes.iter().enumerate() {
        for bit in 0..8 {
            out[byte_index * 8 + bit] = if byte & (0x80 >> bit) == 0 { zero } else { one };
        }
    }

    pulse_count(bytes.len())
}
