//! Wire timing for WS2812-family strips.
//!
//! All durations are denominated in device ticks so a profile can be
//! handed to the transmit peripheral without further conversion.

use embassy_time::Duration;

/// Tick period the built-in profiles are denominated in (nanoseconds).
pub const TICK_NS: u32 = 25;

/// Convert a nanosecond duration to device ticks.
pub const fn ns_to_ticks(ns: u32) -> u16 {
    (ns / TICK_NS) as u16
}

/// Bit timing for one strip protocol.
///
/// A `0` bit is sent as `zero_high` ticks high followed by `zero_low`
/// ticks low; a `1` bit as `one_high` then `one_low`. The sum of each
/// pair must stay within the strip's bit-period tolerance, but that is
/// not enforced here: the profile is plain data and the encoder stays
/// total over it. [`zero_bit_period`](Self::zero_bit_period) and
/// [`one_bit_period`](Self::one_bit_period) exist so callers can check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingProfile {
    /// High time of a `0` bit, in ticks.
    pub zero_high: u16,
    /// Low time of a `0` bit, in ticks.
    pub zero_low: u16,
    /// High time of a `1` bit, in ticks.
    pub one_high: u16,
    /// Low time of a `1` bit, in ticks.
    pub one_low: u16,
    /// Minimum low period that latches a frame into the strip.
    pub reset: Duration,
}

impl TimingProfile {
    /// WS2812B timing: 350/900 ns for a `0`, 900/350 ns for a `1`,
    /// 280 µs frame reset, at a 25 ns tick.
    pub const fn ws2812b() -> Self {
        Self {
            zero_high: ns_to_ticks(350),
            zero_low: ns_to_ticks(900),
            one_high: ns_to_ticks(900),
            one_low: ns_to_ticks(350),
            reset: Duration::from_micros(280),
        }
    }

    /// Total duration of an encoded `0` bit, in ticks.
    pub const fn zero_bit_period(&self) -> u16 {
        self.zero_high + self.zero_low
    }

    /// Total duration of an encoded `1` bit, in ticks.
    pub const fn one_bit_period(&self) -> u16 {
        self.one_high + self.one_low
    }
}

impl Default for TimingProfile {
    fn default() -> Self {
        Self::ws2812b()
    }
}
