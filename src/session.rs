//! Per-strip working buffers.
//!
//! A [`StripSession`] owns the pixel buffer (three channel bytes per
//! LED) and the pulse buffer (one pulse per bit) for one configured
//! strip. Both are rebuilt from the incoming frame on every load; no
//! other component holds references into them.

use heapless::Vec;
use smart_leds::RGB8;

use crate::encoder::{self, Pulse};
use crate::timing::TimingProfile;

/// Pixel buffer capacity for a strip of `led_count` LEDs.
pub const fn pixel_buffer_size(led_count: usize) -> usize {
    led_count * 3
}

/// Pulse buffer capacity for a strip of `led_count` LEDs (one pulse
/// per bit of the pixel buffer).
pub const fn pulse_buffer_size(led_count: usize) -> usize {
    led_count * 3 * 8
}

/// Error returned when a strip does not fit the session buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CapacityExceeded;

impl core::fmt::Display for CapacityExceeded {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "led count exceeds session buffer capacity")
    }
}

impl core::error::Error for CapacityExceeded {}

/// Working buffers for one configured strip.
///
/// Size the capacities with [`pixel_buffer_size`] and
/// [`pulse_buffer_size`]:
///
/// ```
/// use ws2812_strip_driver::{StripSession, TimingProfile};
/// use ws2812_strip_driver::{pixel_buffer_size, pulse_buffer_size};
///
/// type Session = StripSession<{ pixel_buffer_size(8) }, { pulse_buffer_size(8) }>;
/// let session = Session::new(5, 8, TimingProfile::ws2812b()).unwrap();
/// assert_eq!(session.pixel_data().len(), 24);
/// ```
pub struct StripSession<const PIXEL_CAP: usize, const PULSE_CAP: usize> {
    pin: u8,
    led_count: usize,
    timing: TimingProfile,
    pixels: Vec<u8, PIXEL_CAP>,
    pulses: Vec<Pulse, PULSE_CAP>,
    frame_len: usize,
}

impl<const PIXEL_CAP: usize, const PULSE_CAP: usize> StripSession<PIXEL_CAP, PULSE_CAP> {
    /// Create zeroed buffers for `led_count` LEDs on `pin`.
    ///
    /// A `led_count` of zero is accepted and yields empty buffers.
    /// Fails when either buffer cannot hold `led_count` LEDs; nothing
    /// outlives a failed creation.
    pub fn new(
        pin: u8,
        led_count: usize,
        timing: TimingProfile,
    ) -> Result<Self, CapacityExceeded> {
        let mut pixels = Vec::new();
        pixels
            .resize_default(pixel_buffer_size(led_count))
            .map_err(|()| CapacityExceeded)?;
        let mut pulses = Vec::new();
        pulses
            .resize_default(pulse_buffer_size(led_count))
            .map_err(|()| CapacityExceeded)?;

        Ok(Self {
            pin,
            led_count,
            timing,
            pixels,
            pulses,
            frame_len: 0,
        })
    }

    /// Output line this session was created for.
    pub const fn pin(&self) -> u8 {
        self.pin
    }

    /// Number of LEDs the buffers are sized for.
    pub const fn led_count(&self) -> usize {
        self.led_count
    }

    /// Timing profile frames are encoded with.
    pub const fn timing(&self) -> &TimingProfile {
        &self.timing
    }

    /// Channel bytes of the current frame (R, G, B per LED).
    pub fn pixel_data(&self) -> &[u8] {
        &self.pixels
    }

    /// The full pulse buffer, including entries the last load did not
    /// rewrite.
    pub fn pulse_data(&self) -> &[Pulse] {
        &self.pulses
    }

    /// Pulse train of the most recently loaded frame.
    pub fn frame_pulses(&self) -> &[Pulse] {
        &self.pulses[..self.frame_len]
    }

    /// Load a frame of raw channel bytes and encode it.
    ///
    /// At most `3 * led_count` bytes are copied; anything longer is
    /// silently truncated. A shorter frame leaves the trailing bytes of
    /// the previous frame in place, so those LEDs re-show their last
    /// value, and the matching pulse entries are not rewritten. Returns
    /// the pulse train for the copied prefix.
    pub fn load(&mut self, data: &[u8]) -> &[Pulse] {
        let copy_len = data.len().min(self.pixels.len());
        self.pixels[..copy_len].copy_from_slice(&data[..copy_len]);
        self.encode_prefix(copy_len)
    }

    /// Load a frame of RGB colors; same truncation and carry-over
    /// rules as [`load`](Self::load).
    pub fn load_colors(&mut self, colors: &[RGB8]) -> &[Pulse] {
        let led_len = colors.len().min(self.led_count);
        for (chunk, color) in self.pixels[..led_len * 3]
            .chunks_exact_mut(3)
            .zip(colors)
        {
            chunk[0] = color.r;
            chunk[1] = color.g;
            chunk[2] = color.b;
        }
        self.encode_prefix(led_len * 3)
    }

    fn encode_prefix(&mut self, copy_len: usize) -> &[Pulse] {
        self.frame_len =
            encoder::encode_into(&self.pixels[..copy_len], &self.timing, &mut self.pulses);
        &self.pulses[..self.frame_len]
    }
}
