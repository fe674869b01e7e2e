//! Hardware seam for pulse-train transmitters.

use embassy_time::Duration;

use crate::encoder::Pulse;

/// Transmit-side configuration for one output line.
///
/// The strip protocol needs the line to idle low (the idle period
/// doubles as the inter-frame reset), no carrier modulation, and no
/// replay of the train.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelConfig {
    /// Output line the pulse train is shifted onto.
    pub pin: u8,
    /// Level the line idles at between frames.
    pub idle_high: bool,
    /// Modulate the pulses onto a carrier frequency.
    pub carrier: bool,
    /// Replay the pulse train continuously.
    pub looping: bool,
}

impl ChannelConfig {
    /// Configuration for a strip data line on `pin`.
    pub const fn for_pin(pin: u8) -> Self {
        Self {
            pin,
            idle_high: false,
            carrier: false,
            looping: false,
        }
    }
}

/// Abstract pulse-train transmitter
///
/// Implement this trait on top of a peripheral that can emit precisely
/// timed pulse trains (e.g. the ESP32 RMT). The strip controller is
/// generic over this trait. Hardware failures are reported through the
/// associated `Error` type, never by aborting.
pub trait PulseChannel {
    /// Hardware-level failure reported by the peripheral.
    type Error;

    /// Program the peripheral for the given output configuration.
    fn configure(&mut self, config: &ChannelConfig) -> Result<(), Self::Error>;

    /// Enqueue one pulse train for transmission, non-looping.
    ///
    /// The peripheral may still be shifting bits when this returns;
    /// [`wait_idle`](Self::wait_idle) is the synchronization point.
    fn transmit(&mut self, pulses: &[Pulse]) -> Result<(), Self::Error>;

    /// Block until the enqueued train is fully on the wire, or until
    /// `timeout` elapses.
    fn wait_idle(&mut self, timeout: Duration) -> Result<(), Self::Error>;
}
