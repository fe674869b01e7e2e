#![no_std]

pub mod controller;
pub mod encoder;
pub mod session;
pub mod shared;
pub mod timing;
pub mod transmit;

pub use controller::{SHOW_TIMEOUT, StripController, StripError};
pub use encoder::{Pulse, encode_into, pulse_count};
pub use session::{CapacityExceeded, StripSession, pixel_buffer_size, pulse_buffer_size};
pub use shared::SharedStrip;
pub use timing::{TICK_NS, TimingProfile, ns_to_ticks};
pub use transmit::{ChannelConfig, PulseChannel};

pub use embassy_time::Duration;
pub use smart_leds::RGB8;
