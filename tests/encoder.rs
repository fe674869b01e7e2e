mod tests {
    use ws2812_strip_driver::{Pulse, TimingProfile, encode_into, pulse_count};

    #[test]
    fn test_ws2812b_tick_values() {
        let profile = TimingProfile::ws2812b();
        assert_eq!(profile.zero_high, 14);
        assert_eq!(profile.zero_low, 36);
        assert_eq!(profile.one_high, 36);
        assert_eq!(profile.one_low, 14);
        assert_eq!(profile.reset.as_micros(), 280);
    }

    #[test]
    fn test_bit_periods_match() {
        let profile = TimingProfile::ws2812b();
        // Both symbols last 50 ticks (1.25 us at a 25 ns tick).
        assert_eq!(profile.zero_bit_period(), 50);
        assert_eq!(profile.one_bit_period(), 50);
    }

    #[test]
    fn test_pulse_count_is_eight_per_byte() {
        assert_eq!(pulse_count(0), 0);
        assert_eq!(pulse_count(1), 8);
        assert_eq!(pulse_count(3), 24);
    }

    #[test]
    fn test_encode_output_length() {
        let profile = TimingProfile::ws2812b();
        let mut out = [Pulse::default(); 40];
        assert_eq!(encode_into(&[], &profile, &mut out), 0);
        assert_eq!(encode_into(&[0xAB], &profile, &mut out), 8);
        assert_eq!(encode_into(&[0xAB, 0xCD, 0xEF], &profile, &mut out), 24);
    }

    #[test]
    fn test_encode_msb_first() {
        let profile = TimingProfile::ws2812b();
        let mut out = [Pulse::default(); 8];
        encode_into(&[0b1000_0000], &profile, &mut out);
        assert_eq!(out[0], Pulse::one(&profile));
        for pulse in &out[1..] {
            assert_eq!(*pulse, Pulse::zero(&profile));
        }
    }

    #[test]
    fn test_encode_mixed_byte() {
        let profile = TimingProfile::ws2812b();
        let zero = Pulse::zero(&profile);
        let one = Pulse::one(&profile);

        let mut out = [Pulse::default(); 8];
        encode_into(&[0b1010_0110], &profile, &mut out);
        assert_eq!(out, [one, zero, one, zero, zero, one, one, zero]);
    }

    #[test]
    fn test_encode_leaves_tail_untouched() {
        let profile = TimingProfile::ws2812b();
        let sentinel = Pulse { high: 999, low: 999 };
        let mut out = [sentinel; 16];
        encode_into(&[0xFF], &profile, &mut out);
        assert!(out[..8].iter().all(|p| *p == Pulse::one(&profile)));
        assert!(out[8..].iter().all(|p| *p == sentinel));
    }

    #[test]
    fn test_encode_deterministic() {
        let profile = TimingProfile::ws2812b();
        let bytes = [0x12, 0x34, 0x56, 0x78];
        let mut first = [Pulse::default(); 32];
        let mut second = [Pulse::default(); 32];
        encode_into(&bytes, &profile, &mut first);
        encode_into(&bytes, &profile, &mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn test_encode_custom_profile() {
        let profile = TimingProfile {
            zero_high: 1,
            zero_low: 2,
            one_high: 3,
            one_low: 4,
            reset: ws2812_strip_driver::Duration::from_micros(50),
        };
        let mut out = [Pulse::default(); 8];
        encode_into(&[0b1111_0000], &profile, &mut out);
        assert!(out[..4].iter().all(|p| p.high == 3 && p.low == 4));
        assert!(out[4..].iter().all(|p| p.high == 1 && p.low == 2));
    }
}
