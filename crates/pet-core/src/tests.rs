//! Unit tests for pet-core primitives.

#[cfg(test)]
mod ids {
    use crate::FrameId;

    #[test]
    fn ordering_follows_raw_value() {
        assert!(FrameId(0) < FrameId(1));
        assert_eq!(FrameId(42).0, 42);
    }

    #[test]
    fn display() {
        assert_eq!(FrameId(7).to_string(), "FrameId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Point, Size};

    #[test]
    fn point_builders() {
        let p = Point::new(10, 20);
        assert_eq!(p.with_x(-5), Point::new(-5, 20));
        assert_eq!(p.with_y(99), Point::new(10, 99));
    }

    #[test]
    fn empty_sizes() {
        assert!(Size::new(0, 10).is_empty());
        assert!(Size::new(10, -1).is_empty());
        assert!(!Size::new(64, 64).is_empty());
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(-21, 3).to_string(), "(-21, 3)");
        assert_eq!(Size::new(1920, 1080).to_string(), "1920x1080");
    }
}

#[cfg(test)]
mod time {
    use crate::{PetConfig, Tick, TickClock};

    #[test]
    fn tick_ordering_and_display() {
        assert!(Tick::ZERO < Tick(1));
        assert_eq!(Tick(12).to_string(), "T12");
    }

    #[test]
    fn clock_advances() {
        let mut clock = TickClock::new(33);
        for _ in 0..30 {
            clock.advance();
        }
        assert_eq!(clock.current_tick, Tick(30));
        assert_eq!(clock.elapsed_ms(), 990);
    }

    #[test]
    fn clock_display() {
        let mut clock = TickClock::new(1_000);
        for _ in 0..61 {
            clock.advance();
        }
        assert_eq!(clock.to_string(), "T61 (01:01.000)");
    }

    #[test]
    fn config_defaults_match_thirty_hertz() {
        let config = PetConfig::default();
        assert_eq!(config.tick_interval_ms, 33);
        assert_eq!(config.end_tick(), Tick(config.total_ticks));
        assert_eq!(config.make_clock().current_tick, Tick::ZERO);
    }
}

#[cfg(test)]
mod rng {
    use crate::PetRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = PetRng::new(42);
        let mut b = PetRng::new(42);
        let xs: Vec<u32> = (0..16).map(|_| a.gen_range(0..1_000)).collect();
        let ys: Vec<u32> = (0..16).map(|_| b.gen_range(0..1_000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn percent_in_range() {
        let mut rng = PetRng::new(7);
        for _ in 0..1_000 {
            assert!(rng.percent() < 100);
        }
    }
}
