//! Unit tests for reef-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, SpeciesId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel_is_default_agent() {
        assert_eq!(AgentId::default(), AgentId::INVALID);
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(SpeciesId::default(), SpeciesId(0));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
        assert_eq!(SpeciesId(72).to_string(), "SpeciesId(72)");
    }
}

#[cfg(test)]
mod vec2 {
    use crate::{Rect, Vec2};

    #[test]
    fn normalize_zero_is_zero_not_nan() {
        let n = Vec2::ZERO.normalize();
        assert_eq!(n, Vec2::ZERO);
        assert!(n.is_finite());
    }

    #[test]
    fn normalize_has_unit_length() {
        let n = Vec2::new(3.0, 4.0).normalize();
        assert!((n.magnitude() - 1.0).abs() < 1e-12);
        assert!((n.x - 0.6).abs() < 1e-12);
    }

    #[test]
    fn limit_clamps_only_when_longer() {
        let v = Vec2::new(3.0, 4.0);
        assert_eq!(v.limit(10.0), v);
        let l = v.limit(1.0);
        assert!((l.magnitude() - 1.0).abs() < 1e-12);
        assert_eq!(Vec2::ZERO.limit(0.0), Vec2::ZERO);
    }

    #[test]
    fn operators() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(0.5, -1.0);
        assert_eq!(a + b, Vec2::new(1.5, 1.0));
        assert_eq!(a - b, Vec2::new(0.5, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
        let mut c = a;
        c += b;
        c *= 2.0;
        assert_eq!(c, Vec2::new(3.0, 2.0));
        let total: Vec2 = [a, b, a].into_iter().sum();
        assert_eq!(total, Vec2::new(2.5, 3.0));
    }

    #[test]
    fn distance() {
        assert_eq!(Vec2::new(0.0, 0.0).distance(Vec2::new(3.0, 4.0)), 5.0);
        assert_eq!(Vec2::new(1.0, 1.0).distance_sq(Vec2::new(2.0, 2.0)), 2.0);
    }

    #[test]
    fn rect_contains_is_inclusive() {
        let r = Rect::new(-50.0, -50.0, 100.0, 80.0);
        assert!(r.contains(Vec2::new(-50.0, 80.0)));
        assert!(!r.contains(Vec2::new(-50.1, 0.0)));
        assert_eq!(r.width(), 150.0);
        assert_eq!(r.height(), 130.0);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn clock_elapsed_at_60hz() {
        let mut clock = SimClock::new(60);
        assert_eq!(clock.elapsed_secs(), 0.0);
        for _ in 0..90 {
            clock.advance();
        }
        assert!((clock.elapsed_secs() - 1.5).abs() < 1e-12);
        assert_eq!(clock.tick_interval().as_micros(), 16_666);
    }

    #[test]
    fn zero_hz_clock_is_clamped() {
        let clock = SimClock::new(0);
        assert_eq!(clock.tick_hz, 1);
    }

    #[test]
    fn default_config_is_reference() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.tick_hz, 60);
        assert_eq!(cfg.cell_size, 100.0);
        assert_eq!(cfg.snapshot_interval_ticks, 1);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let bad_hz = SimConfig { tick_hz: 0, ..SimConfig::default() };
        assert!(bad_hz.validate().is_err());
        let bad_cell = SimConfig { cell_size: 0.0, ..SimConfig::default() };
        assert!(bad_cell.validate().is_err());
        let nan_cell = SimConfig { cell_size: f64::NAN, ..SimConfig::default() };
        assert!(nan_cell.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, SimRng, Vec2};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            assert_eq!(r1.unit(), r2.unit());
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        assert_ne!(r0.unit(), r1.unit(), "seeds for adjacent agents should diverge");
    }

    #[test]
    fn span_in_bounds_and_empty_span_pins() {
        let mut rng = AgentRng::new(0, AgentId(0));
        for _ in 0..1000 {
            let v = rng.span(1.0, 2.0);
            assert!((1.0..2.0).contains(&v));
        }
        assert_eq!(rng.span(0.5, 0.5), 0.5);
    }

    #[test]
    fn jitter_is_centered() {
        let mut rng = AgentRng::new(9, AgentId(3));
        for _ in 0..1000 {
            let j = rng.jitter(0.005);
            assert!(j.x.abs() <= 0.005 && j.y.abs() <= 0.005);
        }
    }

    #[test]
    fn sim_rng_point_and_choose() {
        let mut rng = SimRng::new(7);
        for _ in 0..100 {
            let p = rng.point_in(Vec2::new(0.0, 10.0), Vec2::new(5.0, 20.0));
            assert!((0.0..5.0).contains(&p.x) && (10.0..20.0).contains(&p.y));
        }
        assert!(rng.choose::<u32>(&[]).is_none());
        assert_eq!(rng.choose(&[4u32]), Some(&4));
    }
}

#[cfg(test)]
mod layer {
    use crate::Layer;

    #[test]
    fn labels() {
        assert!(Layer::Background.is_background());
        assert!(!Layer::Interactive.is_background());
        assert_eq!(Layer::default(), Layer::Interactive);
        assert_eq!(Layer::Background.to_string(), "background");
    }
}
