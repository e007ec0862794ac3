//! Unit tests for reef-motion.

use reef_core::{MotionLimits, Vec2};

use crate::{AccelCarryover, Integrator};

const LIMITS: MotionLimits = MotionLimits { max_speed: 1.5, max_accel: 0.1 };

// ── Step order ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod step {
    use super::*;

    #[test]
    fn small_acceleration_passes_through() {
        let integ = Integrator::default();
        let (mut p, mut v, mut a) = (Vec2::ZERO, Vec2::ZERO, Vec2::new(0.05, 0.0));
        let applied = integ.step(&mut p, &mut v, &mut a, LIMITS);
        assert_eq!(applied, Vec2::new(0.05, 0.0));
        assert_eq!(p, Vec2::new(0.05, 0.0));
        assert!((v.x - 0.05 * 0.99).abs() < 1e-15);
        assert_eq!(a, Vec2::new(0.025, 0.0));
    }

    #[test]
    fn acceleration_clamped_before_use() {
        let integ = Integrator::default();
        let (mut p, mut v, mut a) = (Vec2::ZERO, Vec2::ZERO, Vec2::new(0.0, 10.0));
        let applied = integ.step(&mut p, &mut v, &mut a, LIMITS);
        assert!((applied.magnitude() - 0.1).abs() < 1e-12);
        assert!((p.y - 0.1).abs() < 1e-12);
    }

    #[test]
    fn velocity_clamped_before_position_update() {
        let integ = Integrator::default();
        let (mut p, mut v, mut a) = (Vec2::ZERO, Vec2::new(5.0, 0.0), Vec2::ZERO);
        integ.step(&mut p, &mut v, &mut a, LIMITS);
        assert!((p.x - 1.5).abs() < 1e-12);
        assert!((v.x - 1.5 * 0.99).abs() < 1e-12);
    }

    #[test]
    fn reset_carryover_zeroes_accumulator() {
        let integ = Integrator::new(AccelCarryover::Reset, 0.99);
        let (mut p, mut v, mut a) = (Vec2::ZERO, Vec2::ZERO, Vec2::new(1.0, 1.0));
        integ.step(&mut p, &mut v, &mut a, LIMITS);
        assert_eq!(a, Vec2::ZERO);
    }

    #[test]
    fn zero_everything_stays_put() {
        let integ = Integrator::default();
        let (mut p, mut v, mut a) = (Vec2::new(3.0, 4.0), Vec2::ZERO, Vec2::ZERO);
        integ.step(&mut p, &mut v, &mut a, LIMITS);
        assert_eq!(p, Vec2::new(3.0, 4.0));
        assert!(v.is_finite() && a.is_finite());
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use super::*;

    #[test]
    fn validate_ranges() {
        assert!(Integrator::default().validate().is_ok());
        assert!(Integrator::new(AccelCarryover::Reset, 1.0).validate().is_ok());
        assert!(Integrator::new(AccelCarryover::Damped(1.5), 0.99).validate().is_err());
        assert!(Integrator::new(AccelCarryover::Damped(0.5), -0.1).validate().is_err());
        assert!(Integrator::new(AccelCarryover::Damped(0.5), f64::NAN).validate().is_err());
    }
}

// ── Bounds (property) ─────────────────────────────────────────────────────────

#[cfg(test)]
mod bounds {
    use proptest::prelude::*;

    use super::*;

    fn vec2(span: f64) -> impl Strategy<Value = Vec2> {
        (-span..span, -span..span).prop_map(|(x, y)| Vec2::new(x, y))
    }

    proptest! {
        #[test]
        fn speed_and_applied_accel_never_exceed_limits(
            start_v   in vec2(50.0),
            accel     in vec2(50.0),
            max_speed in 0.5f64..3.0,
            max_accel in 0.01f64..0.5,
            ticks     in 1usize..20,
            reset     in any::<bool>(),
        ) {
            let carry = if reset { AccelCarryover::Reset } else { AccelCarryover::Damped(0.5) };
            let integ = Integrator::new(carry, 0.99);
            let limits = MotionLimits { max_speed, max_accel };
            let (mut p, mut v, mut a) = (Vec2::ZERO, start_v, accel);
            for _ in 0..ticks {
                let applied = integ.step(&mut p, &mut v, &mut a, limits);
                prop_assert!(applied.magnitude() <= max_accel + 1e-9);
                prop_assert!(v.magnitude() <= max_speed + 1e-9);
                a += accel;
            }
        }
    }
}
