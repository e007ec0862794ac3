//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter advanced once per
//! fixed step.  The mapping to simulated seconds is held in `SimClock`:
//!
//!   elapsed_secs = tick / tick_hz
//!
//! The reference rate is 60 Hz.  Integration itself is per-tick (velocity is
//! in units per tick), so the rate only affects wall-clock pacing and the
//! phase of the idle wander force.

use std::fmt;
use std::time::Duration;

use crate::{ReefError, ReefResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between tick counts and simulated seconds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Fixed steps per simulated second.
    pub tick_hz: u32,
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(tick_hz: u32) -> Self {
        Self {
            tick_hz: tick_hz.max(1),
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_tick.0 as f64 / self.tick_hz as f64
    }

    /// Wall-clock period of one tick, for driving a periodic timer.
    #[inline]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_hz as f64)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2}s @ {} Hz)", self.current_tick, self.elapsed_secs(), self.tick_hz)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Fixed steps per second.  Default: 60.
    pub tick_hz: u32,

    /// Ticks simulated by `Sim::run`.  Servers that step forever drive the
    /// sim tick-by-tick instead and ignore this.
    pub total_ticks: u64,

    /// Master RNG seed.  `Sim` draws nothing itself: pass this to the
    /// population builder (`reef_level::build_population`,
    /// `AgentRngs::seeded`) so that the config names the run's one seed.
    /// The same seed always produces identical spawns.
    pub seed: u64,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    pub num_threads: Option<usize>,

    /// Call the snapshot observer every N ticks.  1 = every tick; 0 = never.
    pub snapshot_interval_ticks: u64,

    /// Side length of one spatial-index cell in world units.
    pub cell_size: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_hz:                 60,
            total_ticks:             u64::MAX,
            seed:                    0,
            num_threads:             None,
            snapshot_interval_ticks: 1,
            cell_size:               100.0,
        }
    }
}

impl SimConfig {
    /// The tick at which `Sim::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_hz)
    }

    /// Reject values the tick loop cannot run with.
    pub fn validate(&self) -> ReefResult<()> {
        if self.tick_hz == 0 {
            return Err(ReefError::Config("tick_hz must be positive".into()));
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ReefError::Config(format!(
                "cell_size must be a positive finite number, got {}",
                self.cell_size
            )));
        }
        Ok(())
    }
}
