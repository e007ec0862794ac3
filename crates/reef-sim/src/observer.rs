//! Simulation observer trait for progress reporting and snapshot export.

use reef_agent::AgentStore;
use reef_core::Tick;

/// Per-tick counters handed to [`SimObserver::on_tick_end`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// Agents stepped this tick.
    pub agents:         usize,
    /// Non-empty grid cells after the rebuild.
    pub occupied_cells: usize,
    /// Agents with no neighbors at all (the ones that wandered).
    pub idle:           usize,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: {} idle of {}", summary.idle, summary.agents);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before the index rebuild.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after every agent has been integrated.
    fn on_tick_end(&mut self, _tick: Tick, _summary: &TickSummary) {}

    /// Called every `config.snapshot_interval_ticks` ticks, after
    /// `on_tick_end`.
    ///
    /// Provides read-only access to the full agent state so that sync layers
    /// can broadcast a snapshot without the sim knowing any wire format.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentStore) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
