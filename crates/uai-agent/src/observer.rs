//! Agent observer trait for tracing decisions and collecting statistics.

use uai_core::{BehaviorId, Tick};

/// Callbacks invoked by [`Agent::tick_with`][crate::Agent::tick_with] at key
/// points of the selection loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: switch logger
///
/// ```rust
/// use uai_agent::AgentObserver;
/// use uai_core::{BehaviorId, Tick};
///
/// struct Switches(Vec<(Tick, BehaviorId)>);
///
/// impl AgentObserver for Switches {
///     fn on_selection_changed(&mut self, tick: Tick, _from: Option<BehaviorId>, to: BehaviorId) {
///         self.0.push((tick, to));
///     }
/// }
/// ```
pub trait AgentObserver {
    /// Called before any behavior is scored.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per live behavior with its biased score (raw evaluation
    /// plus the commitment bonus if it is the active one).
    fn on_behavior_scored(&mut self, _tick: Tick, _id: BehaviorId, _name: &str, _score: f32) {}

    /// Called when the active behavior changes, before its action runs.
    fn on_selection_changed(
        &mut self,
        _tick: Tick,
        _from: Option<BehaviorId>,
        _to:   BehaviorId,
    ) {}

    /// Called after the active behavior's action (if any) has run.
    fn on_tick_end(&mut self, _tick: Tick, _active: Option<BehaviorId>) {}
}

/// An [`AgentObserver`] that does nothing.  Used by [`Agent::tick`][crate::Agent::tick].
pub struct NoopObserver;

impl AgentObserver for NoopObserver {}
