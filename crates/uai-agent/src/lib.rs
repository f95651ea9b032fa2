//! `uai-agent` — agents and the per-tick behavior selection loop.
//!
//! # Selection with commitment hysteresis
//!
//! ```text
//! on tick:
//!   best, best_score = none, 0
//!   for b in behaviors (registration order, removed slots skipped):
//!     score = b.evaluate() + (b is active ? commitment_bonus : 0)
//!     if score > best_score: best, best_score = b, score     ← strict
//!   if best: active = best
//!   if active: active.execute_action()                       ← every tick
//! ```
//!
//! The bonus is a flat bias in favour of whatever is already running.  Two
//! behaviors whose raw scores oscillate within `commitment_bonus` of each
//! other do not flip-flop.
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`agent`]    | `Agent`: registries, `tick`, `tick_with`              |
//! | [`builder`]  | `AgentBuilder`                                        |
//! | [`observer`] | `AgentObserver` hooks, `NoopObserver`                 |
//! | [`error`]    | `AgentError`, `AgentResult<T>`                        |
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                  |
//! |-----------|---------------------------------------------------------|
//! | `serde`   | Serde derives on config, property specs and curves.     |
//! | `fx-hash` | FxHash for the property name index.                     |

pub mod agent;
pub mod builder;
pub mod error;
pub mod observer;

#[cfg(test)]
mod tests;

pub use agent::Agent;
pub use builder::AgentBuilder;
pub use error::{AgentError, AgentResult};
pub use observer::{AgentObserver, NoopObserver};
