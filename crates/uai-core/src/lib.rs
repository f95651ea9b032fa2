//! `uai-core` — foundational types for the utility-AI decision engine.
//!
//! This crate is a dependency of every other `uai-*` crate.  It intentionally
//! has no `uai-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `PropertyId`, `BehaviorId`                 |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `AgentRng` (per-agent, seeded)                        |
//! | [`config`]      | `AgentConfig` (commitment bonus, RNG seed)            |
//! | [`math`]        | `clamp01`, `lerp`, `inverse_lerp`                     |
//! | [`error`]       | `UaiError`, `UaiResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the configuration types. |

pub mod config;
pub mod error;
pub mod ids;
pub mod math;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::AgentConfig;
pub use error::{UaiError, UaiResult};
pub use ids::{AgentId, BehaviorId, PropertyId};
pub use math::{clamp01, inverse_lerp, lerp};
pub use rng::AgentRng;
pub use time::Tick;
