//! Deterministic per-agent RNG wrapper.
//!
//! # Determinism strategy
//!
//! Each agent gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//! Within the engine, randomized property start values are the only consumer,
//! so two runs with the same seed and declaration order see identical start
//! values.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-agent deterministic RNG.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform `f32` in the closed interval between `a` and `b`.
    ///
    /// The endpoints may be given in either order; equal endpoints return
    /// that value without consuming randomness.
    pub fn uniform_f32(&mut self, a: f32, b: f32) -> f32 {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        if lo == hi || !lo.is_finite() || !hi.is_finite() {
            return lo;
        }
        // Blend rather than `lo + t * (hi - lo)`: the span may overflow f32.
        let t: f32 = self.0.gen_range(0.0..=1.0);
        (lo * (1.0 - t) + hi * t).clamp(lo, hi)
    }

    /// Uniform `i32` in the closed interval between `a` and `b` (either order).
    pub fn uniform_i32(&mut self, a: i32, b: i32) -> i32 {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        self.0.gen_range(lo..=hi)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
