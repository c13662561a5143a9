//! Deterministic per-agent and simulation-level RNG wrappers.
//!
//! # Determinism strategy
//!
//! Each customer gets its own independent `SmallRng` seeded by:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space.
//! This means:
//!
//! - Agents never share RNG state, so one agent's dice rolls cannot shift
//!   another agent's outcome.
//! - Growing the population appends new streams without disturbing the
//!   streams of existing agents.
//!
//! # Injectable randomness
//!
//! Everything that draws random numbers (journey planning, item discovery,
//! stuck nudges, shopping lists) is written against [`RandomSource`] rather
//! than a concrete generator.  Production code passes an [`AgentRng`] or
//! [`SimRng`]; tests pass scripted sources to force specific branches.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── RandomSource ──────────────────────────────────────────────────────────────

/// The minimal randomness interface consumed by the simulation.
///
/// Only [`unit`][Self::unit] is required; the other methods derive from it
/// but may be overridden by generators with better native primitives.
pub trait RandomSource {
    /// Uniform sample in `[0, 1)`.
    fn unit(&mut self) -> f32;

    /// Uniform sample in `[lo, hi)`.  Returns `lo` when the range is empty.
    fn range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        if hi <= lo {
            return lo;
        }
        lo + (hi - lo) * self.unit()
    }

    /// Uniform index in `0..n`.  Returns `0` when `n == 0`.
    fn below(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        ((self.unit() * n as f32) as usize).min(n - 1)
    }

    /// `true` with probability `p`; `p` outside `[0, 1]` saturates.
    fn chance(&mut self, p: f32) -> bool {
        if p >= 1.0 {
            return true;
        }
        if p <= 0.0 {
            return false;
        }
        self.unit() < p
    }
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG.
///
/// Created once per customer at simulation init and stored in a parallel
/// `Vec<AgentRng>` alongside the population.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}

impl RandomSource for AgentRng {
    #[inline]
    fn unit(&mut self) -> f32 {
        self.0.r#gen()
    }

    #[inline]
    fn below(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.0.gen_range(0..n)
    }

    #[inline]
    fn chance(&mut self, p: f32) -> bool {
        self.0.gen_bool(f64::from(p).clamp(0.0, 1.0))
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG for global operations (worker phases, visitor
/// budgets, initial spawn jitter).
///
/// Used only in single-threaded contexts.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// A separate deterministic stream, seeded by the next draw from this
    /// one mixed with `offset`.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn unit(&mut self) -> f32 {
        self.0.r#gen()
    }

    #[inline]
    fn below(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.0.gen_range(0..n)
    }

    #[inline]
    fn chance(&mut self, p: f32) -> bool {
        self.0.gen_bool(f64::from(p).clamp(0.0, 1.0))
    }
}
