//! Behavior constants.
//!
//! Every number the controller uses lives here so a run can be retuned from
//! a config file.  The defaults reproduce the reference store.

use crate::error::{BehaviorError, BehaviorResult};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BehaviorTuning {
    // ── Checkout ──────────────────────────────────────────────────────────
    /// Distance between consecutive queue slots.
    pub queue_spacing:         f32,
    /// Seconds a customer spends being served.
    pub checkout_secs:         f32,

    // ── Dwell ─────────────────────────────────────────────────────────────
    /// Aisle browse time is drawn uniformly from this range (seconds).
    pub browse_secs:           (f32, f32),
    /// Pause at the till for customers without a basket.
    pub checkout_dwell_secs:   f32,
    /// Pause at the exit before the journey ends.
    pub exit_dwell_secs:       f32,

    // ── Stuck recovery ────────────────────────────────────────────────────
    /// Seconds on one waypoint before a lateral nudge is tried.
    pub nudge_after_secs:      f32,
    /// Seconds on one waypoint before it is skipped.
    pub escape_after_secs:     f32,
    /// Mood lost on every forced skip.
    pub escape_mood_penalty:   f32,

    // ── Mood ──────────────────────────────────────────────────────────────
    /// Queue wait tolerated before mood starts to drop.
    pub patience_secs:         f32,
    /// Mood points lost per second once patience runs out.
    pub mood_decay_per_sec:    f32,

    // ── Item discovery ────────────────────────────────────────────────────
    /// Discovery odds per second with no clue.
    pub discovery_base:        f32,
    /// Extra odds per second of clue level.
    pub discovery_per_clue:    f32,

    // ── Arrival radii ─────────────────────────────────────────────────────
    pub arrive_radius:         f32,
    /// Distance from the checkout waypoint at which a shopper joins the queue.
    pub queue_join_radius:     f32,
    /// Distance from a queue slot that counts as standing in it.
    pub slot_radius:           f32,
    /// Collision sphere radius of a customer.
    pub agent_radius:          f32,

    // ── Journey draws ─────────────────────────────────────────────────────
    pub speed_range:           (f32, f32),
    pub bounciness_range:      (f32, f32),
    /// Inclusive bounds on shopping list length.
    pub list_len:              (usize, usize),

    // ── Policy switches ───────────────────────────────────────────────────
    /// Return baskets to the stack after checkout.  `false` lets the stack
    /// run dry for good.
    pub replenish_baskets:     bool,
    /// Go straight to checkout once every item is found.  `false` makes the
    /// shopper walk every remaining aisle first.
    pub skip_remaining_aisles: bool,
}

impl Default for BehaviorTuning {
    fn default() -> Self {
        Self {
            queue_spacing:         1.2,
            checkout_secs:         2.5,
            browse_secs:           (1.0, 2.0),
            checkout_dwell_secs:   1.0,
            exit_dwell_secs:       3.0,
            nudge_after_secs:      3.0,
            escape_after_secs:     8.0,
            escape_mood_penalty:   10.0,
            patience_secs:         3.0,
            mood_decay_per_sec:    5.0,
            discovery_base:        0.3,
            discovery_per_clue:    0.5,
            arrive_radius:         0.1,
            queue_join_radius:     0.5,
            slot_radius:           0.05,
            agent_radius:          0.5,
            speed_range:           (1.5, 2.5),
            bounciness_range:      (0.15, 0.25),
            list_len:              (2, 7),
            replenish_baskets:     true,
            skip_remaining_aisles: true,
        }
    }
}

impl BehaviorTuning {
    /// Discovery probability for one tick at `clue_level`.
    #[inline]
    pub fn discovery_chance(&self, clue_level: f32, dt: f32) -> f32 {
        (self.discovery_base + clue_level * self.discovery_per_clue).min(1.0) * dt
    }

    /// Reject values that would break the controller's invariants.
    pub fn validate(&self) -> BehaviorResult<()> {
        let non_negative = [
            ("queue_spacing", self.queue_spacing),
            ("checkout_secs", self.checkout_secs),
            ("checkout_dwell_secs", self.checkout_dwell_secs),
            ("exit_dwell_secs", self.exit_dwell_secs),
            ("nudge_after_secs", self.nudge_after_secs),
            ("escape_mood_penalty", self.escape_mood_penalty),
            ("patience_secs", self.patience_secs),
            ("mood_decay_per_sec", self.mood_decay_per_sec),
            ("discovery_base", self.discovery_base),
            ("discovery_per_clue", self.discovery_per_clue),
            ("agent_radius", self.agent_radius),
        ];
        for (field, v) in non_negative {
            if !v.is_finite() || v < 0.0 {
                return Err(invalid(field, format!("must be a finite value >= 0, got {v}")));
            }
        }

        let positive = [
            ("escape_after_secs", self.escape_after_secs),
            ("arrive_radius", self.arrive_radius),
            ("queue_join_radius", self.queue_join_radius),
            ("slot_radius", self.slot_radius),
        ];
        for (field, v) in positive {
            if !v.is_finite() || v <= 0.0 {
                return Err(invalid(field, format!("must be a finite value > 0, got {v}")));
            }
        }

        for (field, (lo, hi)) in [
            ("browse_secs", self.browse_secs),
            ("speed_range", self.speed_range),
            ("bounciness_range", self.bounciness_range),
        ] {
            if !lo.is_finite() || !hi.is_finite() || lo < 0.0 || lo > hi {
                return Err(invalid(field, format!("bad range ({lo}, {hi})")));
            }
        }
        if self.speed_range.0 <= 0.0 {
            return Err(invalid("speed_range", "customers must be able to move".into()));
        }

        let (lo, hi) = self.list_len;
        if lo == 0 || lo > hi {
            return Err(invalid("list_len", format!("bad range ({lo}, {hi})")));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> BehaviorError {
    BehaviorError::InvalidTuning { field, reason }
}
