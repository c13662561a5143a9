//! Customer agent state.
//!
//! A `Customer` is plain data.  Every field is `pub` so the controller in
//! `gs-behavior` can drive it and read-only observers can snapshot it.

use std::fmt;

use gs_core::{AgentId, BasketId, LaneId, Vec3};
use gs_inventory::ShoppingItem;

use crate::journey::Journey;
use crate::mood::Mood;

// ── CustomerState ─────────────────────────────────────────────────────────────

/// Lifecycle phase.
///
/// ```text
///   GetBasket → Shopping → Queueing → CheckingOut → Exiting ─┐
///       ▲                                                     │
///       └──────────────────── new journey ────────────────────┘
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CustomerState {
    #[default]
    GetBasket,
    Shopping,
    Queueing,
    CheckingOut,
    Exiting,
}

impl CustomerState {
    /// `true` for the two states that put a customer in a lane queue.
    #[inline]
    pub fn is_in_queue(self) -> bool {
        matches!(self, CustomerState::Queueing | CustomerState::CheckingOut)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CustomerState::GetBasket   => "get_basket",
            CustomerState::Shopping    => "shopping",
            CustomerState::Queueing    => "queueing",
            CustomerState::CheckingOut => "checking_out",
            CustomerState::Exiting     => "exiting",
        }
    }
}

impl fmt::Display for CustomerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Timers ────────────────────────────────────────────────────────────────────

/// A pause at one waypoint (aisle browse, checkout, or exit).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dwell {
    /// Waypoint index the pause belongs to; `None` when not dwelling.
    pub at:    Option<usize>,
    /// Seconds left.
    pub timer: f32,
}

impl Dwell {
    pub fn clear(&mut self) {
        *self = Dwell::default();
    }
}

/// How long the customer has been chasing the same waypoint.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StuckTracker {
    /// Waypoint index being tracked; `None` before the first observation.
    pub waypoint: Option<usize>,
    pub timer:    f32,
    /// Lateral nudges attempted on this approach.
    pub nudges:   u8,
}

impl StuckTracker {
    pub fn reset_to(&mut self, waypoint: Option<usize>) {
        *self = StuckTracker { waypoint, timer: 0.0, nudges: 0 };
    }
}

// ── JourneyPlan ───────────────────────────────────────────────────────────────

/// Everything randomly drawn for one lap.
#[derive(Clone, Debug)]
pub struct JourneyPlan {
    pub journey:       Journey,
    pub shopping_list: Vec<ShoppingItem>,
    pub lane:          LaneId,
    pub spawn:         Vec3,
    pub speed:         f32,
    pub bounciness:    f32,
}

// ── Customer ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Customer {
    pub id:              AgentId,
    pub position:        Vec3,
    pub state:           CustomerState,
    pub journey:         Journey,

    // ── Shopping ──────────────────────────────────────────────────────────
    /// Fixed for the journey.
    pub shopping_list:   Vec<ShoppingItem>,
    /// Always a prefix of `shopping_list`.
    pub items_collected: Vec<ShoppingItem>,
    /// Seconds spent at the current aisle; drives discovery odds.
    pub clue_level:      f32,

    // ── Checkout ──────────────────────────────────────────────────────────
    /// Lane chosen for this journey.
    pub lane:            LaneId,
    /// Position in the lane queue as of the last registry rebuild.
    pub queue_index:     Option<usize>,
    pub checkout_timer:  f32,

    // ── Timers ────────────────────────────────────────────────────────────
    pub dwell:           Dwell,
    pub stuck:           StuckTracker,
    /// Seconds without reaching a new waypoint; queue waits count.
    pub patience:        f32,

    // ── Personality ───────────────────────────────────────────────────────
    pub mood:            Mood,
    /// Walking speed in units per second.
    pub speed:           f32,
    /// Magnitude of an unsticking nudge.
    pub bounciness:      f32,

    pub basket:          Option<BasketId>,
    /// Laps begun so far, including the current one.
    pub journeys_started: u32,
}

impl Customer {
    /// A customer with no journey yet.  The first tick will plan one.
    pub fn new(id: AgentId) -> Self {
        Self {
            id,
            position:         Vec3::ZERO,
            state:            CustomerState::GetBasket,
            journey:          Journey::empty(),
            shopping_list:    Vec::new(),
            items_collected:  Vec::new(),
            clue_level:       0.0,
            lane:             LaneId::INVALID,
            queue_index:      None,
            checkout_timer:   0.0,
            dwell:            Dwell::default(),
            stuck:            StuckTracker::default(),
            patience:         0.0,
            mood:             Mood::FULL,
            speed:            0.0,
            bounciness:       0.0,
            basket:           None,
            journeys_started: 0,
        }
    }

    #[inline]
    pub fn basket_attached(&self) -> bool {
        self.basket.is_some()
    }

    /// Items still to find.
    pub fn items_remaining(&self) -> usize {
        self.shopping_list.len().saturating_sub(self.items_collected.len())
    }

    pub fn has_all_items(&self) -> bool {
        self.items_remaining() == 0
    }

    /// The next unfound list item.
    pub fn next_item(&self) -> Option<&ShoppingItem> {
        self.shopping_list.get(self.items_collected.len())
    }

    /// Reset every per-journey field and adopt `plan`.
    ///
    /// Returns the basket the customer was still holding, if any, so the
    /// caller can put it back.
    pub fn begin_journey(&mut self, plan: JourneyPlan) -> Option<BasketId> {
        let JourneyPlan { journey, shopping_list, lane, spawn, speed, bounciness } = plan;
        self.position         = spawn;
        self.state            = CustomerState::GetBasket;
        self.journey          = journey;
        self.shopping_list    = shopping_list;
        self.items_collected.clear();
        self.clue_level       = 0.0;
        self.lane             = lane;
        self.queue_index      = None;
        self.checkout_timer   = 0.0;
        self.dwell.clear();
        self.stuck            = StuckTracker::default();
        self.patience         = 0.0;
        self.mood             = Mood::FULL;
        self.speed            = speed;
        self.bounciness       = bounciness;
        self.journeys_started += 1;
        self.basket.take()
    }
}
