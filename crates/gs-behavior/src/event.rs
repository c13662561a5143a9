//! Discrete events emitted by the controller.
//!
//! Positions change every tick and are read from snapshots; everything else
//! a renderer or stats layer cares about is announced here, in the order it
//! happened within the tick.

use gs_core::{AgentId, BasketId, LaneId};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentEvent {
    /// Took a basket from the stack and attached it.
    BasketPickedUp { agent: AgentId, basket: BasketId },
    /// Reached the basket stack but it was empty; shopping without one.
    BasketShortage { agent: AgentId },
    /// Detached the basket.  `returned` is `true` if it went back to the stack.
    BasketReleased { agent: AgentId, basket: BasketId, returned: bool },
    /// Appended the next list item.  `collected` is the new count.
    ItemFound { agent: AgentId, item: String, collected: usize },
    /// Switched from shopping to queueing.
    QueueJoined { agent: AgentId, lane: LaneId },
    /// Reached the front of an idle lane and started being served.
    CheckoutStarted { agent: AgentId, lane: LaneId },
    /// Finished being served.
    CheckoutFinished { agent: AgentId, lane: LaneId, items: usize },
    /// Lateral unsticking nudge.  `applied` is `false` if it would collide.
    StuckNudge { agent: AgentId, waypoint: usize, applied: bool },
    /// Gave up on a waypoint and skipped it.
    StuckEscape { agent: AgentId, waypoint: usize },
    /// Could not reach its queue slot and left the lane.
    QueueAbandoned { agent: AgentId, lane: LaneId },
    /// Started a new lap.  `journey` counts laps from 1.
    JourneyReset { agent: AgentId, journey: u32 },
}

impl AgentEvent {
    /// The customer the event concerns.
    pub fn agent(&self) -> AgentId {
        match *self {
            AgentEvent::BasketPickedUp { agent, .. }
            | AgentEvent::BasketShortage { agent }
            | AgentEvent::BasketReleased { agent, .. }
            | AgentEvent::ItemFound { agent, .. }
            | AgentEvent::QueueJoined { agent, .. }
            | AgentEvent::CheckoutStarted { agent, .. }
            | AgentEvent::CheckoutFinished { agent, .. }
            | AgentEvent::StuckNudge { agent, .. }
            | AgentEvent::StuckEscape { agent, .. }
            | AgentEvent::QueueAbandoned { agent, .. }
            | AgentEvent::JourneyReset { agent, .. } => agent,
        }
    }

    /// Short machine-friendly name.
    pub fn name(&self) -> &'static str {
        match self {
            AgentEvent::BasketPickedUp { .. }   => "basket_picked_up",
            AgentEvent::BasketShortage { .. }   => "basket_shortage",
            AgentEvent::BasketReleased { .. }   => "basket_released",
            AgentEvent::ItemFound { .. }        => "item_found",
            AgentEvent::QueueJoined { .. }      => "queue_joined",
            AgentEvent::CheckoutStarted { .. }  => "checkout_started",
            AgentEvent::CheckoutFinished { .. } => "checkout_finished",
            AgentEvent::StuckNudge { .. }       => "stuck_nudge",
            AgentEvent::StuckEscape { .. }      => "stuck_escape",
            AgentEvent::QueueAbandoned { .. }   => "queue_abandoned",
            AgentEvent::JourneyReset { .. }     => "journey_reset",
        }
    }
}
