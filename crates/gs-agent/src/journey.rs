//! One lap through the store as an ordered waypoint list.
//!
//! # Layout
//!
//! ```text
//!   index:  0        1      aisle_start ..  len-3   len-2      len-1
//!           basket   entry  aisle … aisle           checkout   exit
//! ```
//!
//! The cursor `current` always stays in `[0, len]`.  `current == len` means
//! the lap is over and the controller must start a new one.

use gs_core::Vec3;

/// What the waypoint at some index is for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WaypointKind {
    /// Index 0: the basket stack.
    Basket,
    /// Walk-through point with no dwell (the entry waypoint).
    Transit,
    /// Browse here and look for list items.
    Aisle,
    /// Second-to-last: the checkout lane.
    Checkout,
    /// Last: the exit.
    Exit,
    /// Past the end; the journey is over.
    Finished,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Journey {
    waypoints:   Vec<Vec3>,
    current:     usize,
    aisle_start: usize,
}

impl Journey {
    /// A journey over `waypoints` whose aisle section begins at
    /// `aisle_start`.  The cursor starts at 0.
    pub fn new(waypoints: Vec<Vec3>, aisle_start: usize) -> Self {
        Self { waypoints, current: 0, aisle_start }
    }

    /// An empty journey.  Already finished, so the first tick replans it.
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn waypoints(&self) -> &[Vec3] {
        &self.waypoints
    }

    /// The waypoint the cursor points at, `None` once finished.
    #[inline]
    pub fn target(&self) -> Option<Vec3> {
        self.waypoints.get(self.current).copied()
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.current >= self.waypoints.len()
    }

    /// Index of the checkout waypoint.
    #[inline]
    pub fn checkout_index(&self) -> usize {
        self.waypoints.len().saturating_sub(2)
    }

    /// Index of the exit waypoint.
    #[inline]
    pub fn exit_index(&self) -> usize {
        self.waypoints.len().saturating_sub(1)
    }

    /// Index range of the aisle waypoints.
    pub fn aisle_range(&self) -> std::ops::Range<usize> {
        let end = self.checkout_index();
        self.aisle_start.min(end)..end
    }

    /// Classify waypoint `index`.
    pub fn kind_at(&self, index: usize) -> WaypointKind {
        let len = self.waypoints.len();
        if index >= len {
            WaypointKind::Finished
        } else if index + 1 == len {
            WaypointKind::Exit
        } else if index + 2 == len {
            WaypointKind::Checkout
        } else if index == 0 {
            WaypointKind::Basket
        } else if self.aisle_range().contains(&index) {
            WaypointKind::Aisle
        } else {
            WaypointKind::Transit
        }
    }

    /// Classify the current waypoint.
    #[inline]
    pub fn kind(&self) -> WaypointKind {
        self.kind_at(self.current)
    }

    /// Move the cursor forward by one, never past `len`.
    #[inline]
    pub fn advance(&mut self) {
        self.current = (self.current + 1).min(self.waypoints.len());
    }

    /// Skip the remaining aisles.
    pub fn jump_to_checkout(&mut self) {
        self.current = self.checkout_index();
    }

    /// Jump to the exit waypoint.
    pub fn jump_to_exit(&mut self) {
        self.current = self.exit_index();
    }

    /// Place the cursor at `index`, clamped to `[0, len]`.
    pub fn set_current(&mut self, index: usize) {
        self.current = index.min(self.waypoints.len());
    }
}
