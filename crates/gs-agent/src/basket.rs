//! The shared basket stack at the entrance.

use std::collections::VecDeque;

use gs_core::BasketId;

/// A finite FIFO pool of baskets.
///
/// Customers take from the front; returned baskets go to the back.  A pool
/// that nobody returns to runs dry permanently.
#[derive(Clone, Debug, Default)]
pub struct BasketPool {
    free:     VecDeque<BasketId>,
    capacity: usize,
}

impl BasketPool {
    /// A full pool of `count` baskets with ids `0..count`.
    pub fn new(count: usize) -> Self {
        Self {
            free:     (0..count as u32).map(BasketId).collect(),
            capacity: count,
        }
    }

    /// Take the next basket, `None` if the stack is empty.
    pub fn take(&mut self) -> Option<BasketId> {
        self.free.pop_front()
    }

    /// Put a basket back on the stack.
    pub fn give_back(&mut self, basket: BasketId) {
        debug_assert!(!self.free.contains(&basket), "{basket} returned twice");
        self.free.push_back(basket);
    }

    pub fn available(&self) -> usize {
        self.free.len()
    }

    /// Number of baskets the pool was created with.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.free.is_empty()
    }
}
