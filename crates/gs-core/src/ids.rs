//! Typed identifiers for customers, workers, lanes, and baskets.
//!
//! Every id is a plain index into a `Vec` owned by the store, the lane
//! registry, or the basket pool.  Keeping them as distinct types stops a
//! lane index from being used to look up a customer.

use std::fmt;

macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// "No valid ID"; the inner type's `MAX`.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a customer in the population.  Customers are recycled, never
    /// removed, so an `AgentId` stays valid for the whole session.
    pub struct AgentId(u32);
}

typed_id! {
    /// Index of an ancillary worker.
    pub struct WorkerId(u32);
}

typed_id! {
    /// Index of a checkout lane in the store layout.
    pub struct LaneId(u16);
}

typed_id! {
    /// Identity of one basket in the shared basket pool.
    pub struct BasketId(u32);
}
