//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  `PropertyId` and `BehaviorId` are
//! indices into their owning agent's registries; they are only meaningful for
//! the agent that issued them.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// The ID for registry slot `n`, or `None` if `n` does not fit
            /// below the `INVALID` sentinel.
            #[inline]
            pub fn from_index(n: usize) -> Option<Self> {
                <$inner>::try_from(n).ok().map($name).filter(|id| *id != Self::INVALID)
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
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
    /// Identity of one agent.  Also mixed into the agent's RNG seed.
    pub struct AgentId(u32);
}

typed_id! {
    /// Handle to a property inside one agent's `PropertyStore`.
    pub struct PropertyId(u32);
}

typed_id! {
    /// Handle to a behavior slot inside one agent.  Slots are never reused,
    /// so a handle stays valid (or stays dead) for the agent's lifetime.
    pub struct BehaviorId(u32);
}
