use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        ///
        /// Surrogate keys are small positive integers assigned by the store
        /// (`max existing + 1`, starting at 1), so ids are constructed from a
        /// raw value rather than generated.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            #[must_use]
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            #[must_use]
            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }
    };
}

define_id!(RoleId, "Unique identifier for a role.");
define_id!(UserId, "Unique identifier for a user account.");
define_id!(MineralId, "Unique identifier for a mineral.");
define_id!(CountryId, "Unique identifier for a country.");
define_id!(SiteId, "Unique identifier for a mining site.");
define_id!(StatId, "Unique identifier for a yearly production statistic.");
