use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Owner-controlled listing toggle. Distinct from date-range availability,
/// which is derived from bookings.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct IsListed(bool);

impl IsListed {
    pub fn new(value: impl Into<bool>) -> Self {
        Self(value.into())
    }

    pub fn toggled(&self) -> Self {
        Self(!self.0)
    }
}
