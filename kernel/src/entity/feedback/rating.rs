use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct Rating(i16);

impl Rating {
    pub fn new(rating: impl Into<i16>) -> Self {
        Self(rating.into())
    }

    pub fn is_valid(&self) -> bool {
        (1..=5).contains(&self.0)
    }
}
