use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Matched exactly against search queries, no normalization.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct Location(String);

impl Location {
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }
}
