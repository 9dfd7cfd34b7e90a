use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Hash, Eq, PartialEq, Default, Fromln, AsRefln, Serialize, Deserialize)]
pub struct BookingId(Uuid);

impl BookingId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }
}
