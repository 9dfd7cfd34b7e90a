use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vodca::{AsRefln, Fromln};

/// Opaque bearer token. Carries no claims; the session store maps it to a
/// user id.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct AccessToken(Uuid);

impl AccessToken {
    pub fn new(token: impl Into<Uuid>) -> Self {
        Self(token.into())
    }
}
