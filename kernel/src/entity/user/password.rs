use vodca::{AsRefln, Fromln};

/// Always a bcrypt digest, never the raw password. Deliberately not
/// serializable.
#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }
}
