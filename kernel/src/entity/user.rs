mod email;
mod id;
mod name;
mod password;
mod role;
mod token;

pub use self::{email::*, id::*, name::*, password::*, role::*, token::*};
use crate::entity::common::CreatedAt;
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, PartialEq, Eq, References, Destructure)]
pub struct User {
    id: UserId,
    name: UserName,
    email: EmailAddress,
    password_hash: PasswordHash,
    role: UserRole,
    created_at: CreatedAt<User>,
}

impl User {
    pub fn new(
        id: UserId,
        name: UserName,
        email: EmailAddress,
        password_hash: PasswordHash,
        role: UserRole,
        created_at: CreatedAt<User>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
            role,
            created_at,
        }
    }
}
