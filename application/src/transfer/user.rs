use time::OffsetDateTime;
use uuid::Uuid;

use kernel::prelude::entity::{DestructUser, User, UserRole};

#[derive(Debug, Clone)]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: OffsetDateTime,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let DestructUser {
            id,
            name,
            email,
            role,
            created_at,
            ..
        } = value.into_destruct();
        Self {
            id: *id.as_ref(),
            name: name.as_ref().clone(),
            email: email.as_ref().clone(),
            role,
            created_at: *created_at.as_ref(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterUserDto {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct GetUserDto {
    pub id: Uuid,
}

#[derive(Debug, Clone)]
pub struct PromoteToOwnerDto {
    pub user_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct AddFavoriteDto {
    pub user_id: Uuid,
    pub car_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct RemoveFavoriteDto {
    pub user_id: Uuid,
    pub car_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct GetFavoritesDto {
    pub user_id: Uuid,
}
