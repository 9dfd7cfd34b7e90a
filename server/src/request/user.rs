use serde::Deserialize;
use uuid::Uuid;

use application::transfer::{
    AddFavoriteDto, LoginDto, RegisterUserDto, RemoveFavoriteDto,
};

use crate::extract::AuthorizedUser;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    name: String,
    email: String,
    password: String,
}

impl From<RegisterRequest> for RegisterUserDto {
    fn from(value: RegisterRequest) -> Self {
        Self {
            name: value.name,
            email: value.email,
            password: value.password,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl From<LoginRequest> for LoginDto {
    fn from(value: LoginRequest) -> Self {
        Self {
            email: value.email,
            password: value.password,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRequest {
    car_id: Uuid,
}

impl FavoriteRequest {
    pub fn into_add_dto(self, user: &AuthorizedUser) -> AddFavoriteDto {
        AddFavoriteDto {
            user_id: user.id,
            car_id: self.car_id,
        }
    }

    pub fn into_remove_dto(self, user: &AuthorizedUser) -> RemoveFavoriteDto {
        RemoveFavoriteDto {
            user_id: user.id,
            car_id: self.car_id,
        }
    }
}
