use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use application::transfer::{CarDto, UserDto};
use kernel::prelude::entity::UserRole;

use crate::response::CarBody;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBody {
    id: Uuid,
    name: String,
    email: String,
    role: UserRole,
    created_at: OffsetDateTime,
}

impl From<UserDto> for UserBody {
    fn from(value: UserDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            role: value.role,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    success: bool,
    token: Uuid,
}

impl TokenResponse {
    pub fn new(token: Uuid) -> Self {
        Self {
            success: true,
            token,
        }
    }
}

impl IntoResponse for TokenResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    success: bool,
    user: UserBody,
}

impl UserResponse {
    pub fn new(user: UserDto) -> Self {
        Self {
            success: true,
            user: UserBody::from(user),
        }
    }
}

impl IntoResponse for UserResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    success: bool,
    favorites: Vec<CarBody>,
}

impl FavoritesResponse {
    pub fn new(favorites: Vec<CarDto>) -> Self {
        Self {
            success: true,
            favorites: favorites.into_iter().map(CarBody::from).collect(),
        }
    }
}

impl IntoResponse for FavoritesResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}
