use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use uuid::Uuid;

use application::service::{
    FavoriteService, GetCarService, GetUserService, IssueTokenService, RegisterUserService,
    RevokeTokenService, VerifyCredentialsService,
};
use application::transfer::{GetFavoritesDto, GetUserDto, IssueTokenDto, RevokeTokenDto};
use error_stack::Report;
use kernel::KernelError;

use crate::error::ErrorStatus;
use crate::extract::AuthorizedUser;
use crate::handler::AppModule;
use crate::request::{FavoriteRequest, ListCarsRequest, LoginRequest, RegisterRequest};
use crate::response::{
    CarsResponse, FavoritesResponse, MessageResponse, TokenResponse, UserResponse,
};

pub trait UserRouter {
    fn route_user(self) -> Self;
}

impl UserRouter for Router<AppModule> {
    fn route_user(self) -> Self {
        self.route(
            "/api/user/register",
            post(
                |State(handler): State<AppModule>, Json(req): Json<RegisterRequest>| async move {
                    let user = handler
                        .database()
                        .register(req.into())
                        .await
                        .map_err(ErrorStatus::from)?;
                    handler
                        .session()
                        .issue_token(IssueTokenDto { user_id: user.id })
                        .await
                        .map(TokenResponse::new)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/user/login",
            post(
                |State(handler): State<AppModule>, Json(req): Json<LoginRequest>| async move {
                    let user = handler
                        .database()
                        .login(req.into())
                        .await
                        .map_err(ErrorStatus::from)?;
                    handler
                        .session()
                        .issue_token(IssueTokenDto { user_id: user.id })
                        .await
                        .map(TokenResponse::new)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/user/logout",
            post(
                |State(handler): State<AppModule>,
                 TypedHeader(Authorization(bearer)): TypedHeader<Authorization<Bearer>>| async move {
                    // Revoking a token that never existed is not an error.
                    let token = Uuid::parse_str(bearer.token()).unwrap_or_default();
                    handler
                        .session()
                        .revoke_token(RevokeTokenDto { token })
                        .await
                        .map(|_| MessageResponse::new("Logged out"))
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/user/data",
            get(
                |user: AuthorizedUser, State(handler): State<AppModule>| async move {
                    handler
                        .database()
                        .get_user(GetUserDto { id: user.id })
                        .await
                        .map_err(ErrorStatus::from)?
                        .map(UserResponse::new)
                        .ok_or_else(|| ErrorStatus::from(Report::new(KernelError::NotFound)))
                },
            ),
        )
        .route(
            "/api/user/cars",
            get(
                |State(handler): State<AppModule>, Query(req): Query<ListCarsRequest>| async move {
                    handler
                        .database()
                        .get_listed_cars(req.into())
                        .await
                        .map(CarsResponse::new)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/user/add-favorite",
            post(
                |user: AuthorizedUser,
                 State(handler): State<AppModule>,
                 Json(req): Json<FavoriteRequest>| async move {
                    handler
                        .database()
                        .add_favorite(req.into_add_dto(&user))
                        .await
                        .map(|_| MessageResponse::new("Added to favorites"))
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/user/remove-favorite",
            post(
                |user: AuthorizedUser,
                 State(handler): State<AppModule>,
                 Json(req): Json<FavoriteRequest>| async move {
                    handler
                        .database()
                        .remove_favorite(req.into_remove_dto(&user))
                        .await
                        .map(|_| MessageResponse::new("Removed from favorites"))
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/user/favorites",
            get(
                |user: AuthorizedUser, State(handler): State<AppModule>| async move {
                    handler
                        .database()
                        .get_favorites(GetFavoritesDto { user_id: user.id })
                        .await
                        .map(FavoritesResponse::new)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
