use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::RequestPartsExt;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use error_stack::Report;
use uuid::Uuid;

use application::service::{GetUserService, ResolveTokenService};
use application::transfer::{GetUserDto, ResolveTokenDto};
use kernel::prelude::entity::UserRole;
use kernel::KernelError;

use crate::error::ErrorStatus;
use crate::handler::AppModule;

/// Identity resolved from the bearer token. Handlers receive it explicitly;
/// there is no ambient request user.
pub struct AuthorizedUser {
    pub id: Uuid,
    pub role: UserRole,
}

#[async_trait::async_trait]
impl FromRequestParts<AppModule> for AuthorizedUser {
    type Rejection = ErrorStatus;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppModule,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| unauthorized("missing bearer token"))?;
        let token =
            Uuid::parse_str(bearer.token()).map_err(|_| unauthorized("malformed bearer token"))?;

        let user_id = state
            .session()
            .resolve_token(ResolveTokenDto { token })
            .await
            .map_err(ErrorStatus::from)?
            .ok_or_else(|| unauthorized("unknown or expired token"))?;

        let user = state
            .database()
            .get_user(GetUserDto { id: user_id })
            .await
            .map_err(ErrorStatus::from)?
            .ok_or_else(|| unauthorized("account no longer exists"))?;

        Ok(AuthorizedUser {
            id: user.id,
            role: user.role,
        })
    }
}

fn unauthorized(message: &'static str) -> ErrorStatus {
    ErrorStatus::from(Report::new(KernelError::Unauthorized).attach_printable(message))
}
