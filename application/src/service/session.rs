use std::time::Duration;

use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{AccessTokenQuery, DependOnAccessTokenQuery};
use kernel::interface::update::{AccessTokenModifier, DependOnAccessTokenModifier};
use kernel::prelude::entity::{AccessToken, UserId};
use kernel::KernelError;

use crate::transfer::{IssueTokenDto, ResolveTokenDto, RevokeTokenDto};

/// Sessions expire a month after issuance.
const SESSION_TTL: Duration = Duration::from_secs(60 * 60 * 24 * 30);

#[async_trait::async_trait]
pub trait IssueTokenService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnAccessTokenModifier<Connection>
{
    async fn issue_token(&self, dto: IssueTokenDto) -> error_stack::Result<Uuid, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let token = AccessToken::new(Uuid::new_v4());
        self.access_token_modifier()
            .store(
                &mut connection,
                &token,
                &UserId::new(dto.user_id),
                SESSION_TTL,
            )
            .await?;
        Ok(*token.as_ref())
    }
}

impl<Connection: Transaction + Send, T> IssueTokenService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnAccessTokenModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait ResolveTokenService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnAccessTokenQuery<Connection>
{
    async fn resolve_token(
        &self,
        dto: ResolveTokenDto,
    ) -> error_stack::Result<Option<Uuid>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let user_id = self
            .access_token_query()
            .find_user_id(&mut connection, &AccessToken::new(dto.token))
            .await?;
        Ok(user_id.map(|id| *id.as_ref()))
    }
}

impl<Connection: Transaction + Send, T> ResolveTokenService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnAccessTokenQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait RevokeTokenService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnAccessTokenModifier<Connection>
{
    async fn revoke_token(&self, dto: RevokeTokenDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;
        self.access_token_modifier()
            .revoke(&mut connection, &AccessToken::new(dto.token))
            .await?;
        Ok(())
    }
}

impl<Connection: Transaction + Send, T> RevokeTokenService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnAccessTokenModifier<Connection>
{
}
