use std::time::Duration;

use crate::database::Transaction;
use crate::entity::{AccessToken, UserId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait AccessTokenModifier<Connection: Transaction>: 'static + Sync + Send {
    async fn store(
        &self,
        con: &mut Connection,
        token: &AccessToken,
        user_id: &UserId,
        ttl: Duration,
    ) -> error_stack::Result<(), KernelError>;

    async fn revoke(
        &self,
        con: &mut Connection,
        token: &AccessToken,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnAccessTokenModifier<Connection: Transaction>: 'static + Sync + Send {
    type AccessTokenModifier: AccessTokenModifier<Connection>;
    fn access_token_modifier(&self) -> &Self::AccessTokenModifier;
}
