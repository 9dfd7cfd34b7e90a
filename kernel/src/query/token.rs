use crate::database::Transaction;
use crate::entity::{AccessToken, UserId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait AccessTokenQuery<Connection: Transaction>: Sync + Send + 'static {
    /// None when the token is unknown or expired.
    async fn find_user_id(
        &self,
        con: &mut Connection,
        token: &AccessToken,
    ) -> error_stack::Result<Option<UserId>, KernelError>;
}

pub trait DependOnAccessTokenQuery<Connection: Transaction>: Sync + Send + 'static {
    type AccessTokenQuery: AccessTokenQuery<Connection>;
    fn access_token_query(&self) -> &Self::AccessTokenQuery;
}
