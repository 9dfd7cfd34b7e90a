use crate::database::Transaction;
use crate::entity::{Car, EmailAddress, User, UserId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait UserQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &UserId,
    ) -> error_stack::Result<Option<User>, KernelError>;

    async fn find_by_email(
        &self,
        con: &mut Connection,
        email: &EmailAddress,
    ) -> error_stack::Result<Option<User>, KernelError>;

    async fn find_favorites(
        &self,
        con: &mut Connection,
        id: &UserId,
    ) -> error_stack::Result<Vec<Car>, KernelError>;
}

pub trait DependOnUserQuery<Connection: Transaction>: Sync + Send + 'static {
    type UserQuery: UserQuery<Connection>;
    fn user_query(&self) -> &Self::UserQuery;
}
