use crate::database::Transaction;
use crate::entity::{CarId, User, UserId, UserRole};
use crate::KernelError;

#[async_trait::async_trait]
pub trait UserModifier<Connection: Transaction>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        user: &User,
    ) -> error_stack::Result<(), KernelError>;

    async fn update_role(
        &self,
        con: &mut Connection,
        id: &UserId,
        role: &UserRole,
    ) -> error_stack::Result<(), KernelError>;

    /// Set semantics: adding a favorite twice is a no-op.
    async fn add_favorite(
        &self,
        con: &mut Connection,
        id: &UserId,
        car_id: &CarId,
    ) -> error_stack::Result<(), KernelError>;

    async fn remove_favorite(
        &self,
        con: &mut Connection,
        id: &UserId,
        car_id: &CarId,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnUserModifier<Connection: Transaction>: 'static + Sync + Send {
    type UserModifier: UserModifier<Connection>;
    fn user_modifier(&self) -> &Self::UserModifier;
}
