use crate::database::Transaction;
use crate::entity::{Car, CarId, Location, SelectLimit, SelectOffset, UserId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CarQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &CarId,
    ) -> error_stack::Result<Option<Car>, KernelError>;

    async fn find_by_owner(
        &self,
        con: &mut Connection,
        owner_id: &UserId,
    ) -> error_stack::Result<Vec<Car>, KernelError>;

    async fn find_listed(
        &self,
        con: &mut Connection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Car>, KernelError>;

    async fn find_listed_by_location(
        &self,
        con: &mut Connection,
        location: &Location,
    ) -> error_stack::Result<Vec<Car>, KernelError>;
}

pub trait DependOnCarQuery<Connection: Transaction>: Sync + Send + 'static {
    type CarQuery: CarQuery<Connection>;
    fn car_query(&self) -> &Self::CarQuery;
}
