use crate::database::Transaction;
use crate::entity::{Car, CarId, IsListed};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CarModifier<Connection: Transaction>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        car: &Car,
    ) -> error_stack::Result<(), KernelError>;

    async fn update_listing(
        &self,
        con: &mut Connection,
        id: &CarId,
        is_listed: &IsListed,
    ) -> error_stack::Result<(), KernelError>;

    async fn delete(&self, con: &mut Connection, id: &CarId)
        -> error_stack::Result<(), KernelError>;
}

pub trait DependOnCarModifier<Connection: Transaction>: 'static + Sync + Send {
    type CarModifier: CarModifier<Connection>;
    fn car_modifier(&self) -> &Self::CarModifier;
}
