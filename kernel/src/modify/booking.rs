use crate::database::Transaction;
use crate::entity::{Booking, BookingId, BookingStatus};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookingModifier<Connection: Transaction>: 'static + Sync + Send {
    /// Fails with `Unavailable` when the store's no-overlap guarantee
    /// rejects the insert.
    async fn create(
        &self,
        con: &mut Connection,
        booking: &Booking,
    ) -> error_stack::Result<(), KernelError>;

    /// Touches the status column only.
    async fn update_status(
        &self,
        con: &mut Connection,
        id: &BookingId,
        status: &BookingStatus,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBookingModifier<Connection: Transaction>: 'static + Sync + Send {
    type BookingModifier: BookingModifier<Connection>;
    fn booking_modifier(&self) -> &Self::BookingModifier;
}
