use crate::database::Transaction;
use crate::entity::{Booking, BookingId, BookingPeriod, Car, CarId, UserId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookingQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_by_id(
        &self,
        con: &mut Connection,
        id: &BookingId,
    ) -> error_stack::Result<Option<Booking>, KernelError>;

    /// Non-cancelled bookings of the car whose period overlaps `period`.
    /// Cancelled bookings do not occupy the calendar.
    async fn find_conflicts(
        &self,
        con: &mut Connection,
        car_id: &CarId,
        period: &BookingPeriod,
    ) -> error_stack::Result<Vec<Booking>, KernelError>;

    /// True when any booking, in any status, references the car.
    async fn exists_for_car(
        &self,
        con: &mut Connection,
        car_id: &CarId,
    ) -> error_stack::Result<bool, KernelError>;

    /// Requester's bookings, newest first, car joined for display.
    async fn find_by_user(
        &self,
        con: &mut Connection,
        user_id: &UserId,
    ) -> error_stack::Result<Vec<(Booking, Car)>, KernelError>;

    /// Bookings against the owner's fleet, newest first, car joined.
    async fn find_by_owner(
        &self,
        con: &mut Connection,
        owner_id: &UserId,
    ) -> error_stack::Result<Vec<(Booking, Car)>, KernelError>;
}

pub trait DependOnBookingQuery<Connection: Transaction>: Sync + Send + 'static {
    type BookingQuery: BookingQuery<Connection>;
    fn booking_query(&self) -> &Self::BookingQuery;
}
