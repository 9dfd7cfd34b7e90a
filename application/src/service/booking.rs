use error_stack::Report;
use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{BookingQuery, CarQuery, DependOnBookingQuery, DependOnCarQuery};
use kernel::interface::update::{BookingModifier, DependOnBookingModifier};
use kernel::prelude::entity::{
    Booking, BookingId, BookingPeriod, BookingPrice, BookingStatus, CarId, CreatedAt, UserId,
    UserRole,
};
use kernel::KernelError;

use crate::transfer::{
    BookingDto, ChangeBookingStatusDto, CreateBookingDto, GetOwnerBookingsDto, GetUserBookingsDto,
};

#[async_trait::async_trait]
pub trait CreateBookingService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnCarQuery<Connection>
    + DependOnBookingQuery<Connection>
    + DependOnBookingModifier<Connection>
{
    /// Availability gate, price computation and insert run in one
    /// transaction. The conflict scan gives the friendly rejection; the
    /// store's no-overlap guarantee settles concurrent writers that both
    /// pass the scan, so the loser still ends up with `Unavailable`.
    async fn create_booking(
        &self,
        dto: CreateBookingDto,
    ) -> error_stack::Result<BookingDto, KernelError> {
        let period = BookingPeriod::new(dto.pickup_date, dto.return_date)?;
        let mut connection = self.database_connection().transact().await?;

        let car_id = CarId::new(dto.car_id);
        let car = self
            .car_query()
            .find_by_id(&mut connection, &car_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("car {} does not exist", dto.car_id))
            })?;

        let conflicts = self
            .booking_query()
            .find_conflicts(&mut connection, &car_id, &period)
            .await?;
        if !conflicts.is_empty() {
            return Err(Report::new(KernelError::Unavailable)
                .attach_printable("an existing booking overlaps the requested dates"));
        }

        let price = BookingPrice::calculate(car.price_per_day(), &period);
        let booking = Booking::new(
            BookingId::new(Uuid::new_v4()),
            car_id,
            car.owner_id().clone(),
            UserId::new(dto.user_id),
            period,
            price,
            BookingStatus::Pending,
            CreatedAt::new(OffsetDateTime::now_utc()),
        );
        self.booking_modifier()
            .create(&mut connection, &booking)
            .await?;
        connection.commit().await?;

        info!(
            booking_id = %booking.id().as_ref(),
            car_id = %dto.car_id,
            "booking created"
        );
        Ok(BookingDto::from((booking, car)))
    }
}

impl<Connection: Transaction + Send, T> CreateBookingService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnCarQuery<Connection>
        + DependOnBookingQuery<Connection>
        + DependOnBookingModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait ChangeBookingStatusService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookingQuery<Connection>
    + DependOnBookingModifier<Connection>
{
    /// Only the car's owner may move a booking, and only out of `pending`.
    async fn change_status(
        &self,
        dto: ChangeBookingStatusDto,
    ) -> error_stack::Result<(), KernelError> {
        let next: BookingStatus = dto.status.parse()?;
        let mut connection = self.database_connection().transact().await?;

        let booking_id = BookingId::new(dto.booking_id);
        let booking = self
            .booking_query()
            .find_by_id(&mut connection, &booking_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("booking {} does not exist", dto.booking_id))
            })?;

        if booking.owner_id().as_ref() != &dto.requester_id {
            return Err(Report::new(KernelError::Unauthorized)
                .attach_printable("only the car owner may change a booking status"));
        }
        if !booking.status().can_transition_to(&next) {
            return Err(Report::new(KernelError::InvalidTransition).attach_printable(format!(
                "{} -> {} is not a permitted transition",
                booking.status(),
                next
            )));
        }

        self.booking_modifier()
            .update_status(&mut connection, &booking_id, &next)
            .await?;
        connection.commit().await?;

        info!(booking_id = %dto.booking_id, status = %next, "booking status changed");
        Ok(())
    }
}

impl<Connection: Transaction + Send, T> ChangeBookingStatusService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookingQuery<Connection>
        + DependOnBookingModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait GetBookingService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnBookingQuery<Connection>
{
    async fn get_user_bookings(
        &self,
        dto: GetUserBookingsDto,
    ) -> error_stack::Result<Vec<BookingDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let bookings = self
            .booking_query()
            .find_by_user(&mut connection, &UserId::new(dto.user_id))
            .await?;
        Ok(bookings.into_iter().map(BookingDto::from).collect())
    }

    async fn get_owner_bookings(
        &self,
        dto: GetOwnerBookingsDto,
    ) -> error_stack::Result<Vec<BookingDto>, KernelError> {
        if dto.role != UserRole::Owner {
            return Err(Report::new(KernelError::Unauthorized)
                .attach_printable("only owners may list bookings against their fleet"));
        }
        let mut connection = self.database_connection().transact().await?;
        let bookings = self
            .booking_query()
            .find_by_owner(&mut connection, &UserId::new(dto.owner_id))
            .await?;
        Ok(bookings.into_iter().map(BookingDto::from).collect())
    }
}

impl<Connection: Transaction + Send, T> GetBookingService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnBookingQuery<Connection>
{
}
