use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{BookingQuery, CarQuery, DependOnBookingQuery, DependOnCarQuery};
use kernel::prelude::entity::{BookingPeriod, CarId, Location};
use kernel::KernelError;

use crate::transfer::{CarDto, CheckAvailabilityDto, IsCarAvailableDto};

#[async_trait::async_trait]
pub trait AvailabilityService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnCarQuery<Connection>
    + DependOnBookingQuery<Connection>
{
    /// A car is available iff no non-cancelled booking overlaps the
    /// requested period.
    async fn is_car_available(
        &self,
        dto: IsCarAvailableDto,
    ) -> error_stack::Result<bool, KernelError> {
        let period = BookingPeriod::new(dto.pickup_date, dto.return_date)?;
        let mut connection = self.database_connection().transact().await?;

        let car_id = CarId::new(dto.car_id);
        let conflicts = self
            .booking_query()
            .find_conflicts(&mut connection, &car_id, &period)
            .await?;
        Ok(conflicts.is_empty())
    }

    /// Listed cars at the location that are free for the whole period.
    async fn search_available_cars(
        &self,
        dto: CheckAvailabilityDto,
    ) -> error_stack::Result<Vec<CarDto>, KernelError> {
        let period = BookingPeriod::new(dto.pickup_date, dto.return_date)?;
        let mut connection = self.database_connection().transact().await?;

        let location = Location::new(dto.location);
        let candidates = self
            .car_query()
            .find_listed_by_location(&mut connection, &location)
            .await?;

        let mut available = Vec::with_capacity(candidates.len());
        for car in candidates {
            let conflicts = self
                .booking_query()
                .find_conflicts(&mut connection, car.id(), &period)
                .await?;
            if conflicts.is_empty() {
                available.push(CarDto::from(car));
            }
        }
        Ok(available)
    }
}

impl<Connection: Transaction + Send, T> AvailabilityService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnCarQuery<Connection>
        + DependOnBookingQuery<Connection>
{
}
