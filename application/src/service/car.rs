use error_stack::Report;
use rust_decimal::Decimal;
use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{BookingQuery, CarQuery, DependOnBookingQuery, DependOnCarQuery};
use kernel::interface::update::{CarModifier, DependOnCarModifier};
use kernel::prelude::entity::{
    BookingStatus, Car, CarId, CarProfile, CreatedAt, DailyRate, IsListed, Location, SelectLimit,
    SelectOffset, UserId, UserRole,
};
use kernel::KernelError;

use crate::transfer::{
    BookingDto, CarDto, CreateCarDto, DashboardDto, DeleteCarDto, GetDashboardDto,
    GetListedCarsDto, GetOwnerCarsDto, ToggleCarListingDto,
};

/// Number of entries surfaced in the dashboard's recent-bookings strip.
const RECENT_BOOKINGS: usize = 5;

#[async_trait::async_trait]
pub trait AddCarService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnCarModifier<Connection>
{
    async fn add_car(&self, dto: CreateCarDto) -> error_stack::Result<CarDto, KernelError> {
        if dto.role != UserRole::Owner {
            return Err(Report::new(KernelError::Unauthorized)
                .attach_printable("only owners may list cars"));
        }
        let rate = DailyRate::new(dto.price_per_day);
        if !rate.is_positive() {
            return Err(Report::new(KernelError::Validation)
                .attach_printable("price per day must be positive"));
        }

        let car = Car::new(
            CarId::new(Uuid::new_v4()),
            UserId::new(dto.owner_id),
            CarProfile::new(
                dto.brand,
                dto.model,
                dto.year,
                dto.category,
                dto.seating_capacity,
                dto.fuel_type,
                dto.transmission,
                dto.image_url,
                dto.description,
            ),
            rate,
            Location::new(dto.location),
            IsListed::new(true),
            CreatedAt::new(OffsetDateTime::now_utc()),
        );

        let mut connection = self.database_connection().transact().await?;
        self.car_modifier().create(&mut connection, &car).await?;
        connection.commit().await?;

        info!(car_id = %car.id().as_ref(), owner_id = %dto.owner_id, "car listed");
        Ok(CarDto::from(car))
    }
}

impl<Connection: Transaction + Send, T> AddCarService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnCarModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait ManageCarService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnCarQuery<Connection>
    + DependOnBookingQuery<Connection>
    + DependOnCarModifier<Connection>
{
    async fn toggle_listing(
        &self,
        dto: ToggleCarListingDto,
    ) -> error_stack::Result<(), KernelError> {
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
        if car.owner_id().as_ref() != &dto.requester_id {
            return Err(Report::new(KernelError::Unauthorized)
                .attach_printable("only the listing owner may toggle it"));
        }

        self.car_modifier()
            .update_listing(&mut connection, &car_id, &car.is_listed().toggled())
            .await?;
        connection.commit().await?;
        Ok(())
    }

    /// Cars with booking history cannot be deleted; unlisting is the
    /// supported way to retire them.
    async fn delete_car(&self, dto: DeleteCarDto) -> error_stack::Result<(), KernelError> {
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
        if car.owner_id().as_ref() != &dto.requester_id {
            return Err(Report::new(KernelError::Unauthorized)
                .attach_printable("only the listing owner may delete it"));
        }
        if self
            .booking_query()
            .exists_for_car(&mut connection, &car_id)
            .await?
        {
            return Err(Report::new(KernelError::Validation)
                .attach_printable("car has booking history, unlist it instead"));
        }

        self.car_modifier().delete(&mut connection, &car_id).await?;
        connection.commit().await?;

        info!(car_id = %dto.car_id, "car deleted");
        Ok(())
    }
}

impl<Connection: Transaction + Send, T> ManageCarService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnCarQuery<Connection>
        + DependOnBookingQuery<Connection>
        + DependOnCarModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait GetCarService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnCarQuery<Connection>
{
    async fn get_owner_cars(
        &self,
        dto: GetOwnerCarsDto,
    ) -> error_stack::Result<Vec<CarDto>, KernelError> {
        if dto.role != UserRole::Owner {
            return Err(Report::new(KernelError::Unauthorized)
                .attach_printable("only owners have a fleet"));
        }
        let mut connection = self.database_connection().transact().await?;
        let cars = self
            .car_query()
            .find_by_owner(&mut connection, &UserId::new(dto.owner_id))
            .await?;
        Ok(cars.into_iter().map(CarDto::from).collect())
    }

    async fn get_listed_cars(
        &self,
        dto: GetListedCarsDto,
    ) -> error_stack::Result<Vec<CarDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let cars = self
            .car_query()
            .find_listed(
                &mut connection,
                &SelectLimit::new(dto.limit),
                &SelectOffset::new(dto.offset),
            )
            .await?;
        Ok(cars.into_iter().map(CarDto::from).collect())
    }
}

impl<Connection: Transaction + Send, T> GetCarService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnCarQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait DashboardService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnCarQuery<Connection>
    + DependOnBookingQuery<Connection>
{
    /// Monthly revenue counts confirmed bookings created in the current
    /// calendar month.
    async fn get_dashboard(
        &self,
        dto: GetDashboardDto,
    ) -> error_stack::Result<DashboardDto, KernelError> {
        if dto.role != UserRole::Owner {
            return Err(Report::new(KernelError::Unauthorized)
                .attach_printable("only owners have a dashboard"));
        }
        let mut connection = self.database_connection().transact().await?;

        let owner_id = UserId::new(dto.owner_id);
        let cars = self
            .car_query()
            .find_by_owner(&mut connection, &owner_id)
            .await?;
        let bookings = self
            .booking_query()
            .find_by_owner(&mut connection, &owner_id)
            .await?;

        let now = OffsetDateTime::now_utc();
        let mut pending = 0usize;
        let mut confirmed = 0usize;
        let mut monthly_revenue = Decimal::ZERO;
        for (booking, _) in &bookings {
            match booking.status() {
                BookingStatus::Pending => pending += 1,
                BookingStatus::Confirmed => {
                    confirmed += 1;
                    let created = booking.created_at().as_ref();
                    if created.year() == now.year() && created.month() == now.month() {
                        monthly_revenue += *booking.price().as_ref();
                    }
                }
                BookingStatus::Cancelled => {}
            }
        }

        let total_bookings = bookings.len();
        let recent_bookings = bookings
            .into_iter()
            .take(RECENT_BOOKINGS)
            .map(BookingDto::from)
            .collect();

        Ok(DashboardDto {
            total_cars: cars.len(),
            total_bookings,
            pending_bookings: pending,
            confirmed_bookings: confirmed,
            recent_bookings,
            monthly_revenue,
        })
    }
}

impl<Connection: Transaction + Send, T> DashboardService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnCarQuery<Connection>
        + DependOnBookingQuery<Connection>
{
}
