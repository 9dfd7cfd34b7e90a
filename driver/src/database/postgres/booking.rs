use error_stack::Report;
use rust_decimal::Decimal;
use sqlx::PgConnection;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use kernel::interface::query::{BookingQuery, DependOnBookingQuery};
use kernel::interface::update::{BookingModifier, DependOnBookingModifier};
use kernel::prelude::entity::{
    Booking, BookingId, BookingPeriod, BookingPrice, BookingStatus, Car, CarId, CreatedAt, UserId,
};
use kernel::KernelError;

use crate::database::postgres::car::CarRow;
use crate::database::postgres::{PostgresDatabase, PostgresTransaction};
use crate::error::ConvertError;

pub struct PostgresBookingRepository;

#[async_trait::async_trait]
impl BookingQuery<PostgresTransaction> for PostgresBookingRepository {
    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &BookingId,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        PgBookingInternal::find_by_id(con, id).await
    }

    async fn find_conflicts(
        &self,
        con: &mut PostgresTransaction,
        car_id: &CarId,
        period: &BookingPeriod,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        PgBookingInternal::find_conflicts(con, car_id, period).await
    }

    async fn exists_for_car(
        &self,
        con: &mut PostgresTransaction,
        car_id: &CarId,
    ) -> error_stack::Result<bool, KernelError> {
        PgBookingInternal::exists_for_car(con, car_id).await
    }

    async fn find_by_user(
        &self,
        con: &mut PostgresTransaction,
        user_id: &UserId,
    ) -> error_stack::Result<Vec<(Booking, Car)>, KernelError> {
        PgBookingInternal::find_for_display(con, "b.user_id", user_id).await
    }

    async fn find_by_owner(
        &self,
        con: &mut PostgresTransaction,
        owner_id: &UserId,
    ) -> error_stack::Result<Vec<(Booking, Car)>, KernelError> {
        PgBookingInternal::find_for_display(con, "b.owner_id", owner_id).await
    }
}

#[async_trait::async_trait]
impl BookingModifier<PostgresTransaction> for PostgresBookingRepository {
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        booking: &Booking,
    ) -> error_stack::Result<(), KernelError> {
        PgBookingInternal::create(con, booking).await
    }

    async fn update_status(
        &self,
        con: &mut PostgresTransaction,
        id: &BookingId,
        status: &BookingStatus,
    ) -> error_stack::Result<(), KernelError> {
        PgBookingInternal::update_status(con, id, status).await
    }
}

impl DependOnBookingQuery<PostgresTransaction> for PostgresDatabase {
    type BookingQuery = PostgresBookingRepository;
    fn booking_query(&self) -> &Self::BookingQuery {
        &PostgresBookingRepository
    }
}

impl DependOnBookingModifier<PostgresTransaction> for PostgresDatabase {
    type BookingModifier = PostgresBookingRepository;
    fn booking_modifier(&self) -> &Self::BookingModifier {
        &PostgresBookingRepository
    }
}

#[derive(sqlx::FromRow)]
struct BookingRow {
    id: Uuid,
    car_id: Uuid,
    owner_id: Uuid,
    user_id: Uuid,
    pickup_date: Date,
    return_date: Date,
    price: Decimal,
    status: String,
    created_at: OffsetDateTime,
}

impl TryFrom<BookingRow> for Booking {
    type Error = Report<KernelError>;

    fn try_from(value: BookingRow) -> Result<Self, Self::Error> {
        Ok(Booking::new(
            BookingId::new(value.id),
            CarId::new(value.car_id),
            UserId::new(value.owner_id),
            UserId::new(value.user_id),
            BookingPeriod::new(value.pickup_date, value.return_date)?,
            BookingPrice::new(value.price),
            value.status.parse()?,
            CreatedAt::new(value.created_at),
        ))
    }
}

#[derive(sqlx::FromRow)]
struct BookingWithCarRow {
    id: Uuid,
    car_id: Uuid,
    owner_id: Uuid,
    user_id: Uuid,
    pickup_date: Date,
    return_date: Date,
    price: Decimal,
    status: String,
    created_at: OffsetDateTime,
    car_brand: String,
    car_model: String,
    car_year: i32,
    car_category: String,
    car_seating_capacity: i32,
    car_fuel_type: String,
    car_transmission: String,
    car_image_url: String,
    car_description: String,
    car_price_per_day: Decimal,
    car_location: String,
    car_is_listed: bool,
    car_created_at: OffsetDateTime,
}

impl BookingWithCarRow {
    fn into_pair(self) -> error_stack::Result<(Booking, Car), KernelError> {
        let car = Car::from(CarRow {
            id: self.car_id,
            owner_id: self.owner_id,
            brand: self.car_brand,
            model: self.car_model,
            year: self.car_year,
            category: self.car_category,
            seating_capacity: self.car_seating_capacity,
            fuel_type: self.car_fuel_type,
            transmission: self.car_transmission,
            image_url: self.car_image_url,
            description: self.car_description,
            price_per_day: self.car_price_per_day,
            location: self.car_location,
            is_listed: self.car_is_listed,
            created_at: self.car_created_at,
        });
        let booking = Booking::new(
            BookingId::new(self.id),
            CarId::new(self.car_id),
            UserId::new(self.owner_id),
            UserId::new(self.user_id),
            BookingPeriod::new(self.pickup_date, self.return_date)?,
            BookingPrice::new(self.price),
            self.status.parse()?,
            CreatedAt::new(self.created_at),
        );
        Ok((booking, car))
    }
}

const BOOKING_COLUMNS: &str = r#"
    id,
    car_id,
    owner_id,
    user_id,
    pickup_date,
    return_date,
    price,
    status,
    created_at
"#;

pub(in crate::database) struct PgBookingInternal;

impl PgBookingInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &BookingId,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        let row = sqlx::query_as::<_, BookingRow>(&format!(
            // language=postgresql
            r#"
            SELECT {BOOKING_COLUMNS}
            FROM bookings
            WHERE id = $1
            "#,
        ))
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(Booking::try_from).transpose()
    }

    /// Interval test is inclusive on both ends, matching
    /// [`BookingPeriod::overlaps`]. Cancelled bookings are not conflicts.
    async fn find_conflicts(
        con: &mut PgConnection,
        car_id: &CarId,
        period: &BookingPeriod,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        let rows = sqlx::query_as::<_, BookingRow>(&format!(
            // language=postgresql
            r#"
            SELECT {BOOKING_COLUMNS}
            FROM bookings
            WHERE car_id = $1
              AND status <> 'cancelled'
              AND pickup_date <= $3
              AND return_date >= $2
            "#,
        ))
        .bind(car_id.as_ref())
        .bind(period.pickup_date())
        .bind(period.return_date())
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(Booking::try_from).collect()
    }

    async fn exists_for_car(
        con: &mut PgConnection,
        car_id: &CarId,
    ) -> error_stack::Result<bool, KernelError> {
        let (exists,): (bool,) = sqlx::query_as(
            // language=postgresql
            r#"
            SELECT EXISTS(SELECT 1 FROM bookings WHERE car_id = $1)
            "#,
        )
        .bind(car_id.as_ref())
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(exists)
    }

    async fn find_for_display(
        con: &mut PgConnection,
        filter_column: &str,
        id: &UserId,
    ) -> error_stack::Result<Vec<(Booking, Car)>, KernelError> {
        let rows = sqlx::query_as::<_, BookingWithCarRow>(&format!(
            // language=postgresql
            r#"
            SELECT
                b.id,
                b.car_id,
                b.owner_id,
                b.user_id,
                b.pickup_date,
                b.return_date,
                b.price,
                b.status,
                b.created_at,
                c.brand AS car_brand,
                c.model AS car_model,
                c.year AS car_year,
                c.category AS car_category,
                c.seating_capacity AS car_seating_capacity,
                c.fuel_type AS car_fuel_type,
                c.transmission AS car_transmission,
                c.image_url AS car_image_url,
                c.description AS car_description,
                c.price_per_day AS car_price_per_day,
                c.location AS car_location,
                c.is_listed AS car_is_listed,
                c.created_at AS car_created_at
            FROM bookings AS b
            INNER JOIN cars AS c ON b.car_id = c.id
            WHERE {filter_column} = $1
            ORDER BY b.created_at DESC
            "#,
        ))
        .bind(id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(BookingWithCarRow::into_pair).collect()
    }

    async fn create(
        con: &mut PgConnection,
        booking: &Booking,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO bookings (
                id, car_id, owner_id, user_id,
                pickup_date, return_date, price, status, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(booking.id().as_ref())
        .bind(booking.car_id().as_ref())
        .bind(booking.owner_id().as_ref())
        .bind(booking.user_id().as_ref())
        .bind(booking.period().pickup_date())
        .bind(booking.period().return_date())
        .bind(booking.price().as_ref())
        .bind(booking.status().as_str())
        .bind(booking.created_at().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update_status(
        con: &mut PgConnection,
        id: &BookingId,
        status: &BookingStatus,
    ) -> error_stack::Result<(), KernelError> {
        let result = sqlx::query(
            // language=postgresql
            r#"
            UPDATE bookings
            SET status = $2
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .bind(status.as_str())
        .execute(con)
        .await
        .convert_error()?;
        if result.rows_affected() == 0 {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("booking {} does not exist", id.as_ref())));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use rust_decimal::Decimal;
    use time::macros::date;
    use time::OffsetDateTime;
    use uuid::Uuid;

    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::BookingQuery;
    use kernel::interface::update::{BookingModifier, CarModifier, UserModifier};
    use kernel::prelude::entity::{
        Booking, BookingId, BookingPeriod, BookingPrice, BookingStatus, Car, CreatedAt, UserId,
    };
    use kernel::KernelError;

    use crate::database::postgres::test_support::{make_car, make_user};
    use crate::database::postgres::{
        PostgresBookingRepository, PostgresCarRepository, PostgresDatabase, PostgresUserRepository,
    };

    fn make_booking(car: &Car, user_id: &UserId, period: BookingPeriod) -> Booking {
        Booking::new(
            BookingId::new(Uuid::new_v4()),
            car.id().clone(),
            car.owner_id().clone(),
            user_id.clone(),
            period,
            BookingPrice::new(Decimal::from(900)),
            BookingStatus::Pending,
            CreatedAt::new(OffsetDateTime::now_utc()),
        )
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn conflict_scan_and_status_update() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        db.migrate().await?;
        let mut con = db.transact().await?;

        let owner = make_user();
        let renter = make_user();
        PostgresUserRepository.create(&mut con, &owner).await?;
        PostgresUserRepository.create(&mut con, &renter).await?;
        let car = make_car(owner.id().clone(), "Gyumri");
        PostgresCarRepository.create(&mut con, &car).await?;

        let booked = BookingPeriod::new(date!(2024 - 01 - 05), date!(2024 - 01 - 10))?;
        let booking = make_booking(&car, renter.id(), booked);
        PostgresBookingRepository.create(&mut con, &booking).await?;

        let crossing = BookingPeriod::new(date!(2024 - 01 - 08), date!(2024 - 01 - 12))?;
        let conflicts = PostgresBookingRepository
            .find_conflicts(&mut con, car.id(), &crossing)
            .await?;
        assert_eq!(conflicts.len(), 1);

        let after = BookingPeriod::new(date!(2024 - 01 - 11), date!(2024 - 01 - 15))?;
        let free = PostgresBookingRepository
            .find_conflicts(&mut con, car.id(), &after)
            .await?;
        assert!(free.is_empty());

        PostgresBookingRepository
            .update_status(&mut con, booking.id(), &BookingStatus::Cancelled)
            .await?;
        let after_cancel = PostgresBookingRepository
            .find_conflicts(&mut con, car.id(), &crossing)
            .await?;
        assert!(after_cancel.is_empty());

        con.roll_back().await?;
        Ok(())
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn exclusion_constraint_rejects_double_booking() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        db.migrate().await?;
        let mut con = db.transact().await?;

        let owner = make_user();
        let renter = make_user();
        PostgresUserRepository.create(&mut con, &owner).await?;
        PostgresUserRepository.create(&mut con, &renter).await?;
        let car = make_car(owner.id().clone(), "Dilijan");
        PostgresCarRepository.create(&mut con, &car).await?;

        let period = BookingPeriod::new(date!(2024 - 02 - 01), date!(2024 - 02 - 05))?;
        let first = make_booking(&car, renter.id(), period);
        PostgresBookingRepository.create(&mut con, &first).await?;

        let overlapping = BookingPeriod::new(date!(2024 - 02 - 05), date!(2024 - 02 - 08))?;
        let second = make_booking(&car, renter.id(), overlapping);
        let report = PostgresBookingRepository
            .create(&mut con, &second)
            .await
            .expect_err("overlapping insert must violate the exclusion constraint");
        assert!(matches!(report.current_context(), KernelError::Unavailable));

        con.roll_back().await?;
        Ok(())
    }
}
