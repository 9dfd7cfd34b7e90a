use error_stack::Report;
use rust_decimal::Decimal;
use sqlx::PgConnection;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::query::{CarQuery, DependOnCarQuery};
use kernel::interface::update::{CarModifier, DependOnCarModifier};
use kernel::prelude::entity::{
    Car, CarId, CarProfile, CreatedAt, DailyRate, IsListed, Location, SelectLimit, SelectOffset,
    UserId,
};
use kernel::KernelError;

use crate::database::postgres::{PostgresDatabase, PostgresTransaction};
use crate::error::ConvertError;

pub struct PostgresCarRepository;

#[async_trait::async_trait]
impl CarQuery<PostgresTransaction> for PostgresCarRepository {
    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &CarId,
    ) -> error_stack::Result<Option<Car>, KernelError> {
        PgCarInternal::find_by_id(con, id).await
    }

    async fn find_by_owner(
        &self,
        con: &mut PostgresTransaction,
        owner_id: &UserId,
    ) -> error_stack::Result<Vec<Car>, KernelError> {
        PgCarInternal::find_by_owner(con, owner_id).await
    }

    async fn find_listed(
        &self,
        con: &mut PostgresTransaction,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Car>, KernelError> {
        PgCarInternal::find_listed(con, limit, offset).await
    }

    async fn find_listed_by_location(
        &self,
        con: &mut PostgresTransaction,
        location: &Location,
    ) -> error_stack::Result<Vec<Car>, KernelError> {
        PgCarInternal::find_listed_by_location(con, location).await
    }
}

#[async_trait::async_trait]
impl CarModifier<PostgresTransaction> for PostgresCarRepository {
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        car: &Car,
    ) -> error_stack::Result<(), KernelError> {
        PgCarInternal::create(con, car).await
    }

    async fn update_listing(
        &self,
        con: &mut PostgresTransaction,
        id: &CarId,
        is_listed: &IsListed,
    ) -> error_stack::Result<(), KernelError> {
        PgCarInternal::update_listing(con, id, is_listed).await
    }

    async fn delete(
        &self,
        con: &mut PostgresTransaction,
        id: &CarId,
    ) -> error_stack::Result<(), KernelError> {
        PgCarInternal::delete(con, id).await
    }
}

impl DependOnCarQuery<PostgresTransaction> for PostgresDatabase {
    type CarQuery = PostgresCarRepository;
    fn car_query(&self) -> &Self::CarQuery {
        &PostgresCarRepository
    }
}

impl DependOnCarModifier<PostgresTransaction> for PostgresDatabase {
    type CarModifier = PostgresCarRepository;
    fn car_modifier(&self) -> &Self::CarModifier {
        &PostgresCarRepository
    }
}

#[derive(sqlx::FromRow)]
pub(in crate::database) struct CarRow {
    pub(in crate::database) id: Uuid,
    pub(in crate::database) owner_id: Uuid,
    pub(in crate::database) brand: String,
    pub(in crate::database) model: String,
    pub(in crate::database) year: i32,
    pub(in crate::database) category: String,
    pub(in crate::database) seating_capacity: i32,
    pub(in crate::database) fuel_type: String,
    pub(in crate::database) transmission: String,
    pub(in crate::database) image_url: String,
    pub(in crate::database) description: String,
    pub(in crate::database) price_per_day: Decimal,
    pub(in crate::database) location: String,
    pub(in crate::database) is_listed: bool,
    pub(in crate::database) created_at: OffsetDateTime,
}

impl From<CarRow> for Car {
    fn from(value: CarRow) -> Self {
        Car::new(
            CarId::new(value.id),
            UserId::new(value.owner_id),
            CarProfile::new(
                value.brand,
                value.model,
                value.year,
                value.category,
                value.seating_capacity,
                value.fuel_type,
                value.transmission,
                value.image_url,
                value.description,
            ),
            DailyRate::new(value.price_per_day),
            Location::new(value.location),
            IsListed::new(value.is_listed),
            CreatedAt::new(value.created_at),
        )
    }
}

const CAR_COLUMNS: &str = r#"
    id,
    owner_id,
    brand,
    model,
    year,
    category,
    seating_capacity,
    fuel_type,
    transmission,
    image_url,
    description,
    price_per_day,
    location,
    is_listed,
    created_at
"#;

pub(in crate::database) struct PgCarInternal;

impl PgCarInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &CarId,
    ) -> error_stack::Result<Option<Car>, KernelError> {
        let row = sqlx::query_as::<_, CarRow>(&format!(
            // language=postgresql
            r#"
            SELECT {CAR_COLUMNS}
            FROM cars
            WHERE id = $1
            "#,
        ))
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Car::from))
    }

    async fn find_by_owner(
        con: &mut PgConnection,
        owner_id: &UserId,
    ) -> error_stack::Result<Vec<Car>, KernelError> {
        let rows = sqlx::query_as::<_, CarRow>(&format!(
            // language=postgresql
            r#"
            SELECT {CAR_COLUMNS}
            FROM cars
            WHERE owner_id = $1
            ORDER BY created_at DESC
            "#,
        ))
        .bind(owner_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Car::from).collect())
    }

    async fn find_listed(
        con: &mut PgConnection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Car>, KernelError> {
        let rows = sqlx::query_as::<_, CarRow>(&format!(
            // language=postgresql
            r#"
            SELECT {CAR_COLUMNS}
            FROM cars
            WHERE is_listed
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        ))
        .bind(limit.as_ref())
        .bind(offset.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Car::from).collect())
    }

    async fn find_listed_by_location(
        con: &mut PgConnection,
        location: &Location,
    ) -> error_stack::Result<Vec<Car>, KernelError> {
        let rows = sqlx::query_as::<_, CarRow>(&format!(
            // language=postgresql
            r#"
            SELECT {CAR_COLUMNS}
            FROM cars
            WHERE location = $1 AND is_listed
            ORDER BY created_at DESC
            "#,
        ))
        .bind(location.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Car::from).collect())
    }

    async fn create(con: &mut PgConnection, car: &Car) -> error_stack::Result<(), KernelError> {
        let profile = car.profile();
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO cars (
                id, owner_id, brand, model, year, category, seating_capacity,
                fuel_type, transmission, image_url, description,
                price_per_day, location, is_listed, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            "#,
        )
        .bind(car.id().as_ref())
        .bind(car.owner_id().as_ref())
        .bind(profile.brand())
        .bind(profile.model())
        .bind(profile.year())
        .bind(profile.category())
        .bind(profile.seating_capacity())
        .bind(profile.fuel_type())
        .bind(profile.transmission())
        .bind(profile.image_url())
        .bind(profile.description())
        .bind(car.price_per_day().as_ref())
        .bind(car.location().as_ref())
        .bind(car.is_listed().as_ref())
        .bind(car.created_at().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update_listing(
        con: &mut PgConnection,
        id: &CarId,
        is_listed: &IsListed,
    ) -> error_stack::Result<(), KernelError> {
        let result = sqlx::query(
            // language=postgresql
            r#"
            UPDATE cars
            SET is_listed = $2
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .bind(is_listed.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        if result.rows_affected() == 0 {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("car {} does not exist", id.as_ref())));
        }
        Ok(())
    }

    async fn delete(con: &mut PgConnection, id: &CarId) -> error_stack::Result<(), KernelError> {
        let result = sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM cars
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        if result.rows_affected() == 0 {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("car {} does not exist", id.as_ref())));
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::CarQuery;
    use kernel::interface::update::{CarModifier, UserModifier};
    use kernel::prelude::entity::{CarId, IsListed, Location, SelectLimit, SelectOffset};
    use kernel::KernelError;

    use crate::database::postgres::test_support::{make_car, make_user};
    use crate::database::postgres::{
        PostgresCarRepository, PostgresDatabase, PostgresUserRepository,
    };

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn create_find_toggle_delete() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        db.migrate().await?;
        let mut con = db.transact().await?;

        let owner = make_user();
        PostgresUserRepository.create(&mut con, &owner).await?;

        let car = make_car(owner.id().clone(), "Yerevan");
        PostgresCarRepository.create(&mut con, &car).await?;

        let found = PostgresCarRepository.find_by_id(&mut con, car.id()).await?;
        assert_eq!(found, Some(car.clone()));

        let listed = PostgresCarRepository
            .find_listed_by_location(&mut con, &Location::new("Yerevan"))
            .await?;
        assert!(listed.contains(&car));

        PostgresCarRepository
            .update_listing(&mut con, car.id(), &IsListed::new(false))
            .await?;
        let unlisted = PostgresCarRepository
            .find_listed(&mut con, &SelectLimit::default(), &SelectOffset::default())
            .await?;
        assert!(!unlisted.contains(&car));

        PostgresCarRepository.delete(&mut con, car.id()).await?;
        let gone = PostgresCarRepository.find_by_id(&mut con, car.id()).await?;
        assert!(gone.is_none());

        con.roll_back().await?;
        Ok(())
    }

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn missing_car_update_reports_not_found() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        db.migrate().await?;
        let mut con = db.transact().await?;

        let report = PostgresCarRepository
            .update_listing(&mut con, &CarId::new(uuid::Uuid::new_v4()), &IsListed::new(true))
            .await
            .expect_err("update of a missing car must fail");
        assert!(matches!(report.current_context(), KernelError::NotFound));
        con.roll_back().await?;
        Ok(())
    }
}
