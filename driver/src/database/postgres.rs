use std::ops::{Deref, DerefMut};

use sqlx::{PgConnection, Pool, Postgres};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

pub use self::{booking::*, car::*, feedback::*, user::*};

mod booking;
mod car;
mod feedback;
mod user;

static POSTGRES_URL: &str = "POSTGRES_URL";

pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL)?;
        let pool = Pool::connect(&url).await.convert_error()?;
        Ok(Self { pool })
    }

    /// Applies the embedded migrations. The bookings exclusion constraint
    /// that closes the double-booking race lives there.
    pub async fn migrate(&self) -> error_stack::Result<(), KernelError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .convert_error()
    }
}

impl Clone for PostgresDatabase {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
        }
    }
}

#[async_trait::async_trait]
impl DatabaseConnection<PostgresTransaction> for PostgresDatabase {
    async fn transact(&self) -> error_stack::Result<PostgresTransaction, KernelError> {
        let tx = self.pool.begin().await.convert_error()?;
        Ok(PostgresTransaction(tx))
    }
}

pub struct PostgresTransaction(sqlx::Transaction<'static, Postgres>);

#[async_trait::async_trait]
impl Transaction for PostgresTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        self.0.commit().await.convert_error()
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        self.0.rollback().await.convert_error()
    }
}

impl Deref for PostgresTransaction {
    type Target = PgConnection;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PostgresTransaction {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[cfg(test)]
pub(in crate::database) mod test_support {
    use rust_decimal::Decimal;
    use time::OffsetDateTime;
    use uuid::Uuid;

    use kernel::prelude::entity::{
        Car, CarId, CarProfile, CreatedAt, DailyRate, EmailAddress, IsListed, Location,
        PasswordHash, User, UserId, UserName, UserRole,
    };

    pub fn make_user() -> User {
        User::new(
            UserId::new(Uuid::new_v4()),
            UserName::new("Test Owner"),
            EmailAddress::new(format!("owner{}@example.com", rand::random::<u32>())),
            PasswordHash::new("$2b$12$C6UzMDM.H6dfI/f/IKcEeO"),
            UserRole::Owner,
            CreatedAt::new(OffsetDateTime::now_utc()),
        )
    }

    pub fn make_car(owner_id: UserId, location: &str) -> Car {
        Car::new(
            CarId::new(Uuid::new_v4()),
            owner_id,
            CarProfile::new(
                "BMW".to_string(),
                "X5".to_string(),
                2022,
                "SUV".to_string(),
                5,
                "Diesel".to_string(),
                "Automatic".to_string(),
                "https://cdn.example.com/x5.jpg".to_string(),
                "Spacious SUV in great condition".to_string(),
            ),
            DailyRate::new(Decimal::from(300)),
            Location::new(location),
            IsListed::new(true),
            CreatedAt::new(OffsetDateTime::now_utc()),
        )
    }
}
