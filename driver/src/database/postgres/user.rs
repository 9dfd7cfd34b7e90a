use error_stack::Report;
use sqlx::PgConnection;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::query::{DependOnUserQuery, UserQuery};
use kernel::interface::update::{DependOnUserModifier, UserModifier};
use kernel::prelude::entity::{
    Car, CarId, CreatedAt, EmailAddress, PasswordHash, User, UserId, UserName, UserRole,
};
use kernel::KernelError;

use crate::database::postgres::car::CarRow;
use crate::database::postgres::{PostgresDatabase, PostgresTransaction};
use crate::error::ConvertError;

pub struct PostgresUserRepository;

#[async_trait::async_trait]
impl UserQuery<PostgresTransaction> for PostgresUserRepository {
    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &UserId,
    ) -> error_stack::Result<Option<User>, KernelError> {
        PgUserInternal::find_by_id(con, id).await
    }

    async fn find_by_email(
        &self,
        con: &mut PostgresTransaction,
        email: &EmailAddress,
    ) -> error_stack::Result<Option<User>, KernelError> {
        PgUserInternal::find_by_email(con, email).await
    }

    async fn find_favorites(
        &self,
        con: &mut PostgresTransaction,
        id: &UserId,
    ) -> error_stack::Result<Vec<Car>, KernelError> {
        PgUserInternal::find_favorites(con, id).await
    }
}

#[async_trait::async_trait]
impl UserModifier<PostgresTransaction> for PostgresUserRepository {
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        user: &User,
    ) -> error_stack::Result<(), KernelError> {
        PgUserInternal::create(con, user).await
    }

    async fn update_role(
        &self,
        con: &mut PostgresTransaction,
        id: &UserId,
        role: &UserRole,
    ) -> error_stack::Result<(), KernelError> {
        PgUserInternal::update_role(con, id, role).await
    }

    async fn add_favorite(
        &self,
        con: &mut PostgresTransaction,
        id: &UserId,
        car_id: &CarId,
    ) -> error_stack::Result<(), KernelError> {
        PgUserInternal::add_favorite(con, id, car_id).await
    }

    async fn remove_favorite(
        &self,
        con: &mut PostgresTransaction,
        id: &UserId,
        car_id: &CarId,
    ) -> error_stack::Result<(), KernelError> {
        PgUserInternal::remove_favorite(con, id, car_id).await
    }
}

impl DependOnUserQuery<PostgresTransaction> for PostgresDatabase {
    type UserQuery = PostgresUserRepository;
    fn user_query(&self) -> &Self::UserQuery {
        &PostgresUserRepository
    }
}

impl DependOnUserModifier<PostgresTransaction> for PostgresDatabase {
    type UserModifier = PostgresUserRepository;
    fn user_modifier(&self) -> &Self::UserModifier {
        &PostgresUserRepository
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    role: String,
    created_at: OffsetDateTime,
}

impl TryFrom<UserRow> for User {
    type Error = Report<KernelError>;

    fn try_from(value: UserRow) -> Result<Self, Self::Error> {
        Ok(User::new(
            UserId::new(value.id),
            UserName::new(value.name),
            EmailAddress::new(value.email),
            PasswordHash::new(value.password_hash),
            value.role.parse()?,
            CreatedAt::new(value.created_at),
        ))
    }
}

const USER_COLUMNS: &str = r#"
    id,
    name,
    email,
    password_hash,
    role,
    created_at
"#;

pub(in crate::database) struct PgUserInternal;

impl PgUserInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &UserId,
    ) -> error_stack::Result<Option<User>, KernelError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            // language=postgresql
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE id = $1
            "#,
        ))
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(User::try_from).transpose()
    }

    async fn find_by_email(
        con: &mut PgConnection,
        email: &EmailAddress,
    ) -> error_stack::Result<Option<User>, KernelError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            // language=postgresql
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE email = $1
            "#,
        ))
        .bind(email.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(User::try_from).transpose()
    }

    async fn find_favorites(
        con: &mut PgConnection,
        id: &UserId,
    ) -> error_stack::Result<Vec<Car>, KernelError> {
        let rows = sqlx::query_as::<_, CarRow>(
            // language=postgresql
            r#"
            SELECT
                c.id,
                c.owner_id,
                c.brand,
                c.model,
                c.year,
                c.category,
                c.seating_capacity,
                c.fuel_type,
                c.transmission,
                c.image_url,
                c.description,
                c.price_per_day,
                c.location,
                c.is_listed,
                c.created_at
            FROM user_favorites AS f
            INNER JOIN cars AS c ON f.car_id = c.id
            WHERE f.user_id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Car::from).collect())
    }

    async fn create(con: &mut PgConnection, user: &User) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO users (id, name, email, password_hash, role, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.id().as_ref())
        .bind(user.name().as_ref())
        .bind(user.email().as_ref())
        .bind(user.password_hash().as_ref())
        .bind(user.role().as_str())
        .bind(user.created_at().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update_role(
        con: &mut PgConnection,
        id: &UserId,
        role: &UserRole,
    ) -> error_stack::Result<(), KernelError> {
        let result = sqlx::query(
            // language=postgresql
            r#"
            UPDATE users
            SET role = $2
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .bind(role.as_str())
        .execute(con)
        .await
        .convert_error()?;
        if result.rows_affected() == 0 {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("user {} does not exist", id.as_ref())));
        }
        Ok(())
    }

    async fn add_favorite(
        con: &mut PgConnection,
        id: &UserId,
        car_id: &CarId,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO user_favorites (user_id, car_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(id.as_ref())
        .bind(car_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn remove_favorite(
        con: &mut PgConnection,
        id: &UserId,
        car_id: &CarId,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            DELETE FROM user_favorites
            WHERE user_id = $1 AND car_id = $2
            "#,
        )
        .bind(id.as_ref())
        .bind(car_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
