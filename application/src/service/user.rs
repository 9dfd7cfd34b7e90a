use error_stack::{Report, ResultExt};
use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{CarQuery, DependOnCarQuery, DependOnUserQuery, UserQuery};
use kernel::interface::update::{DependOnUserModifier, UserModifier};
use kernel::prelude::entity::{
    CarId, CreatedAt, EmailAddress, PasswordHash, User, UserId, UserName, UserRole,
};
use kernel::KernelError;

use crate::transfer::{
    AddFavoriteDto, CarDto, GetFavoritesDto, GetUserDto, LoginDto, PromoteToOwnerDto,
    RegisterUserDto, RemoveFavoriteDto, UserDto,
};

const MIN_PASSWORD_LENGTH: usize = 8;

#[async_trait::async_trait]
pub trait RegisterUserService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnUserQuery<Connection>
    + DependOnUserModifier<Connection>
{
    async fn register(&self, dto: RegisterUserDto) -> error_stack::Result<UserDto, KernelError> {
        if dto.name.is_empty() || dto.email.is_empty() || dto.password.is_empty() {
            return Err(Report::new(KernelError::Validation)
                .attach_printable("name, email and password are required"));
        }
        if dto.password.len() < MIN_PASSWORD_LENGTH {
            return Err(Report::new(KernelError::Validation).attach_printable(format!(
                "password must be at least {MIN_PASSWORD_LENGTH} characters"
            )));
        }

        let mut connection = self.database_connection().transact().await?;
        let email = EmailAddress::new(dto.email);
        if self
            .user_query()
            .find_by_email(&mut connection, &email)
            .await?
            .is_some()
        {
            return Err(Report::new(KernelError::Validation)
                .attach_printable("an account with this email already exists"));
        }

        let hash = bcrypt::hash(&dto.password, bcrypt::DEFAULT_COST)
            .change_context_lazy(|| KernelError::Internal)?;
        let user = User::new(
            UserId::new(Uuid::new_v4()),
            UserName::new(dto.name),
            email,
            PasswordHash::new(hash),
            UserRole::Customer,
            CreatedAt::new(OffsetDateTime::now_utc()),
        );
        self.user_modifier().create(&mut connection, &user).await?;
        connection.commit().await?;

        info!(user_id = %user.id().as_ref(), "user registered");
        Ok(UserDto::from(user))
    }
}

impl<Connection: Transaction + Send, T> RegisterUserService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnUserQuery<Connection>
        + DependOnUserModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait VerifyCredentialsService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnUserQuery<Connection>
{
    /// Unknown email and wrong password are indistinguishable to the caller.
    async fn login(&self, dto: LoginDto) -> error_stack::Result<UserDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let user = self
            .user_query()
            .find_by_email(&mut connection, &EmailAddress::new(dto.email))
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::Unauthorized).attach_printable("invalid credentials")
            })?;

        let matches = bcrypt::verify(&dto.password, user.password_hash().as_ref())
            .change_context_lazy(|| KernelError::Internal)?;
        if !matches {
            return Err(
                Report::new(KernelError::Unauthorized).attach_printable("invalid credentials")
            );
        }
        Ok(UserDto::from(user))
    }
}

impl<Connection: Transaction + Send, T> VerifyCredentialsService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnUserQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait GetUserService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnUserQuery<Connection>
{
    async fn get_user(&self, dto: GetUserDto) -> error_stack::Result<Option<UserDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let user = self
            .user_query()
            .find_by_id(&mut connection, &UserId::new(dto.id))
            .await?;
        Ok(user.map(UserDto::from))
    }
}

impl<Connection: Transaction + Send, T> GetUserService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnUserQuery<Connection>
{
}

#[async_trait::async_trait]
pub trait PromoteToOwnerService<Connection: Transaction + Send>:
    'static + Sync + Send + DependOnDatabaseConnection<Connection> + DependOnUserModifier<Connection>
{
    async fn promote_to_owner(
        &self,
        dto: PromoteToOwnerDto,
    ) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;
        self.user_modifier()
            .update_role(&mut connection, &UserId::new(dto.user_id), &UserRole::Owner)
            .await?;
        connection.commit().await?;

        info!(user_id = %dto.user_id, "user promoted to owner");
        Ok(())
    }
}

impl<Connection: Transaction + Send, T> PromoteToOwnerService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnUserModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait FavoriteService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnCarQuery<Connection>
    + DependOnUserQuery<Connection>
    + DependOnUserModifier<Connection>
{
    async fn add_favorite(&self, dto: AddFavoriteDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let car_id = CarId::new(dto.car_id);
        if self
            .car_query()
            .find_by_id(&mut connection, &car_id)
            .await?
            .is_none()
        {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("car {} does not exist", dto.car_id)));
        }
        self.user_modifier()
            .add_favorite(&mut connection, &UserId::new(dto.user_id), &car_id)
            .await?;
        connection.commit().await?;
        Ok(())
    }

    async fn remove_favorite(
        &self,
        dto: RemoveFavoriteDto,
    ) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;
        self.user_modifier()
            .remove_favorite(
                &mut connection,
                &UserId::new(dto.user_id),
                &CarId::new(dto.car_id),
            )
            .await?;
        connection.commit().await?;
        Ok(())
    }

    async fn get_favorites(
        &self,
        dto: GetFavoritesDto,
    ) -> error_stack::Result<Vec<CarDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let cars = self
            .user_query()
            .find_favorites(&mut connection, &UserId::new(dto.user_id))
            .await?;
        Ok(cars.into_iter().map(CarDto::from).collect())
    }
}

impl<Connection: Transaction + Send, T> FavoriteService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnCarQuery<Connection>
        + DependOnUserQuery<Connection>
        + DependOnUserModifier<Connection>
{
}
