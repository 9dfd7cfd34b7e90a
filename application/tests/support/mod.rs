#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use error_stack::Report;
use rust_decimal::Decimal;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    BookingQuery, CarQuery, DependOnBookingQuery, DependOnCarQuery, DependOnUserQuery, UserQuery,
};
use kernel::interface::update::{
    BookingModifier, CarModifier, DependOnBookingModifier, DependOnCarModifier,
    DependOnUserModifier, UserModifier,
};
use kernel::prelude::entity::{
    Booking, BookingId, BookingPeriod, BookingStatus, Car, CarId, CarProfile, CreatedAt,
    DailyRate, DestructBooking, DestructCar, EmailAddress, IsListed, Location, PasswordHash,
    SelectLimit, SelectOffset, User, UserId, UserName, UserRole,
};
use kernel::KernelError;

#[derive(Default)]
struct State {
    users: Vec<User>,
    cars: Vec<Car>,
    bookings: Vec<Booking>,
    favorites: HashSet<(Uuid, Uuid)>,
}

/// Shared-state stand-in for the persistence layer. The booking insert
/// enforces the same no-overlap rule as the production store, so the race
/// behavior of the service layer can be exercised without a database.
#[derive(Clone, Default)]
pub struct MockDatabase {
    state: Arc<Mutex<State>>,
}

impl MockDatabase {
    pub fn insert_user(&self, user: User) {
        self.state.lock().unwrap().users.push(user);
    }

    pub fn insert_car(&self, car: Car) {
        self.state.lock().unwrap().cars.push(car);
    }

    pub fn booking(&self, id: Uuid) -> Option<Booking> {
        self.state
            .lock()
            .unwrap()
            .bookings
            .iter()
            .find(|booking| booking.id().as_ref() == &id)
            .cloned()
    }
}

pub struct MockTransaction {
    state: Arc<Mutex<State>>,
}

#[async_trait::async_trait]
impl DatabaseConnection<MockTransaction> for MockDatabase {
    async fn transact(&self) -> error_stack::Result<MockTransaction, KernelError> {
        Ok(MockTransaction {
            state: self.state.clone(),
        })
    }
}

#[async_trait::async_trait]
impl Transaction for MockTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

pub struct MockCarRepository;

#[async_trait::async_trait]
impl CarQuery<MockTransaction> for MockCarRepository {
    async fn find_by_id(
        &self,
        con: &mut MockTransaction,
        id: &CarId,
    ) -> error_stack::Result<Option<Car>, KernelError> {
        let state = con.state.lock().unwrap();
        Ok(state.cars.iter().find(|car| car.id() == id).cloned())
    }

    async fn find_by_owner(
        &self,
        con: &mut MockTransaction,
        owner_id: &UserId,
    ) -> error_stack::Result<Vec<Car>, KernelError> {
        let state = con.state.lock().unwrap();
        Ok(state
            .cars
            .iter()
            .filter(|car| car.owner_id() == owner_id)
            .cloned()
            .collect())
    }

    async fn find_listed(
        &self,
        con: &mut MockTransaction,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Car>, KernelError> {
        let state = con.state.lock().unwrap();
        Ok(state
            .cars
            .iter()
            .filter(|car| *car.is_listed().as_ref())
            .skip(*offset.as_ref() as usize)
            .take(*limit.as_ref() as usize)
            .cloned()
            .collect())
    }

    async fn find_listed_by_location(
        &self,
        con: &mut MockTransaction,
        location: &Location,
    ) -> error_stack::Result<Vec<Car>, KernelError> {
        let state = con.state.lock().unwrap();
        Ok(state
            .cars
            .iter()
            .filter(|car| car.location() == location && *car.is_listed().as_ref())
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl CarModifier<MockTransaction> for MockCarRepository {
    async fn create(
        &self,
        con: &mut MockTransaction,
        car: &Car,
    ) -> error_stack::Result<(), KernelError> {
        con.state.lock().unwrap().cars.push(car.clone());
        Ok(())
    }

    async fn update_listing(
        &self,
        con: &mut MockTransaction,
        id: &CarId,
        is_listed: &IsListed,
    ) -> error_stack::Result<(), KernelError> {
        let mut state = con.state.lock().unwrap();
        let Some(index) = state.cars.iter().position(|car| car.id() == id) else {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("car {} does not exist", id.as_ref())));
        };
        let DestructCar {
            id,
            owner_id,
            profile,
            price_per_day,
            location,
            is_listed: _,
            created_at,
        } = state.cars.remove(index).into_destruct();
        state.cars.insert(
            index,
            Car::new(
                id,
                owner_id,
                profile,
                price_per_day,
                location,
                *is_listed,
                created_at,
            ),
        );
        Ok(())
    }

    async fn delete(
        &self,
        con: &mut MockTransaction,
        id: &CarId,
    ) -> error_stack::Result<(), KernelError> {
        let mut state = con.state.lock().unwrap();
        state.cars.retain(|car| car.id() != id);
        Ok(())
    }
}

pub struct MockBookingRepository;

#[async_trait::async_trait]
impl BookingQuery<MockTransaction> for MockBookingRepository {
    async fn find_by_id(
        &self,
        con: &mut MockTransaction,
        id: &BookingId,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        let state = con.state.lock().unwrap();
        Ok(state
            .bookings
            .iter()
            .find(|booking| booking.id() == id)
            .cloned())
    }

    async fn find_conflicts(
        &self,
        con: &mut MockTransaction,
        car_id: &CarId,
        period: &BookingPeriod,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        let state = con.state.lock().unwrap();
        Ok(state
            .bookings
            .iter()
            .filter(|booking| {
                booking.car_id() == car_id
                    && booking.status() != &BookingStatus::Cancelled
                    && booking.period().overlaps(period)
            })
            .cloned()
            .collect())
    }

    async fn exists_for_car(
        &self,
        con: &mut MockTransaction,
        car_id: &CarId,
    ) -> error_stack::Result<bool, KernelError> {
        let state = con.state.lock().unwrap();
        Ok(state
            .bookings
            .iter()
            .any(|booking| booking.car_id() == car_id))
    }

    async fn find_by_user(
        &self,
        con: &mut MockTransaction,
        user_id: &UserId,
    ) -> error_stack::Result<Vec<(Booking, Car)>, KernelError> {
        let state = con.state.lock().unwrap();
        let mut rows: Vec<(Booking, Car)> = state
            .bookings
            .iter()
            .filter(|booking| booking.user_id() == user_id)
            .filter_map(|booking| {
                state
                    .cars
                    .iter()
                    .find(|car| car.id() == booking.car_id())
                    .map(|car| (booking.clone(), car.clone()))
            })
            .collect();
        rows.sort_by(|a, b| b.0.created_at().as_ref().cmp(a.0.created_at().as_ref()));
        Ok(rows)
    }

    async fn find_by_owner(
        &self,
        con: &mut MockTransaction,
        owner_id: &UserId,
    ) -> error_stack::Result<Vec<(Booking, Car)>, KernelError> {
        let state = con.state.lock().unwrap();
        let mut rows: Vec<(Booking, Car)> = state
            .bookings
            .iter()
            .filter(|booking| booking.owner_id() == owner_id)
            .filter_map(|booking| {
                state
                    .cars
                    .iter()
                    .find(|car| car.id() == booking.car_id())
                    .map(|car| (booking.clone(), car.clone()))
            })
            .collect();
        rows.sort_by(|a, b| b.0.created_at().as_ref().cmp(a.0.created_at().as_ref()));
        Ok(rows)
    }
}

#[async_trait::async_trait]
impl BookingModifier<MockTransaction> for MockBookingRepository {
    async fn create(
        &self,
        con: &mut MockTransaction,
        booking: &Booking,
    ) -> error_stack::Result<(), KernelError> {
        let mut state = con.state.lock().unwrap();
        // Mirror of the production store's exclusion constraint.
        let clash = state.bookings.iter().any(|existing| {
            existing.car_id() == booking.car_id()
                && existing.status() != &BookingStatus::Cancelled
                && existing.period().overlaps(booking.period())
        });
        if clash {
            return Err(Report::new(KernelError::Unavailable)
                .attach_printable("overlapping booking already exists"));
        }
        state.bookings.push(booking.clone());
        Ok(())
    }

    async fn update_status(
        &self,
        con: &mut MockTransaction,
        id: &BookingId,
        status: &BookingStatus,
    ) -> error_stack::Result<(), KernelError> {
        let mut state = con.state.lock().unwrap();
        let Some(index) = state.bookings.iter().position(|booking| booking.id() == id) else {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("booking {} does not exist", id.as_ref())));
        };
        let DestructBooking {
            id,
            car_id,
            owner_id,
            user_id,
            period,
            price,
            status: _,
            created_at,
        } = state.bookings.remove(index).into_destruct();
        state.bookings.insert(
            index,
            Booking::new(
                id, car_id, owner_id, user_id, period, price, *status, created_at,
            ),
        );
        Ok(())
    }
}

pub struct MockUserRepository;

#[async_trait::async_trait]
impl UserQuery<MockTransaction> for MockUserRepository {
    async fn find_by_id(
        &self,
        con: &mut MockTransaction,
        id: &UserId,
    ) -> error_stack::Result<Option<User>, KernelError> {
        let state = con.state.lock().unwrap();
        Ok(state.users.iter().find(|user| user.id() == id).cloned())
    }

    async fn find_by_email(
        &self,
        con: &mut MockTransaction,
        email: &EmailAddress,
    ) -> error_stack::Result<Option<User>, KernelError> {
        let state = con.state.lock().unwrap();
        Ok(state
            .users
            .iter()
            .find(|user| user.email() == email)
            .cloned())
    }

    async fn find_favorites(
        &self,
        con: &mut MockTransaction,
        id: &UserId,
    ) -> error_stack::Result<Vec<Car>, KernelError> {
        let state = con.state.lock().unwrap();
        Ok(state
            .cars
            .iter()
            .filter(|car| {
                state
                    .favorites
                    .contains(&(*id.as_ref(), *car.id().as_ref()))
            })
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl UserModifier<MockTransaction> for MockUserRepository {
    async fn create(
        &self,
        con: &mut MockTransaction,
        user: &User,
    ) -> error_stack::Result<(), KernelError> {
        let mut state = con.state.lock().unwrap();
        if state.users.iter().any(|existing| existing.email() == user.email()) {
            return Err(
                Report::new(KernelError::Validation).attach_printable("email already taken")
            );
        }
        state.users.push(user.clone());
        Ok(())
    }

    async fn update_role(
        &self,
        con: &mut MockTransaction,
        id: &UserId,
        role: &UserRole,
    ) -> error_stack::Result<(), KernelError> {
        let mut state = con.state.lock().unwrap();
        let Some(index) = state.users.iter().position(|user| user.id() == id) else {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("user {} does not exist", id.as_ref())));
        };
        let user = state.users.remove(index);
        let rebuilt = User::new(
            user.id().clone(),
            user.name().clone(),
            user.email().clone(),
            user.password_hash().clone(),
            *role,
            user.created_at().clone(),
        );
        state.users.insert(index, rebuilt);
        Ok(())
    }

    async fn add_favorite(
        &self,
        con: &mut MockTransaction,
        id: &UserId,
        car_id: &CarId,
    ) -> error_stack::Result<(), KernelError> {
        let mut state = con.state.lock().unwrap();
        state.favorites.insert((*id.as_ref(), *car_id.as_ref()));
        Ok(())
    }

    async fn remove_favorite(
        &self,
        con: &mut MockTransaction,
        id: &UserId,
        car_id: &CarId,
    ) -> error_stack::Result<(), KernelError> {
        let mut state = con.state.lock().unwrap();
        state.favorites.remove(&(*id.as_ref(), *car_id.as_ref()));
        Ok(())
    }
}

impl DependOnCarQuery<MockTransaction> for MockDatabase {
    type CarQuery = MockCarRepository;
    fn car_query(&self) -> &Self::CarQuery {
        &MockCarRepository
    }
}

impl DependOnCarModifier<MockTransaction> for MockDatabase {
    type CarModifier = MockCarRepository;
    fn car_modifier(&self) -> &Self::CarModifier {
        &MockCarRepository
    }
}

impl DependOnBookingQuery<MockTransaction> for MockDatabase {
    type BookingQuery = MockBookingRepository;
    fn booking_query(&self) -> &Self::BookingQuery {
        &MockBookingRepository
    }
}

impl DependOnBookingModifier<MockTransaction> for MockDatabase {
    type BookingModifier = MockBookingRepository;
    fn booking_modifier(&self) -> &Self::BookingModifier {
        &MockBookingRepository
    }
}

impl DependOnUserQuery<MockTransaction> for MockDatabase {
    type UserQuery = MockUserRepository;
    fn user_query(&self) -> &Self::UserQuery {
        &MockUserRepository
    }
}

impl DependOnUserModifier<MockTransaction> for MockDatabase {
    type UserModifier = MockUserRepository;
    fn user_modifier(&self) -> &Self::UserModifier {
        &MockUserRepository
    }
}

pub fn make_user(role: UserRole) -> User {
    let id = Uuid::new_v4();
    User::new(
        UserId::new(id),
        UserName::new("Ada"),
        EmailAddress::new(format!("{id}@example.com")),
        PasswordHash::new("$2b$12$C6UzMDM.H6dfI/f/IKcEeO"),
        role,
        CreatedAt::new(OffsetDateTime::now_utc()),
    )
}

pub fn make_car(owner: &User, location: &str, rate: i64) -> Car {
    Car::new(
        CarId::new(Uuid::new_v4()),
        owner.id().clone(),
        CarProfile::new(
            "Toyota".to_string(),
            "Corolla".to_string(),
            2021,
            "Sedan".to_string(),
            5,
            "Petrol".to_string(),
            "Manual".to_string(),
            "https://cdn.example.com/corolla.jpg".to_string(),
            "Reliable daily driver".to_string(),
        ),
        DailyRate::new(Decimal::from(rate)),
        Location::new(location),
        IsListed::new(true),
        CreatedAt::new(OffsetDateTime::now_utc()),
    )
}
