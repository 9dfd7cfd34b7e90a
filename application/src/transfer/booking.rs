use rust_decimal::Decimal;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use kernel::prelude::entity::{Booking, BookingStatus, Car, DestructBooking, UserRole};

use crate::transfer::CarDto;

#[derive(Debug, Clone)]
pub struct BookingDto {
    pub id: Uuid,
    pub car: CarDto,
    pub owner_id: Uuid,
    pub user_id: Uuid,
    pub pickup_date: Date,
    pub return_date: Date,
    pub price: Decimal,
    pub status: BookingStatus,
    pub created_at: OffsetDateTime,
}

impl From<(Booking, Car)> for BookingDto {
    fn from((booking, car): (Booking, Car)) -> Self {
        let DestructBooking {
            id,
            owner_id,
            user_id,
            period,
            price,
            status,
            created_at,
            ..
        } = booking.into_destruct();
        Self {
            id: *id.as_ref(),
            car: CarDto::from(car),
            owner_id: *owner_id.as_ref(),
            user_id: *user_id.as_ref(),
            pickup_date: *period.pickup_date(),
            return_date: *period.return_date(),
            price: *price.as_ref(),
            status,
            created_at: *created_at.as_ref(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBookingDto {
    pub user_id: Uuid,
    pub car_id: Uuid,
    pub pickup_date: Date,
    pub return_date: Date,
}

#[derive(Debug, Clone)]
pub struct ChangeBookingStatusDto {
    pub requester_id: Uuid,
    pub booking_id: Uuid,
    pub status: String,
}

#[derive(Debug, Clone)]
pub struct GetUserBookingsDto {
    pub user_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct GetOwnerBookingsDto {
    pub owner_id: Uuid,
    pub role: UserRole,
}

#[derive(Debug, Clone)]
pub struct CheckAvailabilityDto {
    pub location: String,
    pub pickup_date: Date,
    pub return_date: Date,
}

#[derive(Debug, Clone)]
pub struct IsCarAvailableDto {
    pub car_id: Uuid,
    pub pickup_date: Date,
    pub return_date: Date,
}
