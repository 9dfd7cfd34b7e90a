use rust_decimal::Decimal;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::prelude::entity::{Car, DestructCar, DestructCarProfile, UserRole};

use crate::transfer::BookingDto;

#[derive(Debug, Clone)]
pub struct CarDto {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub category: String,
    pub seating_capacity: i32,
    pub fuel_type: String,
    pub transmission: String,
    pub image_url: String,
    pub description: String,
    pub price_per_day: Decimal,
    pub location: String,
    pub is_listed: bool,
    pub created_at: OffsetDateTime,
}

impl From<Car> for CarDto {
    fn from(value: Car) -> Self {
        let DestructCar {
            id,
            owner_id,
            profile,
            price_per_day,
            location,
            is_listed,
            created_at,
        } = value.into_destruct();
        let DestructCarProfile {
            brand,
            model,
            year,
            category,
            seating_capacity,
            fuel_type,
            transmission,
            image_url,
            description,
        } = profile.into_destruct();
        Self {
            id: *id.as_ref(),
            owner_id: *owner_id.as_ref(),
            brand,
            model,
            year,
            category,
            seating_capacity,
            fuel_type,
            transmission,
            image_url,
            description,
            price_per_day: *price_per_day.as_ref(),
            location: location.as_ref().clone(),
            is_listed: *is_listed.as_ref(),
            created_at: *created_at.as_ref(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCarDto {
    pub owner_id: Uuid,
    pub role: UserRole,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub category: String,
    pub seating_capacity: i32,
    pub fuel_type: String,
    pub transmission: String,
    pub image_url: String,
    pub description: String,
    pub price_per_day: Decimal,
    pub location: String,
}

#[derive(Debug, Clone)]
pub struct ToggleCarListingDto {
    pub requester_id: Uuid,
    pub car_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct DeleteCarDto {
    pub requester_id: Uuid,
    pub car_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct GetOwnerCarsDto {
    pub owner_id: Uuid,
    pub role: UserRole,
}

#[derive(Debug, Clone)]
pub struct GetListedCarsDto {
    pub limit: i32,
    pub offset: i32,
}

#[derive(Debug, Clone)]
pub struct GetDashboardDto {
    pub owner_id: Uuid,
    pub role: UserRole,
}

#[derive(Debug, Clone)]
pub struct DashboardDto {
    pub total_cars: usize,
    pub total_bookings: usize,
    pub pending_bookings: usize,
    pub confirmed_bookings: usize,
    pub recent_bookings: Vec<BookingDto>,
    pub monthly_revenue: Decimal,
}
