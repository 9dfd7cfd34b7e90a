use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use application::transfer::{
    CreateCarDto, DeleteCarDto, GetListedCarsDto, ToggleCarListingDto,
};

use crate::extract::AuthorizedUser;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCarRequest {
    brand: String,
    model: String,
    year: i32,
    category: String,
    seating_capacity: i32,
    fuel_type: String,
    transmission: String,
    image_url: String,
    description: String,
    price_per_day: Decimal,
    location: String,
}

impl AddCarRequest {
    pub fn into_dto(self, user: &AuthorizedUser) -> CreateCarDto {
        CreateCarDto {
            owner_id: user.id,
            role: user.role,
            brand: self.brand,
            model: self.model,
            year: self.year,
            category: self.category,
            seating_capacity: self.seating_capacity,
            fuel_type: self.fuel_type,
            transmission: self.transmission,
            image_url: self.image_url,
            description: self.description,
            price_per_day: self.price_per_day,
            location: self.location,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleCarRequest {
    car_id: Uuid,
}

impl ToggleCarRequest {
    pub fn into_dto(self, user: &AuthorizedUser) -> ToggleCarListingDto {
        ToggleCarListingDto {
            requester_id: user.id,
            car_id: self.car_id,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCarRequest {
    car_id: Uuid,
}

impl DeleteCarRequest {
    pub fn into_dto(self, user: &AuthorizedUser) -> DeleteCarDto {
        DeleteCarDto {
            requester_id: user.id,
            car_id: self.car_id,
        }
    }
}

fn default_limit() -> i32 {
    30
}

#[derive(Debug, Deserialize)]
pub struct ListCarsRequest {
    #[serde(default = "default_limit")]
    limit: i32,
    #[serde(default)]
    offset: i32,
}

impl From<ListCarsRequest> for GetListedCarsDto {
    fn from(value: ListCarsRequest) -> Self {
        Self {
            limit: value.limit,
            offset: value.offset,
        }
    }
}
