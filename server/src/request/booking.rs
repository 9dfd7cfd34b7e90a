use serde::Deserialize;
use time::Date;
use uuid::Uuid;

use application::transfer::{ChangeBookingStatusDto, CheckAvailabilityDto, CreateBookingDto};

use crate::extract::AuthorizedUser;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAvailabilityRequest {
    location: String,
    pickup_date: Date,
    return_date: Date,
}

impl From<CheckAvailabilityRequest> for CheckAvailabilityDto {
    fn from(value: CheckAvailabilityRequest) -> Self {
        Self {
            location: value.location,
            pickup_date: value.pickup_date,
            return_date: value.return_date,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    car: Uuid,
    pickup_date: Date,
    return_date: Date,
}

impl CreateBookingRequest {
    pub fn into_dto(self, user: &AuthorizedUser) -> CreateBookingDto {
        CreateBookingDto {
            user_id: user.id,
            car_id: self.car,
            pickup_date: self.pickup_date,
            return_date: self.return_date,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeStatusRequest {
    booking_id: Uuid,
    status: String,
}

impl ChangeStatusRequest {
    pub fn into_dto(self, user: &AuthorizedUser) -> ChangeBookingStatusDto {
        ChangeBookingStatusDto {
            requester_id: user.id,
            booking_id: self.booking_id,
            status: self.status,
        }
    }
}
