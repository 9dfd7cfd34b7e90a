use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rust_decimal::Decimal;
use serde::Serialize;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use application::transfer::{BookingDto, CarDto};
use kernel::prelude::entity::BookingStatus;

use crate::response::CarBody;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingBody {
    id: Uuid,
    car: CarBody,
    owner_id: Uuid,
    user_id: Uuid,
    pickup_date: Date,
    return_date: Date,
    price: Decimal,
    status: BookingStatus,
    created_at: OffsetDateTime,
}

impl From<BookingDto> for BookingBody {
    fn from(value: BookingDto) -> Self {
        Self {
            id: value.id,
            car: CarBody::from(value.car),
            owner_id: value.owner_id,
            user_id: value.user_id,
            pickup_date: value.pickup_date,
            return_date: value.return_date,
            price: value.price,
            status: value.status,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookingsResponse {
    success: bool,
    bookings: Vec<BookingBody>,
}

impl BookingsResponse {
    pub fn new(bookings: Vec<BookingDto>) -> Self {
        Self {
            success: true,
            bookings: bookings.into_iter().map(BookingBody::from).collect(),
        }
    }
}

impl IntoResponse for BookingsResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct BookingCreatedResponse {
    success: bool,
    message: &'static str,
    booking: BookingBody,
}

impl BookingCreatedResponse {
    pub fn new(booking: BookingDto) -> Self {
        Self {
            success: true,
            message: "Booking created",
            booking: BookingBody::from(booking),
        }
    }
}

impl IntoResponse for BookingCreatedResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableCarsResponse {
    success: bool,
    available_cars: Vec<CarBody>,
}

impl AvailableCarsResponse {
    pub fn new(cars: Vec<CarDto>) -> Self {
        Self {
            success: true,
            available_cars: cars.into_iter().map(CarBody::from).collect(),
        }
    }
}

impl IntoResponse for AvailableCarsResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}
