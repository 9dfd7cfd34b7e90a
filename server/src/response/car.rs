use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rust_decimal::Decimal;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use application::transfer::{CarDto, DashboardDto};

use crate::response::BookingBody;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarBody {
    id: Uuid,
    owner_id: Uuid,
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
    is_listed: bool,
    created_at: OffsetDateTime,
}

impl From<CarDto> for CarBody {
    fn from(value: CarDto) -> Self {
        Self {
            id: value.id,
            owner_id: value.owner_id,
            brand: value.brand,
            model: value.model,
            year: value.year,
            category: value.category,
            seating_capacity: value.seating_capacity,
            fuel_type: value.fuel_type,
            transmission: value.transmission,
            image_url: value.image_url,
            description: value.description,
            price_per_day: value.price_per_day,
            location: value.location,
            is_listed: value.is_listed,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CarsResponse {
    success: bool,
    cars: Vec<CarBody>,
}

impl CarsResponse {
    pub fn new(cars: Vec<CarDto>) -> Self {
        Self {
            success: true,
            cars: cars.into_iter().map(CarBody::from).collect(),
        }
    }
}

impl IntoResponse for CarsResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct CarCreatedResponse {
    success: bool,
    car: CarBody,
}

impl CarCreatedResponse {
    pub fn new(car: CarDto) -> Self {
        Self {
            success: true,
            car: CarBody::from(car),
        }
    }
}

impl IntoResponse for CarCreatedResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardBody {
    total_cars: usize,
    total_bookings: usize,
    pending_bookings: usize,
    completed_bookings: usize,
    recent_bookings: Vec<BookingBody>,
    monthly_revenue: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    success: bool,
    dashboard_data: DashboardBody,
}

impl DashboardResponse {
    pub fn new(dashboard: DashboardDto) -> Self {
        Self {
            success: true,
            dashboard_data: DashboardBody {
                total_cars: dashboard.total_cars,
                total_bookings: dashboard.total_bookings,
                pending_bookings: dashboard.pending_bookings,
                completed_bookings: dashboard.confirmed_bookings,
                recent_bookings: dashboard
                    .recent_bookings
                    .into_iter()
                    .map(BookingBody::from)
                    .collect(),
                monthly_revenue: dashboard.monthly_revenue,
            },
        }
    }
}

impl IntoResponse for DashboardResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}
