use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};

use application::service::{
    AvailabilityService, ChangeBookingStatusService, CreateBookingService, GetBookingService,
};
use application::transfer::{GetOwnerBookingsDto, GetUserBookingsDto};

use crate::error::ErrorStatus;
use crate::extract::AuthorizedUser;
use crate::handler::AppModule;
use crate::request::{ChangeStatusRequest, CheckAvailabilityRequest, CreateBookingRequest};
use crate::response::{
    AvailableCarsResponse, BookingCreatedResponse, BookingsResponse, MessageResponse,
};

pub trait BookingRouter {
    fn route_booking(self) -> Self;
}

impl BookingRouter for Router<AppModule> {
    fn route_booking(self) -> Self {
        self.route(
            "/api/booking/check-availability",
            post(
                |State(handler): State<AppModule>,
                 Json(req): Json<CheckAvailabilityRequest>| async move {
                    handler
                        .database()
                        .search_available_cars(req.into())
                        .await
                        .map(AvailableCarsResponse::new)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/booking/create",
            post(
                |user: AuthorizedUser,
                 State(handler): State<AppModule>,
                 Json(req): Json<CreateBookingRequest>| async move {
                    handler
                        .database()
                        .create_booking(req.into_dto(&user))
                        .await
                        .map(BookingCreatedResponse::new)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/booking/user",
            get(
                |user: AuthorizedUser, State(handler): State<AppModule>| async move {
                    handler
                        .database()
                        .get_user_bookings(GetUserBookingsDto { user_id: user.id })
                        .await
                        .map(BookingsResponse::new)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/booking/owner",
            get(
                |user: AuthorizedUser, State(handler): State<AppModule>| async move {
                    handler
                        .database()
                        .get_owner_bookings(GetOwnerBookingsDto {
                            owner_id: user.id,
                            role: user.role,
                        })
                        .await
                        .map(BookingsResponse::new)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/booking/change-status",
            post(
                |user: AuthorizedUser,
                 State(handler): State<AppModule>,
                 Json(req): Json<ChangeStatusRequest>| async move {
                    handler
                        .database()
                        .change_status(req.into_dto(&user))
                        .await
                        .map(|_| MessageResponse::new("Status updated"))
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
