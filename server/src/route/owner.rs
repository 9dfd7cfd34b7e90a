use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};

use application::service::{
    AddCarService, DashboardService, GetCarService, ManageCarService, PromoteToOwnerService,
};
use application::transfer::{GetDashboardDto, GetOwnerCarsDto, PromoteToOwnerDto};

use crate::error::ErrorStatus;
use crate::extract::AuthorizedUser;
use crate::handler::AppModule;
use crate::request::{AddCarRequest, DeleteCarRequest, ToggleCarRequest};
use crate::response::{CarCreatedResponse, CarsResponse, DashboardResponse, MessageResponse};

pub trait OwnerRouter {
    fn route_owner(self) -> Self;
}

impl OwnerRouter for Router<AppModule> {
    fn route_owner(self) -> Self {
        self.route(
            "/api/owner/change-role",
            post(
                |user: AuthorizedUser, State(handler): State<AppModule>| async move {
                    handler
                        .database()
                        .promote_to_owner(PromoteToOwnerDto { user_id: user.id })
                        .await
                        .map(|_| MessageResponse::new("You can now list cars"))
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/owner/add-car",
            post(
                |user: AuthorizedUser,
                 State(handler): State<AppModule>,
                 Json(req): Json<AddCarRequest>| async move {
                    handler
                        .database()
                        .add_car(req.into_dto(&user))
                        .await
                        .map(CarCreatedResponse::new)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/owner/cars",
            get(
                |user: AuthorizedUser, State(handler): State<AppModule>| async move {
                    handler
                        .database()
                        .get_owner_cars(GetOwnerCarsDto {
                            owner_id: user.id,
                            role: user.role,
                        })
                        .await
                        .map(CarsResponse::new)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/owner/toggle-car",
            post(
                |user: AuthorizedUser,
                 State(handler): State<AppModule>,
                 Json(req): Json<ToggleCarRequest>| async move {
                    handler
                        .database()
                        .toggle_listing(req.into_dto(&user))
                        .await
                        .map(|_| MessageResponse::new("Listing updated"))
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/owner/delete-car",
            post(
                |user: AuthorizedUser,
                 State(handler): State<AppModule>,
                 Json(req): Json<DeleteCarRequest>| async move {
                    handler
                        .database()
                        .delete_car(req.into_dto(&user))
                        .await
                        .map(|_| MessageResponse::new("Car removed"))
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/api/owner/dashboard",
            get(
                |user: AuthorizedUser, State(handler): State<AppModule>| async move {
                    handler
                        .database()
                        .get_dashboard(GetDashboardDto {
                            owner_id: user.id,
                            role: user.role,
                        })
                        .await
                        .map(DashboardResponse::new)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
