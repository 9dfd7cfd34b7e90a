use axum::extract::{Query, State};
use axum::routing::post;
use axum::{Json, Router};

use application::service::{GetFeedbackService, SubmitFeedbackService};

use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{ListFeedbackRequest, SubmitFeedbackRequest};
use crate::response::{FeedbackCreatedResponse, FeedbackListResponse};

pub trait FeedbackRouter {
    fn route_feedback(self) -> Self;
}

impl FeedbackRouter for Router<AppModule> {
    fn route_feedback(self) -> Self {
        self.route(
            "/api/feedback",
            post(
                |State(handler): State<AppModule>,
                 Json(req): Json<SubmitFeedbackRequest>| async move {
                    handler
                        .database()
                        .submit_feedback(req.into())
                        .await
                        .map(|_| FeedbackCreatedResponse::new())
                        .map_err(ErrorStatus::from)
                },
            )
            .get(
                |State(handler): State<AppModule>,
                 Query(req): Query<ListFeedbackRequest>| async move {
                    handler
                        .database()
                        .get_latest_feedback(req.into())
                        .await
                        .map(FeedbackListResponse::new)
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
