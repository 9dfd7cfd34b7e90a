use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use application::transfer::FeedbackDto;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackBody {
    id: Uuid,
    name: String,
    email: String,
    rating: i16,
    message: String,
    created_at: OffsetDateTime,
}

impl From<FeedbackDto> for FeedbackBody {
    fn from(value: FeedbackDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            rating: value.rating,
            message: value.message,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FeedbackListResponse {
    success: bool,
    feedbacks: Vec<FeedbackBody>,
}

impl FeedbackListResponse {
    pub fn new(feedbacks: Vec<FeedbackDto>) -> Self {
        Self {
            success: true,
            feedbacks: feedbacks.into_iter().map(FeedbackBody::from).collect(),
        }
    }
}

impl IntoResponse for FeedbackListResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct FeedbackCreatedResponse {
    success: bool,
    message: &'static str,
}

impl FeedbackCreatedResponse {
    pub fn new() -> Self {
        Self {
            success: true,
            message: "Feedback submitted",
        }
    }
}

impl Default for FeedbackCreatedResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoResponse for FeedbackCreatedResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, axum::Json(self)).into_response()
    }
}
