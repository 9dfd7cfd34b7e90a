use serde::Deserialize;

use application::transfer::{GetFeedbackDto, SubmitFeedbackDto};

#[derive(Debug, Deserialize)]
pub struct SubmitFeedbackRequest {
    name: String,
    email: String,
    rating: i16,
    message: String,
}

impl From<SubmitFeedbackRequest> for SubmitFeedbackDto {
    fn from(value: SubmitFeedbackRequest) -> Self {
        Self {
            name: value.name,
            email: value.email,
            rating: value.rating,
            message: value.message,
        }
    }
}

fn default_limit() -> i32 {
    10
}

#[derive(Debug, Deserialize)]
pub struct ListFeedbackRequest {
    #[serde(default = "default_limit")]
    limit: i32,
}

impl From<ListFeedbackRequest> for GetFeedbackDto {
    fn from(value: ListFeedbackRequest) -> Self {
        Self { limit: value.limit }
    }
}
