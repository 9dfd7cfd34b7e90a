use time::OffsetDateTime;
use uuid::Uuid;

use kernel::prelude::entity::{DestructFeedback, Feedback};

#[derive(Debug, Clone)]
pub struct FeedbackDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub rating: i16,
    pub message: String,
    pub created_at: OffsetDateTime,
}

impl From<Feedback> for FeedbackDto {
    fn from(value: Feedback) -> Self {
        let DestructFeedback {
            id,
            name,
            email,
            rating,
            message,
            created_at,
        } = value.into_destruct();
        Self {
            id: *id.as_ref(),
            name: name.as_ref().clone(),
            email: email.as_ref().clone(),
            rating: *rating.as_ref(),
            message,
            created_at: *created_at.as_ref(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubmitFeedbackDto {
    pub name: String,
    pub email: String,
    pub rating: i16,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct GetFeedbackDto {
    pub limit: i32,
}
