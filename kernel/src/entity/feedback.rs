mod id;
mod rating;

pub use self::{id::*, rating::*};
use crate::entity::common::CreatedAt;
use crate::entity::{EmailAddress, UserName};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, PartialEq, Eq, References, Destructure)]
pub struct Feedback {
    id: FeedbackId,
    name: UserName,
    email: EmailAddress,
    rating: Rating,
    message: String,
    created_at: CreatedAt<Feedback>,
}

impl Feedback {
    pub fn new(
        id: FeedbackId,
        name: UserName,
        email: EmailAddress,
        rating: Rating,
        message: String,
        created_at: CreatedAt<Feedback>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            rating,
            message,
            created_at,
        }
    }
}
