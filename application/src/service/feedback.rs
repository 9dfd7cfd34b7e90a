use error_stack::Report;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{DependOnFeedbackQuery, FeedbackQuery};
use kernel::interface::update::{DependOnFeedbackModifier, FeedbackModifier};
use kernel::prelude::entity::{
    CreatedAt, EmailAddress, Feedback, FeedbackId, Rating, SelectLimit, UserName,
};
use kernel::KernelError;

use crate::transfer::{FeedbackDto, GetFeedbackDto, SubmitFeedbackDto};

#[async_trait::async_trait]
pub trait SubmitFeedbackService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnFeedbackModifier<Connection>
{
    async fn submit_feedback(
        &self,
        dto: SubmitFeedbackDto,
    ) -> error_stack::Result<(), KernelError> {
        if dto.name.is_empty() || dto.email.is_empty() || dto.message.is_empty() {
            return Err(Report::new(KernelError::Validation)
                .attach_printable("name, email and message are required"));
        }
        let rating = Rating::new(dto.rating);
        if !rating.is_valid() {
            return Err(Report::new(KernelError::Validation)
                .attach_printable("rating must be between 1 and 5"));
        }

        let feedback = Feedback::new(
            FeedbackId::new(Uuid::new_v4()),
            UserName::new(dto.name),
            EmailAddress::new(dto.email),
            rating,
            dto.message,
            CreatedAt::new(OffsetDateTime::now_utc()),
        );
        let mut connection = self.database_connection().transact().await?;
        self.feedback_modifier()
            .create(&mut connection, &feedback)
            .await?;
        connection.commit().await?;
        Ok(())
    }
}

impl<Connection: Transaction + Send, T> SubmitFeedbackService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnFeedbackModifier<Connection>
{
}

#[async_trait::async_trait]
pub trait GetFeedbackService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnFeedbackQuery<Connection>
{
    async fn get_latest_feedback(
        &self,
        dto: GetFeedbackDto,
    ) -> error_stack::Result<Vec<FeedbackDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let feedback = self
            .feedback_query()
            .find_latest(&mut connection, &SelectLimit::new(dto.limit))
            .await?;
        Ok(feedback.into_iter().map(FeedbackDto::from).collect())
    }
}

impl<Connection: Transaction + Send, T> GetFeedbackService<Connection> for T where
    T: DependOnDatabaseConnection<Connection> + DependOnFeedbackQuery<Connection>
{
}
