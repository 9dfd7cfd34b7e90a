use sqlx::PgConnection;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::query::{DependOnFeedbackQuery, FeedbackQuery};
use kernel::interface::update::{DependOnFeedbackModifier, FeedbackModifier};
use kernel::prelude::entity::{
    CreatedAt, EmailAddress, Feedback, FeedbackId, Rating, SelectLimit, UserName,
};
use kernel::KernelError;

use crate::database::postgres::{PostgresDatabase, PostgresTransaction};
use crate::error::ConvertError;

pub struct PostgresFeedbackRepository;

#[async_trait::async_trait]
impl FeedbackQuery<PostgresTransaction> for PostgresFeedbackRepository {
    async fn find_latest(
        &self,
        con: &mut PostgresTransaction,
        limit: &SelectLimit,
    ) -> error_stack::Result<Vec<Feedback>, KernelError> {
        PgFeedbackInternal::find_latest(con, limit).await
    }
}

#[async_trait::async_trait]
impl FeedbackModifier<PostgresTransaction> for PostgresFeedbackRepository {
    async fn create(
        &self,
        con: &mut PostgresTransaction,
        feedback: &Feedback,
    ) -> error_stack::Result<(), KernelError> {
        PgFeedbackInternal::create(con, feedback).await
    }
}

impl DependOnFeedbackQuery<PostgresTransaction> for PostgresDatabase {
    type FeedbackQuery = PostgresFeedbackRepository;
    fn feedback_query(&self) -> &Self::FeedbackQuery {
        &PostgresFeedbackRepository
    }
}

impl DependOnFeedbackModifier<PostgresTransaction> for PostgresDatabase {
    type FeedbackModifier = PostgresFeedbackRepository;
    fn feedback_modifier(&self) -> &Self::FeedbackModifier {
        &PostgresFeedbackRepository
    }
}

#[derive(sqlx::FromRow)]
struct FeedbackRow {
    id: Uuid,
    name: String,
    email: String,
    rating: i16,
    message: String,
    created_at: OffsetDateTime,
}

impl From<FeedbackRow> for Feedback {
    fn from(value: FeedbackRow) -> Self {
        Feedback::new(
            FeedbackId::new(value.id),
            UserName::new(value.name),
            EmailAddress::new(value.email),
            Rating::new(value.rating),
            value.message,
            CreatedAt::new(value.created_at),
        )
    }
}

pub(in crate::database) struct PgFeedbackInternal;

impl PgFeedbackInternal {
    async fn find_latest(
        con: &mut PgConnection,
        limit: &SelectLimit,
    ) -> error_stack::Result<Vec<Feedback>, KernelError> {
        let rows = sqlx::query_as::<_, FeedbackRow>(
            // language=postgresql
            r#"
            SELECT id, name, email, rating, message, created_at
            FROM feedbacks
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Feedback::from).collect())
    }

    async fn create(
        con: &mut PgConnection,
        feedback: &Feedback,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO feedbacks (id, name, email, rating, message, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(feedback.id().as_ref())
        .bind(feedback.name().as_ref())
        .bind(feedback.email().as_ref())
        .bind(feedback.rating().as_ref())
        .bind(feedback.message())
        .bind(feedback.created_at().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
