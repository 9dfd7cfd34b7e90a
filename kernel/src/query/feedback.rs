use crate::database::Transaction;
use crate::entity::{Feedback, SelectLimit};
use crate::KernelError;

#[async_trait::async_trait]
pub trait FeedbackQuery<Connection: Transaction>: Sync + Send + 'static {
    async fn find_latest(
        &self,
        con: &mut Connection,
        limit: &SelectLimit,
    ) -> error_stack::Result<Vec<Feedback>, KernelError>;
}

pub trait DependOnFeedbackQuery<Connection: Transaction>: Sync + Send + 'static {
    type FeedbackQuery: FeedbackQuery<Connection>;
    fn feedback_query(&self) -> &Self::FeedbackQuery;
}
