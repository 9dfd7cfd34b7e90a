use crate::database::Transaction;
use crate::entity::Feedback;
use crate::KernelError;

#[async_trait::async_trait]
pub trait FeedbackModifier<Connection: Transaction>: 'static + Sync + Send {
    async fn create(
        &self,
        con: &mut Connection,
        feedback: &Feedback,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnFeedbackModifier<Connection: Transaction>: 'static + Sync + Send {
    type FeedbackModifier: FeedbackModifier<Connection>;
    fn feedback_modifier(&self) -> &Self::FeedbackModifier;
}
