use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::modules::contact::application::domain::ContactAcknowledgement;
use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmitContactCommand, SubmitContactError, SubmitContactUseCase,
};

/// Acknowledges contact messages after a fixed delay. Nothing is stored or
/// forwarded.
#[derive(Debug, Clone)]
pub struct SimulatedContactService {
    delay: Duration,
}

impl SimulatedContactService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl SubmitContactUseCase for SimulatedContactService {
    async fn execute(
        &self,
        command: SubmitContactCommand,
    ) -> Result<ContactAcknowledgement, SubmitContactError> {
        tokio::time::sleep(self.delay).await;

        // Sender details stay out of the logs.
        info!(
            project_type = %command.project_type(),
            message_len = command.message().len(),
            "Contact message accepted"
        );

        Ok(ContactAcknowledgement::message_sent())
    }
}
