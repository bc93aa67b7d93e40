use async_trait::async_trait;

use crate::modules::contact::application::domain::ContactAcknowledgement;
use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmitContactCommand, SubmitContactError, SubmitContactUseCase,
};
use crate::modules::dashboard::application::domain::DashboardOverview;
use crate::modules::dashboard::application::ports::incoming::use_cases::GetDashboardUseCase;

#[derive(Default, Clone)]
pub struct StubGetDashboardUseCase;

#[async_trait]
impl GetDashboardUseCase for StubGetDashboardUseCase {
    async fn execute(&self) -> DashboardOverview {
        DashboardOverview {
            stats: Default::default(),
            quick_actions: vec![],
        }
    }
}

/// Acknowledges immediately, or fails with the configured error.
#[derive(Default, Clone)]
pub struct StubSubmitContactUseCase {
    error: Option<SubmitContactError>,
}

impl StubSubmitContactUseCase {
    pub fn failing(error: SubmitContactError) -> Self {
        Self { error: Some(error) }
    }
}

#[async_trait]
impl SubmitContactUseCase for StubSubmitContactUseCase {
    async fn execute(
        &self,
        _command: SubmitContactCommand,
    ) -> Result<ContactAcknowledgement, SubmitContactError> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(ContactAcknowledgement::message_sent()),
        }
    }
}
