use async_trait::async_trait;

use crate::modules::dashboard::application::domain::DashboardOverview;

#[async_trait]
pub trait GetDashboardUseCase: Send + Sync {
    async fn execute(&self) -> DashboardOverview;
}
