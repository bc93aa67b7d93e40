use crate::modules::admin::application::domain::AdminEntity;
use crate::modules::admin::application::ports::incoming::use_cases::AdminPageUseCase;
use crate::modules::admin::application::ports::outgoing::SeedSource;
use crate::modules::admin::application::services::AdminPageService;
use crate::modules::blog::adapter::outgoing::BlogPostSeed;
use crate::modules::blog::application::domain::BlogPost;
use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactUseCase;
use crate::modules::dashboard::application::ports::incoming::use_cases::GetDashboardUseCase;
use crate::modules::experience::adapter::outgoing::ExperienceSeed;
use crate::modules::experience::application::domain::Experience;
use crate::modules::project::adapter::outgoing::ProjectSeed;
use crate::modules::project::application::domain::Project;
use crate::modules::testimonial::adapter::outgoing::TestimonialSeed;
use crate::modules::testimonial::application::domain::Testimonial;
use crate::tests::support::fixtures::FixedClock;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub const TEST_MAX_SESSIONS: usize = 8;

/// Admin pages run on the real service over the seed catalogue with a fixed
/// clock; dashboard and contact are stubbed.
pub struct TestAppStateBuilder {
    project_admin_page: Arc<dyn AdminPageUseCase<Project> + Send + Sync>,
    experience_admin_page: Arc<dyn AdminPageUseCase<Experience> + Send + Sync>,
    testimonial_admin_page: Arc<dyn AdminPageUseCase<Testimonial> + Send + Sync>,
    blog_admin_page: Arc<dyn AdminPageUseCase<BlogPost> + Send + Sync>,
    get_dashboard: Arc<dyn GetDashboardUseCase + Send + Sync>,
    submit_contact: Arc<dyn SubmitContactUseCase + Send + Sync>,
}

pub fn seeded_admin_page<E: AdminEntity>(
    seed: impl SeedSource<E> + 'static,
) -> Arc<dyn AdminPageUseCase<E> + Send + Sync> {
    Arc::new(AdminPageService::new(
        Arc::new(seed),
        Arc::new(FixedClock::default()),
        "Likhil",
        TEST_MAX_SESSIONS,
    ))
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            project_admin_page: seeded_admin_page(ProjectSeed),
            experience_admin_page: seeded_admin_page(ExperienceSeed),
            testimonial_admin_page: seeded_admin_page(TestimonialSeed),
            blog_admin_page: seeded_admin_page(BlogPostSeed),
            get_dashboard: Arc::new(StubGetDashboardUseCase),
            submit_contact: Arc::new(StubSubmitContactUseCase::default()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_project_admin_page(
        mut self,
        uc: impl AdminPageUseCase<Project> + Send + Sync + 'static,
    ) -> Self {
        self.project_admin_page = Arc::new(uc);
        self
    }

    pub fn with_get_dashboard(
        mut self,
        uc: impl GetDashboardUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_dashboard = Arc::new(uc);
        self
    }

    pub fn with_submit_contact(
        mut self,
        uc: impl SubmitContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_contact = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            project_admin_page: self.project_admin_page,
            experience_admin_page: self.experience_admin_page,
            testimonial_admin_page: self.testimonial_admin_page,
            blog_admin_page: self.blog_admin_page,
            get_dashboard_use_case: self.get_dashboard,
            submit_contact_use_case: self.submit_contact,
        })
    }
}
