pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::modules::admin::adapter::incoming::web::routes::{configure_admin_page, AdminPages};
use crate::modules::admin::adapter::outgoing::SystemClock;
use crate::modules::admin::application::ports::incoming::use_cases::AdminPageUseCase;
use crate::modules::admin::application::ports::outgoing::Clock;
use crate::modules::admin::application::services::AdminPageService;
use crate::modules::blog::adapter::outgoing::BlogPostSeed;
use crate::modules::blog::application::domain::BlogPost;
use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactUseCase;
use crate::modules::contact::application::services::SimulatedContactService;
use crate::modules::dashboard::application::ports::incoming::use_cases::GetDashboardUseCase;
use crate::modules::dashboard::application::services::GetDashboardService;
use crate::modules::experience::adapter::outgoing::ExperienceSeed;
use crate::modules::experience::application::domain::Experience;
use crate::modules::project::adapter::outgoing::ProjectSeed;
use crate::modules::project::application::domain::Project;
use crate::modules::testimonial::adapter::outgoing::TestimonialSeed;
use crate::modules::testimonial::application::domain::Testimonial;
use crate::shared::api::{custom_json_config, custom_path_config};
use crate::shared::config::AppConfig;

use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub project_admin_page: Arc<dyn AdminPageUseCase<Project> + Send + Sync>,
    pub experience_admin_page: Arc<dyn AdminPageUseCase<Experience> + Send + Sync>,
    pub testimonial_admin_page: Arc<dyn AdminPageUseCase<Testimonial> + Send + Sync>,
    pub blog_admin_page: Arc<dyn AdminPageUseCase<BlogPost> + Send + Sync>,
    pub get_dashboard_use_case: Arc<dyn GetDashboardUseCase + Send + Sync>,
    pub submit_contact_use_case: Arc<dyn SubmitContactUseCase + Send + Sync>,
}

impl AdminPages<Project> for AppState {
    fn admin_page(&self) -> &Arc<dyn AdminPageUseCase<Project> + Send + Sync> {
        &self.project_admin_page
    }
}

impl AdminPages<Experience> for AppState {
    fn admin_page(&self) -> &Arc<dyn AdminPageUseCase<Experience> + Send + Sync> {
        &self.experience_admin_page
    }
}

impl AdminPages<Testimonial> for AppState {
    fn admin_page(&self) -> &Arc<dyn AdminPageUseCase<Testimonial> + Send + Sync> {
        &self.testimonial_admin_page
    }
}

impl AdminPages<BlogPost> for AppState {
    fn admin_page(&self) -> &Arc<dyn AdminPageUseCase<BlogPost> + Send + Sync> {
        &self.blog_admin_page
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;
    let server_url = config.server_url();
    info!(
        env = %env,
        server_url = %server_url,
        max_page_sessions = config.max_page_sessions,
        page_session_idle_secs = config.page_session_idle.as_secs(),
        "Configuration loaded"
    );

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let project_seed = Arc::new(ProjectSeed);
    let experience_seed = Arc::new(ExperienceSeed);
    let testimonial_seed = Arc::new(TestimonialSeed);
    let blog_seed = Arc::new(BlogPostSeed);

    let state = AppState {
        project_admin_page: Arc::new(
            AdminPageService::new(
                project_seed.clone(),
                clock.clone(),
                config.blog_default_author.clone(),
                config.max_page_sessions,
            )
            .with_idle_ttl(config.page_session_idle),
        ),
        experience_admin_page: Arc::new(
            AdminPageService::new(
                experience_seed.clone(),
                clock.clone(),
                config.blog_default_author.clone(),
                config.max_page_sessions,
            )
            .with_idle_ttl(config.page_session_idle),
        ),
        testimonial_admin_page: Arc::new(
            AdminPageService::new(
                testimonial_seed.clone(),
                clock.clone(),
                config.blog_default_author.clone(),
                config.max_page_sessions,
            )
            .with_idle_ttl(config.page_session_idle),
        ),
        blog_admin_page: Arc::new(
            AdminPageService::new(
                blog_seed.clone(),
                clock,
                config.blog_default_author.clone(),
                config.max_page_sessions,
            )
            .with_idle_ttl(config.page_session_idle),
        ),
        get_dashboard_use_case: Arc::new(GetDashboardService::new(
            project_seed,
            experience_seed,
            testimonial_seed,
            blog_seed,
        )),
        submit_contact_use_case: Arc::new(SimulatedContactService::new(
            config.contact_submit_delay,
        )),
    };

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    // Dashboard
    cfg.service(crate::modules::dashboard::adapter::incoming::web::routes::get_dashboard_handler);
    // Contact
    cfg.service(crate::modules::contact::adapter::incoming::web::routes::submit_contact_handler);
    // Admin pages
    cfg.configure(configure_admin_page::<Project, AppState>);
    cfg.configure(configure_admin_page::<Experience, AppState>);
    cfg.configure(configure_admin_page::<Testimonial, AppState>);
    cfg.configure(configure_admin_page::<BlogPost, AppState>);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
