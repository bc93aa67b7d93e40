use actix_web::{get, web, Responder};
use tracing::debug;

use crate::api::schemas::SuccessResponse;
use crate::modules::dashboard::application::domain::DashboardOverview;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Admin dashboard
///
/// Content counts for the admin landing page plus shortcuts into the
/// admin pages. Counts reflect the seed catalogue.
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = "dashboard",
    responses(
        (
            status = 200,
            description = "Dashboard overview",
            body = inline(SuccessResponse<DashboardOverview>),
            example = json!({
                "success": true,
                "data": {
                    "stats": {
                        "total_projects": 3,
                        "active_projects": 2,
                        "experience_entries": 3,
                        "testimonials": 3,
                        "approved_testimonials": 2,
                        "pending_testimonials": 1,
                        "blog_posts": 2,
                        "featured_blog_posts": 1
                    },
                    "quick_actions": [
                        {
                            "title": "Add Project",
                            "description": "Create a new project to showcase",
                            "path": "/api/admin/projects"
                        }
                    ]
                }
            })
        ),
    )
)]
#[get("/api/admin/dashboard")]
pub async fn get_dashboard_handler(data: web::Data<AppState>) -> impl Responder {
    let overview = data.get_dashboard_use_case.execute().await;
    debug!(
        projects = overview.stats.total_projects,
        testimonials = overview.stats.testimonials,
        "Dashboard served"
    );
    ApiResponse::success(overview)
}
