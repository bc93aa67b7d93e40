use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

// Admin page building blocks
use crate::modules::admin::adapter::incoming::web::routes::SearchRequest;
use crate::modules::admin::application::domain::{
    ActionIcon, ActionKind, BadgeVariant, Cell, Notification, NotificationLevel, RowAction,
    TableBody, TableRow, TableView,
};
use crate::modules::admin::application::ports::incoming::use_cases::PageModeView;

// Entities
use crate::modules::blog::application::domain::{BlogPost, BlogPostDraft};
use crate::modules::experience::application::domain::{Experience, ExperienceDraft};
use crate::modules::project::application::domain::{Project, ProjectDraft, ProjectStatus};
use crate::modules::testimonial::application::domain::{Rating, Testimonial, TestimonialDraft};

// Dashboard & contact
use crate::health::HealthResponse;
use crate::modules::contact::adapter::incoming::web::routes::ContactRequest;
use crate::modules::contact::application::domain::{ContactAcknowledgement, ProjectType};
use crate::modules::dashboard::application::domain::{
    DashboardOverview, DashboardStats, QuickAction,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Admin API",
        version = "1.0.0",
        description = "Admin pages for the portfolio site: projects, experience, testimonials and blog posts",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Health
        crate::health::health,

        // Dashboard
        crate::modules::dashboard::adapter::incoming::web::routes::get_dashboard_handler,

        // Contact
        crate::modules::contact::adapter::incoming::web::routes::submit_contact_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<DashboardOverview>,
            ErrorResponse,
            ErrorDetail,
            HealthResponse,

            // Admin page
            SearchRequest,
            PageModeView,
            Notification,
            NotificationLevel,
            TableView,
            TableBody,
            TableRow,
            Cell,
            BadgeVariant,
            RowAction,
            ActionKind,
            ActionIcon,

            // Entities & drafts
            Project,
            ProjectDraft,
            ProjectStatus,
            Experience,
            ExperienceDraft,
            Testimonial,
            TestimonialDraft,
            Rating,
            BlogPost,
            BlogPostDraft,

            // Dashboard
            DashboardOverview,
            DashboardStats,
            QuickAction,

            // Contact
            ContactRequest,
            ContactAcknowledgement,
            ProjectType,
        )
    ),
    tags(
        (name = "admin", description = "Session-scoped admin pages under /api/admin/{page}"),
        (name = "dashboard", description = "Admin landing page statistics"),
        (name = "contact", description = "Public contact form"),
        (name = "health", description = "Liveness probe"),
    )
)]
pub struct ApiDoc;
