use serde::Serialize;
use utoipa::ToSchema;

/// Content counts shown on the admin landing page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct DashboardStats {
    #[schema(example = 3)]
    pub total_projects: usize,
    #[schema(example = 2)]
    pub active_projects: usize,
    pub experience_entries: usize,
    pub testimonials: usize,
    pub approved_testimonials: usize,
    pub pending_testimonials: usize,
    pub blog_posts: usize,
    pub featured_blog_posts: usize,
}

/// Shortcut into one of the admin pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct QuickAction {
    #[schema(example = "Add Project")]
    pub title: String,
    #[schema(example = "Create a new project to showcase")]
    pub description: String,
    #[schema(example = "/api/admin/projects")]
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DashboardOverview {
    pub stats: DashboardStats,
    pub quick_actions: Vec<QuickAction>,
}
