use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::admin::application::domain::AdminEntity;
use crate::modules::admin::application::ports::outgoing::SeedSource;
use crate::modules::blog::application::domain::BlogPost;
use crate::modules::dashboard::application::domain::{
    DashboardOverview, DashboardStats, QuickAction,
};
use crate::modules::dashboard::application::ports::incoming::use_cases::GetDashboardUseCase;
use crate::modules::experience::application::domain::Experience;
use crate::modules::project::application::domain::Project;
use crate::modules::testimonial::application::domain::Testimonial;

/// Counts the catalogue every admin page session starts from. Page sessions
/// own their edits, so the dashboard never reflects them.
pub struct GetDashboardService {
    projects: Arc<dyn SeedSource<Project>>,
    experience: Arc<dyn SeedSource<Experience>>,
    testimonials: Arc<dyn SeedSource<Testimonial>>,
    blog: Arc<dyn SeedSource<BlogPost>>,
}

impl GetDashboardService {
    pub fn new(
        projects: Arc<dyn SeedSource<Project>>,
        experience: Arc<dyn SeedSource<Experience>>,
        testimonials: Arc<dyn SeedSource<Testimonial>>,
        blog: Arc<dyn SeedSource<BlogPost>>,
    ) -> Self {
        Self {
            projects,
            experience,
            testimonials,
            blog,
        }
    }

    fn stats(&self) -> DashboardStats {
        let projects = self.projects.seed();
        let testimonials = self.testimonials.seed();
        let blog = self.blog.seed();

        let approved = testimonials.iter().filter(|t| t.is_approved).count();

        DashboardStats {
            total_projects: projects.len(),
            active_projects: projects.iter().filter(|p| p.is_active()).count(),
            experience_entries: self.experience.seed().len(),
            testimonials: testimonials.len(),
            approved_testimonials: approved,
            pending_testimonials: testimonials.len() - approved,
            blog_posts: blog.len(),
            featured_blog_posts: blog.iter().filter(|p| p.featured).count(),
        }
    }
}

fn quick_action<E: AdminEntity>(title: &str, description: &str) -> QuickAction {
    QuickAction {
        title: title.to_string(),
        description: description.to_string(),
        path: format!("/api/admin/{}", E::PAGE),
    }
}

#[async_trait]
impl GetDashboardUseCase for GetDashboardService {
    async fn execute(&self) -> DashboardOverview {
        DashboardOverview {
            stats: self.stats(),
            quick_actions: vec![
                quick_action::<Project>("Add Project", "Create a new project to showcase"),
                quick_action::<Experience>("Add Experience", "Update your work history"),
                quick_action::<Testimonial>(
                    "Manage Testimonials",
                    "Review and approve feedback",
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::blog::adapter::outgoing::BlogPostSeed;
    use crate::modules::experience::adapter::outgoing::ExperienceSeed;
    use crate::modules::project::adapter::outgoing::ProjectSeed;
    use crate::modules::testimonial::adapter::outgoing::TestimonialSeed;
    use crate::tests::support::fixtures::StaticSeed;

    fn seeded_service() -> GetDashboardService {
        GetDashboardService::new(
            Arc::new(ProjectSeed),
            Arc::new(ExperienceSeed),
            Arc::new(TestimonialSeed),
            Arc::new(BlogPostSeed),
        )
    }

    #[tokio::test]
    async fn counts_the_seed_catalogue() {
        let overview = seeded_service().execute().await;

        assert_eq!(
            overview.stats,
            DashboardStats {
                total_projects: 3,
                active_projects: 2,
                experience_entries: 3,
                testimonials: 3,
                approved_testimonials: 2,
                pending_testimonials: 1,
                blog_posts: 2,
                featured_blog_posts: 1,
            }
        );
    }

    #[tokio::test]
    async fn quick_actions_point_at_admin_pages() {
        let overview = seeded_service().execute().await;

        let paths: Vec<&str> = overview
            .quick_actions
            .iter()
            .map(|a| a.path.as_str())
            .collect();
        assert_eq!(
            paths,
            vec![
                "/api/admin/projects",
                "/api/admin/experience",
                "/api/admin/testimonials"
            ]
        );
        assert_eq!(overview.quick_actions[2].title, "Manage Testimonials");
    }

    #[tokio::test]
    async fn empty_catalogue_counts_zero() {
        let service = GetDashboardService::new(
            Arc::new(StaticSeed::<Project>(vec![])),
            Arc::new(StaticSeed::<Experience>(vec![])),
            Arc::new(StaticSeed::<Testimonial>(vec![])),
            Arc::new(StaticSeed::<BlogPost>(vec![])),
        );

        let overview = service.execute().await;

        assert_eq!(overview.stats, DashboardStats::default());
        assert_eq!(overview.quick_actions.len(), 3);
    }
}
