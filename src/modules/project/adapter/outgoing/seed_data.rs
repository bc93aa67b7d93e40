use chrono::NaiveDate;

use crate::modules::admin::application::ports::outgoing::SeedSource;
use crate::modules::project::application::domain::{Project, ProjectStatus};

/// Projects every admin page session starts from.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectSeed;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

impl SeedSource<Project> for ProjectSeed {
    fn seed(&self) -> Vec<Project> {
        vec![
            Project {
                id: "1".to_string(),
                title: "E-commerce Platform".to_string(),
                category: "E-commerce".to_string(),
                description: "A full-featured online store with payment integration".to_string(),
                features: strings(&[
                    "Product catalogue with search",
                    "Stripe checkout",
                    "Order tracking",
                ]),
                results: strings(&["2x online revenue in the first quarter"]),
                technologies: strings(&["React", "Node.js", "Stripe"]),
                images: vec![],
                live_url: Some("https://example.com".to_string()),
                youtube_url: None,
                buy_url: None,
                status: ProjectStatus::Active,
                year: "2024".to_string(),
                client: "Online Retailer".to_string(),
                duration: "8 weeks".to_string(),
                created_at: date(2024, 1, 15),
            },
            Project {
                id: "2".to_string(),
                title: "Task Management App".to_string(),
                category: "Productivity".to_string(),
                description: "Collaborative task management with real-time updates".to_string(),
                features: strings(&["Shared boards", "Real-time sync"]),
                results: vec![],
                technologies: strings(&["Next.js", "Supabase", "Tailwind"]),
                images: vec![],
                live_url: Some("https://tasks.example.com".to_string()),
                youtube_url: None,
                buy_url: None,
                status: ProjectStatus::Active,
                year: "2024".to_string(),
                client: "Internal".to_string(),
                duration: "6 weeks".to_string(),
                created_at: date(2024, 2, 20),
            },
            Project {
                id: "3".to_string(),
                title: "Portfolio v1".to_string(),
                category: "Personal".to_string(),
                description: "Previous version of personal portfolio".to_string(),
                features: vec![],
                results: vec![],
                technologies: strings(&["HTML", "CSS", "JavaScript"]),
                images: vec![],
                live_url: None,
                youtube_url: None,
                buy_url: None,
                status: ProjectStatus::Archived,
                year: "2023".to_string(),
                client: "Self".to_string(),
                duration: "2 weeks".to_string(),
                created_at: date(2023, 6, 10),
            },
        ]
    }
}
