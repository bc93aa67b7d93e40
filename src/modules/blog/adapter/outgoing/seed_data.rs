use chrono::NaiveDate;

use crate::modules::admin::application::ports::outgoing::SeedSource;
use crate::modules::blog::application::domain::BlogPost;

#[derive(Debug, Clone, Copy, Default)]
pub struct BlogPostSeed;

impl SeedSource<BlogPost> for BlogPostSeed {
    fn seed(&self) -> Vec<BlogPost> {
        vec![
            BlogPost {
                id: "getting-started-with-business-automation".to_string(),
                title: "Getting Started with Business Automation".to_string(),
                excerpt: "Learn how to identify the right processes for automation and get started with your first automated workflow.".to_string(),
                category: "Automation".to_string(),
                author: "Likhil".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap_or_default(),
                read_time: "5 min read".to_string(),
                image: "https://images.unsplash.com/photo-1518186285589-2f7649de83e0?w=800".to_string(),
                featured: true,
            },
            BlogPost {
                id: "complete-guide-to-whatsapp-business-automation".to_string(),
                title: "Complete Guide to WhatsApp Business Automation".to_string(),
                excerpt: "Discover how to automate your WhatsApp business communications for better customer engagement.".to_string(),
                category: "WhatsApp".to_string(),
                author: "Likhil".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap_or_default(),
                read_time: "8 min read".to_string(),
                image: "https://images.unsplash.com/photo-1611746872915-64382b5c76da?w=800".to_string(),
                featured: false,
            },
        ]
    }
}
