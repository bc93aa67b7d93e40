use chrono::NaiveDate;

use crate::modules::admin::application::ports::outgoing::SeedSource;
use crate::modules::testimonial::application::domain::{Rating, Testimonial};

#[derive(Debug, Clone, Copy, Default)]
pub struct TestimonialSeed;

fn testimonial(
    id: &str,
    client_name: &str,
    client_role: &str,
    feedback: &str,
    rating: u8,
    is_approved: bool,
    created_at: (i32, u32, u32),
) -> Testimonial {
    let (y, m, d) = created_at;
    Testimonial {
        id: id.to_string(),
        client_name: client_name.to_string(),
        client_role: client_role.to_string(),
        feedback: feedback.to_string(),
        rating: Rating::new(rating),
        is_approved,
        created_at: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
    }
}

impl SeedSource<Testimonial> for TestimonialSeed {
    fn seed(&self) -> Vec<Testimonial> {
        vec![
            testimonial(
                "1",
                "John Doe",
                "CEO at TechStart",
                "Exceptional work! Delivered the project on time with outstanding quality.",
                5,
                true,
                (2024, 1, 20),
            ),
            testimonial(
                "2",
                "Sarah Smith",
                "Product Manager",
                "Great communication and technical skills. Would definitely work with again.",
                5,
                true,
                (2024, 2, 15),
            ),
            testimonial(
                "3",
                "Mike Johnson",
                "Founder at StartupXYZ",
                "Professional and reliable. The app exceeded our expectations.",
                4,
                false,
                (2024, 3, 1),
            ),
        ]
    }
}
