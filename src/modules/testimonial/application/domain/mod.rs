pub mod entities;

pub use entities::{Rating, Testimonial, TestimonialDraft};
