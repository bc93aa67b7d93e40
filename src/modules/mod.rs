pub mod admin;
pub mod blog;
pub mod contact;
pub mod dashboard;
pub mod experience;
pub mod project;
pub mod testimonial;
