pub mod entities;

pub use entities::{format_duration, Experience, ExperienceDraft};
