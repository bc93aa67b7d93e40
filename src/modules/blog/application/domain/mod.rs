pub mod entities;

pub use entities::{BlogPost, BlogPostDraft};
