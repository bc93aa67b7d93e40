pub mod entities;

pub use entities::{ContactAcknowledgement, ProjectType, UnknownProjectType};
