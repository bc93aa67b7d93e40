pub mod entities;

pub use entities::{DashboardOverview, DashboardStats, QuickAction};
