mod admin_page;

pub use admin_page::{configure_admin_page, AdminPages, SearchRequest};
