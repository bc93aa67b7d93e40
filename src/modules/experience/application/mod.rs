pub mod admin_page;
pub mod domain;
