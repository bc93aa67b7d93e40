mod admin_page_service;

pub use admin_page_service::AdminPageService;
