mod admin_page;

pub use admin_page::{AdminPageError, AdminPageUseCase, PageModeView, PageSnapshot, PageUpdate};
