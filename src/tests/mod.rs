mod app_routes;
pub mod support;
