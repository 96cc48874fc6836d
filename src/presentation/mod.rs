// Presentation layer - HTTP host for the rendered dashboard
pub mod app_state;
pub mod handlers;
