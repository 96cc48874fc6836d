// Application layer - Derivation pipeline and use cases
pub mod build_node;
pub mod dashboard;
pub mod dashboard_service;
pub mod status;
pub mod tile_node;
pub mod time_format;
pub mod view_node;
pub mod view_repository;
