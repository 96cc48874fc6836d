// Domain layer - Snapshot inputs and derived visual descriptors
pub mod build;
pub mod node;
pub mod view;
pub mod visual;
