// Core infrastructure modules
pub mod core;

// Feature-specific modules
pub mod config;
pub mod fields;
pub mod format;
pub mod menu;
pub mod store;
