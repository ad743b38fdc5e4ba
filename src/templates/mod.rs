pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{error_page, map_container};
pub use layouts::map::map_layout;
