pub mod loader;
pub mod render;
