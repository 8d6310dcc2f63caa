pub mod camera;
pub mod catalog;
pub mod config;
pub mod core;
pub mod input;
