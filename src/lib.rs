// Library exports for the binary driver and tests
pub mod config;
pub mod error;
pub mod models;
pub mod page;
pub mod services;
pub mod view;
