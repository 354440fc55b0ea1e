pub mod analysis;
pub mod catalog;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod store;
