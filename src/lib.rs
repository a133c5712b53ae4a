pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod orders;
pub mod products;
pub mod state;
