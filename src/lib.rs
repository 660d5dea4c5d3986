pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod roster;
