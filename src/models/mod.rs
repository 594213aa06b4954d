//! Data models for configuration

pub mod config;

pub use config::Config;
