//! Emergence Core Library
//!
//! Configuration and error handling shared by the exhibit site crates.

pub mod config;
pub mod error;

pub use config::{Config, RobotsConfig, ServerConfig, SiteConfig};
pub use error::{CoreError, Result};
