//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - Unified error handling for the HTTP surface
//! - Configuration structures and environment helpers

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult};
