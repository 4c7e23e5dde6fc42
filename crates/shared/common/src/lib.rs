//! Common utilities shared across the workspace.
//!
//! This crate provides unified error handling for the volunteer service
//! and the HTTP gateway.

pub mod error;

pub use error::{AppError, AppResult, OptionExt};
