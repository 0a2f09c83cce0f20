//! Shared utilities for the Lectio services
//!
//! Cross-cutting concerns used by the reading-browser service:
//! error types, configuration resolution, calendar helpers and the
//! scripture book-name table.

pub mod calendar;
pub mod config;
pub mod error;
pub mod scripture;

pub use error::{Error, Result};
