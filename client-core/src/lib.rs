//! Ripple client core
//!
//! The mobile app's data-access boundary: use cases mediate between
//! view-models and remote data sources behind repository ports.
//! Hexagonal (ports & adapters) architecture keeps the data source
//! swappable without touching caller code.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;



pub use config::Config;
pub use error::{DomainError, RestError};
