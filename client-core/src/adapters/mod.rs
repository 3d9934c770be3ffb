//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod rest;

pub use rest::{RestClient, RestCommentRepository, RestNotificationRepository};
