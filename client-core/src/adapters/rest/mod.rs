//! REST adapters for the Ripple API
//!
//! Repository implementations over the HTTP data source, plus the shared
//! client and response envelopes they decode.

mod client;
mod comment_repo;
mod notification_repo;

pub use client::RestClient;
pub use comment_repo::RestCommentRepository;
pub use notification_repo::RestNotificationRepository;
