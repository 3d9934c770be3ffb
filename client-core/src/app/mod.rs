//! Application layer
//!
//! One use case per business operation. Each wraps exactly one repository
//! call behind a single `execute` entry point; view-models call these and
//! render the results. The repository collaborator is injected once at
//! construction and treated as immutable.

pub mod comments;
pub mod notifications;

pub use comments::{GetPostComments, LikeComment, UnlikeComment};
pub use notifications::{
    GetNotifications, MarkAllNotificationsAsRead, MarkNotificationAsRead, DEFAULT_PAGE_INDEX,
    DEFAULT_PAGE_SIZE,
};

use crate::error::DomainError;

/// Log a failed repository call and pass the error through unchanged.
///
/// Failure is never swallowed or translated into an empty success; the
/// caller sees the same error the repository produced.
pub(crate) fn log_failure<T>(
    operation: &'static str,
    result: Result<T, DomainError>,
) -> Result<T, DomainError> {
    if let Err(ref e) = result {
        tracing::error!(operation, error = %e, "repository call failed");
    }
    result
}
