//! Domain entities
//!
//! Pure domain models representing core business concepts. These carry no
//! behavior beyond construction; the data source owns the source of truth
//! and the core only holds request-scoped copies.

pub mod comment;
pub mod notification;
pub mod pagination;

pub use comment::{Comment, CommentId, CommentPage, PostId, UserId};
pub use notification::{Notification, NotificationId, NotificationKind, NotificationPage};
pub use pagination::PaginationMeta;
