//! Pagination envelope
//!
//! Every list-returning operation reports its position through this
//! metadata. A fetch produces a fresh snapshot; nothing mutates one after
//! construction.

use serde::{Deserialize, Serialize};

/// Metadata describing one page of results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// 1-based page number
    pub page: u32,
    /// Maximum items per page
    pub limit: u32,
    /// Total items across all pages
    pub total: u64,
    /// Total number of pages
    pub total_pages: u32,
}

impl PaginationMeta {
    /// Build metadata for a page, deriving `total_pages` from the total
    /// item count. An empty result set has zero pages.
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            total.div_ceil(limit as u64) as u32
        };

        Self {
            page,
            limit,
            total,
            total_pages,
        }
    }
}
