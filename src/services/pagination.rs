//! Pagination arithmetic for feed listings.

use crate::error::{AppError, Result};

/// Page/limit/total arithmetic echoed back to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

/// Compute display pagination.
///
/// `page` is echoed as received; the listing contract never uses it to
/// offset the underlying query, so pages past the first are display-only.
pub fn compute(total: i64, limit: i64, page: i64) -> Result<PageInfo> {
    if limit < 1 {
        return Err(AppError::BadRequest("limit must be >= 1".to_string()));
    }

    let total_pages = (total + limit - 1) / limit;

    Ok(PageInfo {
        page,
        limit,
        total,
        total_pages,
    })
}
