//! Page arithmetic for the notification feed
//!
//! Pages are 1-based. The page slice is drawn from all of a user's
//! notifications while the page count is derived from the unread ones only,
//! so `total_pages` can be smaller than the number of non-empty pages.

use serde::Serialize;

use carebridge_common::{Error, Result};

use crate::domain::entities::Notification;

/// Largest accepted page size
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Validated page size and 1-based page index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    limit: u32,
    set: u32,
}

impl PageRequest {
    pub fn new(limit: u32, set: u32) -> Result<Self> {
        if limit == 0 || set == 0 {
            return Err(Error::InvalidArgument(
                "limit and notificationSet must be at least 1".to_string(),
            ));
        }
        if limit > MAX_PAGE_LIMIT {
            return Err(Error::InvalidArgument(format!(
                "limit must be at most {}",
                MAX_PAGE_LIMIT
            )));
        }
        Ok(Self { limit, set })
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.limit)
    }

    /// `(notificationSet - 1) * limit`
    pub fn skip(&self) -> i64 {
        (i64::from(self.set) - 1) * i64::from(self.limit)
    }

    /// `ceil(unread / limit)`
    pub fn total_pages(&self, unread: i64) -> i64 {
        if unread <= 0 {
            return 0;
        }
        (unread + self.limit() - 1) / self.limit()
    }
}

/// One page of the feed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotificationPage {
    pub notifications: Vec<Notification>,
    pub total_pages: i64,
}
