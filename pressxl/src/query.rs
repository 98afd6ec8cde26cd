//! Read side: paged listings and single records.

use crate::pagination::Pagination;
use crate::record_manager::RecordManager;
use crate::types::{PressError, Record, RecordSummary, Result};
use std::sync::Arc;
use uuid::Uuid;

/// One page of the listing along with its paging metadata.
#[derive(Debug, Clone)]
pub struct ListingPage {
    pub records: Vec<RecordSummary>,
    pub pagination: Pagination,
}

pub struct QueryService {
    records: Arc<RecordManager>,
    page_size: u32,
}

impl QueryService {
    pub fn new(records: Arc<RecordManager>, page_size: u32) -> Self {
        Self { records, page_size }
    }

    /// Records for 1-based `page`, newest first.
    pub async fn list(&self, page: u32) -> Result<ListingPage> {
        if page < 1 {
            return Err(PressError::InvalidPage(page));
        }

        let total_count = self.records.count().await?;
        let offset = u64::from(self.page_size) * u64::from(page - 1);
        let records = self.records.list(offset, self.page_size).await?;

        Ok(ListingPage {
            records,
            pagination: Pagination::new(page, self.page_size, total_count),
        })
    }

    pub async fn get(&self, id: &str) -> Result<Option<Record>> {
        let id = Uuid::parse_str(id).map_err(|_| PressError::InvalidId(id.to_string()))?;
        self.records.get(id).await
    }
}
