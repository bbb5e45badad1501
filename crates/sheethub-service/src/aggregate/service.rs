//! Aggregate service: sum by category type and region search.

use std::sync::Arc;

use tracing::{debug, info};

use sheethub_core::result::AppResult;
use sheethub_database::repositories::SheetFileRepository;

/// Answers the read-only aggregate queries over uploaded spreadsheets.
#[derive(Debug, Clone)]
pub struct AggregateService {
    /// Spreadsheet record repository.
    file_repo: Arc<SheetFileRepository>,
}

impl AggregateService {
    /// Creates a new aggregate service.
    pub fn new(file_repo: Arc<SheetFileRepository>) -> Self {
        Self { file_repo }
    }

    /// Sum of `num_sum` over every file whose category type equals
    /// `category_type` exactly. 0.0 when nothing matches.
    pub async fn sum_type(&self, category_type: &str) -> AppResult<f64> {
        info!(category_type, "Getting sum for type");

        let totals = self.file_repo.sum_by_type(category_type).await?;
        debug!(category_type, files = totals.file_count, "Matched files for type");

        info!(category_type, sum = totals.total, "Got sum for type");
        Ok(totals.total)
    }

    /// Distinct regions whose files' text contains `search_term`,
    /// ignoring case. An empty term returns every region that owns a file.
    pub async fn find_regions(&self, search_term: &str) -> AppResult<Vec<String>> {
        info!(search_term, "Finding regions by search term");

        let regions = self.file_repo.regions_matching(search_term).await?;

        info!(search_term, ?regions, "Found regions by search term");
        Ok(regions)
    }
}
