use serde::de::DeserializeOwned;
use weenie_core::{ItemPresentation, WeenieDetail, WeenieSummary};

use crate::client::{AceDbClient, QueryTransport};
use crate::config::{AceDbConfig, DEFAULT_SEARCH_LIMIT};
use crate::error::AceDbError;
use crate::sql;

/// A weenie together with its derived presentation attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedWeenie {
    pub detail: WeenieDetail,
    pub presentation: ItemPresentation,
}

/// Search and detail lookups against the ACE world database.
pub struct WeenieLookup<T = AceDbClient> {
    transport: T,
    search_limit: u32,
}

impl WeenieLookup<AceDbClient> {
    /// Build a lookup backed by the HTTP client.
    pub fn from_config(config: &AceDbConfig) -> Result<Self, AceDbError> {
        let client = AceDbClient::new(config)?;
        Ok(Self::new(client).with_search_limit(config.search_limit))
    }
}

impl<T: QueryTransport> WeenieLookup<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }

    /// Set the search row cap, clamped to `1..=20`.
    pub fn with_search_limit(mut self, limit: u32) -> Self {
        self.search_limit = limit.clamp(1, DEFAULT_SEARCH_LIMIT);
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Find weenies whose class name or display name contains `query`.
    ///
    /// At most `search_limit` rows are returned, even if the remote ignores
    /// the `LIMIT`. A blank query returns no results without touching the
    /// remote source. Result order is whatever the database returns.
    pub async fn search_weenies(&self, query: &str) -> Result<Vec<WeenieSummary>, AceDbError> {
        if query.trim().is_empty() {
            log::debug!("search_weenies: blank query, skipping remote lookup");
            return Ok(Vec::new());
        }

        let sql = sql::search_sql(query, self.search_limit);
        let mut rows: Vec<WeenieSummary> = self.fetch_rows(&sql).await?;
        rows.truncate(self.search_limit as usize);
        Ok(rows)
    }

    /// Fetch one weenie by class id, or `None` if no such weenie exists.
    pub async fn get_weenie(&self, class_id: u32) -> Result<Option<WeenieDetail>, AceDbError> {
        let sql = sql::detail_sql(class_id);
        let rows: Vec<WeenieDetail> = self.fetch_rows(&sql).await?;
        Ok(rows.into_iter().next())
    }

    /// Fetch one weenie and derive its category, background and icon locator.
    pub async fn get_presentation(
        &self,
        class_id: u32,
    ) -> Result<Option<EnrichedWeenie>, AceDbError> {
        let detail = self.get_weenie(class_id).await?;
        Ok(detail.map(|detail| EnrichedWeenie {
            presentation: detail.presentation(),
            detail,
        }))
    }

    async fn fetch_rows<R: DeserializeOwned>(&self, sql: &str) -> Result<Vec<R>, AceDbError> {
        let text = self.transport.query(sql).await?;
        serde_json::from_str(&text).map_err(|e| {
            AceDbError::parse(format!(
                "Failed to parse rows: {e}. Response: {}",
                excerpt(&text, 200)
            ))
        })
    }
}

/// First `max` bytes of `text`, cut back to a char boundary.
fn excerpt(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
