use std::future::Future;

use crate::config::AceDbConfig;
use crate::error::AceDbError;
use crate::sql;

/// Runs a SQL statement against the remote dataset and returns the raw
/// response body (a JSON array of row objects).
///
/// [`AceDbClient`] is the HTTP implementation; the lookup layer only sees
/// this trait.
pub trait QueryTransport: Send + Sync {
    fn query(&self, sql: &str) -> impl Future<Output = Result<String, AceDbError>> + Send;
}

/// HTTP client for the ACE world database's SQL endpoint.
#[derive(Debug, Clone)]
pub struct AceDbClient {
    http: reqwest::Client,
    base_url: String,
}

impl AceDbClient {
    pub fn new(config: &AceDbConfig) -> Result<Self, AceDbError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        // Fail on a bad base URL now rather than on the first query.
        sql::query_url(&config.base_url, "")?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl QueryTransport for AceDbClient {
    async fn query(&self, sql: &str) -> Result<String, AceDbError> {
        let url = sql::query_url(&self.base_url, sql)?;
        log::debug!("acedb query: {}", sql);

        let resp = self.http.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("unknown status").to_string();
            log::warn!("acedb query failed with HTTP {}: {}", status.as_u16(), reason);
            return Err(AceDbError::RemoteQuery {
                status: status.as_u16(),
                reason,
            });
        }

        Ok(resp.text().await?)
    }
}
