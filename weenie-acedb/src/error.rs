/// Errors that can occur while querying the ACE world database.
#[derive(Debug, thiserror::Error)]
pub enum AceDbError {
    #[error("Remote query failed (HTTP {status}): {reason}")]
    RemoteQuery { status: u16, reason: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AceDbError {
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether the remote endpoint answered with a non-success status.
    pub fn is_remote_query(&self) -> bool {
        matches!(self, Self::RemoteQuery { .. })
    }
}
