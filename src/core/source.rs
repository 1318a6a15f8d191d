//! Record data client.
//!
//! Fetches the static creature document over HTTP. One GET per call: no
//! timeout, no retry and no schema validation beyond the lenient record
//! decoding in [`crate::core::records::model`].

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

use crate::core::records::Record;

/// Fixed path of the static record document, relative to the base URL.
pub const RECORDS_PATH: &str = "/public/pokemon.json";

// ============================================================================
// Errors
// ============================================================================

/// Reasons a record fetch can fail.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The server answered with anything other than 200.
    #[error("Error fetching data: Failed to fetch data. Status: {status}")]
    Status { status: u16 },

    /// Connection, TLS or protocol failure before a response arrived.
    #[error("Error fetching data from {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body was not a JSON array of objects.
    #[error("Error fetching data from {url}: invalid body: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The configured base URL could not be combined with the record path.
    #[error("Error fetching data: invalid source URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl FetchError {
    /// HTTP status carried by the error, if the server responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            _ => None,
        }
    }
}

// ============================================================================
// Source trait
// ============================================================================

/// Anything that can produce the full record list in one call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch_records(&self) -> Result<Vec<Record>, FetchError>;
}

// ============================================================================
// HTTP source
// ============================================================================

/// Reads the record document from `<base_url>/public/pokemon.json`.
#[derive(Clone)]
pub struct HttpRecordSource {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpRecordSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Resolved document URL.
    pub fn url(&self) -> Result<Url, FetchError> {
        Url::parse(&self.base_url)
            .and_then(|base| base.join(RECORDS_PATH))
            .map_err(|source| FetchError::InvalidUrl {
                url: self.base_url.clone(),
                source,
            })
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch_records(&self) -> Result<Vec<Record>, FetchError> {
        let url = self.url()?;
        tracing::debug!(%url, "fetching records");

        let response = self
            .http_client
            .get(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let records: Vec<Record> = response.json().await.map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })?;

        tracing::info!(count = records.len(), "records fetched");
        Ok(records)
    }
}
