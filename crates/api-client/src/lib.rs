//! HTTP client for the Smart-Assign candidate API.
//!
//! The API has a single read endpoint, `GET {base_url}/all-candidates`,
//! returning every candidate as a JSON array. This crate wraps that call:
//! - Building the HTTP client from a `ClientConfig`
//! - Decoding the payload into `CandidateSummary` values, order preserved,
//!   through the same record normalization as snapshot files
//! - Classifying failures (transport, HTTP status, malformed body, bad record)
//!
//! There is no retry and no partial result: a call either yields the whole
//! list or an error.

pub mod config;

pub use config::{ClientConfig, DEFAULT_BASE_URL};

use candidates::{CandidateSummary, DataLoadError, normalize_records};
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, info};

/// Error bodies longer than this are cut before being stored.
const MAX_ERROR_BODY_CHARS: usize = 8 * 1024;

/// Errors that can occur when fetching candidates
#[derive(Error, Debug)]
pub enum ApiClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("candidate API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("invalid candidate payload: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("invalid candidate record: {0}")]
    InvalidRecord(#[from] DataLoadError),
}

pub type Result<T> = std::result::Result<T, ApiClientError>;

/// Client for the candidate API.
#[derive(Clone)]
pub struct CandidateClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl CandidateClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("smart-assign/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch the full candidate list.
    ///
    /// # Returns
    /// Every candidate in the order the API sent them.
    pub async fn fetch_all_candidates(&self) -> Result<Vec<CandidateSummary>> {
        let url = self.config.all_candidates_url();
        info!("Fetching candidates from {}", url);

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let body: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
            error!("Candidate API returned {} for {}", status, url);
            return Err(ApiClientError::Status { status, body });
        }

        let bytes = resp.bytes().await?;
        let records: Vec<Value> = serde_json::from_slice(&bytes)?;
        let candidates = normalize_records(&records)?;
        debug!("Decoded {} candidates ({} bytes)", candidates.len(), bytes.len());
        Ok(candidates)
    }
}
