use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use crate::types::{RawJobHit, Result, SearchQuery, SearchResponse, WatchError};

/// Public JobTech job-search endpoint.
pub const SEARCH_ENDPOINT: &str = "https://jobsearch.api.jobtechdev.se/search";

/// Server-side cap on the per-request hit count.
pub const MAX_LIMIT: u32 = 100;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct Fetcher {
    client: Client,
    endpoint: String,
}

impl Fetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to create HTTP client");

        Self {
            client,
            endpoint: SEARCH_ENDPOINT.to_string(),
        }
    }

    /// Point the fetcher at a different search endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Issues one search request for the pair and post-filters the hits.
    ///
    /// Exactly one request per call, no retries; any failure (connect,
    /// timeout, non-2xx status, undecodable body) comes back as `Err` and
    /// the caller decides what that means. Hit order is preserved from
    /// the upstream response.
    pub async fn fetch(&self, query: &SearchQuery, limit: u32) -> Result<Vec<RawJobHit>> {
        let search_text = query.search_text();
        let limit = limit.min(MAX_LIMIT);

        debug!(q = %search_text, limit, "requesting postings");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", search_text.clone()), ("limit", limit.to_string())])
            .header("accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WatchError::Status {
                status: status.as_u16(),
                query: search_text,
            });
        }

        let body: SearchResponse = response.json().await?;
        let total = body.total.value;

        let excluded = query.excluded_terms();
        let kept: Vec<RawJobHit> = body
            .hits
            .into_iter()
            .filter(|hit| in_location(hit, &query.location))
            .filter(|hit| !mentions_any(hit, &excluded))
            .collect();

        info!(
            "found {} postings in {} (of {} total)",
            kept.len(),
            query.location,
            total
        );

        Ok(kept)
    }
}

/// A hit with a known municipality must contain the requested location as
/// a case-insensitive substring. An unknown municipality is not grounds
/// for exclusion.
fn in_location(hit: &RawJobHit, location: &str) -> bool {
    match hit
        .workplace_address
        .as_ref()
        .and_then(|address| address.municipality.as_deref())
    {
        Some(municipality) if !municipality.is_empty() => municipality
            .to_lowercase()
            .contains(&location.to_lowercase()),
        _ => true,
    }
}

/// True when any negated term shows up in the headline or description.
fn mentions_any(hit: &RawJobHit, terms: &[String]) -> bool {
    if terms.is_empty() {
        return false;
    }

    let title = hit.headline.as_deref().unwrap_or_default().to_lowercase();
    let text = hit
        .description
        .as_ref()
        .and_then(|description| description.text.as_deref())
        .unwrap_or_default()
        .to_lowercase();

    terms
        .iter()
        .any(|term| title.contains(term) || text.contains(term))
}
