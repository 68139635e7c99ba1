use tracing::{info, warn};

use crate::config::Config;
use crate::fetcher::Fetcher;
use crate::types::{JobPosting, RawJobHit, SearchQuery};

/// Runs the keyword x location cross-product against the fetcher and
/// flattens the normalized results into one ordered candidate list.
///
/// Pairs are visited keyword-major, location-minor, one request at a
/// time. A failed pair contributes nothing and the remaining pairs still
/// run. No cross-pair dedup happens here; that is the merger's job.
pub async fn aggregate(fetcher: &Fetcher, config: &Config) -> Vec<JobPosting> {
    let mut candidates = Vec::new();

    for keyword in &config.keywords {
        for location in &config.locations {
            info!("searching '{}' in {}", keyword, location);

            let query = SearchQuery::new(keyword.clone(), location.clone());
            let hits = match fetcher.fetch(&query, config.limit).await {
                Ok(hits) => hits,
                Err(err) => {
                    warn!("search for '{}' in {} failed: {}", keyword, location, err);
                    Vec::new()
                }
            };

            let cleaned = query.cleaned_keyword();
            candidates.extend(hits.into_iter().map(|hit| normalize(hit, &cleaned)));
        }
    }

    candidates
}

/// Turns a raw hit into the canonical record shape.
///
/// Missing or null fields become empty strings. A non-empty URL gets
/// exactly one trailing space appended; an empty URL stays empty.
pub fn normalize(hit: RawJobHit, keyword: &str) -> JobPosting {
    let url = match hit.webpage_url {
        Some(url) if !url.is_empty() => format!("{} ", url),
        _ => String::new(),
    };

    JobPosting {
        keyword: keyword.to_string(),
        title: hit.headline.unwrap_or_default(),
        company: hit
            .employer
            .and_then(|employer| employer.name)
            .unwrap_or_default(),
        location: hit
            .workplace_address
            .and_then(|address| address.municipality)
            .unwrap_or_default(),
        url,
        published: hit.publication_date.unwrap_or_default(),
    }
}
