pub mod aggregator;
pub mod config;
pub mod fetcher;
pub mod merger;
pub mod relevance;
pub mod store;
pub mod types;

pub use aggregator::{aggregate, normalize};
pub use config::Config;
pub use fetcher::Fetcher;
pub use merger::{batch_label, finalize_urls, merge, MergeOutcome};
pub use relevance::{filter_candidates, is_relevant};
pub use types::{JobPosting, RawJobHit, Result, SearchQuery, WatchError};
