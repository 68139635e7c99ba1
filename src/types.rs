use serde::{Deserialize, Serialize};

/// Marker prefix for keyword tokens that must not appear in results.
pub const NEGATION_MARKER: char = '-';

/// One hit as returned by the JobTech search API.
///
/// Every field can be absent or `null` upstream. The aggregator turns
/// missing values into empty strings when it normalizes; nothing here is
/// ever an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawJobHit {
    pub headline: Option<String>,
    pub description: Option<JobDescription>,
    pub workplace_address: Option<WorkplaceAddress>,
    pub employer: Option<Employer>,
    pub webpage_url: Option<String>,
    pub publication_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobDescription {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkplaceAddress {
    pub municipality: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Employer {
    pub name: Option<String>,
}

/// Body shape of a search response: a page of hits plus the total count
/// the server knows about. The total is only used for progress logging.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: Vec<RawJobHit>,
    #[serde(default)]
    pub total: TotalCount,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct TotalCount {
    #[serde(default)]
    pub value: u64,
}

/// Canonical posting record and the row shape of the history file.
///
/// `url` is the dedup key: two records with equal non-empty trimmed URLs
/// are the same posting. Separator rows are all-empty; a batch label row
/// sets only `keyword`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default)]
    pub keyword: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub published: String,
}

/// One (keyword, location) pair from the configuration cross-product.
///
/// The keyword may embed negation tokens (`-junior`). Those are stripped
/// from the text sent upstream and from the stored keyword, and matched
/// against result text to drop hits.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub keyword: String,
    pub location: String,
}

impl SearchQuery {
    pub fn new(keyword: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            location: location.into(),
        }
    }

    /// The keyword with negation tokens removed, re-joined with single spaces.
    pub fn cleaned_keyword(&self) -> String {
        self.keyword
            .split_whitespace()
            .filter(|word| !word.starts_with(NEGATION_MARKER))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Lower-cased negated tokens with the marker stripped.
    pub fn excluded_terms(&self) -> Vec<String> {
        self.keyword
            .split_whitespace()
            .filter_map(|word| word.strip_prefix(NEGATION_MARKER))
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
            .collect()
    }

    /// Search text sent upstream as the `q` parameter.
    pub fn search_text(&self) -> String {
        format!("{} {}", self.cleaned_keyword(), self.location)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WatchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned HTTP {status} for '{query}'")]
    Status { status: u16, query: String },

    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WatchError>;
