use tracing::debug;

use crate::types::JobPosting;

/// Decides whether a posting's text makes it worth keeping.
///
/// The match text is the lower-cased title plus company name. At least
/// one include word must appear as a substring, and no exclude word may;
/// exclusion is checked after inclusion and wins when both match. An
/// empty include list keeps nothing.
pub fn is_relevant(
    title: &str,
    company: &str,
    include_words: &[String],
    exclude_words: &[String],
) -> bool {
    let text = format!("{} {}", title, company).to_lowercase();

    let found_good = include_words
        .iter()
        .any(|word| text.contains(&word.to_lowercase()));
    if !found_good {
        return false;
    }

    !exclude_words
        .iter()
        .any(|word| text.contains(&word.to_lowercase()))
}

/// Drops candidates with blank URLs, then candidates that fail the
/// include/exclude word check. Order is preserved.
pub fn filter_candidates(
    candidates: Vec<JobPosting>,
    include_words: &[String],
    exclude_words: &[String],
) -> Vec<JobPosting> {
    let before = candidates.len();
    let kept: Vec<JobPosting> = candidates
        .into_iter()
        .filter(|job| !job.url.trim().is_empty())
        .filter(|job| is_relevant(&job.title, &job.company, include_words, exclude_words))
        .collect();

    debug!("kept {} of {} candidates", kept.len(), before);
    kept
}
