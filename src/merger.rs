use std::collections::HashSet;

use chrono::{DateTime, Local};

use crate::types::JobPosting;

/// Result of merging one run's candidates into the persisted history.
#[derive(Debug)]
pub struct MergeOutcome {
    pub history: Vec<JobPosting>,
    pub added: usize,
}

/// Appends previously unseen candidates to the history.
///
/// Known postings are identified by trimmed URL; the first occurrence of
/// a URL wins, both against the existing history and within the batch.
/// When nothing is new the history comes back untouched with zero added
/// and the caller must not rewrite the store.
pub fn merge(
    existing: Vec<JobPosting>,
    candidates: Vec<JobPosting>,
    stamp: DateTime<Local>,
) -> MergeOutcome {
    let mut known: HashSet<String> = existing
        .iter()
        .map(|job| job.url.trim())
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect();

    let mut new_jobs = Vec::new();
    for job in candidates {
        let key = job.url.trim().to_string();
        if key.is_empty() || known.contains(&key) {
            continue;
        }
        known.insert(key);
        new_jobs.push(job);
    }

    if new_jobs.is_empty() {
        return MergeOutcome {
            history: existing,
            added: 0,
        };
    }

    let added = new_jobs.len();
    let mut history = existing;
    history.push(JobPosting::default());
    history.push(JobPosting {
        keyword: batch_label(stamp),
        ..JobPosting::default()
    });
    history.extend(new_jobs);

    MergeOutcome { history, added }
}

/// Content of the label row marking the start of a batch of new postings.
pub fn batch_label(stamp: DateTime<Local>) -> String {
    format!("--- Updated {} ---", stamp.format("%Y-%m-%d %H:%M"))
}

/// Collapses trailing whitespace on every real URL to exactly one
/// trailing space before serialization. Separator and label rows carry
/// no URL and are left blank.
pub fn finalize_urls(records: &mut [JobPosting]) {
    for record in records {
        if !record.url.trim().is_empty() {
            record.url = format!("{} ", record.url.trim_end());
        }
    }
}
