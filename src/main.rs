use anyhow::Context;
use chrono::Local;
use jobwatch::{aggregator, merger, relevance, store, Config, Fetcher};
use tracing::{info, warn};

const CONFIG_FILE: &str = "config.yml";
const CSV_FILE: &str = "jobs.csv";
const XLSX_FILE: &str = "jobs.xlsx";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    info!("starting job watch");

    let config =
        Config::load(CONFIG_FILE).with_context(|| format!("reading {}", CONFIG_FILE))?;

    let fetcher = Fetcher::new();
    let candidates = aggregator::aggregate(&fetcher, &config).await;

    if candidates.is_empty() {
        info!("no postings found");
        return Ok(());
    }

    info!("filtering {} candidates", candidates.len());
    let relevant =
        relevance::filter_candidates(candidates, &config.include_words, &config.exclude_words);
    info!("{} relevant postings", relevant.len());

    let existing = match store::read_history(CSV_FILE) {
        Ok(history) => history,
        Err(err) => {
            warn!("could not read existing history, starting from empty: {}", err);
            Vec::new()
        }
    };

    let outcome = merger::merge(existing, relevant, Local::now());
    if outcome.added == 0 {
        info!("no new postings, file left untouched");
        return Ok(());
    }

    let mut history = outcome.history;
    merger::finalize_urls(&mut history);
    store::write_history(CSV_FILE, XLSX_FILE, &history).context("writing history files")?;

    info!("done, saved {} new postings", outcome.added);
    Ok(())
}
