use chrono::Local;
use jobwatch::{aggregator, filter_candidates, merge, Config, Fetcher};
use mockito::Matcher;
use serde_json::json;

// Full run against a mock server: fetch, normalize, filter, merge twice.
#[tokio::test]
async fn end_to_end_run_appends_only_new_relevant_postings() {
    let mut server = mockito::Server::new_async().await;
    let body = json!({
        "hits": [
            {
                "headline": "Junior utvecklare",
                "employer": { "name": "Acme AB" },
                "workplace_address": { "municipality": "Lund" },
                "webpage_url": "http://x/junior",
                "publication_date": "2025-05-01"
            },
            {
                "headline": "Senior utvecklare",
                "employer": { "name": "Acme AB" },
                "workplace_address": { "municipality": "Lund" },
                "webpage_url": "http://x/1",
                "publication_date": "2025-05-02"
            },
            {
                "headline": "Utvecklare konsultuppdrag",
                "employer": { "name": "Bemanning AB" },
                "workplace_address": { "municipality": "Lund" },
                "webpage_url": "http://x/2",
                "publication_date": "2025-05-03"
            },
            {
                "headline": "Utvecklare",
                "employer": { "name": "Ingen Sida AB" },
                "workplace_address": { "municipality": "Lund" }
            }
        ],
        "total": { "value": 4 }
    });
    let _mock = server
        .mock("GET", "/")
        .match_query(Matcher::UrlEncoded("q".into(), "utvecklare Lund".into()))
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let config = Config {
        keywords: vec!["utvecklare -junior".to_string()],
        locations: vec!["Lund".to_string()],
        limit: 50,
        include_words: vec!["utvecklare".to_string()],
        exclude_words: vec!["bemanning".to_string()],
    };

    let fetcher = Fetcher::new().with_endpoint(server.url());
    let candidates = aggregator::aggregate(&fetcher, &config).await;

    // The junior posting never makes it past the fetch boundary, and the
    // stored keyword no longer carries the negation token.
    assert_eq!(candidates.len(), 3);
    assert!(candidates.iter().all(|job| job.keyword == "utvecklare"));

    let relevant = filter_candidates(candidates, &config.include_words, &config.exclude_words);

    // The staffing agency matches an exclude word even though its title
    // matches an include word, and the posting without a URL is dropped.
    assert_eq!(relevant.len(), 1);
    assert_eq!(relevant[0].title, "Senior utvecklare");
    assert_eq!(relevant[0].url, "http://x/1 ");

    let first = merge(Vec::new(), relevant.clone(), Local::now());
    assert_eq!(first.added, 1);

    let second = merge(first.history.clone(), relevant, Local::now());
    assert_eq!(second.added, 0);
    assert_eq!(second.history, first.history);
}
