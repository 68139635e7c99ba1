use jobwatch::{store, JobPosting};
use tempfile::tempdir;

#[test]
fn history_round_trips_through_csv() {
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("jobs.csv");
    let xlsx_path = dir.path().join("jobs.xlsx");

    let records = vec![
        JobPosting {
            keyword: "utvecklare".to_string(),
            title: "Senior utvecklare".to_string(),
            company: "Acme AB".to_string(),
            location: "Lund".to_string(),
            url: "http://x/1 ".to_string(),
            published: "2025-05-02".to_string(),
        },
        JobPosting::default(),
        JobPosting {
            keyword: "--- Updated 2025-06-01 09:30 ---".to_string(),
            ..JobPosting::default()
        },
        JobPosting {
            keyword: "utvecklare".to_string(),
            title: "Utvecklare, önskas snarast".to_string(),
            company: "Smörgåsbord & Söner".to_string(),
            location: "Malmö".to_string(),
            url: "http://x/2 ".to_string(),
            published: "2025-05-03".to_string(),
        },
    ];

    store::write_history(&csv_path, &xlsx_path, &records).unwrap();

    let raw = std::fs::read(&csv_path).unwrap();
    assert!(raw.starts_with(b"\xef\xbb\xbf"));
    assert!(xlsx_path.exists());

    let read_back = store::read_history(&csv_path).unwrap();
    assert_eq!(read_back, records);
}

#[test]
fn trailing_url_space_survives_the_round_trip() {
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("jobs.csv");
    let xlsx_path = dir.path().join("jobs.xlsx");

    let records = vec![JobPosting {
        keyword: "rust".to_string(),
        url: "http://x/1 ".to_string(),
        ..JobPosting::default()
    }];

    store::write_history(&csv_path, &xlsx_path, &records).unwrap();
    let read_back = store::read_history(&csv_path).unwrap();

    assert_eq!(read_back[0].url, "http://x/1 ");
}

#[test]
fn missing_file_reads_as_empty_history() {
    let dir = tempdir().unwrap();

    let history = store::read_history(dir.path().join("absent.csv")).unwrap();

    assert!(history.is_empty());
}

#[test]
fn file_without_bom_is_still_readable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("jobs.csv");
    std::fs::write(
        &path,
        "keyword,title,company,location,url,published\nrust,Dev,Acme,Lund,http://x/1 ,2025-05-01\n",
    )
    .unwrap();

    let history = store::read_history(&path).unwrap();

    assert_eq!(history.len(), 1);
    assert_eq!(history[0].url, "http://x/1 ");
}

#[test]
fn corrupt_file_is_an_error_for_the_caller_to_downgrade() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("jobs.csv");
    std::fs::write(&path, "keyword,title\n\"unterminated").unwrap();

    assert!(store::read_history(&path).is_err());
}
