use eiopa_rfr::{DownloadConfig, DownloadStatus, Downloader, HttpFetcher, ZipExtractor};
use httpmock::prelude::*;
use std::io::{Cursor, Write};
use std::path::Path;
use tempfile::TempDir;
use zip::write::{FileOptions, ZipWriter};

fn build_zip(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in entries {
        zip.start_file::<_, ()>(*name, FileOptions::default()).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

fn config_for(server: &MockServer, root: &Path) -> DownloadConfig {
    DownloadConfig {
        years: vec![2016],
        raw_data_path: root.join("raw"),
        clean_data_path: root.join("clean"),
        base_url: server.url("/rfr"),
        ..DownloadConfig::default()
    }
}

#[tokio::test]
async fn test_end_to_end_with_failure_in_the_middle() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();

    let january = server.mock(|when, then| {
        when.method(GET).path("/rfr/eiopa_rfr_20160131.zip");
        then.status(200)
            .header("Content-Type", "application/zip")
            .body(build_zip(&[
                ("EIOPA_RFR_20160131_Term_Structures.csv", "1,0.01\n2,0.02\n"),
                ("docs/readme.txt", "January"),
            ]));
    });
    let february = server.mock(|when, then| {
        when.method(GET).path("/rfr/eiopa_rfr_20160229.zip");
        then.status(500);
    });
    let march = server.mock(|when, then| {
        when.method(GET).path("/rfr/eiopa_rfr_20160331.zip");
        then.status(200)
            .body(build_zip(&[("EIOPA_RFR_20160331_Term_Structures.csv", "1,0.03\n")]));
    });

    let config = config_for(&server, temp_dir.path());
    let downloader = Downloader::new(HttpFetcher::new(), ZipExtractor::new(), config);
    downloader.prepare_directories().unwrap();

    let outcomes = downloader.run().await;

    january.assert();
    february.assert();
    march.assert();

    // unmatched months get httpmock's default 404
    assert_eq!(outcomes.len(), 12);
    assert!(matches!(outcomes[0].status, DownloadStatus::Extracted { files: 2 }));
    assert!(matches!(outcomes[1].status, DownloadStatus::NotAvailable));
    assert!(matches!(outcomes[2].status, DownloadStatus::Extracted { files: 1 }));
    assert!(outcomes[3..]
        .iter()
        .all(|o| matches!(o.status, DownloadStatus::NotAvailable)));

    let source_root = temp_dir.path().join("raw").join("EIOPA-RFR");
    assert_eq!(
        std::fs::read_to_string(
            source_root
                .join("2016-01-31")
                .join("EIOPA_RFR_20160131_Term_Structures.csv")
        )
        .unwrap(),
        "1,0.01\n2,0.02\n"
    );
    assert_eq!(
        std::fs::read_to_string(source_root.join("2016-01-31/docs/readme.txt")).unwrap(),
        "January"
    );
    assert!(!source_root.join("2016-02-29").exists());
    assert!(source_root
        .join("2016-03-31")
        .join("EIOPA_RFR_20160331_Term_Structures.csv")
        .exists());
    assert!(temp_dir.path().join("clean").is_dir());
}

#[tokio::test]
async fn test_rerun_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();

    let archive = build_zip(&[("a.txt", "alpha"), ("sub/b.txt", "beta")]);
    let june = server.mock(|when, then| {
        when.method(GET).path("/rfr/eiopa_rfr_20160630.zip");
        then.status(200).body(archive.clone());
    });

    let config = config_for(&server, temp_dir.path());
    let downloader = Downloader::new(HttpFetcher::new(), ZipExtractor::new(), config);
    downloader.prepare_directories().unwrap();

    let destination = temp_dir.path().join("raw/EIOPA-RFR/2016-06-30");

    downloader.run().await;
    let first_a = std::fs::read(destination.join("a.txt")).unwrap();
    let first_b = std::fs::read(destination.join("sub/b.txt")).unwrap();

    downloader.run().await;
    let second_a = std::fs::read(destination.join("a.txt")).unwrap();
    let second_b = std::fs::read(destination.join("sub/b.txt")).unwrap();

    june.assert_hits(2);
    assert_eq!(first_a, b"alpha");
    assert_eq!(first_b, b"beta");
    assert_eq!(first_a, second_a);
    assert_eq!(first_b, second_b);
}

#[tokio::test]
async fn test_corrupt_archive_does_not_stop_later_dates() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();

    let corrupt = server.mock(|when, then| {
        when.method(GET).path("/rfr/eiopa_rfr_20161130.zip");
        then.status(200).body("<html>Page not found</html>");
    });
    let december = server.mock(|when, then| {
        when.method(GET).path("/rfr/eiopa_rfr_20161231.zip");
        then.status(200).body(build_zip(&[("rates.csv", "12")]));
    });

    let config = config_for(&server, temp_dir.path());
    let downloader = Downloader::new(HttpFetcher::new(), ZipExtractor::new(), config);
    let outcomes = downloader.run().await;

    corrupt.assert();
    december.assert();
    assert!(matches!(
        outcomes[10].status,
        DownloadStatus::Failed(eiopa_rfr::DownloadError::ZipError(_))
    ));
    assert!(outcomes[11].status.is_success());
    assert!(temp_dir
        .path()
        .join("raw/EIOPA-RFR/2016-12-31/rates.csv")
        .exists());
}

#[tokio::test]
async fn test_unreachable_server_fails_every_date_without_panicking() {
    let temp_dir = TempDir::new().unwrap();
    let config = DownloadConfig {
        years: vec![2017],
        raw_data_path: temp_dir.path().join("raw"),
        clean_data_path: temp_dir.path().join("clean"),
        base_url: "http://127.0.0.1:1/rfr".to_string(),
        ..DownloadConfig::default()
    };

    let downloader = Downloader::new(HttpFetcher::new(), ZipExtractor::new(), config);
    let outcomes = downloader.run().await;

    assert_eq!(outcomes.len(), 12);
    assert!(outcomes.iter().all(|o| matches!(
        o.status,
        DownloadStatus::Failed(eiopa_rfr::DownloadError::HttpError(_))
    )));
}

#[tokio::test]
async fn test_config_file_drives_the_run() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/mirror/rfr_20180131.zip");
        then.status(200).body(build_zip(&[("x.csv", "x")]));
    });

    let config_path = temp_dir.path().join("rfr.toml");
    let toml_content = format!(
        r#"
years = [2018]
raw_data_path = "{raw}"
clean_data_path = "{clean}"
source_name = "RFR"
base_url = "{base}"
file_prefix = "rfr"
"#,
        raw = temp_dir.path().join("raw").display(),
        clean = temp_dir.path().join("clean").display(),
        base = server.url("/mirror"),
    );
    std::fs::write(&config_path, toml_content).unwrap();

    let config = DownloadConfig::from_file(&config_path).unwrap();
    let downloader = Downloader::new(HttpFetcher::new(), ZipExtractor::new(), config);
    downloader.prepare_directories().unwrap();
    let outcomes = downloader.run().await;

    mock.assert();
    assert_eq!(outcomes.iter().filter(|o| o.status.is_success()).count(), 1);
    assert!(temp_dir.path().join("raw/RFR/2018-01-31/x.csv").exists());
}
