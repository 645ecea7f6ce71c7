//! Fetch stage tests against a mock HTTP server.

mod helpers;

use std::time::Duration;

use food_table::storage::{read_item_list, DataPaths, DocumentSource, DocumentStore};
use food_table::{fetch_missing_documents, run_pipeline, Config, FetchError, Stage};
use helpers::{catalog_page, detail_page, stub};
use httptest::{matchers::*, responders::*, Expectation, Server};
use tempfile::TempDir;

fn config_for(dir: &TempDir, server: &Server) -> Config {
    Config {
        data_dir: dir.path().to_path_buf(),
        index_url: server.url_str("/ISGEM/FoodTable.aspx"),
        detail_url: server.url_str("/ISGEM/details1.aspx"),
        request_delay: Duration::ZERO,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_fetch_and_parse_index() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/ISGEM/FoodTable.aspx")).respond_with(
            status_code(200).body(catalog_page(&[("7", "Ýsa", "Haddock"), ("2", "Lax", "Salmon")])),
        ),
    );

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = config_for(&temp_dir, &server);

    run_pipeline(config.clone(), Some(Stage::FetchIndex))
        .await
        .expect("Index fetch should succeed");
    let report = run_pipeline(config, Some(Stage::ParseIndex))
        .await
        .expect("Index parse should succeed");
    assert_eq!(report.catalog_size, 2);

    let items = read_item_list(&DataPaths::new(temp_dir.path())).unwrap();
    assert_eq!(items[0], stub("2", "Lax", "Salmon"));
    assert_eq!(items[1], stub("7", "Ýsa", "Haddock"));
}

#[tokio::test]
async fn test_fetch_missing_documents_skips_stored_pages() {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/ISGEM/details1.aspx"),
            request::query(url_decoded(contains(("FAEDA", "2")))),
        ])
        .times(1)
        .respond_with(status_code(200).body(detail_page(&[&["Vatn", "g", "1"]]))),
    );

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = config_for(&temp_dir, &server);
    let store = DocumentStore::new(DataPaths::new(temp_dir.path()));
    store.persist("1", b"<html>stored</html>").unwrap();

    let client = reqwest::Client::new();
    let items = [stub("1", "A", "A"), stub("2", "B", "B")];
    let report = fetch_missing_documents(&client, &config, &store, &items)
        .await
        .expect("Fetch should succeed");

    assert_eq!(report.downloaded, 1);
    assert_eq!(report.skipped, 1);
    assert!(store.exists("2"));
    assert!(store.load("2").unwrap().contains("GridView1"));
    assert_eq!(store.load("1").unwrap(), "<html>stored</html>");
}

#[tokio::test]
async fn test_fetched_pages_are_stored_byte_for_byte() {
    // Latin-1 body that is not valid UTF-8
    let body: Vec<u8> = b"<html><td>Kj\xf6t</td></html>".to_vec();
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/ISGEM/details1.aspx"))
            .times(1)
            .respond_with(status_code(200).body(body.clone())),
    );

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = config_for(&temp_dir, &server);
    let store = DocumentStore::new(DataPaths::new(temp_dir.path()));

    let client = reqwest::Client::new();
    let report = fetch_missing_documents(&client, &config, &store, &[stub("9", "Kjöt", "Meat")])
        .await
        .expect("Fetch should succeed");
    assert_eq!(report.downloaded, 1);

    let stored = std::fs::read(store.paths().item_document("9")).unwrap();
    assert_eq!(stored, body);
}

#[tokio::test]
async fn test_fetch_error_status_aborts() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/ISGEM/details1.aspx"))
            .times(1)
            .respond_with(status_code(500)),
    );

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = config_for(&temp_dir, &server);
    let store = DocumentStore::new(DataPaths::new(temp_dir.path()));

    let client = reqwest::Client::new();
    let items = [stub("1", "A", "A"), stub("2", "B", "B")];
    let result = fetch_missing_documents(&client, &config, &store, &items).await;

    assert!(matches!(result, Err(FetchError::Http(_))));
    assert!(!store.exists("1"));
    assert!(!store.exists("2"));
}

#[tokio::test]
async fn test_full_pipeline() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/ISGEM/FoodTable.aspx")).respond_with(
            status_code(200).body(catalog_page(&[("1", "Ýsa", "Haddock"), ("2", "Lax", "Salmon")])),
        ),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/ISGEM/details1.aspx"),
            request::query(url_decoded(contains(("FAEDA", "1")))),
        ])
        .respond_with(status_code(200).body(detail_page(&[&["Vatn", "g", "81,2"]]))),
    );
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/ISGEM/details1.aspx"),
            request::query(url_decoded(contains(("FAEDA", "2")))),
        ])
        .respond_with(status_code(200).body(detail_page(&[&["Prótein, alls", "g", "20"]]))),
    );

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let report = run_pipeline(config_for(&temp_dir, &server), None)
        .await
        .expect("Pipeline should succeed");

    assert_eq!(report.stages, Stage::ALL.to_vec());
    assert_eq!(report.catalog_size, 2);
    assert_eq!(report.downloaded, 2);
    assert_eq!(report.parsed, 2);
    assert_eq!(report.failed, 0);

    let text = std::fs::read_to_string(DataPaths::new(temp_dir.path()).dataset_min()).unwrap();
    let dataset: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(dataset[0]["nutrients"][0]["amount"], 81.2);
    assert_eq!(dataset[1]["nutrients"][0]["field"], "protein");
}
