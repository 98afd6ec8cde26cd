mod common;

use common::*;
use pressxl::{FetchConfig, Fetcher, IngestionPipeline, PressError, RecordManager, Translate, TranslatorAdapter};
use std::sync::Arc;
use wiremock::MockServer;

fn pipeline(
    server: &MockServer,
    store: Arc<RecordManager>,
    translator: Arc<dyn Translate>,
) -> IngestionPipeline {
    let fetcher = Arc::new(Fetcher::new(FetchConfig::default()).unwrap());
    let adapter = TranslatorAdapter::new(
        translator,
        "en".to_string(),
        vec!["fr".to_string(), "de".to_string()],
    );
    IngestionPipeline::new(format!("{}/feed.xml", server.uri()), fetcher, adapter, store)
}

async fn two_release_server() -> MockServer {
    let server = MockServer::start().await;
    let feed = rss(
        &server.uri(),
        &[
            Item { slug: "expansion", title: "Acme expands", pub_date: "Mon, 21 Oct 2024 09:00:00 GMT" },
            Item { slug: "results", title: "Acme results", pub_date: "Mon, 21 Oct 2024 08:00:00 GMT" },
        ],
    );
    mount_feed(&server, feed).await;
    mount_article(
        &server,
        "expansion",
        article("Acme expands into Europe", "Acme opened three offices in Europe today. Hiring starts next month."),
    )
    .await;
    mount_article(
        &server,
        "results",
        article("Acme reports results", "Acme reported record revenue for the third quarter."),
    )
    .await;
    server
}

#[tokio::test]
async fn new_entries_are_stored_in_every_language() {
    let server = two_release_server().await;
    let store = memory_store().await;

    let summary = pipeline(&server, store.clone(), Arc::new(StubTranslator))
        .run()
        .await
        .unwrap();

    assert_eq!(summary.total_entries, 2);
    assert_eq!(summary.new_entries, 2);
    assert_eq!(store.count().await.unwrap(), 2);

    let listed = store.list(0, 10).await.unwrap();
    let record = store.get(listed[0].id).await.unwrap().unwrap();
    assert_eq!(record.title, "Acme expands");

    let languages: Vec<&str> = record.body.keys().map(String::as_str).collect();
    assert_eq!(languages, vec!["de", "en", "fr"]);
    assert!(record.body["en"].starts_with("<div><h1>Acme expands into Europe</h1>"));
    assert!(record.body["en"].contains("Acme opened three offices in Europe today."));
    assert!(record.body["fr"].starts_with("[fr] "));
    assert!(record.body["fr"].contains(" [fr] Hiring starts next month."));
    assert!(record.body["de"].starts_with("[de] "));
}

#[tokio::test]
async fn known_links_are_skipped() {
    let server = two_release_server().await;
    let store = memory_store().await;
    let existing = format!("{}/results", server.uri());
    store
        .insert(&record(&existing, "Acme results", published(8)))
        .await
        .unwrap();

    let summary = pipeline(&server, store.clone(), Arc::new(StubTranslator))
        .run()
        .await
        .unwrap();

    assert_eq!(summary.to_string(), "OK. Processed 2 entries, 1 new.");
    assert_eq!(store.count().await.unwrap(), 2);

    let requests = server.received_requests().await.unwrap();
    assert!(requests.iter().all(|request| request.url.path() != "/results"));
}

#[tokio::test]
async fn second_run_stores_nothing_new() {
    let server = two_release_server().await;
    let store = memory_store().await;
    let pipeline = pipeline(&server, store.clone(), Arc::new(StubTranslator));

    pipeline.run().await.unwrap();
    let again = pipeline.run().await.unwrap();

    assert_eq!(again.total_entries, 2);
    assert_eq!(again.new_entries, 0);
    assert_eq!(store.count().await.unwrap(), 2);
}

#[tokio::test]
async fn entries_are_processed_oldest_first() {
    let server = two_release_server().await;
    let store = memory_store().await;

    pipeline(&server, store, Arc::new(StubTranslator))
        .run()
        .await
        .unwrap();

    let paths: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|request| request.url.path().to_string())
        .filter(|path| path != "/feed.xml")
        .collect();
    assert_eq!(paths, vec!["/results", "/expansion"]);
}

#[tokio::test]
async fn translation_failure_aborts_run_without_partial_records() {
    let server = two_release_server().await;
    let store = memory_store().await;

    // The newer release fails; the older one is processed first and kept.
    let translator = Arc::new(FailingTranslator { trigger: "Hiring" });
    let err = pipeline(&server, store.clone(), translator)
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, PressError::Translation { .. }));
    assert_eq!(store.count().await.unwrap(), 1);
    assert!(store.exists_by_link(&format!("{}/results", server.uri())).await.unwrap());
    assert!(!store.exists_by_link(&format!("{}/expansion", server.uri())).await.unwrap());
}

#[tokio::test]
async fn unreachable_article_is_a_retrieval_error() {
    let server = MockServer::start().await;
    let feed = rss(
        &server.uri(),
        &[Item { slug: "missing", title: "Gone", pub_date: "Mon, 21 Oct 2024 09:00:00 GMT" }],
    );
    mount_feed(&server, feed).await;
    let store = memory_store().await;

    let err = pipeline(&server, store.clone(), Arc::new(StubTranslator))
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, PressError::Retrieval { .. }));
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn feed_error_is_a_fetch_error() {
    let server = MockServer::start().await;
    let store = memory_store().await;

    let err = pipeline(&server, store, Arc::new(StubTranslator))
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, PressError::Fetch { .. }));
}
