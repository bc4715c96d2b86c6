//! Integration tests for the language map
//!
//! These tests exercise the complete workflow: raw records through
//! aggregation and snapshots into the store, the HTTP API on top of it,
//! and fetching raw records from a (mocked) remote source.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use tempfile::TempDir;
use tower::ServiceExt;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use language_map::coloring::palette_color;
use language_map::config::Config;
use language_map::loader::{load_records, load_store, validated, DataSource};
use language_map::server::{router, AppState};
use language_map::snapshot::write_snapshots;
use language_map::{aggregate, summarize, LanguageStore, RawCountryRecord};

// ==================== Test Helpers ====================

fn sample_records() -> Vec<RawCountryRecord> {
    vec![
        RawCountryRecord::new("United States", 331_900_000.0, true)
            .with_ccn3("840")
            .with_cca2("US")
            .with_language("English", 0.9)
            .with_language("Spanish", 0.13),
        RawCountryRecord::new("United Kingdom", 67_330_000.0, true)
            .with_ccn3("826")
            .with_cca2("GB")
            .with_language("English", 0.98),
        RawCountryRecord::new("Puerto Rico", 3_221_000.0, false)
            .with_ccn3("630")
            .with_cca2("PR")
            .with_language("Spanish", 0.94)
            .with_language("English", 0.2),
        RawCountryRecord::new("Taiwan", 23_570_000.0, false)
            .with_ccn3("158")
            .with_cca2("TW")
            .with_language("Chinese", 0.95),
    ]
}

fn sample_store() -> LanguageStore {
    LanguageStore::new(aggregate(&sample_records()))
}

fn app() -> Router {
    router(AppState::new(sample_store(), Config::default()))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.expect("Request failed");
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    (status, body.to_vec())
}

async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    let (status, body) = send(app(), request).await;
    (status, serde_json::from_slice(&body).expect("Body is not JSON"))
}

async fn post_json(uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let request = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, body) = send(app(), request).await;
    (status, serde_json::from_slice(&body).expect("Body is not JSON"))
}

// ==================== Pipeline Tests ====================

#[test]
fn test_records_to_snapshots_to_store() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let records = validated(sample_records());
    write_snapshots(temp_dir.path(), &aggregate(&records)).expect("Failed to write snapshots");

    let store = LanguageStore::load(temp_dir.path()).expect("Failed to load snapshots");

    assert_eq!(store.language_names(), vec!["english", "spanish", "chinese"]);

    let english = store.language("English").expect("english should exist");
    let names: Vec<&str> = english
        .countries
        .iter()
        .map(|c| c.common_name.as_str())
        .collect();
    assert_eq!(names, vec!["Puerto Rico", "United Kingdom", "United States"]);
    assert_eq!(english.statistics.number_of_countries, 3);
    assert_eq!(english.statistics.number_of_un_countries, 2);

    let us = store.country_by_id("840").expect("840 should exist");
    let in_spanish = store
        .language("spanish")
        .unwrap()
        .countries
        .iter()
        .find(|c| c.common_name == "United States")
        .unwrap();
    assert!(Arc::ptr_eq(us, in_spanish));
}

#[test]
fn test_invalid_records_are_skipped_before_aggregation() {
    let mut records = sample_records();
    records.push(RawCountryRecord::new("Atlantis", f64::NAN, false).with_language("Atlantean", 1.0));
    records.push(RawCountryRecord::new("Lilliput", 1_000.0, false).with_language("Lilliputian", 1.5));

    let indexes = aggregate(&validated(records));

    assert!(!indexes.languages().contains_key("atlantean"));
    assert!(!indexes.languages().contains_key("lilliputian"));
    assert_eq!(indexes.countries().len(), 4);
}

#[test]
fn test_totals_over_selection() {
    let store = sample_store();
    let selection = store.languages_by_name(&["english", "SPANISH"]);
    let totals = summarize(&selection);

    // Countries are counted once even when they speak both languages
    assert_eq!(totals.statistics.number_of_countries, 3);
    assert_eq!(totals.statistics.number_of_un_countries, 2);
    let expected = selection[0].statistics.total_speakers + selection[1].statistics.total_speakers;
    assert_eq!(totals.statistics.total_speakers, expected);
}

// ==================== HTTP API Tests ====================

#[tokio::test]
async fn test_health_check() {
    let request = Request::get("/health").body(Body::empty()).unwrap();
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn test_list_language_names() {
    let (status, body) = get_json("/api/languages").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!(["english", "spanish", "chinese"]));
}

#[tokio::test]
async fn test_post_languages_resolves_names() {
    let (status, body) = post_json(
        "/api/languages",
        serde_json::json!({
            "languageNames": ["Chinese", "klingon", "chinese"],
            "sessionID": "abc123"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let languages = body.as_array().expect("Expected an array");
    assert_eq!(languages.len(), 1);
    assert_eq!(languages[0]["name"], "chinese");
    assert_eq!(languages[0]["statistics"]["numberOfCountries"], 1);
    assert_eq!(languages[0]["statistics"]["numberOfUNCountries"], 0);
    assert_eq!(languages[0]["countries"][0]["commonName"], "Taiwan");
}

#[tokio::test]
async fn test_post_languages_without_session() {
    let (status, body) = post_json(
        "/api/languages",
        serde_json::json!({ "languageNames": [] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_selection_with_un_filter() {
    let (status, body) = post_json(
        "/api/selection",
        serde_json::json!({
            "languageNames": ["English", "spanish"],
            "unMember": true,
            "locale": "en-US"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);

    // Filtered lists only hold UN members
    let english_countries = body["languages"][0]["countries"].as_array().unwrap();
    assert_eq!(english_countries.len(), 2);
    assert!(english_countries.iter().all(|c| c["unMember"] == true));

    // Totals are built from the full selection
    assert_eq!(body["totals"]["name"], "Totals");
    assert_eq!(body["totals"]["statistics"]["numberOfCountries"], 3);
    assert_eq!(body["formatted"]["countries"], "2");
    assert_eq!(body["formatted"]["speakers"], "407,840,400");

    // Colors follow selection order, first language wins a shared country
    assert_eq!(body["languageColors"]["english"], palette_color(0));
    assert_eq!(body["languageColors"]["spanish"], palette_color(1));
    assert_eq!(body["countryColors"]["630"], palette_color(0));
    assert_eq!(body["countryColors"]["840"], palette_color(0));
}

#[tokio::test]
async fn test_selection_without_filter_uses_default_locale() {
    let (status, body) = post_json(
        "/api/selection",
        serde_json::json!({ "languageNames": ["spanish"] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["languages"][0]["countries"].as_array().unwrap().len(), 2);
    assert_eq!(body["formatted"]["countries"], "2");
    assert!(body["countryColors"].get("826").is_none());
}

#[tokio::test]
async fn test_empty_selection() {
    let (status, body) = post_json(
        "/api/selection",
        serde_json::json!({ "languageNames": [] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["languages"], serde_json::json!([]));
    assert_eq!(body["totals"]["statistics"]["totalSpeakers"], 0.0);
    assert_eq!(body["formatted"]["worldPercentage"], "0");
    assert_eq!(body["languageColors"], serde_json::json!({}));
}

#[tokio::test]
async fn test_selection_rejects_non_json_body() {
    let request = Request::post("/api/selection")
        .body(Body::from("languageNames=english"))
        .unwrap();
    let (status, body) = send(app(), request).await;
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body["error"]["code"], "INVALID_BODY");
}

#[tokio::test]
async fn test_get_country_by_id() {
    let (status, body) = get_json("/api/countries/840").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["commonName"], "United States");
    assert_eq!(body["countryId"], "840");
    assert_eq!(body["unMember"], true);
}

#[tokio::test]
async fn test_get_country_not_found() {
    let (status, body) = get_json("/api/countries/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "COUNTRY_NOT_FOUND");
}

#[tokio::test]
async fn test_get_country_by_slug() {
    let (status, body) = get_json("/api/countries/slug/United-States").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["commonName"], "United States");

    let (status, _) = get_json("/api/countries/slug/atlantis").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_sitemap() {
    let request = Request::get("/sitemap.xml").body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/xml"
    );

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let xml = String::from_utf8(body.to_vec()).unwrap();

    assert!(xml.contains("<loc>https://www.languagemap.world/about</loc>"));
    assert!(xml.contains("<loc>https://www.languagemap.world/english</loc>"));
    assert!(xml.contains("<loc>https://www.languagemap.world/country/puerto-rico</loc>"));
    assert_eq!(xml.matches("<url>").count(), 2 + 3 + 4);
}

#[tokio::test]
async fn test_empty_store_answers_not_found() {
    let app = router(AppState::new(LanguageStore::empty(), Config::default()));
    let request = Request::get("/api/countries/840").body(Body::empty()).unwrap();
    let (status, _) = send(app, request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ==================== Remote Source Tests ====================

#[tokio::test]
async fn test_load_records_from_remote() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/countryData.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_records()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let source = DataSource::parse(&format!("{}/countryData.json", mock_server.uri()));
    let records = load_records(&source, Duration::from_secs(5))
        .await
        .expect("Should load records");

    assert_eq!(records, sample_records());
}

#[tokio::test]
async fn test_load_records_retries_server_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/countryData.json"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/countryData.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_records()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let source = DataSource::parse(&format!("{}/countryData.json", mock_server.uri()));
    let records = load_records(&source, Duration::from_secs(5))
        .await
        .expect("Should succeed after retry");

    assert_eq!(records.len(), 4);
}

#[tokio::test]
async fn test_load_records_fails_fast_on_client_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/countryData.json"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let source = DataSource::parse(&format!("{}/countryData.json", mock_server.uri()));
    let result = load_records(&source, Duration::from_secs(5)).await;

    let err = result.expect_err("404 should fail");
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn test_load_store_from_remote_when_snapshots_missing() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    Mock::given(method("GET"))
        .and(path("/countryData.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_records()))
        .mount(&mock_server)
        .await;

    let config = Config {
        data_dir: temp_dir.path().join("missing"),
        country_data_source: format!("{}/countryData.json", mock_server.uri()),
        ..Config::default()
    };

    let store = load_store(&config).await;
    assert_eq!(store.language_names(), vec!["english", "spanish", "chinese"]);
    assert!(store.country_by_slug("taiwan").is_some());
}
