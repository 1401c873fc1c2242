//! # Lookup Client Tests
//!
//! The HTTP client against a mock cocktail service.

use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cocktails::lookup::{ApiNinjasClient, CocktailLookup};
use cocktails::lookup_config::LookupConfig;
use cocktails::lookup_errors::LookupError;
use cocktails::search::{SearchOutcome, SearchSession, SearchStatus};

fn config_for(base_url: &str) -> LookupConfig {
    LookupConfig {
        base_url: base_url.to_string(),
        api_host: "cocktails.test".to_string(),
        api_key: "test_key".to_string(),
        timeout_secs: 5,
    }
}

#[tokio::test]
async fn test_lookup_sends_query_and_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cocktail"))
        .and(query_param("name", "whiskey sour"))
        .and(header("X-RapidAPI-Key", "test_key"))
        .and(header("X-RapidAPI-Host", "cocktails.test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "name": "whiskey sour",
                "ingredients": ["2 oz bourbon", "3/4 oz lemon juice", "1/2 oz simple syrup"],
                "instructions": "Shake with ice."
            }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiNinjasClient::new(&config_for(&mock_server.uri())).unwrap();
    let records = client.lookup("whiskey sour").await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "whiskey sour");
    assert_eq!(records[0].ingredients.len(), 3);
    assert_eq!(records[0].instructions.as_deref(), Some("Shake with ice."));
}

#[tokio::test]
async fn test_empty_body_is_not_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cocktail"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = ApiNinjasClient::new(&config_for(&mock_server.uri())).unwrap();
    let records = client.lookup("nonexistent").await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_error_status_is_a_lookup_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cocktail"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiNinjasClient::new(&config_for(&mock_server.uri())).unwrap();
    let result = client.lookup("margarita").await;
    assert!(matches!(result, Err(LookupError::Status(403))));
    assert!(result.unwrap_err().is_status());
}

#[tokio::test]
async fn test_unreachable_service_is_a_lookup_failure() {
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let client = ApiNinjasClient::new(&config_for(&uri)).unwrap();
    let result = client.lookup("margarita").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_search_session_over_http() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cocktail"))
        .and(query_param("name", "negroni"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "name": "negroni",
                "ingredients": ["1 oz gin", "1 oz campari", "1 oz sweet red vermouth"]
            }
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/cocktail"))
        .and(query_param("name", "flaky"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let client = ApiNinjasClient::new(&config_for(&mock_server.uri())).unwrap();
    let session = SearchSession::new(client, Duration::from_secs(5));

    let Some(SearchOutcome::Found(cocktails)) = session.search("negroni").await else {
        panic!("Expected negroni results");
    };
    assert_eq!(cocktails[0].name, "Negroni");
    assert_eq!(
        cocktails[0].ingredients,
        vec!["30 Ml Gin", "30 Ml Campari", "30 Ml Sweet Red Vermouth"]
    );

    let outcome = session.search("flaky").await;
    assert!(matches!(
        outcome,
        Some(SearchOutcome::Failed(LookupError::Status(502)))
    ));
    assert_eq!(session.status(), SearchStatus::Failed);
    assert!(session.results().is_empty());
}
