//! Integration tests for the fetch flow
//!
//! These tests run the `FetchDocument` use case over the reqwest adapter
//! against a local mock server.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use dip_application::{FetchDocument, FetchError, FetchInput};
use dip_domain::{ApiSettings, DEFAULT_API_KEY, ResourceType, ResponseOutcome};
use dip_infrastructure::ReqwestHttpClient;
use mockito::{Matcher, Server};
use pretty_assertions::assert_eq;

fn fetch_document(base_url: String) -> FetchDocument<ReqwestHttpClient> {
    let client = ReqwestHttpClient::new().expect("client");
    FetchDocument::new(
        Arc::new(client),
        ApiSettings::default().with_base_url(base_url),
    )
}

#[tokio::test]
async fn test_default_key_and_blank_query_values() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/plenarprotokoll")
        .match_header("authorization", format!("ApiKey {DEFAULT_API_KEY}").as_str())
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("a".into(), "1".into()),
            Matcher::UrlEncoded("b".into(), String::new()),
        ]))
        .with_status(200)
        .with_body(r#"{"numFound":0,"documents":[]}"#)
        .expect(1)
        .create_async()
        .await;

    let use_case = fetch_document(format!("{}/api/v1", server.url()));
    let input = FetchInput::new(ResourceType::Plenarprotokoll).with_query("a=1&b=");
    let output = use_case.execute(&input).await.unwrap();

    mock.assert_async().await;
    assert_eq!(
        output.outcome,
        ResponseOutcome::Structured("{\n  \"numFound\": 0,\n  \"documents\": []\n}".to_string())
    );
}

#[tokio::test]
async fn test_umlauts_and_key_order_survive() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/aktivitaet/5")
        .with_status(200)
        .with_header("content-type", "application/json; charset=utf-8")
        .with_body(r#"{"titel":"Rede über Energie","aktivitaetsart":"Rede","id":"5"}"#)
        .create_async()
        .await;

    let use_case = fetch_document(server.url());
    let input = FetchInput::new(ResourceType::Aktivitaet).with_identifier("5");
    let output = use_case.execute(&input).await.unwrap();

    assert_eq!(
        output.display_text(),
        "{\n  \"titel\": \"Rede über Energie\",\n  \"aktivitaetsart\": \"Rede\",\n  \
         \"id\": \"5\"\n}"
    );
}

#[tokio::test]
async fn test_non_json_body_is_returned_verbatim() {
    let mut server = Server::new_async().await;
    let body = "<response><numFound>0</numFound></response>";
    let _mock = server
        .mock("GET", "/vorgangsposition")
        .with_status(200)
        .with_header("content-type", "application/xml")
        .with_body(body)
        .create_async()
        .await;

    let use_case = fetch_document(server.url());
    let output = use_case
        .execute(&FetchInput::new(ResourceType::Vorgangsposition))
        .await
        .unwrap();

    assert_eq!(output.outcome, ResponseOutcome::Text(body.to_string()));
}

#[tokio::test]
async fn test_not_found_is_request_failure() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/vorgang/1")
        .with_status(404)
        .create_async()
        .await;

    let use_case = fetch_document(server.url());
    let result = use_case
        .execute(&FetchInput::new(ResourceType::Vorgang).with_identifier("1"))
        .await;

    match result {
        Err(FetchError::Request(message)) => {
            assert!(message.starts_with("404 Client Error: Not Found"));
            assert!(message.ends_with("/vorgang/1"));
        }
        other => panic!("expected request failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_identical_fetches_render_identically() {
    let mut server = Server::new_async().await;
    let body = r#"{"documents":[{"nachname":"Merkel","vorname":"Angela","fraktion":"CDU/CSU"}]}"#;
    let mock = server
        .mock("GET", "/person")
        .match_query(Matcher::UrlEncoded("f.person".into(), "Merkel".into()))
        .with_status(200)
        .with_body(body)
        .expect(2)
        .create_async()
        .await;

    let use_case = fetch_document(server.url());
    let input = FetchInput::new(ResourceType::Person).with_filter("f.person", "Merkel");

    let first = use_case.execute(&input).await.unwrap();
    let second = use_case.execute(&input).await.unwrap();

    mock.assert_async().await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_unreachable_host_is_request_failure() {
    let use_case = fetch_document("http://127.0.0.1:1/api/v1".to_string());
    let result = use_case.execute(&FetchInput::new(ResourceType::Person)).await;

    let error = result.unwrap_err();
    assert!(matches!(error, FetchError::Request(_)));
    assert_eq!(error.title(), "Request failed");
}
