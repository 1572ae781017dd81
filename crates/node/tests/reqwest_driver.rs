//! End-to-end through the reqwest driver against a local mock server.

mod common;

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::MapResolver;
use helium_node::operations::build_request;
use helium_node::{
    Dispatcher, ErrorMode, HeliumApiCredential, HttpClient, Item, ItemParameters, Operation,
    ReqwestClient,
};

fn credential_for(server: &MockServer) -> HeliumApiCredential {
    HeliumApiCredential::with_api_key("test-api-key")
        .with_base_url(format!("{}/v1", server.uri()))
}

#[tokio::test]
async fn get_request_carries_query_and_bearer_header() {
    let server = MockServer::start().await;
    let response = json!({"data": [{"address": "11abc"}], "cursor": "next"});

    Mock::given(method("GET"))
        .and(path("/v1/hotspots"))
        .and(query_param("limit", "100"))
        .and(header("Authorization", "Bearer test-api-key"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = MapResolver::new(&[("cursor", json!("")), ("limit", json!(100))]);
    let params = ItemParameters::new(&resolver, 0);
    let operation = Operation::parse("hotspots", "listHotspots").unwrap();
    let spec = build_request(operation, &params, &credential_for(&server)).unwrap();

    let body = ReqwestClient::new().send(&spec).await.unwrap();
    assert_eq!(body, response);
}

#[tokio::test]
async fn post_request_sends_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts/ADDR/transactions"))
        .and(body_json(json!({"txn": "SIGNED"})))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"hash": "txhash1"})))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = MapResolver::new(&[("address", json!("ADDR")), ("txn", json!("SIGNED"))]);
    let params = ItemParameters::new(&resolver, 0);
    let operation = Operation::parse("accounts", "submitTransaction").unwrap();
    let spec = build_request(operation, &params, &credential_for(&server)).unwrap();

    let body = ReqwestClient::new().send(&spec).await.unwrap();
    assert_eq!(body, json!({"hash": "txhash1"}));
}

#[tokio::test]
async fn non_2xx_surfaces_status_and_error_body() {
    let server = MockServer::start().await;
    let error_body = json!({"error": "hotspot not found"});

    Mock::given(method("GET"))
        .and(path("/v1/hotspots/11missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(&error_body))
        .mount(&server)
        .await;

    let resolver = MapResolver::new(&[("address", json!("11missing"))]);
    let params = ItemParameters::new(&resolver, 0);
    let operation = Operation::parse("hotspots", "getHotspot").unwrap();
    let spec = build_request(operation, &params, &credential_for(&server)).unwrap();

    let failure = ReqwestClient::new().send(&spec).await.unwrap_err();
    assert!(failure.is_rejection());
    assert_eq!(failure.status, Some(404));
    assert_eq!(failure.message, "hotspot not found");
    assert_eq!(failure.body, Some(error_body));
}

#[tokio::test]
async fn dispatcher_runs_a_batch_through_the_driver() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"height": 1_500_000})))
        .expect(2)
        .mount(&server)
        .await;

    let dispatcher = Dispatcher::new(Arc::new(ReqwestClient::new()));
    let resolver = MapResolver::new(&[]);
    let operation = Operation::parse("blockchain", "getNetworkStats").unwrap();

    let records = dispatcher
        .execute(
            operation,
            &[Item::empty(), Item::empty()],
            &credential_for(&server),
            &resolver,
            ErrorMode::FailFast,
        )
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].json, json!({"height": 1_500_000}));
    assert_eq!(records[1].paired_item.item, 1);
}

#[tokio::test]
async fn continue_on_fail_survives_a_failing_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/blocks/1"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"error": "internal error"})),
        )
        .mount(&server)
        .await;

    let dispatcher = Dispatcher::new(Arc::new(ReqwestClient::new()));
    let resolver = MapResolver::new(&[("height", json!(1))]);
    let operation = Operation::parse("blockchain", "getBlock").unwrap();

    let records = dispatcher
        .execute(
            operation,
            &[Item::empty()],
            &credential_for(&server),
            &resolver,
            ErrorMode::ContinueOnFail,
        )
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].json, json!({"error": "internal error"}));
}
