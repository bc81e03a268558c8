//! End-to-end scenarios: HTTP request through the relay to a mock node

use serde_json::{json, Value};
use std::time::Duration;
use tokio_test::assert_ok;
use warp::http::StatusCode;

use crate::{
    config::AppConfig,
    dashboard::{render, RelayClient, SnapshotSource},
    infrastructure::http::HttpServer,
    tests::common::{fixtures, CannedResponse, MockHttpServer},
};

fn config_for(node: &MockHttpServer) -> AppConfig {
    let mut config = fixtures::test_config();
    config.node.port = node.port();
    config
}

fn json_body(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap()
}

#[tokio::test]
async fn test_latest_utxo_end_to_end() {
    let node = MockHttpServer::start(CannedResponse::result(json!({"txid": "abc", "vout": 0})))
        .await
        .unwrap();
    let server = assert_ok!(HttpServer::new(config_for(&node)));
    let routes = server.create_routes();

    let res = warp::test::request()
        .method("GET")
        .path("/api/latest-utxo")
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json_body(res.body()), json!({"result": {"txid": "abc", "vout": 0}}));

    let requests = node.requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].header("authorization").as_deref(), Some(fixtures::BASIC_AUTH));
    assert_eq!(
        requests[0].json(),
        json!({"jsonrpc": "1.0", "id": "web", "method": "getlatestutxo", "params": []})
    );
}

#[tokio::test]
async fn test_min_conf_is_forwarded_as_number() {
    let balances = json!([{"address": "bc1qxyz", "balance": 0.25}]);
    let node = MockHttpServer::start(CannedResponse::result(balances.clone()))
        .await
        .unwrap();
    let server = assert_ok!(HttpServer::new(config_for(&node)));
    let routes = server.create_routes();

    let res = warp::test::request()
        .method("GET")
        .path("/address-balances?minConf=6")
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json_body(res.body()), balances);

    let requests = node.requests().await;
    assert_eq!(requests[0].json()["method"], json!("getaddressbalances"));
    assert_eq!(requests[0].json()["params"], json!([6]));
}

#[tokio::test]
async fn test_unknown_method_surfaces_rpc_error() {
    let node = MockHttpServer::start(CannedResponse::rpc_error(-32601, "Method not found"))
        .await
        .unwrap();
    let server = assert_ok!(HttpServer::new(config_for(&node)));
    let routes = server.create_routes();

    let res = warp::test::request()
        .method("POST")
        .path("/api/rpc")
        .json(&json!({"method": "bogus"}))
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(json_body(res.body()), json!({"error": "RPC error -32601: Method not found"}));
}

#[tokio::test]
async fn test_passthrough_forwards_params() {
    let node = MockHttpServer::start(CannedResponse::result(json!("00000000000000000002a7c4")))
        .await
        .unwrap();
    let server = assert_ok!(HttpServer::new(config_for(&node)));
    let routes = server.create_routes();

    let res = warp::test::request()
        .method("POST")
        .path("/api/rpc")
        .json(&json!({"method": "getblockhash", "params": [840000]}))
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json_body(res.body()), json!({"result": "00000000000000000002a7c4"}));
    assert_eq!(node.requests().await[0].json()["params"], json!([840000]));
}

#[tokio::test]
async fn test_unreachable_node_keeps_relay_serving() {
    let mut config = fixtures::test_config();
    config.node.port = fixtures::unused_port().await;
    let server = assert_ok!(HttpServer::new(config));
    let routes = server.create_routes();

    let res = warp::test::request()
        .method("GET")
        .path("/api/total-balances")
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    let message = json_body(res.body())["error"].as_str().unwrap_or_default().to_string();
    assert!(message.starts_with("Transport error"), "unexpected error: {}", message);

    let res = warp::test::request().method("GET").path("/healthz").reply(&routes).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json_body(res.body()), json!({"ok": true}));

    let res = warp::test::request()
        .method("GET")
        .path("/api/top-balances")
        .reply(&routes)
        .await;
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_slow_node_maps_to_timeout() {
    let node = MockHttpServer::start(CannedResponse::result(json!(1)).delayed(Duration::from_secs(5)))
        .await
        .unwrap();
    let server = assert_ok!(HttpServer::new(config_for(&node)));
    let routes = server.create_routes();

    let res = warp::test::request()
        .method("GET")
        .path("/api/top-balances")
        .reply(&routes)
        .await;

    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(json_body(res.body()), json!({"error": "RPC request timed out after 1s"}));
}

#[tokio::test]
async fn test_dashboard_polls_a_running_relay() {
    let node = MockHttpServer::start_with(|request| {
        let method = request.json()["method"].as_str().unwrap_or_default().to_string();
        match method.as_str() {
            "getlatestutxo" => CannedResponse::result(json!({"txid": "abc", "vout": 0})),
            "getaddressbalances" => CannedResponse::result(json!([{"address": "bc1qa", "balance": 4}])),
            "gettotalbalances" => CannedResponse::result(json!({"total": 4})),
            _ => CannedResponse::rpc_error(-32601, "Method not found"),
        }
    })
    .await
    .unwrap();

    let mut config = config_for(&node);
    config.server.port = fixtures::unused_port().await;
    let relay_port = config.server.port;
    let server = assert_ok!(HttpServer::new(config));
    let relay = tokio::spawn(server.run());

    let client = RelayClient::new(&fixtures::dashboard_config(relay_port)).unwrap();
    let snapshot = tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            if let Ok(snapshot) = client.fetch_snapshot().await {
                return snapshot;
            }
            tokio::time::sleep(Duration::from_millis(25)).await;
        }
    })
    .await
    .unwrap();

    assert_eq!(snapshot.latest_utxo, json!({"txid": "abc", "vout": 0}));
    assert_eq!(snapshot.address_balances, json!([{"address": "bc1qa", "balance": 4}]));
    assert_eq!(snapshot.total_balance, json!(4));
    assert!(render(&snapshot).contains("== Total Valid Balance ==\n4\n"));

    relay.abort();
}
