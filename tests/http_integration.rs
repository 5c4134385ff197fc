//! Integration tests for the asset repository, history sampler and dashboard
//! against an in-process HTTP stub.
//!
//! Run with:
//! ```bash
//! cargo test --test http_integration
//! ```

mod common;

use std::time::Duration;

use serde_json::json;

use coincap_sdk::prelude::*;
use coincap_sdk::shared::time::now_ms;

use common::{asset_json, history_json, page, path, query_param, top_assets, StubResponse, StubServer};

// ─── Assets ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_preserves_server_order() {
    let server = StubServer::start(|_| StubResponse::json(page(top_assets()))).await;
    let client = server.client();

    let page = client.assets().list(4).await.unwrap();

    let ids: Vec<&str> = page.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["bitcoin", "ethereum", "tether", "binance-coin"]);
    assert_eq!(page.timestamp, 1_700_000_000_000);

    let requests = server.requests();
    assert_eq!(requests, vec!["/v2/assets?limit=4".to_string()]);
}

#[tokio::test]
async fn list_never_exceeds_limit() {
    let server = StubServer::start(|_| StubResponse::json(page(top_assets()))).await;
    let client = server.client();

    for limit in 1..=4u32 {
        let page = client.assets().list(limit).await.unwrap();
        assert!(page.len() <= limit as usize);
        assert_eq!(page.assets[0].id.as_str(), "bitcoin");
    }
}

#[tokio::test]
async fn list_rejects_zero_limit_without_request() {
    let server = StubServer::start(|_| StubResponse::json(page(top_assets()))).await;
    let client = server.client();

    let err = client.assets().list(0).await.unwrap_err();
    assert!(matches!(err, SdkError::Validation(_)));
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn list_keeps_numeric_strings_verbatim() {
    let server = StubServer::start(|_| StubResponse::json(page(top_assets()))).await;
    let page = server.client().assets().list(4).await.unwrap();

    let encoded = serde_json::to_value(&page).unwrap();
    assert_eq!(encoded, common::page(top_assets()));
}

#[tokio::test]
async fn list_fails_whole_page_on_bad_number() {
    let mut assets = top_assets();
    assets[2]["priceUsd"] = json!("not-a-price");
    let body = page(assets);
    let server = StubServer::start(move |_| StubResponse::json(body.clone())).await;

    let err = server.client().assets().list(4).await.unwrap_err();
    assert!(err.is_decode());
    let msg = err.to_string();
    assert!(msg.contains("tether"), "{msg}");
    assert!(msg.contains("priceUsd"), "{msg}");
}

#[tokio::test]
async fn get_by_id() {
    let server = StubServer::start(|target| match path(target) {
        "/v2/assets/ethereum" => StubResponse::json(json!({
            "data": asset_json("ethereum", 2, "ETH", "Ethereum", "1650.98", "198765432109.87"),
            "timestamp": 1_700_000_000_000i64
        })),
        _ => StubResponse::raw(404, r#"{"error":"not found"}"#),
    })
    .await;

    let asset = server.client().assets().get("ethereum").await.unwrap();
    assert_eq!(asset.symbol, "ETH");
    assert_eq!(asset.rank_position(), 2);
    assert_eq!(asset.price_usd.as_str(), "1650.98");
}

#[tokio::test]
async fn get_by_id_null_data_is_not_found() {
    let server = StubServer::start(|_| {
        StubResponse::json(json!({ "data": null, "timestamp": 1_700_000_000_000i64 }))
    })
    .await;

    let err = server.client().assets().get("nothing").await.unwrap_err();
    assert!(matches!(err, SdkError::NotFound(_)), "{err:?}");
}

#[tokio::test]
async fn get_by_id_404_is_not_found() {
    let server = StubServer::start(|_| StubResponse::raw(404, r#"{"error":"nothing not found"}"#)).await;

    let err = server.client().assets().get("nothing").await.unwrap_err();
    assert!(matches!(err, SdkError::NotFound(_)), "{err:?}");
}

// ─── Symbol search ───────────────────────────────────────────────────────────

fn search_server_body() -> serde_json::Value {
    page(vec![
        asset_json("wrapped-bitcoin", 17, "WBTC", "Wrapped Bitcoin", "26700.00", "4123456789.00"),
        asset_json("bitcoin", 1, "BTC", "Bitcoin", "26754.12", "522345678901.23"),
        asset_json("bitcoin-imitation", 900, "btc", "Bitcoin Imitation", "0.0001", "1000.00"),
    ])
}

#[tokio::test]
async fn find_by_symbol_is_case_insensitive() {
    let body = search_server_body();
    let server = StubServer::start(move |_| StubResponse::json(body.clone())).await;
    let client = server.client();

    let lower = client.assets().find_by_symbol("btc").await.unwrap();
    let upper = client.assets().find_by_symbol("BTC").await.unwrap();

    assert_eq!(lower, upper);
    assert_eq!(lower.unwrap().id.as_str(), "bitcoin");

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0], requests[1]);
    assert_eq!(query_param(&requests[0], "search").as_deref(), Some("BTC"));
    assert_eq!(query_param(&requests[0], "limit").as_deref(), Some("10"));
}

#[tokio::test]
async fn find_by_symbol_without_match_is_none() {
    let body = search_server_body();
    let server = StubServer::start(move |_| StubResponse::json(body.clone())).await;

    let found = server.client().assets().find_by_symbol("doge").await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn find_by_symbol_ignores_bad_non_matching_candidates() {
    let mut candidates = vec![
        asset_json("broken", 50, "BRK", "Broken", "1.0", "1000.0"),
        asset_json("ethereum", 2, "ETH", "Ethereum", "1650.98", "198765432109.87"),
    ];
    candidates[0]["marketCapUsd"] = json!("???");
    let body = page(candidates);
    let server = StubServer::start(move |_| StubResponse::json(body.clone())).await;

    let found = server.client().assets().find_by_symbol("eth").await.unwrap();
    assert_eq!(found.unwrap().symbol, "ETH");
}

// ─── Transport failures ──────────────────────────────────────────────────────

#[tokio::test]
async fn malformed_json_is_decode_error() {
    let server = StubServer::start(|_| StubResponse::raw(200, "{\"data\": [")).await;

    let err = server.client().assets().list(10).await.unwrap_err();
    assert!(matches!(err, SdkError::Decode(DecodeError::Json(_))), "{err:?}");
}

#[tokio::test]
async fn shape_mismatch_is_decode_error() {
    let server = StubServer::start(|_| StubResponse::json(json!({ "data": "nope", "timestamp": 1 }))).await;

    let err = server.client().assets().list(10).await.unwrap_err();
    assert!(err.is_decode(), "{err:?}");
}

#[tokio::test]
async fn server_error_is_network_error() {
    let server = StubServer::start(|_| StubResponse::raw(500, "boom")).await;

    let err = server.client().assets().list(10).await.unwrap_err();
    assert!(err.is_network(), "{err:?}");
    assert!(matches!(
        err,
        SdkError::Http(HttpError::ServerError { status: 500, .. })
    ));
}

#[tokio::test]
async fn rate_limit_is_not_retried() {
    let server = StubServer::start(|_| StubResponse::raw(429, "slow down")).await;

    let err = server.client().assets().list(10).await.unwrap_err();
    assert!(matches!(err, SdkError::Http(HttpError::RateLimited)));
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn connection_refused_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = CoinCapClient::builder()
        .base_url(&format!("http://{}/v2/assets", addr))
        .build()
        .unwrap();

    let err = client.assets().list(10).await.unwrap_err();
    assert!(err.is_network(), "{err:?}");
}

// ─── History ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn history_start_is_first_sample_time() {
    let server = StubServer::start(|_| {
        StubResponse::json(history_json(&[
            (1_700_000_040_000, "26750.12"),
            (1_700_000_100_000, "26760.50"),
            (1_700_000_160_000, "26745.01"),
        ]))
    })
    .await;

    let requested = 1_700_000_000_000;
    let series = server
        .client()
        .history()
        .get("bitcoin", Interval::Minute1, requested)
        .await
        .unwrap();

    assert_eq!(series.start, 1_700_000_040_000);
    assert_eq!(series.start, series.samples[0].time);
    assert_eq!(series.requested_start, requested);
    assert_eq!(series.prices(), vec![26750.12, 26760.50, 26745.01]);

    let requests = server.requests();
    let target = &requests[0];
    assert_eq!(path(target), "/v2/assets/bitcoin/history");
    assert_eq!(query_param(target, "interval").as_deref(), Some("m1"));
    assert_eq!(query_param(target, "start"), Some(requested.to_string()));
    let end: i64 = query_param(target, "end").unwrap().parse().unwrap();
    assert_eq!(end, series.end);
    assert!(end > requested);
}

#[tokio::test]
async fn history_future_start_is_empty_series() {
    let server = StubServer::start(|_| StubResponse::json(history_json(&[]))).await;

    let future = now_ms() + 86_400_000;
    let err = server
        .client()
        .history()
        .get("bitcoin", Interval::Hour1, future)
        .await
        .unwrap_err();

    match err {
        SdkError::EmptySeries { asset_id, interval } => {
            assert_eq!(asset_id, "bitcoin");
            assert_eq!(interval, Interval::Hour1);
        }
        other => panic!("expected EmptySeries, got: {other:?}"),
    }

    let target = &server.requests()[0];
    let end: i64 = query_param(target, "end").unwrap().parse().unwrap();
    assert!(end < future);
}

#[tokio::test]
async fn history_bad_price_fails_whole_call() {
    let server = StubServer::start(|_| {
        StubResponse::json(history_json(&[(1, "10.0"), (2, "ten"), (3, "11.0")]))
    })
    .await;

    let err = server
        .client()
        .history()
        .get("bitcoin", Interval::Minute5, 0)
        .await
        .unwrap_err();
    assert!(err.is_decode(), "{err:?}");
}

#[tokio::test]
async fn history_last_hour_uses_one_minute_buckets() {
    let server = StubServer::start(|_| StubResponse::json(history_json(&[(1, "10.0"), (2, "11.0")]))).await;

    let series = server.client().history().last_hour("ethereum").await.unwrap();
    assert_eq!(series.interval, Interval::Minute1);

    let target = &server.requests()[0];
    assert_eq!(path(target), "/v2/assets/ethereum/history");
    assert_eq!(query_param(target, "interval").as_deref(), Some("m1"));
    let start: i64 = query_param(target, "start").unwrap().parse().unwrap();
    let end: i64 = query_param(target, "end").unwrap().parse().unwrap();
    // start and end are read from the clock separately.
    assert!((3_600_000..3_610_000).contains(&(end - start)), "{}", end - start);
}

// ─── Dashboard ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn dashboard_snapshot_rows() {
    let server = StubServer::start(|_| StubResponse::json(page(top_assets()))).await;
    let dashboard = Dashboard::new(server.client());

    let snapshot = dashboard.snapshot(4).await.unwrap();
    let cells = snapshot.cells();

    assert_eq!(
        cells[0],
        [
            "Bitcoin (BTC)".to_string(),
            "26754.1".to_string(),
            "522.35B".to_string(),
            "1.23%".to_string(),
        ]
    );
    assert_eq!(cells[2][0], "Tether (USDT)");
    assert_eq!(cells[2][1], "1.00012");
    assert_eq!(cells[2][2], "83.12B");
}

#[tokio::test]
async fn dashboard_snapshot_keeps_unformattable_row() {
    let mut assets = top_assets();
    assets[1]["changePercent24Hr"] = json!("0");
    let body = page(assets);
    let server = StubServer::start(move |_| StubResponse::json(body.clone())).await;

    let snapshot = Dashboard::new(server.client()).snapshot(4).await.unwrap();
    assert_eq!(snapshot.rows.len(), 4);
    assert!(snapshot.rows[1].cells.is_err());
    assert!(snapshot.rows[0].cells.is_ok());
    assert_eq!(snapshot.cells()[1][0], "Ethereum (ETH)");
}

#[tokio::test]
async fn list_accepts_supply_beyond_decimal_range() {
    let mut assets = top_assets();
    assets[3]["supply"] = json!("100000000000000000000000000000.0000000000000000");
    assets[3]["marketCapUsd"] = json!("1e30");
    let body = page(assets);
    let server = StubServer::start(move |_| StubResponse::json(body.clone())).await;

    let page = server.client().assets().list(4).await.unwrap();
    assert_eq!(page.len(), 4);
    assert_eq!(page.assets[3].market_cap_usd.as_str(), "1e30");
}

#[tokio::test]
async fn dashboard_history_keeps_row_order() {
    let server = StubServer::start(|target| {
        if !path(target).ends_with("/history") {
            return StubResponse::json(page(top_assets()));
        }
        match path(target) {
            // Slowest response for the first row.
            "/v2/assets/bitcoin/history" => {
                StubResponse::json(history_json(&[(1, "100.0"), (2, "101.0")]))
                    .delayed(Duration::from_millis(150))
            }
            "/v2/assets/tether/history" => StubResponse::raw(500, "history down"),
            _ => StubResponse::json(history_json(&[(1, "5.0"), (2, "6.0")])),
        }
    })
    .await;

    let dashboard = Dashboard::new(server.client());
    let snapshot = dashboard
        .snapshot_with_history(4, Interval::Minute5, Duration::from_secs(3_600))
        .await
        .unwrap();

    let ids: Vec<&str> = snapshot.rows.iter().map(|r| r.asset_id.as_str()).collect();
    assert_eq!(ids, vec!["bitcoin", "ethereum", "tether", "binance-coin"]);

    for row in &snapshot.rows {
        match (row.asset_id.as_str(), row.history.as_ref().unwrap()) {
            ("tether", result) => assert!(result.is_err()),
            (id, Ok(series)) => assert_eq!(series.asset_id.as_str(), id),
            (id, Err(err)) => panic!("unexpected history failure for {id}: {err}"),
        }
    }

    let bitcoin = snapshot.rows[0].history.as_ref().unwrap().as_ref().unwrap();
    assert_eq!(bitcoin.prices(), vec![100.0, 101.0]);

    let rendered = snapshot.render();
    assert!(rendered.contains("Trend"));
    assert!(rendered.contains("unavailable"));
}
