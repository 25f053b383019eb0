//! End-to-end listing flow: a `ListingSession` backed by the real
//! `HttpInventoryClient` talking to a mock inventory service.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vardeck_core::{AppConfig, ProductVariant, StockStatus};
use vardeck_inventory::HttpInventoryClient;
use vardeck_listing::{ExpansionState, ListingSession};

const BATCH_PATH: &str = "/api/inventory/batch";

fn make_config() -> AppConfig {
    AppConfig {
        bff_base_url: "https://unused.example.com".to_owned(),
        bff_bearer_token: None,
        log_level: "info".to_owned(),
        request_timeout_secs: 5,
        user_agent: "vardeck-test/0.1".to_owned(),
        max_retries: 0,
        retry_backoff_base_ms: 0,
    }
}

fn test_session(server: &MockServer) -> ListingSession<HttpInventoryClient> {
    let client = HttpInventoryClient::with_base_url(&make_config(), &server.uri())
        .expect("failed to build test inventory client");
    ListingSession::new(client)
}

fn variant(sku: &str) -> ProductVariant {
    ProductVariant {
        sku: Some(sku.to_owned()),
        color: Some("Red".to_owned()),
        size: None,
        initial_stock: 0,
    }
}

fn skus(list: &[&str]) -> Vec<String> {
    list.iter().map(|&s| s.to_owned()).collect()
}

#[tokio::test]
async fn expanding_a_row_loads_inventory_and_aggregates_it() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(BATCH_PATH))
        .and(body_json(json!({ "skus": ["BS-RED-S", "BS-RED-L"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "records": {
                "BS-RED-S": { "quantityAvailable": 5, "quantityReserved": 1 },
                "BS-RED-L": { "quantityAvailable": 0, "quantityReserved": 0 },
            }
        })))
        .mount(&server)
        .await;

    let session = test_session(&server);
    let variant_skus = skus(&["BS-RED-S", "BS-RED-L"]);

    assert_eq!(
        session.toggle_expansion("prod-1", &variant_skus),
        ExpansionState::Expanding
    );
    session
        .ensure_loaded("prod-1", &variant_skus)
        .await
        .expect("batch fetch should succeed");

    assert_eq!(session.expansion_state("prod-1"), ExpansionState::Expanded);
    let variants = [variant("BS-RED-S"), variant("BS-RED-L")];
    assert_eq!(session.total_stock(&variants), 5);
    assert!(session.is_fully_loaded(&variants));
    assert_eq!(session.reserved_count("BS-RED-S"), 1);

    let record = session.record("BS-RED-L").expect("record should be cached");
    assert_eq!(record.stock_status(), StockStatus::OutOfStock);
}

#[tokio::test]
async fn reexpanding_serves_from_cache_without_another_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(BATCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "records": {
                "BS-RED-S": { "quantityAvailable": 5, "quantityReserved": 0 },
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = test_session(&server);
    let variant_skus = skus(&["BS-RED-S"]);

    session.toggle_expansion("prod-1", &variant_skus);
    session
        .ensure_loaded("prod-1", &variant_skus)
        .await
        .expect("batch fetch should succeed");
    session.toggle_expansion("prod-1", &variant_skus);

    // The cached SKU settles the toggle directly and the reload is a no-op.
    assert_eq!(
        session.toggle_expansion("prod-1", &variant_skus),
        ExpansionState::Expanded
    );
    session
        .ensure_loaded("prod-1", &variant_skus)
        .await
        .expect("cached reload should succeed");
}

#[tokio::test]
async fn partial_backend_response_still_completes_the_row() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(BATCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({
            "records": {
                "BS-RED-S": { "quantityAvailable": 5, "quantityReserved": 0 },
            }
        })))
        .mount(&server)
        .await;

    let session = test_session(&server);
    let variant_skus = skus(&["BS-RED-S", "GHOST-9"]);

    session.toggle_expansion("prod-1", &variant_skus);
    session
        .ensure_loaded("prod-1", &variant_skus)
        .await
        .expect("batch fetch should succeed");

    // The omitted SKU is an authoritative absence: the row is complete and
    // the missing variant aggregates as zero stock.
    let variants = [variant("BS-RED-S"), variant("GHOST-9")];
    assert!(session.is_fully_loaded(&variants));
    assert_eq!(session.total_stock(&variants), 5);
    assert!(session.record("GHOST-9").is_none());
}
