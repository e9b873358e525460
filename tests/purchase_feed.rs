use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use sybil_dashboard::config::AppConfig;
use sybil_dashboard::create_application;
use sybil_dashboard::entity::{DecodedValue, FeedState};
use sybil_dashboard::explorer::{BscScanExplorerService, ExplorerService};
use sybil_dashboard::presenter::purchase_presenter::PURCHASE_FEED_ERROR;
use sybil_dashboard::random::{RandomSource, SeededRandom};
use sybil_dashboard::view::purchase_view::NO_PURCHASES_MESSAGE;
use sybil_dashboard::{Application, CapturedOutput, Console, ServiceContainer};
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PLAYER: &str = "0x55d398326f99059ff775485246999027b3197955";
const OTHER_PLAYER: &str = "0xe9e7cea3dedca5984780bafc599bd69add087d56";

const SUBSCRIBE_INPUT: &str = "0x8de6928400000000000000000000000055d398326f99059ff775485246999027b31979550000000000000000000000000000000000000000000000000de0b6b3a7640000";

fn transaction(hash: &str, is_error: &str, input: &str) -> Value {
    json!({
        "blockNumber": "38000000",
        "timeStamp": "1714000000",
        "hash": hash,
        "from": PLAYER,
        "to": "0x1111111111111111111111111111111111111111",
        "value": "1500000000000000000",
        "isError": is_error,
        "input": input,
        "functionName": "subscribe(address tokenAddress, uint256 amount)"
    })
}

fn ok_body(result: Vec<Value>) -> Value {
    json!({ "status": "1", "message": "OK", "result": result })
}

fn app_for(server_uri: &str) -> (Application, CapturedOutput) {
    let mut config = AppConfig::default();
    config.explorer.api_url = server_uri.to_string();
    app_with(config)
}

fn app_with(config: AppConfig) -> (Application, CapturedOutput) {
    let explorer = Arc::new(BscScanExplorerService::new(config.explorer.clone()).unwrap())
        as Arc<dyn ExplorerService + Send + Sync>;
    let rng = Arc::new(SeededRandom::new(5)) as Arc<dyn RandomSource>;
    let services = Arc::new(ServiceContainer::with_services(config, explorer, rng));

    let (console, output) = Console::capture();
    (create_application(services, console), output)
}

#[tokio::test]
async fn test_decoded_subscription_card() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("module", "account"))
        .and(query_param("action", "txlist"))
        .and(query_param("address", PLAYER))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(vec![
            transaction("0xaaa", "0", SUBSCRIBE_INPUT),
        ])))
        .mount(&server)
        .await;

    let (app, output) = app_for(&server.uri());
    app.purchases.show_purchases(PLAYER).await.unwrap();

    let state = app.purchases.state().await;
    let cards = state.cards();
    assert_eq!(cards.len(), 1);

    let card = &cards[0];
    assert_eq!(card.hash, "0xaaa");
    assert_eq!(card.value, "1.5");
    assert_eq!(card.status, "Success");
    assert_eq!(card.block_number, "38000000");
    assert!(matches!(
        card.call.field("Token Address"),
        Some(DecodedValue::Address(_))
    ));
    assert_eq!(
        card.call.field("Amount").map(|v| v.to_string()).as_deref(),
        Some("1000000000000000000")
    );

    let printed = output.contents();
    assert!(printed.contains("Loading transactions..."));
    assert!(printed.contains("Value: 1.5 BNB"));
    assert!(printed.contains("Amount: 1000000000000000000"));
}

#[tokio::test]
async fn test_failed_and_plain_transfers_are_filtered() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ok_body(vec![
            transaction("0xfailed", "1", SUBSCRIBE_INPUT),
            transaction("0xplain", "0", "0x"),
        ])))
        .mount(&server)
        .await;

    let (app, output) = app_for(&server.uri());
    app.purchases.show_purchases(PLAYER).await.unwrap();

    assert_eq!(app.purchases.state().await, FeedState::Empty);
    assert!(output.contents().contains(NO_PURCHASES_MESSAGE));
}

#[tokio::test]
async fn test_explorer_status_zero_shows_generic_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "0",
            "message": "NOTOK",
            "result": "Max rate limit reached"
        })))
        .mount(&server)
        .await;

    let (app, output) = app_for(&server.uri());
    app.purchases.show_purchases(PLAYER).await.unwrap();

    let state = app.purchases.state().await;
    assert_eq!(state, FeedState::Failed(PURCHASE_FEED_ERROR.to_string()));
    assert!(state.cards().is_empty());

    let printed = output.contents();
    assert!(printed.contains(PURCHASE_FEED_ERROR));
    assert!(!printed.contains("Max rate limit reached"));
}

#[tokio::test]
async fn test_http_failure_shows_generic_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let (app, _output) = app_for(&server.uri());
    app.purchases.show_purchases(PLAYER).await.unwrap();

    assert_eq!(
        app.purchases.state().await,
        FeedState::Failed(PURCHASE_FEED_ERROR.to_string())
    );
}

#[tokio::test]
async fn test_malformed_body_shows_generic_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>busy</html>"))
        .mount(&server)
        .await;

    let (app, _output) = app_for(&server.uri());
    app.purchases.show_purchases(PLAYER).await.unwrap();

    assert!(matches!(app.purchases.state().await, FeedState::Failed(_)));
}

#[tokio::test]
async fn test_stale_response_is_discarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("address", PLAYER))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_body(vec![transaction("0xslow", "0", SUBSCRIBE_INPUT)]))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("address", OTHER_PLAYER))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_body(vec![transaction("0xfast", "0", SUBSCRIBE_INPUT)])),
        )
        .mount(&server)
        .await;

    let (app, _output) = app_for(&server.uri());
    let presenter = app.purchases.clone();

    let (first, second) = tokio::join!(presenter.show_purchases(PLAYER), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        presenter.show_purchases(OTHER_PLAYER).await
    });
    first.unwrap();
    second.unwrap();

    let state = app.purchases.state().await;
    let hashes: Vec<&str> = state.cards().iter().map(|c| c.hash.as_str()).collect();
    assert_eq!(hashes, vec!["0xfast"]);
}

#[tokio::test]
async fn test_request_timeout_shows_generic_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ok_body(vec![transaction("0xlate", "0", SUBSCRIBE_INPUT)]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut config = AppConfig::default();
    config.explorer.api_url = server.uri();
    config.explorer.timeout_secs = Some(1);
    let (app, output) = app_with(config);

    let started = std::time::Instant::now();
    app.purchases.show_purchases(PLAYER).await.unwrap();

    assert!(started.elapsed() < Duration::from_secs(3));
    assert_eq!(
        app.purchases.state().await,
        FeedState::Failed(PURCHASE_FEED_ERROR.to_string())
    );
    assert!(output.contents().contains(PURCHASE_FEED_ERROR));
}
