use axum::{http::StatusCode, routing::get, Json, Router};
use scr_core::RiskReport;
use scr_scoring::RiskScorer;
use scr_sources::{default_sources, FetchPolicy, ReportAggregator, SourceConfig};
use scr_web::{create_app, AppState, ANALYZE_RISKS_PATH};
use serde_json::json;
use tokio::net::TcpListener;

async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn spawn_service(serpapi: Router, gdelt: Router) -> String {
    let config = SourceConfig {
        serpapi_url: spawn(serpapi).await,
        serpapi_key: Some("test-key".to_string()),
        gdelt_url: spawn(gdelt).await,
        timeout: None,
    };
    let client = config.build_client().unwrap();
    let aggregator = ReportAggregator::new(RiskScorer::default(), FetchPolicy::FailSoft)
        .with_sources(default_sources(&config, client).unwrap());
    spawn(create_app(AppState::new(aggregator))).await
}

async fn fetch_reports(base: &str) -> (reqwest::StatusCode, Vec<RiskReport>) {
    let response = reqwest::get(format!("{}{}", base, ANALYZE_RISKS_PATH)).await.unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn reports_from_both_sources_in_order() {
    let serpapi = Router::new().route(
        "/search.json",
        get(|| async {
            Json(json!({
                "news_results": [
                    {
                        "title": "Dock strike halts exports",
                        "snippet": "Shortage of containers expected",
                        "source": { "name": "Reuters" }
                    }
                ]
            }))
        }),
    );
    let gdelt = Router::new().route(
        "/api/v2/doc/doc",
        get(|| async { Json(json!({ "articles": [{ "title": "Embargo tightens" }] })) }),
    );
    let base = spawn_service(serpapi, gdelt).await;

    let (status, reports) = fetch_reports(&base).await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(reports.len(), 2);

    assert_eq!(reports[0].source, "Reuters");
    assert_eq!(reports[0].risk_score, 3.33);
    assert_eq!(reports[0].summary, "Shortage of containers expected");

    assert_eq!(reports[1].source, "GDELT");
    assert_eq!(reports[1].risk_score, 1.67);
    assert_eq!(reports[1].summary, "Summary not available");
}

#[tokio::test]
async fn failing_upstreams_yield_empty_list() {
    let serpapi = Router::new().route(
        "/search.json",
        get(|| async { (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Invalid API key." }))) }),
    );
    let gdelt = Router::new().route("/api/v2/doc/doc", get(|| async { "not json" }));
    let base = spawn_service(serpapi, gdelt).await;

    let (status, reports) = fetch_reports(&base).await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert!(reports.is_empty());
}

#[tokio::test]
async fn one_failing_upstream_shortens_the_list() {
    let serpapi = Router::new().route(
        "/search.json",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let gdelt = Router::new().route(
        "/api/v2/doc/doc",
        get(|| async { Json(json!({ "articles": [{ "title": "A" }, { "title": "B" }] })) }),
    );
    let base = spawn_service(serpapi, gdelt).await;

    let (_, reports) = fetch_reports(&base).await;
    let titles: Vec<&str> = reports.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B"]);
}

fn unreachable_aggregator(policy: FetchPolicy, key: &str) -> ReportAggregator {
    let config = SourceConfig {
        serpapi_url: "http://127.0.0.1:1".to_string(),
        serpapi_key: Some(key.to_string()),
        gdelt_url: "http://127.0.0.1:1".to_string(),
        timeout: None,
    };
    let client = config.build_client().unwrap();
    ReportAggregator::new(RiskScorer::default(), policy)
        .with_sources(default_sources(&config, client).unwrap())
}

#[tokio::test]
async fn strict_error_body_does_not_expose_api_key() {
    let key = "SUPER-SECRET-KEY";
    let base = spawn(create_app(AppState::new(unreachable_aggregator(FetchPolicy::Propagate, key)))).await;

    let response = reqwest::get(format!("{}{}", base, ANALYZE_RISKS_PATH)).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_GATEWAY);
    let body = response.text().await.unwrap();
    assert!(body.contains("error"));
    assert!(!body.contains(key), "key leaked: {}", body);
}

#[tokio::test]
async fn suppressed_failures_do_not_expose_api_key() {
    let key = "SUPER-SECRET-KEY";
    let batch = unreachable_aggregator(FetchPolicy::FailSoft, key).collect().await.unwrap();

    assert!(batch.reports.is_empty());
    assert_eq!(batch.suppressed.len(), 2);
    for failure in &batch.suppressed {
        assert!(!failure.reason.contains(key), "key leaked: {}", failure.reason);
    }
}
