//! Built-in tools against mock Open-Meteo and MediaWiki servers.

use std::time::Duration;

use jarvis::config::JarvisConfig;
use jarvis::error::JarvisError;
use jarvis::provider::http::build_client;
use jarvis::tools::builtin::{default_registry, web_search_tool, ReminderStore, WeatherTool};
use jarvis::tools::{Tool, ToolArguments};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client() -> reqwest::Client {
    build_client(Duration::from_secs(5)).unwrap()
}

fn args(value: serde_json::Value) -> ToolArguments {
    ToolArguments::from_value(value).unwrap()
}

fn weather_tool(server: &MockServer) -> WeatherTool {
    WeatherTool::new(
        client(),
        format!("{}/v1/search", server.uri()),
        format!("{}/v1/forecast", server.uri()),
    )
}

#[tokio::test]
async fn weather_geocodes_then_reports_current_conditions() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "Paris"))
        .and(query_param("count", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{"name": "Paris", "latitude": 48.85, "longitude": 2.35}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "48.85"))
        .and(query_param("longitude", "2.35"))
        .and(query_param("current", "temperature_2m,weather_code,wind_speed_10m"))
        .and(query_param("temperature_unit", "celsius"))
        .and(query_param("wind_speed_unit", "kmh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current": {"temperature_2m": 21.5, "weather_code": 2, "wind_speed_10m": 9.4}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let report = weather_tool(&server)
        .execute(&args(json!({"city_name": "Paris"})))
        .await
        .unwrap();

    assert_eq!(
        report,
        "The current weather in Paris is 21.5°C with Partly cloudy and wind speeds of 9.4 km/h."
    );
}

#[tokio::test]
async fn weather_for_unknown_place_is_a_plain_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"generationtime_ms": 0.3})))
        .mount(&server)
        .await;

    let report = weather_tool(&server)
        .execute(&args(json!({"city_name": "Atlantis"})))
        .await
        .unwrap();

    assert_eq!(report, "Could not locate a place named 'Atlantis'.");
}

#[tokio::test]
async fn weather_service_failure_is_tool_execution_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = weather_tool(&server)
        .execute(&args(json!({"city_name": "Paris"})))
        .await
        .unwrap_err();

    match err {
        JarvisError::ToolExecution { tool_name, message } => {
            assert_eq!(tool_name, "get_weather_for_city");
            assert!(message.contains("meteorological office"));
        }
        other => panic!("expected ToolExecution, got {other:?}"),
    }
}

#[tokio::test]
async fn weather_requires_city_name() {
    let server = MockServer::start().await;
    let err = weather_tool(&server)
        .execute(&ToolArguments::default())
        .await
        .unwrap_err();
    assert!(matches!(err, JarvisError::InvalidArgument(_)));
}

#[tokio::test]
async fn weather_rejects_unexpected_arguments() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = weather_tool(&server)
        .execute(&args(json!({"city_name": "Paris", "units": "imperial"})))
        .await
        .unwrap_err();
    assert!(matches!(err, JarvisError::InvalidArgument(ref m) if m.contains("unknown field `units`")));
}

#[tokio::test]
async fn web_search_formats_top_hits() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("action", "query"))
        .and(query_param("list", "search"))
        .and(query_param("srsearch", "arc reactor"))
        .and(query_param("srlimit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": {"search": [
                {"title": "Arc reactor", "snippet": "An <span class=\"searchmatch\">arc</span> reactor"},
                {"title": "Iron Man", "snippet": "A superhero"}
            ]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tool = web_search_tool(client(), format!("{}/w/api.php", server.uri()));
    let out = tool
        .execute(&args(json!({"query": "arc reactor"})))
        .await
        .unwrap();

    assert_eq!(
        out,
        "Title: Arc reactor\nSnippet: An arc reactor...\n\nTitle: Iron Man\nSnippet: A superhero..."
    );
}

#[tokio::test]
async fn web_search_without_hits() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"query": {"search": []}})))
        .mount(&server)
        .await;

    let tool = web_search_tool(client(), format!("{}/w/api.php", server.uri()));
    let out = tool.execute(&args(json!({"query": "zzzz"}))).await.unwrap();
    assert_eq!(out, "No Wikipedia results found.");
}

#[tokio::test]
async fn default_registry_shares_the_injected_reminder_store() {
    let store = ReminderStore::new();
    let registry = default_registry(&JarvisConfig::default(), store.clone()).unwrap();

    registry
        .invoke("set_reminder", &args(json!({"reminder_text": "polish the suit"})))
        .await
        .unwrap();

    assert_eq!(store.list(), vec!["polish the suit".to_string()]);
    let listing = registry
        .invoke("get_reminders", &ToolArguments::default())
        .await
        .unwrap();
    assert_eq!(listing, "Here are your pending reminders:\n1. polish the suit");
}
