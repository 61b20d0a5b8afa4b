//! End-to-end pipeline runs against the mock admin service.

use serde_json::json;
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, ResponseTemplate};

use admin_client::AdminClient;
use integration_tests::mocks::{seasons_fixture, MockAdminServer};
use pipeline::{PipelineRunner, ResultReporter};
use sync_core::{Region, RunReport};

async fn reporter_for(mock: &MockAdminServer) -> ResultReporter {
    let client = AdminClient::new(&mock.api_config()).unwrap();
    ResultReporter::new(PipelineRunner::new(client))
}

/// Full success: latest season/period resolved, all regions fetched,
/// all maintenance triggers fired, report carries all six outputs.
#[tokio::test]
async fn test_full_success_run() {
    let mock = MockAdminServer::start().await;
    mock.mock_seasons(seasons_fixture()).await;
    // Only season 3 has info mounted: resolution must pick the max id.
    mock.mock_season_info(3, &[10, 11]).await;
    // Only period 11 is mounted: resolution must pick the max period.
    mock.mock_all_leaderboards(3, 11).await;
    mock.mock_all_admin_posts().await;

    let report = reporter_for(&mock).await.run().await;

    assert!(report.is_success());
    assert_eq!(report.exit_code(), 0);
    assert!(report.duration() >= 0.0);

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["status"], "success");
    assert_eq!(value["results"]["fetch"]["season_id"], 3);
    assert_eq!(value["results"]["fetch"]["period_id"], 11);
    for step in ["import", "clear", "cleanup", "vacuum", "refresh"] {
        assert_eq!(value["results"][step]["ok"], true, "missing {step} output");
    }
}

/// Failed regions are recorded in order and never abort the run.
#[tokio::test]
async fn test_region_failures_are_recoverable() {
    let mock = MockAdminServer::start().await;
    mock.mock_seasons(json!([{ "season_id": 5, "season_name": "Season 5" }]))
        .await;
    mock.mock_season_info(5, &[20]).await;
    mock.mock_leaderboard(5, 20, "us", 200).await;
    mock.mock_leaderboard(5, 20, "eu", 500).await;
    mock.mock_leaderboard(5, 20, "kr", 500).await;
    mock.mock_leaderboard(5, 20, "tw", 200).await;
    mock.mock_all_admin_posts().await;

    let report = reporter_for(&mock).await.run().await;
    assert!(report.is_success());

    let RunReport::Success { results, .. } = report else {
        panic!("expected success report");
    };
    let fetch = &results.fetch;

    let regions: Vec<Region> = fetch.results.iter().map(|o| o.region()).collect();
    assert_eq!(regions, [Region::Us, Region::Eu, Region::Kr, Region::Tw]);

    let statuses: Vec<bool> = fetch.results.iter().map(|o| o.is_success()).collect();
    assert_eq!(statuses, [true, false, false, true]);
    assert_eq!(fetch.failed_regions(), [Region::Eu, Region::Kr]);
}

/// A mid-pipeline step failure aborts the run: later steps are never
/// invoked and only the terminating error is reported.
#[tokio::test]
async fn test_fatal_step_failure_aborts_remaining_steps() {
    let mock = MockAdminServer::start().await;
    mock.mock_seasons(json!([{ "season_id": 5, "season_name": "Season 5" }]))
        .await;
    mock.mock_season_info(5, &[20]).await;
    mock.mock_all_leaderboards(5, 20).await;
    mock.mock_admin_post("/admin/import-all-leaderboard-json", 200)
        .await;
    mock.mock_admin_post("/admin/clear-output", 200).await;
    // Cleanup fails on every attempt.
    mock.mock_admin_post("/admin/cleanup-leaderboard", 500).await;

    // Vacuum and refresh must never be reached.
    Mock::given(method("POST"))
        .and(path_regex("^/admin/(vacuum-full|refresh-views)$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(0)
        .mount(&mock.server)
        .await;

    let report = reporter_for(&mock).await.run().await;

    assert!(!report.is_success());
    assert_eq!(report.exit_code(), 1);

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["status"], "error");
    assert!(value.get("results").is_none());
    let message = value["error"].as_str().unwrap();
    assert!(message.contains("cleanup"), "unexpected error: {message}");
}

/// An empty season listing fails resolution before any period lookup
/// or region fetch happens.
#[tokio::test]
async fn test_empty_seasons_fails_before_period_lookup() {
    let mock = MockAdminServer::start().await;
    mock.mock_seasons(json!([])).await;

    Mock::given(method("GET"))
        .and(path_regex("^/(season-info|mythic-leaderboard)/.*$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&mock.server)
        .await;

    let report = reporter_for(&mock).await.run().await;

    assert!(!report.is_success());
    let value = serde_json::to_value(&report).unwrap();
    let message = value["error"].as_str().unwrap();
    assert!(
        message.contains("no seasons"),
        "unexpected error: {message}"
    );
}

/// Two runs against identical remote state are independent and produce
/// identical resolution results.
#[tokio::test]
async fn test_runs_are_independent() {
    let mock = MockAdminServer::start().await;
    mock.mock_seasons(seasons_fixture()).await;
    mock.mock_season_info(3, &[10, 11]).await;
    mock.mock_all_leaderboards(3, 11).await;
    mock.mock_all_admin_posts().await;

    let first = reporter_for(&mock).await.run().await;
    let second = reporter_for(&mock).await.run().await;

    assert!(first.is_success());
    assert!(second.is_success());

    let first = serde_json::to_value(&first).unwrap();
    let second = serde_json::to_value(&second).unwrap();
    assert_eq!(first["results"]["fetch"], second["results"]["fetch"]);
}
