//! End-to-end load/save flows against a mock webhook server.

use chrono::{Local, NaiveDate};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ferias_cli::config::EndpointConfig;
use ferias_cli::error::SyncError;
use ferias_cli::sync::{VacationStatus, VacationStore};

fn store_for(server: &MockServer) -> VacationStore {
    let config = EndpointConfig::new(
        format!("{}/read", server.uri()),
        format!("{}/write", server.uri()),
    );
    VacationStore::new(config)
}

async fn mount_roster(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/read"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn load_normalizes_wire_dates_and_resets_dirtiness() {
    let server = MockServer::start().await;
    mount_roster(
        &server,
        json!([
            { "id": "1", "nome": "Ana", "ferias": "desactived", "data": null },
            { "id": "2", "nome": "Bruno", "ferias": "actived", "data": "5/3/2024" },
            { "id": "3", "nome": "Clara", "ferias": "actived" },
        ]),
    )
    .await;

    let mut store = store_for(&server);
    store.load().await.expect("load should succeed");

    assert!(!store.dirty());
    assert!(!store.busy());
    assert!(store.last_error().is_none());

    let members = store.members();
    assert_eq!(members.len(), 3);

    assert_eq!(members[0].status, VacationStatus::Working);
    assert_eq!(members[0].start_date, None);

    // Non-padded wire dates still parse
    assert_eq!(members[1].status, VacationStatus::OnVacation);
    assert_eq!(members[1].start_date, NaiveDate::from_ymd_opt(2024, 3, 5));

    // On vacation with no date defaults to the load-time current date
    assert_eq!(members[2].start_date, Some(Local::now().date_naive()));
}

#[tokio::test]
async fn save_submits_only_changed_records_in_wire_form() {
    let server = MockServer::start().await;
    mount_roster(
        &server,
        json!([
            { "id": "1", "nome": "Ana", "ferias": "desactived", "data": null },
            { "id": "2", "nome": "Bruno", "ferias": "actived", "data": "05/03/2024" },
        ]),
    )
    .await;

    Mock::given(method("POST"))
        .and(path("/write"))
        .and(body_json(json!([
            { "id": "2", "nome": "Bruno", "ferias": "actived", "data": "25/12/2024" },
        ])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut store = store_for(&server);
    store.load().await.expect("load should succeed");

    store.set_start_date("2", NaiveDate::from_ymd_opt(2024, 12, 25).unwrap());
    assert!(store.dirty());

    store.save().await.expect("save should succeed");

    assert!(!store.dirty());
    assert!(!store.busy());
    assert!(store.last_error().is_none());
}

#[tokio::test]
async fn toggle_then_save_round_trip() {
    let server = MockServer::start().await;
    mount_roster(
        &server,
        json!([
            { "id": "1", "nome": "Ana", "ferias": "desactived", "data": null },
        ]),
    )
    .await;

    Mock::given(method("POST"))
        .and(path("/write"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut store = store_for(&server);
    store.load().await.expect("load should succeed");
    assert!(!store.dirty());

    store.toggle_status("1");
    assert_eq!(store.members()[0].status, VacationStatus::OnVacation);
    assert_eq!(store.members()[0].start_date, Some(Local::now().date_naive()));
    assert!(store.dirty());

    store.save().await.expect("save should succeed");
    assert!(!store.dirty());
}

#[tokio::test]
async fn failed_load_leaves_previous_state_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/read"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "1", "nome": "Ana", "ferias": "desactived", "data": null },
        ])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/read"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut store = store_for(&server);
    store.load().await.expect("first load should succeed");

    store.toggle_status("1");
    assert!(store.dirty());

    let err = store.load().await.expect_err("second load should fail");
    assert!(matches!(err, SyncError::Fetch(_)));

    // Previous working list and baseline survive, busy is back to false
    assert!(!store.busy());
    assert!(store.last_error().is_some());
    assert_eq!(store.members().len(), 1);
    assert_eq!(store.members()[0].status, VacationStatus::OnVacation);
    assert!(store.dirty());
}

#[tokio::test]
async fn malformed_roster_body_is_a_decode_error() {
    let server = MockServer::start().await;
    mount_roster(&server, json!({ "unexpected": "shape" })).await;

    let mut store = store_for(&server);
    let err = store.load().await.expect_err("load should fail");

    assert!(matches!(err, SyncError::Decode(_)));
    assert!(!store.busy());
    assert!(store.last_error().is_some());
    assert!(store.members().is_empty());
}

#[tokio::test]
async fn failed_save_keeps_edits_and_reports_the_error() {
    let server = MockServer::start().await;
    mount_roster(
        &server,
        json!([
            { "id": "1", "nome": "Ana", "ferias": "desactived", "data": null },
        ]),
    )
    .await;

    Mock::given(method("POST"))
        .and(path("/write"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut store = store_for(&server);
    store.load().await.expect("load should succeed");
    store.toggle_status("1");

    let err = store.save().await.expect_err("save should fail");
    assert!(matches!(err, SyncError::Save(_)));

    // The edit is still pending and nothing was rolled into the baseline
    assert!(store.dirty());
    assert!(!store.busy());
    assert!(store.last_error().is_some());
    assert_eq!(store.members()[0].status, VacationStatus::OnVacation);

    // A later load clears the reported error again
    store.load().await.expect("reload should succeed");
    assert!(store.last_error().is_none());
    assert!(!store.dirty());
}

#[tokio::test]
async fn save_without_changes_sends_no_request() {
    let server = MockServer::start().await;
    mount_roster(
        &server,
        json!([
            { "id": "1", "nome": "Ana", "ferias": "desactived", "data": null },
        ]),
    )
    .await;

    // Any hit on the write endpoint would fail the test on drop
    Mock::given(method("POST"))
        .and(path("/write"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut store = store_for(&server);
    store.load().await.expect("load should succeed");

    store.save().await.expect("clean save should succeed");
    assert!(!store.dirty());
}
