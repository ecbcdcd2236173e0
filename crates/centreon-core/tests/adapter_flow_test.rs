// End-to-end adapter flows against a wiremock CLAPI endpoint.
#![allow(clippy::unwrap_used)]

use std::collections::BTreeSet;

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use centreon_api::{CentreonClient, Credentials, TransportConfig};
use centreon_core::{
    CommandAdapter, CoreError, HostAdapter, HostResource, MacroSpec, NotificationOption, Provider,
    Resource, ResourceKind, TimeperiodAdapter, TimeperiodExceptionAdapter,
    TimeperiodExceptionResource, TimeperiodResource,
};

const API: &str = "/centreon/api/index.php";

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, CentreonClient) {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(API))
        .and(query_param("action", "authenticate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "authToken": "tok" })))
        .mount(&server)
        .await;

    // Anything not answered explicitly succeeds with an empty envelope.
    Mock::given(method("POST"))
        .and(path(API))
        .and(query_param("action", "action"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": [] })))
        .with_priority(10)
        .mount(&server)
        .await;

    let client = CentreonClient::from_url(
        &server.uri(),
        Credentials::new("admin", "centreon"),
        &TransportConfig::default(),
    )
    .unwrap();
    (server, client)
}

/// Answer `action` on `object` with `result`.
async fn answer(server: &MockServer, action: &str, object: &str, result: Value) {
    Mock::given(method("POST"))
        .and(path(API))
        .and(query_param("action", "action"))
        .and(body_partial_json(json!({ "action": action, "object": object })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": result })))
        .mount(server)
        .await;
}

/// `(action, values)` of every CLAPI call received, in order.
async fn calls(server: &MockServer) -> Vec<(String, String)> {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.query() == Some("action=action&object=centreon_clapi"))
        .map(|r| {
            let body: Value = serde_json::from_slice(&r.body).unwrap();
            (
                body["action"].as_str().unwrap().to_owned(),
                body["values"].as_str().unwrap_or_default().to_owned(),
            )
        })
        .collect()
}

fn call(action: &str, values: &str) -> (String, String) {
    (action.to_owned(), values.to_owned())
}

const READ_ONLY: [&str; 10] = [
    "show",
    "showinstance",
    "getparam",
    "gettemplate",
    "getmacro",
    "getcontact",
    "getcontactgroup",
    "gethostgroup",
    "getparent",
    "getexception",
];

fn mutations(all: &[(String, String)]) -> Vec<(String, String)> {
    all.iter()
        .filter(|(action, _)| !READ_ONLY.contains(&action.as_str()))
        .cloned()
        .collect()
}

async fn mount_host_reads(server: &MockServer, params: Value) {
    answer(
        server,
        "show",
        "HOST",
        json!([{ "id": "14", "name": "srv1", "alias": "Server1", "address": "10.0.0.1", "activate": "1" }]),
    )
    .await;
    answer(server, "showinstance", "HOST", json!([{ "id": "2", "name": "poller1" }])).await;
    answer(server, "getparam", "HOST", json!([params])).await;
}

fn srv1() -> HostResource {
    HostResource {
        name: "srv1".into(),
        alias: "Server1".into(),
        address: "10.0.0.1".into(),
        instance: "poller1".into(),
        activate: true,
        ..HostResource::default()
    }
}

// ── Host ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_host_create_adds_then_sets_options_then_reads_back() {
    let (server, client) = setup().await;
    mount_host_reads(
        &server,
        json!({ "name": "srv1", "notification_options": "d,r", "stalking_options": "", "max_check_attempts": "" }),
    )
    .await;

    let desired = HostResource {
        notification_options: BTreeSet::from([
            NotificationOption::Down,
            NotificationOption::Recovery,
        ]),
        ..srv1()
    };

    let managed = HostAdapter.create(&client, &desired).await.unwrap().unwrap();

    let all = calls(&server).await;
    // Template and host group columns stay empty; activate follows as a setparam.
    assert_eq!(all[0], call("add", "srv1;Server1;10.0.0.1;;poller1;"));

    let notif = all
        .iter()
        .position(|c| *c == call("setparam", "srv1;notification_options;d,r"))
        .expect("notification_options set");
    let read_back = all.iter().rposition(|(a, _)| a == "show").unwrap();
    assert!(notif < read_back);
    assert!(all.contains(&call("setparam", "srv1;activate;1")));
    assert!(all.contains(&call("applytpl", "srv1")));
    assert!(all.contains(&call("setparam", "srv1;max_check_attempts;")));
    assert!(all.contains(&call("setparam", "srv1;2d_coords;")));

    assert_eq!(managed.id, "srv1");
    assert!(managed.state.activate);
    assert_eq!(managed.state.instance, "poller1");
    assert_eq!(managed.state.max_check_attempts, -1);
    assert_eq!(
        managed.state.notification_options,
        BTreeSet::from([NotificationOption::Down, NotificationOption::Recovery])
    );
    assert!(!managed.state.notification_none);
}

#[tokio::test]
async fn test_host_create_rejects_invalid_address_before_any_call() {
    let (server, client) = setup().await;

    let desired = HostResource {
        address: "not-an-ip".into(),
        ..srv1()
    };
    let err = HostAdapter.create(&client, &desired).await.unwrap_err();

    assert!(matches!(err, CoreError::Validation { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_host_read_clears_identity_when_gone() {
    let (server, client) = setup().await;
    answer(&server, "show", "HOST", json!([{ "id": "9", "name": "srv10" }])).await;

    assert!(HostAdapter.read(&client, "srv1").await.unwrap().is_none());
    assert_eq!(calls(&server).await, vec![call("show", "srv1")]);
}

#[tokio::test]
async fn test_host_read_decodes_params_and_direct_macros() {
    let (server, client) = setup().await;
    mount_host_reads(
        &server,
        json!({
            "name": "srv1",
            "notification_options": "n",
            "stalking_options": "o,u",
            "check_freshness": "1",
            "retain_status_information": "0",
            "freshness_threshold": "60",
            "2d_coords": "10,20",
        }),
    )
    .await;
    answer(
        &server,
        "getmacro",
        "HOST",
        json!([
            { "macro name": "SNMPCOMMUNITY", "macro value": "public", "is_password": "0", "description": "", "source": "direct" },
            { "macro name": "INHERITED", "macro value": "x", "is_password": "0", "description": "", "source": "generic-host" }
        ]),
    )
    .await;
    answer(&server, "gettemplate", "HOST", json!([{ "id": "1", "name": "generic-host" }])).await;

    let state = HostAdapter.read(&client, "srv1").await.unwrap().unwrap().state;

    assert!(state.notification_none);
    assert!(state.notification_options.is_empty());
    assert_eq!(state.stalking_options.len(), 2);
    assert_eq!(state.check_freshness, centreon_core::Choice::Yes);
    assert_eq!(state.retain_status_information, centreon_core::Choice::No);
    assert_eq!(state.freshness_threshold, 60);
    assert_eq!(state.coords2d, "10,20");
    assert_eq!(state.templates, vec!["generic-host"]);
    assert_eq!(
        state.macros.into_iter().map(|m| m.name).collect::<Vec<_>>(),
        vec!["SNMPCOMMUNITY"]
    );
}

#[tokio::test]
async fn test_host_update_adds_all_then_removes_stale() {
    let (server, client) = setup().await;
    mount_host_reads(&server, json!({ "name": "srv1" })).await;
    answer(
        &server,
        "getcontact",
        "HOST",
        json!([{ "id": "1", "name": "alice" }, { "id": "2", "name": "bob" }]),
    )
    .await;

    let prior = HostResource {
        linked_contacts: BTreeSet::from(["alice".to_owned(), "bob".to_owned()]),
        ..srv1()
    };
    let desired = HostResource {
        linked_contacts: BTreeSet::from(["bob".to_owned(), "carol".to_owned()]),
        ..srv1()
    };

    HostAdapter
        .update(&client, "srv1", &prior, &desired)
        .await
        .unwrap();

    let all = calls(&server).await;
    let contact_calls: Vec<_> = all
        .iter()
        .filter(|(a, _)| a.ends_with("contact"))
        .cloned()
        .collect();
    assert_eq!(
        contact_calls[..4],
        [
            call("addcontact", "srv1;bob"),
            call("addcontact", "srv1;carol"),
            call("getcontact", "srv1"),
            call("delcontact", "srv1;alice"),
        ]
    );
    assert_eq!(
        mutations(&all),
        vec![
            call("addcontact", "srv1;bob"),
            call("addcontact", "srv1;carol"),
            call("delcontact", "srv1;alice"),
        ]
    );
}

#[tokio::test]
async fn test_host_update_only_removes_direct_macros() {
    let (server, client) = setup().await;
    mount_host_reads(&server, json!({ "name": "srv1" })).await;
    answer(
        &server,
        "getmacro",
        "HOST",
        json!([
            { "macro name": "OLD", "macro value": "1", "is_password": "0", "description": "", "source": "direct" },
            { "macro name": "TPLMACRO", "macro value": "2", "is_password": "0", "description": "", "source": "generic-host" }
        ]),
    )
    .await;

    let prior = HostResource {
        macros: BTreeSet::from([MacroSpec {
            name: "OLD".into(),
            value: "1".into(),
            ..MacroSpec::default()
        }]),
        ..srv1()
    };
    let desired = HostResource {
        macros: BTreeSet::from([MacroSpec {
            name: "NEW".into(),
            value: "2".into(),
            is_password: true,
            description: "token".into(),
        }]),
        ..srv1()
    };

    HostAdapter
        .update(&client, "srv1", &prior, &desired)
        .await
        .unwrap();

    assert_eq!(
        mutations(&calls(&server).await),
        vec![
            call("setmacro", "srv1;NEW;2;1;token"),
            call("delmacro", "srv1;OLD"),
        ]
    );
}

#[tokio::test]
async fn test_host_update_reconciles_templates_then_applies() {
    let (server, client) = setup().await;
    mount_host_reads(&server, json!({ "name": "srv1" })).await;
    answer(
        &server,
        "gettemplate",
        "HOST",
        json!([
            { "id": "1", "name": "generic-host" },
            { "id": "2", "name": "linux-host" },
            { "id": "3", "name": "snmp-host" }
        ]),
    )
    .await;

    let prior = HostResource {
        templates: vec!["generic-host".into(), "linux-host".into()],
        ..srv1()
    };
    let desired = HostResource {
        templates: vec!["generic-host".into(), "snmp-host".into()],
        ..srv1()
    };

    HostAdapter
        .update(&client, "srv1", &prior, &desired)
        .await
        .unwrap();

    let all = calls(&server).await;
    let template_calls: Vec<_> = all
        .iter()
        .filter(|(a, _)| a.ends_with("template") || a == "applytpl")
        .cloned()
        .collect();
    assert_eq!(
        template_calls[..5],
        [
            call("addtemplate", "srv1;generic-host"),
            call("addtemplate", "srv1;snmp-host"),
            call("gettemplate", "srv1"),
            call("deltemplate", "srv1;linux-host"),
            call("applytpl", "srv1"),
        ]
    );
    assert_eq!(
        mutations(&all),
        vec![
            call("addtemplate", "srv1;generic-host"),
            call("addtemplate", "srv1;snmp-host"),
            call("deltemplate", "srv1;linux-host"),
            call("applytpl", "srv1"),
        ]
    );
}

#[tokio::test]
async fn test_host_update_clears_notification_none() {
    let (server, client) = setup().await;
    mount_host_reads(&server, json!({ "name": "srv1", "notification_options": "d,r" })).await;

    let prior = HostResource {
        notification_none: true,
        ..srv1()
    };
    let desired = HostResource {
        notification_options: BTreeSet::from([
            NotificationOption::Down,
            NotificationOption::Recovery,
        ]),
        ..srv1()
    };

    let state = HostAdapter
        .update(&client, "srv1", &prior, &desired)
        .await
        .unwrap()
        .unwrap()
        .state;

    assert_eq!(
        mutations(&calls(&server).await),
        vec![call("setparam", "srv1;notification_options;d,r")]
    );
    assert!(!state.notification_none);
}

#[tokio::test]
async fn test_host_update_resends_options_when_only_none_flag_changes() {
    let (server, client) = setup().await;
    mount_host_reads(&server, json!({ "name": "srv1" })).await;

    // true -> false with unchanged (empty) options
    HostAdapter
        .update(
            &client,
            "srv1",
            &HostResource {
                notification_none: true,
                ..srv1()
            },
            &srv1(),
        )
        .await
        .unwrap();

    // false -> true
    HostAdapter
        .update(
            &client,
            "srv1",
            &srv1(),
            &HostResource {
                notification_none: true,
                ..srv1()
            },
        )
        .await
        .unwrap();

    assert_eq!(
        mutations(&calls(&server).await),
        vec![
            call("setparam", "srv1;notification_options;"),
            call("setparam", "srv1;notification_options;n"),
        ]
    );
}

#[tokio::test]
async fn test_host_rename_switches_identity() {
    let (server, client) = setup().await;
    answer(
        &server,
        "show",
        "HOST",
        json!([{ "id": "14", "name": "srv2", "alias": "Server1", "address": "10.0.0.1", "activate": "1" }]),
    )
    .await;
    answer(&server, "showinstance", "HOST", json!([{ "id": "2", "name": "poller1" }])).await;
    answer(&server, "getparam", "HOST", json!([{ "name": "srv2" }])).await;

    let desired = HostResource {
        name: "srv2".into(),
        notes: "moved".into(),
        ..srv1()
    };

    let managed = HostAdapter
        .update(&client, "srv1", &srv1(), &desired)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(managed.id, "srv2");
    assert_eq!(
        mutations(&calls(&server).await),
        vec![
            call("setparam", "srv1;name;srv2"),
            call("setparam", "srv2;notes;moved"),
        ]
    );
}

#[tokio::test]
async fn test_host_delete_is_noop_when_absent() {
    let (server, client) = setup().await;

    HostAdapter.delete(&client, "srv1").await.unwrap();

    assert_eq!(calls(&server).await, vec![call("show", "srv1")]);
}

// ── Timeperiod ──────────────────────────────────────────────────────

fn workhours() -> TimeperiodResource {
    TimeperiodResource {
        name: "workhours".into(),
        alias: "Work hours".into(),
        monday: "08:00-17:00".into(),
        tuesday: "08:00-17:00".into(),
        ..TimeperiodResource::default()
    }
}

#[tokio::test]
async fn test_timeperiod_update_monday_only() {
    let (server, client) = setup().await;
    answer(
        &server,
        "show",
        "TP",
        json!([{ "id": "3", "name": "workhours", "alias": "Work hours", "monday": "08:00-18:00", "tuesday": "08:00-17:00" }]),
    )
    .await;

    let desired = TimeperiodResource {
        monday: "08:00-18:00".into(),
        ..workhours()
    };

    let managed = TimeperiodAdapter
        .update(&client, "workhours", &workhours(), &desired)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        mutations(&calls(&server).await),
        vec![call("setparam", "workhours;monday;08:00-18:00")]
    );
    assert_eq!(managed.state, desired);
}

#[tokio::test]
async fn test_timeperiod_create_sets_non_empty_days_and_exceptions() {
    let (server, client) = setup().await;
    answer(
        &server,
        "show",
        "TP",
        json!([{ "id": "3", "name": "workhours", "alias": "Work hours" }]),
    )
    .await;

    let desired = TimeperiodResource {
        exceptions: [("december 25".to_owned(), "00:00-00:00".to_owned())].into(),
        ..workhours()
    };
    TimeperiodAdapter.create(&client, &desired).await.unwrap();

    assert_eq!(
        mutations(&calls(&server).await),
        vec![
            call("add", "workhours;Work hours"),
            call("setparam", "workhours;monday;08:00-17:00"),
            call("setparam", "workhours;tuesday;08:00-17:00"),
            call("setexception", "workhours;december 25;00:00-00:00"),
        ]
    );
}

#[tokio::test]
async fn test_timeperiod_update_reconciles_exceptions() {
    let (server, client) = setup().await;
    answer(
        &server,
        "show",
        "TP",
        json!([{ "id": "3", "name": "workhours", "alias": "Work hours", "monday": "08:00-17:00", "tuesday": "08:00-17:00" }]),
    )
    .await;
    answer(
        &server,
        "getexception",
        "TP",
        json!([
            { "days": "december 25", "timerange": "00:00-00:00" },
            { "days": "january 1", "timerange": "00:00-00:00" },
            { "days": "july 14", "timerange": "00:00-00:00" }
        ]),
    )
    .await;

    let prior = TimeperiodResource {
        exceptions: [
            ("december 25".to_owned(), "00:00-00:00".to_owned()),
            ("january 1".to_owned(), "00:00-00:00".to_owned()),
        ]
        .into(),
        ..workhours()
    };
    let desired = TimeperiodResource {
        exceptions: [
            ("december 25".to_owned(), "00:00-00:00".to_owned()),
            ("july 14".to_owned(), "00:00-00:00".to_owned()),
        ]
        .into(),
        ..workhours()
    };

    TimeperiodAdapter
        .update(&client, "workhours", &prior, &desired)
        .await
        .unwrap();

    let exception_calls: Vec<_> = calls(&server)
        .await
        .into_iter()
        .filter(|(a, _)| a.ends_with("exception"))
        .collect();
    assert_eq!(
        exception_calls[..4],
        [
            call("setexception", "workhours;december 25;00:00-00:00"),
            call("setexception", "workhours;july 14;00:00-00:00"),
            call("getexception", "workhours"),
            call("delexception", "workhours;january 1"),
        ]
    );
    assert_eq!(
        mutations(&calls(&server).await),
        vec![
            call("setexception", "workhours;december 25;00:00-00:00"),
            call("setexception", "workhours;july 14;00:00-00:00"),
            call("delexception", "workhours;january 1"),
        ]
    );
}

// ── Timeperiod exception ────────────────────────────────────────────

#[tokio::test]
async fn test_exception_create_requires_parent_timeperiod() {
    let (server, client) = setup().await;

    let desired = TimeperiodExceptionResource {
        timeperiod_id: "workhours".into(),
        days: "december 25".into(),
        timerange: "00:00-00:00".into(),
    };
    let err = TimeperiodExceptionAdapter
        .create(&client, &desired)
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "timeperiod with this timeperiod workhours not found"
    );
    assert!(mutations(&calls(&server).await).is_empty());
}

#[tokio::test]
async fn test_exception_lifecycle() {
    let (server, client) = setup().await;
    answer(&server, "show", "TP", json!([{ "id": "3", "name": "workhours" }])).await;
    answer(
        &server,
        "getexception",
        "TP",
        json!([{ "days": "december 25", "timerange": "00:00-00:00" }]),
    )
    .await;

    let desired = TimeperiodExceptionResource {
        timeperiod_id: "workhours".into(),
        days: "december 25".into(),
        timerange: "00:00-00:00".into(),
    };
    let managed = TimeperiodExceptionAdapter
        .create(&client, &desired)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(managed.id, "workhours_december 25");
    assert_eq!(managed.state, desired);

    TimeperiodExceptionAdapter
        .delete(&client, &managed.id)
        .await
        .unwrap();

    assert_eq!(
        mutations(&calls(&server).await),
        vec![
            call("setexception", "workhours;december 25;00:00-00:00"),
            call("delexception", "workhours;december 25"),
        ]
    );
}

// ── Command / provider ──────────────────────────────────────────────

#[tokio::test]
async fn test_command_delete_is_noop_when_absent() {
    let (server, client) = setup().await;

    CommandAdapter.delete(&client, "check_ping").await.unwrap();

    assert!(mutations(&calls(&server).await).is_empty());
}

#[tokio::test]
async fn test_provider_dispatches_json_documents() {
    let (server, client) = setup().await;
    answer(
        &server,
        "show",
        "CMD",
        json!([{ "id": "7", "name": "check_ping", "type": "check", "line": "$USER1$/check_ping" }]),
    )
    .await;

    let provider = Provider::with_client(client);
    let managed = provider
        .create(
            ResourceKind::Command,
            json!({ "name": "check_ping", "type": "check", "line": "$USER1$/check_ping" }),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(managed.id, "check_ping");
    assert_eq!(managed.state["type"], "check");
    assert!(provider.exists(ResourceKind::Command, "check_ping").await.unwrap());
    assert_eq!(
        mutations(&calls(&server).await),
        vec![call("add", "check_ping;check;$USER1$/check_ping")]
    );
}
