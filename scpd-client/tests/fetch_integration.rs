//! Fetch tests against a local mock HTTP server
//!
//! Responses are served by mockito so every failure stage of a fetch can be
//! produced without a real device on the network.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use mockito::Server;
use rstest::rstest;
use scpd::ScpdError;
use scpd_client::{ClientConfig, FetchError, ScpdClient};
use upnp_typedef::{ArgumentDirection, Service};

const SCPD_PATH: &str = "/upnp/switch_power.xml";
const TIMEOUT: Duration = Duration::from_secs(5);

fn load_fixture(filename: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests/fixtures");
    path.push(filename);

    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", filename, e))
}

#[test]
fn test_fetch_and_parse_success() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", SCPD_PATH)
        .with_status(200)
        .with_header("content-type", "text/xml")
        .with_body(load_fixture("switch_power.xml"))
        .create();

    let client = ScpdClient::new();
    let url = format!("{}{}", server.url(), SCPD_PATH);
    let mut service = Service::new();

    let report = client
        .fetch_and_parse(&url, &mut service, TIMEOUT)
        .expect("fetch should succeed");

    assert!(report.is_clean());
    assert_eq!(service.action_count(), 3);
    assert_eq!(service.state_variable_count(), 2);

    let set_target = service.action("SetTarget").expect("SetTarget should exist");
    assert_eq!(set_target.argument_at(0).map(|a| a.direction()), Some(ArgumentDirection::In));
    assert_eq!(
        service.related_state_variable("GetStatus", "ResultStatus").map(|v| v.name()),
        Some("Status")
    );

    mock.assert();
}

#[test]
fn test_free_function_uses_default_client() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", SCPD_PATH)
        .with_status(200)
        .with_body(load_fixture("rendering_control.xml"))
        .create();

    let url = format!("{}{}", server.url(), SCPD_PATH);
    let mut service = Service::new();

    scpd_client::fetch_and_parse(&url, &mut service, TIMEOUT).expect("fetch should succeed");

    assert_eq!(service.action_count(), 5);
    assert_eq!(service.state_variable_count(), 6);
    mock.assert();
}

#[test]
fn test_fetch_returns_new_service() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", SCPD_PATH)
        .with_status(200)
        .with_body(load_fixture("switch_power.xml"))
        .create();

    let client = ScpdClient::with_config(ClientConfig::fast());
    let service = client
        .fetch(&format!("{}{}", server.url(), SCPD_PATH), TIMEOUT)
        .expect("fetch should succeed");

    assert_eq!(service.action_count(), 3);
}

#[rstest]
#[case(404)]
#[case(500)]
#[case(204)]
fn test_non_ok_status_is_error(#[case] status: usize) {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", SCPD_PATH)
        .with_status(status)
        .with_body(if status == 204 { String::new() } else { load_fixture("switch_power.xml") })
        .create();

    let client = ScpdClient::new();
    let url = format!("{}{}", server.url(), SCPD_PATH);
    let mut service = Service::new();

    let err = client.fetch_and_parse(&url, &mut service, TIMEOUT).unwrap_err();

    match err {
        FetchError::HttpStatus { code, .. } => assert_eq!(code as usize, status),
        other => panic!("expected HttpStatus, got {:?}", other),
    }
    assert!(service.is_empty());
}

#[test]
fn test_malformed_body_is_xml_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", SCPD_PATH)
        .with_status(200)
        .with_body("<scpd><actionList><action>")
        .create();

    let client = ScpdClient::new();
    let url = format!("{}{}", server.url(), SCPD_PATH);
    let mut service = Service::new();

    let err = client.fetch_and_parse(&url, &mut service, TIMEOUT).unwrap_err();

    assert!(matches!(err, FetchError::XmlMalformed(_)), "got {:?}", err);
    assert!(service.is_empty());
}

#[rstest]
#[case("device_description.xml")]
#[case("missing_action_list.xml")]
fn test_non_scpd_document_leaves_service_untouched(#[case] fixture: &str) {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", SCPD_PATH)
        .with_status(200)
        .with_body(load_fixture(fixture))
        .create();

    let client = ScpdClient::new();
    let url = format!("{}{}", server.url(), SCPD_PATH);
    let mut service = Service::new();

    let err = client.fetch_and_parse(&url, &mut service, TIMEOUT).unwrap_err();

    assert!(
        matches!(err, FetchError::Scpd(ScpdError::InvalidDocument(_))),
        "got {:?}",
        err
    );
    assert!(service.is_empty());
}

#[test]
fn test_body_over_limit_is_rejected() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", SCPD_PATH)
        .with_status(200)
        .with_body(load_fixture("switch_power.xml"))
        .create();

    let client = ScpdClient::with_config(ClientConfig::new().with_max_body_bytes(64));
    let url = format!("{}{}", server.url(), SCPD_PATH);

    let err = client.fetch_document(&url, TIMEOUT).unwrap_err();

    assert!(matches!(err, FetchError::BodyTooLarge { limit: 64 }), "got {:?}", err);
}

#[test]
fn test_body_at_limit_is_accepted() {
    let body = load_fixture("switch_power.xml");
    let mut server = Server::new();
    let _mock = server
        .mock("GET", SCPD_PATH)
        .with_status(200)
        .with_body(&body)
        .create();

    let client = ScpdClient::with_config(ClientConfig::new().with_max_body_bytes(body.len()));
    let url = format!("{}{}", server.url(), SCPD_PATH);

    let bytes = client.fetch_document(&url, TIMEOUT).expect("body fits the limit");
    assert_eq!(bytes, body.as_bytes());
}

#[test]
fn test_unbounded_body_limit() {
    let body = load_fixture("switch_power.xml");
    let mut server = Server::new();
    let _mock = server
        .mock("GET", SCPD_PATH)
        .with_status(200)
        .with_body(&body)
        .create();

    let client = ScpdClient::with_config(ClientConfig::new().with_max_body_bytes(usize::MAX));
    let url = format!("{}{}", server.url(), SCPD_PATH);

    let bytes = client.fetch_document(&url, TIMEOUT).expect("no limit applies");
    assert_eq!(bytes, body.as_bytes());
}

#[test]
fn test_connection_refused_is_network_error() {
    let client = ScpdClient::with_config(ClientConfig::fast());
    let mut service = Service::new();

    let err = client
        .fetch_and_parse("http://127.0.0.1:1/scpd.xml", &mut service, Duration::from_secs(2))
        .unwrap_err();

    assert!(matches!(err, FetchError::Network(_)), "got {:?}", err);
    assert!(service.is_empty());
}

#[test]
fn test_existing_entries_survive_failed_fetch() {
    let mut server = Server::new();
    let _ok = server
        .mock("GET", SCPD_PATH)
        .with_status(200)
        .with_body(load_fixture("switch_power.xml"))
        .create();
    let _missing = server.mock("GET", "/missing.xml").with_status(404).create();

    let client = ScpdClient::new();
    let mut service = Service::new();
    client
        .fetch_and_parse(&format!("{}{}", server.url(), SCPD_PATH), &mut service, TIMEOUT)
        .expect("first fetch should succeed");
    let before = service.clone();

    let err = client
        .fetch_and_parse(&format!("{}/missing.xml", server.url()), &mut service, TIMEOUT)
        .unwrap_err();

    assert!(matches!(err, FetchError::HttpStatus { code: 404, .. }));
    assert_eq!(service, before);
}
