#![allow(clippy::unwrap_used)]
// Integration tests for `SwitchClient` using wiremock.

use url::Url;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use easyswitch_api::{Error, Page, SwitchClient, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, SwitchClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = SwitchClient::new(base_url, &TransportConfig::default()).unwrap();
    (server, client)
}

fn secret(value: &str) -> secrecy::SecretString {
    value.to_string().into()
}

// ── Session tests ───────────────────────────────────────────────────

#[tokio::test]
async fn test_login_posts_form() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/logon.cgi"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("username=admin"))
        .and(body_string_contains("password=s3cret"))
        .and(body_string_contains("logon=Login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .expect(1)
        .mount(&server)
        .await;

    client.login("admin", &secret("s3cret")).await.unwrap();
}

#[tokio::test]
async fn test_login_ignores_status() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/logon.cgi"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    // The console gives no usable verdict on the login request itself.
    client.login("admin", &secret("wrong")).await.unwrap();
}

#[tokio::test]
async fn test_logout_gets_logout_page() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/Logout.htm"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.logout().await.unwrap();
}

// ── Page tests ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_fetch_page_returns_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/PortSettingRpm.htm"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<script>var max_port_num = 8;</script>"),
        )
        .mount(&server)
        .await;

    let body = client.fetch_page(Page::PortSettings).await.unwrap();
    assert!(body.contains("max_port_num"));
}

#[tokio::test]
async fn test_fetch_page_rejects_error_status() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/Vlan8021QRpm.htm"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = client.fetch_page(Page::Vlan).await;
    match result {
        Err(Error::Status { status, ref path }) => {
            assert_eq!(status, 404);
            assert_eq!(path, "/Vlan8021QRpm.htm");
        }
        other => panic!("expected Status error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_page_status_reports_code() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/SystemInfoRpm.htm"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    assert_eq!(client.page_status(Page::SystemInfo).await.unwrap(), 403);
}

// ── Action tests ────────────────────────────────────────────────────

#[tokio::test]
async fn test_set_port_query() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/port_setting.cgi"))
        .and(query_param("portid", "4"))
        .and(query_param("state", "0"))
        .and(query_param("speed", "4"))
        .and(query_param("flowcontrol", "0"))
        .and(query_param("apply", "Apply"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.set_port(4, 0, 4).await.unwrap();
}

#[tokio::test]
async fn test_set_system_name_and_vlan_mode() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/system_name_set.cgi"))
        .and(query_param("sysName", "core-sw"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/qvlanSet.cgi"))
        .and(query_param("qvlan_en", "1"))
        .and(query_param("qvlan_mode", "Apply"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.set_system_name("core-sw").await.unwrap();
    client.set_vlan_mode(1).await.unwrap();
}

#[tokio::test]
async fn test_upsert_vlan_query() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/qvlanSet.cgi"))
        .and(query_param("vid", "5"))
        .and(query_param("vname", "ops-1"))
        .and(query_param("selType_1", "2"))
        .and(query_param("selType_2", "1"))
        .and(query_param("qvlan_add", "Add/Modify"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let selectors = vec![
        ("selType_1".to_string(), "2".to_string()),
        ("selType_2".to_string(), "1".to_string()),
    ];
    client.upsert_vlan(5, "ops-1", &selectors).await.unwrap();
}

#[tokio::test]
async fn test_delete_vlan_query() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/qvlanSet.cgi"))
        .and(query_param("selVlans", "5"))
        .and(query_param("qvlan_del", "Delete"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_vlan(5).await.unwrap();
}

#[tokio::test]
async fn test_action_error_status() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/port_setting.cgi"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client.set_port(1, 1, 1).await;
    assert!(
        matches!(result, Err(Error::Status { status: 500, .. })),
        "expected Status error, got: {result:?}"
    );
}

// ── Transport tests ─────────────────────────────────────────────────

#[tokio::test]
async fn test_connection_refused_is_connect_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let base_url = SwitchClient::base_url_for_host(&addr.to_string()).unwrap();
    let client = SwitchClient::new(base_url, &TransportConfig::default()).unwrap();

    let err = client.logout().await.unwrap_err();
    assert!(err.is_connect(), "expected connect error, got: {err:?}");
    assert!(!err.is_connect_timeout());
}
