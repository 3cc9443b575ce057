use assert_cmd::Command;
use mockito::Server;
use predicates::prelude::*;
use serde_json::Value;

mod stubs;

use stubs::payloads;

const SITE_ID: &str = "contoso.sharepoint.com,1111,2222";
const PAGE_ID: &str = "f9b6c2a1-0000-4000-8000-000000000002";

fn site_pages_cmd(server: &Server) -> Command {
    let mut cmd = Command::cargo_bin("betasdk").unwrap();
    cmd.env("LOG_LEVEL", "error")
        .env("GRAPH_BETA_BASE_URL", server.url())
        .env("GRAPH_ACCESS_TOKEN", "secret")
        .env("GRAPH_MAX_RETRY_SECS", "1")
        .env_remove("LOG_GRAPH_REQUESTS")
        .arg("site-pages")
        .arg(SITE_ID);
    cmd
}

#[test]
fn fetch_named_pages_via_cli() {
    let mut server = Server::new();
    let page = server
        .mock("GET", format!("/sites/{SITE_ID}/pages/{PAGE_ID}").as_str())
        .match_header("authorization", "Bearer secret")
        .with_body(payloads::SITE_PAGE)
        .expect(1)
        .create();
    let gone = server
        .mock("GET", format!("/sites/{SITE_ID}/pages/gone").as_str())
        .with_status(404)
        .with_body(r#"{"error": {"code": "itemNotFound", "message": "Item not found"}}"#)
        .expect(1)
        .create();

    let assert = site_pages_cmd(&server)
        .arg(PAGE_ID)
        .arg("gone")
        .assert()
        .success();
    let output: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let original: Value = serde_json::from_str(payloads::SITE_PAGE).unwrap();
    assert_eq!(output, Value::Array(vec![original]));
    page.assert();
    gone.assert();
}

#[test]
fn list_pages_via_cli() {
    let mut server = Server::new();
    let list = server
        .mock("GET", format!("/sites/{SITE_ID}/pages").as_str())
        .with_body(format!(r#"{{"value": [{}]}}"#, payloads::SITE_PAGE))
        .expect(1)
        .create();

    site_pages_cmd(&server)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""title": "Home""#));
    list.assert();
}

#[test]
fn missing_token_fails() {
    let server = Server::new();
    site_pages_cmd(&server)
        .env_remove("GRAPH_ACCESS_TOKEN")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no access token configured"));
}
