//! Diagnostic mode: bodies are logged, secrets are not.

mod common;

use std::io;
use std::sync::{Arc, Mutex};

use cc_sdk::{BearerToken, ClientConfig, RpcClient};
use common::success_body;
use serde_json::json;

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with an INFO-level subscriber and return everything it wrote.
fn captured_logs(f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

fn debug_client(url: &str) -> RpcClient {
    RpcClient::with_config(ClientConfig::new(url).with_debug(true))
}

#[test]
fn test_debug_logs_request_and_response_bodies() {
    let server = common::spawn_rpc_fixed(&success_body(json!(["0xA", "0xB"])));
    let client = debug_client(&server.url);

    let logs = captured_logs(|| {
        client.list_accounts().unwrap();
    });
    assert!(logs.contains("[RpcClient] accounts_listAccounts"), "{logs}");
    assert!(logs.contains(r#""method":"accounts_listAccounts""#), "{logs}");
    assert!(logs.contains("Response:"), "{logs}");
    assert!(logs.contains(r#"["0xA","0xB"]"#), "{logs}");
}

#[test]
fn test_passphrase_methods_are_redacted() {
    let server = common::spawn_rpc(|request| match request["method"].as_str() {
        Some("accounts_createAccount") => success_body(json!("0xNEWACCOUNT")),
        Some("accounts_unlockAccount") => success_body(json!("session-token-9")),
        _ => success_body(json!(true)),
    });
    let client = debug_client(&server.url);

    let logs = captured_logs(|| {
        assert_eq!(client.create_account("s3cret").unwrap(), "0xNEWACCOUNT");
        client.unlock_account("0xNEWACCOUNT", "s3cret").unwrap();
        client.delete_account("0xNEWACCOUNT", "s3cret").unwrap();
    });
    for method in [
        "accounts_createAccount",
        "accounts_unlockAccount",
        "accounts_deleteAccount",
    ] {
        assert!(logs.contains(method), "{method} not logged: {logs}");
    }
    assert_eq!(logs.matches("<redacted>").count(), 6, "{logs}");
    assert!(!logs.contains("s3cret"), "{logs}");
    assert!(!logs.contains("session-token-9"), "{logs}");

    // The server still received the real passphrase.
    assert_eq!(server.requests()[0].body["params"], json!(["s3cret"]));
}

#[test]
fn test_bearer_token_never_logged() {
    let server = common::spawn_rpc_fixed(&success_body(json!("sha256:feed")));
    let client = debug_client(&server.url);
    let token = BearerToken::from("tok-secret");

    let logs = captured_logs(|| {
        client.push_image("QmNode", "QmImage", &token).unwrap();
        client.lock_account("0xA", &token).unwrap();
    });
    assert!(logs.contains("imagemanager_pushImage"), "{logs}");
    assert!(logs.contains("sha256:feed"), "{logs}");
    assert!(!logs.contains("tok-secret"), "{logs}");
    assert_eq!(
        server.last_request().authorization.as_deref(),
        Some("Bearer tok-secret")
    );
}

#[test]
fn test_bodies_not_logged_without_debug() {
    let server = common::spawn_rpc_fixed(&success_body(json!(["0xA"])));
    let client = RpcClient::new(&server.url);

    let logs = captured_logs(|| {
        client.list_accounts().unwrap();
    });
    assert!(!logs.contains("Request:"), "{logs}");
    assert!(!logs.contains("Response:"), "{logs}");
}
