#![allow(dead_code)]

use cinedex_api::{TmdbClient, TmdbClientBuilder};
use tracing_subscriber::EnvFilter;
use wiremock::MockServer;

pub const API_KEY: &str = "test-key";

/// Installs a fmt subscriber driven by `RUST_LOG`. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Builder pointed at the mock server's `/3/` prefix, without credentials.
pub fn builder_for(server: &MockServer) -> TmdbClientBuilder {
    init_tracing();
    TmdbClient::builder().base_url(format!("{}/3/", server.uri()).parse().unwrap())
}

/// API-key client pointed at the mock server.
pub fn client_for(server: &MockServer) -> TmdbClient {
    builder_for(server).api_key(API_KEY).build().unwrap()
}

/// Reads a JSON fixture from `fixtures/tmdb/`.
pub fn fixture(name: &str) -> serde_json::Value {
    let path = format!("{}/../../fixtures/tmdb/{name}", env!("CARGO_MANIFEST_DIR"));
    let text = std::fs::read_to_string(&path).unwrap();
    serde_json::from_str(&text).unwrap()
}
