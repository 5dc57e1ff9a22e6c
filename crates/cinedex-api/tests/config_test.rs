#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

mod common;

use cinedex_api::{TmdbConfig, resolve_config_path};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_client_from_config_file() {
    // Arrange
    common::init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/person/287"))
        .and(header("authorization", "Bearer file-token"))
        .and(header("user-agent", "cinedex-test/1.0"))
        .and(query_param_is_missing("api_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 287,
            "name": "Brad Pitt",
            "birthday": "1963-12-18",
            "known_for_department": "Acting"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let config_path = resolve_config_path(Some(dir.path())).unwrap();
    let toml = format!(
        "api_key = \"ignored\"\nbearer_token = \"file-token\"\nbase_url = \"{}/3\"\nuser_agent = \"cinedex-test/1.0\"\ntimeout_secs = 5\n",
        server.uri()
    );
    std::fs::write(&config_path, toml).unwrap();

    // Act
    let config = TmdbConfig::load(&config_path).unwrap();
    let client = config.client_builder().unwrap().build().unwrap();
    let person = client
        .people()
        .details(287, &Default::default())
        .await
        .unwrap();

    // Assert
    assert_eq!(person.name, "Brad Pitt");
    assert_eq!(person.birthday.as_deref(), Some("1963-12-18"));
}

#[tokio::test]
async fn test_config_retry_table_drives_client() {
    // Arrange
    common::init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/configuration"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/3/configuration"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "change_keys": ["title"],
            "images": {"secure_base_url": "https://image.tmdb.org/t/p/"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    let toml = format!(
        "api_key = \"k\"\nbase_url = \"{}/3/\"\n\n[retry]\nmax_retries = 1\nmin_backoff_ms = 5\nmax_backoff_ms = 10\n",
        server.uri()
    );
    std::fs::write(&config_path, toml).unwrap();

    // Act
    let client = TmdbConfig::load(&config_path)
        .unwrap()
        .client_builder()
        .unwrap()
        .build()
        .unwrap();
    let configuration = client.configuration().details().await.unwrap();

    // Assert
    assert_eq!(configuration.change_keys, vec![String::from("title")]);
}
