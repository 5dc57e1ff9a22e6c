#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]
#![allow(missing_docs)]

mod common;

use std::time::Duration;

use cinedex_api::{DetailsOptions, LanguageOptions, TmdbClient, TmdbError};
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{API_KEY, builder_for, client_for, fixture};

#[tokio::test]
async fn test_api_key_is_sent_as_query_parameter() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/genre/movie/list"))
        .and(query_param("api_key", API_KEY))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "genres": [{"id": 18, "name": "Drama"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // Act
    let list = client
        .genres()
        .movie_list(&LanguageOptions::default())
        .await
        .unwrap();

    // Assert
    assert_eq!(list.name_of(18), Some("Drama"));
}

#[tokio::test]
async fn test_base_url_without_trailing_slash_keeps_prefix() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/movie/550"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 550,
            "title": "Fight Club"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = TmdbClient::builder()
        .base_url(format!("{}/3", server.uri()).parse().unwrap())
        .api_key(API_KEY)
        .build()
        .unwrap();

    // Act
    let movie = client
        .movies()
        .details(550, &DetailsOptions::default())
        .await
        .unwrap();

    // Assert
    assert_eq!(movie.title, "Fight Club");
    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].url.path(), "/3/movie/550");
}

#[tokio::test]
async fn test_bearer_token_replaces_api_key() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/authentication"))
        .and(header("authorization", "Bearer v4-token"))
        .and(query_param_is_missing("api_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "status_code": 1,
            "status_message": "Success."
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = builder_for(&server).bearer_token("v4-token").build().unwrap();

    // Act
    let status = client.authentication().validate_key().await.unwrap();

    // Assert
    assert_eq!(status.success, Some(true));
}

#[tokio::test]
async fn test_api_error_message_is_flattened_body() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/movie/550/keywords"))
        .respond_with(ResponseTemplate::new(401).set_body_json(fixture("error_invalid_key.json")))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // Act
    let err = client.movies().keywords(550).await.unwrap_err();

    // Assert
    assert!(err.to_string().contains("GET movie/550/keywords"));
    let tmdb = err.downcast_ref::<TmdbError>().unwrap();
    assert_eq!(tmdb.status(), Some(StatusCode::UNAUTHORIZED));
    match tmdb {
        TmdbError::Api { message, .. } => assert_eq!(
            message,
            "{status_code: 7, status_message: Invalid API key: You must be granted a valid key., success: false}"
        ),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_body_is_kept_raw() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/configuration"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // Act
    let err = client.configuration().details().await.unwrap_err();

    // Assert
    assert!(matches!(
        err.downcast_ref::<TmdbError>(),
        Some(TmdbError::UnparseableError { body, .. }) if body == "<html>Bad Gateway</html>"
    ));
}

#[tokio::test]
async fn test_retry_recovers_from_transient_failure() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/movie/latest"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/3/movie/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1_234_567})))
        .expect(1)
        .mount(&server)
        .await;
    let client = builder_for(&server)
        .api_key(API_KEY)
        .max_retries(2)
        .min_backoff(Duration::from_millis(10))
        .max_backoff(Duration::from_millis(20))
        .build()
        .unwrap();

    // Act
    let movie = client.movies().latest().await.unwrap();

    // Assert
    assert_eq!(movie.id, 1_234_567);
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_no_retry_by_default() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/movie/latest"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "status_code": 9,
            "status_message": "Service offline."
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // Act
    let err = client.movies().latest().await.unwrap_err();

    // Assert
    let tmdb = err.downcast_ref::<TmdbError>().unwrap();
    assert_eq!(tmdb.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
}

#[tokio::test]
async fn test_retries_exhausted_surface_last_error() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/tv/latest"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "0")
                .set_body_json(json!({"status_code": 25, "status_message": "Too many requests."})),
        )
        .expect(2)
        .mount(&server)
        .await;
    let client = builder_for(&server)
        .api_key(API_KEY)
        .max_retries(1)
        .min_backoff(Duration::from_millis(5))
        .max_backoff(Duration::from_millis(5))
        .build()
        .unwrap();

    // Act
    let err = client.tv().latest().await.unwrap_err();

    // Assert
    let tmdb = err.downcast_ref::<TmdbError>().unwrap();
    assert_eq!(tmdb.status(), Some(StatusCode::TOO_MANY_REQUESTS));
}

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/network/49"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 49, "name": "HBO"})))
        .expect(4)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // Act
    let networks = client.networks();
    let (a, b, c, d) = tokio::join!(
        networks.details(49),
        networks.details(49),
        networks.details(49),
        networks.details(49)
    );

    // Assert
    for result in [a, b, c, d] {
        assert_eq!(result.unwrap().name, "HBO");
    }
}
