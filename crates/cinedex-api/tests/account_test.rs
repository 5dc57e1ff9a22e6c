#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

mod common;

use cinedex_api::{AccountListOptions, AccountSort, CreateListRequest, MediaType};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::client_for;

fn success(code: i32) -> serde_json::Value {
    json!({"success": true, "status_code": code, "status_message": "Success."})
}

#[tokio::test]
async fn test_mark_as_favorite_body() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/3/account/42/favorite"))
        .and(query_param("session_id", "sess"))
        .and(body_json(json!({
            "media_type": "movie",
            "media_id": 550,
            "favorite": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(success(1)))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // Act
    let status = client
        .account()
        .mark_as_favorite(42, "sess", MediaType::Movie, 550, true)
        .await
        .unwrap();

    // Assert
    assert_eq!(status.success, Some(true));
}

#[tokio::test]
async fn test_watchlist_tv_sorted_newest_first() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/account/42/watchlist/tv"))
        .and(query_param("session_id", "sess"))
        .and(query_param("sort_by", "created_at.desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "results": [],
            "total_pages": 0,
            "total_results": 0
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);
    let options = AccountListOptions::session("sess").sort_by(AccountSort::CreatedAtDesc);

    // Act
    let page = client.account().watchlist_tv(42, &options).await.unwrap();

    // Assert
    assert!(page.results.is_empty());
    assert!(!page.has_next_page());
}

#[tokio::test]
async fn test_list_lifecycle() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/3/list"))
        .and(query_param("session_id", "sess"))
        .and(body_json(json!({
            "name": "Heist films",
            "description": "",
            "language": "en"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "status_code": 1,
            "status_message": "The item/record was created successfully.",
            "list_id": 8_273_641
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/3/list/8273641/clear"))
        .and(query_param("session_id", "sess"))
        .and(query_param("confirm", "true"))
        .respond_with(ResponseTemplate::new(201).set_body_json(success(12)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/3/list/8273641"))
        .and(query_param("session_id", "sess"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success(13)))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);
    let request = CreateListRequest {
        name: String::from("Heist films"),
        description: String::new(),
        language: String::from("en"),
    };

    // Act
    let created = client.lists().create("sess", &request).await.unwrap();
    let list_id = created.list_id.to_string();
    let cleared = client.lists().clear(&list_id, "sess", true).await.unwrap();
    let deleted = client.lists().delete(&list_id, "sess").await.unwrap();

    // Assert
    assert_eq!(created.list_id, 8_273_641);
    assert_eq!(cleared.status_code, 12);
    assert_eq!(deleted.status_code, 13);
}

#[tokio::test]
async fn test_delete_session_sends_json_body() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/3/authentication/session"))
        .and(body_json(json!({"session_id": "sess"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // Act
    let deleted = client.authentication().delete_session("sess").await.unwrap();

    // Assert
    assert!(deleted.success);
}
