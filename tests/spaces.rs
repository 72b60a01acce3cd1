//! Tests for the Space endpoints.
//!
//! Uses wiremock to mock the Kaiten API.

use kaitenapi::{
    Create, CreateSpaceParams, Get, KaitenClient, List, Remove, Space, Update, UpdateSpaceParams,
};
use reqwest::StatusCode;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> KaitenClient {
    KaitenClient::with_base_url("test-token", &server.uri()).unwrap()
}

#[tokio::test]
async fn test_get_space() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spaces/1"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 1,
            "uid": "a1b2",
            "title": "Eng",
            "created": "2024-01-10T08:00:00Z",
            "archived": false,
            "access": "for_everyone",
            "entity_type": "space",
            "path": "1",
            "sort_order": 1.5,
            "settings": {
                "timeline": {
                    "startHour": 9,
                    "endHour": 18,
                    "workDays": ["1", "2", "3", "4", "5"],
                    "planningUnits": 1,
                    "calculateResourcesBy": 1
                }
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let space = Space::get(&client, 1).await.unwrap();

    assert_eq!(space.response.status(), StatusCode::OK);
    let space = space.into_data();
    assert_eq!(space.id, 1);
    assert_eq!(space.title, "Eng");
    assert_eq!(space.sort_order, Some(1.5));
    assert!(space.created.is_some());

    let timeline = space.timeline().unwrap();
    assert_eq!(timeline.start_hour, 9);
    assert_eq!(timeline.end_hour, 18);
    assert_eq!(timeline.work_days.len(), 5);
}

#[tokio::test]
async fn test_get_space_tolerates_unknown_and_missing_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spaces/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 5,
            "title": "Sparse",
            "boards": [],
            "some_future_field": {"nested": true}
        })))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let space = Space::get(&client, 5).await.unwrap().into_data();

    assert_eq!(space.id, 5);
    assert!(space.uid.is_none());
    assert!(space.settings.is_none());
    assert!(!space.is_archived());
}

#[tokio::test]
async fn test_get_space_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spaces/404"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"message": "Not found"})),
        )
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let err = Space::get(&client, 404).await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_list_spaces() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spaces"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "title": "Engineering"},
            {"id": 2, "title": "Backend", "parent_entity_uid": "a1b2"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let spaces = Space::list(&client).await.unwrap().into_data();

    assert_eq!(spaces.len(), 2);
    assert_eq!(spaces[0].title, "Engineering");
    assert_eq!(spaces[1].parent_uid(), Some("a1b2"));
}

#[tokio::test]
async fn test_list_spaces_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spaces"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let spaces = Space::list(&client).await.unwrap().into_data();

    assert!(spaces.is_empty());
}

#[tokio::test]
async fn test_create_space_sends_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/spaces"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({"title": "Design", "external_id": 77})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 10,
            "title": "Design",
            "external_id": 77
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let params = CreateSpaceParams {
        title: Some("Design".to_string()),
        external_id: Some(77),
    };
    let space = Space::create(&client, params).await.unwrap().into_data();

    assert_eq!(space.id, 10);
    assert_eq!(space.external_id, Some(77));
}

#[tokio::test]
async fn test_update_space_sends_only_set_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/spaces/1"))
        .and(body_json(serde_json::json!({"title": "Renamed"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 1,
            "title": "Renamed"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let params = UpdateSpaceParams {
        title: Some("Renamed".to_string()),
        ..Default::default()
    };
    let space = Space::update(&client, 1, params).await.unwrap().into_data();

    assert_eq!(space.title, "Renamed");
}

#[tokio::test]
async fn test_update_space_allowed_card_types() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/spaces/3"))
        .and(body_json(serde_json::json!({"allowed_card_type_ids": ["4", "9"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 3,
            "title": "Ops",
            "allowed_card_type_ids": ["4", "9"]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let params = UpdateSpaceParams {
        allowed_card_type_ids: Some(vec!["4".to_string(), "9".to_string()]),
        ..Default::default()
    };
    let space = Space::update(&client, 3, params).await.unwrap().into_data();

    assert_eq!(space.allowed_card_type_ids.unwrap().len(), 2);
}

#[tokio::test]
async fn test_remove_space() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/spaces/42"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let response = Space::remove(&client, 42).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_remove_space_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/spaces/42"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(serde_json::json!({"message": "Access denied"})),
        )
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let err = Space::remove(&client, 42).await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
    assert!(err.to_string().ends_with("/spaces/42: 403 Access denied"));
    assert!(err.to_string().starts_with("DELETE http://"));
}
