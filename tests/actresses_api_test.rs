use cast_client::{ActressNationality, ApiClient, CastSource, ClientSettings};
use httpmock::prelude::*;
use serde_json::{json, Value};
use std::time::Duration;

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&ClientSettings::new(server.url("/freetestapi"))).unwrap()
}

fn actress(id: u64, name: &str, nationality: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "birth_year": 1965,
        "biography": format!("{} biography", name),
        "image": format!("https://example.com/{}.jpg", id),
        "most_famous_movies": ["First", "Second", "Third"],
        "awards": "Several",
        "nationality": nationality
    })
}

#[tokio::test]
async fn test_get_actress_returns_valid_record() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/freetestapi/actresses/2");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(actress(2, "Cate Blanchett", "Australian"));
    });

    let client = client_for(&server);
    let result = client.get_actress(2).await;

    api_mock.assert();
    let actress = result.expect("actress should be returned");
    assert_eq!(actress.name(), "Cate Blanchett");
    assert_eq!(actress.nationality, ActressNationality::Australian);
    assert_eq!(actress.most_famous_movies[2], "Third");
}

#[tokio::test]
async fn test_get_actress_returns_none_on_invalid_shape() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/freetestapi/actresses/4");
        then.status(200)
            .json_body(actress(4, "Nobody", "Atlantean"));
    });

    let client = client_for(&server);

    assert!(client.get_actress(4).await.is_none());
    api_mock.assert();
}

#[tokio::test]
async fn test_get_actress_returns_none_on_http_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/freetestapi/actresses/404");
        then.status(404).body("Not Found");
    });

    let client = client_for(&server);
    assert!(client.get_actress(404).await.is_none());
}

#[tokio::test]
async fn test_get_actress_returns_none_when_server_unreachable() {
    // Port 9 (discard) is not served by anything in the test environment.
    let client = ApiClient::new(&ClientSettings::new("http://127.0.0.1:9/freetestapi")).unwrap();
    assert!(client.get_actress(1).await.is_none());
    assert!(client.get_all_actresses().await.is_empty());
}

#[tokio::test]
async fn test_get_all_actresses_keeps_only_valid_records_in_order() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/freetestapi/actresses");
        then.status(200).json_body(json!([
            actress(5, "Judi Dench", "British"),
            actress(6, "Invalid", "Klingon"),
            actress(7, "Natalie Portman", "Israeli-American"),
            {"id": "8"},
            actress(9, "Gong Li", "Chinese")
        ]));
    });

    let client = client_for(&server);
    let actresses = client.get_all_actresses().await;

    api_mock.assert();
    let names: Vec<&str> = actresses.iter().map(|a| a.name()).collect();
    assert_eq!(names, vec!["Judi Dench", "Natalie Portman", "Gong Li"]);
}

#[tokio::test]
async fn test_get_all_actresses_returns_empty_on_server_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/freetestapi/actresses");
        then.status(500);
    });

    let client = client_for(&server);
    assert!(client.get_all_actresses().await.is_empty());
}

#[tokio::test]
async fn test_get_all_actresses_returns_empty_on_non_array_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/freetestapi/actresses");
        then.status(200)
            .json_body(json!({"actresses": [actress(1, "Wrapped", "French")]}));
    });

    let client = client_for(&server);
    assert!(client.get_all_actresses().await.is_empty());
}

#[tokio::test]
async fn test_get_actresses_preserves_order_and_length() {
    let server = MockServer::start();

    // The first id answers last; results must still follow request order.
    let slow = server.mock(|when, then| {
        when.method(GET).path("/freetestapi/actresses/1");
        then.status(200)
            .delay(Duration::from_millis(200))
            .json_body(actress(1, "Slow", "Indian"));
    });
    let missing = server.mock(|when, then| {
        when.method(GET).path("/freetestapi/actresses/2");
        then.status(404);
    });
    let fast = server.mock(|when, then| {
        when.method(GET).path("/freetestapi/actresses/3");
        then.status(200).json_body(actress(3, "Fast", "Spanish"));
    });

    let client = client_for(&server);
    let results = client.get_actresses(&[1, 2, 3, 1]).await;

    assert_eq!(results.len(), 4);
    assert_eq!(results[0].as_ref().map(|a| a.name()), Some("Slow"));
    assert!(results[1].is_none());
    assert_eq!(results[2].as_ref().map(|a| a.name()), Some("Fast"));
    assert_eq!(results[3].as_ref().map(|a| a.id()), Some(1));

    slow.assert_hits(2);
    missing.assert_hits(1);
    fast.assert_hits(1);
}

#[tokio::test]
async fn test_get_actresses_with_no_ids_makes_no_requests() {
    let server = MockServer::start();
    let any = server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(json!([]));
    });

    let client = client_for(&server);
    assert!(client.get_actresses(&[]).await.is_empty());
    any.assert_hits(0);
}
