use std::time::Duration;

use center_engine::{ClientSettings, HttpTransport, MessageQuery, Transport, TransportError};
use pretty_assertions::assert_eq;
use url::Url;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn transport_for(server: &MockServer) -> HttpTransport {
    let base = Url::parse(&server.uri()).expect("mock server uri");
    HttpTransport::new(base, ClientSettings::default()).expect("client")
}

#[tokio::test]
async fn messages_decode_from_the_wire_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": 1,
                "sender": "@Web3Dev",
                "content": "Urgent audit for Uniswap fork",
                "source": "telegram",
                "category": "urgent",
                "timestamp": "2025-08-12T10:00:00Z"
            },
            {
                "id": 2,
                "sender": "@CryptoFounder",
                "content": "Aave integration query",
                "source": "TwitterFeed",
                "category": "high",
                "timestamp": "2025-08-12T10:05:00Z"
            }
        ])))
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let messages = transport.fetch_messages(None).await.expect("messages");

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].body, "Urgent audit for Uniswap fork");
    // Stored tokens arrive verbatim; canonicalization is the core's job.
    assert_eq!(messages[1].source, "TwitterFeed");
    assert_eq!(messages[1].category, "high");
}

#[tokio::test]
async fn message_query_parameters_are_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/messages"))
        .and(query_param("category", "urgent"))
        .and(query_param("project", "Uniswap"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let query = MessageQuery {
        category: Some("urgent".to_string()),
        project: Some("Uniswap".to_string()),
        limit: Some(10),
        ..MessageQuery::default()
    };
    let messages = transport.fetch_messages(Some(&query)).await.expect("messages");
    assert!(messages.is_empty());
}

#[tokio::test]
async fn category_update_posts_the_raw_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/messages/7/category"))
        .and(body_json(serde_json::json!({ "category": "high" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "message": "Category updated successfully" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    transport.update_category(7, "high").await.expect("update");
}

#[tokio::test]
async fn project_feeds_decode_as_ordered_map() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/project-feeds"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Uniswap": [
                { "content": "Uniswap ships v5", "timestamp": "2025-08-12T09:00:00Z" }
            ],
            "Aave": []
        })))
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let feeds = transport.fetch_project_feeds().await.expect("feeds");

    assert_eq!(feeds.len(), 2);
    assert_eq!(feeds["Uniswap"][0].content, "Uniswap ships v5");
    assert!(feeds["Aave"].is_empty());
}

#[tokio::test]
async fn templates_and_stats_decode() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/templates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "id": 1, "name": "Quick Response", "content": "Thanks for reaching out!" }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_messages": 4,
            "telegram_messages": 2,
            "twitter_messages": 2,
            "categories": { "urgent": 1, "high_priority": 2, "routine": 1, "archive": 0 }
        })))
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let templates = transport.fetch_templates().await.expect("templates");
    assert_eq!(templates[0].name, "Quick Response");

    let stats = transport.fetch_stats().await.expect("stats");
    assert_eq!(stats.total_messages, 4);
    assert_eq!(stats.categories.high_priority, 2);
}

#[tokio::test]
async fn http_error_maps_to_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/refresh"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let err = transport.refresh_messages().await.unwrap_err();
    assert_eq!(err, TransportError::HttpStatus(502));
}

#[tokio::test]
async fn slow_response_maps_to_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/messages"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(serde_json::json!([])),
        )
        .mount(&server)
        .await;

    let base = Url::parse(&server.uri()).expect("mock server uri");
    let settings = ClientSettings {
        request_timeout: Duration::from_millis(50),
        ..ClientSettings::default()
    };
    let transport = HttpTransport::new(base, settings).expect("client");

    let err = transport.fetch_messages(None).await.unwrap_err();
    assert_eq!(err, TransportError::Timeout);
}

#[tokio::test]
async fn malformed_body_maps_to_invalid_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let transport = transport_for(&server);
    let err = transport.fetch_messages(None).await.unwrap_err();
    assert!(matches!(err, TransportError::InvalidBody(_)));
}
