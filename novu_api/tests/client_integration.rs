use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use novu_api::types::{
    BulkTriggerEventRequest, CreateTopicRequest, Recipients, Response, Topic, TriggerEventRequest,
};
use novu_api::{
    BodyRule, Client, ClientConfig, Endpoint, Error, HttpMethod, HttpRequest, HttpResponse,
    JsonCodec, RequestDescriptor, SubscriberQuery, Transport, TransportError, TransportErrorKind,
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn client(server: &MockServer) -> Client {
    Client::with_base_url("1245", &server.uri()).unwrap()
}

#[tokio::test]
async fn sends_api_key_and_json_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/environments/me"))
        .and(header("authorization", "ApiKey 1245"))
        .and(header("content-type", "application/json"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("environment.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let resp = client(&mock_server).current_environment().await.unwrap();
    assert_eq!(resp.data.id.as_deref(), Some("env-1"));
}

#[tokio::test]
async fn default_headers_are_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/integrations"))
        .and(header("x-request-source", "tests"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data":[]}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new("1245")
        .with_base_url(&mock_server.uri())
        .with_default_header("x-request-source", "tests");
    let client = Client::from_config(config).unwrap();
    let resp = client.integrations().await.unwrap();
    assert!(resp.data.is_empty());
}

#[tokio::test]
async fn not_found_is_server_error_with_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/subscribers/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string(r#"{"statusCode":404,"message":"not found"}"#),
        )
        .mount(&mock_server)
        .await;

    let err = client(&mock_server).subscriber("missing").await.unwrap_err();
    assert!(err.is_not_found());
    assert!(!err.is_retryable());
    match err {
        Error::Server {
            status,
            message,
            body,
        } => {
            assert_eq!(status, 404);
            assert_eq!(message, "not found");
            assert!(body.contains("statusCode"));
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn validation_messages_are_joined() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/topics"))
        .respond_with(ResponseTemplate::new(400).set_body_string(
            r#"{"statusCode":400,"message":["key must be a string","name should not be empty"],"error":"Bad Request"}"#,
        ))
        .mount(&mock_server)
        .await;

    let request = CreateTopicRequest {
        key: "k".to_string(),
        name: String::new(),
    };
    let err = client(&mock_server).create_topic(&request).await.unwrap_err();
    match err {
        Error::Server {
            status, message, ..
        } => {
            assert_eq!(status, 400);
            assert_eq!(message, "key must be a string; name should not be empty");
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn plain_text_error_body_is_kept() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/changes/count"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server).changes_count().await.unwrap_err();
    assert_eq!(err.status(), Some(502));
    assert_eq!(err.body(), Some("Bad Gateway"));
    assert_eq!(err.to_string(), "Request failed with status 502: Bad Gateway");
}

#[tokio::test]
async fn non_json_success_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/subscribers"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server)
        .subscribers(&SubscriberQuery::default())
        .await
        .unwrap_err();
    match err {
        Error::Decode { status, body, .. } => {
            assert_eq!(status, 200);
            assert_eq!(body, "<html>maintenance</html>");
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn no_content_on_data_endpoint_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/topics/news"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server).topic("news").await.unwrap_err();
    assert!(matches!(err, Error::Decode { status: 204, .. }));
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    let client = Client::with_base_url("1245", "http://127.0.0.1:1").unwrap();
    let err = client.environments().await.unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(err.status(), None);
    match err {
        Error::Transport(e) => assert_eq!(e.kind, TransportErrorKind::Connect),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_response_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/environments"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"data":[]}"#)
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new("1245")
        .with_base_url(&mock_server.uri())
        .with_timeout(Duration::from_millis(100));
    let err = Client::from_config(config)
        .unwrap()
        .environments()
        .await
        .unwrap_err();
    match err {
        Error::Transport(e) => assert_eq!(e.kind, TransportErrorKind::Timeout),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn repeated_calls_send_identical_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/topics"))
        .respond_with(
            ResponseTemplate::new(201).set_body_string(r#"{"data":{"_id":"t1","key":"news"}}"#),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let request = CreateTopicRequest {
        key: "news".to_string(),
        name: "News".to_string(),
    };
    let first = client.create_topic(&request).await.unwrap();
    let second = client.create_topic(&request).await.unwrap();
    assert_eq!(first, second);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].url, requests[1].url);
    assert_eq!(requests[0].body, requests[1].body);
}

#[tokio::test]
async fn concurrent_calls_are_independent() {
    let mock_server = MockServer::start().await;

    for key in ["a", "b", "c"] {
        Mock::given(method("GET"))
            .and(path(format!("/topics/{}", key)))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(format!(r#"{{"data":{{"key":"{}"}}}}"#, key)),
            )
            .mount(&mock_server)
            .await;
    }

    let client = client(&mock_server);
    let (a, b, c) = tokio::join!(client.topic("a"), client.topic("b"), client.topic("c"));
    assert_eq!(a.unwrap().data.key.as_deref(), Some("a"));
    assert_eq!(b.unwrap().data.key.as_deref(), Some("b"));
    assert_eq!(c.unwrap().data.key.as_deref(), Some("c"));
}

#[derive(Clone, Default)]
struct RecordingTransport {
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    response_body: &'static str,
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        Ok(HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: self.response_body.as_bytes().to_vec(),
        })
    }
}

#[tokio::test]
async fn custom_transport_sees_resolved_request() {
    let transport = RecordingTransport {
        response_body: r#"{"data":{"key":"k1","name":"renamed"}}"#,
        ..Default::default()
    };
    let client = Client::from_parts(ClientConfig::new("1245"), transport.clone(), JsonCodec).unwrap();

    let request = novu_api::types::RenameTopicRequest {
        name: "renamed".to_string(),
    };
    let resp = client.rename_topic("k1", &request).await.unwrap();
    assert_eq!(resp.data.name.as_deref(), Some("renamed"));

    let requests = transport.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let sent = &requests[0];
    assert_eq!(sent.method, HttpMethod::Patch);
    assert_eq!(sent.url.as_str(), "https://api.novu.co/v1/topics/k1");
    assert_eq!(sent.body.as_deref(), Some(br#"{"name":"renamed"}"#.as_slice()));
    assert!(sent
        .headers
        .contains(&("authorization".to_string(), "ApiKey 1245".to_string())));
}

#[tokio::test]
async fn missing_path_parameter_sends_nothing() {
    let transport = RecordingTransport::default();
    let client = Client::from_parts(ClientConfig::new("1245"), transport.clone(), JsonCodec).unwrap();

    let err = client.topic("").await.unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));

    let endpoint: Endpoint<(), Response<Topic>> = Endpoint::new(
        "topic_by_id",
        HttpMethod::Get,
        "/topics/{topicId}",
        BodyRule::None,
    );
    let err = client
        .execute(&endpoint, RequestDescriptor::new().path("topicKey", "k"))
        .await
        .unwrap_err();
    match err {
        Error::Configuration(message) => assert!(message.contains("topicId")),
        other => panic!("expected configuration error, got {other:?}"),
    }
    assert!(transport.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn body_rule_is_enforced_before_sending() {
    let transport = RecordingTransport::default();
    let client = Client::from_parts(ClientConfig::new("1245"), transport.clone(), JsonCodec).unwrap();

    let err = client
        .execute(&novu_api::api::topics::CREATE, RequestDescriptor::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));

    let body = ();
    let err = client
        .execute(
            &novu_api::api::topics::GET,
            RequestDescriptor::new().path("topicKey", "k").body(&body),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));

    assert!(transport.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn empty_recipients_are_rejected_before_sending() {
    let transport = RecordingTransport::default();
    let client = Client::from_parts(ClientConfig::new("1245"), transport.clone(), JsonCodec).unwrap();

    let mut request = TriggerEventRequest::new("welcome", "user-1").unwrap();
    request.to = Recipients::Topics(Vec::new());
    let err = client.trigger_event(&request).await.unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));

    let bulk = BulkTriggerEventRequest {
        events: vec![TriggerEventRequest::new("one", "user-1").unwrap(), request],
    };
    let err = client.bulk_trigger_events(&bulk).await.unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));

    assert!(transport.requests.lock().unwrap().is_empty());
}
