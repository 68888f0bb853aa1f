// Mock upstream servers shared by the integration tests
#![allow(dead_code)]

use member_qa::answer::AnswerService;
use member_qa::llm::{GeminiClient, GeminiModel};
use member_qa::member_messages::{MemberMessagesClient, MemberMessagesConfig};
use member_qa::routes::configure_routes;
use member_qa::state::AppState;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use warp::http::StatusCode;
use warp::Filter;

pub const TEST_API_KEY: &str = "test-api-key";

/// Produces the reply for one page request, given `skip` and `limit`
pub type PageResponder = Arc<dyn Fn(u64, u64) -> (StatusCode, Value) + Send + Sync>;

/// Produces the reply for one generateContent call
pub type GeminiResponder = Arc<dyn Fn() -> (StatusCode, Value) + Send + Sync>;

#[derive(Debug, Deserialize)]
struct PageQuery {
    skip: u64,
    limit: u64,
}

/// Running mock of the member messages API
pub struct MessageSource {
    pub endpoint: String,
    hits: Arc<AtomicUsize>,
    queries: Arc<Mutex<Vec<(u64, u64)>>>,
}

impl MessageSource {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<(u64, u64)> {
        self.queries.lock().unwrap().clone()
    }
}

/// Running mock of the Gemini API
pub struct GeminiMock {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub api_key: Option<String>,
    pub body: Value,
}

impl RecordedRequest {
    pub fn prompt(&self) -> &str {
        self.body["contents"][0]["parts"][0]["text"]
            .as_str()
            .unwrap_or_default()
    }
}

impl GeminiMock {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Find an available local port
pub fn free_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    listener.local_addr().expect("local addr").port()
}

async fn wait_for_server() {
    tokio::time::sleep(Duration::from_millis(100)).await;
}

/// A member record as the real API returns it
pub fn member(i: usize) -> Value {
    json!({
        "id": format!("msg-{}", i),
        "user_id": format!("user-{}", i % 7),
        "user_name": format!("Member {}", i),
        "timestamp": "2025-05-05T07:47:20.159073+00:00",
        "message": format!("message number {}", i)
    })
}

/// A source holding `total` messages, served by offset and limit
pub fn paged(total: usize) -> PageResponder {
    let items: Vec<Value> = (0..total).map(member).collect();
    Arc::new(move |skip: u64, limit: u64| {
        let start = (skip as usize).min(items.len());
        let end = (start + limit as usize).min(items.len());
        (
            StatusCode::OK,
            json!({ "total": items.len(), "items": items[start..end].to_vec() }),
        )
    })
}

pub async fn spawn_message_source(respond: PageResponder) -> MessageSource {
    let hits = Arc::new(AtomicUsize::new(0));
    let queries = Arc::new(Mutex::new(Vec::new()));

    let counter = hits.clone();
    let recorded = queries.clone();
    let route = warp::path("messages")
        .and(warp::get())
        .and(warp::query::<PageQuery>())
        .map(move |query: PageQuery| {
            counter.fetch_add(1, Ordering::SeqCst);
            recorded.lock().unwrap().push((query.skip, query.limit));
            let (status, body) = respond(query.skip, query.limit);
            warp::reply::with_status(warp::reply::json(&body), status)
        });

    let port = free_port();
    tokio::spawn(warp::serve(route).run(([127, 0, 0, 1], port)));
    wait_for_server().await;

    MessageSource {
        endpoint: format!("http://127.0.0.1:{}/messages", port),
        hits,
        queries,
    }
}

/// Successful generateContent body carrying `text`
pub fn gemini_text(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": {
            "promptTokenCount": 42,
            "candidatesTokenCount": 3,
            "totalTokenCount": 45
        }
    })
}

pub fn gemini_answering(text: &str) -> GeminiResponder {
    let body = gemini_text(text);
    Arc::new(move || (StatusCode::OK, body.clone()))
}

pub async fn spawn_gemini(respond: GeminiResponder) -> GeminiMock {
    let requests = Arc::new(Mutex::new(Vec::new()));

    let recorded = requests.clone();
    let route = warp::post()
        .and(warp::path::full())
        .and(warp::header::optional::<String>("x-goog-api-key"))
        .and(warp::body::json::<Value>())
        .map(move |path: warp::path::FullPath, api_key: Option<String>, body: Value| {
            recorded.lock().unwrap().push(RecordedRequest {
                path: path.as_str().to_string(),
                api_key,
                body,
            });
            let (status, body) = respond();
            warp::reply::with_status(warp::reply::json(&body), status)
        });

    let port = free_port();
    tokio::spawn(warp::serve(route).run(([127, 0, 0, 1], port)));
    wait_for_server().await;

    GeminiMock {
        base_url: format!("http://127.0.0.1:{}/v1beta", port),
        requests,
    }
}

pub fn message_client(endpoint: &str) -> MemberMessagesClient {
    let config = MemberMessagesConfig::new(endpoint).with_request_timeout(Duration::from_secs(5));
    MemberMessagesClient::new(config).expect("build member messages client")
}

pub fn gemini_client(base_url: &str) -> GeminiClient {
    GeminiClient::with_timeout(TEST_API_KEY, GeminiModel::Gemini25Flash, Duration::from_secs(5))
        .expect("build Gemini client")
        .with_base_url(base_url)
}

/// Start the application against the given mocks and return its base URL
pub async fn spawn_app(source: &MessageSource, gemini: &GeminiMock) -> String {
    let state = Arc::new(AppState::new(
        message_client(&source.endpoint),
        AnswerService::new(Arc::new(gemini_client(&gemini.base_url))),
        100,
    ));

    let port = free_port();
    tokio::spawn(warp::serve(configure_routes(state)).run(([127, 0, 0, 1], port)));
    wait_for_server().await;

    format!("http://127.0.0.1:{}", port)
}
