#![allow(dead_code)]
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

pub const MOCK_TOKEN: &str = "test-token";

#[derive(Debug, Deserialize)]
struct PageQuery {
    page: Option<u32>,
    per_page: Option<u32>,
}

#[derive(Default)]
struct MockState {
    zones: Vec<Value>,
    records: HashMap<String, Vec<Value>>,
    failure: Option<(StatusCode, String)>,
    unsuccessful_page: Option<u32>,
    raw_records_body: Option<String>,
    requests: Vec<String>,
}

/// In-process stand-in for the Cloudflare v4 listing endpoints.
#[derive(Clone, Default)]
pub struct MockCloudflare {
    state: Arc<Mutex<MockState>>,
}

impl MockCloudflare {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_zone(&self, id: &str, name: &str, records: Vec<Value>) {
        let mut state = self.state.lock().unwrap();
        state.zones.push(json!({ "id": id, "name": name, "status": "active" }));
        state.records.insert(id.to_string(), records);
    }

    /// Every request answers with `status` and `body`.
    pub fn fail_with(&self, status: StatusCode, body: &str) {
        self.state.lock().unwrap().failure = Some((status, body.to_string()));
    }

    /// Record listings answer `success: false` from `page` onwards.
    pub fn unsuccessful_from_page(&self, page: u32) {
        self.state.lock().unwrap().unsuccessful_page = Some(page);
    }

    pub fn raw_records_body(&self, body: &str) {
        self.state.lock().unwrap().raw_records_body = Some(body.to_string());
    }

    /// Request paths with their query strings, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.state.lock().unwrap().requests.clone()
    }

    pub async fn start(&self) -> String {
        let app = Router::new()
            .route("/zones", get(list_zones))
            .route("/zones/{zone_id}/dns_records", get(list_records))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }
}

pub fn record(name: &str, record_type: &str, content: &str) -> Value {
    json!({ "id": format!("{}-{}", record_type, name), "name": name, "type": record_type, "content": content, "ttl": 1 })
}

pub fn record_with_priority(name: &str, record_type: &str, content: &str, priority: u16) -> Value {
    let mut value = record(name, record_type, content);
    value["priority"] = json!(priority);
    value
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {}", MOCK_TOKEN))
}

fn rejection(status: StatusCode, message: &str) -> Response {
    let body = json!({
        "success": false,
        "errors": [{ "code": 10000, "message": message }],
        "messages": [],
        "result": null,
    });
    (status, Json(body)).into_response()
}

fn paged(items: &[Value], query: &PageQuery) -> Response {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).max(1);
    let total_pages = (items.len() as u32).div_ceil(per_page).max(1);

    let start = ((page - 1) * per_page) as usize;
    let chunk: Vec<Value> = items
        .iter()
        .skip(start)
        .take(per_page as usize)
        .cloned()
        .collect();

    let body = json!({
        "success": true,
        "errors": [],
        "messages": [],
        "result": chunk,
        "result_info": {
            "page": page,
            "per_page": per_page,
            "count": chunk.len(),
            "total_count": items.len(),
            "total_pages": total_pages,
        },
    });
    (StatusCode::OK, Json(body)).into_response()
}

fn log_request(mock: &MockCloudflare, path: &str, query: &PageQuery) -> Option<Response> {
    let mut state = mock.state.lock().unwrap();
    state.requests.push(format!(
        "{}?page={}&per_page={}",
        path,
        query.page.unwrap_or(0),
        query.per_page.unwrap_or(0)
    ));
    state
        .failure
        .as_ref()
        .map(|(status, body)| (*status, body.clone()).into_response())
}

async fn list_zones(
    State(mock): State<MockCloudflare>,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Response {
    if let Some(response) = log_request(&mock, "/zones", &query) {
        return response;
    }
    if !authorized(&headers) {
        return rejection(StatusCode::FORBIDDEN, "Invalid API Token");
    }

    let zones = mock.state.lock().unwrap().zones.clone();
    paged(&zones, &query)
}

async fn list_records(
    State(mock): State<MockCloudflare>,
    Path(zone_id): Path<String>,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Response {
    let path = format!("/zones/{}/dns_records", zone_id);
    if let Some(response) = log_request(&mock, &path, &query) {
        return response;
    }
    if !authorized(&headers) {
        return rejection(StatusCode::FORBIDDEN, "Invalid API Token");
    }

    let (records, unsuccessful_page, raw) = {
        let state = mock.state.lock().unwrap();
        (
            state.records.get(&zone_id).cloned(),
            state.unsuccessful_page,
            state.raw_records_body.clone(),
        )
    };

    if let Some(raw) = raw {
        return (StatusCode::OK, raw).into_response();
    }
    let Some(records) = records else {
        return rejection(StatusCode::NOT_FOUND, "Zone not found");
    };
    if unsuccessful_page.is_some_and(|p| query.page.unwrap_or(1) >= p) {
        return (
            StatusCode::OK,
            Json(json!({
                "success": false,
                "errors": [{ "code": 1000, "message": "Rate limited" }],
                "result": null,
            })),
        )
            .into_response();
    }

    paged(&records, &query)
}
