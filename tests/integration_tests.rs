//! Integration tests driving an axum router end to end
//!
//! Tests the full flow: request URI → link construction → `Link` headers on
//! the outgoing response, including a simulated keyset traversal over a
//! fixed dataset.

use axum::body::Body;
use axum::http::header::LINK;
use axum::http::{Request, Response, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use tower::ServiceExt;

use resource_links::{
    parse_link_header, CursorLinks, HasId, LinkRelation, LinkStrategy, OkWithLinks, PageLinks,
    RequestContext, ResourceLink, ResultPage,
};

// ============================================================================
// Test application
// ============================================================================

const IDS: [&str; 5] = ["e1", "e2", "e3", "e4", "e5"];
const PAGE_SIZE: usize = 2;

#[derive(Debug, Clone, Serialize)]
struct Event {
    id: String,
}

impl HasId for Event {
    fn id(&self) -> String {
        self.id.clone()
    }
}

fn dataset() -> Vec<Event> {
    IDS.iter().map(|id| Event { id: (*id).to_string() }).collect()
}

/// Keyset endpoint: slices a fixed dataset around the incoming cursor.
async fn list_events(uri: Uri) -> axum::response::Response {
    let request = RequestContext::parse(&uri.to_string()).expect("test uri is absolute");
    let all = dataset();

    let (items, has_more) = if let Some(after) = request.params().get("after") {
        let start = IDS
            .iter()
            .position(|id| *id == after)
            .map_or(IDS.len(), |i| i + 1);
        let items: Vec<Event> = all[start..].iter().take(PAGE_SIZE).cloned().collect();
        let has_more = start + items.len() < all.len();
        (items, has_more)
    } else if let Some(before) = request.params().get("before") {
        let end = IDS.iter().position(|id| *id == before).unwrap_or(0);
        let start = end.saturating_sub(PAGE_SIZE);
        (all[start..end].to_vec(), start > 0)
    } else {
        (all[..PAGE_SIZE].to_vec(), true)
    };

    let page = ResultPage::new(&items, has_more);
    let links = CursorLinks::identified().links(&request, &page);
    let count = items.len();

    OkWithLinks::new(items, links)
        .with_header("X-Result-Count", vec![count.to_string()])
        .into_response()
}

/// Page-number endpoint over the same dataset.
async fn list_pages(uri: Uri) -> axum::response::Response {
    let request = RequestContext::parse(&uri.to_string()).expect("test uri is absolute");
    let current: usize = request
        .params()
        .get("page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(1)
        .max(1);

    let all = dataset();
    let start = (current - 1) * PAGE_SIZE;
    let items: Vec<Event> = all.iter().skip(start).take(PAGE_SIZE).cloned().collect();
    let has_more = start + items.len() < all.len();

    let page = ResultPage::new(&items, has_more);
    let links = PageLinks::new(current as u32).links(&request, &page);

    OkWithLinks::new(items, links).into_response()
}

fn app() -> Router {
    Router::new()
        .route("/events", get(list_events))
        .route("/pages", get(list_pages))
}

async fn fetch(uri: &str) -> Response<Body> {
    app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

fn link_headers(response: &Response<Body>) -> Vec<ResourceLink> {
    response
        .headers()
        .get_all(LINK)
        .iter()
        .flat_map(|value| parse_link_header(value.to_str().unwrap()))
        .collect()
}

async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// ============================================================================
// Cursor traversal
// ============================================================================

#[tokio::test]
async fn test_initial_request_links_forward_only() {
    let response = fetch("http://example.org/events").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        link_headers(&response),
        vec![ResourceLink::next("http://example.org/events?after=e2")]
    );
    assert_eq!(
        response.headers().get("X-Result-Count").unwrap(),
        &"2".parse::<axum::http::HeaderValue>().unwrap()
    );

    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["id"], "e1");
}

#[tokio::test]
async fn test_forward_page_links_both_ways() {
    let response = fetch("http://example.org/events?after=e2").await;

    assert_eq!(
        link_headers(&response),
        vec![
            ResourceLink::previous("http://example.org/events?before=e3"),
            ResourceLink::next("http://example.org/events?after=e4"),
        ]
    );
    assert_eq!(response.headers().get_all(LINK).iter().count(), 2);
}

#[tokio::test]
async fn test_forward_traversal_reaches_the_end() {
    // Follow next links until they stop: e1-e2, e3-e4, e5.
    let mut uri = "http://example.org/events".to_string();
    let mut seen = Vec::new();

    loop {
        let response = fetch(&uri).await;
        let links = link_headers(&response);
        let body = body_json(response).await;
        for item in body.as_array().unwrap() {
            seen.push(item["id"].as_str().unwrap().to_string());
        }

        match links.iter().find(|l| l.rel == LinkRelation::Next) {
            Some(next) => uri = next.url.clone(),
            None => break,
        }
    }

    assert_eq!(seen, IDS);
}

#[tokio::test]
async fn test_forward_past_end_routes_back_to_data() {
    let response = fetch("http://example.org/events?after=e5").await;

    assert_eq!(
        response.headers().get("X-Result-Count").unwrap(),
        &"0".parse::<axum::http::HeaderValue>().unwrap()
    );
    assert_eq!(
        link_headers(&response),
        vec![ResourceLink::next("http://example.org/events")]
    );
}

#[tokio::test]
async fn test_backward_past_start_routes_back_to_data() {
    let response = fetch("http://example.org/events?before=e1").await;

    assert_eq!(
        link_headers(&response),
        vec![ResourceLink::next("http://example.org/events")]
    );
}

// ============================================================================
// Page-number endpoint
// ============================================================================

#[tokio::test]
async fn test_page_endpoint_first_page() {
    let response = fetch("http://example.org/pages?page=1").await;

    assert_eq!(
        link_headers(&response),
        vec![ResourceLink::next("http://example.org/pages?page=2")]
    );
}

#[tokio::test]
async fn test_page_endpoint_middle_page_keeps_other_params() {
    let response = fetch("http://example.org/pages?page=2&verbose=true").await;

    assert_eq!(
        link_headers(&response),
        vec![
            ResourceLink::previous("http://example.org/pages?page=1&verbose=true"),
            ResourceLink::next("http://example.org/pages?page=3&verbose=true"),
        ]
    );
}

#[tokio::test]
async fn test_page_endpoint_last_page() {
    let response = fetch("http://example.org/pages?page=3").await;

    assert_eq!(
        link_headers(&response),
        vec![ResourceLink::previous("http://example.org/pages?page=2")]
    );
}

// ============================================================================
// Header round trip
// ============================================================================

#[tokio::test]
async fn test_emitted_headers_are_valid_rfc5988() {
    let response = fetch("http://example.org/events?after=e2").await;

    for value in response.headers().get_all(LINK) {
        let parsed = parse_link_header(value.to_str().unwrap());
        assert_eq!(parsed.len(), 1);
        // Each emitted URL is itself a fetchable absolute URL.
        assert!(url::Url::parse(&parsed[0].url).is_ok());
    }
}
