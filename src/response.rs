//! Response boundary: attaching navigation links as `Link` headers
//!
//! Links are attached as repeated `Link` header occurrences, one per link,
//! never comma-joined. Pass-through headers supplied by the caller are
//! appended verbatim with no dedup or merge; a pair the HTTP layer cannot
//! represent is skipped with a warning.

use axum::http::header::LINK;
use axum::http::{HeaderMap, HeaderName, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::links::ResourceLink;

/// Append one `Link` header occurrence per navigation link.
pub fn append_link_headers(headers: &mut HeaderMap, links: &[ResourceLink]) {
    for link in links {
        match HeaderValue::from_str(&link.header_value()) {
            Ok(value) => {
                headers.append(LINK, value);
            }
            Err(_) => {
                tracing::warn!(url = %link.url, "link header value not representable, skipped");
            }
        }
    }
}

/// `200 OK` JSON response carrying navigation links and pass-through headers.
///
/// The body serializes as JSON; links become repeated `Link` headers and
/// extra headers are appended after them, in the order supplied.
pub struct OkWithLinks<T> {
    body: T,
    links: Vec<ResourceLink>,
    headers: Vec<(String, Vec<String>)>,
}

impl<T> OkWithLinks<T> {
    /// Wrap a response body and its navigation links.
    pub fn new(body: T, links: Vec<ResourceLink>) -> Self {
        Self {
            body,
            links,
            headers: Vec::new(),
        }
    }

    /// Attach an opaque pass-through header occurrence per value.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, values: Vec<String>) -> Self {
        self.headers.push((name.into(), values));
        self
    }
}

impl<T: Serialize> IntoResponse for OkWithLinks<T> {
    fn into_response(self) -> Response {
        let mut response = Json(self.body).into_response();

        append_link_headers(response.headers_mut(), &self.links);

        for (name, values) in self.headers {
            let Ok(header_name) = HeaderName::from_bytes(name.as_bytes()) else {
                tracing::warn!(header = %name, "header name not representable, skipped");
                continue;
            };
            for value in values {
                match HeaderValue::from_str(&value) {
                    Ok(header_value) => {
                        response.headers_mut().append(header_name.clone(), header_value);
                    }
                    Err(_) => {
                        tracing::warn!(header = %name, "header value not representable, skipped");
                    }
                }
            }
        }

        response
    }
}
