//! Navigation link types
//!
//! Defines the link value objects and the parsed request view the strategies
//! operate on.

use std::fmt;

use serde::Serialize;
use url::Url;

use crate::error::Result;
use crate::query::QueryMap;

/// Relation of a navigation link to the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkRelation {
    /// Link to the page before the current one.
    Previous,
    /// Link to the page after the current one.
    Next,
}

impl LinkRelation {
    /// Relation name as it appears in the header value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Previous => "previous",
            Self::Next => "next",
        }
    }
}

impl fmt::Display for LinkRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single navigation link destined for a `Link` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceLink {
    /// Fully-qualified URL of the adjacent page.
    pub url: String,
    /// Relation to the current page.
    pub rel: LinkRelation,
}

impl ResourceLink {
    /// Create a link.
    pub fn new(url: impl Into<String>, rel: LinkRelation) -> Self {
        Self {
            url: url.into(),
            rel,
        }
    }

    /// Link to the previous page.
    pub fn previous(url: impl Into<String>) -> Self {
        Self::new(url, LinkRelation::Previous)
    }

    /// Link to the next page.
    pub fn next(url: impl Into<String>) -> Self {
        Self::new(url, LinkRelation::Next)
    }

    /// RFC 5988 header value: `<url>; rel="relation"`.
    pub fn header_value(&self) -> String {
        format!("<{}>; rel=\"{}\"", self.url, self.rel)
    }
}

impl fmt::Display for ResourceLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header_value())
    }
}

/// One page of a result set, in the store's sort order.
///
/// The first element is the earliest-in-order item, the last the latest.
/// `has_more` reports whether at least one additional item exists beyond the
/// last entity in the current direction of traversal.
#[derive(Debug, Clone, Copy)]
pub struct ResultPage<'a, T> {
    items: &'a [T],
    has_more: bool,
}

impl<'a, T> ResultPage<'a, T> {
    /// Wrap a fetched page.
    pub fn new(items: &'a [T], has_more: bool) -> Self {
        Self { items, has_more }
    }

    /// The page's entities.
    pub fn items(&self) -> &'a [T] {
        self.items
    }

    /// Whether more results exist beyond this page.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Whether the page holds no entities.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Earliest-in-order entity.
    pub fn first(&self) -> Option<&'a T> {
        self.items.first()
    }

    /// Latest-in-order entity.
    pub fn last(&self) -> Option<&'a T> {
        self.items.last()
    }
}

/// Parsed view of the incoming request: base URL plus query parameters.
///
/// The base URL is the request URI with its query string (and fragment) split
/// off exactly once; links are rebuilt from it with freshly serialized
/// parameter sets.
#[derive(Debug, Clone)]
pub struct RequestContext {
    base_url: String,
    params: QueryMap,
}

impl RequestContext {
    /// Parse an absolute request URI.
    pub fn parse(uri: &str) -> Result<Self> {
        let mut url = Url::parse(uri)?;
        let params = QueryMap::from_url(&url);
        url.set_query(None);
        url.set_fragment(None);
        Ok(Self {
            base_url: url.to_string(),
            params,
        })
    }

    /// Build from parts already split by the HTTP layer.
    pub fn from_parts(base_url: impl Into<String>, params: QueryMap) -> Self {
        Self {
            base_url: base_url.into(),
            params,
        }
    }

    /// Request URI without its query string.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The request's query parameters.
    pub fn params(&self) -> &QueryMap {
        &self.params
    }

    /// Link to this resource with a new parameter set.
    ///
    /// The `?` is omitted when the parameter set is empty.
    pub fn link_with(&self, params: &QueryMap, rel: LinkRelation) -> ResourceLink {
        let query = params.to_query_string();
        let url = if query.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}?{}", self.base_url, query)
        };
        ResourceLink::new(url, rel)
    }
}

/// Parse an RFC 5988 `Link` header value into navigation links.
///
/// Accepts a single entry or a comma-joined list. Entries whose relation is
/// neither `previous`/`prev` nor `next` are ignored.
pub fn parse_link_header(value: &str) -> Vec<ResourceLink> {
    let mut links = Vec::new();

    for entry in value.split(',') {
        let mut url = None;
        let mut rel = None;

        for segment in entry.split(';') {
            let segment = segment.trim();
            if segment.starts_with('<') && segment.ends_with('>') {
                url = Some(&segment[1..segment.len() - 1]);
            } else if let Some(stripped) = segment.strip_prefix("rel=") {
                rel = match stripped.trim_matches('"') {
                    "previous" | "prev" => Some(LinkRelation::Previous),
                    "next" => Some(LinkRelation::Next),
                    _ => None,
                };
            }
        }

        if let (Some(url), Some(rel)) = (url, rel) {
            links.push(ResourceLink::new(url, rel));
        }
    }

    links
}
