//! # Resource Links
//!
//! Pagination `Link` header generation for collection API responses.
//!
//! Given the incoming request URI and the outgoing page of entities, this
//! crate computes the RFC 5988 navigation links (`rel="previous"` /
//! `rel="next"`) that let a client page through a result set without the
//! server embedding pagination state in the response body.
//!
//! ## Features
//!
//! - **Page-number links**: `?page=3` style, previous/next by arithmetic
//! - **Cursor links**: keyset `?before=` / `?after=` markers derived from
//!   entity identity, stable under concurrent inserts and deletes
//! - **Parameter preservation**: every non-pagination query parameter of the
//!   original request survives into the emitted links, deterministically
//!   serialized
//! - **Axum integration**: attach links (and opaque pass-through headers) to
//!   a JSON response as repeated `Link` header occurrences
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use resource_links::{CursorLinks, LinkStrategy, OkWithLinks, RequestContext, ResultPage};
//!
//! async fn list_events(uri: Uri) -> impl IntoResponse {
//!     let request = RequestContext::parse(&uri.to_string())?;
//!
//!     // The store fetched one page and knows whether more rows exist.
//!     let (events, has_more) = store.page_for(&request);
//!
//!     let page = ResultPage::new(&events, has_more);
//!     let links = CursorLinks::identified().links(&request, &page);
//!
//!     OkWithLinks::new(events, links)
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                      LinkStrategy                         │
//! │  links(request, page) → Vec<ResourceLink>                 │
//! └───────────────────────────────────────────────────────────┘
//!                │                 │                 │
//!         ┌──────┴─────┐   ┌───────┴──────┐   ┌──────┴─────┐
//!         │ PageLinks  │   │ CursorLinks  │   │  NoLinks   │
//!         │ ?page=N    │   │ ?before= /   │   │            │
//!         │            │   │ ?after=      │   │            │
//!         └────────────┘   └──────────────┘   └────────────┘
//!                │                 │
//!         ┌──────┴─────────────────┴──────┐
//!         │ QueryMap · RequestContext     │   parse → transform → serialize
//!         └───────────────────────────────┘
//!                         │
//!         ┌───────────────┴───────────────┐
//!         │ OkWithLinks (axum)            │   repeated `Link` headers
//!         └───────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Query-string model: parse, transform, serialize
pub mod query;

/// Entity identity accessors for cursor links
pub mod identity;

/// Navigation link construction
pub mod links;

/// Response boundary: attaching links as `Link` headers
pub mod response;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use identity::{HasId, IdentityAccessor};
pub use links::{
    parse_link_header, CursorLinks, LinkRelation, LinkStrategy, NoLinks, PageLinks,
    RequestContext, ResourceLink, ResultPage,
};
pub use query::QueryMap;
pub use response::{append_link_headers, OkWithLinks};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
