//! Navigation link construction
//!
//! Supports: page-number links, keyset cursor links, no links
//!
//! # Overview
//!
//! A [`LinkStrategy`] takes the parsed incoming request and the outgoing
//! result page and produces the `previous`/`next` links the response should
//! carry. Strategies only swap pagination parameters; every other query
//! parameter of the original request survives into the emitted links.

mod strategies;
mod types;

pub use strategies::{CursorLinks, LinkStrategy, NoLinks, PageLinks};
pub use types::{
    parse_link_header, LinkRelation, RequestContext, ResourceLink, ResultPage,
};
