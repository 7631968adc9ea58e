//! Link construction strategies
//!
//! Each strategy decides, from the incoming request's parameters and the
//! outgoing page, which of {previous, next} links are valid to emit and what
//! query string each must carry.

use super::types::{LinkRelation, RequestContext, ResourceLink, ResultPage};
use crate::identity::{HasId, IdentityAccessor};

/// Decides which navigation links a response carries.
pub trait LinkStrategy<T>: Send + Sync {
    /// Compute the navigation links for the current page.
    ///
    /// Returns at most two links, previous before next.
    fn links(&self, request: &RequestContext, page: &ResultPage<'_, T>) -> Vec<ResourceLink>;
}

// ============================================================================
// Page-number links
// ============================================================================

/// Page-number navigation (`?page=3`).
///
/// Previous and next links replace the page parameter with `page - 1` and
/// `page + 1`; the previous link is omitted on the first page and the next
/// link when no more results exist.
#[derive(Debug, Clone)]
pub struct PageLinks {
    /// Current page number, 1-based.
    pub page: u32,
    /// Query parameter name for the page number.
    pub page_param: String,
}

impl PageLinks {
    /// Strategy for the given current page, using the `page` parameter.
    pub fn new(page: u32) -> Self {
        Self {
            page: page.max(1),
            page_param: "page".to_string(),
        }
    }

    /// Rename the page parameter.
    #[must_use]
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.page_param = param.into();
        self
    }
}

impl<T> LinkStrategy<T> for PageLinks {
    fn links(&self, request: &RequestContext, page: &ResultPage<'_, T>) -> Vec<ResourceLink> {
        let include_previous = self.page > 1;
        let include_next = page.has_more();

        let previous_params = request
            .params()
            .with(self.page_param.as_str(), (self.page - 1).to_string());
        let next_params = request
            .params()
            .with(self.page_param.as_str(), (self.page + 1).to_string());

        let mut links = Vec::new();
        if include_previous {
            links.push(request.link_with(&previous_params, LinkRelation::Previous));
        }
        if include_next {
            links.push(request.link_with(&next_params, LinkRelation::Next));
        }
        links
    }
}

// ============================================================================
// Cursor links
// ============================================================================

/// Keyset navigation (`?before=A` / `?after=Z`).
///
/// Cursors are the identities of the current page's boundary entities, never
/// an incremented counter, so the links stay correct when rows are inserted
/// or deleted between requests. Without an identity accessor no links are
/// emitted.
#[derive(Debug)]
pub struct CursorLinks<T> {
    /// Query parameter name for the backward cursor.
    pub before_param: String,
    /// Query parameter name for the forward cursor.
    pub after_param: String,
    identity: Option<IdentityAccessor<T>>,
}

impl<T> CursorLinks<T> {
    /// Strategy with no identity accessor, using the `before`/`after`
    /// parameters.
    pub fn new() -> Self {
        Self {
            before_param: "before".to_string(),
            after_param: "after".to_string(),
            identity: None,
        }
    }

    /// Use the given identity accessor.
    #[must_use]
    pub fn with_identity(mut self, accessor: IdentityAccessor<T>) -> Self {
        self.identity = Some(accessor);
        self
    }

    /// Use a closure as the identity accessor.
    #[must_use]
    pub fn with_accessor<F>(self, accessor: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.with_identity(IdentityAccessor::new(accessor))
    }

    /// Rename the cursor parameters.
    #[must_use]
    pub fn with_params(mut self, before: impl Into<String>, after: impl Into<String>) -> Self {
        self.before_param = before.into();
        self.after_param = after.into();
        self
    }
}

impl<T: HasId> CursorLinks<T> {
    /// Strategy with the entity type's own identity as the accessor.
    pub fn identified() -> Self {
        Self::new().with_identity(IdentityAccessor::from_has_id())
    }
}

impl<T> Default for CursorLinks<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkStrategy<T> for CursorLinks<T> {
    fn links(&self, request: &RequestContext, page: &ResultPage<'_, T>) -> Vec<ResourceLink> {
        let Some(identity) = &self.identity else {
            tracing::debug!("cursor links skipped: no identity accessor");
            return Vec::new();
        };

        let first_id = page
            .first()
            .map(|entity| identity.id_of(entity))
            .unwrap_or_default();
        let last_id = page
            .last()
            .map(|entity| identity.id_of(entity))
            .unwrap_or_default();

        // The incoming cursors describe where this page came from, not where
        // the new links go.
        let mut working = request.params().clone();
        let had_before = working.remove(&self.before_param);
        let had_after = working.remove(&self.after_param);

        let previous_params = working.with(self.before_param.as_str(), first_id);
        let mut next_params = working.with(self.after_param.as_str(), last_id);

        let mut include_previous = true;
        let mut include_next = page.has_more();

        if (had_before || had_after) && page.is_empty() {
            // Paged past the boundary of the available data. A bare forward
            // link routes the client back to where data starts; a backward
            // link would only carry an empty cursor into the void.
            include_previous = false;
            include_next = true;
            next_params.remove(&self.after_param);
        } else if !had_before && !had_after {
            // Initial, unparameterized page: nothing before it.
            include_previous = false;
        }

        let mut links = Vec::new();
        if include_previous {
            links.push(request.link_with(&previous_params, LinkRelation::Previous));
        }
        if include_next {
            links.push(request.link_with(&next_params, LinkRelation::Next));
        }
        links
    }
}

// ============================================================================
// No links
// ============================================================================

/// No navigation links.
///
/// Lets non-paginated endpoints flow through the same response wrapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLinks;

impl<T> LinkStrategy<T> for NoLinks {
    fn links(&self, _request: &RequestContext, _page: &ResultPage<'_, T>) -> Vec<ResourceLink> {
        Vec::new()
    }
}
