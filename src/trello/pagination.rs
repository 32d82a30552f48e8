//! Cursor state for paging through card actions.
//!
//! Trello pages actions newest-first. Each request carries a `limit` and,
//! after the first page, a `before` cursor holding the id of the oldest action
//! already received. A page shorter than the limit is the last one.

/// Largest page size Trello accepts for action listings.
pub const MAX_ACTIONS_PER_PAGE: u16 = 1000;

/// Parameters for one page of card actions.
///
/// # Example
///
/// ```
/// use trello_export::trello::pagination::ActionPageRequest;
///
/// let first = ActionPageRequest::first(2);
/// let second = first.next(2, Some("a2")).expect("full page has a successor");
/// assert_eq!(second.before(), Some("a2"));
/// assert!(second.next(1, Some("a3")).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionPageRequest {
    limit: u16,
    before: Option<String>,
}

impl ActionPageRequest {
    /// Request for the newest page. A zero limit is raised to one.
    #[must_use]
    pub const fn first(limit: u16) -> Self {
        let clamped = if limit == 0 {
            1
        } else if limit > MAX_ACTIONS_PER_PAGE {
            MAX_ACTIONS_PER_PAGE
        } else {
            limit
        };
        Self {
            limit: clamped,
            before: None,
        }
    }

    /// Page size sent as `limit`.
    #[must_use]
    pub const fn limit(&self) -> u16 {
        self.limit
    }

    /// Cursor sent as `before`, absent on the first page.
    #[must_use]
    pub fn before(&self) -> Option<&str> {
        self.before.as_deref()
    }

    /// Builds the request for the following page.
    ///
    /// `received` is the number of actions on the page just fetched and
    /// `oldest_id` the id of its last entry. Returns `None` when that page was
    /// short (or empty), meaning there is nothing further to fetch.
    #[must_use]
    pub fn next(&self, received: usize, oldest_id: Option<&str>) -> Option<Self> {
        if received < usize::from(self.limit) {
            return None;
        }
        oldest_id.map(|id| Self {
            limit: self.limit,
            before: Some(id.to_owned()),
        })
    }
}

impl Default for ActionPageRequest {
    fn default() -> Self {
        Self::first(MAX_ACTIONS_PER_PAGE)
    }
}
