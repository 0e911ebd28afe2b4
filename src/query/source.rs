//! The capability seam between the catalog core and the hosted database.
//!
//! The query builder is written against [`ContentSource`], not a concrete
//! client: anything that can look up slugs, filter by equality/membership,
//! order, slice, and count can serve listings. Every call is a single-shot
//! request/response; the core never retries, batches, or caches.

use crate::error::SourceError;
use crate::model::{Category, ContentSummary, Family, ItemId, Tag, TagId};

/// Field a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    UpdatedAt,
    Title,
    Price,
}

/// Ordering direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// A resolved field + direction pair, produced by the family sort table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ordering {
    pub field: SortField,
    pub direction: Direction,
}

/// Range pagination: skip `offset` rows, return at most `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub offset: u64,
    pub limit: u64,
}

/// Resolved predicates for a listing query.
///
/// `ids: None` leaves membership unconstrained; `ids: Some(vec![])` must match
/// nothing. The builder uses the latter for a tag that exists but has no
/// associated items, which is a real, deliberately empty result rather than a
/// dropped filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub category: Option<crate::model::CategoryId>,
    pub ids: Option<Vec<ItemId>>,
}

impl Selection {
    /// True when the selection can never match any item.
    pub fn is_vacuous(&self) -> bool {
        self.ids.as_ref().is_some_and(Vec::is_empty)
    }
}

/// A listable content backend for one or both families.
///
/// Implementations are expected to answer from published content only; drafts
/// never reach listings or relevance pools. Errors must be surfaced as
/// [`SourceError`] values — the core propagates them untouched.
pub trait ContentSource {
    /// Look up a category by slug. Unknown slugs are `Ok(None)`, not errors.
    async fn category_by_slug(
        &self,
        family: Family,
        slug: &str,
    ) -> Result<Option<Category>, SourceError>;

    /// Look up a tag by slug. Unknown slugs are `Ok(None)`, not errors.
    async fn tag_by_slug(&self, family: Family, slug: &str) -> Result<Option<Tag>, SourceError>;

    /// Item ids associated with a tag (the join relation). May be empty.
    async fn item_ids_for_tag(
        &self,
        family: Family,
        tag: TagId,
    ) -> Result<Vec<ItemId>, SourceError>;

    /// Exact count of items matching the selection.
    async fn count(&self, family: Family, selection: &Selection) -> Result<u64, SourceError>;

    /// Ordered, sliced fetch of items matching the selection.
    async fn fetch(
        &self,
        family: Family,
        selection: &Selection,
        order: Ordering,
        slice: Slice,
    ) -> Result<Vec<ContentSummary>, SourceError>;

    /// Every published item of the family, in the backend's natural order.
    ///
    /// Consumed read-only by the relevance scorer as its candidate pool.
    async fn all_published(&self, family: Family) -> Result<Vec<ContentSummary>, SourceError>;
}
