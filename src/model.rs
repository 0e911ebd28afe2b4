//! Catalog entities shared across both content families.

use ahash::AHashSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a category row in the hosted database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u64);

/// Identifier of a tag row in the hosted database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagId(pub u64);

/// Identifier of a content item (product or article).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

/// A category as stored by the admin backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
}

/// A tag as stored by the admin backend.
///
/// Tags are many-to-many with content items; the association itself lives in
/// the content source (see `ContentSource::item_ids_for_tag`). Admins may
/// create tags on the fly by typing an unrecognized name, in which case the
/// slug is derived with [`crate::slug::slugify`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub slug: String,
}

impl Tag {
    /// Build a tag from a freshly typed name, deriving its slug.
    pub fn from_name(id: TagId, name: impl Into<String>) -> Self {
        let name = name.into();
        let slug = crate::slug::slugify(&name);
        Self { id, name, slug }
    }
}

/// The two content families of the storefront.
///
/// Products live under `/mundo-grimmiz`, articles under `/diario-grimmiz`.
/// The families are structurally parallel and share every algorithm in this
/// crate; they differ only in base path, sort vocabulary, and the
/// related-content tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Products,
    Articles,
}

/// Family-agnostic projection of a product or article.
///
/// This is the shape every listing and relevance computation works over.
/// Display-only fields (body, images, excerpts) stay with the page layer;
/// `price_cents` is `None` for articles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSummary {
    pub id: ItemId,
    pub title: String,
    pub slug: String,
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub tag_ids: AHashSet<TagId>,
    #[serde(default)]
    pub price_cents: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentSummary {
    /// Count of tags shared with another item.
    pub fn shared_tags(&self, other: &Self) -> usize {
        self.tag_ids.intersection(&other.tag_ids).count()
    }
}
