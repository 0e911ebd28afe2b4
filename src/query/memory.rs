//! In-memory reference implementation of [`ContentSource`].
//!
//! Backs the test suite and lets embedders run the catalog core without a live
//! backend, e.g. against a JSON snapshot exported from the admin. Items keep
//! their insertion order, which doubles as the deterministic "source order"
//! tie-break for product relevance.

use super::source::{ContentSource, Direction, Ordering, Selection, Slice, SortField};
use crate::error::SourceError;
use crate::model::{Category, ContentSummary, Family, ItemId, Tag, TagId};
use ahash::{AHashMap, AHashSet};
use anyhow::Context;
use serde::Deserialize;

/// An immutable-after-construction catalog held in memory.
#[derive(Debug, Default)]
pub struct MemorySource {
    categories: AHashMap<Family, Vec<Category>>,
    tags: AHashMap<Family, Vec<Tag>>,
    tag_items: AHashMap<(Family, TagId), Vec<ItemId>>,
    items: AHashMap<Family, Vec<ContentSummary>>,
}

/// On-disk snapshot shape: one block per family.
#[derive(Debug, Default, Deserialize)]
struct FamilySnapshot {
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    tags: Vec<Tag>,
    /// Join relation rows, `(tag_id, item_id)`.
    #[serde(default)]
    tag_items: Vec<(TagId, ItemId)>,
    #[serde(default)]
    items: Vec<ContentSummary>,
}

#[derive(Debug, Default, Deserialize)]
struct Snapshot {
    #[serde(default)]
    products: FamilySnapshot,
    #[serde(default)]
    articles: FamilySnapshot,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog snapshot from JSON.
    pub fn from_json(raw: &str) -> crate::error::Result<Self> {
        let snapshot: Snapshot =
            serde_json::from_str(raw).context("Failed to parse catalog snapshot")?;

        let mut source = Self::new();
        for (family, block) in [
            (Family::Products, snapshot.products),
            (Family::Articles, snapshot.articles),
        ] {
            for category in block.categories {
                source.insert_category(family, category);
            }
            for tag in block.tags {
                source.insert_tag(family, tag);
            }
            for (tag_id, item_id) in block.tag_items {
                source.associate_tag(family, tag_id, item_id);
            }
            for item in block.items {
                source.insert_item(family, item);
            }
        }

        tracing::info!(
            "Loaded catalog snapshot: {} products, {} articles",
            source.items.get(&Family::Products).map_or(0, Vec::len),
            source.items.get(&Family::Articles).map_or(0, Vec::len),
        );
        Ok(source)
    }

    pub fn insert_category(&mut self, family: Family, category: Category) {
        self.categories.entry(family).or_default().push(category);
    }

    pub fn insert_tag(&mut self, family: Family, tag: Tag) {
        self.tags.entry(family).or_default().push(tag);
    }

    /// Record one row of the tag join relation.
    pub fn associate_tag(&mut self, family: Family, tag: TagId, item: ItemId) {
        self.tag_items.entry((family, tag)).or_default().push(item);
    }

    /// Append a published item. Insertion order is the family's source order.
    ///
    /// The item's own `tag_ids` are mirrored into the join relation so callers
    /// building fixtures don't have to record every association twice.
    pub fn insert_item(&mut self, family: Family, item: ContentSummary) {
        for tag in &item.tag_ids {
            self.tag_items.entry((family, *tag)).or_default().push(item.id);
        }
        self.items.entry(family).or_default().push(item);
    }

    fn family_items(&self, family: Family) -> &[ContentSummary] {
        self.items.get(&family).map_or(&[], Vec::as_slice)
    }

    fn matching(&self, family: Family, selection: &Selection) -> Vec<ContentSummary> {
        let wanted_ids: Option<AHashSet<ItemId>> = selection
            .ids
            .as_ref()
            .map(|ids| ids.iter().copied().collect());

        self.family_items(family)
            .iter()
            .filter(|item| {
                selection
                    .category
                    .is_none_or(|category| item.category_id == Some(category))
            })
            .filter(|item| {
                wanted_ids
                    .as_ref()
                    .is_none_or(|wanted| wanted.contains(&item.id))
            })
            .cloned()
            .collect()
    }
}

fn apply_order(items: &mut [ContentSummary], order: Ordering) {
    // Stable sort: equal keys keep source order.
    items.sort_by(|a, b| {
        let ordering = match order.field {
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
            SortField::Price => a
                .price_cents
                .unwrap_or_default()
                .cmp(&b.price_cents.unwrap_or_default()),
        };
        match order.direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    });
}

impl ContentSource for MemorySource {
    async fn category_by_slug(
        &self,
        family: Family,
        slug: &str,
    ) -> Result<Option<Category>, SourceError> {
        Ok(self
            .categories
            .get(&family)
            .and_then(|categories| categories.iter().find(|c| c.slug == slug))
            .cloned())
    }

    async fn tag_by_slug(&self, family: Family, slug: &str) -> Result<Option<Tag>, SourceError> {
        Ok(self
            .tags
            .get(&family)
            .and_then(|tags| tags.iter().find(|t| t.slug == slug))
            .cloned())
    }

    async fn item_ids_for_tag(
        &self,
        family: Family,
        tag: TagId,
    ) -> Result<Vec<ItemId>, SourceError> {
        Ok(self.tag_items.get(&(family, tag)).cloned().unwrap_or_default())
    }

    async fn count(&self, family: Family, selection: &Selection) -> Result<u64, SourceError> {
        Ok(self.matching(family, selection).len() as u64)
    }

    async fn fetch(
        &self,
        family: Family,
        selection: &Selection,
        order: Ordering,
        slice: Slice,
    ) -> Result<Vec<ContentSummary>, SourceError> {
        let mut items = self.matching(family, selection);
        apply_order(&mut items, order);

        let offset = usize::try_from(slice.offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(slice.limit).unwrap_or(usize::MAX);
        Ok(items.into_iter().skip(offset).take(limit).collect())
    }

    async fn all_published(&self, family: Family) -> Result<Vec<ContentSummary>, SourceError> {
        Ok(self.family_items(family).to_vec())
    }
}
