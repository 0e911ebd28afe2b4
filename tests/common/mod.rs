//! Shared test fixtures for integration tests.
//!
//! `sample_catalog` builds an in-memory storefront with enough products to
//! paginate and enough tag/category overlap to exercise relevance ranking:
//!
//! - Products: 15 items across `figuras-de-resina` (id 1) and `laminas`
//!   (id 2), tagged with `timo` (5), `disney` (6), `edicion-limitada` (7).
//!   The `descatalogado` tag (8) exists but has no associated items.
//! - Articles: 5 posts across `noticias` (10) and `tutoriales` (11) sharing
//!   the product tags.

use ahash::AHashSet;
use chrono::{DateTime, TimeZone, Utc};
use grimmiz_catalog::{
    Category, CategoryId, ContentSummary, Family, ItemId, MemorySource, Tag, TagId,
};
use rstest::fixture;

pub fn day(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, day, 12, 0, 0).unwrap()
}

pub fn product(
    id: u64,
    title: &str,
    category: u64,
    tags: &[u64],
    price_cents: i64,
    created_day: u32,
) -> ContentSummary {
    ContentSummary {
        id: ItemId(id),
        title: title.to_string(),
        slug: grimmiz_catalog::slug::slugify(title),
        category_id: Some(CategoryId(category)),
        tag_ids: tags.iter().copied().map(TagId).collect(),
        price_cents: Some(price_cents),
        created_at: day(created_day),
        updated_at: day(created_day),
    }
}

pub fn article(
    id: u64,
    title: &str,
    category: u64,
    tags: &[u64],
    created_day: u32,
    updated_day: u32,
) -> ContentSummary {
    ContentSummary {
        id: ItemId(id),
        title: title.to_string(),
        slug: grimmiz_catalog::slug::slugify(title),
        category_id: Some(CategoryId(category)),
        tag_ids: tags.iter().copied().map(TagId).collect(),
        price_cents: None,
        created_at: day(created_day),
        updated_at: day(updated_day),
    }
}

/// An article with no category, for scoring edge cases.
#[allow(dead_code)] // Used in related_test.rs
pub fn uncategorized_article(id: u64, title: &str, tags: &[u64]) -> ContentSummary {
    ContentSummary {
        category_id: None,
        ..article(id, title, 0, tags, 1, 1)
    }
}

#[fixture]
pub fn sample_catalog() -> MemorySource {
    let mut source = MemorySource::new();

    for (id, name, slug) in [
        (1, "Figuras de Resina", "figuras-de-resina"),
        (2, "Láminas", "laminas"),
    ] {
        source.insert_category(
            Family::Products,
            Category {
                id: CategoryId(id),
                name: name.to_string(),
                slug: slug.to_string(),
            },
        );
    }

    for (id, name) in [
        (5, "Timo"),
        (6, "Disney"),
        (7, "Edición Limitada"),
        (8, "Descatalogado"),
    ] {
        source.insert_tag(Family::Products, Tag::from_name(TagId(id), name));
    }

    // Twelve resin figures, then three prints. Prices deliberately do not
    // follow the id order so price sorts are observable.
    for id in 1..=12u64 {
        let tags: &[u64] = match id {
            1 | 2 | 3 => &[5],
            4 | 5 => &[5, 6],
            6 => &[6, 7],
            _ => &[],
        };
        let price = 2000 + i64::try_from((id * 7) % 12).unwrap() * 500;
        let title = format!("Figura {id}");
        source.insert_item(
            Family::Products,
            product(id, &title, 1, tags, price, u32::try_from(id).unwrap()),
        );
    }
    for id in 13..=15u64 {
        let title = format!("Lámina {id}");
        source.insert_item(
            Family::Products,
            product(id, &title, 2, &[6], 1500, u32::try_from(id).unwrap()),
        );
    }

    for (id, name, slug) in [(10, "Noticias", "noticias"), (11, "Tutoriales", "tutoriales")] {
        source.insert_category(
            Family::Articles,
            Category {
                id: CategoryId(id),
                name: name.to_string(),
                slug: slug.to_string(),
            },
        );
    }
    for (id, name) in [(5, "Timo"), (6, "Disney")] {
        source.insert_tag(Family::Articles, Tag::from_name(TagId(id), name));
    }

    source.insert_item(
        Family::Articles,
        article(101, "Novedades de junio", 10, &[5], 1, 2),
    );
    source.insert_item(
        Family::Articles,
        article(102, "Cómo pintar resina", 11, &[5, 6], 3, 9),
    );
    source.insert_item(
        Family::Articles,
        article(103, "Historia de Timo", 10, &[5], 5, 5),
    );
    source.insert_item(
        Family::Articles,
        article(104, "Guía de compras", 11, &[], 7, 7),
    );
    source.insert_item(
        Family::Articles,
        article(105, "Entrevista al taller", 10, &[6], 9, 3),
    );

    source
}

/// Ids of a page's items, for terse assertions.
pub fn ids(items: &[ContentSummary]) -> Vec<u64> {
    items.iter().map(|item| item.id.0).collect()
}

/// Tag ids as a set, for building references inline.
#[allow(dead_code)] // Used in related_test.rs
pub fn tag_set(tags: &[u64]) -> AHashSet<TagId> {
    tags.iter().copied().map(TagId).collect()
}
