//! Turning a decoded filter into a concrete catalog fetch.

use super::source::{ContentSource, Direction, Ordering, Selection, Slice, SortField};
use crate::error::SourceError;
use crate::filter::Filter;
use crate::model::{ContentSummary, Family};

/// One page of catalog results plus the numbers the presenter needs.
#[derive(Debug, Clone)]
pub struct ContentPage {
    pub items: Vec<ContentSummary>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

/// Map a sort slug to its field + direction via the family's fixed table.
///
/// Absent and unrecognized slugs fall back to the family default, so a stale
/// `orden-` segment degrades to the default listing instead of an error.
pub fn sort_order(family: Family, slug: Option<&str>) -> Ordering {
    let table: &[(&str, Ordering)] = match family {
        Family::Products => &[
            ("recientes", Ordering { field: SortField::CreatedAt, direction: Direction::Descending }),
            ("precio-asc", Ordering { field: SortField::Price, direction: Direction::Ascending }),
            ("precio-desc", Ordering { field: SortField::Price, direction: Direction::Descending }),
        ],
        Family::Articles => &[
            ("recientes", Ordering { field: SortField::CreatedAt, direction: Direction::Descending }),
            ("antiguos", Ordering { field: SortField::CreatedAt, direction: Direction::Ascending }),
            ("actualizados", Ordering { field: SortField::UpdatedAt, direction: Direction::Descending }),
            ("titulo-asc", Ordering { field: SortField::Title, direction: Direction::Ascending }),
            ("titulo-desc", Ordering { field: SortField::Title, direction: Direction::Descending }),
        ],
    };

    let default_sort = family.config().default_sort;
    let wanted = slug.unwrap_or(default_sort);

    table
        .iter()
        .find(|(candidate, _)| *candidate == wanted)
        .or_else(|| {
            if wanted != default_sort {
                tracing::debug!("unrecognized sort '{}', falling back to default", wanted);
            }
            table.iter().find(|(candidate, _)| *candidate == default_sort)
        })
        .map(|(_, order)| *order)
        .expect("family sort table contains its default")
}

/// Total page count for a result set: `ceil(total / page_size)`, minimum 1.
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    let page_size = u64::from(page_size.max(1));
    let pages = total.div_ceil(page_size).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// A filter bound to a family and page size, ready to run against a source.
#[derive(Debug, Clone)]
pub struct CatalogQuery {
    family: Family,
    filter: Filter,
    page_size: u32,
}

impl CatalogQuery {
    pub fn new(family: Family, filter: Filter, page_size: u32) -> Self {
        Self {
            family,
            filter,
            page_size: page_size.max(1),
        }
    }

    pub const fn family(&self) -> Family {
        self.family
    }

    pub const fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Resolve the filter's slugs into concrete predicates.
    ///
    /// An unknown category slug leaves the listing unfiltered; an unknown tag
    /// slug is likewise ignored. A tag that exists but has no associated items
    /// pins the selection to an empty id set, which matches nothing.
    pub async fn resolve_selection<S: ContentSource>(
        &self,
        source: &S,
    ) -> Result<Selection, SourceError> {
        let mut selection = Selection::default();

        if let Some(slug) = self.filter.category.as_deref() {
            match source.category_by_slug(self.family, slug).await? {
                Some(category) => selection.category = Some(category.id),
                None => {
                    tracing::debug!("unknown category slug '{}', listing unfiltered", slug);
                }
            }
        }

        if let Some(slug) = self.filter.tag.as_deref() {
            match source.tag_by_slug(self.family, slug).await? {
                Some(tag) => {
                    selection.ids = Some(source.item_ids_for_tag(self.family, tag.id).await?);
                }
                None => {
                    tracing::debug!("unknown tag slug '{}', listing unfiltered", slug);
                }
            }
        }

        Ok(selection)
    }

    /// Execute the query: one count, one sliced fetch.
    pub async fn run<S: ContentSource>(&self, source: &S) -> Result<ContentPage, SourceError> {
        let selection = self.resolve_selection(source).await?;
        let order = sort_order(self.family, self.filter.sort.as_deref());

        let page = self.filter.page_number();
        let slice = Slice {
            offset: u64::from(page - 1) * u64::from(self.page_size),
            limit: u64::from(self.page_size),
        };

        let total = source.count(self.family, &selection).await?;
        let items = source.fetch(self.family, &selection, order, slice).await?;

        Ok(ContentPage {
            items,
            total,
            page,
            page_size: self.page_size,
            total_pages: total_pages(total, self.page_size),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case(Family::Products, None, SortField::CreatedAt, Direction::Descending)]
    #[case(Family::Products, Some("precio-asc"), SortField::Price, Direction::Ascending)]
    #[case(Family::Products, Some("precio-desc"), SortField::Price, Direction::Descending)]
    #[case(Family::Products, Some("titulo-asc"), SortField::CreatedAt, Direction::Descending)]
    #[case(Family::Articles, None, SortField::CreatedAt, Direction::Descending)]
    #[case(Family::Articles, Some("antiguos"), SortField::CreatedAt, Direction::Ascending)]
    #[case(Family::Articles, Some("actualizados"), SortField::UpdatedAt, Direction::Descending)]
    #[case(Family::Articles, Some("titulo-desc"), SortField::Title, Direction::Descending)]
    #[case(Family::Articles, Some("no-such-sort"), SortField::CreatedAt, Direction::Descending)]
    fn sort_table_with_default_fallback(
        #[case] family: Family,
        #[case] slug: Option<&str>,
        #[case] field: SortField,
        #[case] direction: Direction,
    ) {
        let order = sort_order(family, slug);
        check!(order.field == field);
        check!(order.direction == direction);
    }

    #[rstest]
    #[case(0, 12, 1)]
    #[case(1, 12, 1)]
    #[case(12, 12, 1)]
    #[case(13, 12, 2)]
    #[case(240, 12, 20)]
    #[case(241, 12, 21)]
    fn total_pages_is_ceiling_with_floor_of_one(
        #[case] total: u64,
        #[case] page_size: u32,
        #[case] expected: u32,
    ) {
        check!(total_pages(total, page_size) == expected);
    }
}
