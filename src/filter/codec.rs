//! Bidirectional mapping between filter state and SEO path segments.
//!
//! Listing URLs carry their whole filter state as hierarchical path segments
//! instead of a query string: `/mundo-grimmiz/figuras-de-resina/etiqueta-timo/
//! pagina-3/orden-precio-desc/`. Encoding emits segments in a fixed order
//! (category, tag, page, sort) that outbound links depend on; decoding accepts
//! the segments in any order. That asymmetry is deliberate and load-bearing.

use crate::model::Family;

const TAG_PREFIX: &str = "etiqueta-";
const PAGE_PREFIX: &str = "pagina-";
const SORT_PREFIX: &str = "orden-";

/// Decoded filter state of a listing page.
///
/// Every field is optional; absence means "default". `page` is only
/// materialized in a URL when greater than 1, `sort` only when it differs from
/// the family default, so a URL built from a filter and parsed back yields the
/// same filter once [`Filter::normalized`] has collapsed defaults to absence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub category: Option<String>,
    pub tag: Option<String>,
    pub page: Option<u32>,
    pub sort: Option<String>,
}

impl Filter {
    /// Effective page number; unset and out-of-range values mean page 1.
    pub fn page_number(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    /// True when no facet is active.
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.tag.is_none() && self.page.is_none() && self.sort.is_none()
    }

    /// Collapse default-valued fields to absence.
    ///
    /// An explicit page 1 and the family's default sort never appear in
    /// encoded URLs, so they are equivalent to the fields being unset.
    pub fn normalized(mut self, family: Family) -> Self {
        if self.page.is_some_and(|page| page <= 1) {
            self.page = None;
        }
        if self
            .sort
            .as_deref()
            .is_some_and(|sort| sort == family.config().default_sort)
        {
            self.sort = None;
        }
        self
    }

    /// Filter for the same facets on another page. Used by pagination links.
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: (page > 1).then_some(page),
            ..self.clone()
        }
    }
}

/// Encoder/decoder for one family's listing URLs.
#[derive(Debug, Clone, Copy)]
pub struct FilterCodec {
    family: Family,
}

impl FilterCodec {
    pub const fn new(family: Family) -> Self {
        Self { family }
    }

    pub const fn family(self) -> Family {
        self.family
    }

    /// Encode a filter into a canonical path.
    ///
    /// Segment order is fixed: category, tag, page, sort. A page of 1 and the
    /// family's default sort are suppressed. The result always ends with `/`.
    pub fn encode(self, filter: &Filter) -> String {
        let config = self.family.config();
        let mut segments: Vec<String> = Vec::with_capacity(4);

        if let Some(category) = &filter.category {
            segments.push(category.clone());
        }
        if let Some(tag) = &filter.tag {
            segments.push(format!("{TAG_PREFIX}{tag}"));
        }
        if let Some(page) = filter.page
            && page > 1
        {
            segments.push(format!("{PAGE_PREFIX}{page}"));
        }
        if let Some(sort) = &filter.sort
            && sort != config.default_sort
        {
            segments.push(format!("{SORT_PREFIX}{sort}"));
        }

        if segments.is_empty() {
            format!("{}/", config.base_path)
        } else {
            format!("{}/{}/", config.base_path, segments.join("/"))
        }
    }

    /// Decode path segments into a filter.
    ///
    /// Segments may arrive in any order. Prefixed segments assign their slot
    /// (last occurrence wins); the first unprefixed segment takes the single
    /// category slot and later unprefixed segments are ignored. A `pagina-`
    /// segment whose number does not parse is dropped silently rather than
    /// failing the whole URL.
    pub fn decode<'a, I>(self, segments: I) -> Filter
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut filter = Filter::default();

        for segment in segments {
            if segment.is_empty() {
                continue;
            }

            if let Some(tag) = segment.strip_prefix(TAG_PREFIX) {
                filter.tag = Some(tag.to_string());
            } else if let Some(page) = segment.strip_prefix(PAGE_PREFIX) {
                match page.parse::<u32>() {
                    Ok(page) => filter.page = Some(page),
                    Err(_) => {
                        tracing::debug!("dropping non-numeric page segment '{}'", segment);
                    }
                }
            } else if let Some(sort) = segment.strip_prefix(SORT_PREFIX) {
                filter.sort = Some(sort.to_string());
            } else if filter.category.is_none() {
                filter.category = Some(segment.to_string());
            } else {
                // Exactly one category slot; extra unprefixed segments are noise.
                tracing::debug!("ignoring extra unprefixed segment '{}'", segment);
            }
        }

        filter
    }

    /// Decode a full request path.
    ///
    /// Returns `None` when the path does not belong to this family's base
    /// path. Tolerates a missing trailing slash and repeated separators.
    pub fn parse_path(self, path: &str) -> Option<Filter> {
        let config = self.family.config();
        let rest = path.strip_prefix(config.base_path)?;
        if !rest.is_empty() && !rest.starts_with('/') {
            return None;
        }
        Some(self.decode(rest.split('/')))
    }
}
