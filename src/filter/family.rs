//! Per-family routing configuration for the filter codec.
//!
//! Products and articles share one codec algorithm; the family only supplies
//! the base path, the sort vocabulary, and which sort slug is the default.

use crate::model::Family;

/// Static routing configuration for one content family.
#[derive(Debug, Clone, Copy)]
pub struct FamilyConfig {
    /// Fixed base path, no trailing slash (`/mundo-grimmiz`).
    pub base_path: &'static str,
    /// Sort slug that is applied when none is given; never materialized in URLs.
    pub default_sort: &'static str,
    /// Every sort slug this family's listing pages accept.
    pub sort_slugs: &'static [&'static str],
}

static PRODUCTS: FamilyConfig = FamilyConfig {
    base_path: "/mundo-grimmiz",
    default_sort: "recientes",
    sort_slugs: &["recientes", "precio-asc", "precio-desc"],
};

static ARTICLES: FamilyConfig = FamilyConfig {
    base_path: "/diario-grimmiz",
    default_sort: "recientes",
    sort_slugs: &["recientes", "antiguos", "actualizados", "titulo-asc", "titulo-desc"],
};

impl Family {
    /// Routing configuration for this family.
    pub const fn config(self) -> &'static FamilyConfig {
        match self {
            Self::Products => &PRODUCTS,
            Self::Articles => &ARTICLES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_paths_are_distinct_namespaces() {
        assert_eq!(Family::Products.config().base_path, "/mundo-grimmiz");
        assert_eq!(Family::Articles.config().base_path, "/diario-grimmiz");
    }

    #[test]
    fn default_sort_is_in_the_vocabulary() {
        for family in [Family::Products, Family::Articles] {
            let config = family.config();
            assert!(config.sort_slugs.contains(&config.default_sort));
        }
    }
}
