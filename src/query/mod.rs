//! Catalog queries: the content-source seam and the filter-driven builder.

// Module declarations
pub(crate) mod builder;
pub(crate) mod memory;
pub(crate) mod source;

// Public re-exports (used via lib.rs)
pub use builder::{CatalogQuery, ContentPage, sort_order, total_pages};
pub use memory::MemorySource;
pub use source::{ContentSource, Direction, Ordering, Selection, Slice, SortField};
