//! Catalog browsing core for the Grimmiz storefront.

pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod pagination;
pub mod query;
pub mod relevance;
pub mod slug;
pub mod tracing;

pub use config::CatalogConfig;
pub use error::{Result, SourceError};
pub use filter::{Filter, FilterCodec};
pub use model::{Category, CategoryId, ContentSummary, Family, ItemId, Tag, TagId};
pub use query::{CatalogQuery, ContentPage, ContentSource, MemorySource};
