//! Faceted listing filters and their URL path representation.
//!
//! One generic codec serves both content families; the family supplies its
//! base path and sort vocabulary. Filter state lives in URLs and nowhere else:
//! every navigation derives a fresh [`Filter`] from the request path.

// Module declarations
pub(crate) mod codec;
pub(crate) mod family;
pub(crate) mod legacy;

// Public re-exports (used via lib.rs)
pub use codec::{Filter, FilterCodec};
pub use family::FamilyConfig;
pub use legacy::canonical_path;
