//! Canonicalization of legacy query-string listings.
//!
//! Old storefront links carried filters as `?categoria=&etiqueta=&pagina=&orden=`.
//! The page boundary accepts those purely to issue a redirect to the canonical
//! path form; the codec itself never consumes query strings.

use super::codec::{Filter, FilterCodec};
use crate::model::Family;

/// Build the canonical redirect target for a legacy query string.
///
/// Returns `None` when no legacy filter key is present, so the caller can tell
/// "redirect" apart from "nothing to do". Repeated keys last-wins; a `pagina`
/// value that does not parse is dropped, exactly as the codec drops malformed
/// page segments.
pub fn canonical_path<'a, I>(family: Family, pairs: I) -> Option<String>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut filter = Filter::default();
    let mut recognized = false;

    for (key, value) in pairs {
        match key {
            "categoria" => {
                filter.category = Some(value.to_string());
                recognized = true;
            }
            "etiqueta" => {
                filter.tag = Some(value.to_string());
                recognized = true;
            }
            "pagina" => {
                recognized = true;
                match value.parse::<u32>() {
                    Ok(page) => filter.page = Some(page),
                    Err(_) => tracing::debug!("dropping non-numeric legacy page '{}'", value),
                }
            }
            "orden" => {
                filter.sort = Some(value.to_string());
                recognized = true;
            }
            _ => {}
        }
    }

    recognized.then(|| FilterCodec::new(family).encode(&filter))
}
