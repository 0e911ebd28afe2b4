//! Slug derivation and validation for URL-facing names.

use regex::Regex;
use std::sync::LazyLock;

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap());

/// Whether a string is already a well-formed slug (lowercase ascii segments
/// joined by single hyphens).
pub fn is_valid_slug(candidate: &str) -> bool {
    SLUG_RE.is_match(candidate)
}

/// Derive a URL slug from a human-typed name.
///
/// Lowercases, folds the Spanish diacritics the storefront's admins actually
/// type (á é í ó ú ü ñ), and collapses every other non-alphanumeric run into a
/// single hyphen:
///
/// - `Figuras de Resina` → `figuras-de-resina`
/// - `Año Nuevo  2024!` → `ano-nuevo-2024`
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for ch in name.chars() {
        let folded = match ch.to_lowercase().next().unwrap_or(ch) {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            other => other,
        };

        if folded.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(folded);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("Figuras de Resina", "figuras-de-resina")]
    #[case("Figuras de Resinä", "figuras-de-resina")]
    #[case("Año Nuevo  2024!", "ano-nuevo-2024")]
    #[case("  Timo & Compañía  ", "timo-compania")]
    #[case("ALREADY-SLUGGED", "already-slugged")]
    #[case("", "")]
    fn slugify_cases(#[case] input: &str, #[case] expected: &str) {
        check!(slugify(input) == expected);
    }

    #[rstest]
    #[case("figuras-de-resina", true)]
    #[case("pagina-3", true)]
    #[case("", false)]
    #[case("-leading", false)]
    #[case("trailing-", false)]
    #[case("double--hyphen", false)]
    #[case("Mayúscula", false)]
    fn slug_validation(#[case] input: &str, #[case] valid: bool) {
        check!(is_valid_slug(input) == valid);
    }

    #[test]
    fn slugify_output_is_valid_or_empty() {
        for name in ["Grimmiz!", "çanto", "100% resina", "___"] {
            let slug = slugify(name);
            check!(slug.is_empty() || is_valid_slug(&slug), "bad slug {slug:?} from {name:?}");
        }
    }
}
