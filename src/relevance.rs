//! Related-content ranking for detail pages.
//!
//! A simple weighted scheme, not a generic similarity metric: sharing the
//! reference's category is worth ten points, each shared tag one. The 10:1
//! ratio and the cap of four results are fixed design constants.

use crate::error::SourceError;
use crate::model::{ContentSummary, Family};
use crate::query::ContentSource;

/// Points for sharing the reference item's category.
pub const CATEGORY_WEIGHT: u32 = 10;
/// Points per tag shared with the reference item.
pub const TAG_WEIGHT: u32 = 1;
/// Maximum number of related items shown on a detail page.
pub const RELATED_LIMIT: usize = 4;

/// Relevance of `candidate` with respect to `reference`.
///
/// Zero means "unrelated": no shared category and no shared tags.
pub fn relevance_score(reference: &ContentSummary, candidate: &ContentSummary) -> u32 {
    let mut score = 0;

    if reference.category_id.is_some() && candidate.category_id == reference.category_id {
        score += CATEGORY_WEIGHT;
    }

    score += TAG_WEIGHT * u32::try_from(reference.shared_tags(candidate)).unwrap_or(u32::MAX);
    score
}

/// Rank a candidate pool against a reference item.
///
/// The reference itself and every zero-scoring candidate are excluded, no
/// matter how few candidates remain. Ordering is score descending; ties break
/// by most-recently-updated-first for articles and by candidate order (the
/// source fetch order) for products. At most [`RELATED_LIMIT`] items return.
pub fn related(
    family: Family,
    reference: &ContentSummary,
    candidates: Vec<ContentSummary>,
) -> Vec<ContentSummary> {
    let mut scored: Vec<(u32, ContentSummary)> = candidates
        .into_iter()
        .filter(|candidate| candidate.id != reference.id)
        .map(|candidate| (relevance_score(reference, &candidate), candidate))
        .filter(|(score, _)| *score > 0)
        .collect();

    match family {
        // Stable sort on score alone keeps source order within ties.
        Family::Products => scored.sort_by(|(a, _), (b, _)| b.cmp(a)),
        Family::Articles => scored.sort_by(|(score_a, a), (score_b, b)| {
            score_b
                .cmp(score_a)
                .then_with(|| b.updated_at.cmp(&a.updated_at))
        }),
    }

    scored
        .into_iter()
        .take(RELATED_LIMIT)
        .map(|(_, candidate)| candidate)
        .collect()
}

/// Fetch the family's published pool and rank it against `reference`.
///
/// The pool is re-fetched on every call; nothing is cached between requests.
/// Source failures propagate untouched.
pub async fn related_from_source<S: ContentSource>(
    source: &S,
    family: Family,
    reference: &ContentSummary,
) -> Result<Vec<ContentSummary>, SourceError> {
    let pool = source.all_published(family).await?;
    Ok(related(family, reference, pool))
}
