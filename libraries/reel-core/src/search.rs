//! Catalog search
//!
//! Case-insensitive substring search by title or tag. Flagged videos never
//! appear in results; results are sorted by title.

use crate::catalog::VideoCatalog;
use crate::types::Video;

/// Search videos whose title contains `term`
pub fn search_title<'a, C: VideoCatalog + ?Sized>(catalog: &'a C, term: &str) -> Vec<&'a Video> {
    collect_sorted(catalog, |video| video.title_contains(term))
}

/// Search videos with at least one tag containing `term`
pub fn search_tag<'a, C: VideoCatalog + ?Sized>(catalog: &'a C, term: &str) -> Vec<&'a Video> {
    collect_sorted(catalog, |video| video.has_tag_matching(term))
}

fn collect_sorted<'a, C, F>(catalog: &'a C, matches: F) -> Vec<&'a Video>
where
    C: VideoCatalog + ?Sized,
    F: Fn(&Video) -> bool,
{
    let mut results: Vec<&Video> = catalog
        .all()
        .into_iter()
        .filter(|video| !video.is_flagged() && matches(video))
        .collect();
    results.sort_by(|a, b| a.title.cmp(&b.title));
    results
}
