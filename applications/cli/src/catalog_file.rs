//! Catalog text file loading
//!
//! One video per line, fields separated by `|`:
//!
//! ```text
//! Amazing Cats | amazing_cats_video_id | #cat , #animal
//! Video about nothing | nothing_video_id |
//! ```
//!
//! The tag field is optional and comma-separated. Blank lines are skipped.

use crate::error::{CliError, Result};
use reel_core::{MemoryCatalog, Video};
use std::path::Path;

/// Read and parse a catalog file
pub fn load_catalog(path: &Path) -> Result<MemoryCatalog> {
    let contents = std::fs::read_to_string(path)?;
    let catalog = parse_catalog(&contents)?;
    tracing::info!(path = %path.display(), videos = catalog.len(), "Catalog loaded");
    Ok(catalog)
}

/// Parse catalog text
pub fn parse_catalog(contents: &str) -> Result<MemoryCatalog> {
    let mut catalog = MemoryCatalog::new();

    for (index, raw) in contents.lines().enumerate() {
        let line = index + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let video = parse_line(raw).map_err(|message| CliError::CatalogParse { line, message })?;
        catalog.insert(video).map_err(|e| CliError::CatalogParse {
            line,
            message: e.to_string(),
        })?;
    }

    Ok(catalog)
}

fn parse_line(raw: &str) -> std::result::Result<Video, String> {
    let mut fields = raw.split('|').map(str::trim);

    let title = fields.next().filter(|t| !t.is_empty());
    let id = fields.next().filter(|i| !i.is_empty());
    let (Some(title), Some(id)) = (title, id) else {
        return Err("expected `title | id | tags`".to_string());
    };

    let tags: Vec<&str> = fields
        .next()
        .map(|tags| {
            tags.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect()
        })
        .unwrap_or_default();

    Ok(Video::new(id, title, tags))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reel_core::{VideoCatalog, VideoId};
    use std::io::Write;

    const SAMPLE: &str = "\
Funny Dogs | funny_dogs_video_id |  #dog , #animal
Amazing Cats | amazing_cats_video_id |  #cat , #animal

Video about nothing | nothing_video_id |
Life at Google | life_at_google_video_id
";

    #[test]
    fn parses_titles_ids_and_tags() {
        let catalog = parse_catalog(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 4);

        let cats = catalog.get(&VideoId::new("amazing_cats_video_id")).unwrap();
        assert_eq!(cats.title, "Amazing Cats");
        assert_eq!(cats.tags, vec!["#cat", "#animal"]);
    }

    #[test]
    fn tag_field_is_optional() {
        let catalog = parse_catalog(SAMPLE).unwrap();
        assert!(catalog
            .get(&VideoId::new("nothing_video_id"))
            .unwrap()
            .tags
            .is_empty());
        assert!(catalog
            .get(&VideoId::new("life_at_google_video_id"))
            .unwrap()
            .tags
            .is_empty());
    }

    #[test]
    fn missing_id_reports_line_number() {
        let err = parse_catalog("Good | good_id | #a\nBroken line\n").unwrap_err();
        assert!(matches!(err, CliError::CatalogParse { line: 2, .. }));
    }

    #[test]
    fn duplicate_id_reports_line_number() {
        let err = parse_catalog("A | same | #a\nB | same | #b\n").unwrap_err();
        assert!(matches!(err, CliError::CatalogParse { line: 2, .. }));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", SAMPLE).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog(&dir.path().join("videos.txt")).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
