//! Tag reader backed by the `lofty` crate.

use std::path::Path;

use lofty::file::{FileType, TaggedFileExt};
use lofty::probe::Probe;
use lofty::tag::{ItemKey, Tag};
use tracing::debug;

use super::aliases::resolve_tags;
use super::error::TagError;
use super::traits::TagReader;
use super::types::{AudioFormat, TagSet};

/// Reads Vorbis comments from FLAC and ID3 tags from MP3.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoftyTagReader;

impl LoftyTagReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads every text field as `(field name, value)`, primary tag first.
    ///
    /// Field names are the container's own (`ARTIST`, `TPE1`, ...).
    pub fn read_entries(&self, path: &Path) -> Result<Vec<(String, String)>, TagError> {
        let format = AudioFormat::from_path(path).ok_or_else(|| TagError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

        let tagged = Probe::open(path)?
            .set_file_type(file_type(format))
            .read()?;

        let primary = tagged.primary_tag();
        let primary_type = primary.map(Tag::tag_type);
        let ordered = primary.into_iter().chain(
            tagged
                .tags()
                .iter()
                .filter(|t| Some(t.tag_type()) != primary_type),
        );

        let mut entries = Vec::new();
        for tag in ordered {
            for item in tag.items() {
                let Some(value) = item.value().text() else {
                    continue;
                };
                let name = item
                    .key()
                    .map_key(tag.tag_type(), true)
                    .or_else(|| generic_name(item.key()));
                if let Some(name) = name {
                    entries.push((name.to_string(), value.to_string()));
                }
            }
        }

        Ok(entries)
    }
}

impl TagReader for LoftyTagReader {
    fn extract(&self, path: &Path) -> TagSet {
        let Some(format) = AudioFormat::from_path(path) else {
            return TagSet::default();
        };

        match self.read_entries(path) {
            Ok(entries) => resolve_tags(format, &entries),
            Err(e) => {
                debug!(file = ?path, error = %e, "Tag read failed, using original filename");
                TagSet::default()
            }
        }
    }
}

fn file_type(format: AudioFormat) -> FileType {
    match format {
        AudioFormat::Flac => FileType::Flac,
        AudioFormat::Mp3 => FileType::Mpeg,
    }
}

/// Name for keys the tag format cannot map back to a field (e.g. ID3v1).
fn generic_name(key: &ItemKey) -> Option<&'static str> {
    match key {
        ItemKey::TrackArtist => Some("ARTIST"),
        ItemKey::TrackTitle => Some("TITLE"),
        ItemKey::AlbumTitle => Some("ALBUM"),
        ItemKey::Label => Some("LABEL"),
        ItemKey::Publisher => Some("ORGANIZATION"),
        ItemKey::RecordingDate => Some("DATE"),
        ItemKey::TrackNumber => Some("TRACKNUMBER"),
        _ => None,
    }
}
