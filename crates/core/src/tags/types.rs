//! Types for the tags module.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Canonical tag keys used for naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKey {
    Artist,
    Title,
    Album,
    Label,
    Year,
    TrackNumber,
}

impl TagKey {
    /// All canonical keys, in lookup order.
    pub const ALL: [TagKey; 6] = [
        TagKey::Artist,
        TagKey::Title,
        TagKey::Album,
        TagKey::Label,
        TagKey::Year,
        TagKey::TrackNumber,
    ];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Artist => "artist",
            Self::Title => "title",
            Self::Album => "album",
            Self::Label => "label",
            Self::Year => "year",
            Self::TrackNumber => "tracknumber",
        }
    }
}

/// Metadata read from one source file.
///
/// Absent keys are simply missing; values are trimmed and never empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagSet {
    values: BTreeMap<TagKey, String>,
}

impl TagSet {
    /// Returns the value for `key`, if tagged.
    pub fn get(&self, key: TagKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    /// Whether no key was found.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of keys present.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterates over present keys in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (TagKey, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl FromIterator<(TagKey, String)> for TagSet {
    /// Keeps the first non-empty value seen for each key.
    fn from_iter<I: IntoIterator<Item = (TagKey, String)>>(iter: I) -> Self {
        let mut values = BTreeMap::new();
        for (key, value) in iter {
            let value = value.trim();
            if !value.is_empty() {
                values.entry(key).or_insert_with(|| value.to_string());
            }
        }
        Self { values }
    }
}

/// Recognized source containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    /// FLAC with Vorbis comments.
    Flac,
    /// MPEG Layer III with ID3 tags.
    Mp3,
}

impl AudioFormat {
    /// Matches a file extension, ignoring case.
    pub fn from_extension(ext: &str) -> Option<Self> {
        if ext.eq_ignore_ascii_case("flac") {
            Some(Self::Flac)
        } else if ext.eq_ignore_ascii_case("mp3") {
            Some(Self::Mp3)
        } else {
            None
        }
    }

    /// Detects the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Lowercase extension.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Flac => "flac",
            Self::Mp3 => "mp3",
        }
    }
}

/// A source file selected for conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudioFile {
    path: PathBuf,
    format: AudioFormat,
    stem: String,
}

impl AudioFile {
    /// Builds an audio file from a path with a recognized extension.
    ///
    /// Relative paths are made absolute against the working directory.
    pub fn from_path(path: &Path) -> Option<Self> {
        let format = AudioFormat::from_path(path)?;
        let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Some(Self { path, format, stem })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> AudioFormat {
        self.format
    }

    /// File name without extension.
    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// File name for display.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_extension_ignores_case() {
        assert_eq!(AudioFormat::from_extension("FLAC"), Some(AudioFormat::Flac));
        assert_eq!(AudioFormat::from_extension("Mp3"), Some(AudioFormat::Mp3));
        assert_eq!(AudioFormat::from_extension("wav"), None);
        assert_eq!(
            AudioFormat::from_path(Path::new("/a/b/Song.FlAc")),
            Some(AudioFormat::Flac)
        );
        assert_eq!(AudioFormat::from_path(Path::new("/a/b/noext")), None);
    }

    #[test]
    fn test_audio_file_derives_stem() {
        let file = AudioFile::from_path(Path::new("/music/01 Intro.MP3")).unwrap();
        assert_eq!(file.stem(), "01 Intro");
        assert_eq!(file.format(), AudioFormat::Mp3);
        assert_eq!(file.file_name(), "01 Intro.MP3");
        assert!(file.path().is_absolute());
        assert!(AudioFile::from_path(Path::new("/music/cover.jpg")).is_none());
    }

    #[test]
    fn test_tag_set_keeps_first_non_empty_trimmed_value() {
        let tags: TagSet = vec![
            (TagKey::Artist, "   ".to_string()),
            (TagKey::Artist, "  Foo ".to_string()),
            (TagKey::Artist, "Other".to_string()),
        ]
        .into_iter()
        .collect();

        assert_eq!(tags.get(TagKey::Artist), Some("Foo"));
        assert_eq!(tags.get(TagKey::Title), None);
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_tag_set_serializes_canonical_keys() {
        let tags: TagSet = vec![(TagKey::TrackNumber, "3".to_string())].into_iter().collect();
        let json = serde_json::to_string(&tags).unwrap();
        assert_eq!(json, r#"{"tracknumber":"3"}"#);
    }
}
