//! Field-name aliases per container and their resolution into a [`TagSet`].

use super::types::{AudioFormat, TagKey, TagSet};

const FLAC_ARTIST: &[&str] = &["ARTIST", "TPE1"];
const FLAC_TITLE: &[&str] = &["TITLE", "TIT2"];
const FLAC_ALBUM: &[&str] = &["ALBUM", "TALB"];
const FLAC_LABEL: &[&str] = &["LABEL", "ORGANIZATION", "PUBLISHER", "TPUB"];
const FLAC_YEAR: &[&str] = &["YEAR", "DATE", "TDRC"];
const FLAC_TRACK: &[&str] = &["TRACKNUMBER", "TRACK", "TRCK"];

const MP3_ARTIST: &[&str] = &["TPE1", "ARTIST"];
const MP3_TITLE: &[&str] = &["TIT2", "TITLE"];
const MP3_ALBUM: &[&str] = &["TALB", "ALBUM"];
const MP3_LABEL: &[&str] = &["TPUB", "LABEL", "ORGANIZATION"];
const MP3_YEAR: &[&str] = &["TDRC", "TYER", "YEAR", "DATE"];
const MP3_TRACK: &[&str] = &["TRCK", "TRACKNUMBER", "TRACK"];

/// Field names probed for `key` in a `format` file, in priority order.
pub fn aliases_for(format: AudioFormat, key: TagKey) -> &'static [&'static str] {
    match (format, key) {
        (AudioFormat::Flac, TagKey::Artist) => FLAC_ARTIST,
        (AudioFormat::Flac, TagKey::Title) => FLAC_TITLE,
        (AudioFormat::Flac, TagKey::Album) => FLAC_ALBUM,
        (AudioFormat::Flac, TagKey::Label) => FLAC_LABEL,
        (AudioFormat::Flac, TagKey::Year) => FLAC_YEAR,
        (AudioFormat::Flac, TagKey::TrackNumber) => FLAC_TRACK,
        (AudioFormat::Mp3, TagKey::Artist) => MP3_ARTIST,
        (AudioFormat::Mp3, TagKey::Title) => MP3_TITLE,
        (AudioFormat::Mp3, TagKey::Album) => MP3_ALBUM,
        (AudioFormat::Mp3, TagKey::Label) => MP3_LABEL,
        (AudioFormat::Mp3, TagKey::Year) => MP3_YEAR,
        (AudioFormat::Mp3, TagKey::TrackNumber) => MP3_TRACK,
    }
}

/// Builds a tag set from raw `(field name, value)` pairs.
///
/// Field names match case-insensitively. For each key the first alias with a
/// non-blank value wins.
pub fn resolve_tags<K, V>(format: AudioFormat, entries: &[(K, V)]) -> TagSet
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    TagKey::ALL
        .iter()
        .filter_map(|key| {
            aliases_for(format, *key)
                .iter()
                .find_map(|alias| lookup(entries, alias))
                .map(|value| (*key, value.to_string()))
        })
        .collect()
}

fn lookup<'a, K, V>(entries: &'a [(K, V)], alias: &str) -> Option<&'a str>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    entries
        .iter()
        .filter(|(name, _)| name.as_ref().eq_ignore_ascii_case(alias))
        .map(|(_, value)| value.as_ref().trim())
        .find(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vorbis_names_match_case_insensitively() {
        let entries = [("artist", "Foo"), ("Title", " Bar "), ("ALBUM", "Baz")];
        let tags = resolve_tags(AudioFormat::Flac, &entries);
        assert_eq!(tags.get(TagKey::Artist), Some("Foo"));
        assert_eq!(tags.get(TagKey::Title), Some("Bar"));
        assert_eq!(tags.get(TagKey::Album), Some("Baz"));
        assert_eq!(tags.get(TagKey::Label), None);
    }

    #[test]
    fn test_id3_frame_names_resolve_for_mp3() {
        let entries = [
            ("TPE1", "Artist"),
            ("TIT2", "Song"),
            ("TPUB", "Label Co"),
            ("TDRC", "2019"),
            ("TRCK", "7"),
        ];
        let tags = resolve_tags(AudioFormat::Mp3, &entries);
        assert_eq!(tags.get(TagKey::Artist), Some("Artist"));
        assert_eq!(tags.get(TagKey::Title), Some("Song"));
        assert_eq!(tags.get(TagKey::Label), Some("Label Co"));
        assert_eq!(tags.get(TagKey::Year), Some("2019"));
        assert_eq!(tags.get(TagKey::TrackNumber), Some("7"));
    }

    #[test]
    fn test_alias_order_decides_between_fields() {
        let entries = [("DATE", "2020-05-01"), ("YEAR", "2020")];
        let tags = resolve_tags(AudioFormat::Flac, &entries);
        assert_eq!(tags.get(TagKey::Year), Some("2020"));

        let entries = [("ORGANIZATION", "Org"), ("LABEL", "Label")];
        let tags = resolve_tags(AudioFormat::Flac, &entries);
        assert_eq!(tags.get(TagKey::Label), Some("Label"));
    }

    #[test]
    fn test_blank_values_are_skipped() {
        let entries = [("ARTIST", "   "), ("TPE1", "Fallback")];
        let tags = resolve_tags(AudioFormat::Flac, &entries);
        assert_eq!(tags.get(TagKey::Artist), Some("Fallback"));
    }

    #[test]
    fn test_unknown_fields_yield_empty_set() {
        let entries = [("COMMENT", "nothing useful")];
        assert!(resolve_tags(AudioFormat::Mp3, &entries).is_empty());
        let none: [(&str, &str); 0] = [];
        assert!(resolve_tags(AudioFormat::Flac, &none).is_empty());
    }
}
