//! Testing utilities and mock implementations.
//!
//! Mocks for the two external collaborators of a batch run, the transcoder
//! and the tag reader, so the runner can be exercised without ffmpeg or real
//! audio files.
//!
//! # Example
//!
//! ```rust,ignore
//! use aiffme_core::testing::{fixtures, MockTagReader, MockTranscoder};
//!
//! let input = fixtures::touch(dir.path(), "a.flac");
//! let reader = MockTagReader::new().with_tags(&input, &fixtures::artist_title("Foo", "Bar"));
//! let runner = BatchRunner::new(MockTranscoder::new(), reader);
//! ```

mod mock_tag_reader;
mod mock_transcoder;

pub use mock_tag_reader::MockTagReader;
pub use mock_transcoder::{MockTranscoder, RecordedConversion, MOCK_AIFF_BYTES};

/// Test fixtures and helper functions.
pub mod fixtures {
    use std::path::{Path, PathBuf};

    use crate::tags::TagKey;

    /// Create a placeholder input file and return its path.
    ///
    /// The content is not audio; pair it with a mock tag reader.
    pub fn touch(dir: &Path, relative: &str) -> PathBuf {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = std::fs::write(&path, b"not really audio");
        path
    }

    /// Artist/title pairs for [`super::MockTagReader::with_tags`].
    pub fn artist_title(artist: &'static str, title: &'static str) -> [(TagKey, &'static str); 2] {
        [(TagKey::Artist, artist), (TagKey::Title, title)]
    }
}
