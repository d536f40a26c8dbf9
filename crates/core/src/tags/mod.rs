//! Tag extraction for naming converted files.
//!
//! Tags are read with `lofty`, then each canonical key is resolved from an
//! ordered list of container-specific field names. Reading never fails from the
//! caller's point of view: unreadable files simply have no tags.

mod aliases;
mod error;
mod lofty_reader;
mod traits;
mod types;

pub use aliases::{aliases_for, resolve_tags};
pub use error::TagError;
pub use lofty_reader::LoftyTagReader;
pub use traits::TagReader;
pub use types::{AudioFile, AudioFormat, TagKey, TagSet};
