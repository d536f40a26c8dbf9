//! Output filename generation.
//!
//! - [`sanitize`] reduces any string to the hardware-safe character set
//! - [`build_name`] chooses between tags and the original stem
//! - [`resolve_collision`] appends ` (N)` until the name is free
//!
//! The `.aiff` extension is appended after sanitization and never sanitized itself.

mod collision;
mod generator;
mod sanitize;

pub use collision::{
    resolve_collision, resolve_collision_with, FIRST_DUPLICATE_COUNTER, MAX_COLLISION_COUNTER,
};
pub use generator::{build_name, generate_output_path, generate_output_path_with, OutputSpec};
pub use sanitize::{is_allowed_char, sanitize, FALLBACK_NAME};

/// Extension of every converted file.
pub const OUTPUT_EXTENSION: &str = "aiff";

/// Appends the output extension to an already sanitized base name.
pub fn output_file_name(sanitized_base: &str) -> String {
    format!("{}.{}", sanitized_base, OUTPUT_EXTENSION)
}
