//! Collision resolution against the current contents of an output directory.

use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, warn};

use super::sanitize::sanitize;
use super::output_file_name;

/// First counter tried for a duplicate; the original file is implicitly "(1)".
pub const FIRST_DUPLICATE_COUNTER: u32 = 2;

/// Highest counter tried before falling back to a timestamped name.
pub const MAX_COLLISION_COUNTER: u32 = 1000;

/// Returns a path in `output_dir` for `sanitized_base` that does not exist yet.
///
/// The filesystem is consulted on every call; nothing is cached.
pub fn resolve_collision(output_dir: &Path, sanitized_base: &str) -> PathBuf {
    resolve_collision_with(output_dir, sanitized_base, |path| path.exists())
}

/// Same as [`resolve_collision`], with `is_taken` deciding whether a path is in use.
pub fn resolve_collision_with<F>(output_dir: &Path, sanitized_base: &str, is_taken: F) -> PathBuf
where
    F: Fn(&Path) -> bool,
{
    let candidate = output_dir.join(output_file_name(sanitized_base));
    if !is_taken(&candidate) {
        return candidate;
    }

    for counter in FIRST_DUPLICATE_COUNTER..=MAX_COLLISION_COUNTER {
        // The suffix is sanitized together with the base.
        let name = sanitize(&format!("{} ({})", sanitized_base, counter));
        let candidate = output_dir.join(output_file_name(&name));
        if !is_taken(&candidate) {
            debug!(base = %sanitized_base, counter, "Resolved filename collision");
            return candidate;
        }
    }

    let stamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    warn!(
        base = %sanitized_base,
        limit = MAX_COLLISION_COUNTER,
        "Collision counter exhausted, using timestamped name"
    );
    timestamped_candidate(output_dir, sanitized_base, &stamp, &is_taken)
}

fn timestamped_candidate<F>(output_dir: &Path, base: &str, stamp: &str, is_taken: &F) -> PathBuf
where
    F: Fn(&Path) -> bool,
{
    let stamped = sanitize(&format!("{} {}", base, stamp));
    let candidate = output_dir.join(output_file_name(&stamped));
    if !is_taken(&candidate) {
        return candidate;
    }

    let mut last = candidate;
    for counter in FIRST_DUPLICATE_COUNTER..=MAX_COLLISION_COUNTER {
        let name = sanitize(&format!("{} ({})", stamped, counter));
        let candidate = output_dir.join(output_file_name(&name));
        if !is_taken(&candidate) {
            return candidate;
        }
        last = candidate;
    }

    warn!(
        base = %stamped,
        limit = MAX_COLLISION_COUNTER,
        "Timestamped names exhausted, reusing the last candidate"
    );
    last
}
