//! FFmpeg binary discovery.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Package-manager install locations checked before `PATH`.
const COMMON_LOCATIONS: &[&str] = &[
    "/opt/homebrew/bin/ffmpeg", // Apple Silicon Homebrew
    "/usr/local/bin/ffmpeg",    // Intel Homebrew
    "/usr/bin/ffmpeg",
];

/// Bare binary name, resolved by the OS when nothing else is found.
pub const FFMPEG_BINARY: &str = "ffmpeg";

/// Finds an ffmpeg binary: common locations, then `PATH`, then the bare name.
pub fn locate_ffmpeg() -> PathBuf {
    let common = COMMON_LOCATIONS.iter().map(PathBuf::from);
    let found = locate_in(common, std::env::var_os("PATH"));
    debug!(path = ?found, "Resolved ffmpeg binary");
    found
}

fn locate_in<I>(candidates: I, path_var: Option<OsString>) -> PathBuf
where
    I: IntoIterator<Item = PathBuf>,
{
    if let Some(found) = candidates.into_iter().find(|p| is_file(p)) {
        return found;
    }

    let binary = format!("{}{}", FFMPEG_BINARY, std::env::consts::EXE_SUFFIX);
    if let Some(path_var) = path_var {
        if let Some(found) = std::env::split_paths(&path_var)
            .map(|dir| dir.join(&binary))
            .find(|p| is_file(p))
        {
            return found;
        }
    }

    PathBuf::from(FFMPEG_BINARY)
}

fn is_file(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_first_existing_candidate_wins() {
        let dir = TempDir::new().unwrap();
        let present = dir.path().join("ffmpeg-present");
        std::fs::write(&present, b"").unwrap();

        let found = locate_in(
            vec![dir.path().join("missing"), present.clone()],
            None,
        );
        assert_eq!(found, present);
    }

    #[test]
    fn test_path_search() {
        let dir = TempDir::new().unwrap();
        let binary = dir
            .path()
            .join(format!("ffmpeg{}", std::env::consts::EXE_SUFFIX));
        std::fs::write(&binary, b"").unwrap();

        let path_var = std::env::join_paths([Path::new("/nonexistent-dir"), dir.path()]).unwrap();
        let found = locate_in(Vec::new(), Some(path_var));
        assert_eq!(found, binary);
    }

    #[test]
    fn test_falls_back_to_bare_name() {
        let empty = TempDir::new().unwrap();
        let path_var = std::env::join_paths([empty.path()]).unwrap();
        let found = locate_in(Vec::new(), Some(path_var));
        assert_eq!(found, PathBuf::from("ffmpeg"));
    }
}
