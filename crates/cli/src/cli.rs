use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};

use aiffme_core::{AudioFormat, BatchRequest};

/// Convert FLAC/MP3 files to CDJ-compatible AIFF, named from their tags.
#[derive(Parser, Debug)]
#[command(name = "aiffme", version)]
pub struct CliArgs {
    /// A folder to scan recursively, or one or more audio files
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output folder [default: <input folder>_AIFF beside the input]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file [default: ./aiffme.toml when present]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// ffmpeg binary to use instead of discovering one
    #[arg(long)]
    pub ffmpeg: Option<PathBuf>,

    /// Print the output names without converting
    #[arg(long)]
    pub dry_run: bool,

    /// Print the per-file status list when done
    #[arg(long)]
    pub list: bool,

    /// Print results as JSON, without a progress bar
    #[arg(long)]
    pub json: bool,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CliArgs {
    /// A single folder is scanned; anything else is an explicit file selection.
    ///
    /// A single missing path without an audio extension is taken to be a
    /// folder, so the scan reports it as not found.
    pub fn request(&self) -> BatchRequest {
        let request = match self.inputs.as_slice() {
            [dir] if looks_like_dir(dir) => BatchRequest::directory(dir.clone()),
            files => BatchRequest::files(files.to_vec()),
        };
        match &self.output {
            Some(output) => request.with_output_dir(output.clone()),
            None => request,
        }
    }

    /// Filter directive implied by `-v` flags, if any.
    pub fn verbosity_filter(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("info"),
            _ => Some("debug"),
        }
    }
}

fn looks_like_dir(path: &Path) -> bool {
    path.is_dir() || (!path.exists() && AudioFormat::from_path(path).is_none())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aiffme_core::InputSelection;

    #[test]
    fn test_single_directory_is_scanned() {
        let temp = tempfile::TempDir::new().unwrap();
        let dir = temp.path().to_str().unwrap();
        let args = CliArgs::try_parse_from(["aiffme", dir, "-o", "/out"]).unwrap();

        let request = args.request();
        assert_eq!(
            request.source,
            InputSelection::Directory(temp.path().to_path_buf())
        );
        assert_eq!(request.output_dir, Some(PathBuf::from("/out")));
    }

    #[test]
    fn test_files_are_an_explicit_selection() {
        let args = CliArgs::try_parse_from(["aiffme", "a.flac", "b.mp3"]).unwrap();

        assert_eq!(
            args.request().source,
            InputSelection::Files(vec![PathBuf::from("a.flac"), PathBuf::from("b.mp3")])
        );
        assert_eq!(args.request().output_dir, None);
    }

    #[test]
    fn test_missing_folder_is_scanned_not_selected() {
        let temp = tempfile::TempDir::new().unwrap();
        let typo = temp.path().join("Techno Sett");
        let args = CliArgs::try_parse_from([
            "aiffme".to_string(),
            typo.to_string_lossy().into_owned(),
        ])
        .unwrap();
        assert_eq!(args.request().source, InputSelection::Directory(typo));

        let missing_file = temp.path().join("gone.flac");
        let args = CliArgs::try_parse_from([
            "aiffme".to_string(),
            missing_file.to_string_lossy().into_owned(),
        ])
        .unwrap();
        assert_eq!(
            args.request().source,
            InputSelection::Files(vec![missing_file])
        );
    }

    #[test]
    fn test_inputs_required() {
        assert!(CliArgs::try_parse_from(["aiffme"]).is_err());
    }

    #[test]
    fn test_verbosity() {
        let args = CliArgs::try_parse_from(["aiffme", "x.flac"]).unwrap();
        assert_eq!(args.verbosity_filter(), None);

        let args = CliArgs::try_parse_from(["aiffme", "-vv", "x.flac", "--dry-run"]).unwrap();
        assert_eq!(args.verbosity_filter(), Some("debug"));
        assert!(args.dry_run);
    }
}
