use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "aiffme.toml";

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    extract(defaults().merge(Toml::file(path)))
}

/// Load configuration from an explicit file, `aiffme.toml` if present, or defaults.
///
/// Environment variables override every layer.
pub fn load_config_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            load_config(Path::new(DEFAULT_CONFIG_FILE))
        }
        None => extract(defaults()),
    }
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

fn defaults() -> Figment {
    Figment::from(Serialized::defaults(Config::default()))
}

/// `AIFFME_TRANSCODER__TIMEOUT_SECS=60` sets `transcoder.timeout_secs`
fn extract(figment: Figment) -> Result<Config, ConfigError> {
    figment
        .merge(Env::prefixed("AIFFME_").split("__"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_str_valid() {
        let toml = r#"
[transcoder]
ffmpeg_path = "/opt/ffmpeg/bin/ffmpeg"
timeout_secs = 60

[logging]
level = "info"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(
            config.transcoder.ffmpeg_path,
            Some(PathBuf::from("/opt/ffmpeg/bin/ffmpeg"))
        );
        assert_eq!(config.transcoder.timeout_secs, 60);
        assert_eq!(config.transcoder.probe_timeout_secs, 5);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_config_from_str_wrong_type() {
        let toml = r#"
[transcoder]
timeout_secs = "soon"
"#;
        let result = load_config_from_str(toml);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/aiffme.toml"));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));

        let result = load_config_or_default(Some(Path::new("/nonexistent/aiffme.toml")));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[transcoder]
diagnostic_tail_chars = 500
"#
        )
        .unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.transcoder.diagnostic_tail_chars, 500);
        assert_eq!(config.transcoder.timeout_secs, 300);
        assert_eq!(config.logging.level, "warn");
    }
}
