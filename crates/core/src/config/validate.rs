use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Conversion and probe timeouts are not 0
/// - Diagnostic tail length is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let transcoder = &config.transcoder;

    if transcoder.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "transcoder.timeout_secs cannot be 0".to_string(),
        ));
    }

    if transcoder.probe_timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "transcoder.probe_timeout_secs cannot be 0".to_string(),
        ));
    }

    if transcoder.diagnostic_tail_chars == 0 {
        return Err(ConfigError::ValidationError(
            "transcoder.diagnostic_tail_chars cannot be 0".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcoder::TranscoderConfig;

    #[test]
    fn test_validate_valid_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_timeout_zero_fails() {
        let config = Config {
            transcoder: TranscoderConfig::default().with_timeout(0),
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validate_probe_timeout_zero_fails() {
        let config = Config {
            transcoder: TranscoderConfig::default().with_probe_timeout(0),
            ..Default::default()
        };
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::ValidationError(msg)) if msg.contains("probe_timeout_secs")
        ));
    }

    #[test]
    fn test_validate_tail_zero_fails() {
        let mut config = Config::default();
        config.transcoder.diagnostic_tail_chars = 0;
        assert!(validate_config(&config).is_err());
    }
}
