//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::LogveilConfig;
use crate::anonymization::AnonymizationMode;
use crate::domain::errors::LogveilError;
use crate::domain::result::Result;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Parses the TOML into [`LogveilConfig`]
/// 3. Applies environment variable overrides (`LOGVEIL_*` prefix)
/// 4. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, TOML parsing fails, or
/// validation fails.
///
/// # Examples
///
/// ```no_run
/// use logveil::config::load_config;
///
/// let config = load_config("logveil.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<LogveilConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LogveilError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        LogveilError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let mut config: LogveilConfig = toml::from_str(&contents)
        .map_err(|e| LogveilError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        LogveilError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Applies environment variable overrides using the `LOGVEIL_*` prefix
///
/// Variables follow the pattern `LOGVEIL_<SECTION>_<KEY>`, for example
/// `LOGVEIL_ANONYMIZATION_MODE` or `LOGVEIL_LOGGING_LEVEL`.
fn apply_env_overrides(config: &mut LogveilConfig) -> Result<()> {
    if let Ok(val) = std::env::var("LOGVEIL_ANONYMIZATION_MODE") {
        config.anonymization.mode = match val.to_lowercase().as_str() {
            "zero" => AnonymizationMode::Zero,
            "random" => AnonymizationMode::Random,
            "random-consistent" => AnonymizationMode::RandomConsistent,
            "simple" => AnonymizationMode::Simple,
            "rewrite" => AnonymizationMode::Rewrite,
            _ => {
                return Err(LogveilError::Configuration(format!(
                    "Invalid LOGVEIL_ANONYMIZATION_MODE: {}",
                    val
                )))
            }
        };
    }
    if let Ok(val) = std::env::var("LOGVEIL_ANONYMIZATION_BITS") {
        config.anonymization.bits = val.parse().map_err(|_| {
            LogveilError::Configuration(format!("Invalid LOGVEIL_ANONYMIZATION_BITS: {}", val))
        })?;
    }
    if let Ok(val) = std::env::var("LOGVEIL_ANONYMIZATION_REPLACEMENT_CHAR") {
        let mut chars = val.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => config.anonymization.replacement_char = c,
            _ => {
                return Err(LogveilError::Configuration(format!(
                    "Invalid LOGVEIL_ANONYMIZATION_REPLACEMENT_CHAR: {}",
                    val
                )))
            }
        }
    }

    if let Ok(val) = std::env::var("LOGVEIL_LOGGING_LEVEL") {
        config.logging.level = val;
    }
    if let Ok(val) = std::env::var("LOGVEIL_LOGGING_JSON") {
        config.logging.json = val.parse().unwrap_or(false);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::NamedTempFile;

    // load_config reads LOGVEIL_* variables, so every test in this module
    // serializes on this lock to keep env mutation from leaking between
    // concurrently running tests
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_load_config_missing_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_valid() {
        let _guard = ENV_LOCK.lock().unwrap();
        let toml_content = r#"
[anonymization]
mode = "simple"
bits = 24
replacement_char = "x"

[logging]
level = "warn"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.anonymization.mode, AnonymizationMode::Simple);
        assert_eq!(config.anonymization.bits, 24);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let _guard = ENV_LOCK.lock().unwrap();
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"anonymization = not toml").unwrap();
        temp_file.flush().unwrap();

        assert!(load_config(temp_file.path()).is_err());
    }

    #[test]
    fn test_env_override_mode() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("LOGVEIL_ANONYMIZATION_MODE", "random-consistent");
        let mut config = LogveilConfig::default();
        let result = apply_env_overrides(&mut config);
        std::env::remove_var("LOGVEIL_ANONYMIZATION_MODE");
        result.unwrap();
        assert_eq!(
            config.anonymization.mode,
            AnonymizationMode::RandomConsistent
        );
    }

    #[test]
    fn test_env_override_invalid_mode() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("LOGVEIL_ANONYMIZATION_MODE", "scramble");
        let mut config = LogveilConfig::default();
        let result = apply_env_overrides(&mut config);
        std::env::remove_var("LOGVEIL_ANONYMIZATION_MODE");
        assert!(result.is_err());
    }

    #[test]
    fn test_env_override_bits_and_replacement_char() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("LOGVEIL_ANONYMIZATION_BITS", "24");
        std::env::set_var("LOGVEIL_ANONYMIZATION_REPLACEMENT_CHAR", "*");
        let mut config = LogveilConfig::default();
        let result = apply_env_overrides(&mut config);
        std::env::remove_var("LOGVEIL_ANONYMIZATION_BITS");
        std::env::remove_var("LOGVEIL_ANONYMIZATION_REPLACEMENT_CHAR");
        result.unwrap();
        assert_eq!(config.anonymization.bits, 24);
        assert_eq!(config.anonymization.replacement_char, '*');
    }
}
