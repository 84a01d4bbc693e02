#[cfg(feature = "cli")]
pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_distinct_paths, validate_non_empty_string, validate_path, Validate,
};

pub const BASE_DIR: &str = ".";
pub const INPUT_FILE: &str = "input.json";
pub const OUTPUT_FILE: &str = "output.json";
pub const RESULTS_FIELD: &str = "results";
pub const OMITTED_FIELD: &str = "profile";

/// Fixed file and field names. Not exposed on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanConfig {
    pub input_file: String,
    pub output_file: String,
    pub results_field: String,
    pub omitted_field: String,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            input_file: INPUT_FILE.to_string(),
            output_file: OUTPUT_FILE.to_string(),
            results_field: RESULTS_FIELD.to_string(),
            omitted_field: OMITTED_FIELD.to_string(),
        }
    }
}

impl ConfigProvider for CleanConfig {
    fn input_file(&self) -> &str {
        &self.input_file
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn results_field(&self) -> &str {
        &self.results_field
    }

    fn omitted_field(&self) -> &str {
        &self.omitted_field
    }
}

impl Validate for CleanConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_file", &self.input_file)?;
        validate_path("output_file", &self.output_file)?;
        validate_distinct_paths("output_file", &self.input_file, &self.output_file)?;
        validate_non_empty_string("results_field", &self.results_field)?;
        validate_non_empty_string("omitted_field", &self.omitted_field)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CleanError;

    #[test]
    fn test_default_uses_fixed_names() {
        let config = CleanConfig::default();
        assert_eq!(config.input_file(), "input.json");
        assert_eq!(config.output_file(), "output.json");
        assert_eq!(config.results_field(), "results");
        assert_eq!(config.omitted_field(), "profile");
    }

    #[test]
    fn test_default_is_valid() {
        assert!(CleanConfig::default().validate().is_ok());
    }

    #[test]
    fn test_same_input_and_output_is_rejected() {
        let config = CleanConfig {
            output_file: INPUT_FILE.to_string(),
            ..CleanConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, CleanError::ValidationError { ref field, .. } if field == "output_file"));
    }
}
