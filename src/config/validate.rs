//! configuration validation stuff
use {
    crate::{config::options::*, validator, validator_nested},
    color_eyre::Result,
};

/// trait for validating config structs
pub trait Validate {
    /// validate the config
    fn validate(&self) -> Result<(), Vec<String>>;

    /// check if the config is valid
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl Validate for GeneratorCfg {
    fn validate(&self) -> Result<(), Vec<String>> {
        Ok(())
    }
}

impl Validate for ExportCfg {
    fn validate(&self) -> Result<(), Vec<String>> {
        Ok(())
    }
}

validator! { DisplayCfg,
    swatch_width => |v: &usize| *v >= 1 && *v <= 32,
        "must be between 1 and 32";
}

/// valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

validator! { LoggingConfig,
    level => |v: &String| VALID_LOG_LEVELS.contains(&v.to_lowercase().as_str()),
        "must be one of: trace, debug, info, warn, error, off";
}

validator_nested! { PaletteCss,
    fields: {
        version => |v: &u32| *v == 1,
            "must be 1";
    }
    nested: {
        generator;
        export;
        display;
        logging;
    }
}

/// format validation errors for display
pub fn format_validation_errors(errors: &[String]) -> String {
    let mut output = String::from("Configuration validation failed:\n");
    for (i, err) in errors.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, err));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(PaletteCss::default().is_valid());
        assert!(DisplayCfg::default().is_valid());
        assert!(LoggingConfig::default().is_valid());
    }

    #[test]
    fn test_nested_errors_are_prefixed() {
        let cfg = PaletteCss {
            display: Some(DisplayCfg {
                swatch_width: Some(0),
                ..Default::default()
            }),
            logging: Some(LoggingConfig {
                level: Some("loud".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let errors = cfg.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                "display.swatch_width: must be between 1 and 32".to_string(),
                "logging.level: must be one of: trace, debug, info, warn, error, off".to_string(),
            ]
        );
    }

    #[test]
    fn test_unset_fields_are_skipped() {
        let display = DisplayCfg {
            colored: None,
            swatch_width: None,
        };

        assert!(display.is_valid());
    }

    #[test]
    fn test_format_validation_errors() {
        let formatted = format_validation_errors(&["a: bad".to_string(), "b: worse".to_string()]);

        assert_eq!(
            formatted,
            "Configuration validation failed:\n  1. a: bad\n  2. b: worse\n"
        );
    }
}
