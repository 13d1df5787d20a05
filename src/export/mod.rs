//! theme export formats
pub mod css;
pub mod json;

use {
    crate::{
        error::{PaletteError, Result},
        theme::Theme,
    },
    schemars::JsonSchema,
    serde::{Deserialize, Serialize},
    smart_default::SmartDefault,
    std::{fmt, str::FromStr},
};

/// a format a theme can be exported in
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema, SmartDefault)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// CSS custom properties
    #[default]
    Css,
    /// a flat JSON object
    Json,
}

impl ExportFormat {
    /// render a theme in this format
    ///
    /// # Errors
    ///
    /// returns an error if JSON serialization fails
    pub fn render(self, theme: &Theme) -> Result<String> {
        match self {
            Self::Css => Ok(theme.to_css_vars()),
            Self::Json => theme.to_json(),
        }
    }

    /// the usual file extension for this format
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "css" => Ok(Self::Css),
            "json" => Ok(Self::Json),
            _ => Err(PaletteError::UnknownVariant {
                kind: "export format",
                found: s.trim().to_string(),
                expected: "css, json",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_dispatches() {
        let theme = Theme::default();

        assert_eq!(ExportFormat::Css.render(&theme).unwrap(), theme.to_css_vars());
        assert_eq!(
            ExportFormat::Json.render(&theme).unwrap(),
            theme.to_json().unwrap()
        );
    }

    #[test]
    fn test_default_is_css() {
        assert_eq!(ExportFormat::default(), ExportFormat::Css);
        assert_eq!(ExportFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!(
            "yaml".parse::<ExportFormat>().unwrap_err().to_string(),
            "unknown export format `yaml`, expected one of: css, json"
        );
    }
}
