//! error handling stuff
use thiserror::Error;

#[derive(Debug, Error)]
/// An error
pub enum PaletteError {
    /// an IO error
    #[error("i/o error: {0}")]
    IO(#[from] std::io::Error),

    /// a json error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// a toml serialization error
    #[error("toml serialization error: {0}")]
    TOMLSer(#[from] toml::ser::Error),

    /// a token name that isn't part of the theme
    #[error("unknown token `{0}` (run `help` to list the available tokens)")]
    UnknownToken(String),

    /// a `key=value` assignment that couldn't be parsed
    #[error("invalid assignment `{0}`, expected `key=value`")]
    InvalidAssignment(String),

    /// a patch value that isn't a string
    #[error("invalid value for `{key}`: expected a string, got {found}")]
    InvalidPatchValue {
        /// the token the value was meant for
        key: String,
        /// a description of what was found instead
        found: String,
    },

    /// a name that doesn't match any variant of a choice
    #[error("unknown {kind} `{found}`, expected one of: {expected}")]
    UnknownVariant {
        /// what was being chosen
        kind: &'static str,
        /// the name that was given
        found: String,
        /// the accepted names
        expected: &'static str,
    },

    /// an editor command that couldn't be understood
    #[error("{0}")]
    InvalidCommand(String),

    /// the shared store lock was poisoned by a panicking writer
    #[error("theme store lock poisoned: {0}")]
    LockPoisoned(String),

    /// a report from color_eyre
    #[error("{0}")]
    EyreReport(#[from] color_eyre::Report),

    /// a miette hook install error
    #[error("error installing miette hook: {0}")]
    MietteInstall(#[from] miette::InstallError),
}

/// A result using [`PaletteError`] as the `Err` variant
pub type Result<T, U = PaletteError> = miette::Result<T, U>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_token_message() {
        let err = PaletteError::UnknownToken("fgPrimary".into());
        assert!(err.to_string().contains("`fgPrimary`"));
    }

    #[test]
    fn test_unknown_variant_message() {
        let err = PaletteError::UnknownVariant {
            kind: "export format",
            found: "yaml".into(),
            expected: "css, json",
        };
        assert_eq!(
            err.to_string(),
            "unknown export format `yaml`, expected one of: css, json"
        );
    }
}
