//! utilities used across palettecss
use {
    color_eyre::eyre::{Context, Result},
    std::path::Path,
    tracing::Level,
};

/// convert a string to a log level
///
/// takes a given string and converts it into a [`tracing::Level`] for later use when setting up
/// tracing in the app module (see [`crate::app::logging`])
///
/// `"off"` gives `None`, unknown names fall back to [`Level::ERROR`]
pub fn string_to_log_level(lvl: &str) -> Option<Level> {
    match lvl.to_lowercase().as_str() {
        "off" | "none" => None,
        "d" | "debug" | "dbg" => Some(Level::DEBUG),
        "t" | "trace" | "trc" => Some(Level::TRACE),
        "e" | "error" | "err" => Some(Level::ERROR),
        "i" | "info" | "inf" => Some(Level::INFO),
        "w" | "warn" | "wrn" => Some(Level::WARN),
        _ => Some(Level::ERROR),
    }
}

/// split a camelCase name into capitalized words
///
/// `"textPrimary"` becomes `"Text Primary"`, `"info"` becomes `"Info"`
pub fn split_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);

    for (i, c) in name.chars().enumerate() {
        if i == 0 {
            out.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            out.push(' ');
            out.push(c);
        } else {
            out.push(c);
        }
    }

    out
}

/// write text to a file, creating missing parent directories
pub fn write_to_file<P: AsRef<Path>>(file_path: P, contents: &str) -> Result<()> {
    let file_path = file_path.as_ref();

    if let Some(parent) = file_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory {}", parent.display()))?;
    }

    std::fs::write(file_path, contents)
        .wrap_err_with(|| format!("failed to write {}", file_path.display()))
}

#[cfg(test)]
mod tests {
    use {super::*, tempfile::tempdir};

    #[test]
    fn test_string_to_log_level() {
        assert_eq!(string_to_log_level("debug"), Some(Level::DEBUG));
        assert_eq!(string_to_log_level("WRN"), Some(Level::WARN));
        assert_eq!(string_to_log_level("i"), Some(Level::INFO));
        assert_eq!(string_to_log_level("nonsense"), Some(Level::ERROR));
    }

    #[test]
    fn test_off_disables_logging() {
        assert_eq!(string_to_log_level("off"), None);
        assert_eq!(string_to_log_level("OFF"), None);
    }

    #[test]
    fn test_split_camel_case() {
        assert_eq!(split_camel_case("textPrimary"), "Text Primary");
        assert_eq!(split_camel_case("bgAccent"), "Bg Accent");
        assert_eq!(split_camel_case("info"), "Info");
        assert_eq!(split_camel_case(""), "");
    }

    #[test]
    fn test_write_to_file_creates_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("theme.css");

        write_to_file(&path, "--margin: 1;\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "--margin: 1;\n");
    }
}
