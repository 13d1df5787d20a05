//! json export
use crate::{error::Result, theme::Theme};

impl Theme {
    /// convert the theme to a flat, 2-space indented JSON object
    ///
    /// # Errors
    ///
    /// returns an error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::theme::Token};

    #[test]
    fn test_json_layout() {
        let json = Theme::default().to_json().unwrap();
        let lines: Vec<&str> = json.lines().collect();

        assert_eq!(lines.first(), Some(&"{"));
        assert_eq!(lines[1], r##"  "textPrimary": "#000000","##);
        assert_eq!(lines[19], r#"  "padding": "1""#);
        assert_eq!(lines.last(), Some(&"}"));
        assert_eq!(lines.len(), Token::ALL.len() + 2);
    }

    #[test]
    fn test_json_follows_declaration_order() {
        let json = Theme::default().to_json().unwrap();
        let positions: Vec<usize> = Token::ALL
            .iter()
            .map(|t| json.find(&format!("\"{}\":", t.name())).unwrap())
            .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_json_parses_back() {
        let mut theme = Theme::default();
        theme.set(Token::BgAccent, "#1a1a66");
        let parsed: Theme = serde_json::from_str(&theme.to_json().unwrap()).unwrap();

        assert_eq!(parsed, theme);
    }
}
