//! css variable export
use crate::theme::Theme;

/// the comment line every css export starts with
pub const CSS_HEADER: &str = "/* CSS Variables */";

impl Theme {
    /// convert the theme to CSS custom properties, one `--name: value;` per line
    pub fn to_css_vars(&self) -> String {
        let mut vars = String::from(CSS_HEADER);
        vars.push('\n');

        for (token, value) in self.iter() {
            Self::add_var(&mut vars, token.name(), value);
        }

        vars
    }

    /// helper to add a css variable
    fn add_var(vars: &mut String, name: &str, value: &str) {
        vars.push_str(&format!("--{}: {};\n", name, value));
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::theme::Token};

    #[test]
    fn test_css_layout() {
        let css = Theme::default().to_css_vars();
        let lines: Vec<&str> = css.lines().collect();

        assert_eq!(lines.len(), Token::ALL.len() + 1);
        assert_eq!(lines[0], "/* CSS Variables */");
        assert_eq!(lines[1], "--textPrimary: #000000;");
        assert_eq!(lines[12], "--shadowColor: rgba(0, 0, 0, 0.1);");
        assert_eq!(lines[19], "--padding: 1;");
        assert!(css.ends_with(";\n"));
    }

    #[test]
    fn test_css_follows_declaration_order() {
        let css = Theme::default().to_css_vars();
        let names: Vec<&str> = css
            .lines()
            .skip(1)
            .filter_map(|l| l.strip_prefix("--")?.split(':').next())
            .collect();
        let expected: Vec<&str> = Token::ALL.iter().map(|t| t.name()).collect();

        assert_eq!(names, expected);
    }

    #[test]
    fn test_css_keeps_free_form_values() {
        let mut theme = Theme::default();
        theme.set(Token::Margin, "3");
        theme.set(Token::Info, "tomato");
        let css = theme.to_css_vars();

        assert!(css.contains("--margin: 3;\n"));
        assert!(css.contains("--info: tomato;\n"));
    }
}
