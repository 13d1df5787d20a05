//! the theme model
pub mod patch;
pub mod store;

pub use {
    patch::ThemePatch,
    store::{SharedThemeStore, ThemeStore},
};

use {
    crate::{error::PaletteError, utils::split_camel_case},
    std::{fmt, str::FromStr},
};

/// the editor groups tokens are listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenGroup {
    /// text colors
    Text,
    /// background colors
    Background,
    /// link colors
    Links,
    /// borders, dividers and shadows
    Borders,
    /// status colors
    Status,
    /// spacing and radius values
    Values,
}

impl TokenGroup {
    /// every group, in editor order
    pub const ALL: &'static [TokenGroup] = &[
        TokenGroup::Text,
        TokenGroup::Background,
        TokenGroup::Links,
        TokenGroup::Borders,
        TokenGroup::Status,
        TokenGroup::Values,
    ];

    /// the title of the group
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Background => "Background",
            Self::Links => "Links",
            Self::Borders => "Borders",
            Self::Status => "Status",
            Self::Values => "Values",
        }
    }

    /// the tokens in this group, in declaration order
    pub fn tokens(self) -> impl Iterator<Item = Token> {
        Token::ALL.iter().copied().filter(move |t| t.group() == self)
    }
}

crate::theme_tokens! {
    /// primary text color
    TextPrimary => text_primary { name: "textPrimary", group: Text, default: "#000000" },
    /// secondary text color
    TextSecondary => text_secondary { name: "textSecondary", group: Text, default: "#4A4A4A" },
    /// muted text color
    TextMuted => text_muted { name: "textMuted", group: Text, default: "#767676" },
    /// main background color
    BgPrimary => bg_primary { name: "bgPrimary", group: Background, default: "#FFFFFF" },
    /// secondary background color
    BgSecondary => bg_secondary { name: "bgSecondary", group: Background, default: "#F5F5F5" },
    /// accent background color
    BgAccent => bg_accent { name: "bgAccent", group: Background, default: "#E0E0E0" },
    /// link color
    LinkDefault => link_default { name: "linkDefault", group: Links, default: "#0070F3" },
    /// hovered link color
    LinkHover => link_hover { name: "linkHover", group: Links, default: "#0051A8" },
    /// visited link color
    LinkVisited => link_visited { name: "linkVisited", group: Links, default: "#6B46C1" },
    /// border color
    BorderColor => border_color { name: "borderColor", group: Borders, default: "#E2E8F0" },
    /// divider color
    DividerColor => divider_color { name: "dividerColor", group: Borders, default: "#CBD5E0" },
    /// shadow color, an `rgba(...)` value
    ShadowColor => shadow_color { name: "shadowColor", group: Borders, default: "rgba(0, 0, 0, 0.1)" },
    /// success status color
    Success => success { name: "success", group: Status, default: "#48BB78" },
    /// error status color
    Error => error { name: "error", group: Status, default: "#F56565" },
    /// warning status color
    Warning => warning { name: "warning", group: Status, default: "#ED8936" },
    /// info status color
    Info => info { name: "info", group: Status, default: "#4299E1" },
    /// corner radius in pixels (e.g. `4px`)
    BorderRadius => border_radius { name: "borderRadius", group: Values, default: "4px" },
    /// outer spacing in rem, without a unit
    Margin => margin { name: "margin", group: Values, default: "1" },
    /// inner spacing in rem, without a unit
    Padding => padding { name: "padding", group: Values, default: "1" },
}

impl Token {
    /// a human readable label ("Text Primary")
    pub fn label(&self) -> String {
        split_camel_case(self.name())
    }

    /// whether the token holds a dimension rather than a color
    pub fn is_dimension(&self) -> bool {
        self.group() == TokenGroup::Values
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Token {
    type Err = PaletteError;

    /// accepts `textPrimary`, `text-primary`, `text_primary` in any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        Token::ALL
            .iter()
            .copied()
            .find(|t| t.name().to_lowercase() == wanted)
            .ok_or_else(|| PaletteError::UnknownToken(s.trim().to_string()))
    }
}

impl Theme {
    /// overwrite the value of a token
    pub fn set(&mut self, token: Token, value: impl Into<String>) {
        *self.slot_mut(token) = value.into();
    }

    /// iterate over every token and its value, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Token, &str)> + '_ {
        Token::ALL.iter().map(move |t| (*t, self.get(*t)))
    }
}
