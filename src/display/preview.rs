//! terminal previews of a theme
use {
    crate::{
        display::color::parse_color,
        theme::{Theme, Token, TokenGroup},
    },
    owo_colors::{DynColors, OwoColorize, Style},
    std::fmt::{self, Write},
};

/// width of the sample card's content area, in columns
const CARD_WIDTH: usize = 48;

/// text color of the status badges
const BADGE_TEXT: DynColors = DynColors::Rgb(255, 255, 255);

/// a piece of text with optional colors
#[derive(Debug, Clone)]
struct Span {
    /// the text
    text: String,
    /// foreground color
    fg: Option<DynColors>,
    /// background color
    bg: Option<DynColors>,
    /// bold text
    bold: bool,
}

/// one line of the sample card
#[derive(Debug, Clone)]
struct Row {
    /// the content
    spans: Vec<Span>,
    /// background of the space after the content
    fill: Option<DynColors>,
}

/// renders a theme to the terminal
#[derive(Debug, Clone, Copy)]
pub struct Preview<'a> {
    /// the theme being previewed
    theme: &'a Theme,
    /// whether to emit ANSI colors
    colored: bool,
    /// width of the color blocks in the swatch list
    swatch_width: usize,
}

impl<'a> Preview<'a> {
    /// make a colored preview
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            colored: true,
            swatch_width: 4,
        }
    }

    /// turn ANSI colors on or off
    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// set the width of the color blocks in the swatch list
    pub fn swatch_width(mut self, width: usize) -> Self {
        self.swatch_width = width;
        self
    }

    /// the color a token holds, if coloring is on and it parses
    fn color(&self, token: Token) -> Option<DynColors> {
        if self.colored {
            parse_color(self.theme.get(token))
        } else {
            None
        }
    }

    /// apply the colors of a span
    fn paint(&self, span: &Span) -> String {
        if span.fg.is_none() && span.bg.is_none() && !(span.bold && self.colored) {
            return span.text.clone();
        }

        let mut style = Style::new();
        if let Some(fg) = span.fg {
            style = style.color(fg);
        }
        if let Some(bg) = span.bg {
            style = style.on_color(bg);
        }
        if span.bold {
            style = style.bold();
        }

        span.text.style(style).to_string()
    }

    /// a span colored from theme tokens
    fn span(&self, text: impl Into<String>, fg: Option<Token>, bg: Token) -> Span {
        Span {
            text: text.into(),
            fg: fg.and_then(|t| self.color(t)),
            bg: self.color(bg),
            bold: false,
        }
    }

    /// a row on the main background
    fn row(&self, text: &str, fg: Token) -> Row {
        Row {
            spans: vec![self.span(text, Some(fg), Token::BgPrimary)],
            fill: self.color(Token::BgPrimary),
        }
    }

    /// an empty row on the main background
    fn blank(&self) -> Row {
        Row {
            spans: Vec::new(),
            fill: self.color(Token::BgPrimary),
        }
    }

    /// a row on its own background section
    fn section(&self, text: &str, bg: Token) -> Row {
        Row {
            spans: vec![self.span(format!(" {}", text), Some(Token::TextPrimary), bg)],
            fill: self.color(bg),
        }
    }

    /// a full-width rule drawn in a token's color
    fn rule(&self, fg: Token) -> Row {
        Row {
            spans: vec![self.span("─".repeat(CARD_WIDTH), Some(fg), Token::BgPrimary)],
            fill: self.color(Token::BgPrimary),
        }
    }

    /// the sample card, top to bottom
    fn rows(&self) -> Vec<Row> {
        let mut title = self.row("Color Theme Preview", Token::TextPrimary);
        title.spans[0].bold = true;

        let gap = || self.span("  ", None, Token::BgPrimary);
        let links = Row {
            spans: vec![
                self.span("Default Link", Some(Token::LinkDefault), Token::BgPrimary),
                gap(),
                self.span("Hover Link", Some(Token::LinkHover), Token::BgPrimary),
                gap(),
                self.span("Visited Link", Some(Token::LinkVisited), Token::BgPrimary),
            ],
            fill: self.color(Token::BgPrimary),
        };

        let badge = |text: &str, bg: Token| Span {
            text: format!(" {} ", text),
            fg: self.colored.then_some(BADGE_TEXT),
            bg: self.color(bg),
            bold: false,
        };
        let badges = Row {
            spans: vec![
                badge("Success", Token::Success),
                gap(),
                badge("Error", Token::Error),
                gap(),
                badge("Warning", Token::Warning),
                gap(),
                badge("Info", Token::Info),
            ],
            fill: self.color(Token::BgPrimary),
        };

        let footer = format!(
            "radius {}, shadow {}",
            self.theme.border_radius, self.theme.shadow_color
        );

        vec![
            self.rule(Token::BorderColor),
            title,
            self.blank(),
            self.row(
                "This is how your color theme looks in action.",
                Token::TextSecondary,
            ),
            self.row("Muted text appears like this.", Token::TextMuted),
            self.blank(),
            self.section("This is a secondary background section.", Token::BgSecondary),
            self.blank(),
            self.section("This is an accent background section.", Token::BgAccent),
            self.blank(),
            links,
            self.rule(Token::DividerColor),
            badges,
            self.blank(),
            self.row(&footer, Token::TextMuted),
            self.rule(Token::BorderColor),
        ]
    }

    /// write the grouped token list
    pub fn write_swatches(&self, f: &mut impl Write) -> fmt::Result {
        for group in TokenGroup::ALL {
            let title = Span {
                text: group.title().to_string(),
                fg: None,
                bg: None,
                bold: true,
            };
            writeln!(f, "{}", self.paint(&title))?;

            for token in group.tokens() {
                let swatch = match self.color(token) {
                    Some(color) => " ".repeat(self.swatch_width).on_color(color).to_string(),
                    None => String::new(),
                };

                writeln!(
                    f,
                    "  {:<16} {:<14} {:<20} {}",
                    token.label(),
                    token.name(),
                    self.theme.get(token),
                    swatch
                )?;
            }
        }

        Ok(())
    }

    /// write the sample card
    ///
    /// `margin` and `padding` are read as rem and drawn two columns per rem
    pub fn write_sample(&self, f: &mut impl Write) -> fmt::Result {
        let margin = " ".repeat(spacing_columns(&self.theme.margin));
        let padding = self.span(
            " ".repeat(spacing_columns(&self.theme.padding)),
            None,
            Token::BgPrimary,
        );
        let padding = self.paint(&padding);

        for row in self.rows() {
            let used: usize = row.spans.iter().map(|s| s.text.chars().count()).sum();
            let fill = Span {
                text: " ".repeat(CARD_WIDTH.saturating_sub(used)),
                fg: None,
                bg: row.fill,
                bold: false,
            };

            write!(f, "{}{}", margin, padding)?;
            for span in &row.spans {
                write!(f, "{}", self.paint(span))?;
            }
            writeln!(f, "{}{}", self.paint(&fill), padding)?;
        }

        Ok(())
    }

    /// the grouped token list as a string
    pub fn swatches(&self) -> String {
        let mut out = String::new();
        let _ = self.write_swatches(&mut out);
        out
    }

    /// the sample card as a string
    pub fn sample(&self) -> String {
        let mut out = String::new();
        let _ = self.write_sample(&mut out);
        out
    }
}

impl fmt::Display for Preview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_swatches(f)?;
        writeln!(f)?;
        self.write_sample(f)
    }
}

/// columns used for a rem spacing value, 2 per rem, capped at 8
///
/// values that aren't plain non-negative numbers fall back to 1rem
fn spacing_columns(value: &str) -> usize {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map_or(2, |v| (v * 2.0).round().min(8.0) as usize)
}
