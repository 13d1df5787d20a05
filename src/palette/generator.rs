//! random palette generation
use {
    crate::{
        error::PaletteError,
        palette::hsl::Hsl,
        theme::{Theme, Token},
    },
    rand::{Rng, RngExt},
    schemars::JsonSchema,
    serde::{Deserialize, Serialize},
    smart_default::SmartDefault,
    std::{fmt, ops::RangeInclusive, str::FromStr},
    tracing::debug,
};

/// whether generated palettes are dark, light or either
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema, SmartDefault)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum PaletteMode {
    /// flip a coin for every palette
    #[default]
    Random,
    /// always generate dark palettes
    Dark,
    /// always generate light palettes
    Light,
}

impl fmt::Display for PaletteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Random => "random",
            Self::Dark => "dark",
            Self::Light => "light",
        })
    }
}

impl FromStr for PaletteMode {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(PaletteError::UnknownVariant {
                kind: "palette mode",
                found: s.trim().to_string(),
                expected: "random, dark, light",
            }),
        }
    }
}

/// where a color role takes its hue from
#[derive(Debug, Clone, Copy)]
enum HueSource {
    /// hue 0, used with 0% saturation for grays
    Neutral,
    /// the accent hue
    Accent,
    /// the accent hue shifted by 15°
    AccentShifted,
    /// the primary hue shifted by 120°
    Complement,
    /// the primary hue shifted by -60°
    Counter,
}

/// how one color token is derived
#[derive(Debug, Clone, Copy)]
struct ColorRole {
    /// the token being derived
    token: Token,
    /// the hue to use
    hue: HueSource,
    /// saturation in percent
    saturation: f64,
    /// lightness in percent for dark palettes
    dark: f64,
    /// lightness in percent for light palettes
    light: f64,
}

impl ColorRole {
    /// make a new role
    const fn new(token: Token, hue: HueSource, saturation: f64, dark: f64, light: f64) -> Self {
        Self {
            token,
            hue,
            saturation,
            dark,
            light,
        }
    }
}

/// every HSL-derived token; shadowColor and the values are handled separately
const ROLES: &[ColorRole] = &[
    ColorRole::new(Token::TextPrimary, HueSource::Neutral, 0.0, 95.0, 10.0),
    ColorRole::new(Token::TextSecondary, HueSource::Neutral, 0.0, 80.0, 30.0),
    ColorRole::new(Token::TextMuted, HueSource::Neutral, 0.0, 60.0, 50.0),
    ColorRole::new(Token::BgPrimary, HueSource::Neutral, 0.0, 10.0, 100.0),
    ColorRole::new(Token::BgSecondary, HueSource::Neutral, 0.0, 15.0, 95.0),
    ColorRole::new(Token::BgAccent, HueSource::Accent, 60.0, 25.0, 90.0),
    ColorRole::new(Token::LinkDefault, HueSource::Accent, 60.0, 65.0, 45.0),
    ColorRole::new(Token::LinkHover, HueSource::Accent, 70.0, 75.0, 35.0),
    ColorRole::new(Token::LinkVisited, HueSource::AccentShifted, 60.0, 60.0, 50.0),
    ColorRole::new(Token::BorderColor, HueSource::Neutral, 0.0, 20.0, 85.0),
    ColorRole::new(Token::DividerColor, HueSource::Neutral, 0.0, 25.0, 90.0),
    ColorRole::new(Token::Success, HueSource::Complement, 70.0, 40.0, 45.0),
    ColorRole::new(Token::Error, HueSource::Counter, 70.0, 50.0, 55.0),
    ColorRole::new(Token::Warning, HueSource::AccentShifted, 70.0, 45.0, 50.0),
    ColorRole::new(Token::Info, HueSource::Accent, 70.0, 45.0, 50.0),
];

/// the random draws a palette is derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteSeeds {
    /// dark or light palette
    pub dark: bool,
    /// primary hue in degrees, `0..360`
    pub primary_hue: u16,
    /// distance from the primary hue to the accent hue
    pub accent_offset: u16,
    /// corner radius in pixels
    pub border_radius: u8,
    /// outer spacing in rem
    pub margin: u8,
    /// inner spacing in rem
    pub padding: u8,
}

impl PaletteSeeds {
    /// range of the accent offset
    pub const ACCENT_OFFSET: RangeInclusive<u16> = 30..=60;
    /// range of the corner radius
    pub const BORDER_RADIUS: RangeInclusive<u8> = 2..=8;
    /// range of margin and padding
    pub const SPACING: RangeInclusive<u8> = 1..=2;

    /// draw a fresh set of seeds
    ///
    /// the dark flag is only drawn in [`PaletteMode::Random`]
    pub fn draw<R: Rng + ?Sized>(rng: &mut R, mode: PaletteMode) -> Self {
        let dark = match mode {
            PaletteMode::Random => rng.random_bool(0.5),
            PaletteMode::Dark => true,
            PaletteMode::Light => false,
        };

        Self {
            dark,
            primary_hue: rng.random_range(0..360),
            accent_offset: rng.random_range(Self::ACCENT_OFFSET),
            border_radius: rng.random_range(Self::BORDER_RADIUS),
            margin: rng.random_range(Self::SPACING),
            padding: rng.random_range(Self::SPACING),
        }
    }

    /// the accent hue, `(primary + offset) mod 360`
    pub fn accent_hue(&self) -> u16 {
        (self.primary_hue + self.accent_offset) % 360
    }

    /// resolve a hue source against these seeds, always in `0..360`
    fn hue(&self, source: HueSource) -> f64 {
        let primary = i32::from(self.primary_hue);
        let accent = i32::from(self.accent_hue());

        let hue = match source {
            HueSource::Neutral => 0,
            HueSource::Accent => accent,
            HueSource::AccentShifted => accent + 15,
            HueSource::Complement => primary + 120,
            HueSource::Counter => primary - 60,
        };

        f64::from(hue.rem_euclid(360))
    }

    /// derive the full theme from these seeds
    pub fn derive(&self) -> Theme {
        let mut theme = Theme::default();

        for role in ROLES {
            let lightness = if self.dark { role.dark } else { role.light };
            let color = Hsl::new(self.hue(role.hue), role.saturation, lightness);
            theme.set(role.token, color.to_hex());
        }

        theme.set(
            Token::ShadowColor,
            if self.dark {
                "rgba(0, 0, 0, 0.3)"
            } else {
                "rgba(0, 0, 0, 0.1)"
            },
        );
        theme.set(Token::BorderRadius, format!("{}px", self.border_radius));
        theme.set(Token::Margin, self.margin.to_string());
        theme.set(Token::Padding, self.padding.to_string());

        theme
    }
}

/// generates coherent random palettes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaletteGenerator {
    /// dark/light policy
    mode: PaletteMode,
}

impl PaletteGenerator {
    /// make a generator
    pub fn new(mode: PaletteMode) -> Self {
        Self { mode }
    }

    /// the dark/light policy
    pub fn mode(&self) -> PaletteMode {
        self.mode
    }

    /// draw seeds for the next palette
    pub fn seeds<R: Rng + ?Sized>(&self, rng: &mut R) -> PaletteSeeds {
        PaletteSeeds::draw(rng, self.mode)
    }

    /// generate a full palette
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Theme {
        let seeds = self.seeds(rng);

        debug!(
            dark = seeds.dark,
            primary_hue = seeds.primary_hue,
            accent_hue = seeds.accent_hue(),
            "generated palette"
        );

        seeds.derive()
    }
}

/// generate a palette with a coin-flip dark/light mode
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Theme {
    PaletteGenerator::default().generate(rng)
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        rand::{SeedableRng, rngs::StdRng},
    };

    fn assert_theme(theme: &Theme, expected: &[(Token, &str)]) {
        assert_eq!(expected.len(), Token::ALL.len());
        for (token, value) in expected {
            assert_eq!(theme.get(*token), *value, "{token}");
        }
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(" Dark ".parse::<PaletteMode>().unwrap(), PaletteMode::Dark);
        assert_eq!("light".parse::<PaletteMode>().unwrap(), PaletteMode::Light);
        assert!("dim".parse::<PaletteMode>().is_err());
    }

    #[test]
    fn test_derive_dark_palette() {
        let seeds = PaletteSeeds {
            dark: true,
            primary_hue: 200,
            accent_offset: 40,
            border_radius: 4,
            margin: 1,
            padding: 2,
        };

        assert_eq!(seeds.accent_hue(), 240);
        assert_theme(
            &seeds.derive(),
            &[
                (Token::TextPrimary, "#f2f2f2"),
                (Token::TextSecondary, "#cccccc"),
                (Token::TextMuted, "#999999"),
                (Token::BgPrimary, "#1a1a1a"),
                (Token::BgSecondary, "#262626"),
                (Token::BgAccent, "#1a1a66"),
                (Token::LinkDefault, "#7070db"),
                (Token::LinkHover, "#9393ec"),
                (Token::LinkVisited, "#7a5cd6"),
                (Token::BorderColor, "#333333"),
                (Token::DividerColor, "#404040"),
                (Token::ShadowColor, "rgba(0, 0, 0, 0.3)"),
                (Token::Success, "#ad1f7e"),
                (Token::Error, "#26d962"),
                (Token::Warning, "#4b22c3"),
                (Token::Info, "#2222c3"),
                (Token::BorderRadius, "4px"),
                (Token::Margin, "1"),
                (Token::Padding, "2"),
            ],
        );
    }

    #[test]
    fn test_derive_light_palette_with_negative_error_hue() {
        let seeds = PaletteSeeds {
            dark: false,
            primary_hue: 30,
            accent_offset: 50,
            border_radius: 6,
            margin: 2,
            padding: 1,
        };

        assert_theme(
            &seeds.derive(),
            &[
                (Token::TextPrimary, "#1a1a1a"),
                (Token::TextSecondary, "#4d4d4d"),
                (Token::TextMuted, "#808080"),
                (Token::BgPrimary, "#ffffff"),
                (Token::BgSecondary, "#f2f2f2"),
                (Token::BgAccent, "#ebf5d6"),
                (Token::LinkDefault, "#8ab82e"),
                (Token::LinkHover, "#6e981b"),
                (Token::LinkVisited, "#73cc33"),
                (Token::BorderColor, "#d9d9d9"),
                (Token::DividerColor, "#e6e6e6"),
                (Token::ShadowColor, "rgba(0, 0, 0, 0.1)"),
                (Token::Success, "#22c373"),
                (Token::Error, "#dd3c8c"),
                (Token::Warning, "#71d926"),
                (Token::Info, "#9dd926"),
                (Token::BorderRadius, "6px"),
                (Token::Margin, "2"),
                (Token::Padding, "1"),
            ],
        );
    }

    #[test]
    fn test_accent_hue_wraps() {
        let seeds = PaletteSeeds {
            dark: false,
            primary_hue: 350,
            accent_offset: 45,
            border_radius: 2,
            margin: 1,
            padding: 1,
        };

        assert_eq!(seeds.accent_hue(), 35);
        assert_eq!(seeds.hue(HueSource::Counter), 290.0);
        assert_eq!(seeds.hue(HueSource::Complement), 110.0);
    }

    #[test]
    fn test_seeds_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);

        for _ in 0..500 {
            let seeds = PaletteSeeds::draw(&mut rng, PaletteMode::Random);
            assert!(seeds.primary_hue < 360);
            assert!(PaletteSeeds::ACCENT_OFFSET.contains(&seeds.accent_offset));
            assert!(PaletteSeeds::BORDER_RADIUS.contains(&seeds.border_radius));
            assert!(PaletteSeeds::SPACING.contains(&seeds.margin));
            assert!(PaletteSeeds::SPACING.contains(&seeds.padding));
            assert!(seeds.accent_hue() < 360);
        }
    }

    #[test]
    fn test_generate_fills_every_token() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let theme = generate(&mut rng);
            for (token, value) in theme.iter() {
                assert!(!value.is_empty(), "{token} is empty");
                if !token.is_dimension() && token != Token::ShadowColor {
                    assert!(value.starts_with('#') && value.len() == 7, "{token}: {value}");
                }
            }
            assert!(theme.border_radius.ends_with("px"));
        }
    }

    #[test]
    fn test_forced_modes() {
        let mut rng = StdRng::seed_from_u64(1);
        let dark = PaletteGenerator::new(PaletteMode::Dark);
        let light = PaletteGenerator::new(PaletteMode::Light);

        for _ in 0..20 {
            let theme = dark.generate(&mut rng);
            assert_eq!(theme.bg_primary, crate::palette::hsl_to_hex(0.0, 0.0, 10.0));
            assert_eq!(theme.bg_primary, "#1a1a1a");
            assert_eq!(theme.shadow_color, "rgba(0, 0, 0, 0.3)");

            let theme = light.generate(&mut rng);
            assert_eq!(theme.bg_primary, "#ffffff");
            assert_eq!(theme.text_primary, "#1a1a1a");
        }
    }

    #[test]
    fn test_same_seed_same_palette() {
        let generator = PaletteGenerator::default();
        let a = generator.generate(&mut StdRng::seed_from_u64(99));
        let b = generator.generate(&mut StdRng::seed_from_u64(99));

        assert_eq!(a, b);
    }

    #[test]
    fn test_random_mode_produces_both_variants() {
        let mut rng = StdRng::seed_from_u64(5);
        let darks = (0..200)
            .filter(|_| PaletteSeeds::draw(&mut rng, PaletteMode::Random).dark)
            .count();

        assert!(darks > 0 && darks < 200);
    }
}
