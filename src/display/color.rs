//! color parsing
use owo_colors::DynColors;

/// convert a token value into a `DynColors`
///
/// understands `#rrggbb`, `#rgb`, `rgb(r, g, b)` and `rgba(r, g, b, a)` (the
/// alpha is dropped)
pub fn parse_color(color_str: &str) -> Option<DynColors> {
    let color_str = color_str.trim();

    match color_str.strip_prefix('#') {
        Some(hex) => parse_hex_color(hex),
        None => parse_rgb_function(color_str),
    }
}

/// parse a hex code (without the `#`) into a `DynColors`
fn parse_hex_color(hex: &str) -> Option<DynColors> {
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(DynColors::Rgb(r, g, b))
        }
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
            Some(DynColors::Rgb(r * 17, g * 17, b * 17))
        }
        _ => None,
    }
}

/// parse `rgb(...)`/`rgba(...)` into a `DynColors`
fn parse_rgb_function(color_str: &str) -> Option<DynColors> {
    let lower = color_str.to_lowercase();
    let args = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))?
        .strip_suffix(')')?;

    let mut channels = args.split(',').map(|c| c.trim().parse::<f64>().ok());
    let mut next = || -> Option<u8> {
        let value = channels.next()??;
        Some(value.round().clamp(0.0, 255.0) as u8)
    };

    Some(DynColors::Rgb(next()?, next()?, next()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_colors() {
        assert_eq!(parse_color("#FF0000"), Some(DynColors::Rgb(255, 0, 0)));
        assert_eq!(parse_color("#1a1a66"), Some(DynColors::Rgb(26, 26, 102)));
        assert_eq!(parse_color("#F00"), Some(DynColors::Rgb(255, 0, 0)));
        assert_eq!(parse_color("#GG0000"), None);
        assert_eq!(parse_color("#ééé"), None);
    }

    #[test]
    fn test_parse_rgb_functions() {
        assert_eq!(
            parse_color("rgba(0, 0, 0, 0.3)"),
            Some(DynColors::Rgb(0, 0, 0))
        );
        assert_eq!(
            parse_color("RGB(12,34,56)"),
            Some(DynColors::Rgb(12, 34, 56))
        );
        assert_eq!(parse_color("rgb(12, 34)"), None);
        assert_eq!(parse_color("rgb(a, b, c)"), None);
    }

    #[test]
    fn test_non_colors() {
        assert_eq!(parse_color("4px"), None);
        assert_eq!(parse_color("1"), None);
        assert_eq!(parse_color(""), None);
    }
}
