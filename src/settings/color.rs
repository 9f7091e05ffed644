//! Parsing of string-encoded colors

use bevy::prelude::*;

use crate::error::SettingsError;

/// Highlight color used when the configured one cannot be parsed
pub const DEFAULT_HIGHLIGHT_COLOR: Color = Color::srgba(0.392, 0.584, 0.929, 0.15);

/// Parse a CSS-style color string
///
/// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` and
/// `rgba(r, g, b, a)` with 0-255 channels and a 0-1 alpha.
pub fn parse_color(value: &str) -> Result<Color, SettingsError> {
    let trimmed = value.trim();

    if trimmed.starts_with('#') {
        return Srgba::hex(trimmed)
            .map(Color::Srgba)
            .map_err(|err| SettingsError::invalid_color(value, err.to_string()));
    }

    if let Some(args) = functional_args(trimmed, "rgba") {
        return parse_channels(value, args, true);
    }
    if let Some(args) = functional_args(trimmed, "rgb") {
        return parse_channels(value, args, false);
    }

    Err(SettingsError::invalid_color(
        value,
        "expected #hex, rgb(..) or rgba(..)",
    ))
}

/// Parse a color string, logging and falling back to [`DEFAULT_HIGHLIGHT_COLOR`] on bad input
pub fn parse_color_or_default(value: &str) -> Color {
    parse_color(value).unwrap_or_else(|err| {
        warn!("{}; using default cell highlight color", err);
        DEFAULT_HIGHLIGHT_COLOR
    })
}

/// Contents between the parentheses of `name(...)`
fn functional_args<'a>(value: &'a str, name: &str) -> Option<&'a str> {
    value
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_channels(value: &str, args: &str, with_alpha: bool) -> Result<Color, SettingsError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return Err(SettingsError::invalid_color(
            value,
            format!("expected {} components, found {}", expected, parts.len()),
        ));
    }

    let mut rgb = [0.0f32; 3];
    for (channel, part) in rgb.iter_mut().zip(&parts) {
        let parsed: f32 = part
            .parse()
            .map_err(|_| SettingsError::invalid_color(value, format!("bad channel {:?}", part)))?;
        if !(0.0..=255.0).contains(&parsed) {
            return Err(SettingsError::invalid_color(
                value,
                format!("channel {} outside 0-255", parsed),
            ));
        }
        *channel = parsed / 255.0;
    }

    let alpha = if with_alpha {
        let parsed: f32 = parts[3]
            .parse()
            .map_err(|_| SettingsError::invalid_color(value, format!("bad alpha {:?}", parts[3])))?;
        if !(0.0..=1.0).contains(&parsed) {
            return Err(SettingsError::invalid_color(
                value,
                format!("alpha {} outside 0-1", parsed),
            ));
        }
        parsed
    } else {
        1.0
    };

    Ok(Color::srgba(rgb[0], rgb[1], rgb[2], alpha))
}
