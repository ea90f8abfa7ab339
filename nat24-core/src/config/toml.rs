//! Simple TOML parser for watch configuration
//!
//! This is a minimal TOML parser that handles only the subset used by
//! `watch.toml`. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - Key = value pairs (string, integer, boolean)
//! - [section] headers
//! - [section.subsection] headers for the entrance animations
//! - Comments (# ...)
//!
//! Unknown keys are ignored so older firmware accepts newer files.

use crate::anim::{ActivityMode, AnimationSpec, Curve};
use crate::angle::WallTime;

use super::types::{ClockStyle, NotchStyle, TickUnit, WatchConfig};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Invalid section header
    InvalidSection,
    /// Invalid value type
    InvalidValue,
    /// Line is neither a header nor a key/value pair
    InvalidLine,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Face,
    Entrance,
    EntranceAnimation(EntranceAnimation),
    Display,
    Clock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntranceAnimation {
    Radius,
    NotchSpacing,
    HourSweep,
}

/// Parse TOML configuration into WatchConfig
///
/// Missing sections and keys keep their defaults.
pub fn parse_config(input: &str) -> Result<WatchConfig, ParseError> {
    let mut config = WatchConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidLine)?;
        apply_value(&mut config, section, key, value)?;
    }

    Ok(config)
}

/// Parse "[section]" header contents
fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "face" => Ok(Section::Face),
        "entrance" => Ok(Section::Entrance),
        "entrance.radius" => Ok(Section::EntranceAnimation(EntranceAnimation::Radius)),
        "entrance.notch_spacing" => {
            Ok(Section::EntranceAnimation(EntranceAnimation::NotchSpacing))
        }
        "entrance.hour_sweep" => Ok(Section::EntranceAnimation(EntranceAnimation::HourSweep)),
        "display" => Ok(Section::Display),
        "clock" => Ok(Section::Clock),
        _ => Err(ParseError::InvalidSection),
    }
}

fn apply_value(
    config: &mut WatchConfig,
    section: Section,
    key: &str,
    value: &str,
) -> Result<(), ParseError> {
    match section {
        Section::Root => {}
        Section::Face => match key {
            "tick_unit" => config.face.tick_unit = parse_tick_unit(value)?,
            "clock_style" => config.face.clock_style = parse_clock_style(value)?,
            "notch_style" => config.face.notch_style = parse_notch_style(value)?,
            "activity" => config.face.activity = parse_activity(value)?,
            _ => {}
        },
        Section::Entrance => {
            if key == "enabled" {
                config.face.entrance.enabled = parse_bool(value)?;
            }
        }
        Section::EntranceAnimation(which) => {
            let entrance = &mut config.face.entrance;
            let spec = match which {
                EntranceAnimation::Radius => &mut entrance.radius,
                EntranceAnimation::NotchSpacing => &mut entrance.notch_spacing,
                EntranceAnimation::HourSweep => &mut entrance.hour_sweep,
            };
            apply_animation_value(spec, key, value)?;
        }
        Section::Display => match key {
            "frame_interval_ms" => {
                config.display.frame_interval_ms = parse_positive(value)?;
            }
            "vcom_interval_ms" => {
                config.display.vcom_interval_ms = parse_positive(value)?;
            }
            _ => {}
        },
        Section::Clock => {
            if key == "initial" {
                config.clock.initial = parse_wall_time(parse_string(value)?)?;
            }
        }
    }
    Ok(())
}

fn apply_animation_value(
    spec: &mut AnimationSpec,
    key: &str,
    value: &str,
) -> Result<(), ParseError> {
    match key {
        "duration_ms" => spec.duration_ms = parse_int(value)?,
        "delay_ms" => spec.delay_ms = parse_int(value)?,
        "curve" => spec.curve = parse_curve(value)?,
        "lifecycle" => spec.notify_lifecycle = parse_bool(value)?,
        _ => {}
    }
    Ok(())
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Remove inline comments
    let value = if let Some(hash_pos) = value.find('#') {
        // Make sure # is not inside a string
        let quote_count = value[..hash_pos].matches('"').count();
        if quote_count % 2 == 0 {
            value[..hash_pos].trim()
        } else {
            value
        }
    } else {
        value
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> Result<&str, ParseError> {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        Ok(&value[1..value.len() - 1])
    } else {
        // Allow unquoted strings for simple values
        Ok(value)
    }
}

fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

/// Intervals of zero would spin the render loop
fn parse_positive(value: &str) -> Result<u16, ParseError> {
    match parse_int::<u16>(value)? {
        0 => Err(ParseError::InvalidValue),
        n => Ok(n),
    }
}

fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

fn parse_tick_unit(value: &str) -> Result<TickUnit, ParseError> {
    match parse_string(value)? {
        "minute" => Ok(TickUnit::Minute),
        "second" => Ok(TickUnit::Second),
        _ => Err(ParseError::InvalidValue),
    }
}

fn parse_clock_style(value: &str) -> Result<ClockStyle, ParseError> {
    match parse_string(value)? {
        "24h" => Ok(ClockStyle::TwentyFourHour),
        "12h" => Ok(ClockStyle::TwelveHour),
        _ => Err(ParseError::InvalidValue),
    }
}

fn parse_notch_style(value: &str) -> Result<NotchStyle, ParseError> {
    match parse_string(value)? {
        "dot" => Ok(NotchStyle::Dot),
        "tick" => Ok(NotchStyle::Tick),
        _ => Err(ParseError::InvalidValue),
    }
}

fn parse_activity(value: &str) -> Result<ActivityMode, ParseError> {
    match parse_string(value)? {
        "flag" => Ok(ActivityMode::Flag),
        "counted" => Ok(ActivityMode::Counted),
        _ => Err(ParseError::InvalidValue),
    }
}

fn parse_curve(value: &str) -> Result<Curve, ParseError> {
    match parse_string(value)? {
        "linear" => Ok(Curve::Linear),
        "ease_in" => Ok(Curve::EaseIn),
        "ease_out" => Ok(Curve::EaseOut),
        "ease_in_out" => Ok(Curve::EaseInOut),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Parse "HH:MM" or "HH:MM:SS"
fn parse_wall_time(value: &str) -> Result<WallTime, ParseError> {
    let mut parts = value.split(':');
    let hour: u8 = parse_int(parts.next().ok_or(ParseError::InvalidValue)?)?;
    let minute: u8 = parse_int(parts.next().ok_or(ParseError::InvalidValue)?)?;
    let second: u8 = match parts.next() {
        Some(s) => parse_int(s)?,
        None => 0,
    };
    if parts.next().is_some() || hour > 23 || minute > 59 || second > 59 {
        return Err(ParseError::InvalidValue);
    }
    Ok(WallTime::new(hour, minute, second))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;

    #[test]
    fn test_empty_input_gives_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, WatchConfig::default());
    }

    #[test]
    fn test_parse_section_header() {
        assert_eq!(parse_section_header("face"), Ok(Section::Face));
        assert_eq!(
            parse_section_header("entrance.hour_sweep"),
            Ok(Section::EntranceAnimation(EntranceAnimation::HourSweep))
        );
        assert_eq!(
            parse_section_header("stepper.x"),
            Err(ParseError::InvalidSection)
        );
    }

    #[test]
    fn test_parse_key_value_strips_comments() {
        assert_eq!(
            parse_key_value("tick_unit = \"second\" # debug"),
            Some(("tick_unit", "\"second\""))
        );
        assert_eq!(parse_key_value("a = \"x#y\""), Some(("a", "\"x#y\"")));
        assert_eq!(parse_key_value("novalue ="), None);
    }

    #[test]
    fn test_parse_wall_time() {
        assert_eq!(parse_wall_time("06:30"), Ok(WallTime::new(6, 30, 0)));
        assert_eq!(parse_wall_time("23:59:58"), Ok(WallTime::new(23, 59, 58)));
        assert_eq!(parse_wall_time("24:00"), Err(ParseError::InvalidValue));
        assert_eq!(parse_wall_time("12"), Err(ParseError::InvalidValue));
        assert_eq!(parse_wall_time("1:2:3:4"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
# Debug build of the face
[face]
tick_unit = "second"
clock_style = "12h"
notch_style = "tick"
activity = "counted"

[entrance]
enabled = true

[entrance.radius]
duration_ms = 400
curve = "linear"

[entrance.hour_sweep]
duration_ms = 1200
delay_ms = 50
lifecycle = false

[display]
frame_interval_ms = 20
vcom_interval_ms = 500

[clock]
initial = "06:15"
"#;
        let config = parse_config(toml).unwrap();

        assert_eq!(config.face.tick_unit, TickUnit::Second);
        assert_eq!(config.face.clock_style, ClockStyle::TwelveHour);
        assert_eq!(config.face.notch_style, NotchStyle::Tick);
        assert_eq!(config.face.activity, ActivityMode::Counted);

        let entrance = config.face.entrance;
        assert_eq!(entrance.radius.duration_ms, 400);
        assert_eq!(entrance.radius.curve, Curve::Linear);
        // Untouched section keeps its defaults
        assert_eq!(entrance.notch_spacing.delay_ms, 100);
        assert_eq!(entrance.hour_sweep.duration_ms, 1200);
        assert_eq!(entrance.hour_sweep.delay_ms, 50);
        assert!(!entrance.hour_sweep.notify_lifecycle);

        assert_eq!(
            config.display,
            DisplayConfig {
                frame_interval_ms: 20,
                vcom_interval_ms: 500,
            }
        );
        assert_eq!(config.clock.initial, WallTime::new(6, 15, 0));
    }

    #[test]
    fn test_shipped_config_is_stock_face() {
        let config = parse_config(include_str!("../../../nat24-firmware/watch.toml")).unwrap();
        assert_eq!(config, WatchConfig::default());
    }

    #[test]
    fn test_unknown_key_ignored() {
        let config = parse_config("[face]\nhands = 3\n").unwrap();
        assert_eq!(config.face, WatchConfig::default().face);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert_eq!(
            parse_config("[face]\nclock_style = \"36h\"\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[display]\nframe_interval_ms = 0\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[entrance]\nenabled = yes\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[face]\njust some words\n"),
            Err(ParseError::InvalidLine)
        );
    }
}
