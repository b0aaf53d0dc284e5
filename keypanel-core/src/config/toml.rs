//! Minimal TOML parser for the panel configuration
//!
//! Handles only the subset `keyboard.toml` uses, without allocating.
//!
//! Supported:
//! - `[display]`, `[timing]`, `[wpm]` and `[rgb]` section headers
//! - Root-level keys before the first section
//! - `key = value` pairs (string, integer, boolean)
//! - Pins as `"gpio16"` or a bare integer
//! - Comments (`# ...`), including trailing ones
//!
//! Unknown keys are ignored; unknown sections are an error.

use super::types::PanelConfig;

/// Parse error
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Invalid or unknown section header
    InvalidSection,
    /// Value of the wrong type or out of range
    InvalidValue,
    /// Invalid pin string
    InvalidPin,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Display,
    Timing,
    Wpm,
    Rgb,
}

/// Parse TOML configuration into a [`PanelConfig`]
///
/// Keys that are absent keep their default value.
pub fn parse_config(input: &str) -> Result<PanelConfig, ParseError> {
    let mut config = PanelConfig::new();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            section = parse_section_header(line)?;
            continue;
        }

        if let Some((key, value)) = parse_key_value(line) {
            apply_value(section, key, value, &mut config)?;
        }
    }

    Ok(config)
}

/// Parse a header line like `[timing]`, trailing comment allowed
fn parse_section_header(line: &str) -> Result<Section, ParseError> {
    let line = match line.find('#') {
        Some(hash_pos) => line[..hash_pos].trim_end(),
        None => line,
    };

    let name = line
        .strip_prefix('[')
        .and_then(|l| l.strip_suffix(']'))
        .ok_or(ParseError::InvalidSection)?;

    match name.trim() {
        "display" => Ok(Section::Display),
        "timing" => Ok(Section::Timing),
        "wpm" => Ok(Section::Wpm),
        "rgb" => Ok(Section::Rgb),
        _ => Err(ParseError::InvalidSection),
    }
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
fn parse_string(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// Parse an integer value, decimal or `0x` hex
fn parse_int<T>(value: &str) -> Result<T, ParseError>
where
    T: core::str::FromStr + TryFrom<u32>,
{
    match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16)
            .ok()
            .and_then(|v| T::try_from(v).ok())
            .ok_or(ParseError::InvalidValue),
        None => value.parse().map_err(|_| ParseError::InvalidValue),
    }
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Parse a pin like `"gpio16"`, `"GP16"` or `16`
fn parse_pin(value: &str) -> Result<u8, ParseError> {
    let value = parse_string(value);
    let digits = value
        .strip_prefix("gpio")
        .or_else(|| value.strip_prefix("GP"))
        .unwrap_or(value);

    let pin: u8 = digits.parse().map_err(|_| ParseError::InvalidPin)?;
    // RP2040 exposes GPIO0..=GPIO29
    if pin > 29 {
        return Err(ParseError::InvalidPin);
    }
    Ok(pin)
}

/// Apply a key-value pair to the current section
fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut PanelConfig,
) -> Result<(), ParseError> {
    match section {
        Section::Root => match key {
            "led_pin" | "ws2812_pin" => config.led_pin = parse_pin(value)?,
            _ => {}
        },
        Section::Display => {
            let d = &mut config.display;
            match key {
                "i2c_address" | "address" => {
                    let addr: u8 = parse_int(value)?;
                    // 7-bit address
                    if addr > 0x7F {
                        return Err(ParseError::InvalidValue);
                    }
                    d.i2c_address = addr;
                }
                "i2c_frequency" | "frequency" => d.i2c_frequency = parse_int(value)?,
                "sda_pin" => d.sda_pin = parse_pin(value)?,
                "scl_pin" => d.scl_pin = parse_pin(value)?,
                "width" => d.width = parse_int(value)?,
                "height" => d.height = parse_int(value)?,
                _ => {}
            }
        }
        Section::Timing => {
            let t = &mut config.timing;
            match key {
                "sleep_timeout_ms" | "timeout_ms" => t.sleep_timeout_ms = parse_int(value)?,
                "sleep_check_interval_ms" | "check_interval_ms" => {
                    t.sleep_check_interval_ms = parse_nonzero(value)?
                }
                "bar_redraw_interval_ms" => t.bar_redraw_interval_ms = parse_nonzero(value)?,
                _ => {}
            }
        }
        Section::Wpm => {
            let w = &mut config.wpm;
            match key {
                "scale_max" => w.scale_max = parse_nonzero(value)?,
                "sample_seconds" => w.sample_seconds = parse_nonzero(value)?,
                "sample_periods" => w.sample_periods = parse_nonzero(value)?,
                _ => {}
            }
        }
        Section::Rgb => {
            let r = &mut config.rgb;
            match key {
                "enabled" => r.enabled = parse_bool(value)?,
                "effect" | "mode" => r.effect = parse_int(value)?,
                "hue" => r.hue = parse_int(value)?,
                "sat" | "saturation" => r.sat = parse_int(value)?,
                "val" | "value" => r.val = parse_int(value)?,
                "speed" => r.speed = parse_int(value)?,
                _ => {}
            }
        }
    }

    Ok(())
}

/// Integer that must not be zero (periods and divisors)
fn parse_nonzero<T>(value: &str) -> Result<T, ParseError>
where
    T: core::str::FromStr + TryFrom<u32> + PartialEq + Default,
{
    let v: T = parse_int(value)?;
    if v == T::default() {
        return Err(ParseError::InvalidValue);
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pin() {
        assert_eq!(parse_pin("\"gpio16\""), Ok(16));
        assert_eq!(parse_pin("GP17"), Ok(17));
        assert_eq!(parse_pin("15"), Ok(15));
        assert_eq!(parse_pin("\"gpio30\""), Err(ParseError::InvalidPin));
        assert_eq!(parse_pin("\"sda\""), Err(ParseError::InvalidPin));
    }

    #[test]
    fn test_parse_int_hex() {
        assert_eq!(parse_int::<u8>("0x3C"), Ok(0x3C));
        assert_eq!(parse_int::<u8>("60"), Ok(60));
        assert_eq!(parse_int::<u8>("0x1FF"), Err(ParseError::InvalidValue));
        assert_eq!(parse_int::<u8>("-1"), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_parse_section_header() {
        assert_eq!(parse_section_header("[display]"), Ok(Section::Display));
        assert_eq!(parse_section_header("[ wpm ] # typing"), Ok(Section::Wpm));
        assert_eq!(
            parse_section_header("[stepper]"),
            Err(ParseError::InvalidSection)
        );
        assert_eq!(parse_section_header("[rgb"), Err(ParseError::InvalidSection));
    }

    #[test]
    fn test_empty_input_is_default() {
        assert_eq!(parse_config(""), Ok(PanelConfig::default()));
        assert_eq!(parse_config("# nothing\n\n"), Ok(PanelConfig::default()));
    }

    #[test]
    fn test_parse_full_config() {
        let config_str = r#"
led_pin = "gpio15"

[display]
i2c_address = 0x3D
sda_pin = "gpio4"
scl_pin = "gpio5"

[timing]
sleep_timeout_ms = 10000   # ten seconds
sleep_check_interval_ms = 500
bar_redraw_interval_ms = 100

[wpm]
scale_max = 200

[rgb]
enabled = false
effect = 12
hue = 0
"#;

        let config = parse_config(config_str).unwrap();
        assert_eq!(config.led_pin, 15);
        assert_eq!(config.display.i2c_address, 0x3D);
        assert_eq!(config.display.sda_pin, 4);
        assert_eq!(config.display.scl_pin, 5);
        assert_eq!(config.display.width, 128);
        assert_eq!(config.timing.sleep_timeout_ms, 10_000);
        assert_eq!(config.timing.sleep_check_interval_ms, 500);
        assert_eq!(config.timing.bar_redraw_interval_ms, 100);
        assert_eq!(config.wpm.scale_max, 200);
        assert_eq!(config.wpm.sample_periods, 32);
        assert!(!config.rgb.enabled);
        assert_eq!(config.rgb.effect, 12);
        assert_eq!(config.rgb.hue, 0);
        assert_eq!(config.rgb.sat, 213);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert_eq!(
            parse_config("[timing]\nsleep_check_interval_ms = 0"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[wpm]\nscale_max = 0"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[rgb]\nhue = 300"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[rgb]\nenabled = yes"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[display]\ni2c_address = 0x80"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[matrix]\nrows = 5"),
            Err(ParseError::InvalidSection)
        );
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = parse_config("[display]\nrotation = 180\n").unwrap();
        assert_eq!(config, PanelConfig::default());
    }
}
