//! Build script for keypanel-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates keyboard.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Linker scripts for cortex-m-rt, defmt and the RP2040 boot2 block
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate keyboard.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=keyboard.toml");

    let config_path = Path::new("keyboard.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: keyboard.toml not found!                                 ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds keyboard.toml from the keypanel-firmware    ║\n\
            ║  directory. Create one (an empty file selects the defaults).     ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read keyboard.toml                             ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in keyboard.toml                     ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    validate_sections(&config, &mut errors);
    validate_ranges(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid values in keyboard.toml                          ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=keyboard.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Only the sections the firmware parser understands are allowed
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(table) = config.as_table() else {
        return;
    };

    for (key, value) in table {
        match (key.as_str(), value) {
            ("display" | "timing" | "wpm" | "rgb", toml::Value::Table(_)) => {}
            ("display" | "timing" | "wpm" | "rgb", _) => {
                errors.push(format!("'{}' must be a [{}] section", key, key))
            }
            (_, toml::Value::Table(_)) => errors.push(format!("unknown section [{}]", key)),
            _ => {}
        }
    }
}

/// Check numeric limits the firmware parser rejects at runtime
fn validate_ranges(config: &toml::Value, errors: &mut Vec<String>) {
    let int = |section: &str, key: &str| -> Option<i64> {
        config
            .get(section)
            .and_then(|s| s.get(key))
            .and_then(|v| v.as_integer())
    };

    if let Some(addr) = int("display", "i2c_address") {
        if !(0..=0x7F).contains(&addr) {
            errors.push("[display] i2c_address must be a 7-bit address".to_string());
        }
    }

    for key in ["sleep_check_interval_ms", "bar_redraw_interval_ms"] {
        if let Some(v) = int("timing", key) {
            if v <= 0 {
                errors.push(format!("[timing] {} must be positive", key));
            }
        }
    }

    for key in ["scale_max", "sample_seconds", "sample_periods"] {
        if let Some(v) = int("wpm", key) {
            if v <= 0 {
                errors.push(format!("[wpm] {} must be positive", key));
            }
        }
    }
    if let Some(v) = int("wpm", "sample_periods") {
        if v > 64 {
            errors.push("[wpm] sample_periods must be at most 64".to_string());
        }
    }

    for key in ["effect", "hue", "sat", "val", "speed"] {
        if let Some(v) = int("rgb", key) {
            if !(0..=255).contains(&v) {
                errors.push(format!("[rgb] {} must be 0-255", key));
            }
        }
    }
}
