//! Build script for nat24-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Validates watch.toml at compile time

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

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

const SECTIONS: &[&str] = &["face", "entrance", "display", "clock"];
const ENTRANCE_ANIMATIONS: &[&str] = &["radius", "notch_spacing", "hour_sweep"];
const CURVES: &[&str] = &["linear", "ease_in", "ease_out", "ease_in_out"];

/// Validate watch.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=watch.toml");

    let config_path = Path::new("watch.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: watch.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds watch.toml as its face configuration.       ║\n\
            ║  Please create one in the nat24-firmware directory.              ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read watch.toml                                ║\n\
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
                ║  ERROR: Invalid TOML syntax in watch.toml                        ║\n\
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
    validate_face(&config, &mut errors);
    validate_entrance(&config, &mut errors);
    validate_display(&config, &mut errors);
    validate_clock(&config, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid watch configuration                              ║\n\
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

    println!("cargo:warning=watch.toml validated successfully");
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

/// The firmware parser rejects unknown sections
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(table) = config.as_table() else {
        return;
    };

    for (name, value) in table {
        if !SECTIONS.contains(&name.as_str()) {
            errors.push(format!("unknown section [{}]", name));
        } else if !value.is_table() {
            errors.push(format!("'{}' must be a section", name));
        }
    }
}

fn check_choice(
    table: &toml::Table,
    section: &str,
    key: &str,
    choices: &[&str],
    errors: &mut Vec<String>,
) {
    match table.get(key) {
        None => {}
        Some(toml::Value::String(s)) if choices.contains(&s.as_str()) => {}
        Some(_) => errors.push(format!(
            "[{}] {} must be one of: {}",
            section,
            key,
            choices.join(", ")
        )),
    }
}

fn check_integer(
    table: &toml::Table,
    section: &str,
    key: &str,
    range: std::ops::RangeInclusive<i64>,
    errors: &mut Vec<String>,
) {
    match table.get(key) {
        None => {}
        Some(toml::Value::Integer(n)) if range.contains(n) => {}
        Some(_) => errors.push(format!(
            "[{}] {} must be {}-{}",
            section,
            key,
            range.start(),
            range.end()
        )),
    }
}

fn check_bool(table: &toml::Table, section: &str, key: &str, errors: &mut Vec<String>) {
    if let Some(value) = table.get(key) {
        if !value.is_bool() {
            errors.push(format!("[{}] {} must be true or false", section, key));
        }
    }
}

fn validate_face(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(face) = config.get("face").and_then(|f| f.as_table()) else {
        return;
    };

    check_choice(face, "face", "clock_style", &["24h", "12h"], errors);
    check_choice(face, "face", "tick_unit", &["minute", "second"], errors);
    check_choice(face, "face", "notch_style", &["dot", "tick"], errors);
    check_choice(face, "face", "activity", &["flag", "counted"], errors);
}

fn validate_entrance(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(entrance) = config.get("entrance").and_then(|e| e.as_table()) else {
        return;
    };

    for (key, value) in entrance {
        if key == "enabled" {
            check_bool(entrance, "entrance", key, errors);
            continue;
        }
        if !ENTRANCE_ANIMATIONS.contains(&key.as_str()) {
            errors.push(format!("[entrance] unknown animation '{}'", key));
            continue;
        }

        let section = format!("entrance.{}", key);
        let Some(animation) = value.as_table() else {
            errors.push(format!("[{}] must be a section", section));
            continue;
        };

        check_integer(animation, &section, "duration_ms", 0..=60_000, errors);
        check_integer(animation, &section, "delay_ms", 0..=60_000, errors);
        check_choice(animation, &section, "curve", CURVES, errors);
        check_bool(animation, &section, "lifecycle", errors);
    }
}

fn validate_display(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(display) = config.get("display").and_then(|d| d.as_table()) else {
        return;
    };

    check_integer(display, "display", "frame_interval_ms", 1..=1000, errors);
    check_integer(display, "display", "vcom_interval_ms", 1..=u16::MAX as i64, errors);
}

fn validate_clock(config: &toml::Value, errors: &mut Vec<String>) {
    let Some(clock) = config.get("clock").and_then(|c| c.as_table()) else {
        return;
    };

    match clock.get("initial") {
        None => {}
        Some(toml::Value::String(time)) if is_wall_time(time) => {}
        Some(_) => errors.push("[clock] initial must be \"HH:MM\" or \"HH:MM:SS\"".to_string()),
    }
}

fn is_wall_time(time: &str) -> bool {
    let parts: Vec<_> = time.split(':').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return false;
    }

    let limits = [23u8, 59, 59];
    parts
        .iter()
        .zip(limits)
        .all(|(part, max)| part.parse::<u8>().map_or(false, |n| n <= max))
}
