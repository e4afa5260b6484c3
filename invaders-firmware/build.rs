//! Build script for invaders-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates game.toml and compiles it into constants

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    let settings = validate_config();
    write_constants(&settings);
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

/// Validated values from game.toml
struct Settings {
    frame_delay_ms: i64,
    vop: i64,
    temp_coeff: i64,
    bias: i64,
}

/// Validate game.toml at compile time
fn validate_config() -> Settings {
    // Re-run if game.toml changes
    println!("cargo:rerun-if-changed=game.toml");

    let config_path = Path::new("game.toml");

    // Check if config file exists
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: game.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a game.toml configuration file.           ║\n\
            ║  Please create one in the invaders-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    // Read the config file
    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read game.toml                                 ║\n\
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
                ║  ERROR: Invalid TOML syntax in game.toml                         ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();

    let frame_delay_ms = integer_in(&config, "game", "frame_delay_ms", 1, 10_000, &mut errors);
    let vop = integer_in(&config, "display", "vop", 0, 0x7F, &mut errors);
    let temp_coeff = integer_in(&config, "display", "temp_coeff", 0, 3, &mut errors);
    let bias = integer_in(&config, "display", "bias", 0, 7, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid game.toml configuration                          ║\n\
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

    println!("cargo:warning=game.toml validated successfully");

    Settings {
        frame_delay_ms,
        vop,
        temp_coeff,
        bias,
    }
}

/// Look up `[section] key` and check it is an integer in `min..=max`
///
/// Problems are pushed onto `errors`; the returned value is only
/// meaningful when no error was recorded.
fn integer_in(
    config: &toml::Value,
    section: &str,
    key: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) -> i64 {
    let table = match config.get(section) {
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            errors.push(format!("[{}] must be a table", section));
            return 0;
        }
        None => {
            errors.push(format!("Missing [{}] section", section));
            return 0;
        }
    };

    match table.get(key) {
        Some(toml::Value::Integer(v)) if (min..=max).contains(v) => *v,
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
            0
        }
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            0
        }
        None => {
            errors.push(format!("[{}] missing '{}'", section, key));
            0
        }
    }
}

/// Emit the validated values as Rust constants in OUT_DIR
fn write_constants(settings: &Settings) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("game_config.rs")).unwrap();

    writeln!(f, "// Generated by build.rs from game.toml").unwrap();
    writeln!(f, "pub const FRAME_DELAY_MS: u32 = {};", settings.frame_delay_ms).unwrap();
    writeln!(f, "pub const DISPLAY_VOP: u8 = {:#04x};", settings.vop).unwrap();
    writeln!(f, "pub const DISPLAY_TEMP_COEFF: u8 = {};", settings.temp_coeff).unwrap();
    writeln!(f, "pub const DISPLAY_BIAS: u8 = {};", settings.bias).unwrap();
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| format!("║  {:<64} ║", truncate_line(line, 64)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Shorten a line to at most `width` characters, marking the cut with "..."
///
/// Counts characters, not bytes, so multi-byte text in TOML errors never
/// splits a code point.
fn truncate_line(line: &str, width: usize) -> String {
    if line.chars().count() > width {
        let kept: String = line.chars().take(width - 3).collect();
        format!("{}...", kept)
    } else {
        line.to_string()
    }
}

