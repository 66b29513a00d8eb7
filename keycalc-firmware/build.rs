//! Build script for keycalc-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Validates calculator.toml at compile time and bakes the timing in

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use keycalc_core::config::Timing;
use serde::Deserialize;

/// Layout of calculator.toml
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CalculatorToml {
    #[serde(default)]
    timing: Timing,
}

fn main() {
    setup_linker();
    let timing = validate_config();
    write_timing(&timing);
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

/// Validate calculator.toml configuration at compile time
fn validate_config() -> Timing {
    // Re-run if calculator.toml changes
    println!("cargo:rerun-if-changed=calculator.toml");

    let config_path = Path::new("calculator.toml");

    // Check if config file exists
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: calculator.toml not found!                               ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a calculator.toml configuration file.     ║\n\
            ║  Please create one in the keycalc-firmware directory.            ║\n\
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
                ║  ERROR: Failed to read calculator.toml                           ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse TOML syntax and field types
    let config: CalculatorToml = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid calculator.toml                                  ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    // Validate value ranges
    if let Err(e) = config.timing.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid [timing] in calculator.toml                      ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            format_error_lines(&e.to_string())
        );
    }

    println!("cargo:warning=calculator.toml validated successfully");
    config.timing
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

/// Emit the validated timing as a constant for `config.rs`
fn write_timing(timing: &Timing) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let source = format!(
        "/// Timing from calculator.toml, validated at build time\n\
         pub const CONFIGURED: Timing = Timing {{\n    \
             debounce_ms: {},\n    \
             settle_ms: {},\n    \
             strobe_ms: {},\n\
         }};\n",
        timing.debounce_ms, timing.settle_ms, timing.strobe_ms
    );
    fs::write(out_dir.join("timing.rs"), source).unwrap();
}
