// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{Context, Result};
use bmi_calculator::{compute, tips_for, VERSION};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "bmi-calculator", version = VERSION, about = "Body Mass Index calculator")]
struct Cli {
    /// Log file for the interactive form (stdout belongs to the terminal UI)
    #[arg(long, value_name = "FILE", default_value = "bmi-calculator.log")]
    log_file: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate once and print the result
    Calc {
        /// Weight in kilograms
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        weight: String,

        /// Height in centimeters
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        height: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn env_filter() -> tracing_subscriber::EnvFilter {
    // RUST_LOG controls the level, e.g. RUST_LOG=debug
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
}

/// The terminal form owns stdout, so its logs go to a file
fn init_file_logging(log_file: &Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file: {:?}", log_file))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Calc { weight, height, json }) => {
            init_stderr_logging();
            write_calc(&mut io::stdout().lock(), &weight, &height, json)
        }
        None => {
            init_file_logging(&cli.log_file)?;
            run_ui_mode()
        }
    }
}

fn write_calc<W: Write>(out: &mut W, weight: &str, height: &str, as_json: bool) -> Result<()> {
    // Unparseable input is a no-op, same as pressing the button on a half-filled form
    let Some(result) = compute(weight, height) else {
        tracing::debug!("calc: incomplete input, nothing to print");
        return Ok(());
    };
    let tips = tips_for(result.category);

    if as_json {
        let output = json!({
            "bmi": Some(result.value).filter(|v| v.is_finite()),
            "display": result.display_value(),
            "category": result.category,
            "tips": tips,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        return Ok(());
    }

    writeln!(out, "BMI: {}", result.display_value())?;
    writeln!(out, "Category: {}", result.category.label())?;
    if !tips.is_empty() {
        writeln!(out, "\n{}:", bmi_calculator::RECOMMENDATIONS_TITLE)?;
        for tip in tips {
            writeln!(out, "  • {}", tip)?;
        }
    }

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode() -> Result<()> {
    tracing::info!("Starting BMI Calculator v{}", VERSION);

    let mut app = ui::App::new();
    ui::run_ui(&mut app)?;

    tracing::info!("UI closed");
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode() -> Result<()> {
    anyhow::bail!("TUI mode not available. Rebuild with --features tui, or use `calc` / bmi-server")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc_output(weight: &str, height: &str, as_json: bool) -> String {
        let mut out = Vec::new();
        write_calc(&mut out, weight, height, as_json).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_calc_text_underweight() {
        let output = calc_output("45", "170", false);
        assert!(output.starts_with("BMI: 15.6\nCategory: Underweight\n"));
        assert!(output.contains("  • Eat more frequently throughout the day"));
        assert_eq!(output.matches("  • ").count(), 6);
    }

    #[test]
    fn test_calc_json_normal() {
        let output: serde_json::Value = serde_json::from_str(&calc_output("70", "175", true)).unwrap();
        assert_eq!(output["bmi"], 22.9);
        assert_eq!(output["category"], "normal");
        assert_eq!(output["tips"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_calc_incomplete_prints_nothing() {
        assert!(calc_output("", "170", false).is_empty());
        assert!(calc_output("70", "abc", true).is_empty());
    }

    #[test]
    fn test_calc_parses_without_log_file_flag() {
        let cli = Cli::try_parse_from(["bmi-calculator", "calc", "--weight", "70", "--height", "175"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Calc { json: false, .. })));
    }
}
