//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and initialises logging
//! - parses CLI arguments
//! - reads and fits the data
//! - prints the report (and optional summary/plot)
//! - writes optional exports

use clap::Parser;
use log::info;

use crate::cli::{Command, FitArgs, ShowArgs};
use crate::domain::{FitConfig, InputSource, OutputFormat};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `lsfit` binary.
pub fn run() -> Result<(), AppError> {
    // `.env` may carry RUST_LOG and LSFIT_INPUT, so load it before anything reads the environment.
    dotenvy::dotenv().ok();
    init_logging();

    // `lsfit data.txt` and `lsfit < data.txt` behave like `lsfit fit ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Fit(args) => handle_fit(args),
        Command::Show(args) => handle_show(args),
    }
}

fn init_logging() {
    // Logs go to stderr; stdout is reserved for the report.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();
}

fn handle_fit(args: FitArgs) -> Result<(), AppError> {
    let config = fit_config_from_args(&args);
    let run = pipeline::run_fit(&config)?;
    info!(
        "fit {} samples: slope={} intercept={} r_squared={}",
        run.quality.n, run.fit.slope, run.fit.intercept, run.fit.r_squared
    );

    let fit_file = crate::io::build_fit_file(&run.fit, &run.quality, &run.stats);

    match config.format {
        OutputFormat::Text => println!("{}", crate::report::format_fit_report(&run.fit)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&fit_file)
                .map_err(|e| AppError::new(2, format!("Failed to serialize fit: {e}")))?;
            println!("{json}");
        }
    }

    if config.summary {
        println!();
        print!("{}", crate::report::format_summary(&run.stats, &run.quality));
        println!();
        print!("{}", crate::report::format_residual_table(&run.residuals));
    }

    if config.plot {
        println!();
        print!(
            "{}",
            crate::plot::render_ascii_plot(&run.residuals, &run.fit, config.plot_width, config.plot_height)
        );
    }

    // Optional exports.
    if let Some(path) = &config.export_residuals {
        crate::io::write_residuals_csv(path, &run.residuals)?;
        info!("wrote residuals to {}", path.display());
    }
    if let Some(path) = &config.export_fit {
        crate::io::write_fit_json(path, &fit_file)?;
        info!("wrote fit to {}", path.display());
    }

    Ok(())
}

fn handle_show(args: ShowArgs) -> Result<(), AppError> {
    let fit_file = crate::io::read_fit_json(&args.fit)?;
    println!("{}", crate::report::format_fit_report(&fit_file.fit));
    Ok(())
}

pub fn fit_config_from_args(args: &FitArgs) -> FitConfig {
    FitConfig {
        input: InputSource::from_arg(args.input.as_ref()),
        delimiter: args.delimiter,
        format: args.format,
        summary: args.summary,
        plot: args.plot,
        plot_width: args.width,
        plot_height: args.height,
        export_residuals: args.export.clone(),
        export_fit: args.export_fit.clone(),
    }
}

/// Rewrite argv so `lsfit` defaults to `lsfit fit`.
///
/// Rules:
/// - `lsfit`                       -> `lsfit fit`
/// - `lsfit data.txt --plot`       -> `lsfit fit data.txt --plot`
/// - `lsfit --plot`                -> `lsfit fit --plot`
/// - `lsfit --help/--version/-h`   -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("fit".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "fit" | "show");
    if is_subcommand {
        return argv;
    }

    argv.insert(1, "fit".to_string());
    argv
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_fit() {
        assert_eq!(rewrite_args(args(&["lsfit"])), args(&["lsfit", "fit"]));
        assert_eq!(
            rewrite_args(args(&["lsfit", "data.txt", "--plot"])),
            args(&["lsfit", "fit", "data.txt", "--plot"])
        );
        assert_eq!(rewrite_args(args(&["lsfit", "-"])), args(&["lsfit", "fit", "-"]));
        assert_eq!(rewrite_args(args(&["lsfit", "--summary"])), args(&["lsfit", "fit", "--summary"]));
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(rewrite_args(args(&["lsfit", "show", "f.json"])), args(&["lsfit", "show", "f.json"]));
        assert_eq!(rewrite_args(args(&["lsfit", "--help"])), args(&["lsfit", "--help"]));
        assert_eq!(rewrite_args(args(&["lsfit", "-V"])), args(&["lsfit", "-V"]));
    }

    #[test]
    fn config_maps_dash_to_stdin() {
        let cli = crate::cli::Cli::parse_from(["lsfit", "fit", "-", "--format", "json", "--export-fit", "fit.json"]);
        let Command::Fit(fit_args) = cli.command else {
            panic!("expected fit subcommand");
        };
        let config = fit_config_from_args(&fit_args);
        assert_eq!(config.input, InputSource::Stdin);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.export_fit, Some(PathBuf::from("fit.json")));
        assert!(!config.plot);
    }
}
