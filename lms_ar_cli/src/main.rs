mod config;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use lms_ar::ar::UniformNoise;
use lms_ar::chart::ChartSet;
use lms_ar::codegen::{octave_source, write_source};
use lms_ar::{simulate, simulate_with_noise, RawParams, Simulation};

use config::Config;

#[derive(Parser)]
#[command(
    name = "lms-ar",
    version,
    about = "LMS adaptive filtering of a second order autoregressive process"
)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Parameters given on the command line take precedence over the config file.
#[derive(Args, Debug, Default)]
struct ParamArgs {
    /// Number of samples
    #[arg(long)]
    n: Option<String>,

    /// Initial value u(1)
    #[arg(long, allow_hyphen_values = true)]
    u1: Option<String>,

    /// Initial value u(2)
    #[arg(long, allow_hyphen_values = true)]
    u2: Option<String>,

    /// LMS step size
    #[arg(long, allow_hyphen_values = true)]
    mu: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation and print a summary
    Run {
        #[command(flatten)]
        params: ParamArgs,

        /// Seed the noise for reproducible runs
        #[arg(long)]
        seed: Option<u64>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,

        /// Write chart data as JSON to this file
        #[arg(long)]
        charts: Option<PathBuf>,
    },

    /// Generate GNU Octave code for the same simulation
    Code {
        #[command(flatten)]
        params: ParamArgs,

        /// Output file
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Print the code instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        tracing_subscriber::filter::LevelFilter::DEBUG
    } else {
        tracing_subscriber::filter::LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .init();

    let config = config::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Run {
            params,
            seed,
            json,
            charts,
        } => {
            let seed = seed.or(config.simulation.seed);
            let simulation = cmd_run(&merge_params(&params, &config), seed)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&simulation)?);
            } else {
                print_summary(&simulation, seed);
            }

            if let Some(path) = charts.or(config.output.chart_path) {
                write_charts(&simulation, &path)?;
                info!(path = %path.display(), "wrote chart data");
            }
        }
        Commands::Code {
            params,
            out,
            stdout,
        } => {
            let source = octave_source(&merge_params(&params, &config));
            if stdout {
                println!("{}", source);
            } else {
                let path = out.unwrap_or(config.output.code_path);
                write_source(&source, &path)?;
                println!("Wrote {}", path.display());
            }
        }
    }

    Ok(())
}

fn merge_params(args: &ParamArgs, config: &Config) -> RawParams {
    let configured = config.simulation.raw_params();
    let pick = |arg: &Option<String>, configured: String| arg.clone().unwrap_or(configured);
    RawParams {
        n: pick(&args.n, configured.n),
        u1: pick(&args.u1, configured.u1),
        u2: pick(&args.u2, configured.u2),
        mu: pick(&args.mu, configured.mu),
    }
}

fn cmd_run(raw: &RawParams, seed: Option<u64>) -> Result<Simulation> {
    let params = raw.parse().context("invalid simulation parameters")?;
    let simulation = match seed {
        Some(seed) => simulate_with_noise(&params, &mut UniformNoise::seeded(seed)),
        None => simulate(&params),
    };
    Ok(simulation)
}

fn print_summary(simulation: &Simulation, seed: Option<u64>) {
    let params = &simulation.params;
    let summary = simulation.summary();
    println!(
        "N = {}, u1 = {}, u2 = {}, mu = {}",
        params.sample_count, params.u1, params.u2, params.mu
    );
    match seed {
        Some(seed) => println!("Noise seed: {}", seed),
        None => println!("Noise seed: none"),
    }
    println!();
    println!("           LMS          optimal");
    println!(
        "w1   {:>12.6} {:>12.6}",
        summary.final_weights[0], simulation.w_opt[0]
    );
    println!(
        "w2   {:>12.6} {:>12.6}",
        summary.final_weights[1], simulation.w_opt[1]
    );
    println!();
    println!("Weight error:      {:.6}", summary.weight_error);
    println!("Steady state MSE:  {:.6}", summary.steady_state_mse);
    println!("Peak weight:       {:.6}", summary.peak_weight);
}

fn write_charts(simulation: &Simulation, path: &Path) -> Result<()> {
    let charts = ChartSet::from_simulation(simulation);
    let json = serde_json::to_string(&charts)?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_override_config() {
        let config: Config = toml::from_str("[simulation]\nn = 300\nmu = 0.02").unwrap();
        let args = ParamArgs {
            mu: Some("0.5".into()),
            ..ParamArgs::default()
        };
        let params = merge_params(&args, &config);
        assert_eq!(params, RawParams::new("300", "0", "0", "0.5"));
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "lms-ar", "run", "--n", "100", "--u1", "-0.5", "--mu", "0.01", "--seed", "4",
        ])
        .unwrap();
        match cli.command {
            Commands::Run { params, seed, .. } => {
                assert_eq!(params.n.as_deref(), Some("100"));
                assert_eq!(params.u1.as_deref(), Some("-0.5"));
                assert_eq!(params.u2, None);
                assert_eq!(seed, Some(4));
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_run_is_reproducible_with_seed() {
        let raw = RawParams::new("64", "0", "0", "0.1");
        let a = cmd_run(&raw, Some(11)).unwrap();
        let b = cmd_run(&raw, Some(11)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_run_rejects_invalid_params() {
        let error = cmd_run(&RawParams::new("ten", "0", "0", "0.1"), None).unwrap_err();
        assert_eq!(error.to_string(), "invalid simulation parameters");
        assert!(format!("{:#}", error).contains("not a number"));
    }

    #[test]
    fn test_write_charts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("charts.json");
        let simulation = cmd_run(&RawParams::new("10", "0", "0", "0.1"), Some(1)).unwrap();
        write_charts(&simulation, &path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["labels"].as_array().unwrap().len(), 10);
        assert_eq!(json["xAxis"]["tickStep"], 2);
    }
}
