//! Timetabling CLI.
//!
//! Generate random instances and solve them with the pheromone search.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use u_timetable::aco::{solve, FitnessReport, SearchConfig, ViolationKind};
use u_timetable::generator::{InstanceGenerator, InstanceGeneratorConfig};
use u_timetable::models::{ProblemInstance, Schedule};
use u_timetable::report::TimetableReport;
use u_timetable::validation::ValidationError;

#[derive(Parser)]
#[command(name = "u-timetable")]
#[command(about = "Course timetabling by pheromone-reinforced stochastic search")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random instance and write it as JSON.
    Generate {
        /// Instance size preset
        #[arg(short, long, value_enum, default_value_t = Preset::Default)]
        preset: Preset,
        /// Random seed
        #[arg(short, long, default_value = "42")]
        seed: u64,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Solve an instance and print the timetable.
    Solve {
        /// Instance JSON file (a generated instance is used if omitted)
        #[arg(short, long)]
        instance: Option<PathBuf>,
        /// Preset for the generated instance
        #[arg(long, value_enum, default_value_t = Preset::Default)]
        preset: Preset,
        /// Seed for the generated instance
        #[arg(long, default_value = "42")]
        instance_seed: u64,
        /// Search config JSON file
        #[arg(short, long, env = "U_TIMETABLE_CONFIG")]
        config: Option<PathBuf>,
        /// Iterations (overrides config)
        #[arg(long)]
        iterations: Option<usize>,
        /// Evaporation factor (overrides config)
        #[arg(long)]
        evaporation: Option<f64>,
        /// Search seed (overrides config)
        #[arg(long)]
        seed: Option<u64>,
        /// List violations of the final timetable
        #[arg(long)]
        violations: bool,
        /// Output file for results (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct SolveResult<'a> {
    seed: Option<u64>,
    iterations: usize,
    improvements: usize,
    fitness: f64,
    schedule: &'a Schedule,
    timetable: &'a TimetableReport,
    /// Scored against the final field, so its total differs from `fitness`.
    final_field_breakdown: &'a FitnessReport,
    history: &'a [f64],
}

/// Generator presets selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Preset {
    Small,
    Default,
    Constrained,
}

impl Preset {
    fn config(self) -> InstanceGeneratorConfig {
        match self {
            Preset::Small => InstanceGeneratorConfig::small(),
            Preset::Default => InstanceGeneratorConfig::default(),
            Preset::Constrained => InstanceGeneratorConfig::constrained(),
        }
    }
}

fn validation_failure(errors: Vec<ValidationError>) -> anyhow::Error {
    let lines: Vec<String> = errors.iter().map(ToString::to_string).collect();
    anyhow!("invalid input:\n  {}", lines.join("\n  "))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate {
            preset,
            seed,
            output,
        } => {
            let instance = InstanceGenerator::new(preset.config(), seed).generate();
            match output {
                Some(path) => {
                    write_json(&path, &instance)?;
                    info!(path = %path.display(), "instance written");
                }
                None => println!("{}", serde_json::to_string_pretty(&instance)?),
            }
        }

        Commands::Solve {
            instance,
            preset,
            instance_seed,
            config,
            iterations,
            evaporation,
            seed,
            violations,
            output,
        } => {
            let instance: ProblemInstance = match instance {
                Some(path) => read_json(&path)?,
                None => InstanceGenerator::new(preset.config(), instance_seed).generate(),
            };

            let mut config: SearchConfig = match config {
                Some(path) => read_json(&path)?,
                None => SearchConfig::default(),
            };
            if let Some(n) = iterations {
                config.iterations = n;
            }
            if let Some(e) = evaporation {
                config.evaporation = e;
            }
            if let Some(s) = seed {
                config.seed = Some(s);
            }

            let outcome = solve(&instance, &config).map_err(validation_failure)?;
            let timetable = TimetableReport::build(&instance, &outcome.best, outcome.fitness);
            let breakdown = outcome.breakdown(&instance, config.penalties);

            println!("{timetable}");
            println!(
                "Feasible: {} ({} violations)",
                breakdown.is_feasible(),
                breakdown.violations.len()
            );

            if violations {
                for kind in ViolationKind::ALL {
                    let n = breakdown.count(kind);
                    if n > 0 {
                        println!("  {kind:?}: {n}");
                    }
                }
                for v in &breakdown.violations {
                    println!(
                        "  {}: {:?} (-{})",
                        instance.classes[v.class].display_name(),
                        v.kind,
                        v.penalty
                    );
                }
            }

            if let Some(path) = output {
                let result = SolveResult {
                    seed: outcome.seed,
                    iterations: outcome.iterations,
                    improvements: outcome.improvements,
                    fitness: outcome.fitness,
                    schedule: &outcome.best,
                    timetable: &timetable,
                    final_field_breakdown: &breakdown,
                    history: &outcome.history,
                };
                write_json(&path, &result)?;
                println!("\nResults written to: {}", path.display());
            }
        }
    }

    Ok(())
}
