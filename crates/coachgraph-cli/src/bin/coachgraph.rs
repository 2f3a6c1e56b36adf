//! Coachgraph CLI - roll a feature out over a coaching graph
//!
//! Usage:
//!   coachgraph total <graph.json> <user> <feature>          # Infect the user's whole component
//!   coachgraph limited <graph.json> <feature> <min> <max>   # Infect between min and max users
//!   coachgraph exact <graph.json> <feature> <count>         # Infect exactly count users
//!   coachgraph components <graph.json>                      # Report component structure
//!   coachgraph generate <out.json> <classes> <min> <max> <rate>
//!
//! A feature prefixed with `!` is removed instead of added. Pass `-o <file>` to
//! write the updated graph, and `-f json` for machine-readable output.
//! Logging is controlled with `RUST_LOG` (e.g. `RUST_LOG=coachgraph_core=debug`).

use clap::{Parser, Subcommand, ValueEnum};
use coachgraph_core::generate::{random_coaching_graph, GeneratorParams};
use coachgraph_core::metrics::{summarize, GraphSummary};
use coachgraph_core::{
    exact_limited_infection_with_config, limited_infection_with_config, storage,
    total_infection, CoachingGraph, ComponentOrder, Component, ExecError, FeatureUpdate,
    InfectionConfig, InfectionOutcome,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "coachgraph")]
#[command(version)]
#[command(about = "Coachgraph - feature rollout over coaching graphs")]
#[command(
    long_about = "Infect users of a coaching graph with a feature while keeping coaches and \
                  students on the same feature set. A feature written as !name removes name."
)]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary, global = true)]
    format: OutputFormat,

    /// Order in which components and classes are packed
    #[arg(long, value_enum, default_value_t = PackingOrder::LargestFirst, global = true)]
    order: PackingOrder,

    /// Write the updated graph to this file
    #[arg(short, long, value_name = "FILE", global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Infect the whole connected component of a user
    Total {
        #[arg(value_name = "GRAPH")]
        graph: PathBuf,
        #[arg(value_name = "USER")]
        user: String,
        #[arg(value_name = "FEATURE")]
        feature: String,
    },
    /// Infect between MIN and MAX users (inclusive); MIN <= 0 infects nobody
    Limited {
        #[arg(value_name = "GRAPH")]
        graph: PathBuf,
        #[arg(value_name = "FEATURE")]
        feature: String,
        #[arg(value_name = "MIN", allow_negative_numbers = true)]
        min_users: i64,
        #[arg(value_name = "MAX", allow_negative_numbers = true)]
        max_users: i64,
    },
    /// Infect exactly COUNT users using whole components only
    Exact {
        #[arg(value_name = "GRAPH")]
        graph: PathBuf,
        #[arg(value_name = "FEATURE")]
        feature: String,
        #[arg(value_name = "COUNT")]
        num_users: usize,
    },
    /// Report users, coaches, and connected component sizes
    Components {
        #[arg(value_name = "GRAPH")]
        graph: PathBuf,
    },
    /// Generate a random coaching graph
    Generate {
        #[arg(value_name = "OUT")]
        out: PathBuf,
        #[arg(value_name = "NUM_CLASSES")]
        num_classes: usize,
        /// Minimum number of students in a class
        #[arg(value_name = "MIN_SIZE")]
        min_size: usize,
        /// Maximum number of students in a class
        #[arg(value_name = "MAX_SIZE")]
        max_size: usize,
        /// Rate of existing users placed in a class
        #[arg(value_name = "EXISTING_RATE")]
        existing_rate: f64,
        /// RNG seed for reproducible graphs
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Summary,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum PackingOrder {
    LargestFirst,
    Discovery,
}

impl From<PackingOrder> for ComponentOrder {
    fn from(order: PackingOrder) -> Self {
        match order {
            PackingOrder::LargestFirst => ComponentOrder::LargestFirst,
            PackingOrder::Discovery => ComponentOrder::Discovery,
        }
    }
}

/// JSON report for an infection command.
#[derive(Serialize)]
struct InfectionReport<'a> {
    mode: &'a str,
    feature: &'a str,
    success: bool,
    infected: Vec<&'a str>,
    summary: GraphSummary,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => {}
        Ok(false) => process::exit(2),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Executes the selected command. `Ok(false)` means an infeasible infection.
fn run(cli: &Cli) -> Result<bool, ExecError> {
    let config = InfectionConfig {
        component_order: cli.order.into(),
    };

    match &cli.command {
        Command::Total {
            graph,
            user,
            feature,
        } => {
            FeatureUpdate::try_parse(feature)?;
            let mut g = storage::load_graph(graph)?;
            let infected = total_infection(&mut g, user, feature)?;
            let outcome = InfectionOutcome::Infected(infected);
            finish(cli, "total", feature, &g, &outcome)
        }
        Command::Limited {
            graph,
            feature,
            min_users,
            max_users,
        } => {
            FeatureUpdate::try_parse(feature)?;
            let mut g = storage::load_graph(graph)?;
            let min_users = usize::try_from(*min_users).unwrap_or(0);
            let max_users = usize::try_from(*max_users).unwrap_or(0);
            let outcome =
                limited_infection_with_config(&mut g, feature, min_users, max_users, &config);
            finish(cli, "limited", feature, &g, &outcome)
        }
        Command::Exact {
            graph,
            feature,
            num_users,
        } => {
            FeatureUpdate::try_parse(feature)?;
            let mut g = storage::load_graph(graph)?;
            let outcome = exact_limited_infection_with_config(&mut g, feature, *num_users, &config);
            finish(cli, "exact", feature, &g, &outcome)
        }
        Command::Components { graph } => {
            let g = storage::load_graph(graph)?;
            print_components(cli.format, &g)?;
            Ok(true)
        }
        Command::Generate {
            out,
            num_classes,
            min_size,
            max_size,
            existing_rate,
            seed,
        } => {
            let params = GeneratorParams {
                num_classes: *num_classes,
                min_size: *min_size,
                max_size: *max_size,
                existing_rate: *existing_rate,
            };
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_entropy(),
            };
            let g = random_coaching_graph(&mut rng, &params)?;
            storage::save_graph(out, &g)?;
            println!(
                "✓ Generated {} users in {} classes -> {}",
                g.len(),
                num_classes,
                out.display()
            );
            Ok(true)
        }
    }
}

fn finish(
    cli: &Cli,
    mode: &str,
    feature: &str,
    graph: &CoachingGraph,
    outcome: &InfectionOutcome,
) -> Result<bool, ExecError> {
    match cli.format {
        OutputFormat::Json => {
            let report = InfectionReport {
                mode,
                feature,
                success: outcome.is_success(),
                infected: outcome
                    .infected()
                    .map(|users| users.iter().map(|id| id.as_str()).collect())
                    .unwrap_or_default(),
                summary: summarize(graph),
            };
            print_json(&report)?;
        }
        OutputFormat::Summary => match outcome.infected() {
            Some(users) => {
                println!(
                    "✓ {} infection with '{}' touched {} users\n",
                    mode,
                    feature,
                    users.len()
                );
                print_user_features(graph);
            }
            None => {
                println!("✗ {} infection with '{}' is infeasible; graph unchanged", mode, feature);
            }
        },
    }

    if outcome.is_success() {
        if let Some(path) = &cli.output {
            write_graph(path, graph)?;
        }
    }
    Ok(outcome.is_success())
}

fn write_graph(path: &Path, graph: &CoachingGraph) -> Result<(), ExecError> {
    storage::save_graph(path, graph)?;
    tracing::info!(path = %path.display(), "wrote updated graph");
    Ok(())
}

fn print_user_features(graph: &CoachingGraph) {
    for user in graph.users_sorted() {
        let features: Vec<&str> = user.features().iter().map(String::as_str).collect();
        println!("User {} has features [{}]", user.id(), features.join(", "));
    }
}

fn print_components(format: OutputFormat, graph: &CoachingGraph) -> Result<(), ExecError> {
    let components = graph.all_connected_components();
    match format {
        OutputFormat::Json => {
            let listed: Vec<Vec<&str>> = components.iter().map(component_ids).collect();
            print_json(&serde_json::json!({
                "summary": summarize(graph),
                "components": listed,
            }))?;
        }
        OutputFormat::Summary => {
            let s = summarize(graph);
            println!(
                "{} users, {} coaching edges, {} coaches, {} singletons",
                s.users, s.coaching_edges, s.coaches, s.singletons
            );
            println!("\nComponents ({}):", components.len());
            for (i, component) in components.iter().enumerate() {
                println!(
                    "  #{}: {} users [{}]",
                    i,
                    component.len(),
                    component_ids(component).join(", ")
                );
            }
        }
    }
    Ok(())
}

fn component_ids(component: &Component) -> Vec<&str> {
    component.iter().map(|id| id.as_str()).collect()
}

fn print_json<T: Serialize>(value: &T) -> Result<(), ExecError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| ExecError::Internal(format!("failed to serialize output: {}", e)))?;
    println!("{}", json);
    Ok(())
}
