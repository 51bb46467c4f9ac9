use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::Table;
use tracing::info;

use u_assign::constructive::greedy_nearest_center;
use u_assign::dataset::{self, GeneratorConfig};
use u_assign::evaluation::total_cost;
use u_assign::experiment::{self, DataSource, ExperimentConfig};
use u_assign::local_search::{reassign_improve, CapacityPolicy, ReassignConfig};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write an instance as packages.csv and centers.csv
    #[command(visible_alias = "g")]
    Generate {
        #[arg(short, long, default_value_t = 100)]
        packages: usize,

        #[arg(short, long, default_value_t = 5)]
        centers: usize,

        #[arg(short, long)]
        seed: Option<u64>,

        /// Sample orders from a delivery dataset instead of synthetic data
        #[arg(long)]
        delivery_csv: Option<PathBuf>,

        /// Output folder
        #[arg(short, long)]
        out_dir: PathBuf,
    },
    /// Assign packages greedily, then refine with local search
    Solve {
        #[arg(short, long)]
        packages: PathBuf,

        #[arg(short, long)]
        centers: PathBuf,

        #[arg(short, long, default_value_t = 1000)]
        max_iterations: usize,

        /// Let local search move packages into full centers
        #[arg(long)]
        unchecked_capacity: bool,

        /// Write the final assignment as CSV
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compare greedy and local search over several dataset sizes
    Experiment {
        /// JSON experiment configuration
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long, value_delimiter = ',')]
        sizes: Option<Vec<usize>>,

        /// Sample orders from a delivery dataset instead of synthetic data
        #[arg(long)]
        delivery_csv: Option<PathBuf>,

        #[arg(short, long)]
        seed: Option<u64>,

        #[arg(short, long, default_value = "experiment_results.csv")]
        output: PathBuf,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Generate {
            packages,
            centers,
            seed,
            delivery_csv,
            out_dir,
        } => {
            let mut config = GeneratorConfig::default()
                .with_packages(packages)
                .with_centers(centers);
            config.seed = seed;
            let instance = match delivery_csv {
                Some(path) => dataset::load_delivery_csv(&path, &config)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => dataset::generate(&config)?,
            };
            dataset::write_instance(&out_dir, &instance)
                .with_context(|| format!("writing instance to {}", out_dir.display()))?;
            info!(
                "wrote {} packages and {} centers",
                instance.num_packages(),
                instance.num_centers()
            );
        }
        Commands::Solve {
            packages,
            centers,
            max_iterations,
            unchecked_capacity,
            output,
        } => {
            let instance = dataset::read_instance(&packages, &centers)
                .context("loading packages and centers")?;
            let config = ReassignConfig::default()
                .with_max_iterations(max_iterations)
                .with_capacity(if unchecked_capacity {
                    CapacityPolicy::Unchecked
                } else {
                    CapacityPolicy::Enforced
                });

            let greedy = greedy_nearest_center(&instance);
            let greedy_cost = total_cost(&greedy, &instance);
            let result = reassign_improve(&greedy, &instance, &config);

            let mut table = Table::new();
            table.set_header(vec!["", "Greedy", "Local search"]);
            table.add_row(vec![
                "Total cost".to_string(),
                format!("{greedy_cost:.2}"),
                format!("{:.2}", result.cost),
            ]);
            table.add_row(vec![
                "Assigned".to_string(),
                greedy.num_assigned().to_string(),
                result.assignment.num_assigned().to_string(),
            ]);
            println!("{table}");
            println!(
                "Improvement: {}% ({} moves, {} iterations{})",
                experiment::improvement_pct(greedy_cost, result.cost),
                result.moves,
                result.iterations,
                if result.converged { "" } else { ", iteration cap reached" }
            );

            let unassigned: Vec<&str> = result
                .assignment
                .unassigned()
                .into_iter()
                .map(|p| instance.packages()[p].id())
                .collect();
            if !unassigned.is_empty() {
                println!("Unassigned ({}): {}", unassigned.len(), unassigned.join(", "));
            }

            if let Some(path) = output {
                let file = File::create(&path)
                    .with_context(|| format!("creating {}", path.display()))?;
                dataset::write_assignment(file, &instance, &result.assignment)?;
                info!("wrote assignment to {}", path.display());
            }
        }
        Commands::Experiment {
            config,
            sizes,
            delivery_csv,
            seed,
            output,
        } => {
            let mut config = match config {
                Some(path) => ExperimentConfig::from_json_file(&path)
                    .with_context(|| format!("reading {}", path.display()))?,
                None => ExperimentConfig::default(),
            };
            if let Some(sizes) = sizes {
                config.sizes = sizes;
            }
            if let Some(path) = delivery_csv {
                config.source = DataSource::DeliveryCsv { path };
            }
            if seed.is_some() {
                config.generator.seed = seed;
            }

            let records = experiment::run_experiments(&config)?;

            let mut table = Table::new();
            table.set_header(vec![
                "N",
                "Greedy cost",
                "Local search cost",
                "Improvement (%)",
                "Unassigned",
                "Moves",
            ]);
            for r in &records {
                table.add_row(vec![
                    r.size.to_string(),
                    format!("{:.2}", r.greedy_cost),
                    format!("{:.2}", r.local_search_cost),
                    r.improvement_pct.to_string(),
                    r.unassigned.to_string(),
                    r.moves.to_string(),
                ]);
            }
            println!("{table}");

            experiment::write_results_csv(&output, &records)
                .with_context(|| format!("writing {}", output.display()))?;
            info!("wrote results to {}", output.display());
        }
    }

    Ok(())
}
