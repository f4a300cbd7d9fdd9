//! Command-line report over the bundled country dataset
//!
//! Reference consumer of the library: lists, details, chart series, and
//! comparisons printed as text or JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clima_scorer::charts::ChartType;
use clima_scorer::{ClimaConfig, CountryData, SortOption};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Clima climate justice report
#[derive(Parser, Debug)]
#[command(name = "clima_report", version, about)]
struct Cli {
    /// Dataset path (overrides CLIMA_DATA_PATH)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List countries, optionally filtered by name prefix
    List {
        #[arg(long, default_value = "")]
        prefix: String,
        /// Sort option (defaults to CLIMA_DEFAULT_SORT)
        #[arg(long)]
        sort: Option<SortOption>,
        #[arg(long)]
        json: bool,
    },
    /// Score, components, rank, and region of one country
    Show { id: String },
    /// Build a chart series
    Chart {
        chart: ChartType,
        /// Bars in top-N charts (defaults to CLIMA_TOP_N)
        #[arg(long)]
        top: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// Compare two countries metric by metric
    Compare {
        left: String,
        right: String,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clima_scorer=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = ClimaConfig::from_env()?;
    if let Some(path) = cli.data {
        config.data_path = path;
    }

    let data = CountryData::load(&config.data_path)
        .with_context(|| format!("Failed to load dataset {:?}", config.data_path))?;

    match cli.command {
        Commands::List { prefix, sort, json } => {
            let option = sort.unwrap_or(config.default_sort);
            let countries = data.filter_and_sort(&prefix, option);

            if json {
                println!("{}", serde_json::to_string_pretty(&countries)?);
            } else if countries.is_empty() {
                println!("No countries found. Only prefixes of country names are searched.");
            } else {
                for country in countries {
                    println!(
                        "{:<4} {:<32} CJS {:>5.1}  ND-GAIN {:>5.1}  MtCO2 {:>9.1}",
                        country.id,
                        country.name,
                        data.score(country),
                        country.nd_gain_score,
                        country.territorial_mt_co2
                    );
                }
            }
        }
        Commands::Show { id } => {
            let country = data
                .get(&id)
                .with_context(|| format!("Unknown country id '{}'", id))?;
            let parts = data.components(country);

            println!("{} ({})", country.name, data.region_of(country));
            println!(
                "  Clima Justice Score: {:.1} (rank {} of {})",
                parts.score,
                data.rank_of(country),
                data.len()
            );
            println!("  Emissions component: {:.3}", parts.emissions);
            println!("  Readiness component: {:.3}", parts.readiness);
            println!("  ND-Gain Score:       {:.1}", country.nd_gain_score);
            println!("  Territorial MtCO2:   {:.1}", country.territorial_mt_co2);
        }
        Commands::Chart { chart, top, json } => {
            let top_n = top.unwrap_or(config.top_n);
            let series = chart.build(&data, top_n);

            if json {
                println!("{}", serde_json::to_string_pretty(&series)?);
            } else {
                println!("{}", chart.title(top_n));
                print!("{}", series.to_table());
            }
        }
        Commands::Compare { left, right, json } => {
            let l = data
                .get(&left)
                .with_context(|| format!("Unknown country id '{}'", left))?;
            let r = data
                .get(&right)
                .with_context(|| format!("Unknown country id '{}'", right))?;
            let comparison = data.compare(l, r);

            if json {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
            } else {
                println!(
                    "{} ({}) vs {} ({})",
                    l.name, comparison.left_region, r.name, comparison.right_region
                );
                for metric in &comparison.metrics {
                    let label = metric.metric.map(|m| m.label()).unwrap_or("");
                    println!(
                        "  {:<20} {:>9.1} {:<18} {:>9.1} {}",
                        label,
                        metric.left,
                        metric.left_label().unwrap_or_default(),
                        metric.right,
                        metric.right_label().unwrap_or_default()
                    );
                }
            }
        }
    }

    Ok(())
}
