use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "tally", version, about = "Incident record aggregation and reporting")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Seed for the record generator (overrides `generator.seed`)
    #[arg(long, global = true)]
    pub seed: Option<u64>,
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate and print the resolved, unresolved and backlog lists
    Lists,
    /// Count codes shared between each pair of lists
    Intersections,
    /// Count occurrences of every value of a field in one list
    Counts {
        #[arg(long, default_value = "resolved")]
        category: String,
        /// Grouping field: code or `operator_name` (defaults to `aggregation.field`)
        #[arg(long)]
        field: Option<String>,
    },
    /// Count occurrences of a single value in one list
    Count {
        #[arg(value_name = "VALUE")]
        value: String,
        #[arg(long, default_value = "resolved")]
        category: String,
        #[arg(long)]
        field: Option<String>,
    },
    /// Render the lists as grid tables
    Report {
        #[arg(long)]
        field: Option<String>,
        /// Render raw records instead of aggregated rows
        #[arg(long)]
        raw: bool,
    },
}
