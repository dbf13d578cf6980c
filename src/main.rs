use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use docsearch::index::{open_table, stats};
use docsearch::output;
use docsearch::query::{LookupOptions, MatchMode};
use docsearch::utils::{init_logging, AppConfig};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "docsearch")]
#[command(about = "Prefix search over generated documentation search indexes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Search data file or directory (defaults to config, then ./search)
    #[arg(short, long, global = true)]
    index: Option<PathBuf>,

    /// Glob selecting files inside a search directory
    #[arg(long, global = true)]
    pattern: Option<String>,

    /// Query (when no subcommand is given)
    #[arg(trailing_var_arg = true)]
    query: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a prefix and print matching records
    Query {
        /// Prefix to look up (empty lists everything)
        #[arg(default_value = "")]
        prefix: String,

        #[command(flatten)]
        lookup: LookupArgs,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Print only the number of matching records
        #[arg(short, long)]
        count: bool,

        /// One tab-separated line per record, no key headings
        #[arg(long)]
        flat: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Show index statistics
    Stats,
    /// Write the whole index as JSON
    Dump,
    /// Interactive search-as-you-type
    #[cfg(feature = "interactive")]
    Search {
        /// Initial query
        query: Option<String>,

        #[command(flatten)]
        lookup: LookupArgs,
    },
}

#[derive(Args)]
struct LookupArgs {
    /// Match keys containing the query instead of starting with it
    #[arg(short, long)]
    substring: bool,

    /// Maximum number of entries (0 = unlimited)
    #[arg(short, long)]
    limit: Option<usize>,
}

impl LookupArgs {
    fn options(&self, config: &AppConfig) -> LookupOptions {
        let mode = if self.substring {
            MatchMode::Substring
        } else {
            config.match_mode
        };
        let limit = match self.limit {
            Some(0) => None,
            Some(n) => Some(n),
            None => config.result_limit(),
        };
        LookupOptions { mode, limit }
    }
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = AppConfig::load()?;
    let index_path = config.resolve_index_path(cli.index);
    let pattern = cli.pattern.unwrap_or_else(|| config.file_pattern.clone());
    debug!(path = %index_path.display(), pattern = %pattern, "opening search index");

    let table = open_table(&index_path, &pattern)
        .with_context(|| format!("Failed to load search index from {}", index_path.display()))?;

    match cli.command {
        Some(Commands::Query {
            prefix,
            lookup,
            json,
            count,
            flat,
            no_color,
        }) => {
            let options = lookup.options(&config);
            let entries = table.lookup_with(&prefix, &options);

            if count {
                output::print_count(&entries)?;
            } else if json {
                output::print_json(&entries)?;
            } else {
                output::print_entries(&entries, !no_color, !flat)?;
            }
        }
        Some(Commands::Stats) => {
            stats::show_stats(&table, &index_path);
        }
        Some(Commands::Dump) => {
            let entries: Vec<_> = table.iter().collect();
            output::print_json(&entries)?;
        }
        #[cfg(feature = "interactive")]
        Some(Commands::Search { query, lookup }) => {
            run_interactive(table, lookup.options(&config), query)?;
        }
        None => {
            let query = cli.query.join(" ");
            let options = LookupOptions {
                mode: config.match_mode,
                limit: config.result_limit(),
            };

            // Bare invocation opens the search box
            #[cfg(feature = "interactive")]
            {
                if query.is_empty() {
                    return run_interactive(table, options, None);
                }
            }

            let entries = table.lookup_with(&query, &options);
            output::print_entries(&entries, true, true)?;
        }
    }

    Ok(())
}

#[cfg(feature = "interactive")]
fn run_interactive(
    table: docsearch::index::SearchIndexTable,
    options: LookupOptions,
    query: Option<String>,
) -> Result<()> {
    if let Some(record) = docsearch::tui::run(std::sync::Arc::new(table), options, query)? {
        println!("{}", record.anchor_path);
    }
    Ok(())
}
