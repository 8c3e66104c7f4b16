use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use crossmatch_core::config::Config;
use crossmatch_core::{
    build_search_patterns, get_semantic_query_variants, ilike_or_filter, matches_search,
    normalize_for_search,
};

#[derive(Parser)]
#[command(name = "crossmatch", about = "Cross-script query normalization for CRM search")]
struct Cli {
    /// Log at debug level to stderr (overrides RUST_LOG).
    #[arg(long, global = true)]
    debug: bool,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Config file to use instead of ~/.config/crossmatch/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fold diacritics, lowercase and collapse whitespace.
    Normalize { text: String },
    /// Literal match candidates for a query.
    Patterns { query: String },
    /// Variant chain for embedding search.
    Semantic {
        query: String,
        /// Maximum chain length (defaults to `semantic.max_variants`).
        #[arg(short = 'n', long)]
        max_variants: Option<usize>,
    },
    /// Test a text against the patterns of a query. Exits 1 on no match.
    Match { text: String, query: String },
    /// PostgREST `or` filter for a query.
    Filter {
        query: String,
        /// Column to search; repeatable (defaults to `filter.columns`).
        #[arg(short, long = "column")]
        columns: Vec<String>,
        /// Patterns turned into disjuncts (defaults to `filter.max_disjuncts`).
        #[arg(long)]
        max_disjuncts: Option<usize>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(if cli.debug {
            tracing_subscriber::EnvFilter::new("debug")
        } else {
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
        })
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    tracing::debug!(?config, "crossmatch: config resolved");

    match cli.command {
        Command::Normalize { text } => {
            print_value(cli.json, &normalize_for_search(&text))?;
        }
        Command::Patterns { query } => {
            let patterns = build_search_patterns(&query, &config.patterns);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&patterns)?);
            } else {
                patterns.iter().for_each(|p| println!("{p}"));
            }
        }
        Command::Semantic { query, max_variants } => {
            let max = max_variants.unwrap_or(config.semantic.max_variants);
            let variants = get_semantic_query_variants(&query, max);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&variants)?);
            } else {
                variants.iter().for_each(|v| println!("{v}"));
            }
        }
        Command::Match { text, query } => {
            let patterns = build_search_patterns(&query, &config.patterns).into_vec();
            let matched = matches_search(Some(text.as_str()), &patterns[..]);
            print_value(cli.json, &matched)?;
            if !matched {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Filter { query, columns, max_disjuncts } => {
            let columns = if columns.is_empty() { config.filter.columns.clone() } else { columns };
            let columns: Vec<&str> = columns.iter().map(String::as_str).collect();
            let max = max_disjuncts.unwrap_or(config.filter.max_disjuncts);
            let patterns = build_search_patterns(&query, &config.patterns);
            match ilike_or_filter(&columns, &patterns, max) {
                Some(filter) => print_value(cli.json, &filter)?,
                None => {
                    tracing::warn!(%query, "crossmatch: nothing to filter on");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_value<T: serde::Serialize + std::fmt::Display>(json: bool, value: &T) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(value)?);
    } else {
        println!("{value}");
    }
    Ok(())
}
