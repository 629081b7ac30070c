//! `boxarea` command-line front end
//!
//! Loads a box file and prints box counts, per-building areas or category
//! counts. Logging goes to stderr and is controlled by `RUST_LOG` or `-v`.

use anyhow::Context;
use boxarea_core::{count_categories, group_by_building_with, read_csv_with, LoaderConfig};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "boxarea", version, about = "Building box area aggregation")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load a box file and print the number of boxes
    Load(Input),
    /// Total area per building for one category
    Group {
        #[command(flatten)]
        input: Input,
        /// Category label to aggregate (exact match, e.g. "Deur")
        #[arg(short, long)]
        category: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Count boxes per category
    Categories(Input),
}

#[derive(Debug, Args)]
struct Input {
    /// Path to the box CSV file
    path: PathBuf,
    /// Optional TOML loader configuration
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Input {
    fn loader_config(&self) -> anyhow::Result<LoaderConfig> {
        match &self.config {
            Some(path) => LoaderConfig::from_file(path)
                .with_context(|| format!("loading config {}", path.display())),
            None => Ok(LoaderConfig::default()),
        }
    }
}

#[derive(Debug, Serialize)]
struct GroupReport<'a> {
    category: &'a str,
    buildings: BTreeMap<&'a str, f64>,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn render_groups(category: &str, grouped: &HashMap<String, f64>, json: bool) -> anyhow::Result<String> {
    let buildings: BTreeMap<&str, f64> = grouped.iter().map(|(k, v)| (k.as_str(), *v)).collect();

    if json {
        let report = GroupReport {
            category,
            buildings,
        };
        return serde_json::to_string_pretty(&report).context("serializing report");
    }

    let mut out = String::new();
    for (building, area) in &buildings {
        out.push_str(&format!("{building}\t{area}\n"));
    }
    out.push_str(&format!("{} buildings with category {category:?}\n", buildings.len()));
    Ok(out)
}

fn render_categories(counts: &BTreeMap<String, usize>) -> String {
    counts
        .iter()
        .map(|(category, count)| format!("{category}\t{count}\n"))
        .collect()
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Load(input) => {
            let config = input.loader_config()?;
            let boxes = read_csv_with(&input.path, &config)?;
            println!("{}", boxes.len());
        }
        Commands::Group {
            input,
            category,
            json,
        } => {
            let config = input.loader_config()?;
            let boxes = read_csv_with(&input.path, &config)?;
            let grouped = group_by_building_with(&boxes, &category, config.building_separator);
            if grouped.is_empty() {
                tracing::warn!(%category, "no boxes matched category");
            }
            print!("{}", render_groups(&category, &grouped, json)?);
        }
        Commands::Categories(input) => {
            let config = input.loader_config()?;
            let boxes = read_csv_with(&input.path, &config)?;
            print!("{}", render_categories(&count_categories(&boxes)));
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxarea_test_utils::{fixture_path, write_temp_csv};
    use std::ffi::OsString;

    #[test]
    fn cli_parses_group() {
        let cli = Cli::try_parse_from([
            "boxarea", "-v", "group", "boxes.csv", "--category", "Deur", "--json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Group {
                input,
                category,
                json,
            } => {
                assert_eq!(input.path, PathBuf::from("boxes.csv"));
                assert!(input.config.is_none());
                assert_eq!(category, "Deur");
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_requires_category() {
        assert!(Cli::try_parse_from(["boxarea", "group", "boxes.csv"]).is_err());
    }

    #[test]
    fn render_groups_sorted_text() {
        let grouped: HashMap<String, f64> =
            [("200".to_string(), 2.5), ("100".to_string(), -1.0)].into_iter().collect();
        let text = render_groups("Deur", &grouped, false).unwrap();
        assert_eq!(text, "100\t-1\n200\t2.5\n2 buildings with category \"Deur\"\n");
    }

    #[test]
    fn render_groups_json() {
        let grouped: HashMap<String, f64> = [("100".to_string(), 4.0)].into_iter().collect();
        let text = render_groups("Deur", &grouped, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["category"], "Deur");
        assert_eq!(value["buildings"]["100"], 4.0);
    }

    #[test]
    fn render_category_counts() {
        let counts: BTreeMap<String, usize> =
            [("Deur".to_string(), 3), ("Raam".to_string(), 5)].into_iter().collect();
        assert_eq!(render_categories(&counts), "Deur\t3\nRaam\t5\n");
    }

    #[test]
    fn run_group_on_fixture() {
        let args: Vec<OsString> = vec![
            "boxarea".into(),
            "group".into(),
            fixture_path().into_os_string(),
            "--category".into(),
            "Deur".into(),
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        assert!(run(cli).is_ok());
    }

    #[test]
    fn run_reports_missing_config() {
        let (_dir, path) = write_temp_csv("boxes.csv", "a_1,0,0,1,1,Deur\n");
        let args: Vec<OsString> = vec![
            "boxarea".into(),
            "load".into(),
            path.into_os_string(),
            "--config".into(),
            "/nonexistent/boxarea.toml".into(),
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        let err = run(cli).unwrap_err();
        assert!(format!("{err:#}").contains("loading config"));
    }

    #[test]
    fn run_reports_parse_cause_once() {
        let (_dir, path) = write_temp_csv("boxes.csv", "a_1,0,0,x,1,Deur\n");
        let args: Vec<OsString> = vec!["boxarea".into(), "load".into(), path.into_os_string()];
        let cli = Cli::try_parse_from(args).unwrap();
        let err = run(cli).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("line 1"));
        assert_eq!(chain.matches("invalid coordinate x2").count(), 1);
    }
}
