//! # matdb CLI
//!
//! Terminal browser for the structural materials catalog.
//!
//! ```text
//! matdb list
//! matdb show "Structural Steel (S235)"
//! matdb search --property yield_strength --min 300
//! matdb find concrete
//! matdb validate my_materials.json
//! matdb --catalog my_materials.json export out.json
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

use matdb_core::{
    load_catalog, save_catalog, CatalogError, CatalogSource, MaterialCatalog, MaterialRecord,
    Property, PropertyRange,
};

#[derive(Parser, Debug)]
#[command(name = "matdb", version, about = "Structural materials reference catalog")]
struct Cli {
    /// Catalog JSON file to use instead of the bundled table
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every material with its properties
    List,

    /// Show one material by exact name
    Show {
        /// Material name, case-sensitive
        name: String,

        /// Only the properties used by beam/stress calculations
        #[arg(long)]
        key: bool,
    },

    /// Find materials whose property lies within [min, max]
    Search {
        /// Property name, e.g. "Yield Strength" or yield_strength
        #[arg(long, short)]
        property: Property,

        /// Lower bound (inclusive), defaults to 0
        #[arg(long)]
        min: Option<f64>,

        /// Upper bound (inclusive), defaults to infinity
        #[arg(long)]
        max: Option<f64>,
    },

    /// Find materials whose name contains a fragment (case-insensitive)
    Find { fragment: String },

    /// Check a catalog file against the schema
    Validate { path: PathBuf },

    /// Write the active catalog to a JSON file
    Export { path: PathBuf },
}

/// How a successful run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Done,
    NotFound,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(Outcome::Done) => ExitCode::SUCCESS,
        Ok(Outcome::NotFound) => ExitCode::FAILURE,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<Outcome, CatalogError> {
    let source = CatalogSource::from_path(cli.catalog.clone());
    let open = || source.open();

    match &cli.command {
        Command::List => {
            let catalog = open()?;
            let records: Vec<&MaterialRecord> = catalog.all().collect();
            print_records(&records, cli.json);
        }
        Command::Show { name, key } => {
            let catalog = open()?;
            match catalog.find_by_name(name) {
                Some(record) if cli.json && *key => print_json(&record.key_properties()),
                Some(record) if cli.json => print_json(record),
                Some(record) if *key => print_key_properties(record),
                Some(record) => println!("{}", record),
                None => {
                    eprintln!("Material not found: {} (in {})", name, source.describe());
                    return Ok(Outcome::NotFound);
                }
            }
        }
        Command::Search { property, min, max } => {
            let catalog = open()?;
            let range = PropertyRange::from_bounds(*min, *max);
            let hits = catalog.search_by_property(*property, range);
            if !cli.json {
                println!(
                    "{} between {} and {} {}: {} match(es)",
                    property,
                    range.min,
                    range.max,
                    property.unit(),
                    hits.len()
                );
                println!();
            }
            print_records(&hits, cli.json);
        }
        Command::Find { fragment } => {
            let catalog = open()?;
            let hits = catalog.search(fragment);
            print_records(&hits, cli.json);
        }
        Command::Validate { path } => validate(path, cli.json)?,
        Command::Export { path } => {
            let catalog = open()?;
            save_catalog(&catalog, path)?;
            if !cli.json {
                println!("Wrote {} materials to {}", catalog.len(), path.display());
            }
        }
    }

    Ok(Outcome::Done)
}

#[derive(Serialize)]
struct ValidationReport<'a> {
    path: String,
    valid: bool,
    records: usize,
    names: Vec<&'a str>,
}

fn validate(path: &Path, json: bool) -> Result<(), CatalogError> {
    let catalog: MaterialCatalog = load_catalog(path)?;
    if json {
        print_json(&ValidationReport {
            path: path.display().to_string(),
            valid: true,
            records: catalog.len(),
            names: catalog.names(),
        });
    } else {
        println!("[OK] {}: {} materials", path.display(), catalog.len());
        let odd: Vec<&str> = catalog
            .all()
            .filter(|r| !r.has_isotropic_poisson_ratio())
            .map(|r| r.material.as_str())
            .collect();
        if !odd.is_empty() {
            println!("Note: Poisson ratio outside (0, 0.5) for: {}", odd.join(", "));
        }
    }
    Ok(())
}

fn print_records(records: &[&MaterialRecord], json: bool) {
    if json {
        print_json(&records);
        return;
    }
    for (index, record) in records.iter().enumerate() {
        println!("{} - {}", index + 1, record.material);
        println!("    {}", record.summary_line());
    }
}

fn print_key_properties(record: &MaterialRecord) {
    println!("{}", record.material);
    for prop in Property::KEY {
        println!("  {:<18} {:>10} {}", prop.field_name(), record.value(prop), prop.unit());
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: failed to serialize output: {}", e),
    }
}

fn report_error(e: &CatalogError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_package_metadata() {
        assert_eq!(env!("CARGO_PKG_AUTHORS"), "matdb Contributors");
        assert_eq!(env!("CARGO_PKG_REPOSITORY"), "");
        assert_eq!(Cli::command().get_name(), "matdb");
    }

    #[test]
    fn test_parse_search() {
        let cli = Cli::try_parse_from([
            "matdb", "search", "--property", "yield_strength", "--min", "300",
        ])
        .unwrap();
        match cli.command {
            Command::Search { property, min, max } => {
                assert_eq!(property, Property::YieldStrength);
                assert_eq!(min, Some(300.0));
                assert_eq!(max, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["matdb", "list", "--json", "--catalog", "m.json"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.catalog, Some(PathBuf::from("m.json")));
    }

    #[test]
    fn test_unknown_property_rejected() {
        assert!(Cli::try_parse_from(["matdb", "search", "--property", "hardness"]).is_err());
    }

    #[test]
    fn test_show_missing_material_fails() {
        let cli = Cli::try_parse_from(["matdb", "show", "Nonexistent Alloy"]).unwrap();
        assert_eq!(run(&cli).unwrap(), Outcome::NotFound);
    }

    #[test]
    fn test_validate_missing_file() {
        let cli = Cli::try_parse_from(["matdb", "validate", "/nonexistent/matdb.json"]).unwrap();
        assert_eq!(run(&cli).unwrap_err().error_code(), "FILE_ERROR");
    }
}
