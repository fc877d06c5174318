// Compare two cities from the command line
//
// Usage:
//   compare_cities --list
//   compare_cities <city-a-id> <city-b-id> [--json]
//
// Reads CITIES_DATA / IMAGE_BASE_URL / FOLDER_MAP like the API server.

use anyhow::{bail, Result};
use daylight_compare::insights::{JsonFormatter, MarkdownFormatter};
use daylight_compare::{AppConfig, CityCatalog, ComparisonGenerator};
use tracing_subscriber::EnvFilter;

struct Args {
    list: bool,
    json: bool,
    city_ids: Vec<String>,
}

fn parse_args() -> Args {
    let mut args = Args {
        list: false,
        json: false,
        city_ids: Vec::new(),
    };
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--list" => args.list = true,
            "--json" => args.json = true,
            _ => args.city_ids.push(arg),
        }
    }
    args
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("daylight_compare=info,warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args();
    let config = AppConfig::from_env();
    let catalog = CityCatalog::load(&config.data_path)?;

    if args.list {
        for summary in catalog.summaries() {
            println!(
                "{:<24} {:<24} {:<16} {} quarter(s)",
                summary.id,
                summary.name,
                summary.country.as_deref().unwrap_or("-"),
                summary.quarter_count
            );
        }
        return Ok(());
    }

    let [city_a, city_b] = args.city_ids.as_slice() else {
        bail!("Usage: compare_cities <city-a-id> <city-b-id> [--json] | --list");
    };

    let a = catalog.city(city_a)?;
    let b = catalog.city(city_b)?;
    let generator = ComparisonGenerator::new(config.image_resolver()?);
    let comparison = generator.generate(a, b);

    if args.json {
        println!("{}", JsonFormatter::format(&comparison)?);
    } else {
        print!("{}", MarkdownFormatter::format(&comparison));
    }

    Ok(())
}
