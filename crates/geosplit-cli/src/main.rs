//! geosplit — turn GeoNames dumps into map-ready JSON
//!
//! Usage examples
//! --------------
//!
//! - Split the gazetteer into ./data/cities-<cc>.json
//!   $ geosplit cities
//!   $ geosplit cities --cities cities15000.txt.gz --filter DE,CH
//!
//! - Build id-to-country-code.json from the registry
//!   $ geosplit country-ids --countries countryInfo.txt
//!
//! - Both in one go
//!   $ geosplit all -o ./data -m ./data/id-to-country-code.json
//!
//! - Inspect without writing, resolve an id
//!   $ geosplit stats --countries countryInfo.txt
//!   $ geosplit lookup 276
//!
//! Logging goes to stderr; `-v`/`-vv` or `RUST_LOG` raise the level.
mod args;

use crate::args::{CityArgs, CliArgs, Commands, RegistryArgs};
use anyhow::Context;
use clap::Parser;
use geosplit_core::config::parse_code_list;
use geosplit_core::{CityJobConfig, CountryIdJobConfig, JobStats};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let log_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(args.verbose >= 2)
        .init();

    debug!(?args, "parsed arguments");

    match args.command {
        Commands::Cities(cities) => run_cities(cities)?,

        Commands::CountryIds(registry) => run_country_ids(registry)?,

        Commands::All { cities, registry } => {
            run_cities(cities)?;
            run_country_ids(registry)?;
        }

        Commands::Stats { cities, countries } => {
            let config = CityJobConfig {
                input: cities,
                ..Default::default()
            };
            let stats = geosplit_core::city_stats(&config)
                .with_context(|| format!("failed to read gazetteer {}", config.input.display()))?;
            println!("Gazetteer statistics:");
            println!("  Countries: {}", stats.groups);
            println!("  Cities: {}", stats.records);

            if let Some(path) = countries {
                let config = CountryIdJobConfig {
                    input: path,
                    ..Default::default()
                };
                let stats = geosplit_core::registry_stats(&config).with_context(|| {
                    format!("failed to read registry {}", config.input.display())
                })?;
                println!("Registry statistics:");
                println!("  Rows: {}", stats.records);
                println!("  Country ids: {}", stats.groups);
            }
        }

        Commands::Lookup { id, map } => {
            let found = geosplit_core::lookup_id(&map, &id)
                .with_context(|| format!("failed to read lookup table {}", map.display()))?;
            match found {
                Some(code) => println!("{id} -> {code}"),
                None => anyhow::bail!("no country code found for id: {id}"),
            }
        }
    }

    Ok(())
}

fn run_cities(args: CityArgs) -> anyhow::Result<()> {
    let config = CityJobConfig {
        input: args.cities,
        output_dir: args.out_dir,
        countries: args.filter.as_deref().map(parse_code_list),
        ..Default::default()
    };
    let stats = geosplit_core::run_city_job(&config).context("city grouping job failed")?;
    report("Cities", &stats);
    println!("  Output: {}", config.output_dir.display());
    Ok(())
}

fn run_country_ids(args: RegistryArgs) -> anyhow::Result<()> {
    let config = CountryIdJobConfig {
        input: args.countries,
        output: args.map_out,
        ..Default::default()
    };
    let stats =
        geosplit_core::run_country_id_job(&config).context("country id mapping job failed")?;
    report("Country ids", &stats);
    println!("  Output: {}", config.output.display());
    Ok(())
}

fn report(label: &str, stats: &JobStats) {
    println!("{label} done:");
    println!("  Records: {}", stats.records);
    println!("  Groups: {}", stats.groups);
    println!("  Files written: {}", stats.files_written);
}
