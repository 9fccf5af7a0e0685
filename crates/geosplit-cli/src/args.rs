use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for geosplit
#[derive(Debug, Parser)]
#[command(
    name = "geosplit",
    version,
    about = "Convert GeoNames dumps into per-country city JSON and a country id lookup table"
)]
pub struct CliArgs {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Args)]
pub struct CityArgs {
    /// Gazetteer TSV (plain or .gz)
    #[arg(long = "cities", default_value = geosplit_core::config::DEFAULT_GAZETTEER)]
    pub cities: PathBuf,

    /// Directory receiving cities-<cc>.json files
    #[arg(short = 'o', long = "out-dir", default_value = geosplit_core::config::DEFAULT_OUTPUT_DIR)]
    pub out_dir: PathBuf,

    /// Optional comma-separated list of ISO2 country codes to keep (e.g. DE,CH,AT)
    #[arg(short = 'f', long = "filter")]
    pub filter: Option<String>,
}

#[derive(Debug, Args)]
pub struct RegistryArgs {
    /// Country registry TSV (plain or .gz)
    #[arg(long = "countries", default_value = geosplit_core::config::DEFAULT_REGISTRY)]
    pub countries: PathBuf,

    /// Output path of the id -> country code JSON
    #[arg(short = 'm', long = "map-out", default_value = geosplit_core::config::DEFAULT_MAPPING_FILE)]
    pub map_out: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Group gazetteer cities into one JSON file per country
    Cities(CityArgs),

    /// Build the country id -> country code lookup table
    CountryIds(RegistryArgs),

    /// Run both jobs, cities first
    All {
        #[command(flatten)]
        cities: CityArgs,
        #[command(flatten)]
        registry: RegistryArgs,
    },

    /// Parse the inputs and print counts without writing anything
    Stats {
        /// Gazetteer TSV (plain or .gz)
        #[arg(long = "cities", default_value = geosplit_core::config::DEFAULT_GAZETTEER)]
        cities: PathBuf,

        /// Also parse this country registry
        #[arg(long = "countries")]
        countries: Option<PathBuf>,
    },

    /// Resolve a country id through a previously written lookup table
    Lookup {
        /// Numeric country id (e.g. 276)
        id: String,

        /// Lookup table written by `country-ids`
        #[arg(short = 'm', long = "map", default_value = geosplit_core::config::DEFAULT_MAPPING_FILE)]
        map: PathBuf,
    },
}
