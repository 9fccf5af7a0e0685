//! Basic usage example for geosplit-rs
//!
//! Builds a tiny gazetteer and registry in a temp directory, runs both jobs
//! and reads the results back.

use geosplit_rs::{
    lookup_id, run_city_job, run_country_id_job, CityJobConfig, CountryIdJobConfig, Result,
};
use std::fs;

fn main() -> Result<()> {
    println!("=== geosplit-rs Basic Usage ===\n");

    let dir = tempfile::tempdir()?;
    let cities = dir.path().join("cities15000.txt");
    let countries = dir.path().join("countryInfo.txt");

    fs::write(
        &cities,
        "2950159\tBerlin\tBerlin\t\t52.52437\t13.41053\tP\tPPLC\tDE\t\t16\t00\t\t\t3426354\t\t74\tEurope/Berlin\t2022-03-09\n\
         2657896\tZürich\tZuerich\t\t47.36667\t8.55\tP\tPPLA\tCH\t\t25\t112\t\t\t341730\t\t\tEurope/Zurich\t2023-01-01\n",
    )?;
    fs::write(&countries, "DE\tDEU\t276\tGM\tGermany\nCH\tCHE\t756\tSZ\tSwitzerland\n")?;

    // --- City grouping ---
    let city_config = CityJobConfig {
        input: cities,
        output_dir: dir.path().join("data"),
        ..Default::default()
    };
    let stats = run_city_job(&city_config)?;
    println!("Wrote {} files for {} cities", stats.files_written, stats.records);
    println!("{}", fs::read_to_string(city_config.output_path("CH"))?);

    // --- Country ids ---
    let id_config = CountryIdJobConfig {
        input: countries,
        output: dir.path().join("id-to-country-code.json"),
        ..Default::default()
    };
    run_country_id_job(&id_config)?;
    println!("756 -> {:?}", lookup_id(&id_config.output, "756")?);

    Ok(())
}
