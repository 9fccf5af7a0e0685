use geosplit_core::{
    lookup_id, run_city_job, run_country_id_job, City, CityJobConfig, CountryIdJobConfig,
    GeoError, TsvOptions,
};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn gazetteer_row(name: &str, lat: &str, lon: &str, cc: &str, population: &str) -> String {
    format!(
        "1\t{name}\t{name}\t\t{lat}\t{lon}\tP\tPPL\t{cc}\t\t01\t\t\t\t{population}\t\t10\tUTC\t2024-01-01\n"
    )
}

fn sample_gazetteer() -> String {
    [
        gazetteer_row("Berlin", "52.52437", "13.41053", "DE", "3426354"),
        gazetteer_row("Paris", "48.85341", "2.3488", "FR", "2138551"),
        gazetteer_row("Hamburg", "53.57532", "10.01534", "DE", "1739117"),
        gazetteer_row("São Paulo", "-23.5475", "-46.63611", "BR", "10021295"),
        gazetteer_row("Lyon", "45.74846", "4.84671", "FR", ""),
    ]
    .concat()
}

fn read_cities(path: &Path) -> Vec<City> {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn every_country_file_holds_exactly_its_cities() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("cities15000.txt");
    fs::write(&input, sample_gazetteer()).unwrap();

    let config = CityJobConfig {
        input,
        output_dir: dir.path().join("data"),
        ..Default::default()
    };
    let stats = run_city_job(&config).unwrap();
    assert_eq!(stats.records, 5);
    assert_eq!(stats.groups, 3);
    assert_eq!(stats.files_written, 3);

    let files: BTreeSet<String> = fs::read_dir(&config.output_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    let expected: BTreeSet<String> = ["cities-br.json", "cities-de.json", "cities-fr.json"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(files, expected);

    let de = read_cities(&config.output_path("DE"));
    let names: Vec<_> = de.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Berlin", "Hamburg"]);

    let fr = read_cities(&config.output_path("FR"));
    assert_eq!(fr.len(), 2);
    assert_eq!(fr[1].name, "Lyon");
    assert_eq!(fr[1].population, 0);

    let br = fs::read_to_string(config.output_path("BR")).unwrap();
    assert!(br.contains("\"São Paulo\""));
    assert!(br.contains("\n    {\n        \"name\""));
}

#[test]
fn country_filter_limits_written_files() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("cities.txt");
    fs::write(&input, sample_gazetteer()).unwrap();

    let config = CityJobConfig {
        input,
        output_dir: dir.path().join("out"),
        countries: Some(vec!["de".into()]),
        tsv: TsvOptions::gazetteer(),
    };
    let stats = run_city_job(&config).unwrap();
    assert_eq!(stats.files_written, 1);
    assert!(config.output_path("DE").exists());
    assert!(!config.output_path("FR").exists());
}

#[test]
fn malformed_row_aborts_city_job() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("cities.txt");
    let mut data = sample_gazetteer();
    data.push_str(&gazetteer_row("Broken", "not-a-number", "1.0", "IT", "5"));
    fs::write(&input, data).unwrap();

    let config = CityJobConfig {
        input,
        output_dir: dir.path().join("data"),
        ..Default::default()
    };
    let err = run_city_job(&config).unwrap_err();
    assert!(matches!(err, GeoError::InvalidNumber { line: 6, field: "lat", .. }));
    assert!(!config.output_dir.exists());
}

#[test]
fn blank_gazetteer_line_aborts_city_job() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("cities.txt");
    let data = format!(
        "{}   \t \n{}",
        gazetteer_row("Berlin", "52.52437", "13.41053", "DE", "1"),
        gazetteer_row("Hamburg", "53.57532", "10.01534", "DE", "2"),
    );
    fs::write(&input, data).unwrap();

    let config = CityJobConfig {
        input,
        output_dir: dir.path().join("data"),
        ..Default::default()
    };
    let err = run_city_job(&config).unwrap_err();
    assert!(matches!(err, GeoError::MissingField { line: 2, .. }));
}

#[test]
fn codes_differing_in_case_share_one_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("cities.txt");
    let data = [
        gazetteer_row("Lower", "1.0", "2.0", "de", "1"),
        gazetteer_row("Upper", "3.0", "4.0", "DE", "2"),
    ]
    .concat();
    fs::write(&input, data).unwrap();

    let config = CityJobConfig {
        input,
        output_dir: dir.path().join("data"),
        ..Default::default()
    };
    let stats = run_city_job(&config).unwrap();
    assert_eq!(stats.groups, 1);
    assert_eq!(stats.files_written, 1);
    assert_eq!(fs::read_dir(&config.output_dir).unwrap().count(), 1);

    let names: Vec<_> = read_cities(&config.output_path("DE"))
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, ["Lower", "Upper"]);
}

#[test]
fn missing_input_is_not_found() {
    let dir = TempDir::new().unwrap();
    let config = CityJobConfig {
        input: dir.path().join("nope.txt"),
        output_dir: dir.path().join("data"),
        ..Default::default()
    };
    assert!(matches!(run_city_job(&config), Err(GeoError::NotFound(_))));
}

#[test]
fn mapping_has_one_entry_per_distinct_id() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("countryInfo.txt");
    fs::write(
        &input,
        "#ISO\tISO3\tISO-Numeric\n\
         AD\tAND\t020\tAN\tAndorra\n\
         DE\tDEU\t276\tGM\tGermany\n\
         \n\
         US\tUSA\t840\tUS\tUnited States\n",
    )
    .unwrap();

    let config = CountryIdJobConfig {
        input,
        output: dir.path().join("maps").join("id-to-country-code.json"),
        ..Default::default()
    };
    let stats = run_country_id_job(&config).unwrap();
    assert_eq!(stats.records, 3);
    assert_eq!(stats.groups, 3);
    assert_eq!(stats.files_written, 1);

    let raw = fs::read_to_string(&config.output).unwrap();
    assert_eq!(
        raw,
        "{\n    \"020\": \"AND\",\n    \"276\": \"DEU\",\n    \"840\": \"USA\"\n}"
    );

    assert_eq!(lookup_id(&config.output, "276").unwrap().as_deref(), Some("DEU"));
    assert_eq!(lookup_id(&config.output, "999").unwrap(), None);
}

#[test]
fn repeated_ids_count_as_records_not_entries() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("countryInfo.txt");
    fs::write(&input, "AD\tAND\t020\nXX\tXXX\t020\nDE\tDEU\t276\n").unwrap();

    let config = CountryIdJobConfig {
        input,
        output: dir.path().join("id-to-country-code.json"),
        ..Default::default()
    };
    let stats = run_country_id_job(&config).unwrap();
    assert_eq!(stats.records, 3);
    assert_eq!(stats.groups, 2);
}

#[cfg(feature = "compact")]
#[test]
fn gzip_gazetteer_is_decoded() {
    use flate2::{write::GzEncoder, Compression};
    use std::io::Write;

    let dir = TempDir::new().unwrap();
    let input = dir.path().join("cities15000.txt.gz");
    let mut enc = GzEncoder::new(fs::File::create(&input).unwrap(), Compression::default());
    enc.write_all(sample_gazetteer().as_bytes()).unwrap();
    enc.finish().unwrap();

    let config = CityJobConfig {
        input,
        output_dir: dir.path().join("data"),
        ..Default::default()
    };
    let stats = run_city_job(&config).unwrap();
    assert_eq!(stats.groups, 3);
}
