use anyhow::Result;
use bands_import::{
    ErrorPolicy, ImportConfig, ImportError, ImportOptions, OutputFormat, Pipeline,
};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const EXPORT: &str = "\
Band,Wo,Wann,Kommentar
(Metallica),Nürnberg,07.2019,Regen
,Berlin,01.01.2020,
Slayer, Karlsruhe ,15.03.2021,
  (Gojira)  ,Straubenhardt,08.2022,
Guns N' Roses,Neuhausen ob Eck,23.06.2018,
Tool,Berlin,,
";

fn write_csv(dir: &Path, content: &str) -> Result<std::path::PathBuf> {
    let path = dir.join("Bands.csv");
    fs::write(&path, content)?;
    Ok(path)
}

fn run_to_string(config: &ImportConfig, options: &ImportOptions) -> bands_import::Result<String> {
    let mut out: Vec<u8> = Vec::new();
    Pipeline::run(config, options, &mut out)?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn test_full_export_to_sql() -> Result<()> {
    let temp_dir = tempdir()?;
    let input = write_csv(temp_dir.path(), EXPORT)?;
    let options = ImportOptions { input, ..Default::default() };

    let sql = run_to_string(&ImportConfig::default(), &options)?;

    let expected = "\
INSERT INTO band_events (band_name, place, date, users_id, rating) VALUES ('Metallica', 'Rock im Park', '2019-07-01', 2, 5);
INSERT INTO band_events (band_name, place, date, users_id, rating) VALUES ('Slayer', 'Das Fest', '2021-03-15', 2, 5);
INSERT INTO band_events (band_name, place, date, users_id, rating) VALUES ('Gojira', 'Happiness Festival', '2022-08-01', 2, 5);
INSERT INTO band_events (band_name, place, date, users_id, rating) VALUES ('Guns N'' Roses', 'Southside Festival', '2018-06-23', 2, 5);
";
    assert_eq!(sql, expected);
    Ok(())
}

#[test]
fn test_summary_counts() -> Result<()> {
    let temp_dir = tempdir()?;
    let input = write_csv(temp_dir.path(), EXPORT)?;
    let options = ImportOptions { input, ..Default::default() };

    let mut out: Vec<u8> = Vec::new();
    let summary = Pipeline::run(&ImportConfig::default(), &options, &mut out)?;

    assert_eq!(summary.rows_read, 6);
    assert_eq!(summary.emitted, 4);
    assert_eq!(summary.skipped_empty, 2);
    assert!(summary.rejected.is_empty());
    Ok(())
}

#[test]
fn test_malformed_date_aborts_without_output() -> Result<()> {
    let temp_dir = tempdir()?;
    let input = write_csv(
        temp_dir.path(),
        "Band,Wo,Wann\nSlayer,Karlsruhe,15.03.2021\nTool,Berlin,13.2020\nGojira,Berlin,08.2022\n",
    )?;
    let options = ImportOptions { input, ..Default::default() };

    let mut out: Vec<u8> = Vec::new();
    let err = Pipeline::run(&ImportConfig::default(), &options, &mut out).unwrap_err();

    match err {
        ImportError::MalformedDate { row, value } => {
            assert_eq!(row, 3);
            assert_eq!(value, "13.2020");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(out.is_empty(), "no statements may be written on a failed run");
    Ok(())
}

#[test]
fn test_skip_policy_keeps_valid_rows() -> Result<()> {
    let temp_dir = tempdir()?;
    let input = write_csv(
        temp_dir.path(),
        "Band,Wo,Wann\nSlayer,Karlsruhe,15.03.2021\nTool,Berlin,31.09.2020\nGojira,Berlin,08.2022\n",
    )?;
    let options = ImportOptions {
        input,
        policy: ErrorPolicy::Skip,
        ..Default::default()
    };

    let mut out: Vec<u8> = Vec::new();
    let summary = Pipeline::run(&ImportConfig::default(), &options, &mut out)?;
    let sql = String::from_utf8(out)?;

    assert_eq!(summary.emitted, 2);
    assert_eq!(summary.rejected.len(), 1);
    assert_eq!(summary.rejected[0].row, 3);
    let lines: Vec<_> = sql.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("'Slayer'"));
    assert!(lines[1].contains("'Gojira', 'Berlin', '2022-08-01'"));
    Ok(())
}

#[test]
fn test_missing_file_and_column() -> Result<()> {
    let temp_dir = tempdir()?;

    let options = ImportOptions {
        input: temp_dir.path().join("Bands.csv"),
        ..Default::default()
    };
    let err = run_to_string(&ImportConfig::default(), &options).unwrap_err();
    assert!(matches!(err, ImportError::MissingFile { .. }));

    let input = write_csv(temp_dir.path(), "Band,Wann\nTool,01.2020\n")?;
    let options = ImportOptions { input, ..Default::default() };
    let err = run_to_string(&ImportConfig::default(), &options).unwrap_err();
    assert!(matches!(err, ImportError::MissingColumn(ref name) if name == "Wo"));
    Ok(())
}

#[test]
fn test_config_file_changes_constants_and_venues() -> Result<()> {
    let temp_dir = tempdir()?;
    let input = write_csv(
        temp_dir.path(),
        "Band,Wo,Wann\nTool,Nürnberg,06.2019\nGhost,Hildesheim,08.2023\n",
    )?;
    let config_path = temp_dir.path().join("bands_import.toml");
    fs::write(
        &config_path,
        "table = \"concerts\"\nusers_id = 9\nrating = 4\n\n[venues]\n\"Hildesheim\" = \"M'era Luna\"\n",
    )?;

    let config = ImportConfig::load(Some(config_path.as_path()))?;
    let options = ImportOptions { input, ..Default::default() };
    let sql = run_to_string(&config, &options)?;

    assert_eq!(
        sql,
        "INSERT INTO concerts (band_name, place, date, users_id, rating) VALUES ('Tool', 'Nürnberg', '2019-06-01', 9, 4);\n\
         INSERT INTO concerts (band_name, place, date, users_id, rating) VALUES ('Ghost', 'M''era Luna', '2023-08-01', 9, 4);\n"
    );
    Ok(())
}

#[test]
fn test_json_lines_output() -> Result<()> {
    let temp_dir = tempdir()?;
    let input = write_csv(temp_dir.path(), "Band,Wo,Wann\n(Metallica),Nürnberg,07.2019\n")?;
    let options = ImportOptions {
        input,
        format: OutputFormat::Json,
        ..Default::default()
    };

    let out = run_to_string(&ImportConfig::default(), &options)?;
    let value: serde_json::Value = serde_json::from_str(out.trim_end())?;

    assert_eq!(value["band_name"], "Metallica");
    assert_eq!(value["place"], "Rock im Park");
    assert_eq!(value["date"], "2019-07-01");
    assert_eq!(value["users_id"], 2);
    assert_eq!(value["rating"], 5);
    Ok(())
}
