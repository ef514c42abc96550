mod utils;

use std::path::Path;

use arrow::array::Array;
use tsv_reader::models::{NameRecord, PrincipalRecord};
use tsv_reader::reader::TsvReader;
use tsv_reader::utils::{int32_column, int64_column, read_tsv};
use tsv_reader::{TsvReaderConfig, TsvReaderError, name_basics_schema, title_principals_schema};

use utils::{NAME_BASICS_TSV, TITLE_PRINCIPALS_TSV, write_tsv};

#[test]
fn scan_decodes_typed_name_records() -> tsv_reader::Result<()> {
    let file = write_tsv(NAME_BASICS_TSV);
    let reader = TsvReader::new();

    let records: Vec<NameRecord> = reader.scan(file.path())?.collect::<tsv_reader::Result<_>>()?;

    assert_eq!(records.len(), 5);
    assert_eq!(records[0].nconst, "nm0000001");
    assert_eq!(records[0].primary_name, "Actor One");
    assert_eq!(records[0].birth_year, Some(2001));
    assert_eq!(records[0].death_year, Some(2020));
    // Sentinel death year decodes as missing, not as text
    assert_eq!(records[3].death_year, None);
    assert_eq!(records[3].birth_year, Some(1980));
    // Comma-separated professions split into a list
    assert_eq!(
        records[4].professions.as_deref(),
        Some(&["actor".to_string(), "producer".to_string()][..])
    );
    assert_eq!(
        records[0].known_for_titles.as_deref(),
        Some(&["tt0000001".to_string()][..])
    );
    Ok(())
}

#[test]
fn read_tsv_collects_every_batch_in_order() -> tsv_reader::Result<()> {
    let file = write_tsv(TITLE_PRINCIPALS_TSV);

    let batches = read_tsv(file.path(), title_principals_schema(), Some(2))?;

    let total_rows: usize = batches.iter().map(|b| b.num_rows()).sum();
    assert_eq!(batches.len(), 3);
    assert_eq!(total_rows, 5);

    let ordering = int64_column(&batches[0], "ordering")?;
    assert_eq!(ordering.value(0), 1);
    Ok(())
}

#[test]
fn scan_decodes_typed_principal_records() -> tsv_reader::Result<()> {
    let file = write_tsv(TITLE_PRINCIPALS_TSV);
    let reader = TsvReader::new();

    let records: Vec<PrincipalRecord> =
        reader.scan(file.path())?.collect::<tsv_reader::Result<_>>()?;

    assert_eq!(records.len(), 5);
    assert_eq!(records[0].tconst, "tt0000001");
    assert_eq!(records[0].ordering, 1);
    assert_eq!(records[0].category, "director");
    assert_eq!(records[0].job, None);
    assert_eq!(records[0].characters, None);
    Ok(())
}

#[test]
fn batches_respect_configured_batch_size() -> tsv_reader::Result<()> {
    let file = write_tsv(NAME_BASICS_TSV);
    let reader = TsvReader::with_config(TsvReaderConfig::with_batch_size(2));

    let batches: Vec<_> = reader
        .batches(file.path(), name_basics_schema())?
        .collect::<tsv_reader::Result<_>>()?;

    let row_counts: Vec<usize> = batches.iter().map(|b| b.num_rows()).collect();
    assert_eq!(row_counts, vec![2, 2, 1]);
    assert!(batches.iter().all(|b| b.num_columns() == 6));
    Ok(())
}

#[test]
fn batched_read_maps_sentinel_years_to_null() -> tsv_reader::Result<()> {
    let file = write_tsv(NAME_BASICS_TSV);
    let reader = TsvReader::new();

    let batches: Vec<_> = reader
        .batches(file.path(), name_basics_schema())?
        .collect::<tsv_reader::Result<_>>()?;

    assert_eq!(batches.len(), 1);
    let death_years = int32_column(&batches[0], "deathYear")?;
    assert!(death_years.is_null(3));
    assert_eq!(death_years.value(0), 2020);
    Ok(())
}

#[test]
fn missing_file_is_an_io_error() {
    let reader = TsvReader::new();

    let err = reader
        .scan::<NameRecord>(Path::new("no-such-file.tsv"))
        .unwrap_err();
    assert!(matches!(err, TsvReaderError::IoError(_)));

    let err = reader
        .batches(Path::new("no-such-file.tsv"), title_principals_schema())
        .unwrap_err();
    assert!(matches!(err, TsvReaderError::IoError(_)));
}

#[test]
fn malformed_birth_year_is_fatal_in_scan() {
    let data = "nconst\tprimaryName\tbirthYear\tdeathYear\tprimaryProfession\tknownForTitles\n\
nm0000001\tBad Year\tnineteen\t2000\tactor\ttt0000001\n";
    let file = write_tsv(data);
    let reader = TsvReader::new();

    let result: tsv_reader::Result<Vec<NameRecord>> =
        reader.scan(file.path()).unwrap().collect();
    assert!(result.is_err());
}

#[test]
fn malformed_birth_year_is_fatal_in_batches() {
    let data = "nconst\tprimaryName\tbirthYear\tdeathYear\tprimaryProfession\tknownForTitles\n\
nm0000001\tBad Year\tnineteen\t2000\tactor\ttt0000001\n";
    let file = write_tsv(data);
    let reader = TsvReader::new();

    let result: tsv_reader::Result<Vec<_>> = reader
        .batches(file.path(), name_basics_schema())
        .unwrap()
        .collect();
    assert!(result.is_err());
}

#[test]
fn empty_birth_year_is_a_format_error_not_missing() {
    // An empty field is neither the sentinel nor an integer
    let data = "nconst\tprimaryName\tbirthYear\tdeathYear\tprimaryProfession\tknownForTitles\n\
nm0000001\tNo Year\t\t2000\tactor\ttt0000001\n";
    let file = write_tsv(data);
    let reader = TsvReader::new();

    let result: tsv_reader::Result<Vec<NameRecord>> =
        reader.scan(file.path()).unwrap().collect();
    assert!(result.is_err());
}

#[test]
fn wrong_field_count_is_fatal() {
    let data = "nconst\tprimaryName\tbirthYear\tdeathYear\tprimaryProfession\tknownForTitles\n\
nm0000001\tShort Row\t2001\t2020\tactor\n";
    let file = write_tsv(data);
    let reader = TsvReader::new();

    let scanned: tsv_reader::Result<Vec<NameRecord>> =
        reader.scan(file.path()).unwrap().collect();
    assert!(scanned.is_err());

    let batched: tsv_reader::Result<Vec<_>> = reader
        .batches(file.path(), name_basics_schema())
        .unwrap()
        .collect();
    assert!(batched.is_err());
}
