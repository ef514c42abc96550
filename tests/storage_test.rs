mod utils;

use std::path::Path;

use tsv_reader::TsvReaderError;
use tsv_reader::query::collect_categories;
use tsv_reader::storage::PrincipalsStore;

use utils::{TITLE_PRINCIPALS_TSV, expected_categories, write_tsv};

#[test]
fn load_creates_the_table_and_counts_rows() -> tsv_reader::Result<()> {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db_path = dir.path().join("imdb.db");
    let data = write_tsv(TITLE_PRINCIPALS_TSV);

    let mut store = PrincipalsStore::open(&db_path)?;
    let inserted = store.load_tsv(data.path(), None)?;

    assert_eq!(inserted, 5);
    assert_eq!(store.row_count()?, 5);
    Ok(())
}

#[test]
fn loading_twice_appends_rather_than_replacing() -> tsv_reader::Result<()> {
    let data = write_tsv(TITLE_PRINCIPALS_TSV);
    let mut store = PrincipalsStore::open_in_memory()?;

    store.load_tsv(data.path(), None)?;
    // A second load appends; batch size must not matter
    store.load_tsv(data.path(), Some(2))?;

    assert_eq!(store.row_count()?, 10);
    Ok(())
}

#[test]
fn distinct_categories_match_the_source_file() -> tsv_reader::Result<()> {
    let data = write_tsv(TITLE_PRINCIPALS_TSV);
    let from_file = collect_categories(data.path())?;

    let mut store = PrincipalsStore::open_in_memory()?;
    store.load_tsv(data.path(), None)?;

    assert_eq!(store.distinct_categories()?, from_file);
    assert_eq!(store.distinct_categories()?, expected_categories());
    Ok(())
}

#[test]
fn table_answers_queries_after_the_source_file_is_gone() -> tsv_reader::Result<()> {
    let data = write_tsv(TITLE_PRINCIPALS_TSV);
    let mut store = PrincipalsStore::open_in_memory()?;
    store.load_tsv(data.path(), None)?;

    data.close().expect("remove source file");

    assert_eq!(store.distinct_categories()?, expected_categories());
    assert_eq!(store.row_count()?, 5);
    Ok(())
}

#[test]
fn sentinel_fields_are_stored_as_sql_null() -> tsv_reader::Result<()> {
    let data = write_tsv(TITLE_PRINCIPALS_TSV);
    let mut store = PrincipalsStore::open_in_memory()?;
    store.load_tsv(data.path(), None)?;

    let job: Option<String> = store
        .connection()
        .query_row("SELECT job FROM principals LIMIT 1", [], |row| row.get(0))?;
    assert_eq!(job, None);

    let tconst: String = store
        .connection()
        .query_row("SELECT tconst FROM principals LIMIT 1", [], |row| row.get(0))?;
    assert_eq!(tconst, "tt0000001");
    Ok(())
}

#[test]
fn missing_source_file_is_fatal() {
    let mut store = PrincipalsStore::open_in_memory().expect("open in-memory store");

    let err = store
        .load_tsv(Path::new("no-such-file.tsv"), None)
        .unwrap_err();
    assert!(matches!(err, TsvReaderError::IoError(_)));
}
