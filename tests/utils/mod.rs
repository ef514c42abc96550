use std::io::Write;

use tempfile::NamedTempFile;

/// The five-record entity dataset used across tests
pub const NAME_BASICS_TSV: &str =
    "nconst\tprimaryName\tbirthYear\tdeathYear\tprimaryProfession\tknownForTitles\n\
nm0000001\tActor One\t2001\t2020\tactor\ttt0000001\n\
nm0000002\tActor Two\t1999\t2020\tactor\ttt0000002\n\
nm0000003\tYoung Actor\t2003\t2019\tactor\ttt0000003\n\
nm0000004\tOlder Actor\t1980\t\\N\tactor\ttt0000004\n\
nm0000005\tAnother Actor\t2005\t2021\tactor,producer\ttt0000005\n";

/// The five-record role-assignment dataset used across tests
pub const TITLE_PRINCIPALS_TSV: &str =
    "tconst\tordering\tnconst\tcategory\tjob\tcharacters\n\
tt0000001\t1\tnm0005690\tdirector\t\\N\t\\N\n\
tt0000002\t1\tnm0374658\tactor\t\\N\t\\N\n\
tt0000003\t1\tnm0005690\tcinematographer\t\\N\t\\N\n\
tt0000004\t1\tnm1335271\tcomposer\t\\N\t\\N\n\
tt0000005\t1\tnm0005690\tactor\t\\N\t\\N\n";

/// Writes the given contents to a fresh temp file
pub fn write_tsv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

/// The distinct categories present in `TITLE_PRINCIPALS_TSV`
pub fn expected_categories() -> rustc_hash::FxHashSet<String> {
    ["director", "actor", "cinematographer", "composer"]
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}
