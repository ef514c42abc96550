use std::path::Path;

use anyhow::Context;
use itertools::Itertools;
use log::{info, warn};

use tsv_reader::query;
use tsv_reader::storage::PrincipalsStore;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let names_path = Path::new("name.basics.tsv");
    let principals_path = Path::new("title.principals.tsv");

    if names_path.exists() {
        let matches = query::collect_deceased_born_after(names_path, 2000)?;
        info!("Scan: {} deceased people born after 2000", matches.len());

        let batched = query::collect_deceased_born_after_batched(names_path, 2000, None)?;
        info!("Batched: {} deceased people born after 2000", batched.len());
    } else {
        warn!("Dataset not found: {}", names_path.display());
    }

    if principals_path.exists() {
        let categories = query::collect_categories(principals_path)?;
        info!("Categories from file: {}", categories.iter().sorted().join(", "));

        let mut store = PrincipalsStore::open(Path::new("imdb.db"))
            .context("Failed to open imdb.db")?;
        let rows = store.load_tsv(principals_path, None)?;
        info!("Loaded {rows} rows into SQLite");

        let db_categories = store.distinct_categories()?;
        info!(
            "Categories from SQLite: {}",
            db_categories.iter().sorted().join(", ")
        );
    } else {
        warn!("Dataset not found: {}", principals_path.display());
    }

    Ok(())
}
