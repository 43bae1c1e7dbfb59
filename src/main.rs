use std::collections::BTreeMap;
use std::error::Error;
use std::io::{self, Write};

use clap::Parser;
use tracing::info;

use cyboair_facility_map::config::DatasetConfig;
use cyboair_facility_map::export::today;
use cyboair_facility_map::{
    band_distribution, generate, render_view, write_export, FacilityMapConfig, FacilityMapError,
    FacilityRng, FilterCriteria, GeoJsonBackend, MapSession, TextTableBackend,
};

mod cli;

use cli::{Cli, Command};

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => FacilityMapConfig::from_config_file(path)?,
        None => FacilityMapConfig::default(),
    };
    if let Some(count) = cli.count {
        config.dataset.count = count;
    }
    if let Some(seed) = cli.seed {
        config.dataset.seed = Some(seed);
    }
    config.validate()?;

    let criteria = cli.command.filter().criteria()?;
    let session = build_session(&config.dataset, criteria)?;

    let stdout = io::stdout();
    match &cli.command {
        Command::List { .. } => {
            let mut table = TextTableBackend::new(stdout.lock());
            render_view(&mut table, session.view(), session.stats())?;
        }
        Command::Stats { .. } => {
            let bands: BTreeMap<&str, usize> = band_distribution(session.view())
                .into_iter()
                .map(|(band, n)| (band.label(), n))
                .collect();
            let body = serde_json::json!({ "stats": session.stats(), "bands": bands });
            let mut out = stdout.lock();
            writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
        }
        Command::Export { out_dir, .. } => {
            let dir = out_dir.as_ref().unwrap_or(&config.export.dir);
            let path = write_export(dir, session.view(), today())?;
            println!("{}", path.display());
        }
        Command::Map { .. } => {
            let mut geojson = GeoJsonBackend::new();
            render_view(&mut geojson, session.view(), session.stats())?;
            let mut out = stdout.lock();
            writeln!(out, "{}", geojson.to_string_pretty()?)?;
        }
    }

    Ok(())
}

/// Generate the dataset once and hand it to the session; nothing else holds it.
fn build_session(
    dataset: &DatasetConfig,
    criteria: FilterCriteria,
) -> Result<MapSession, FacilityMapError> {
    let mut rng = match dataset.seed {
        Some(seed) => FacilityRng::from_seed_u64(seed),
        None => FacilityRng::from_entropy(),
    };
    let records = generate(dataset.count, &mut rng)?;
    info!(count = records.len(), seed = ?dataset.seed, "facility dataset ready");

    let mut session = MapSession::new(records);
    session.set_criteria(criteria)?;
    Ok(session)
}

/// Logs go to stderr so stdout stays machine-readable.
fn setup_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("cyboair_facility_map=debug,info")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}
