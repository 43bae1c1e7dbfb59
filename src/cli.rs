use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use cyboair_facility_map::filter::parse_selection;
use cyboair_facility_map::{FilterCriteria, Pollutant, SortKey};

#[derive(Parser, Debug)]
#[command(name = "cyboair-facility-map")]
#[command(about = "Synthetic industrial air-quality facility map")]
#[command(version)]
pub struct Cli {
    /// TOML config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed for a reproducible dataset (overrides config)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Number of facilities to generate (overrides config)
    #[arg(long, global = true)]
    pub count: Option<usize>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the filtered view as a table
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Print aggregate stats and the AQI band distribution as JSON
    Stats {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Write the filtered view to air-pollution-data-<date>.json
    Export {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output directory (overrides config)
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
    /// Print the filtered view as a GeoJSON FeatureCollection
    Map {
        #[command(flatten)]
        filter: FilterArgs,
    },
}

impl Command {
    pub fn filter(&self) -> &FilterArgs {
        match self {
            Command::List { filter }
            | Command::Stats { filter }
            | Command::Export { filter, .. }
            | Command::Map { filter } => filter,
        }
    }
}

/// Map page controls, as flags.
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Case-insensitive text matched against name, state and industry
    #[arg(long, default_value = "")]
    pub search: String,

    /// State name, or "All"
    #[arg(long, default_value = "All")]
    pub region: String,

    /// Industry name, or "All"
    #[arg(long, default_value = "All")]
    pub industry: String,

    #[arg(long, default_value_t = 0)]
    pub aqi_min: u32,

    #[arg(long, default_value_t = 500)]
    pub aqi_max: u32,

    /// Pollutant focus (PM2.5, PM10, CO, CO2, NOx, SO2, O3, VOC), or "All"
    #[arg(long, default_value = "All")]
    pub pollutant: String,

    /// aqi, name, compliance or population
    #[arg(long, default_value = "aqi")]
    pub sort: SortKey,
}

impl FilterArgs {
    pub fn criteria(&self) -> Result<FilterCriteria, String> {
        let pollutant = match parse_selection(&self.pollutant) {
            Some(p) => Some(p.parse::<Pollutant>()?),
            None => None,
        };
        Ok(FilterCriteria {
            search: self.search.clone(),
            region: parse_selection(&self.region),
            industry: parse_selection(&self.industry),
            aqi_min: self.aqi_min,
            aqi_max: self.aqi_max,
            pollutant,
            sort_by: self.sort,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_give_default_criteria() {
        let cli = Cli::parse_from(["cyboair-facility-map", "list"]);
        let criteria = cli.command.filter().criteria().unwrap();
        assert_eq!(criteria, FilterCriteria::default());
    }

    #[test]
    fn flags_map_onto_criteria() {
        let cli = Cli::parse_from([
            "cyboair-facility-map",
            "--seed",
            "7",
            "stats",
            "--region",
            "Delhi",
            "--pollutant",
            "pm25",
            "--aqi-min",
            "100",
            "--sort",
            "name",
        ]);
        assert_eq!(cli.seed, Some(7));
        let criteria = cli.command.filter().criteria().unwrap();
        assert_eq!(criteria.region.as_deref(), Some("Delhi"));
        assert_eq!(criteria.industry, None);
        assert_eq!(criteria.pollutant, Some(Pollutant::Pm25));
        assert_eq!(criteria.aqi_min, 100);
        assert_eq!(criteria.sort_by, SortKey::Name);
    }

    #[test]
    fn unknown_pollutant_is_an_error() {
        let cli = Cli::parse_from(["cyboair-facility-map", "map", "--pollutant", "radon"]);
        assert!(cli.command.filter().criteria().is_err());
    }
}
