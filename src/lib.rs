#![forbid(unsafe_code)]

//! Data core of the Cybo-Air facility map: a synthetic dataset of industrial
//! sites, the filter/sort pipeline behind the map controls, the dashboard
//! aggregates, and JSON export.

pub mod bands;
pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod generator;
pub mod guards;
pub mod render;
pub mod rng;
pub mod session;
pub mod stats;
pub mod types;

pub use bands::{AqiBand, AqiBandClassifier, StandardAqiBands, ThresholdAqiBands};
pub use config::FacilityMapConfig;
pub use error::{
    ConfigError, CriteriaError, ExportError, FacilityMapError, GenerateError, RenderError,
};
pub use export::{export_filename, from_json, to_json, write_export};
pub use filter::{apply, FilterCriteria, SortKey};
pub use generator::{generate, generate_unseeded, DEFAULT_FACILITY_COUNT};
pub use guards::CriteriaGuard;
pub use render::{render_view, GeoJsonBackend, MapBackend, MapMarker, TextTableBackend};
pub use rng::FacilityRng;
pub use session::MapSession;
pub use stats::{band_distribution, summarize, AggregateStats};
pub use types::{FacilityRecord, Pollutant};
