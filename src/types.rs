use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One synthetic industrial site, as shown on the facility map.
/// Field names serialize in camelCase to match the exported JSON schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityRecord {
    pub id: u32,
    pub name: String,
    pub state: String,
    pub industry: String,
    pub products: String,
    pub latitude: f64,
    pub longitude: f64,
    pub year_established: u32,
    pub employees: u32,
    pub aqi: u32,
    pub pollutants: PollutantReadings,
    pub particle_composition: ParticleComposition,
    pub emission_sources: EmissionSources,
    pub compliance_score: u32,
    pub violations: u32,
    /// Kilometres, one decimal.
    pub health_impact_radius: f64,
    pub population_affected: u32,
    pub control_measures: Vec<String>,
    pub seasonal_variation: SeasonalVariation,
}

/// Concentration snapshot. AQI is the generative seed; these are derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PollutantReadings {
    pub pm25: f64,
    pub pm10: f64,
    pub co: f64,
    pub co2: f64,
    pub nox: f64,
    pub so2: f64,
    pub o3: f64,
    pub voc: f64,
}

impl PollutantReadings {
    pub fn value(&self, pollutant: Pollutant) -> f64 {
        match pollutant {
            Pollutant::Pm25 => self.pm25,
            Pollutant::Pm10 => self.pm10,
            Pollutant::Co => self.co,
            Pollutant::Co2 => self.co2,
            Pollutant::Nox => self.nox,
            Pollutant::So2 => self.so2,
            Pollutant::O3 => self.o3,
            Pollutant::Voc => self.voc,
        }
    }
}

/// Percentage-like shares. They are drawn independently and do not sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticleComposition {
    pub organic_carbon: u32,
    pub black_carbon: u32,
    pub sulfates: u32,
    pub nitrates: u32,
    pub metals: u32,
    pub dust: u32,
}

/// Same caveat as [`ParticleComposition`]: not normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmissionSources {
    pub stacks: u32,
    pub vehicles: u32,
    pub processes: u32,
    pub fugitive: u32,
}

/// Relative pollution intensity per season, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalVariation {
    pub winter: u32,
    pub summer: u32,
    pub monsoon: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pollutant {
    #[serde(rename = "PM2.5")]
    Pm25,
    #[serde(rename = "PM10")]
    Pm10,
    #[serde(rename = "CO")]
    Co,
    #[serde(rename = "CO2")]
    Co2,
    #[serde(rename = "NOx")]
    Nox,
    #[serde(rename = "SO2")]
    So2,
    #[serde(rename = "O3")]
    O3,
    #[serde(rename = "VOC")]
    Voc,
}

impl Pollutant {
    pub const ALL: [Pollutant; 8] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::Co,
        Pollutant::Co2,
        Pollutant::Nox,
        Pollutant::So2,
        Pollutant::O3,
        Pollutant::Voc,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::Co => "CO",
            Pollutant::Co2 => "CO2",
            Pollutant::Nox => "NOx",
            Pollutant::So2 => "SO2",
            Pollutant::O3 => "O3",
            Pollutant::Voc => "VOC",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the display label in any case, plus `pm25` for shells that dislike dots.
impl FromStr for Pollutant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        if wanted == "pm25" {
            return Ok(Pollutant::Pm25);
        }
        Pollutant::ALL
            .into_iter()
            .find(|p| p.label().to_ascii_lowercase() == wanted)
            .ok_or_else(|| format!("unknown pollutant: {s}"))
    }
}
