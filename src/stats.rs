use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::bands::AqiBand;
use crate::types::FacilityRecord;

/// AQI strictly above this marks a critical facility.
pub const CRITICAL_AQI: u32 = 300;

/// Dashboard summary of the current filtered view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    pub count: usize,
    #[serde(rename = "avgAQI")]
    pub avg_aqi: u32,
    pub critical_count: usize,
    pub total_population: u64,
    pub avg_compliance: u32,
    #[serde(rename = "avgPM25")]
    pub avg_pm25: u32,
}

/// Summarize a view. An empty view yields all zeros.
pub fn summarize(records: &[FacilityRecord]) -> AggregateStats {
    let count = records.len();
    if count == 0 {
        return AggregateStats::default();
    }

    let aqi_sum: f64 = records.iter().map(|r| f64::from(r.aqi)).sum();
    let compliance_sum: f64 = records.iter().map(|r| f64::from(r.compliance_score)).sum();
    let pm25_sum: f64 = records.iter().map(|r| r.pollutants.pm25).sum();

    AggregateStats {
        count,
        avg_aqi: rounded_mean(aqi_sum, count),
        critical_count: records.iter().filter(|r| r.aqi > CRITICAL_AQI).count(),
        total_population: records.iter().map(|r| u64::from(r.population_affected)).sum(),
        avg_compliance: rounded_mean(compliance_sum, count),
        avg_pm25: rounded_mean(pm25_sum, count),
    }
}

fn rounded_mean(sum: f64, count: usize) -> u32 {
    (sum / count as f64).round().max(0.0) as u32
}

/// Facilities per AQI band. Every band is present, zero counts included.
pub fn band_distribution(records: &[FacilityRecord]) -> BTreeMap<AqiBand, usize> {
    let mut out: BTreeMap<AqiBand, usize> = AqiBand::ALL.iter().map(|b| (*b, 0)).collect();
    for r in records {
        *out.entry(AqiBand::from_aqi(r.aqi)).or_insert(0) += 1;
    }
    out
}
