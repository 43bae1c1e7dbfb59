//! Synthetic facility dataset generator.
//!
//! Every value is bounded by construction, so the only failures are a
//! dataset size of zero or one that does not fit the `u32` id range.

use rand::seq::SliceRandom;
use tracing::debug;

use crate::catalog::{CONTROL_MEASURES, INDUSTRIES, REGIONS};
use crate::error::GenerateError;
use crate::rng::{round_to, FacilityRng};
use crate::types::{
    EmissionSources, FacilityRecord, ParticleComposition, PollutantReadings, SeasonalVariation,
};

/// Dataset size the map page uses.
pub const DEFAULT_FACILITY_COUNT: usize = 300;

const AQI_RANGE: (u32, u32) = (50, 500);
const MIN_CONTROL_MEASURES: usize = 2;
const MAX_CONTROL_MEASURES: usize = 6;

/// Generate `count` records with ids `1..=count`.
pub fn generate(count: usize, rng: &mut FacilityRng) -> Result<Vec<FacilityRecord>, GenerateError> {
    if count == 0 {
        return Err(GenerateError::EmptyDataset);
    }
    let last_id = u32::try_from(count).map_err(|_| GenerateError::TooLarge(count))?;
    let records: Vec<FacilityRecord> = (1..=last_id).map(|id| facility(id, rng)).collect();
    debug!(
        count = records.len(),
        critical = records.iter().filter(|r| r.aqi > 300).count(),
        "generated facility dataset"
    );
    Ok(records)
}

/// Same as [`generate`] with a fresh entropy-seeded source.
pub fn generate_unseeded(count: usize) -> Result<Vec<FacilityRecord>, GenerateError> {
    generate(count, &mut FacilityRng::from_entropy())
}

fn facility(id: u32, rng: &mut FacilityRng) -> FacilityRecord {
    let region = REGIONS[rng.int_in(0, REGIONS.len() as u32) as usize];
    let latitude = round_to(region.center_lat + (rng.unit() - 0.5) * region.spread_deg, 6);
    let longitude = round_to(region.center_lon + (rng.unit() - 0.5) * region.spread_deg, 6);
    let industry = INDUSTRIES[rng.int_in(0, INDUSTRIES.len() as u32) as usize];

    let aqi = rng.int_in(AQI_RANGE.0, AQI_RANGE.1);
    let pollutants = pollutants_for(aqi, rng);

    let particle_composition = ParticleComposition {
        organic_carbon: rng.int_in(15, 40),
        black_carbon: rng.int_in(5, 20),
        sulfates: rng.int_in(10, 30),
        nitrates: rng.int_in(5, 25),
        metals: rng.int_in(2, 12),
        dust: rng.int_in(5, 25),
    };
    let emission_sources = EmissionSources {
        stacks: rng.int_in(30, 70),
        vehicles: rng.int_in(5, 25),
        processes: rng.int_in(10, 40),
        fugitive: rng.int_in(5, 20),
    };

    let compliance_score = rng.int_in(0, 100);
    let violations = rng.int_in(0, 15);
    let health_impact_radius = rng.tenths_in(2.0, 10.0);
    let population_affected = rng.int_in(10_000, 110_000);

    let take = rng.int_in(MIN_CONTROL_MEASURES as u32, MAX_CONTROL_MEASURES as u32 + 1) as usize;
    let control_measures = CONTROL_MEASURES
        .choose_multiple(&mut rng.0, take)
        .map(|m| m.to_string())
        .collect();

    let seasonal_variation = SeasonalVariation {
        winter: rng.int_in(110, 160),
        summer: rng.int_in(70, 100),
        monsoon: rng.int_in(50, 80),
    };

    FacilityRecord {
        id,
        name: format!("{} {:03}", industry.name, id),
        state: region.name.to_string(),
        industry: industry.name.to_string(),
        products: industry.products.to_string(),
        latitude,
        longitude,
        year_established: rng.int_in(1960, 2020),
        employees: rng.int_in(100, 5_100),
        aqi,
        pollutants,
        particle_composition,
        emission_sources,
        compliance_score,
        violations,
        health_impact_radius,
        population_affected,
        control_measures,
        seasonal_variation,
    }
}

/// PM2.5 tracks AQI, PM10 tracks PM2.5; the rest are drawn on their own ranges.
fn pollutants_for(aqi: u32, rng: &mut FacilityRng) -> PollutantReadings {
    let pm25 = (f64::from(aqi) * 0.4 + rng.unit() * 50.0).floor();
    let pm10 = (pm25 * 1.8 + rng.unit() * 30.0).floor();
    PollutantReadings {
        pm25,
        pm10,
        co: rng.tenths_in(2.0, 17.0),
        co2: f64::from(rng.int_in(400, 1_201)),
        nox: f64::from(rng.int_in(30, 181)),
        so2: f64::from(rng.int_in(40, 241)),
        o3: f64::from(rng.int_in(20, 141)),
        voc: f64::from(rng.int_in(100, 601)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{industry_by_name, region_by_name};
    use std::collections::HashSet;

    fn dataset(seed: u64) -> Vec<FacilityRecord> {
        generate(DEFAULT_FACILITY_COUNT, &mut FacilityRng::from_seed_u64(seed)).unwrap()
    }

    #[test]
    fn ids_are_unique_and_sequential() {
        let records = dataset(1);
        assert_eq!(records.len(), DEFAULT_FACILITY_COUNT);
        let ids: HashSet<u32> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), DEFAULT_FACILITY_COUNT);
        assert!(records
            .iter()
            .all(|r| (1..=DEFAULT_FACILITY_COUNT as u32).contains(&r.id)));
    }

    #[test]
    fn zero_count_is_rejected() {
        let mut rng = FacilityRng::from_seed_u64(1);
        assert_eq!(generate(0, &mut rng), Err(GenerateError::EmptyDataset));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn count_beyond_id_range_is_rejected() {
        let mut rng = FacilityRng::from_seed_u64(1);
        let n = u32::MAX as usize + 2;
        assert_eq!(generate(n, &mut rng), Err(GenerateError::TooLarge(n)));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        assert_eq!(dataset(99), dataset(99));
        assert_ne!(dataset(99), dataset(100));
    }

    #[test]
    fn values_stay_in_documented_ranges() {
        for r in dataset(2) {
            assert!((50..500).contains(&r.aqi));
            assert!(r.pollutants.pm25 >= 0.0);
            assert!(r.pollutants.pm10 >= 0.0);
            let p = r.pollutants;
            assert!((2.0..=17.0).contains(&p.co));
            assert!((400.0..=1200.0).contains(&p.co2));
            assert!((30.0..=180.0).contains(&p.nox));
            assert!((40.0..=240.0).contains(&p.so2));
            assert!((20.0..=140.0).contains(&p.o3));
            assert!((100.0..=600.0).contains(&p.voc));
            assert!(r.compliance_score < 100);
            assert!(r.violations < 15);
            assert!((2.0..=10.0).contains(&r.health_impact_radius));
            assert!((10_000..110_000).contains(&r.population_affected));
            assert!((1960..2020).contains(&r.year_established));
            assert!((100..5_100).contains(&r.employees));
        }
    }

    #[test]
    fn pm25_is_derived_from_aqi() {
        for r in dataset(3) {
            let base = f64::from(r.aqi) * 0.4;
            assert!(r.pollutants.pm25 >= base.floor());
            assert!(r.pollutants.pm25 < base + 50.0);
            let pm10_base = r.pollutants.pm25 * 1.8;
            assert!(r.pollutants.pm10 >= pm10_base.floor());
            assert!(r.pollutants.pm10 < pm10_base + 30.0);
        }
    }

    #[test]
    fn coordinates_stay_near_region_center() {
        for r in dataset(4) {
            let region = region_by_name(&r.state).expect("known region");
            let half = region.spread_deg / 2.0 + 1e-6;
            assert!((r.latitude - region.center_lat).abs() <= half);
            assert!((r.longitude - region.center_lon).abs() <= half);
            assert_eq!(round_to(r.latitude, 6), r.latitude);
        }
    }

    #[test]
    fn names_and_products_follow_industry() {
        for r in dataset(5) {
            let industry = industry_by_name(&r.industry).expect("known industry");
            assert_eq!(r.products, industry.products);
            assert_eq!(r.name, format!("{} {:03}", r.industry, r.id));
        }
    }

    #[test]
    fn control_measures_are_distinct_catalog_entries() {
        for r in dataset(6) {
            let n = r.control_measures.len();
            assert!((MIN_CONTROL_MEASURES..=MAX_CONTROL_MEASURES).contains(&n));
            let unique: HashSet<&String> = r.control_measures.iter().collect();
            assert_eq!(unique.len(), n);
            assert!(r
                .control_measures
                .iter()
                .all(|m| CONTROL_MEASURES.contains(&m.as_str())));
        }
    }

    #[test]
    fn unseeded_generation_has_requested_size() {
        assert_eq!(generate_unseeded(10).unwrap().len(), 10);
    }
}
