use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{FacilityRecord, Pollutant};

/// Sort order for the filtered view. Exactly one key is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// AQI, highest first.
    #[default]
    Aqi,
    /// Name, ascending.
    Name,
    /// Compliance score, highest first.
    Compliance,
    /// Population affected, highest first.
    Population,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aqi" => Ok(SortKey::Aqi),
            "name" => Ok(SortKey::Name),
            "compliance" => Ok(SortKey::Compliance),
            "population" => Ok(SortKey::Population),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

/// User-selected filter and sort parameters. `None` means "All".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search: String,
    pub region: Option<String>,
    pub industry: Option<String>,
    /// Inclusive.
    pub aqi_min: u32,
    /// Inclusive.
    pub aqi_max: u32,
    pub pollutant: Option<Pollutant>,
    pub sort_by: SortKey,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        FilterCriteria {
            search: String::new(),
            region: None,
            industry: None,
            aqi_min: 0,
            aqi_max: 500,
            pollutant: None,
            sort_by: SortKey::Aqi,
        }
    }
}

/// Maps the UI's "All" sentinel (or an empty value) to `None`.
pub fn parse_selection(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl FilterCriteria {
    pub fn matches(&self, record: &FacilityRecord) -> bool {
        self.matches_search(record)
            && self.region.as_ref().map_or(true, |r| &record.state == r)
            && self.industry.as_ref().map_or(true, |i| &record.industry == i)
            && (self.aqi_min..=self.aqi_max).contains(&record.aqi)
            // Generated readings are always positive, so this rarely excludes anything.
            && self
                .pollutant
                .map_or(true, |p| record.pollutants.value(p) > 0.0)
    }

    fn matches_search(&self, record: &FacilityRecord) -> bool {
        let needle = self.search.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&record.name, &record.state, &record.industry]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Filter and sort `dataset` into a new view. The input is left untouched.
pub fn apply(dataset: &[FacilityRecord], criteria: &FilterCriteria) -> Vec<FacilityRecord> {
    let mut view: Vec<FacilityRecord> = dataset
        .iter()
        .filter(|r| criteria.matches(r))
        .cloned()
        .collect();
    sort_view(&mut view, criteria.sort_by);
    debug!(
        total = dataset.len(),
        matched = view.len(),
        sort = ?criteria.sort_by,
        "applied filter criteria"
    );
    view
}

pub fn sort_view(view: &mut [FacilityRecord], key: SortKey) {
    match key {
        SortKey::Aqi => view.sort_by(|a, b| b.aqi.cmp(&a.aqi)),
        SortKey::Name => view.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortKey::Compliance => view.sort_by(|a, b| b.compliance_score.cmp(&a.compliance_score)),
        SortKey::Population => {
            view.sort_by(|a, b| b.population_affected.cmp(&a.population_affected))
        }
    }
}

/// Locale-style ordering: case-folded first; on a tie lowercase sorts before uppercase.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}
