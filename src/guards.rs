use tracing::warn;

use crate::catalog::{industry_by_name, region_by_name};
use crate::error::CriteriaError;
use crate::filter::FilterCriteria;

/// CriteriaGuard: checks user-supplied criteria before they reach the pipeline.
/// The pipeline itself never fails; an unguarded bad range just yields an empty view.
pub struct CriteriaGuard;

impl CriteriaGuard {
    pub fn validate(criteria: &FilterCriteria) -> Result<(), CriteriaError> {
        let result = Self::check(criteria);
        if let Err(e) = &result {
            warn!(error = %e, "rejected filter criteria");
        }
        result
    }

    fn check(criteria: &FilterCriteria) -> Result<(), CriteriaError> {
        if criteria.aqi_min > criteria.aqi_max {
            return Err(CriteriaError::InvertedAqiRange {
                min: criteria.aqi_min,
                max: criteria.aqi_max,
            });
        }
        if let Some(region) = &criteria.region {
            if region_by_name(region).is_none() {
                return Err(CriteriaError::UnknownRegion(region.clone()));
            }
        }
        if let Some(industry) = &criteria.industry {
            if industry_by_name(industry).is_none() {
                return Err(CriteriaError::UnknownIndustry(industry.clone()));
            }
        }
        Ok(())
    }
}
