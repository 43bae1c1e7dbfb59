use crate::error::CriteriaError;
use crate::filter::{apply, FilterCriteria};
use crate::guards::CriteriaGuard;
use crate::stats::{summarize, AggregateStats};
use crate::types::FacilityRecord;

/// One map page view: the dataset generated at startup plus the current
/// criteria, filtered view and stats. The dataset is owned here and never
/// changes after construction.
#[derive(Debug, Clone)]
pub struct MapSession {
    dataset: Vec<FacilityRecord>,
    criteria: FilterCriteria,
    view: Vec<FacilityRecord>,
    stats: AggregateStats,
}

impl MapSession {
    pub fn new(dataset: Vec<FacilityRecord>) -> Self {
        let criteria = FilterCriteria::default();
        let view = apply(&dataset, &criteria);
        let stats = summarize(&view);
        Self {
            dataset,
            criteria,
            view,
            stats,
        }
    }

    /// Validate and apply new criteria. On rejection the previous view is kept.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) -> Result<(), CriteriaError> {
        CriteriaGuard::validate(&criteria)?;
        self.view = apply(&self.dataset, &criteria);
        self.stats = summarize(&self.view);
        self.criteria = criteria;
        Ok(())
    }

    pub fn dataset(&self) -> &[FacilityRecord] {
        &self.dataset
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn view(&self) -> &[FacilityRecord] {
        &self.view
    }

    pub fn stats(&self) -> &AggregateStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::SortKey;
    use crate::generator::generate;
    use crate::rng::FacilityRng;

    fn session() -> MapSession {
        MapSession::new(generate(120, &mut FacilityRng::from_seed_u64(5)).unwrap())
    }

    #[test]
    fn starts_with_everything_visible() {
        let s = session();
        assert_eq!(s.view().len(), 120);
        assert_eq!(s.stats().count, 120);
        assert_eq!(s.criteria(), &FilterCriteria::default());
    }

    #[test]
    fn criteria_change_recomputes_view_and_stats() {
        let mut s = session();
        s.set_criteria(FilterCriteria {
            aqi_min: 301,
            aqi_max: 500,
            sort_by: SortKey::Population,
            ..FilterCriteria::default()
        })
        .unwrap();
        assert!(s.view().iter().all(|r| r.aqi > 300));
        assert_eq!(s.stats().critical_count, s.view().len());
        assert_eq!(s.dataset().len(), 120);
    }

    #[test]
    fn rejected_criteria_keep_previous_view() {
        let mut s = session();
        let before = s.view().to_vec();
        let err = s.set_criteria(FilterCriteria {
            aqi_min: 400,
            aqi_max: 100,
            ..FilterCriteria::default()
        });
        assert!(err.is_err());
        assert_eq!(s.view(), before.as_slice());
        assert_eq!(s.criteria(), &FilterCriteria::default());
    }

    #[test]
    fn empty_view_has_zero_stats() {
        let mut s = session();
        s.set_criteria(FilterCriteria {
            search: "no such facility".into(),
            ..FilterCriteria::default()
        })
        .unwrap();
        assert!(s.view().is_empty());
        assert_eq!(s.stats(), &AggregateStats::default());
    }
}
