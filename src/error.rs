use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("dataset size must be positive")]
    EmptyDataset,
    #[error("dataset size {0} exceeds the id range")]
    TooLarge(usize),
}

/// Rejected filter criteria.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("aqi range inverted: min {min} > max {max}")]
    InvertedAqiRange { min: u32, max: u32 },
    #[error("unknown region: {0}")]
    UnknownRegion(String),
    #[error("unknown industry: {0}")]
    UnknownIndustry(String),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("render output failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("render encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Crate-level error for callers that drive the whole pipeline.
#[derive(Debug, Error)]
pub enum FacilityMapError {
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error(transparent)]
    Criteria(#[from] CriteriaError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate_step(fail: bool) -> Result<(), GenerateError> {
        if fail {
            Err(GenerateError::EmptyDataset)
        } else {
            Ok(())
        }
    }

    fn criteria_step(inverted: bool) -> Result<(), CriteriaError> {
        if inverted {
            Err(CriteriaError::InvertedAqiRange { min: 2, max: 1 })
        } else {
            Ok(())
        }
    }

    fn config_step() -> Result<(), ConfigError> {
        Err(ConfigError::Invalid("dataset.count must be positive"))
    }

    fn pipeline(fail_generate: bool, bad_range: bool) -> Result<(), FacilityMapError> {
        generate_step(fail_generate)?;
        criteria_step(bad_range)?;
        config_step()?;
        Ok(())
    }

    #[test]
    fn test_errors_convert_through_question_mark() {
        assert!(matches!(
            pipeline(true, false),
            Err(FacilityMapError::Generate(GenerateError::EmptyDataset))
        ));
        assert!(matches!(
            pipeline(false, true),
            Err(FacilityMapError::Criteria(CriteriaError::InvertedAqiRange { .. }))
        ));
        let err = pipeline(false, false).unwrap_err();
        assert!(matches!(err, FacilityMapError::Config(ConfigError::Invalid(_))));
        assert_eq!(err.to_string(), "invalid config: dataset.count must be positive");
    }

    #[test]
    fn test_io_failures_reach_crate_error() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: FacilityMapError = RenderError::from(io).into();
        assert!(matches!(err, FacilityMapError::Render(RenderError::Io(_))));
    }
}
