use serde::{Deserialize, Serialize};

/// AQI severity band, used for marker colours and the dashboard legend.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum AqiBand {
    Good,
    Satisfactory,
    Moderate,
    Poor,
    VeryPoor,
    Severe,
}

impl AqiBand {
    pub const ALL: [AqiBand; 6] = [
        AqiBand::Good,
        AqiBand::Satisfactory,
        AqiBand::Moderate,
        AqiBand::Poor,
        AqiBand::VeryPoor,
        AqiBand::Severe,
    ];

    /// Classify with the standard breakpoints.
    pub fn from_aqi(aqi: u32) -> Self {
        StandardAqiBands.classify(aqi)
    }

    pub fn label(self) -> &'static str {
        match self {
            AqiBand::Good => "Good",
            AqiBand::Satisfactory => "Satisfactory",
            AqiBand::Moderate => "Moderate",
            AqiBand::Poor => "Poor",
            AqiBand::VeryPoor => "Very Poor",
            AqiBand::Severe => "Severe",
        }
    }

    pub fn color_hex(self) -> &'static str {
        match self {
            AqiBand::Good => "#00b050",
            AqiBand::Satisfactory => "#92d050",
            AqiBand::Moderate => "#ffff00",
            AqiBand::Poor => "#ff9900",
            AqiBand::VeryPoor => "#ff0000",
            AqiBand::Severe => "#c00000",
        }
    }

    /// Matches the "critical facility" rule, AQI > 300.
    pub fn is_critical(self) -> bool {
        matches!(self, AqiBand::VeryPoor | AqiBand::Severe)
    }
}

/// Trait for AQI band classification, so alternative breakpoint tables can be swapped in.
pub trait AqiBandClassifier {
    fn classify(&self, aqi: u32) -> AqiBand;
}

/// Upper-inclusive breakpoints 50 / 100 / 200 / 300 / 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardAqiBands;

impl AqiBandClassifier for StandardAqiBands {
    fn classify(&self, aqi: u32) -> AqiBand {
        ThresholdAqiBands::STANDARD.classify(aqi)
    }
}

/// Threshold table: `upper[i]` is the highest AQI still inside band `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdAqiBands {
    pub upper: [u32; 5],
}

impl ThresholdAqiBands {
    pub const STANDARD: ThresholdAqiBands = ThresholdAqiBands {
        upper: [50, 100, 200, 300, 400],
    };
}

impl AqiBandClassifier for ThresholdAqiBands {
    fn classify(&self, aqi: u32) -> AqiBand {
        self.upper
            .iter()
            .position(|&limit| aqi <= limit)
            .map_or(AqiBand::Severe, |idx| AqiBand::ALL[idx])
    }
}
