use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Indicator {
    Moisture,
    Sunlight,
    Nutrition,
    PestRisk,
    SoilHealth,
}

impl Indicator {
    pub fn label(self) -> &'static str {
        match self {
            Indicator::Moisture => "Moisture level",
            Indicator::Sunlight => "Sunlight",
            Indicator::Nutrition => "Nutrient health",
            Indicator::PestRisk => "Pest risk",
            Indicator::SoilHealth => "Soil health",
        }
    }

    fn lower_is_better(self) -> bool {
        matches!(self, Indicator::PestRisk)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    Good,
    Adequate,
    Poor,
    LowRisk,
    ModerateRisk,
    HighRisk,
}

impl Rating {
    pub fn for_value(indicator: Indicator, percent: u8) -> Self {
        if indicator.lower_is_better() {
            match percent {
                0..=20 => Rating::LowRisk,
                21..=50 => Rating::ModerateRisk,
                _ => Rating::HighRisk,
            }
        } else {
            rate_higher_is_better(percent)
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rating::Good => "good condition",
            Rating::Adequate => "adequate level",
            Rating::Poor => "needs attention",
            Rating::LowRisk => "low risk",
            Rating::ModerateRisk => "moderate risk",
            Rating::HighRisk => "high risk",
        }
    }
}

fn rate_higher_is_better(percent: u8) -> Rating {
    match percent {
        85.. => Rating::Good,
        60..=84 => Rating::Adequate,
        _ => Rating::Poor,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReading {
    pub indicator: Indicator,
    pub percent: u8,
    pub rating: Rating,
}

impl HealthReading {
    pub fn new(indicator: Indicator, percent: u8) -> Self {
        let percent = percent.min(100);
        Self {
            indicator,
            percent,
            rating: Rating::for_value(indicator, percent),
        }
    }
}

/// Share of the mapped area in each NDVI condition class, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCoverage {
    pub healthy: u8,
    pub moderate: u8,
    pub attention: u8,
}

impl FieldCoverage {
    /// Returns `None` unless the three shares add up to 100.
    pub fn new(healthy: u8, moderate: u8, attention: u8) -> Option<Self> {
        let total = u16::from(healthy) + u16::from(moderate) + u16::from(attention);
        (total == 100).then_some(Self {
            healthy,
            moderate,
            attention,
        })
    }

    pub fn sample() -> Self {
        Self {
            healthy: 68,
            moderate: 23,
            attention: 9,
        }
    }

    pub fn total(&self) -> u16 {
        u16::from(self.healthy) + u16::from(self.moderate) + u16::from(self.attention)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldHealthReport {
    pub overall: u8,
    pub readings: Vec<HealthReading>,
    pub coverage: FieldCoverage,
}

impl FieldHealthReport {
    /// The fixed demo readings shown on the status screen.
    pub fn sample() -> Self {
        Self {
            overall: 84,
            readings: vec![
                HealthReading::new(Indicator::Moisture, 78),
                HealthReading::new(Indicator::Sunlight, 68),
                HealthReading::new(Indicator::Nutrition, 92),
                HealthReading::new(Indicator::PestRisk, 12),
                HealthReading::new(Indicator::SoilHealth, 76),
            ],
            coverage: FieldCoverage::sample(),
        }
    }

    pub fn overall_rating(&self) -> Rating {
        rate_higher_is_better(self.overall)
    }

    pub fn reading(&self, indicator: Indicator) -> Option<&HealthReading> {
        self.readings.iter().find(|r| r.indicator == indicator)
    }

    pub fn is_healthy(&self) -> bool {
        self.overall_rating() != Rating::Poor
            && self
                .reading(Indicator::PestRisk)
                .is_none_or(|r| r.rating != Rating::HighRisk)
    }
}
