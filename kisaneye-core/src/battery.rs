use serde::{Deserialize, Serialize};

pub const BATTERY_ALERT_PERCENT: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BatteryBand {
    Full,
    High,
    Medium,
    Low,
    Critical,
}

impl BatteryBand {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            BatteryBand::Full
        } else if percentage >= 50.0 {
            BatteryBand::High
        } else if percentage >= 30.0 {
            BatteryBand::Medium
        } else if percentage >= 15.0 {
            BatteryBand::Low
        } else {
            BatteryBand::Critical
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BatteryBand::Full => "full",
            BatteryBand::High => "high",
            BatteryBand::Medium => "medium",
            BatteryBand::Low => "low",
            BatteryBand::Critical => "critical",
        }
    }
}

pub fn is_battery_alert(percentage: f64) -> bool {
    percentage <= BATTERY_ALERT_PERCENT
}
