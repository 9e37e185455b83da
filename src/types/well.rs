//! Project well catalog and drilling schedules.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::time_series::TimeSeries;

/// Wells drilled per year. Start years are offsets from the owning case's
/// DG4 year, like every other series.
pub type DrillingSchedule = TimeSeries<i32>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WellCategory {
    #[default]
    OilProducer,
    GasProducer,
    WaterInjector,
    GasInjector,
    ExplorationWell,
    AppraisalWell,
    Sidetrack,
}

impl WellCategory {
    /// Development wells belong to a well project.
    pub fn is_development(self) -> bool {
        matches!(
            self,
            Self::OilProducer | Self::GasProducer | Self::WaterInjector | Self::GasInjector
        )
    }

    /// Exploration-side wells belong to an exploration asset.
    pub fn is_exploration(self) -> bool {
        !self.is_development()
    }
}

/// Catalog entry shared by every case in a project.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Well {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub well_category: WellCategory,
    #[serde(default)]
    pub well_cost: f64,
    #[serde(default)]
    pub drilling_days: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_split_is_exhaustive() {
        let all = [
            WellCategory::OilProducer,
            WellCategory::GasProducer,
            WellCategory::WaterInjector,
            WellCategory::GasInjector,
            WellCategory::ExplorationWell,
            WellCategory::AppraisalWell,
            WellCategory::Sidetrack,
        ];
        for category in all {
            assert_ne!(category.is_development(), category.is_exploration());
        }
    }
}
