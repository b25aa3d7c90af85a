use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// One cluster region: its display attributes plus the polar placement rule.
/// `angle` is radians around the surface center; `radius_frac` scales the
/// base layout radius (0.3 of the surface's minor dimension).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionEntry {
    pub label: String,
    pub count: u32,
    pub angle: f32,
    pub radius_frac: f32,
}

/// The fixed table of regions the cluster map displays.
/// Loadable from JSON; the default matches the SignalX demo dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterDataset {
    pub regions: Vec<RegionEntry>,
}

impl ClusterDataset {
    /// Parse a dataset from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the dataset to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for ClusterDataset {
    fn default() -> Self {
        let entry = |label: &str, count: u32, angle: f32, radius_frac: f32| RegionEntry {
            label: label.to_string(),
            count,
            angle,
            radius_frac,
        };
        Self {
            regions: vec![
                entry("Healthcare MN", 24, 0.0, 0.7),
                entry("IT Services CA", 18, PI / 3.0, 0.8),
                entry("Logistics TX", 15, 2.0 * PI / 3.0, 0.6),
                entry("Finance NY", 21, PI, 0.75),
                entry("Retail FL", 12, 4.0 * PI / 3.0, 0.65),
                entry("Manufacturing OH", 9, 5.0 * PI / 3.0, 0.55),
            ],
        }
    }
}
