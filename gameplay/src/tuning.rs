//! Door gameplay knobs. Defaults are the stock game values.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoorTuning {
    /// How long an opened door waits before trying to shut itself
    pub auto_close_ms: u64,
    /// Fraction of the remaining swing covered each tic
    pub smoothing_rate: f32,
    /// Side of the square reach boxes at the handle and at the hinge
    pub touch_extent: f32,
    /// Side of the square a player must be inside of to hold the door open
    pub auto_close_extent: f32,
}

impl Default for DoorTuning {
    fn default() -> Self {
        Self {
            auto_close_ms: 5_000,
            smoothing_rate: 0.05,
            touch_extent: 48.0,
            auto_close_extent: 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DoorTuning;

    #[test]
    fn partial_toml_fills_defaults() {
        let t: DoorTuning = toml::from_str("auto_close_ms = 2500").unwrap();
        assert_eq!(t.auto_close_ms, 2500);
        assert_eq!(t.smoothing_rate, 0.05);
        assert_eq!(t.touch_extent, 48.0);
    }
}
