//! Min-max normalization of raw Heart Values.
//!
//! Two modes exist on purpose and are never mixed within one derived field:
//! fixed reference bounds for ad-hoc calculations that have no dataset in
//! scope, and empirical bounds observed across a loaded dataset for batch
//! ingestion.

use serde::{Deserialize, Serialize};

/// Min/max bounds for Heart Value normalization.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// Reference bounds for ad-hoc calculations: observed raw Heart Values
    /// typically fall between -10 and +60.
    pub const REFERENCE: Bounds = Bounds { min: -10.0, max: 60.0 };

    pub fn new(min: f64, max: f64) -> Bounds {
        Bounds { min, max }
    }

    /// Empirical bounds across a dataset (dataset-relative mode).
    ///
    /// Non-finite values are ignored; returns `None` when nothing finite
    /// remains to observe.
    pub fn from_observed<I>(values: I) -> Option<Bounds>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut bounds: Option<Bounds> = None;
        for v in values {
            if !v.is_finite() {
                continue;
            }
            bounds = Some(match bounds {
                None => Bounds { min: v, max: v },
                Some(b) => Bounds { min: b.min.min(v), max: b.max.max(v) },
            });
        }
        bounds
    }

    /// Min-max normalize `raw` into [0, 1], clamped.
    ///
    /// Equal bounds map everything to the midpoint 0.5 rather than dividing
    /// by zero.
    pub fn normalize(&self, raw: f64) -> f64 {
        if self.max == self.min {
            return 0.5;
        }
        ((raw - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}
