//! Terrain classification: maps a raw noise sample to a terrain category via
//! an explicit, strictly ascending threshold table.

use serde::{Deserialize, Serialize};

use crate::params_error::ParamsError;

/// Terrain category assigned to every sampled cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionType {
    Water,
    Sand,
    Grass,
    Stone,
}

impl RegionType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Water => "Water",
            Self::Sand => "Sand",
            Self::Grass => "Grass",
            Self::Stone => "Stone",
        }
    }
}

/// Ordered `(category, threshold)` pairs.
///
/// Thresholds are strictly increasing. The first entry doubles as the
/// catch-all floor: a value below every threshold still classifies as the
/// first category, so classification never fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(RegionType, f32)>", into = "Vec<(RegionType, f32)>")]
pub struct RegionTable {
    bands: Vec<(RegionType, f32)>,
}

impl Default for RegionTable {
    fn default() -> Self {
        Self {
            bands: vec![
                (RegionType::Water, -1.0),
                (RegionType::Sand, 0.0),
                (RegionType::Grass, 0.06),
                (RegionType::Stone, 0.3),
            ],
        }
    }
}

impl RegionTable {
    /// Build a table, rejecting empty, non-finite or non-ascending thresholds.
    pub fn new(bands: Vec<(RegionType, f32)>) -> Result<Self, ParamsError> {
        if bands.is_empty() {
            return Err(ParamsError::UnorderedRegions(
                "region table is empty".to_string(),
            ));
        }
        if let Some((kind, t)) = bands.iter().find(|(_, t)| !t.is_finite()) {
            return Err(ParamsError::UnorderedRegions(format!(
                "{} threshold {t} is not finite",
                kind.label()
            )));
        }
        for pair in bands.windows(2) {
            let (lo_kind, lo) = pair[0];
            let (hi_kind, hi) = pair[1];
            if hi <= lo {
                return Err(ParamsError::UnorderedRegions(format!(
                    "{} threshold {hi} does not exceed {} threshold {lo}",
                    hi_kind.label(),
                    lo_kind.label()
                )));
            }
        }
        Ok(Self { bands })
    }

    /// The category whose threshold is the greatest one not exceeding `value`,
    /// or the lowest band when `value` is below all of them.
    pub fn classify(&self, value: f32) -> RegionType {
        let mut selected = self.bands[0].0;
        for &(kind, threshold) in &self.bands {
            if value >= threshold {
                selected = kind;
            } else {
                break;
            }
        }
        selected
    }

    /// Threshold of the band `kind` belongs to, if present in the table.
    pub fn threshold_of(&self, kind: RegionType) -> Option<f32> {
        self.bands
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|&(_, t)| t)
    }

    pub fn bands(&self) -> &[(RegionType, f32)] {
        &self.bands
    }
}

impl TryFrom<Vec<(RegionType, f32)>> for RegionTable {
    type Error = ParamsError;

    fn try_from(bands: Vec<(RegionType, f32)>) -> Result<Self, Self::Error> {
        Self::new(bands)
    }
}

impl From<RegionTable> for Vec<(RegionType, f32)> {
    fn from(table: RegionTable) -> Self {
        table.bands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_points() {
        let table = RegionTable::default();
        assert_eq!(table.classify(-1.0), RegionType::Water);
        assert_eq!(table.classify(0.5), RegionType::Stone);
        assert_eq!(table.classify(0.0), RegionType::Sand);
        assert_eq!(table.classify(0.06), RegionType::Grass);
        assert_eq!(table.classify(0.3), RegionType::Stone);
    }

    #[test]
    fn test_below_all_thresholds_falls_back_to_first_band() {
        let table = RegionTable::default();
        assert_eq!(table.classify(-5.0), RegionType::Water);
        assert_eq!(table.classify(f32::NEG_INFINITY), RegionType::Water);
    }

    #[test]
    fn test_monotonic_over_sweep() {
        let table = RegionTable::default();
        let mut prev_threshold = f32::NEG_INFINITY;
        let mut v = -1.5_f32;
        while v <= 1.5 {
            let kind = table.classify(v);
            let t = table.threshold_of(kind).expect("classified band is in table");
            assert!(
                t >= prev_threshold,
                "category downgraded at {v}: {t} < {prev_threshold}"
            );
            prev_threshold = t;
            v += 0.001;
        }
    }

    #[test]
    fn test_rejects_unordered_table() {
        let err = RegionTable::new(vec![
            (RegionType::Water, 0.0),
            (RegionType::Sand, 0.0),
        ])
        .unwrap_err();
        assert!(matches!(err, ParamsError::UnorderedRegions(_)));

        assert!(RegionTable::new(vec![]).is_err());
        assert!(RegionTable::new(vec![(RegionType::Stone, f32::NAN)]).is_err());
    }

    #[test]
    fn test_custom_table() {
        let table = RegionTable::new(vec![
            (RegionType::Sand, -0.5),
            (RegionType::Stone, 0.5),
        ])
        .unwrap();
        assert_eq!(table.classify(-0.9), RegionType::Sand);
        assert_eq!(table.classify(0.2), RegionType::Sand);
        assert_eq!(table.classify(0.7), RegionType::Stone);
    }

    #[test]
    fn test_json_roundtrip_validates() {
        let json = serde_json::to_string(&RegionTable::default()).unwrap();
        let back: RegionTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RegionTable::default());

        let bad = r#"[["Stone", 0.3], ["Water", -1.0]]"#;
        assert!(serde_json::from_str::<RegionTable>(bad).is_err());
    }
}
