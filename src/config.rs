//! Serializable configuration of a [`BezierEase`](crate::BezierEase).

use serde::{Deserialize, Serialize};

use crate::ease::EasingMode;

/// The 7 control points used when none are configured.
///
/// They describe a curve which stays flat for most of the first half, then rises steeply and
/// settles at 1.
pub const DEFAULT_CONTROL_POINTS: [[f64; 2]; 7] = [
    [0.00, 0.00],
    [0.01, 0.00],
    [0.40, 0.00],
    [0.70, 0.00],
    [0.85, 1.00],
    [0.90, 1.00],
    [1.00, 1.00],
];

/// Configuration options of a [`BezierEase`](crate::BezierEase).
///
/// Keys are camel cased and missing ones fall back to their default:
/// ```json
/// { "controlPoints": [[0, 0], [0.5, 0], [1, 1]], "mode": "easeInOut" }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EaseConfig {
    /// Ordered control points as `[x, y]` pairs, at least one is required.
    pub control_points: Vec<[f64; 2]>,

    /// How the curve is applied to the animation's progress.
    pub mode: EasingMode,
}

impl Default for EaseConfig {
    fn default() -> Self {
        EaseConfig {
            control_points: DEFAULT_CONTROL_POINTS.to_vec(),
            mode: EasingMode::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let config: EaseConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EaseConfig::default());
        assert_eq!(config.control_points.len(), 7);
        assert_eq!(config.mode, EasingMode::EaseIn);
    }

    #[test]
    fn camel_case_keys() {
        let config: EaseConfig =
            serde_json::from_str(r#"{"controlPoints": [[0, 0], [1, 1]], "mode": "easeOut"}"#)
                .unwrap();
        assert_eq!(config.control_points, vec![[0.0, 0.0], [1.0, 1.0]]);
        assert_eq!(config.mode, EasingMode::EaseOut);

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["mode"], "easeOut");
        assert_eq!(json["controlPoints"][1][0], 1.0);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let result = serde_json::from_str::<EaseConfig>(r#"{"mode": "bounce"}"#);
        assert!(result.is_err());
    }
}
