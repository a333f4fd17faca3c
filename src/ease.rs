//! Easing functions built on top of [`BezierCurve`].
//!
//! The curve is sampled by using the animation's normalized time directly as the curve
//! parameter. The x coordinates of the control points therefore only shape the interpolation
//! and are never solved for.

use nalgebra::dimension::{Dynamic, U2};
use nalgebra::{Matrix2xX, Vector2};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::config::{EaseConfig, DEFAULT_CONTROL_POINTS};
use crate::curve::{castlejau_step, BezierCurve, OBezierCurve};
use crate::error::{EaseError, Result};

/// A single control point `(x, y)`.
pub type ControlPoint = Vector2<f64>;

/// Evaluate the curve defined by `points` at `t` and return the resulting y coordinate.
///
/// Adjacent points are linearly interpolated at `t` until a single point is left.
/// `t` is usually between 0 and 1 but is neither checked nor clamped.
///
/// # Panics
///
/// If `points` is empty. Use [`BezierEase`] to validate control points once up front.
pub fn evaluate(points: &[ControlPoint], t: f64) -> f64 {
    let mut buffer: SmallVec<[ControlPoint; 8]> = SmallVec::from_slice(points);
    while buffer.len() > 1 {
        castlejau_step(&mut buffer[..], t);
        buffer.pop();
    }
    buffer[0].y
}

/// How the curve is mapped onto an animation's progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EasingMode {
    /// Use the curve as is
    #[default]
    EaseIn,

    /// Use the curve rotated by 180 degrees i.e. `1 - f(1 - t)`
    EaseOut,

    /// Use `EaseIn` for the first half and `EaseOut` for the second one
    EaseInOut,
}

impl EasingMode {
    /// Apply the mode to an `ease_in` function at `t`.
    pub fn apply<F: Fn(f64) -> f64>(self, t: f64, ease_in: F) -> f64 {
        match self {
            EasingMode::EaseIn => ease_in(t),
            EasingMode::EaseOut => 1.0 - ease_in(1.0 - t),
            EasingMode::EaseInOut => {
                if t < 0.5 {
                    ease_in(t * 2.0) * 0.5
                } else {
                    (1.0 - ease_in((1.0 - t) * 2.0)) * 0.5 + 0.5
                }
            }
        }
    }
}

/// An easing function remapping an animation's linear progress.
pub trait Easing: Send + Sync {
    /// The plain easing curve at normalized time `t`, ignoring the [`EasingMode`].
    fn ease_in(&self, t: f64) -> f64;

    /// The mode [`ease`] applies to [`ease_in`].
    ///
    /// [`ease`]: Easing::ease
    /// [`ease_in`]: Easing::ease_in
    fn mode(&self) -> EasingMode;

    /// Creates a new blank instance of the same kind of easing function.
    fn create_instance(&self) -> Box<dyn Easing>;

    /// The eased progress at normalized time `t`.
    fn ease(&self, t: f64) -> f64 {
        self.mode().apply(t, |t| self.ease_in(t))
    }
}

/// Easing function following a bezier curve of arbitrary degree.
///
/// The control points are validated once on construction and never change afterwards,
/// so a single instance can be shared between threads freely.
#[derive(Clone, Debug)]
pub struct BezierEase {
    curve: OBezierCurve<f64, U2, Dynamic>,
    mode: EasingMode,
}

impl BezierEase {
    /// Creates an easing function in [`EasingMode::EaseIn`] mode from ordered control points.
    ///
    /// Fails with [`EaseError::InvalidConfiguration`] if no control points are given.
    pub fn new<I: IntoIterator<Item = ControlPoint>>(points: I) -> Result<BezierEase> {
        let points: Vec<ControlPoint> = points.into_iter().collect();
        if points.is_empty() {
            tracing::debug!("rejecting bezier ease without control points");
            return Err(EaseError::invalid_configuration(
                "at least one control point is required",
            ));
        }

        tracing::debug!(control_points = points.len(), "created bezier ease");
        Ok(BezierEase {
            curve: BezierCurve(Matrix2xX::from_columns(&points[..])),
            mode: EasingMode::default(),
        })
    }

    /// Creates an easing function from its configuration.
    pub fn from_config(config: &EaseConfig) -> Result<BezierEase> {
        let points = config
            .control_points
            .iter()
            .map(|&[x, y]| ControlPoint::new(x, y));
        let ease = BezierEase::new(points)?.with_mode(config.mode);
        tracing::debug!(mode = ?ease.mode, "configured bezier ease");
        Ok(ease)
    }

    /// The configuration this easing function was built from.
    pub fn config(&self) -> EaseConfig {
        EaseConfig {
            control_points: self.control_points().map(|p| [p.x, p.y]).collect(),
            mode: self.mode,
        }
    }

    /// Replace the easing mode.
    pub fn with_mode(mut self, mode: EasingMode) -> BezierEase {
        self.mode = mode;
        self
    }

    /// The control points in order.
    pub fn control_points(&self) -> impl Iterator<Item = ControlPoint> + '_ {
        self.curve.0.column_iter().map(|column| column.clone_owned())
    }

    /// The underlying curve.
    pub fn curve(&self) -> &OBezierCurve<f64, U2, Dynamic> {
        &self.curve
    }

    /// Evaluate the curve at `t` and return the resulting y coordinate.
    ///
    /// This is the same as [`evaluate`] on [`control_points`](BezierEase::control_points).
    pub fn evaluate(&self, t: f64) -> f64 {
        self.curve.castlejau_eval(t).y
    }
}

impl Default for BezierEase {
    /// The easing function over [`DEFAULT_CONTROL_POINTS`] in [`EasingMode::EaseIn`] mode.
    fn default() -> Self {
        let points: Vec<_> = DEFAULT_CONTROL_POINTS
            .iter()
            .map(|&[x, y]| ControlPoint::new(x, y))
            .collect();
        BezierEase {
            curve: BezierCurve(Matrix2xX::from_columns(&points[..])),
            mode: EasingMode::default(),
        }
    }
}

impl TryFrom<EaseConfig> for BezierEase {
    type Error = EaseError;

    fn try_from(config: EaseConfig) -> Result<Self> {
        BezierEase::from_config(&config)
    }
}

impl Easing for BezierEase {
    fn ease_in(&self, t: f64) -> f64 {
        self.evaluate(t)
    }

    fn mode(&self) -> EasingMode {
        self.mode
    }

    fn create_instance(&self) -> Box<dyn Easing> {
        Box::new(BezierEase::default())
    }
}

/// A sampled point of an easing function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    /// Normalized time
    pub t: f64,
    /// Eased progress at `t`
    pub value: f64,
}

/// Sample an easing function at `num_samples` equally spaced points between 0 and 1.
pub fn sample_easing<E: Easing + ?Sized>(easing: &E, num_samples: usize) -> Vec<Keyframe> {
    match num_samples {
        0 => Vec::new(),
        1 => vec![Keyframe {
            t: 0.0,
            value: easing.ease(0.0),
        }],
        _ => (0..num_samples)
            .map(|i| {
                let t = i as f64 / (num_samples - 1) as f64;
                Keyframe {
                    t,
                    value: easing.ease(t),
                }
            })
            .collect(),
    }
}
