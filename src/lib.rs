#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod config;
pub mod curve;
pub mod ease;
pub mod error;

pub use crate::config::EaseConfig;
pub use crate::curve::BezierCurve;
pub use crate::ease::{evaluate, BezierEase, ControlPoint, Easing, EasingMode};
pub use crate::error::EaseError;
