use bezier_ease::{BezierEase, ControlPoint};
use once_cell::sync::Lazy;

/// Curves from a straight line up to more control points than fit on the stack
pub static EASES: Lazy<Vec<BezierEase>> = Lazy::new(|| vec![
    BezierEase::new([
        ControlPoint::new(0.0, 0.0),
        ControlPoint::new(1.0, 1.0),
    ]).unwrap(),
    BezierEase::new([
        ControlPoint::new(0.0, 0.0),
        ControlPoint::new(0.42, 0.0),
        ControlPoint::new(0.58, 1.0),
        ControlPoint::new(1.0, 1.0),
    ]).unwrap(),
    BezierEase::default(),
    BezierEase::new(
        (0..16).map(|i| ControlPoint::new(i as f64 / 15.0, (i % 3) as f64 / 2.0))
    ).unwrap(),
]);
