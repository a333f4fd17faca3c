use bezier_ease::ease::sample_easing;
use bezier_ease::{evaluate, Easing, EasingMode};
use criterion::{black_box, Criterion};
use crate::common::samples::EASES;

pub fn eval(c: &mut Criterion) {
    c.bench_function("eval", |b| {
        for ease in EASES.iter() {
            b.iter(|| black_box(ease.evaluate(black_box(0.85))))
        }
    });
}

pub fn eval_slice(c: &mut Criterion) {
    let points: Vec<Vec<_>> = EASES.iter().map(|ease| ease.control_points().collect()).collect();
    c.bench_function("eval_slice", |b| {
        for points in points.iter() {
            b.iter(|| black_box(evaluate(points, black_box(0.85))))
        }
    });
}

pub fn in_out(c: &mut Criterion) {
    let eases: Vec<_> = EASES.iter().map(|ease| ease.clone().with_mode(EasingMode::EaseInOut)).collect();
    c.bench_function("in_out", |b| {
        for ease in eases.iter() {
            b.iter(|| black_box(ease.ease(black_box(0.7))))
        }
    });
}

pub fn sample(c: &mut Criterion) {
    c.bench_function("sample", |b| {
        for ease in EASES.iter() {
            b.iter(|| black_box(sample_easing(ease, 60)))
        }
    });
}

pub fn all(c: &mut Criterion) {
    eval(c);
    eval_slice(c);
    in_out(c);
    sample(c);
}
