use super::*;
use nalgebra::vector;

#[test]
fn orientation_left_right_and_collinear() {
    let p = vector![0.0, 0.0];
    let q = vector![1.0, 0.0];
    assert_eq!(
        orientation(&p, &q, &vector![1.0, 1.0]),
        Orientation::CounterClockwise
    );
    assert_eq!(
        orientation(&p, &q, &vector![1.0, -1.0]),
        Orientation::Clockwise
    );
    assert_eq!(
        orientation(&p, &q, &vector![3.0, 0.0]),
        Orientation::Collinear
    );
}

#[test]
fn turn_value_is_negated_cross() {
    let p = vector![0.5, -1.0];
    let q = vector![2.0, 3.0];
    let r = vector![-1.0, 4.0];
    let cross = parallelogram_area(q - p, r - p);
    assert!((turn_value(&p, &q, &r) + cross).abs() < 1e-12);
}

#[test]
fn tolerance_absorbs_tiny_turns() {
    let p = vector![0.0, 0.0];
    let q = vector![1.0, 0.0];
    let r = vector![2.0, 1e-14];
    assert_eq!(orientation(&p, &q, &r), Orientation::Collinear);
    // tighter tolerance sees the turn
    assert_eq!(
        orientation_eps(&p, &q, &r, 0.0),
        Orientation::CounterClockwise
    );
}

#[test]
fn tolerance_is_relative_to_scale() {
    // a 1e-7 right triangle still turns left
    let p = vector![0.0, 0.0];
    let q = vector![1e-7, 0.0];
    let r = vector![0.0, 1e-7];
    assert_eq!(orientation(&p, &q, &r), Orientation::CounterClockwise);

    // large coordinates: rounding noise in the turn value stays collinear
    let a = vector![1e7 + 0.1, 3e7 + 0.3];
    let b = a * 2.0 + vector![0.1, 0.3];
    let c = a * 3.0 + vector![0.2, 0.6];
    assert_eq!(orientation(&a, &b, &c), Orientation::Collinear);

    // repeated points are collinear with anything
    assert_eq!(orientation(&p, &p, &r), Orientation::Collinear);
    assert_eq!(orientation(&p, &r, &r), Orientation::Collinear);
}

#[test]
fn exact_orientation_sees_every_turn() {
    let p = vector![0.0, 0.0];
    let q = vector![1.0, 0.0];
    assert_eq!(
        orientation_exact(&p, &q, &vector![2.0, 1e-300]),
        Orientation::CounterClockwise
    );
    assert_eq!(
        orientation_exact(&p, &q, &vector![2.0, -1e-300]),
        Orientation::Clockwise
    );
    assert_eq!(
        orientation_exact(&p, &q, &vector![-3.0, 0.0]),
        Orientation::Collinear
    );
    // duplicates
    assert_eq!(orientation_exact(&p, &p, &q), Orientation::Collinear);
}

#[test]
fn on_segment_closed_interval() {
    let a = vector![0.0, 0.0];
    let b = vector![2.0, 0.0];
    assert!(on_segment(&a, &b, &vector![1.0, 0.0]));
    assert!(on_segment(&a, &b, &a));
    assert!(on_segment(&a, &b, &b));
    assert!(!on_segment(&a, &b, &vector![3.0, 0.0]));
    assert!(!on_segment(&a, &b, &vector![-0.5, 0.0]));
}

#[test]
fn unit_square_area_and_containment() {
    let sq = [
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 1.0],
    ];
    assert!((polygon_area(&sq) - 1.0).abs() < 1e-12);
    assert!(contains_eps(&sq, &vector![0.5, 0.5], 0.0));
    assert!(contains_eps(&sq, &vector![1.0, 0.5], 0.0));
    assert!(!contains_eps(&sq, &vector![1.5, 0.5], 0.0));
    // degenerate rings contain nothing
    assert!(!contains_eps(&sq[..2], &vector![0.5, 0.0], 0.0));
}

#[test]
fn cfg_defaults() {
    let cfg = HullCfg::default();
    assert_eq!(cfg.eps, ORIENT_EPS);
    assert_eq!(cfg.counter, CounterMode::Hybrid);
    let pure = cfg.with_counter(CounterMode::Pure).with_eps(-1e-9);
    assert_eq!(pure.counter, CounterMode::Pure);
    assert_eq!(pure.eps, 1e-9);
}
