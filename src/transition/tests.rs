use std::{cell::Cell, rc::Rc};

use rstest::rstest;

use super::*;

fn clock(start: f64) -> (Rc<Cell<f64>>, Param<f64>) {
    let cell = Rc::new(Cell::new(start));
    let c = cell.clone();
    (cell, Param::mapping(move || c.get()))
}

#[rstest]
#[case(0.0, 0.0)]
#[case(0.25, 0.125)]
#[case(0.5, 0.5)]
#[case(0.75, 0.875)]
#[case(1.0, 1.0)]
fn ease_curve(#[case] t: f64, #[case] expected: f64) {
    assert!((ease(t) - expected).abs() < 1e-9);
}

#[test]
fn mix_numbers() {
    assert_eq!(0.0f64.mix(&10.0, 0.25), 2.5);
    assert_eq!(0.0f32.mix(&10.0, 0.5), 5.0);
}

#[test]
fn constant_target_equal_to_initial_is_returned() {
    let (_, time) = clock(0.0);
    let p = transition(TransitionProps::new(time, Param::Value(3.0), Param::Value(10.0)));
    assert!(p.is_value());
    assert_eq!(p.get(), 3.0);
}

#[test]
fn from_initial_to_constant_target() {
    let (now, time) = clock(0.0);
    let p = transition(
        TransitionProps::new(time, Param::Value(10.0), Param::Value(10.0)).initial(0.0),
    );
    assert!(p.is_mapping());
    assert_eq!(p.get(), 0.0);

    now.set(5.0);
    assert_eq!(p.get(), 5.0);

    now.set(10.0);
    assert_eq!(p.get(), 10.0);

    now.set(100.0);
    assert_eq!(p.get(), 10.0);
}

#[test]
fn delay() {
    let (now, time) = clock(0.0);
    let p = transition(
        TransitionProps::new(time, Param::Value(10.0), Param::Value(10.0))
            .initial(0.0)
            .delay(Param::Value(4.0)),
    );
    now.set(4.0);
    assert_eq!(p.get(), 0.0);
    now.set(9.0);
    assert_eq!(p.get(), 5.0);
    now.set(14.0);
    assert_eq!(p.get(), 10.0);
}

#[test]
fn retarget_starts_from_current_value() {
    let (now, time) = clock(0.0);
    let target = Rc::new(Cell::new(0.0));
    let t = target.clone();
    let p = transition(
        TransitionProps::new(time, Param::mapping(move || t.get()), Param::Value(10.0))
            .easing(|t| t),
    );
    assert_eq!(p.get(), 0.0);

    target.set(10.0);
    assert_eq!(p.get(), 0.0);
    now.set(5.0);
    assert_eq!(p.get(), 5.0);

    target.set(20.0);
    assert_eq!(p.get(), 5.0);
    now.set(10.0);
    assert_eq!(p.get(), 12.5);
    now.set(15.0);
    assert_eq!(p.get(), 20.0);
}

#[test]
fn static_time_never_advances() {
    let p = transition(
        TransitionProps::new(Param::Value(0.0), Param::Value(10.0), Param::Value(10.0))
            .initial(0.0),
    );
    assert!(p.is_value());
    assert_eq!(p.get(), 0.0);
}
