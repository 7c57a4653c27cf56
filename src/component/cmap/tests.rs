use std::{cell::Cell, rc::Rc};

use assert_call::{call, CallRecorder};

use crate::{cmap, utils::test_helpers::Probe, CMap, Component, Param};

fn source(value: i32) -> (Rc<Cell<i32>>, Param<i32>) {
    let cell = Rc::new(Cell::new(value));
    let c = cell.clone();
    (cell, Param::mapping(move || c.get()))
}

#[test]
fn static_inputs_return_child() {
    let mut cr = CallRecorder::new();
    let mut c = cmap((Param::Value(1), Param::Value(2)), |(a, b)| Probe::new(a + b));
    cr.verify("3 new");
    assert!(matches!(c, CMap::Static(_)));

    c.update();
    c.update();
    cr.verify(["3 update", "3 update"]);

    c.dispose();
    cr.verify("3 dispose");
}

#[test]
fn rebuild_on_change() {
    let mut cr = CallRecorder::new();
    let (cell, p) = source(1);
    let mut c = cmap(p, Probe::new);
    cr.verify("1 new");
    assert!(matches!(c, CMap::Dynamic(_)));

    c.update();
    cr.verify("1 update");

    cell.set(2);
    c.update();
    cr.verify(["1 dispose", "2 new"]);

    c.update();
    cr.verify("2 update");

    c.dispose();
    cr.verify("2 dispose");
}

#[test]
fn child_returns_current() {
    let mut cr = CallRecorder::new();
    let (cell, p) = source(1);
    let mut c = cmap(p, |v| Probe::new(v * 10));
    assert_eq!(c.child().name(), "10");
    cell.set(2);
    c.update();
    assert_eq!(c.child().name(), "20");
    cr.verify(["10 new", "10 dispose", "20 new"]);
}

#[test]
fn unchanged_after_round_trip() {
    let mut cr = CallRecorder::new();
    let (cell, p) = source(1);
    let (_, q) = source(5);
    let mut c = cmap((p, q), |(a, b)| {
        call!("create {a} {b}");
    });
    cr.verify("create 1 5");

    cell.set(2);
    cell.set(1);
    c.update();
    cr.verify(());
}
