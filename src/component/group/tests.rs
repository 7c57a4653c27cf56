use assert_call::CallRecorder;

use crate::{group, utils::test_helpers::Probe, Component, ComponentExt, Group};

#[test]
fn update_and_dispose_in_order() {
    let mut cr = CallRecorder::new();
    let mut g = group([Probe::new("a"), Probe::new("b"), Probe::new("c")]);
    cr.verify(["a new", "b new", "c new"]);
    assert_eq!(g.len(), 3);

    g.update();
    cr.verify(["a update", "b update", "c update"]);

    g.update();
    cr.verify(["a update", "b update", "c update"]);

    g.dispose();
    cr.verify(["a dispose", "b dispose", "c dispose"]);
}

#[test]
fn empty() {
    let mut cr = CallRecorder::new();
    let mut g = group(Vec::<Probe>::new());
    assert!(g.is_empty());
    g.update();
    g.dispose();
    cr.verify(());
}

#[test]
fn nested_and_collected() {
    let mut cr = CallRecorder::new();
    let inner: Group<_> = (0..2).map(|i| Probe::new(format!("x{i}"))).collect();
    let mut g = group([inner.boxed(), Probe::new("y").boxed()]);
    cr.verify(["x0 new", "x1 new", "y new"]);

    g.update();
    cr.verify(["x0 update", "x1 update", "y update"]);

    g.dispose();
    cr.verify(["x0 dispose", "x1 dispose", "y dispose"]);
}
