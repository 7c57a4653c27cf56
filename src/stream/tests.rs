use std::{cell::Cell, rc::Rc};

use assert_call::{call, CallRecorder};

use crate::{stream, Component, Effect, Param};

fn source(value: i32) -> (Rc<Cell<i32>>, Param<i32>) {
    let cell = Rc::new(Cell::new(value));
    let c = cell.clone();
    (cell, Param::mapping(move || c.get()))
}

fn open(v: i32) -> Effect {
    call!("open {v}");
    Effect::new(move || call!("close {v}"))
}

#[test]
fn static_inputs() {
    let mut cr = CallRecorder::new();
    let mut s = stream(Param::Value(1), open);
    cr.verify("open 1");

    s.update();
    s.update();
    cr.verify(());

    s.dispose();
    cr.verify("close 1");
}

#[test]
fn dispose_before_recreate() {
    let mut cr = CallRecorder::new();
    let (cell, p) = source(1);
    let mut s = stream(p, open);
    cr.verify("open 1");

    s.update();
    cr.verify(());

    cell.set(2);
    s.update();
    cr.verify(["close 1", "open 2"]);

    s.update();
    cr.verify(());

    s.dispose();
    cr.verify("close 2");
}

#[test]
fn dispose_runs_once() {
    let mut cr = CallRecorder::new();
    let (_, p) = source(1);
    let mut s = stream(p, open);
    cr.verify("open 1");

    s.dispose();
    s.dispose();
    cr.verify("close 1");
}

#[test]
fn nothing_to_dispose() {
    let mut cr = CallRecorder::new();
    let (cell, p) = source(1);
    let mut s = stream(p, |v| call!("{v}"));
    cr.verify("1");

    cell.set(2);
    s.update();
    cr.verify("2");

    s.dispose();
    cr.verify(());
}

#[test]
fn optional_disposer() {
    let mut cr = CallRecorder::new();
    let (cell, p) = source(0);
    let mut s = stream(p, |v| (v % 2 == 1).then(|| open(v)));
    cr.verify(());

    cell.set(1);
    s.update();
    cr.verify("open 1");

    cell.set(2);
    s.update();
    cr.verify("close 1");

    cell.set(3);
    s.update();
    cr.verify("open 3");

    s.dispose();
    cr.verify("close 3");
}

#[test]
fn multiple_inputs() {
    let mut cr = CallRecorder::new();
    let (a, pa) = source(1);
    let mut s = stream((pa, Param::Value("x")), |(a, b)| {
        call!("open {a}{b}");
        Effect::new(move || call!("close {a}{b}"))
    });
    cr.verify("open 1x");

    a.set(2);
    s.update();
    cr.verify(["close 1x", "open 2x"]);
    s.dispose();
    cr.verify("close 2x");
}
