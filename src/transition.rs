use std::cell::RefCell;

use crate::{map, Param};

#[cfg(test)]
mod tests;

/// A value that can be interpolated.
pub trait Mix: PartialEq + Clone + 'static {
    /// Returns the value at `position` between `self` (`0.0`) and `other` (`1.0`).
    fn mix(&self, other: &Self, position: f64) -> Self;
}

impl Mix for f64 {
    fn mix(&self, other: &Self, position: f64) -> Self {
        self * (1.0 - position) + other * position
    }
}
impl Mix for f32 {
    fn mix(&self, other: &Self, position: f64) -> Self {
        (*self as f64).mix(&(*other as f64), position) as f32
    }
}

/// Quadratic ease-in-out.
pub fn ease(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Settings of [`transition`].
pub struct TransitionProps<T> {
    /// Current time. The transition only advances when this changes.
    pub time: Param<f64>,
    /// Target value.
    pub value: Param<T>,
    /// Value to start from. Defaults to the current target value.
    pub initial: Option<T>,
    pub duration: Param<f64>,
    pub delay: Param<f64>,
    pub easing: fn(f64) -> f64,
}

impl<T> TransitionProps<T> {
    pub fn new(time: Param<f64>, value: Param<T>, duration: Param<f64>) -> Self {
        Self {
            time,
            value,
            initial: None,
            duration,
            delay: Param::Value(0.0),
            easing: ease,
        }
    }
    pub fn initial(self, initial: T) -> Self {
        Self {
            initial: Some(initial),
            ..self
        }
    }
    pub fn delay(self, delay: Param<f64>) -> Self {
        Self { delay, ..self }
    }
    pub fn easing(self, easing: fn(f64) -> f64) -> Self {
        Self { easing, ..self }
    }
}

/// Returns a parameter that moves smoothly toward the value of `props.value`.
///
/// Each time the target value changes, a new transition starts from the value shown at that moment.
/// It waits `delay` and then eases to the target over `duration`, both read when the target changes.
///
/// If the target is a constant equal to the initial value, it is returned as is.
pub fn transition<T: Mix>(props: TransitionProps<T>) -> Param<T> {
    let TransitionProps {
        time,
        value,
        initial,
        duration,
        delay,
        easing,
    } = props;
    let target = value.get();
    let source = initial.unwrap_or_else(|| target.clone());
    if value.is_value() && source == target {
        return value;
    }
    let segment = RefCell::new(Segment {
        source,
        target,
        start: time.get(),
        delay: delay.get(),
        duration: duration.get(),
    });
    map(
        (time, value, delay, duration),
        move |(time, value, delay, duration)| {
            let mut s = segment.borrow_mut();
            if s.target != value {
                s.source = s.at(time, easing);
                s.target = value;
                s.start = time;
                s.delay = delay;
                s.duration = duration;
            }
            s.at(time, easing)
        },
    )
}

struct Segment<T> {
    source: T,
    target: T,
    start: f64,
    delay: f64,
    duration: f64,
}

impl<T: Mix> Segment<T> {
    fn at(&self, time: f64, easing: fn(f64) -> f64) -> T {
        let elapsed = time - self.start;
        if elapsed >= self.delay + self.duration || self.source == self.target {
            self.target.clone()
        } else if elapsed <= self.delay {
            self.source.clone()
        } else {
            let t = (elapsed - self.delay) / self.duration;
            self.source.mix(&self.target, easing(t))
        }
    }
}
