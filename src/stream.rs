use std::mem::take;

use crate::{param::Snapshot, Component, Effect, Params};

#[cfg(test)]
mod tests;

/// Call a function with the values of a group of parameters, and again each time they change,
/// disposing whatever the previous call returned first.
///
/// `f` returns the disposer of the resources tied to the values it received,
/// either an [`Effect`], `Option<Effect>` or `()` for nothing to dispose.
///
/// `f` is called once now. On [`update`](Component::update) the inputs are read again and,
/// if some value differs from the last observed one, the previous disposer runs before `f` is called with the new values.
/// [`dispose`](Component::dispose) runs the current disposer.
///
/// See also ReactJS `useEffect` hook.
pub fn stream<P, F, D>(inputs: P, mut f: F) -> Stream<P, F>
where
    P: Params,
    F: FnMut(P::Values) -> D,
    D: Into<Effect>,
{
    let snapshot = Snapshot::new(inputs);
    let dispose = f(snapshot.values().clone()).into();
    Stream {
        snapshot,
        f,
        dispose,
    }
}

/// Component returned by [`stream`].
#[must_use]
pub struct Stream<P: Params, F> {
    snapshot: Snapshot<P>,
    f: F,
    dispose: Effect,
}

impl<P, F, D> Component for Stream<P, F>
where
    P: Params,
    F: FnMut(P::Values) -> D,
    D: Into<Effect>,
{
    fn update(&mut self) {
        if self.snapshot.refresh() {
            take(&mut self.dispose).call();
            self.dispose = (self.f)(self.snapshot.values().clone()).into();
        }
    }
    fn dispose(&mut self) {
        take(&mut self.dispose).call();
    }
}
