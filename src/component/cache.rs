use crate::{Component, Effect, Params};


/// Build a child component once, giving it cheap access to the latest values of `inputs`.
///
/// `build` receives parameters of the same shape as `inputs`.
/// Constants are passed through, and each variable is replaced by a reader of a private snapshot
/// that is refreshed once per [`update`](Component::update), before the child is updated.
pub fn cache<P, C>(inputs: P, build: impl FnOnce(P) -> C) -> Cache<C>
where
    P: Params,
    C: Component,
{
    let (params, refresh) = inputs.cached();
    Cache {
        refresh,
        child: build(params),
    }
}

/// Component returned by [`cache`].
#[must_use]
pub struct Cache<C> {
    refresh: Effect,
    child: C,
}

impl<C: Component> Component for Cache<C> {
    fn update(&mut self) {
        self.refresh.call();
        self.child.update();
    }
    fn dispose(&mut self) {
        self.child.dispose();
    }
}
