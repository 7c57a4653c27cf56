use std::mem::take;

use crate::{compose, Component, Effect};


/// Component wrapped with effects that run around its update and dispose.
///
/// Adding a hook to a `Hooked` composes it with the existing hooks instead of wrapping again.
#[must_use]
pub struct Hooked<C> {
    component: C,
    before_update: Effect,
    after_update: Effect,
    before_dispose: Effect,
    after_dispose: Effect,
}

impl<C: Component> Hooked<C> {
    pub fn new(component: C) -> Self {
        Self {
            component,
            before_update: Effect::noop(),
            after_update: Effect::noop(),
            before_dispose: Effect::noop(),
            after_dispose: Effect::noop(),
        }
    }

    /// Run `hook` before each update, and before the hooks added earlier.
    pub fn before_update(mut self, hook: Effect) -> Self {
        self.before_update = compose([hook, take(&mut self.before_update)]);
        self
    }
    /// Run `hook` after each update, and after the hooks added earlier.
    pub fn after_update(mut self, hook: Effect) -> Self {
        self.after_update = compose([take(&mut self.after_update), hook]);
        self
    }
    /// Run `hook` before dispose, and before the hooks added earlier.
    pub fn before_dispose(mut self, hook: Effect) -> Self {
        self.before_dispose = compose([hook, take(&mut self.before_dispose)]);
        self
    }
    /// Run `hook` after dispose, and after the hooks added earlier.
    pub fn after_dispose(mut self, hook: Effect) -> Self {
        self.after_dispose = compose([take(&mut self.after_dispose), hook]);
        self
    }

    pub fn get_ref(&self) -> &C {
        &self.component
    }
    pub fn into_inner(self) -> C {
        self.component
    }
}

impl<C: Component> Component for Hooked<C> {
    fn update(&mut self) {
        self.before_update.call();
        self.component.update();
        self.after_update.call();
    }
    fn dispose(&mut self) {
        self.before_dispose.call();
        self.component.dispose();
        self.after_dispose.call();
    }
}

/// Returns a component that runs `hook` immediately before each update of `component`.
pub fn before_update<C: Component>(component: C, hook: Effect) -> Hooked<C> {
    Hooked::new(component).before_update(hook)
}

/// Returns a component that runs `hook` immediately after each update of `component`.
pub fn after_update<C: Component>(component: C, hook: Effect) -> Hooked<C> {
    Hooked::new(component).after_update(hook)
}

/// Returns a component that runs `hook` immediately before `component` is disposed.
pub fn before_dispose<C: Component>(component: C, hook: Effect) -> Hooked<C> {
    Hooked::new(component).before_dispose(hook)
}

/// Returns a component that runs `hook` immediately after `component` is disposed.
pub fn after_dispose<C: Component>(component: C, hook: Effect) -> Hooked<C> {
    Hooked::new(component).after_dispose(hook)
}
