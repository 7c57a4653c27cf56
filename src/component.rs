use crate::{hooks::Hooked, Effect};

mod cache;
mod cmap;
mod group;
mod list;
mod optional;


pub use cache::*;
pub use cmap::*;
pub use group::*;
pub use list::*;
pub use optional::*;

/// A part of a component tree.
///
/// The owner calls [`update`](Self::update) any number of times to re-poll the world and apply incremental changes,
/// then [`dispose`](Self::dispose) once to release resources.
/// Calling `update` after `dispose` is a caller error.
pub trait Component {
    fn update(&mut self);
    fn dispose(&mut self);
}

/// Component with nothing to update and nothing to dispose.
impl Component for () {
    fn update(&mut self) {}
    fn dispose(&mut self) {}
}

impl<C: Component + ?Sized> Component for Box<C> {
    fn update(&mut self) {
        (**self).update()
    }
    fn dispose(&mut self) {
        (**self).dispose()
    }
}

impl<C: Component> Component for Option<C> {
    fn update(&mut self) {
        if let Some(c) = self {
            c.update();
        }
    }
    fn dispose(&mut self) {
        if let Some(c) = self {
            c.dispose();
        }
    }
}

macro_rules! impl_component_for_tuple {
    ($($ty:ident $idx:tt),*) => {
        /// Updates and disposes the elements in order.
        impl<$($ty: Component),*> Component for ($($ty,)*) {
            fn update(&mut self) {
                $(self.$idx.update();)*
            }
            fn dispose(&mut self) {
                $(self.$idx.dispose();)*
            }
        }
    };
}

impl_component_for_tuple!(A 0);
impl_component_for_tuple!(A 0, B 1);
impl_component_for_tuple!(A 0, B 1, C 2);
impl_component_for_tuple!(A 0, B 1, C 2, D 3);
impl_component_for_tuple!(A 0, B 1, C 2, D 3, E 4);
impl_component_for_tuple!(A 0, B 1, C 2, D 3, E 4, F 5);

/// Component made of an update effect and a dispose effect.
#[derive(Clone, Default, Debug)]
#[must_use]
pub struct EffectComponent {
    pub update: Effect,
    pub dispose: Effect,
}

impl EffectComponent {
    pub fn new(update: Effect, dispose: Effect) -> Self {
        Self { update, dispose }
    }
}

impl Component for EffectComponent {
    fn update(&mut self) {
        self.update.call();
    }
    fn dispose(&mut self) {
        self.dispose.call();
    }
}

/// Extension methods for [`Component`].
pub trait ComponentExt: Component + Sized {
    /// Run `hook` before each update. See [`before_update`](crate::before_update).
    fn before_update(self, hook: Effect) -> Hooked<Self> {
        Hooked::new(self).before_update(hook)
    }
    /// Run `hook` after each update. See [`after_update`](crate::after_update).
    fn after_update(self, hook: Effect) -> Hooked<Self> {
        Hooked::new(self).after_update(hook)
    }
    /// Run `hook` before dispose. See [`before_dispose`](crate::before_dispose).
    fn before_dispose(self, hook: Effect) -> Hooked<Self> {
        Hooked::new(self).before_dispose(hook)
    }
    /// Run `hook` after dispose. See [`after_dispose`](crate::after_dispose).
    fn after_dispose(self, hook: Effect) -> Hooked<Self> {
        Hooked::new(self).after_dispose(hook)
    }

    fn boxed(self) -> Box<dyn Component>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}
impl<C: Component> ComponentExt for C {}
