use std::{cell::RefCell, rc::Rc};

use derive_ex::derive_ex;

use crate::Param;


/// Build a component around a single mutable value.
///
/// `build` receives a parameter reading the value and a [`Setter`] writing it.
/// A write is seen by the next read of the parameter.
pub fn state<T, C>(initial: T, build: impl FnOnce(Param<T>, Setter<T>) -> C) -> C
where
    T: Clone + 'static,
{
    let cell = Rc::new(RefCell::new(initial));
    let param = Param::mapping({
        let cell = cell.clone();
        move || cell.borrow().clone()
    });
    build(param, Setter(cell))
}

/// Writes the value created by [`state`].
#[derive_ex(Clone, bound())]
pub struct Setter<T>(Rc<RefCell<T>>);

impl<T> Setter<T> {
    /// Replace the value.
    pub fn set(&self, value: T) {
        *self.0.borrow_mut() = value;
    }

    /// Modify the value in place.
    ///
    /// # Panics
    ///
    /// Panics if `f` reads the state parameter.
    pub fn modify(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.0.borrow_mut());
    }
}
