use std::{cell::RefCell, fmt, rc::Rc};

use crate::{compose, noop, Effect};


/// A parameter that is either a constant value or a function reading a value that may change from time to time.
pub enum Param<T> {
    /// Constant parameter.
    Value(T),
    /// Variable parameter. The function is called each time the current value is needed.
    Mapping(Rc<dyn Fn() -> T>),
}

impl<T> Param<T> {
    /// Create a variable parameter from a function.
    pub fn mapping(f: impl Fn() -> T + 'static) -> Self {
        Param::Mapping(Rc::new(f))
    }

    /// Returns `true` if the parameter is a constant.
    pub fn is_value(&self) -> bool {
        matches!(self, Param::Value(_))
    }

    /// Returns `true` if the parameter is a variable.
    pub fn is_mapping(&self) -> bool {
        matches!(self, Param::Mapping(_))
    }

    /// Returns the current value of the parameter.
    ///
    /// A variable parameter calls its function exactly once.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        match self {
            Param::Value(value) => value.clone(),
            Param::Mapping(f) => f(),
        }
    }
}

impl<T: Clone> Clone for Param<T> {
    fn clone(&self) -> Self {
        match self {
            Param::Value(value) => Param::Value(value.clone()),
            Param::Mapping(f) => Param::Mapping(f.clone()),
        }
    }
}

impl<T> From<T> for Param<T> {
    fn from(value: T) -> Self {
        Param::Value(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Param<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Param::Mapping(_) => write!(f, "Mapping(..)"),
        }
    }
}

/// A flat group of parameters observed together.
///
/// Implemented for a single [`Param`], for tuples of up to six [`Param`]s and for `Vec<Param<T>>`.
pub trait Params: Sized + 'static {
    /// The current values of all parameters, compared slot by slot to detect changes.
    type Values: PartialEq + Clone + 'static;

    /// Returns `true` if every parameter is a constant.
    fn is_static(&self) -> bool;

    /// Reads the current value of every parameter.
    fn get(&self) -> Self::Values;

    /// Returns parameters of the same shape that read a private snapshot instead of the original sources,
    /// and the effect that refreshes that snapshot.
    ///
    /// Constants are passed through unchanged.
    fn cached(&self) -> (Self, Effect);
}

impl<T: PartialEq + Clone + 'static> Params for Param<T> {
    type Values = T;

    fn is_static(&self) -> bool {
        self.is_value()
    }
    fn get(&self) -> T {
        Param::get(self)
    }
    fn cached(&self) -> (Self, Effect) {
        match self {
            Param::Value(value) => (Param::Value(value.clone()), noop()),
            Param::Mapping(_) => {
                let snapshot = Snapshot::new(self.clone());
                let slot = Rc::new(RefCell::new(snapshot.values().clone()));
                let refresh = watch(snapshot, {
                    let slot = slot.clone();
                    move |value| *slot.borrow_mut() = value
                });
                (Param::mapping(move || slot.borrow().clone()), refresh)
            }
        }
    }
}

impl<T: PartialEq + Clone + 'static> Params for Vec<Param<T>> {
    type Values = Vec<T>;

    fn is_static(&self) -> bool {
        self.iter().all(|p| p.is_value())
    }
    fn get(&self) -> Vec<T> {
        self.iter().map(|p| p.get()).collect()
    }
    fn cached(&self) -> (Self, Effect) {
        let (params, refresh): (Vec<_>, Vec<_>) = self.iter().map(Params::cached).unzip();
        (params, compose(refresh))
    }
}

macro_rules! impl_params_for_tuple {
    ($($ty:ident $idx:tt),*) => {
        impl<$($ty: PartialEq + Clone + 'static),*> Params for ($(Param<$ty>,)*) {
            type Values = ($($ty,)*);

            fn is_static(&self) -> bool {
                true $(&& self.$idx.is_value())*
            }
            fn get(&self) -> Self::Values {
                ($(self.$idx.get(),)*)
            }
            fn cached(&self) -> (Self, Effect) {
                let cached = ($(Params::cached(&self.$idx),)*);
                (($(cached.$idx.0,)*), compose([$(cached.$idx.1),*]))
            }
        }
    };
}

impl_params_for_tuple!(A 0);
impl_params_for_tuple!(A 0, B 1);
impl_params_for_tuple!(A 0, B 1, C 2);
impl_params_for_tuple!(A 0, B 1, C 2, D 3);
impl_params_for_tuple!(A 0, B 1, C 2, D 3, E 4);
impl_params_for_tuple!(A 0, B 1, C 2, D 3, E 4, F 5);

/// Last observed values of a group of parameters.
pub(crate) struct Snapshot<P: Params> {
    inputs: P,
    values: P::Values,
    is_static: bool,
}

impl<P: Params> Snapshot<P> {
    pub fn new(inputs: P) -> Self {
        Self {
            values: inputs.get(),
            is_static: inputs.is_static(),
            inputs,
        }
    }
    pub fn values(&self) -> &P::Values {
        &self.values
    }
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Reads the inputs again and stores the result if it differs from the snapshot.
    ///
    /// Returns `true` if the snapshot changed.
    pub fn refresh(&mut self) -> bool {
        if self.is_static {
            return false;
        }
        let values = self.inputs.get();
        if values == self.values {
            false
        } else {
            self.values = values;
            true
        }
    }
}

fn watch<P: Params>(mut snapshot: Snapshot<P>, mut f: impl FnMut(P::Values) + 'static) -> Effect {
    if snapshot.is_static() {
        noop()
    } else {
        Effect::new(move || {
            if snapshot.refresh() {
                f(snapshot.values().clone());
            }
        })
    }
}

/// Map a group of parameters to a new parameter.
///
/// If every input is a constant, `f` is called once now and the result is a constant.
/// Otherwise the result is a variable parameter that calls `f` with fresh input values on every read, without caching.
pub fn map<P: Params, U>(inputs: P, f: impl Fn(P::Values) -> U + 'static) -> Param<U> {
    if inputs.is_static() {
        Param::Value(f(inputs.get()))
    } else {
        Param::mapping(move || f(inputs.get()))
    }
}

/// Pass changes of a group of parameters to a function.
///
/// `f` is called once now with the current values.
/// The returned effect reads the inputs again and calls `f` only if some value differs from the last observed one.
/// If every input is a constant, the returned effect is [`noop`].
pub fn changes<P: Params>(inputs: P, mut f: impl FnMut(P::Values) + 'static) -> Effect {
    let snapshot = Snapshot::new(inputs);
    f(snapshot.values().clone());
    watch(snapshot, f)
}

/// A field assignment for [`write`].
#[must_use]
pub struct Prop<T>(Box<dyn FnOnce(&Rc<RefCell<T>>) -> Effect>);

/// Create a [`Prop`] that assigns the value of `param` with `set`.
pub fn prop<T: 'static, V: PartialEq + Clone + 'static>(
    param: Param<V>,
    set: impl Fn(&mut T, V) + 'static,
) -> Prop<T> {
    Prop(Box::new(move |target| {
        let target = target.clone();
        changes(param, move |value| set(&mut target.borrow_mut(), value))
    }))
}

/// Returns an effect that writes each property into `target` when its parameter changes.
///
/// Every property is written once now. Fields without a property are left untouched.
pub fn write<T: 'static>(target: &Rc<RefCell<T>>, props: impl IntoIterator<Item = Prop<T>>) -> Effect {
    compose(props.into_iter().map(|prop| (prop.0)(target)))
}
