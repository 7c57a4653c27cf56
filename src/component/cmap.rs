use crate::{logging::trace, param::Snapshot, Component, Params};

#[cfg(test)]
mod tests;

/// Create a component from the values of a group of parameters, and create it again whenever they change.
///
/// If every input is a constant, `create` is called once and the result is [`CMap::Static`],
/// which forwards to the child without checking anything.
///
/// Otherwise, on update the inputs are read again. If nothing changed the child is updated.
/// If some value changed, the child is disposed and replaced by a new one created from the new values,
/// which is not updated until the next cycle.
pub fn cmap<P, F, C>(inputs: P, mut create: F) -> CMap<P, F, C>
where
    P: Params,
    F: FnMut(P::Values) -> C,
    C: Component,
{
    let snapshot = Snapshot::new(inputs);
    let child = create(snapshot.values().clone());
    if snapshot.is_static() {
        CMap::Static(child)
    } else {
        CMap::Dynamic(Rebuild {
            snapshot,
            create,
            child,
        })
    }
}

/// Component returned by [`cmap`].
#[must_use]
pub enum CMap<P: Params, F, C> {
    /// Created from constants only.
    Static(C),
    /// Depends on at least one variable parameter.
    Dynamic(Rebuild<P, F, C>),
}

impl<P: Params, F, C> CMap<P, F, C> {
    /// Returns the current child.
    pub fn child(&self) -> &C {
        match self {
            CMap::Static(child) => child,
            CMap::Dynamic(r) => &r.child,
        }
    }
}

/// State of a [`CMap`] that depends on variable parameters.
pub struct Rebuild<P: Params, F, C> {
    snapshot: Snapshot<P>,
    create: F,
    child: C,
}

impl<P, F, C> Component for CMap<P, F, C>
where
    P: Params,
    F: FnMut(P::Values) -> C,
    C: Component,
{
    fn update(&mut self) {
        match self {
            CMap::Static(child) => child.update(),
            CMap::Dynamic(r) => {
                if r.snapshot.refresh() {
                    trace!("cmap: rebuild");
                    r.child.dispose();
                    r.child = (r.create)(r.snapshot.values().clone());
                } else {
                    r.child.update();
                }
            }
        }
    }
    fn dispose(&mut self) {
        match self {
            CMap::Static(child) => child.dispose(),
            CMap::Dynamic(r) => r.child.dispose(),
        }
    }
}
