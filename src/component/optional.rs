use crate::{logging::trace, param::Snapshot, Component, Param};


/// Mount a component while `flag` is `true`.
///
/// A child is created with `create` whenever `flag` is observed turning `true` (including now),
/// and disposed whenever it is observed turning `false`.
/// Observing the same value again does nothing.
///
/// On update, the flag is checked first and then the live child, if any, is updated.
/// A child mounted by this check is updated in the same cycle.
pub fn optional<F, C>(flag: Param<bool>, mut create: F) -> Optional<F, C>
where
    F: FnMut() -> C,
    C: Component,
{
    let flag = Snapshot::new(flag);
    let child = if *flag.values() { Some(create()) } else { None };
    Optional {
        flag,
        create,
        child,
    }
}

/// Component returned by [`optional`].
#[must_use]
pub struct Optional<F, C> {
    flag: Snapshot<Param<bool>>,
    create: F,
    child: Option<C>,
}

impl<F, C> Optional<F, C> {
    /// Returns `true` if the child is currently mounted.
    pub fn is_mounted(&self) -> bool {
        self.child.is_some()
    }
}

impl<F, C> Component for Optional<F, C>
where
    F: FnMut() -> C,
    C: Component,
{
    fn update(&mut self) {
        if self.flag.refresh() {
            if let Some(mut child) = self.child.take() {
                trace!("optional: unmount");
                child.dispose();
            }
            if *self.flag.values() {
                trace!("optional: mount");
                self.child = Some((self.create)());
            }
        }
        self.child.update();
    }
    fn dispose(&mut self) {
        if let Some(mut child) = self.child.take() {
            child.dispose();
        }
    }
}
