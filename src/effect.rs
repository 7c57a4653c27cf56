use std::{cell::RefCell, fmt, rc::Rc};


/// A side-effecting procedure without arguments or result.
///
/// `Effect` is cheap to clone; clones share the same procedure and compare equal with [`Effect::ptr_eq`].
/// The no-op effect is a distinguished value rather than an empty closure, so it can be recognized and elided by [`compose`].
#[derive(Clone, Default)]
#[must_use]
pub struct Effect(RawEffect);

#[derive(Clone, Default)]
enum RawEffect {
    #[default]
    Noop,
    Fn(Rc<RefCell<dyn FnMut()>>),
    Seq(Rc<[Effect]>),
}

impl Effect {
    /// Create an effect from a function.
    pub fn new(f: impl FnMut() + 'static) -> Self {
        Effect(RawEffect::Fn(Rc::new(RefCell::new(f))))
    }

    /// Returns the no-op effect. Same as [`noop`].
    pub fn noop() -> Self {
        Effect(RawEffect::Noop)
    }

    pub fn is_noop(&self) -> bool {
        matches!(self.0, RawEffect::Noop)
    }

    /// Run the effect.
    ///
    /// # Panics
    ///
    /// Panics if the effect is called again from inside its own invocation.
    pub fn call(&self) {
        match &self.0 {
            RawEffect::Noop => {}
            RawEffect::Fn(f) => (*f.borrow_mut())(),
            RawEffect::Seq(effects) => {
                for e in effects.iter() {
                    e.call();
                }
            }
        }
    }

    /// Returns `true` if both effects are the same effect (not merely effects with the same behavior).
    ///
    /// All no-op effects are the same effect.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (RawEffect::Noop, RawEffect::Noop) => true,
            (RawEffect::Fn(a), RawEffect::Fn(b)) => Rc::ptr_eq(a, b),
            (RawEffect::Seq(a), RawEffect::Seq(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<()> for Effect {
    fn from(_: ()) -> Self {
        Effect::noop()
    }
}
impl From<Option<Effect>> for Effect {
    fn from(value: Option<Effect>) -> Self {
        value.unwrap_or_default()
    }
}

impl fmt::Debug for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            RawEffect::Noop => write!(f, "Effect::Noop"),
            RawEffect::Fn(_) => write!(f, "Effect::Fn"),
            RawEffect::Seq(effects) => f.debug_tuple("Effect::Seq").field(&effects.len()).finish(),
        }
    }
}

/// The effect that does nothing.
pub fn noop() -> Effect {
    Effect::noop()
}

/// Combine effects into one effect that runs them in order.
///
/// No-op effects are dropped. If nothing is left the result is [`noop`],
/// and if exactly one effect is left it is returned as is.
pub fn compose(effects: impl IntoIterator<Item = Effect>) -> Effect {
    let mut effects: Vec<Effect> = effects.into_iter().filter(|e| !e.is_noop()).collect();
    match effects.len() {
        0 => Effect::noop(),
        1 => effects.swap_remove(0),
        _ => Effect(RawEffect::Seq(effects.into())),
    }
}
