use crate::Component;

#[cfg(test)]
mod tests;

/// Compose components in parallel.
///
/// The returned component updates and disposes every child in order.
/// To group components of different types, use a tuple or `Box<dyn Component>`.
pub fn group<C: Component>(components: impl IntoIterator<Item = C>) -> Group<C> {
    components.into_iter().collect()
}

/// Component returned by [`group`].
#[must_use]
pub struct Group<C>(Vec<C>);

impl<C> Group<C> {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<C: Component> FromIterator<C> for Group<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Group(iter.into_iter().collect())
    }
}

impl<C: Component> Component for Group<C> {
    fn update(&mut self) {
        for c in &mut self.0 {
            c.update();
        }
    }
    fn dispose(&mut self) {
        for c in &mut self.0 {
            c.dispose();
        }
    }
}
