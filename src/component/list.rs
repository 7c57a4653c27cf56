use std::{
    cell::RefCell,
    collections::{HashMap, HashSet},
    hash::Hash,
    mem::take,
    rc::Rc,
};

use slabmap::SlabMap;

use crate::{logging::trace, param::Snapshot, Component, Param};


/// Create one component per item of a sequence, identified by key.
///
/// `key_of` derives the key of an item from the item and its index.
/// Keys must be unique within the sequence.
///
/// `create` is called for each key that appears, with a parameter that always reads
/// the latest item observed for that key, so a child is never recreated because its item changed.
/// A child is disposed when its key disappears.
///
/// The keys are reconciled when the sequence is observed to differ from the previous one.
/// Every live child is then updated on each update, in the order of the last reconciled sequence.
pub fn list<T, K, KF, CF, C>(items: Param<Vec<T>>, key_of: KF, create: CF) -> List<T, K, KF, CF, C>
where
    T: PartialEq + Clone + 'static,
    K: Eq + Hash + Clone,
    KF: FnMut(&T, usize) -> K,
    CF: FnMut(Param<T>) -> C,
    C: Component,
{
    let mut list = List {
        items: Snapshot::new(items),
        key_of,
        create,
        entries: SlabMap::new(),
        keys: HashMap::new(),
        order: Vec::new(),
    };
    list.reconcile();
    list
}

/// Component returned by [`list`].
#[must_use]
pub struct List<T: PartialEq + Clone + 'static, K, KF, CF, C> {
    items: Snapshot<Param<Vec<T>>>,
    key_of: KF,
    create: CF,
    entries: SlabMap<Entry<K, T, C>>,
    keys: HashMap<K, usize>,
    order: Vec<usize>,
}

struct Entry<K, T, C> {
    key: K,
    value: Rc<RefCell<T>>,
    child: C,
}

impl<T, K, KF, CF, C> List<T, K, KF, CF, C>
where
    T: PartialEq + Clone + 'static,
    K: Eq + Hash + Clone,
    KF: FnMut(&T, usize) -> K,
    CF: FnMut(Param<T>) -> C,
    C: Component,
{
    /// Returns the number of live children.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn reconcile(&mut self) {
        let Self {
            items,
            key_of,
            create,
            entries,
            keys,
            order,
        } = self;
        let items = items.values();
        let mut live = HashSet::with_capacity(items.len());
        let previous = take(order);
        for (index, item) in items.iter().enumerate() {
            let key = key_of(item, index);
            let id = if let Some(&id) = keys.get(&key) {
                if let Some(entry) = entries.get(id) {
                    entry.value.replace(item.clone());
                }
                id
            } else {
                let value = Rc::new(RefCell::new(item.clone()));
                let child = create(Param::mapping({
                    let value = value.clone();
                    move || value.borrow().clone()
                }));
                let id = entries.insert(Entry {
                    key: key.clone(),
                    value,
                    child,
                });
                keys.insert(key.clone(), id);
                id
            };
            order.push(id);
            live.insert(key);
        }
        for id in previous {
            if entries.get(id).is_some_and(|entry| !live.contains(&entry.key)) {
                if let Some(mut entry) = entries.remove(id) {
                    keys.remove(&entry.key);
                    entry.child.dispose();
                }
            }
        }
        trace!(len = entries.len(), "list: reconciled");
    }
}

impl<T, K, KF, CF, C> Component for List<T, K, KF, CF, C>
where
    T: PartialEq + Clone + 'static,
    K: Eq + Hash + Clone,
    KF: FnMut(&T, usize) -> K,
    CF: FnMut(Param<T>) -> C,
    C: Component,
{
    fn update(&mut self) {
        if self.items.refresh() {
            self.reconcile();
        }
        for &id in &self.order {
            if let Some(entry) = self.entries.get_mut(id) {
                entry.child.update();
            }
        }
    }
    fn dispose(&mut self) {
        self.keys.clear();
        for id in take(&mut self.order) {
            if let Some(mut entry) = self.entries.remove(id) {
                entry.child.dispose();
            }
        }
    }
}
