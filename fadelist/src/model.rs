//! The displayed-items model: the ordered sequence of visible items kept in
//! lockstep with an [`AnimatedView`].

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;
use std::time::Instant;

use crate::error::ListError;
use crate::transitions::TransitionConfig;
use crate::view::{AnimatedView, RemovedItemBuilder};

/// How two items are recognised as the same item.
///
/// The list never falls back to `==` on its own; the caller picks the rule.
pub struct Equivalence<E> {
    same: Box<dyn Fn(&E, &E) -> bool>,
}

impl<E> Equivalence<E> {
    /// Compare with an arbitrary predicate.
    pub fn by(same: impl Fn(&E, &E) -> bool + 'static) -> Self {
        Self {
            same: Box::new(same),
        }
    }

    /// Compare a projected key, e.g. a database id.
    pub fn by_key<K: PartialEq>(key: impl Fn(&E) -> K + 'static) -> Self {
        Self::by(move |a, b| key(a) == key(b))
    }

    pub fn same(&self, a: &E, b: &E) -> bool {
        (self.same)(a, b)
    }
}

impl<E: PartialEq + 'static> Equivalence<E> {
    /// Value equality through the item's `PartialEq`.
    pub fn by_eq() -> Self {
        Self::by(|a, b| a == b)
    }
}

impl<T: ?Sized + 'static> Equivalence<Rc<T>> {
    /// Reference identity: two handles are the same item only if they point
    /// at the same allocation.
    pub fn by_ptr() -> Self {
        Self::by(Rc::ptr_eq)
    }
}

impl<E> fmt::Debug for Equivalence<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Equivalence").finish_non_exhaustive()
    }
}

/// The currently visible items, in display order.
///
/// Every mutation updates the sequence and notifies the view in the same
/// call; neither is reachable for independent mutation.
pub struct DisplayedItems<E, W, H> {
    items: Vec<E>,
    equivalence: Equivalence<E>,
    view: H,
    transition: TransitionConfig,
    _visual: PhantomData<fn() -> W>,
}

impl<E, W, H: AnimatedView<W>> DisplayedItems<E, W, H> {
    /// Wrap `initial` and seed the view with the same number of entries.
    pub fn new(
        initial: Vec<E>,
        equivalence: Equivalence<E>,
        mut view: H,
        transition: TransitionConfig,
    ) -> Self {
        view.initial_item_count(initial.len());
        Self {
            items: initial,
            equivalence,
            view,
            transition,
            _visual: PhantomData,
        }
    }

    /// Insert `item` at `index` and animate it in.
    ///
    /// An index past the end is clamped to the end.
    pub fn insert(&mut self, index: usize, item: E) {
        let index = if index > self.items.len() {
            log::warn!(
                "insert index {} out of range for {} displayed items, appending",
                index,
                self.items.len()
            );
            self.items.len()
        } else {
            index
        };
        self.items.insert(index, item);
        self.view.insert_item(index, self.transition);
    }

    /// Remove the item at `index` and animate it out with `removed`.
    ///
    /// Returns `None` without touching the view when `index` is out of range.
    pub fn remove_at(&mut self, index: usize, removed: RemovedItemBuilder<W>) -> Option<E> {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        self.view.remove_item(index, self.transition, removed);
        Some(item)
    }

    /// Current position of `item`.
    pub fn index_of(&self, item: &E) -> Result<usize, ListError> {
        self.items
            .iter()
            .position(|displayed| self.equivalence.same(displayed, item))
            .ok_or_else(ListError::not_comparable::<E>)
    }

    pub fn contains(&self, item: &E) -> bool {
        self.items
            .iter()
            .any(|displayed| self.equivalence.same(displayed, item))
    }

    /// Forward a clock tick to the view.
    pub fn advance(&mut self, now: Instant) {
        self.view.advance(now);
    }
}

impl<E, W, H> DisplayedItems<E, W, H> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&E> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[E] {
        &self.items
    }

    pub fn equivalence(&self) -> &Equivalence<E> {
        &self.equivalence
    }

    /// Read-only access to the view handle.
    pub fn view(&self) -> &H {
        &self.view
    }

    pub fn transition(&self) -> TransitionConfig {
        self.transition
    }

    /// View settings only; never insert or remove through this.
    pub(crate) fn view_mut(&mut self) -> &mut H {
        &mut self.view
    }
}

impl<E: fmt::Debug, W, H: fmt::Debug> fmt::Debug for DisplayedItems<E, W, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayedItems")
            .field("items", &self.items)
            .field("view", &self.view)
            .field("transition", &self.transition)
            .finish()
    }
}
