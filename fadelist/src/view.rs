//! The collaborators a host UI provides: a renderer for items and an
//! animated view that mirrors insertions and removals.

use std::rc::Rc;
use std::time::Instant;

use crate::transitions::TransitionConfig;

/// Handle passed to the renderer for items that react to taps.
///
/// The host routes it back into
/// [`SelectableList::handle_tap`](crate::SelectableList::handle_tap) when the
/// rendered item is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tap {
    /// Position of the item in the displayed items when it was rendered.
    pub index: usize,
}

/// Renders one item: `(item, selected, tap)`.
///
/// `tap` is `None` for items rendered only for their exit animation.
pub type ItemRenderer<E, W> = Rc<dyn Fn(&E, bool, Option<Tap>) -> W>;

/// Build an [`ItemRenderer`] from a closure.
pub fn renderer<E, W>(
    render: impl Fn(&E, bool, Option<Tap>) -> W + 'static,
) -> ItemRenderer<E, W> {
    Rc::new(render)
}

/// Renders an item that has already left the logical list so it stays
/// visible while its exit transition runs.
pub type RemovedItemBuilder<W> = Box<dyn Fn() -> W>;

/// An animated list view driven by index-based insertions and removals.
///
/// Indices are logical: they refer to positions in the displayed-items
/// sequence at the moment of the call, not counting items that are still
/// animating out.
pub trait AnimatedView<W> {
    /// Populate the view with `count` entries that are already present,
    /// without animating them.
    fn initial_item_count(&mut self, count: usize);

    /// Animate a new entry appearing at `index`.
    fn insert_item(&mut self, index: usize, transition: TransitionConfig);

    /// Animate the entry at `index` leaving, rendering it with `removed`
    /// until the transition ends.
    fn remove_item(
        &mut self,
        index: usize,
        transition: TransitionConfig,
        removed: RemovedItemBuilder<W>,
    );

    /// Move time forward. Views without their own clock ignore this.
    fn advance(&mut self, _now: Instant) {}
}
