//! Selection coordinator: decides which items leave or come back when an
//! item is tapped.
//!
//! # Example
//!
//! ```ignore
//! use fadelist::{renderer, Equivalence, ListAnimator, SelectableList, ValueSelector};
//!
//! let list = SelectableList::builder(people, Equivalence::by_eq(), renderer(draw_person))
//!     .value_selector(ValueSelector::custom(|p: &Person| p.name.clone()))
//!     .on_selected(|p| log::info!("picked {}", p.name))
//!     .build(ListAnimator::new());
//! ```

use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::animation::{ListAnimator, SlotFrame};
use crate::error::ListError;
use crate::model::{DisplayedItems, Equivalence};
use crate::transitions::TransitionConfig;
use crate::view::{AnimatedView, ItemRenderer, RemovedItemBuilder, Tap};

type ItemCallback<E> = Box<dyn FnMut(&E)>;

/// Projects an item onto the value that identifies it as selected.
///
/// The identity selector only exists when the item is its own value:
///
/// ```compile_fail
/// use fadelist::ValueSelector;
///
/// let by_length = ValueSelector::<String, usize>::identity();
/// ```
pub enum ValueSelector<E, V> {
    /// The item is its own selection value.
    Identity(IdentityFn<E, V>),
    Custom(Box<dyn Fn(&E) -> V>),
}

/// Payload of [`ValueSelector::Identity`]. Only built by
/// [`ValueSelector::identity`], where the value type is the item type.
///
/// ```compile_fail
/// use fadelist::selection::{IdentityFn, ValueSelector};
///
/// let age = ValueSelector::Identity(IdentityFn(|s: &String| s.len()));
/// ```
pub struct IdentityFn<E, V>(fn(&E) -> V);

impl<E, V> ValueSelector<E, V> {
    pub fn custom(select: impl Fn(&E) -> V + 'static) -> Self {
        Self::Custom(Box::new(select))
    }

    pub fn select(&self, item: &E) -> V {
        match self {
            Self::Identity(IdentityFn(select)) => select(item),
            Self::Custom(select) => select(item),
        }
    }
}

impl<E: Clone> ValueSelector<E, E> {
    pub fn identity() -> Self {
        Self::Identity(IdentityFn(E::clone))
    }
}

impl<E: Clone> Default for ValueSelector<E, E> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<E, V> fmt::Debug for ValueSelector<E, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity(_) => f.write_str("Identity"),
            Self::Custom(_) => f.write_str("Custom"),
        }
    }
}

/// Whether an item is selected, and which.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectionState<V> {
    #[default]
    Nothing,
    One(V),
}

impl<V> SelectionState<V> {
    pub fn value(&self) -> Option<&V> {
        match self {
            Self::Nothing => None,
            Self::One(value) => Some(value),
        }
    }
}

/// What a tap did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The tapped item became the selection; every other item is leaving.
    Selected,
    /// The tapped item was the selection; every other item is coming back.
    Deselected,
    /// The tap pointed at an item that is no longer displayed.
    Ignored,
}

/// One rendered slot, in on-screen order.
#[derive(Debug, Clone)]
pub struct RenderedItem<W> {
    pub visual: W,
    /// 0.0 (invisible) to 1.0 (fully shown).
    pub visibility: f32,
    /// `None` for items that are animating out.
    pub tap: Option<Tap>,
}

/// A list where choosing an item hides all others, and choosing it again
/// brings them back.
pub struct SelectableList<E, V, W, H> {
    items: Vec<E>,
    displayed: DisplayedItems<E, W, H>,
    selector: ValueSelector<E, V>,
    state: SelectionState<V>,
    renderer: ItemRenderer<E, W>,
    on_selected: Option<ItemCallback<E>>,
    on_deselected: Option<ItemCallback<E>>,
}

impl<E: Clone + 'static, W: 'static> SelectableList<E, E, W, ListAnimator<W>> {
    /// Start configuring a list over `items`.
    ///
    /// Items are their own selection value until
    /// [`value_selector`](SelectableListBuilder::value_selector) says otherwise.
    pub fn builder(
        items: Vec<E>,
        equivalence: Equivalence<E>,
        renderer: ItemRenderer<E, W>,
    ) -> SelectableListBuilder<E, E, W> {
        SelectableListBuilder {
            items,
            equivalence,
            renderer,
            selector: ValueSelector::identity(),
            selected_value: None,
            on_selected: None,
            on_deselected: None,
            transition: TransitionConfig::default(),
        }
    }
}

impl<E, V, W, H> SelectableList<E, V, W, H>
where
    E: Clone + 'static,
    V: PartialEq,
    W: 'static,
    H: AnimatedView<W>,
{
    /// React to a tap on the displayed item at `tap.index`.
    pub fn handle_tap(&mut self, tap: Tap) -> Result<TapOutcome, ListError> {
        let Some(tapped) = self.displayed.get(tap.index).cloned() else {
            log::debug!(
                "ignoring tap at {}: only {} items displayed",
                tap.index,
                self.displayed.len()
            );
            return Ok(TapOutcome::Ignored);
        };

        let value = self.selector.select(&tapped);
        if self.state.value() == Some(&value) {
            self.deselect(&tapped)?;
            Ok(TapOutcome::Deselected)
        } else {
            self.select(&tapped, value)?;
            Ok(TapOutcome::Selected)
        }
    }

    fn select(&mut self, tapped: &E, value: V) -> Result<(), ListError> {
        let departing: Vec<&E> = self
            .items
            .iter()
            .filter(|item| self.selector.select(item) != value)
            .collect();

        // Resolve everything up front so a broken equivalence fails before
        // anything changes. Each departing item must land on its own slot, and
        // never on an item that stays.
        let mut claimed = HashSet::new();
        for item in &departing {
            let index = self.displayed.index_of(item)?;
            let lands_on_kept = self
                .displayed
                .get(index)
                .is_some_and(|shown| self.selector.select(shown) == value);
            if lands_on_kept || !claimed.insert(index) {
                return Err(ListError::not_comparable::<E>());
            }
        }

        if let Some(on_selected) = self.on_selected.as_mut() {
            on_selected(tapped);
        }
        log::debug!("selected item, removing {} others", departing.len());

        // Each removal shifts the items after it, so look the index up again
        // every time.
        for item in departing {
            let index = self.displayed.index_of(item)?;
            let removed = removed_builder(&self.renderer, item);
            self.displayed.remove_at(index, removed);
        }
        self.state = SelectionState::One(value);
        Ok(())
    }

    fn deselect(&mut self, tapped: &E) -> Result<(), ListError> {
        // Every shown item must stand for exactly one item of the full list,
        // or the reinsertion below would skip or duplicate items.
        let equivalence = self.displayed.equivalence();
        for shown in self.displayed.iter() {
            let matches = self
                .items
                .iter()
                .filter(|item| equivalence.same(item, shown))
                .count();
            if matches != 1 {
                return Err(ListError::not_comparable::<E>());
            }
        }

        if let Some(on_deselected) = self.on_deselected.as_mut() {
            on_deselected(tapped);
        }
        self.state = SelectionState::Nothing;

        let mut restored = 0;
        for (index, item) in self.items.iter().enumerate() {
            if !self.displayed.contains(item) {
                self.displayed.insert(index, item.clone());
                restored += 1;
            }
        }
        log::debug!("deselected item, restored {} others", restored);
        Ok(())
    }

    /// Render every displayed item, each with its tap handle.
    pub fn render_items(&self) -> Vec<W> {
        self.displayed
            .iter()
            .enumerate()
            .map(|(index, item)| {
                (self.renderer)(item, self.is_selected(item), Some(Tap { index }))
            })
            .collect()
    }

    pub fn is_selected(&self, item: &E) -> bool {
        self.state.value() == Some(&self.selector.select(item))
    }

    /// Replace the full item list, e.g. when the host rebuilds the widget.
    ///
    /// The displayed items are kept as they are, so the new items must be
    /// recognised by the list's [`Equivalence`] as the ones already shown.
    pub fn set_items(&mut self, items: Vec<E>) {
        log::debug!("replacing {} items with {}", self.items.len(), items.len());
        self.items = items;
    }

    /// Forward a clock tick to the view.
    pub fn advance(&mut self, now: Instant) {
        self.displayed.advance(now);
    }
}

impl<E, V, W, H> SelectableList<E, V, W, H> {
    /// The full item list, in original order.
    pub fn items(&self) -> &[E] {
        &self.items
    }

    /// The items currently displayed, in display order.
    pub fn displayed(&self) -> &[E] {
        self.displayed.as_slice()
    }

    pub fn selected_value(&self) -> Option<&V> {
        self.state.value()
    }

    pub fn state(&self) -> &SelectionState<V> {
        &self.state
    }

    pub fn view(&self) -> &H {
        self.displayed.view()
    }

    pub fn transition(&self) -> TransitionConfig {
        self.displayed.transition()
    }
}

impl<E, V, W> SelectableList<E, V, W, ListAnimator<W>>
where
    E: Clone + 'static,
    V: PartialEq,
    W: 'static,
{
    /// Render every on-screen slot at `now`, including items that are
    /// animating out.
    pub fn render(&self, now: Instant) -> Vec<RenderedItem<W>> {
        self.displayed
            .view()
            .frames(now)
            .into_iter()
            .filter_map(|frame| match frame {
                SlotFrame::Live { index, visibility } => {
                    let item = self.displayed.get(index)?;
                    let tap = Some(Tap { index });
                    Some(RenderedItem {
                        visual: (self.renderer)(item, self.is_selected(item), tap),
                        visibility,
                        tap,
                    })
                }
                SlotFrame::Removed { visual, visibility } => Some(RenderedItem {
                    visual,
                    visibility,
                    tap: None,
                }),
            })
            .collect()
    }

    pub fn has_active_transitions(&self) -> bool {
        self.displayed.view().has_active_transitions()
    }

    /// Enable or disable reduced motion (accessibility).
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.displayed.view_mut().set_reduced_motion(enabled);
    }
}

fn removed_builder<E, W>(renderer: &ItemRenderer<E, W>, item: &E) -> RemovedItemBuilder<W>
where
    E: Clone + 'static,
    W: 'static,
{
    let renderer = Rc::clone(renderer);
    let item = item.clone();
    Box::new(move || renderer(&item, false, None))
}

impl<E: fmt::Debug, V: fmt::Debug, W, H: fmt::Debug> fmt::Debug for SelectableList<E, V, W, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectableList")
            .field("items", &self.items)
            .field("displayed", &self.displayed)
            .field("selector", &self.selector)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Configuration for a [`SelectableList`].
pub struct SelectableListBuilder<E, V, W> {
    items: Vec<E>,
    equivalence: Equivalence<E>,
    renderer: ItemRenderer<E, W>,
    selector: ValueSelector<E, V>,
    selected_value: Option<V>,
    on_selected: Option<ItemCallback<E>>,
    on_deselected: Option<ItemCallback<E>>,
    transition: TransitionConfig,
}

impl<E, V, W> SelectableListBuilder<E, V, W>
where
    E: Clone + 'static,
    W: 'static,
{
    /// Select by a projection of the item instead of the item itself.
    ///
    /// Call before [`selected_value`](Self::selected_value): the selected
    /// value has the selector's type, so a value set earlier is dropped.
    pub fn value_selector<V2>(
        self,
        selector: ValueSelector<E, V2>,
    ) -> SelectableListBuilder<E, V2, W> {
        if self.selected_value.is_some() {
            log::warn!("value_selector replaced after selected_value; initial selection dropped");
        }
        SelectableListBuilder {
            items: self.items,
            equivalence: self.equivalence,
            renderer: self.renderer,
            selector,
            selected_value: None,
            on_selected: self.on_selected,
            on_deselected: self.on_deselected,
            transition: self.transition,
        }
    }

    /// Start with `value` selected: only the items projecting to it are
    /// shown, the same set a tap on one of them would leave.
    pub fn selected_value(mut self, value: V) -> Self {
        self.selected_value = Some(value);
        self
    }

    /// Called with the tapped item when it becomes the selection.
    pub fn on_selected(mut self, callback: impl FnMut(&E) + 'static) -> Self {
        self.on_selected = Some(Box::new(callback));
        self
    }

    /// Called with the tapped item when it stops being the selection.
    pub fn on_deselected(mut self, callback: impl FnMut(&E) + 'static) -> Self {
        self.on_deselected = Some(Box::new(callback));
        self
    }

    pub fn transition(mut self, transition: TransitionConfig) -> Self {
        self.transition = transition;
        self
    }

    /// Set the enter/exit duration, keeping the easing.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.transition = self.transition.with_duration(duration);
        self
    }

    /// Finish configuration, driving `view` from now on.
    pub fn build<H: AnimatedView<W>>(self, view: H) -> SelectableList<E, V, W, H>
    where
        V: PartialEq,
    {
        let selector = self.selector;
        let (state, initial) = match self.selected_value {
            Some(value) => {
                let initial: Vec<E> = self
                    .items
                    .iter()
                    .filter(|item| selector.select(item) == value)
                    .cloned()
                    .collect();
                if initial.is_empty() {
                    log::warn!("initial selected value matches no item, showing all items");
                    (SelectionState::Nothing, self.items.clone())
                } else {
                    (SelectionState::One(value), initial)
                }
            }
            None => (SelectionState::Nothing, self.items.clone()),
        };

        SelectableList {
            displayed: DisplayedItems::new(initial, self.equivalence, view, self.transition),
            items: self.items,
            selector,
            state,
            renderer: self.renderer,
            on_selected: self.on_selected,
            on_deselected: self.on_deselected,
        }
    }
}
