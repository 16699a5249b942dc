use std::fmt;
use std::time::Instant;

use crate::transitions::TransitionConfig;
use crate::view::{AnimatedView, RemovedItemBuilder};

/// Animation phase of one on-screen slot.
enum Phase<W> {
    Entering {
        start: Instant,
        transition: TransitionConfig,
    },
    Steady,
    Exiting {
        start: Instant,
        transition: TransitionConfig,
        removed: RemovedItemBuilder<W>,
    },
}

impl<W> Phase<W> {
    fn is_exiting(&self) -> bool {
        matches!(self, Phase::Exiting { .. })
    }
}

/// What to draw for one slot at a given instant.
pub enum SlotFrame<W> {
    /// A slot backed by the displayed item at `index`.
    Live {
        index: usize,
        /// 0.0 (just inserted) to 1.0 (fully shown).
        visibility: f32,
    },
    /// An item that has left the list and is animating out.
    Removed {
        visual: W,
        /// 1.0 (just removed) down to 0.0 (gone).
        visibility: f32,
    },
}

impl<W: fmt::Debug> fmt::Debug for SlotFrame<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotFrame::Live { index, visibility } => f
                .debug_struct("Live")
                .field("index", index)
                .field("visibility", visibility)
                .finish(),
            SlotFrame::Removed { visual, visibility } => f
                .debug_struct("Removed")
                .field("visual", visual)
                .field("visibility", visibility)
                .finish(),
        }
    }
}

/// Slot bookkeeping for an animated list.
///
/// Tracks every on-screen slot, including items that already left the
/// logical list but are still animating out. Logical indices passed to
/// [`AnimatedView`] count only slots that are not exiting, so an exiting
/// slot keeps its place on screen while the indices around it shift.
pub struct ListAnimator<W> {
    slots: Vec<Phase<W>>,
    /// Reduced motion flag - when true, transitions complete instantly.
    reduced_motion: bool,
}

impl<W> Default for ListAnimator<W> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            reduced_motion: false,
        }
    }
}

impl<W> ListAnimator<W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable reduced motion (accessibility).
    /// When enabled, insertions and removals take effect immediately.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Number of on-screen slots, exiting ones included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots backed by a displayed item.
    pub fn logical_len(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_exiting()).count()
    }

    /// Returns true if any slot is entering or exiting.
    pub fn has_active_transitions(&self) -> bool {
        self.slots
            .iter()
            .any(|slot| !matches!(slot, Phase::Steady))
    }

    /// Position in `slots` of the `index`-th non-exiting slot.
    fn slot_position(&self, index: usize) -> Option<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| !slot.is_exiting())
            .nth(index)
            .map(|(position, _)| position)
    }

    /// Compute what every slot looks like at `now`, in on-screen order.
    pub fn frames(&self, now: Instant) -> Vec<SlotFrame<W>> {
        let mut index = 0;
        self.slots
            .iter()
            .map(|slot| match slot {
                Phase::Entering { start, transition } => {
                    let frame = SlotFrame::Live {
                        index,
                        visibility: transition.progress(*start, now),
                    };
                    index += 1;
                    frame
                }
                Phase::Steady => {
                    let frame = SlotFrame::Live {
                        index,
                        visibility: 1.0,
                    };
                    index += 1;
                    frame
                }
                Phase::Exiting {
                    start,
                    transition,
                    removed,
                } => SlotFrame::Removed {
                    visual: removed(),
                    visibility: 1.0 - transition.progress(*start, now),
                },
            })
            .collect()
    }
}

impl<W> AnimatedView<W> for ListAnimator<W> {
    fn initial_item_count(&mut self, count: usize) {
        self.slots = (0..count).map(|_| Phase::Steady).collect();
    }

    fn insert_item(&mut self, index: usize, transition: TransitionConfig) {
        let phase = if self.reduced_motion {
            Phase::Steady
        } else {
            Phase::Entering {
                start: Instant::now(),
                transition,
            }
        };
        let position = self.slot_position(index).unwrap_or(self.slots.len());
        self.slots.insert(position, phase);
    }

    fn remove_item(
        &mut self,
        index: usize,
        transition: TransitionConfig,
        removed: RemovedItemBuilder<W>,
    ) {
        let Some(position) = self.slot_position(index) else {
            log::warn!("remove_item: no slot for logical index {}", index);
            return;
        };
        if self.reduced_motion {
            self.slots.remove(position);
        } else {
            self.slots[position] = Phase::Exiting {
                start: Instant::now(),
                transition,
                removed,
            };
        }
    }

    /// Prune finished exits and settle finished entries.
    fn advance(&mut self, now: Instant) {
        self.slots.retain(|slot| match slot {
            Phase::Exiting {
                start, transition, ..
            } => !transition.is_finished(*start, now),
            _ => true,
        });
        for slot in &mut self.slots {
            if let Phase::Entering { start, transition } = slot {
                if transition.is_finished(*start, now) {
                    *slot = Phase::Steady;
                }
            }
        }
    }
}

impl<W> fmt::Debug for ListAnimator<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phases: Vec<&str> = self
            .slots
            .iter()
            .map(|slot| match slot {
                Phase::Entering { .. } => "entering",
                Phase::Steady => "steady",
                Phase::Exiting { .. } => "exiting",
            })
            .collect();
        f.debug_struct("ListAnimator")
            .field("slots", &phases)
            .field("reduced_motion", &self.reduced_motion)
            .finish()
    }
}
