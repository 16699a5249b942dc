pub mod animation;
pub mod error;
pub mod model;
pub mod selection;
pub mod transitions;
pub mod view;

pub use animation::{ListAnimator, SlotFrame};
pub use error::ListError;
pub use model::{DisplayedItems, Equivalence};
pub use selection::{
    RenderedItem, SelectableList, SelectableListBuilder, SelectionState, TapOutcome,
    ValueSelector,
};
pub use transitions::{Easing, TransitionConfig};
pub use view::{renderer, AnimatedView, ItemRenderer, RemovedItemBuilder, Tap};
