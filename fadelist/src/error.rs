//! Error types.

use thiserror::Error;

/// Errors raised by the displayed-items model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// An item could not be found in the displayed list by its identity.
    ///
    /// This is a contract violation rather than a transient fault: the
    /// [`Equivalence`](crate::Equivalence) in use does not recognise an item
    /// the list is holding, usually because the item sequence was rebuilt
    /// with fresh instances while identity is compared by reference, or
    /// because two items compare equal.
    #[error(
        "items of type `{item_type}` are not comparable: an item could not be found in the \
         displayed list. Supply an equivalence that matches logically equal items (for \
         example `Equivalence::by_eq` or `Equivalence::by_key`), or keep the same item \
         instances across rebuilds"
    )]
    ItemsNotComparable { item_type: &'static str },
}

impl ListError {
    pub(crate) fn not_comparable<E>() -> Self {
        Self::ItemsNotComparable {
            item_type: std::any::type_name::<E>(),
        }
    }
}
