//! Lookup, replacement and removal of records by identifier.
//!
//! Every operation treats the input sequence as read-only and returns a new
//! `Vec`. When several records share an identifier, the leftmost one is the
//! only one considered.
//!
//! A miss is not an error: `find_*` return `None`, while `update_*` and
//! `remove_*` return a copy equal to the input.

use tracing::debug;

use crate::core::record::Identified;

/// Predicate matching records whose identifier equals `id` by value.
///
/// Records without an identifier never match.
pub fn id_equal<R>(id: &R::Id) -> impl Fn(&R) -> bool
where
    R: Identified,
{
    move |record: &R| record.id() == Some(id)
}

/// Index of the first element satisfying `pred`.
pub fn find_index<T, P>(pred: P, items: &[T]) -> Option<usize>
where
    P: Fn(&T) -> bool,
{
    items.iter().position(pred)
}

/// First element satisfying `pred`.
pub fn find_by<T, P>(pred: P, items: &[T]) -> Option<&T>
where
    P: Fn(&T) -> bool,
{
    items.iter().find(|&item| pred(item))
}

/// First record whose identifier equals `id`.
pub fn find_by_id<'a, R>(id: &R::Id, records: &'a [R]) -> Option<&'a R>
where
    R: Identified,
{
    find_by(id_equal::<R>(id), records)
}

/// Build an updater replacing the first element matching `pred` with
/// `replacement`.
///
/// The result has the same length as the input and the replacement takes the
/// matched element's position. If nothing matches, the result equals the
/// input.
pub fn update_by<T, P>(pred: P, replacement: T) -> impl Fn(&[T]) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    move |items: &[T]| {
        let mut next = items.to_vec();
        match find_index(&pred, items) {
            Some(index) => next[index] = replacement.clone(),
            None => debug!(len = items.len(), "update_by: no element matched"),
        }
        next
    }
}

/// Build a remover dropping the first element matching `pred`.
///
/// Remaining elements keep their relative order. If nothing matches, the
/// result equals the input.
pub fn remove_by<T, P>(pred: P) -> impl Fn(&[T]) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    move |items: &[T]| {
        let mut next = items.to_vec();
        match find_index(&pred, items) {
            Some(index) => {
                next.remove(index);
            }
            None => debug!(len = items.len(), "remove_by: no element matched"),
        }
        next
    }
}

/// Replace the record identified by `id` with `replacement`.
pub fn update_by_id<R>(id: &R::Id, replacement: R, records: &[R]) -> Vec<R>
where
    R: Identified + Clone,
{
    update_by(id_equal::<R>(id), replacement)(records)
}

/// Remove the record identified by `id`.
pub fn remove_by_id<R>(id: &R::Id, records: &[R]) -> Vec<R>
where
    R: Identified + Clone,
{
    remove_by(id_equal::<R>(id))(records)
}
