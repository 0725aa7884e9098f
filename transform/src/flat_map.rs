//! Sequential transforms that flatten per-element output.

use crate::map::map;

/// Apply `transform` to every element of `items` and concatenate the
/// per-element outputs in input order.
pub fn flat_map<T, R, F>(items: &[T], mut transform: F) -> Vec<R>
where
    F: FnMut(&T) -> Vec<R>,
{
    let mut output = Vec::new();
    for item in items {
        output.extend(transform(item));
    }
    output
}

/// Like [`flat_map`], but `transform` also receives the element's position.
pub fn flat_map_with_index<T, R, F>(items: &[T], mut transform: F) -> Vec<R>
where
    F: FnMut(&T, usize) -> Vec<R>,
{
    let mut output = Vec::new();
    for (index, item) in items.iter().enumerate() {
        output.extend(transform(item, index));
    }
    output
}

/// Like [`flat_map`], but `transform` also receives the element's position
/// and the whole input.
pub fn flat_map_with_slice<T, R, F>(items: &[T], mut transform: F) -> Vec<R>
where
    F: FnMut(&T, usize, &[T]) -> Vec<R>,
{
    let mut output = Vec::new();
    for (index, item) in items.iter().enumerate() {
        output.extend(transform(item, index, items));
    }
    output
}

/// Apply a fallible `transform` to every element of `items`, concatenating
/// the per-element outputs in input order.
///
/// Stops at the first error and returns it; elements after the failing one
/// are never visited.
pub fn try_flat_map<T, R, X, F>(items: &[T], mut transform: F) -> Result<Vec<R>, X>
where
    F: FnMut(&T) -> Result<Vec<R>, X>,
{
    let mut output = Vec::new();
    for item in items {
        output.extend(transform(item)?);
    }
    Ok(output)
}

/// Like [`try_flat_map`], but every produced value is additionally paired
/// with the element that produced it through `pair` before concatenation.
pub fn try_flat_map_with<T, R, Z, X, F, G>(
    items: &[T],
    mut transform: F,
    mut pair: G,
) -> Result<Vec<Z>, X>
where
    F: FnMut(&T) -> Result<Vec<R>, X>,
    G: FnMut(&T, &R) -> Z,
{
    let mut output = Vec::new();
    for item in items {
        let values = transform(item)?;
        output.extend(map(&values, |value| pair(item, value)));
    }
    Ok(output)
}
