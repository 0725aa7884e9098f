//! Sequential element-wise transforms.

/// Apply `transform` to every element of `items`, collecting the results in
/// input order.
pub fn map<T, R, F>(items: &[T], transform: F) -> Vec<R>
where
    F: FnMut(&T) -> R,
{
    items.iter().map(transform).collect()
}

/// Like [`map`], but `transform` also receives the element's position.
pub fn map_with_index<T, R, F>(items: &[T], mut transform: F) -> Vec<R>
where
    F: FnMut(&T, usize) -> R,
{
    items
        .iter()
        .enumerate()
        .map(|(index, item)| transform(item, index))
        .collect()
}

/// Like [`map`], but `transform` also receives the element's position and the
/// whole input.
pub fn map_with_slice<T, R, F>(items: &[T], mut transform: F) -> Vec<R>
where
    F: FnMut(&T, usize, &[T]) -> R,
{
    items
        .iter()
        .enumerate()
        .map(|(index, item)| transform(item, index, items))
        .collect()
}

/// Apply a fallible `transform` to every element of `items`.
///
/// Stops at the first error and returns it; elements after the failing one
/// are never visited.
pub fn try_map<T, R, X, F>(items: &[T], mut transform: F) -> Result<Vec<R>, X>
where
    F: FnMut(&T) -> Result<R, X>,
{
    let mut output = Vec::with_capacity(items.len());
    for item in items {
        output.push(transform(item)?);
    }
    Ok(output)
}
