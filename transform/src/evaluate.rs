//! Force keyed maps of deferred computations.

use std::{collections::HashMap, hash::Hash};

/// Force every thunk in `thunks`, collecting the results under the same keys.
pub fn evaluate<K, V, F>(thunks: HashMap<K, F>) -> HashMap<K, V>
where
    K: Eq + Hash,
    F: FnOnce() -> V,
{
    thunks
        .into_iter()
        .map(|(key, thunk)| (key, thunk()))
        .collect()
}

/// Force every fallible thunk in `thunks`, collecting the results under the
/// same keys.
///
/// Returns the first error observed and discards the partial map. Thunks are
/// forced in the map's iteration order, which is unspecified, so when several
/// thunks fail the returned error is unspecified too.
pub fn try_evaluate<K, V, X, F>(thunks: HashMap<K, F>) -> Result<HashMap<K, V>, X>
where
    K: Eq + Hash,
    F: FnOnce() -> Result<V, X>,
{
    let mut output = HashMap::with_capacity(thunks.len());
    for (key, thunk) in thunks {
        output.insert(key, thunk()?);
    }
    Ok(output)
}
