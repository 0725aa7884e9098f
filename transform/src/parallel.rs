//! Apply transforms to every element of a sequence concurrently.
//!
//! # Overview
//!
//! Both primitives fan out one task per input element on the caller's runtime
//! context and fan the outcomes back into a single result. [`map`] returns
//! outputs in input order. [`flat_map`] concatenates per-element outputs in
//! the order units finish, preserving only the internal order of each
//! element's own contribution. If any transform fails, the first error
//! drained is returned and every other outcome is discarded.
//!
//! # Design
//!
//! A dispatcher spawns exactly one work unit per element. Each unit applies
//! the transform to its element exactly once and publishes a single outcome,
//! tagged with the element's position, into a conduit buffered to hold every
//! outcome. Publication never blocks, so a unit that finishes after the
//! collector has already returned an error simply runs to completion and its
//! outcome is dropped. A closer task awaits every unit and then closes the
//! conduit, which lets an exhaustive drain terminate.
//!
//! There is no retry, no concurrency bound, and no cancellation: all units
//! are launched eagerly regardless of input length, and a failure in one
//! unit never affects its siblings.

use commonware_runtime::{Metrics, Spawner};
use futures::{channel::mpsc, StreamExt};
use std::{future::Future, sync::Arc};
use tracing::{debug, trace};

/// Outcome published by a single work unit.
struct Outcome<P, X> {
    /// Position of the input element the unit was assigned.
    position: usize,

    /// Result of applying the transform to that element.
    result: Result<P, X>,
}

/// Spawn one work unit per element and return the conduit their outcomes
/// arrive on.
///
/// The conduit is buffered to hold every outcome and each unit publishes
/// through its own sender clone, so publication cannot block even when the
/// caller stops draining. A closer task drops the root sender once every
/// unit has finished, closing the conduit after the last outcome.
fn dispatch<E, T, P, X, F, Fut>(
    context: E,
    items: Vec<T>,
    transform: F,
) -> mpsc::Receiver<Outcome<P, X>>
where
    E: Spawner + Metrics,
    T: Send + 'static,
    P: Send + 'static,
    X: Send + 'static,
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<P, X>> + Send + 'static,
{
    let units = items.len();
    let (sender, receiver) = mpsc::channel(units);
    trace!(units, "dispatching work units");

    // Spawn one unit per element. Each unit applies the transform exactly
    // once and publishes exactly one outcome.
    let transform = Arc::new(transform);
    let mut handles = Vec::with_capacity(units);
    for (position, item) in items.into_iter().enumerate() {
        let transform = transform.clone();
        let mut sender = sender.clone();
        handles.push(context.with_label("unit").spawn(move |_| async move {
            let result = transform(item).await;

            // Each sender clone holds a guaranteed slot, so this never
            // blocks. If the receiver is already gone (the collector
            // returned an error), the outcome is discarded.
            let _ = sender.try_send(Outcome { position, result });
        }));
    }

    // Close the conduit once every unit has finished.
    context.with_label("closer").spawn(move |_| async move {
        for handle in handles {
            let _ = handle.await;
        }
        drop(sender);
    });

    receiver
}

/// Apply `transform` to every element of `items` concurrently, collecting
/// the results in input order.
///
/// One task is spawned per element. Elements may be processed in any order
/// but the output always matches input order element-for-element. If any
/// transform fails, the first error observed is returned and all other
/// outcomes are discarded; in-flight units are not cancelled.
///
/// # Example
///
/// ```
/// use commonware_runtime::{deterministic, Runner};
/// use commonware_transform::parallel;
///
/// let executor = deterministic::Runner::default();
/// executor.start(|context| async move {
///     let doubled = parallel::map(context, vec![1u64, 2, 3], |value| async move {
///         Ok::<_, ()>(value * 2)
///     })
///     .await;
///     assert_eq!(doubled, Ok(vec![2, 4, 6]));
/// });
/// ```
pub async fn map<E, T, R, X, F, Fut>(context: E, items: Vec<T>, transform: F) -> Result<Vec<R>, X>
where
    E: Spawner + Metrics,
    T: Send + 'static,
    R: Send + 'static,
    X: Send + 'static,
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<R, X>> + Send + 'static,
{
    // Nothing to dispatch.
    if items.is_empty() {
        return Ok(Vec::new());
    }

    // Write each success into its reserved slot so the output matches input
    // order no matter when each unit finishes.
    let expected = items.len();
    let mut outcomes = dispatch(context, items, transform);
    let mut slots: Vec<Option<R>> = Vec::with_capacity(expected);
    slots.resize_with(expected, || None);
    let mut remaining = expected;
    while remaining > 0 {
        let Some(Outcome { position, result }) = outcomes.next().await else {
            // The conduit closed early: a unit died without publishing.
            break;
        };
        match result {
            Ok(value) => {
                slots[position] = Some(value);
                remaining -= 1;
            }
            Err(err) => {
                debug!(position, "transform failed");
                return Err(err);
            }
        }
    }
    Ok(slots.into_iter().flatten().collect())
}

/// Apply `transform` to every element of `items` concurrently, concatenating
/// the per-element outputs in arrival order.
///
/// Unlike [`map`], the output order tracks completion order rather than
/// input order: whichever unit publishes first lands first. Only the
/// internal order of each element's own output is preserved. If any
/// transform fails, the first error observed is returned and all other
/// outcomes are discarded; in-flight units are not cancelled.
///
/// # Example
///
/// ```
/// use commonware_runtime::{deterministic, Runner};
/// use commonware_transform::parallel;
///
/// let executor = deterministic::Runner::default();
/// executor.start(|context| async move {
///     let repeated = parallel::flat_map(context, vec![1usize, 2, 3], |value| async move {
///         Ok::<_, ()>(vec![value; value])
///     })
///     .await
///     .unwrap();
///
///     // All contributions are present; their relative order depends on
///     // completion order.
///     let mut sorted = repeated.clone();
///     sorted.sort_unstable();
///     assert_eq!(sorted, vec![1, 2, 2, 3, 3, 3]);
/// });
/// ```
pub async fn flat_map<E, T, R, X, F, Fut>(
    context: E,
    items: Vec<T>,
    transform: F,
) -> Result<Vec<R>, X>
where
    E: Spawner + Metrics,
    T: Send + 'static,
    R: Send + 'static,
    X: Send + 'static,
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<R>, X>> + Send + 'static,
{
    // Nothing to dispatch.
    if items.is_empty() {
        return Ok(Vec::new());
    }

    // Append each output as it is drained.
    let expected = items.len();
    let mut outcomes = dispatch(context, items, transform);
    let mut output = Vec::new();
    let mut remaining = expected;
    while remaining > 0 {
        let Some(Outcome { position, result }) = outcomes.next().await else {
            // The conduit closed early: a unit died without publishing.
            break;
        };
        match result {
            Ok(values) => {
                output.extend(values);
                remaining -= 1;
            }
            Err(err) => {
                debug!(position, "transform failed");
                return Err(err);
            }
        }
    }
    Ok(output)
}
