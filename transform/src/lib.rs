//! Apply transforms to every element of a sequence.
//!
//! # Overview
//!
//! This crate provides composable element-wise transforms over in-memory
//! sequences:
//!
//! - Sequential transforms: [`map`], [`flat_map`], and their index-aware,
//!   whole-slice-aware, and fallible variants, plus the [`every`] predicate
//!   family and the [`evaluate`] thunk-map evaluators. These are plain
//!   functions with no runtime dependency.
//! - Parallel transforms: [`parallel::map`] and [`parallel::flat_map`], which
//!   spawn one task per element on a [`commonware_runtime::Spawner`] context
//!   and reassemble a single result (or the first error) from the concurrent
//!   outcomes.
//!
//! Fallible variants are first-error-wins: the first error observed is
//! returned and all other outcomes are discarded. When every transform
//! succeeds, [`parallel::map`] matches [`map`] element-for-element;
//! [`parallel::flat_map`] produces the same elements as [`flat_map`] but
//! concatenated in completion order rather than input order.
//!
//! # Example
//!
//! ```
//! use commonware_runtime::{deterministic, Runner};
//! use commonware_transform::{parallel, try_map};
//!
//! // Sequential transforms are plain functions.
//! let halved = try_map(&[2u64, 4, 6], |value| {
//!     if value % 2 == 0 {
//!         Ok(value / 2)
//!     } else {
//!         Err("odd")
//!     }
//! });
//! assert_eq!(halved, Ok(vec![1, 2, 3]));
//!
//! // Parallel transforms fan out one task per element on a runtime context.
//! let executor = deterministic::Runner::default();
//! executor.start(|context| async move {
//!     let doubled = parallel::map(context, vec![1u64, 2, 3], |value| async move {
//!         Ok::<_, &'static str>(value * 2)
//!     })
//!     .await;
//!     assert_eq!(doubled, Ok(vec![2, 4, 6]));
//! });
//! ```

#![doc(
    html_logo_url = "https://commonware.xyz/imgs/rustdoc_logo.svg",
    html_favicon_url = "https://commonware.xyz/favicon.ico"
)]

mod evaluate;
mod every;
mod flat_map;
mod map;
pub mod parallel;

pub use evaluate::{evaluate, try_evaluate};
pub use every::{every, every_with_index, every_with_slice};
pub use flat_map::{
    flat_map, flat_map_with_index, flat_map_with_slice, try_flat_map, try_flat_map_with,
};
pub use map::{map, map_with_index, map_with_slice, try_map};
