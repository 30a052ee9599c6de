//! Bounded-concurrency processing that keeps input order.

use futures::stream::{self, StreamExt};
use std::future::Future;

/// Runs `processor` over `items` with at most `concurrency` futures in flight.
///
/// Results come back in input order regardless of completion order; items whose
/// future yields `None` are dropped. A `concurrency` of 0 is treated as 1.
pub async fn process_in_order<T, F, Fut, R>(items: Vec<T>, processor: F, concurrency: usize) -> Vec<R>
where
    F: Fn(T, usize) -> Fut,
    Fut: Future<Output = Option<R>>,
{
    stream::iter(items.into_iter().enumerate())
        .map(|(index, item)| processor(item, index))
        .buffered(concurrency.max(1))
        .filter_map(|result| async move { result })
        .collect()
        .await
}
