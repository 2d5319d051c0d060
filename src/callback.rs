//! Success/error callback delivery on top of the async client.
//!
//! Useful for UI layers that want the "one of two callbacks" style instead
//! of awaiting. The call runs on the tokio runtime's worker threads, and
//! exactly one of the two callbacks fires exactly once when it completes.

use crate::error::{ApiError, Result};
use std::future::Future;
use tokio::task::JoinHandle;

/// Spawn `call` and route its outcome to `on_success` or `on_error`.
///
/// Callbacks of different calls may run concurrently; no ordering between
/// calls is guaranteed.
///
/// # Panics
/// Panics when called outside of a tokio runtime.
pub fn dispatch<T, F, S, E>(call: F, on_success: S, on_error: E) -> JoinHandle<()>
where
    F: Future<Output = Result<T>> + Send + 'static,
    T: Send + 'static,
    S: FnOnce(T) + Send + 'static,
    E: FnOnce(ApiError) + Send + 'static,
{
    tokio::spawn(async move {
        match call.await {
            Ok(value) => on_success(value),
            Err(error) => on_error(error),
        }
    })
}
