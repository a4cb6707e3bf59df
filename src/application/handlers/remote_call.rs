//! Deadline for remote AI calls.

use std::future::Future;
use std::time::Duration;

use crate::ports::RemoteError;

/// Races a remote call against `limit`.
///
/// The call is dropped when the timer wins; nothing is retried.
pub(crate) async fn with_deadline<F>(limit: Duration, call: F) -> Result<String, RemoteError>
where
    F: Future<Output = Result<String, RemoteError>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result,
        Err(_) => Err(RemoteError::timeout(limit.as_secs())),
    }
}
