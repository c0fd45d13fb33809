//! Fixed-count retry for transient database failures.

use std::future::Future;
use std::time::Duration;

/// Retries applied to the admin-request queue read.
pub const ADMIN_REQUESTS_RETRIES: u32 = 3;

/// Delay between admin-request queue read attempts.
pub const ADMIN_REQUESTS_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Whether an error is worth retrying (connection-level, not query-level).
pub fn is_transient(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut)
}

/// Run `op`, retrying up to `retries` more times on transient errors with a
/// fixed `delay` in between. Non-transient errors are returned immediately.
pub async fn with_retry<T, F, Fut>(
    retries: u32,
    delay: Duration,
    mut op: F,
) -> Result<T, sqlx::Error>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, sqlx::Error>>,
{
    let mut attempt = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < retries && is_transient(&e) => {
                attempt += 1;
                tracing::warn!(attempt, retries, error = %e, "Transient database error, retrying");
                tokio::time::sleep(delay).await;
            }
            Err(e) => return Err(e),
        }
    }
}
