//! Timeout bounds and the async wrapper that enforces them.

use std::future::Future;
use std::time::Duration;

use crate::error::{RconError, Result};

/// Default bound on establishing the TCP connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default bound on each individual frame read.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Default bound on a whole command exchange, reassembly included.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(5);

/// Run a future under a deadline, mapping expiry to
/// [`RconError::Timeout`].
pub async fn with_timeout<F, T>(limit: Duration, fut: F) -> Result<T>
where
    F: Future<Output = T>,
{
    tokio::time::timeout(limit, fut)
        .await
        .map_err(|_| RconError::Timeout(limit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn completes_within_bound() {
        let value = with_timeout(Duration::from_secs(1), async { 42 }).await;
        assert!(matches!(value, Ok(42)));
    }

    #[tokio::test]
    async fn expiry_maps_to_timeout_error() {
        let result = with_timeout(Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
        })
        .await;
        assert!(matches!(result, Err(RconError::Timeout(_))));
    }
}
