/// Key-value cache client
use crate::error::{Result, ServerError};

/// Fixed cache address. Not configurable.
const REDIS_URL: &str = "redis://127.0.0.1:6379";

/// Handle to the key-value store.
///
/// Opened once at startup and carried in [`crate::state::AppState`]. No
/// handler currently reads or writes through it; any future caching of users
/// or links has to bring its own invalidation contract.
#[derive(Debug, Clone)]
pub struct CacheClient {
    client: redis::Client,
}

impl CacheClient {
    /// Open a client handle against the fixed address.
    ///
    /// Like the underlying driver, this parses the URL but does not connect;
    /// an unreachable store is only observed on first use.
    pub fn open() -> Result<Self> {
        let client = redis::Client::open(REDIS_URL)
            .map_err(|e| ServerError::Config(format!("invalid cache address: {e}")))?;

        Ok(Self { client })
    }

    /// The underlying driver handle.
    pub fn client(&self) -> &redis::Client {
        &self.client
    }
}
