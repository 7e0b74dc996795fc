//! Read-through cache in front of another directory lookup.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use libdesk_core::config::DirectoryConfig;
use libdesk_core::result::AppResult;
use libdesk_core::traits::DirectoryLookup;
use libdesk_core::types::RollNumber;

/// Caches resolved names so repeated logins skip the database.
///
/// Only hits are cached: a student seeded after a failed lookup is found on
/// the next request.
#[derive(Debug, Clone)]
pub struct CachedDirectory {
    inner: Arc<dyn DirectoryLookup>,
    cache: Cache<RollNumber, String>,
}

impl CachedDirectory {
    /// Wraps `inner` with a cache sized and timed by configuration.
    pub fn new(inner: Arc<dyn DirectoryLookup>, config: &DirectoryConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.cache_max_entries)
            .time_to_live(Duration::from_secs(config.cache_ttl_seconds))
            .build();

        Self { inner, cache }
    }
}

#[async_trait]
impl DirectoryLookup for CachedDirectory {
    async fn resolve(&self, roll_no: &RollNumber) -> AppResult<Option<String>> {
        if let Some(name) = self.cache.get(roll_no).await {
            debug!(roll_no = %roll_no, "Directory cache hit");
            return Ok(Some(name));
        }

        let resolved = self.inner.resolve(roll_no).await?;
        if let Some(ref name) = resolved {
            self.cache.insert(roll_no.clone(), name.clone()).await;
        }

        Ok(resolved)
    }
}
