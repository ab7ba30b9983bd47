//! Query cache
//!
//! Caches list and detail reads per resource. A successful mutation
//! invalidates every entry of its resource before returning, so the next read
//! after a write re-fetches and sees it. There is no optimistic merging.
//!
//! Each resource carries a generation counter. A fetch records the generation
//! before it starts and only stores its result if no invalidation happened in
//! between, so a slow read cannot put pre-write data back after a write.

use std::any::Any;
use std::future::Future;
use std::sync::Arc;

use dashmap::DashMap;

/// Which read of a resource an entry holds
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryScope {
    List,
    Detail(i64),
    Slug(String),
    /// A named list filter ("published", "type:Video", ...)
    Filter(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub resource: &'static str,
    pub scope: QueryScope,
}

impl QueryKey {
    pub fn list(resource: &'static str) -> Self {
        Self {
            resource,
            scope: QueryScope::List,
        }
    }

    pub fn detail(resource: &'static str, id: impl Into<i64>) -> Self {
        Self {
            resource,
            scope: QueryScope::Detail(id.into()),
        }
    }

    pub fn slug(resource: &'static str, slug: &str) -> Self {
        Self {
            resource,
            scope: QueryScope::Slug(slug.to_string()),
        }
    }

    pub fn filter(resource: &'static str, name: impl Into<String>) -> Self {
        Self {
            resource,
            scope: QueryScope::Filter(name.into()),
        }
    }
}

type CachedValue = Arc<dyn Any + Send + Sync>;

#[derive(Default)]
pub struct QueryCache {
    entries: DashMap<QueryKey, CachedValue>,
    generations: DashMap<&'static str, u64>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn generation(&self, resource: &'static str) -> u64 {
        self.generations.get(resource).map(|g| *g).unwrap_or(0)
    }

    /// Cached value for `key`, if present and of type `V`
    pub fn get<V>(&self, key: &QueryKey) -> Option<V>
    where
        V: Clone + Send + Sync + 'static,
    {
        self.entries
            .get(key)
            .and_then(|entry| entry.value().downcast_ref::<V>().cloned())
    }

    /// Return the cached value for `key`, or run `fetch` and cache its result.
    ///
    /// Errors are returned as-is and never cached.
    pub async fn fetch<V, E, F, Fut>(&self, key: QueryKey, fetch: F) -> Result<V, E>
    where
        V: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(hit) = self.get::<V>(&key) {
            tracing::trace!(resource = key.resource, scope = ?key.scope, "Query cache hit");
            return Ok(hit);
        }

        let started_at = self.generation(key.resource);
        let value = fetch().await?;

        // Holding the generation entry keeps `invalidate` from bumping it
        // between the comparison and the insert.
        let current = self.generations.get(key.resource);
        let unchanged = current.as_ref().map(|g| **g).unwrap_or(0) == started_at;
        if unchanged {
            self.entries.insert(key, Arc::new(value.clone()));
        } else {
            tracing::debug!(resource = key.resource, "Discarding fetch that raced an invalidation");
        }
        drop(current);

        Ok(value)
    }

    /// Drop every cached entry for `resource`
    pub fn invalidate(&self, resource: &'static str) {
        *self.generations.entry(resource).or_insert(0) += 1;
        self.entries.retain(|key, _| key.resource != resource);
        tracing::debug!(resource, "Query cache invalidated");
    }

    /// Number of cached entries for `resource`
    pub fn cached_entries(&self, resource: &'static str) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.key().resource == resource)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn second_read_is_served_from_cache() {
        let cache = QueryCache::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..2 {
            let value: Result<Vec<i32>, ()> = cache
                .fetch(QueryKey::list("products"), || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(vec![1, 2])
                })
                .await;
            assert_eq!(value.unwrap(), vec![1, 2]);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn invalidate_forces_refetch() {
        let cache = QueryCache::new();
        let _: Result<Vec<i32>, ()> = cache
            .fetch(QueryKey::list("products"), || async { Ok(vec![1, 2]) })
            .await;

        cache.invalidate("products");

        let value: Result<Vec<i32>, ()> = cache
            .fetch(QueryKey::list("products"), || async { Ok(vec![1]) })
            .await;
        assert_eq!(value.unwrap(), vec![1]);
    }

    #[tokio::test]
    async fn invalidate_only_touches_its_resource() {
        let cache = QueryCache::new();
        let _: Result<i32, ()> = cache
            .fetch(QueryKey::detail("products", 1), || async { Ok(1) })
            .await;
        let _: Result<i32, ()> = cache
            .fetch(QueryKey::list("testimonials"), || async { Ok(2) })
            .await;
        let _: Result<i32, ()> = cache
            .fetch(QueryKey::slug("products", "a"), || async { Ok(3) })
            .await;

        cache.invalidate("products");

        assert_eq!(cache.cached_entries("products"), 0);
        assert_eq!(cache.cached_entries("testimonials"), 1);
    }

    #[tokio::test]
    async fn errors_are_not_cached() {
        let cache = QueryCache::new();
        let failed: Result<i32, &str> = cache
            .fetch(QueryKey::list("products"), || async { Err("backend down") })
            .await;
        assert!(failed.is_err());
        assert_eq!(cache.cached_entries("products"), 0);

        let ok: Result<i32, &str> = cache
            .fetch(QueryKey::list("products"), || async { Ok(7) })
            .await;
        assert_eq!(ok.unwrap(), 7);
    }

    #[tokio::test]
    async fn fetch_racing_an_invalidation_is_not_stored() {
        let cache = QueryCache::new();

        let value: Result<Vec<&str>, ()> = cache
            .fetch(QueryKey::list("blog_posts"), || async {
                // A write lands while this read is in flight
                cache.invalidate("blog_posts");
                Ok(vec!["stale"])
            })
            .await;

        assert_eq!(value.unwrap(), vec!["stale"]);
        assert_eq!(cache.cached_entries("blog_posts"), 0);
        assert!(cache
            .get::<Vec<&str>>(&QueryKey::list("blog_posts"))
            .is_none());
    }

    #[test]
    fn get_with_wrong_type_misses() {
        let cache = QueryCache::new();
        cache
            .entries
            .insert(QueryKey::list("products"), Arc::new(5_i32));
        assert_eq!(cache.get::<i32>(&QueryKey::list("products")), Some(5));
        assert_eq!(cache.get::<String>(&QueryKey::list("products")), None);
    }
}
