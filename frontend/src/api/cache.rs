use log::debug;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::sync::Mutex;

/// Millisecond wall-clock that works both in the browser and in native tests
fn now_ms() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as f64
    }
}

/// Cache entry with expiration
#[derive(Clone)]
pub struct CacheEntry<T: Clone> {
    data: T,
    expires_at: f64,
}

impl<T: Clone> CacheEntry<T> {
    fn new(data: T, ttl_ms: f64) -> Self {
        Self {
            data,
            expires_at: now_ms() + ttl_ms,
        }
    }

    fn is_expired(&self) -> bool {
        now_ms() > self.expires_at
    }
}

/// Response cache for deduplicating API calls within a TTL window
pub struct RequestCache {
    cache: Arc<Mutex<HashMap<String, CacheEntry<String>>>>,
    ttl_ms: f64,
}

impl RequestCache {
    pub fn new(ttl_ms: f64) -> Self {
        Self {
            cache: Arc::new(Mutex::new(HashMap::new())),
            ttl_ms,
        }
    }

    /// Creates a cache with the 5 minute default TTL
    pub fn new_default() -> Self {
        Self::new(5.0 * 60.0 * 1000.0)
    }

    /// Gets a cached response body or fetches it if not cached
    pub async fn get_or_fetch<F, Fut>(&self, key: &str, fetcher: F) -> Result<String, String>
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<String, String>> + 'static,
    {
        if let Some(entry) = self.get(key) {
            if !entry.is_expired() {
                debug!("Cache hit for key: {}", key);
                return Ok(entry.data);
            }
        }

        debug!("Cache miss for key: {}, fetching...", key);
        let result = fetcher().await?;
        self.set(key.to_string(), result.clone());
        Ok(result)
    }

    pub fn get(&self, key: &str) -> Option<CacheEntry<String>> {
        let cache = self.cache.lock().unwrap();
        cache.get(key).cloned()
    }

    pub fn set(&self, key: String, value: String) {
        let entry = CacheEntry::new(value, self.ttl_ms);
        let mut cache = self.cache.lock().unwrap();
        cache.insert(key, entry);
    }

    pub fn set_with_ttl(&self, key: String, value: String, ttl_ms: f64) {
        let entry = CacheEntry::new(value, ttl_ms);
        let mut cache = self.cache.lock().unwrap();
        cache.insert(key, entry);
    }

    pub fn remove(&self, key: &str) {
        let mut cache = self.cache.lock().unwrap();
        cache.remove(key);
    }

    /// Clears all expired entries
    pub fn cleanup(&self) {
        let mut cache = self.cache.lock().unwrap();
        cache.retain(|_, entry| !entry.is_expired());
    }
}
