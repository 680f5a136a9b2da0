use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory text cache keyed by resolved URL (no persistence, no expiry).
/// Entries live until explicitly removed or the owning fetcher is dropped.
#[derive(Default)]
pub struct TextCache {
    map: Mutex<HashMap<String, String>>,
}

impl TextCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, url: &str) -> Option<String> {
        self.map.lock().ok()?.get(url).cloned()
    }

    pub fn insert(&self, url: &str, text: &str) {
        self.map
            .lock()
            .unwrap()
            .insert(url.to_string(), text.to_string());
    }

    /// Removes the entry for `url`, returning whether one was present.
    pub fn remove(&self, url: &str) -> bool {
        self.map.lock().unwrap().remove(url).is_some()
    }

    pub fn clear(&self) {
        self.map.lock().unwrap().clear();
    }

    pub fn len(&self) -> usize {
        self.map.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_contract() {
        let cache = TextCache::new();

        assert_eq!(cache.len(), 0);
        assert!(cache.get("/app/missing.html").is_none());

        cache.insert("/app/a.html", "<p>a</p>");
        cache.insert("/app/b.html", "<p>b</p>");
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("/app/a.html").as_deref(), Some("<p>a</p>"));
        assert_eq!(cache.get("/app/b.html").as_deref(), Some("<p>b</p>"));

        // overwrite keeps len
        cache.insert("/app/a.html", "<p>A</p>");
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("/app/a.html").as_deref(), Some("<p>A</p>"));

        // remove
        assert!(cache.remove("/app/b.html"));
        assert!(!cache.remove("/app/b.html"));
        assert!(cache.get("/app/b.html").is_none());

        // clear
        cache.clear();
        assert!(cache.is_empty());
    }
}
