//! Bounded cache of translated selections
//!
//! Translation itself happens outside this crate; the cache only remembers
//! results for the page and zoom currently on screen.

use std::num::NonZeroUsize;

use log::debug;
use lru::LruCache;

use crate::selection::{SelectionError, validate_zoom};
use crate::settings::Settings;

/// Cache key: the page a text came from plus the text itself
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TranslationKey {
    pub page: usize,
    pub text: String,
}

impl TranslationKey {
    #[must_use]
    pub fn new(page: usize, text: impl Into<String>) -> Self {
        Self {
            page,
            text: text.into(),
        }
    }
}

/// LRU cache for translated text
pub struct TranslationCache {
    cache: LruCache<TranslationKey, String>,
    /// Page and zoom bits of the current view
    view: Option<(usize, u32)>,
}

impl TranslationCache {
    /// Create a new cache with the given capacity
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: LruCache::new(NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)),
            view: None,
        }
    }

    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.translation_cache_capacity)
    }

    /// Record the view the user is looking at.
    ///
    /// A zoom change clears everything; a page change drops the previous
    /// page's entries. An invalid zoom leaves the cache untouched.
    pub fn set_view(&mut self, page: usize, zoom: f32) -> Result<(), SelectionError> {
        let zoom_bits = validate_zoom(zoom)?.to_bits();

        match self.view {
            Some((_, old_zoom)) if old_zoom != zoom_bits => {
                debug!("Zoom changed, dropping {} cached translations", self.cache.len());
                self.cache.clear();
            }
            Some((old_page, _)) if old_page != page => self.invalidate_page(old_page),
            _ => {}
        }
        self.view = Some((page, zoom_bits));
        Ok(())
    }

    /// Get a cached translation, promoting it in the LRU order
    pub fn get(&mut self, key: &TranslationKey) -> Option<&str> {
        self.cache.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, key: &TranslationKey) -> bool {
        self.cache.contains(key)
    }

    pub fn insert(&mut self, key: TranslationKey, translated: String) {
        self.cache.put(key, translated);
    }

    /// Return the cached translation or compute, store and return it.
    ///
    /// Failures from `translate` are passed through and nothing is cached.
    pub fn get_or_try_insert_with<E>(
        &mut self,
        key: TranslationKey,
        translate: impl FnOnce(&str) -> Result<String, E>,
    ) -> Result<String, E> {
        if let Some(hit) = self.cache.get(&key) {
            return Ok(hit.clone());
        }
        let translated = translate(&key.text)?;
        self.cache.put(key, translated.clone());
        Ok(translated)
    }

    /// Drop every translation taken from `page`
    pub fn invalidate_page(&mut self, page: usize) {
        let stale: Vec<TranslationKey> = self
            .cache
            .iter()
            .filter_map(|(key, _)| (key.page == page).then(|| key.clone()))
            .collect();
        for key in &stale {
            self.cache.pop(key);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }
}

impl std::fmt::Debug for TranslationCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationCache")
            .field("len", &self.cache.len())
            .field("capacity", &self.cache.cap())
            .field("view", &self.view)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper(text: &str) -> Result<String, String> {
        Ok(text.to_uppercase())
    }

    #[test]
    fn computes_once_then_hits() {
        let mut cache = TranslationCache::new(4);
        let mut calls = 0;

        for _ in 0..3 {
            let out = cache
                .get_or_try_insert_with(TranslationKey::new(0, "hello"), |t| {
                    calls += 1;
                    upper(t)
                })
                .unwrap();
            assert_eq!(out, "HELLO");
        }
        assert_eq!(calls, 1);
    }

    #[test]
    fn failed_translation_is_not_cached() {
        let mut cache = TranslationCache::new(4);
        let key = TranslationKey::new(0, "hello");

        let err = cache.get_or_try_insert_with(key.clone(), |_| Err::<String, _>("offline"));
        assert_eq!(err, Err("offline"));
        assert!(!cache.contains(&key));
    }

    #[test]
    fn capacity_bounds_entries() {
        let mut cache = TranslationCache::new(2);
        for i in 0..3 {
            cache.insert(TranslationKey::new(0, format!("t{i}")), format!("T{i}"));
        }

        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(&TranslationKey::new(0, "t0")));
        assert!(cache.contains(&TranslationKey::new(0, "t2")));
    }

    #[test]
    fn zero_capacity_still_holds_one() {
        let mut cache = TranslationCache::new(0);
        cache.insert(TranslationKey::new(0, "a"), "A".into());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn capacity_comes_from_settings() {
        let settings = Settings {
            translation_cache_capacity: 1,
            ..Settings::default()
        };
        let mut cache = TranslationCache::from_settings(&settings);
        cache.insert(TranslationKey::new(0, "a"), "A".into());
        cache.insert(TranslationKey::new(0, "b"), "B".into());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn zoom_change_clears_everything() {
        let mut cache = TranslationCache::new(8);
        cache.set_view(0, 1.0).unwrap();
        cache.insert(TranslationKey::new(0, "a"), "A".into());
        cache.insert(TranslationKey::new(1, "b"), "B".into());

        cache.set_view(0, 1.0).unwrap();
        assert_eq!(cache.len(), 2);

        cache.set_view(0, 1.25).unwrap();
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn large_zooms_are_told_apart() {
        let mut cache = TranslationCache::new(8);
        cache.set_view(0, 5000.0).unwrap();
        cache.insert(TranslationKey::new(0, "a"), "A".into());

        cache.set_view(0, 9000.0).unwrap();
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn invalid_zoom_is_rejected_and_keeps_entries() {
        let mut cache = TranslationCache::new(8);
        cache.set_view(0, 1.0).unwrap();
        cache.insert(TranslationKey::new(0, "a"), "A".into());

        assert_eq!(cache.set_view(0, -1.0), Err(SelectionError::InvalidZoom(-1.0)));
        assert!(matches!(
            cache.set_view(0, f32::NAN),
            Err(SelectionError::InvalidZoom(z)) if z.is_nan()
        ));
        assert_eq!(cache.len(), 1);

        // the last valid view is still current
        cache.set_view(0, 1.0).unwrap();
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn page_change_drops_previous_page_only() {
        let mut cache = TranslationCache::new(8);
        cache.set_view(0, 1.0).unwrap();
        cache.insert(TranslationKey::new(0, "a"), "A".into());
        cache.insert(TranslationKey::new(1, "b"), "B".into());

        cache.set_view(1, 1.0).unwrap();
        assert!(!cache.contains(&TranslationKey::new(0, "a")));
        assert_eq!(cache.get(&TranslationKey::new(1, "b")), Some("B"));
    }
}
