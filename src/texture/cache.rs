use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use crate::texture::bitmap::Bitmap;
use crate::texture::descriptor::ContentDescriptor;
use crate::texture::synth::{TextureConfig, TextureSynthesizer};

/// Environment override for the cache capacity.
pub const CACHE_CAPACITY_ENV: &str = "FOLIO_TEXTURE_CACHE_CAPACITY";

/// Hit/miss counters for a [`TextureCache`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextureCacheStats {
    /// Requests served from memory.
    pub hits: u64,
    /// Requests that ran the synthesizer.
    pub misses: u64,
    /// Synthesis attempts that produced no texture.
    pub failures: u64,
    /// Entries dropped by the LRU bound.
    pub evictions: u64,
}

/// Memoizes synthesized bitmaps by descriptor value.
///
/// Entries are immutable once inserted; a descriptor maps to exactly one bitmap for the
/// lifetime of the entry. Failures are never cached.
pub struct TextureCache {
    synth: TextureSynthesizer,
    entries: HashMap<ContentDescriptor, Arc<Bitmap>>,
    lru: VecDeque<ContentDescriptor>,
    capacity: usize,
    stats: TextureCacheStats,
}

impl TextureCache {
    /// Cache in front of `synth` holding at most `capacity` bitmaps (minimum 1).
    pub fn new(synth: TextureSynthesizer, capacity: usize) -> Self {
        Self {
            synth,
            entries: HashMap::new(),
            lru: VecDeque::new(),
            capacity: capacity.max(1),
            stats: TextureCacheStats::default(),
        }
    }

    /// Cache built from configuration; `FOLIO_TEXTURE_CACHE_CAPACITY` overrides the capacity.
    pub fn from_config(synth: TextureSynthesizer, cfg: &TextureConfig) -> Self {
        let capacity = std::env::var(CACHE_CAPACITY_ENV)
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(cfg.cache_capacity);
        Self::new(synth, capacity)
    }

    /// Bitmap for `descriptor`, synthesizing on first use.
    ///
    /// `None` is the "no texture" result: the drawing surface could not be created or the
    /// descriptor was unusable. Callers fall back to the mesh's default material.
    pub fn get(&mut self, descriptor: &ContentDescriptor) -> Option<Arc<Bitmap>> {
        if let Some(bmp) = self.entries.get(descriptor).cloned() {
            self.stats.hits += 1;
            self.touch(descriptor);
            return Some(bmp);
        }

        self.stats.misses += 1;
        match self.synth.synthesize(descriptor) {
            Ok(bmp) => {
                let bmp = Arc::new(bmp);
                self.insert(descriptor.clone(), bmp.clone());
                Some(bmp)
            }
            Err(err) => {
                self.stats.failures += 1;
                tracing::warn!(
                    kind = descriptor.kind.as_str(),
                    fingerprint = %descriptor.fingerprint(),
                    error = %err,
                    "texture synthesis failed; falling back to default material"
                );
                None
            }
        }
    }

    /// Number of memoized bitmaps.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when nothing is memoized.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counters since construction.
    pub fn stats(&self) -> TextureCacheStats {
        self.stats
    }

    /// Drop every memoized bitmap. Bitmaps still referenced elsewhere stay alive.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.lru.clear();
    }

    fn insert(&mut self, key: ContentDescriptor, bmp: Arc<Bitmap>) {
        self.lru.push_back(key.clone());
        self.entries.insert(key, bmp);
        while self.lru.len() > self.capacity {
            if let Some(old) = self.lru.pop_front() {
                self.entries.remove(&old);
                self.stats.evictions += 1;
            }
        }
    }

    fn touch(&mut self, key: &ContentDescriptor) {
        if let Some(pos) = self.lru.iter().position(|k| k == key) {
            if let Some(k) = self.lru.remove(pos) {
                self.lru.push_back(k);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/texture/cache.rs"]
mod tests;
