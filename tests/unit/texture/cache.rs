use super::*;
use crate::texture::synth::TextureSize;

fn small() -> TextureSynthesizer {
    TextureSynthesizer::new(TextureSize {
        width: 64,
        height: 64,
    })
}

fn label(text: &str) -> ContentDescriptor {
    ContentDescriptor::label(text, "#000000", "#ffffff")
}

#[test]
fn repeated_requests_share_one_bitmap() {
    let mut cache = TextureCache::new(small(), 4);
    let a = cache.get(&label("A")).unwrap();
    let b = cache.get(&label("A")).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(
        cache.stats(),
        TextureCacheStats {
            hits: 1,
            misses: 1,
            failures: 0,
            evictions: 0
        }
    );
}

#[test]
fn least_recently_used_entry_is_evicted() {
    let mut cache = TextureCache::new(small(), 2);
    cache.get(&label("A"));
    cache.get(&label("B"));
    cache.get(&label("A"));
    cache.get(&label("C"));
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.stats().evictions, 1);

    // "B" was least recently used, so it is synthesized again.
    let misses = cache.stats().misses;
    cache.get(&label("A"));
    assert_eq!(cache.stats().misses, misses);
    cache.get(&label("B"));
    assert_eq!(cache.stats().misses, misses + 1);
}

#[test]
fn failures_yield_none_and_are_not_cached() {
    let synth = TextureSynthesizer::new(TextureSize {
        width: 0,
        height: 0,
    });
    let mut cache = TextureCache::new(synth, 4);
    assert!(cache.get(&label("A")).is_none());
    assert!(cache.get(&label("A")).is_none());
    assert!(cache.is_empty());
    assert_eq!(cache.stats().failures, 2);
    assert_eq!(cache.stats().misses, 2);
}

#[test]
fn clear_keeps_outstanding_bitmaps_alive() {
    let mut cache = TextureCache::new(small(), 4);
    let a = cache.get(&label("A")).unwrap();
    cache.clear();
    assert!(cache.is_empty());
    assert_eq!(a.width(), 64);
}
