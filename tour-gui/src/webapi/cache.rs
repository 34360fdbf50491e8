use std::{num::NonZeroUsize, sync::Arc};

use druid::ImageBuf;
use lru::LruCache;
use parking_lot::Mutex;

/// Decoded images kept in memory, keyed by their URL.
pub struct WebApiCache {
    images: Mutex<LruCache<Arc<str>, ImageBuf>>,
}

impl WebApiCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            images: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn get_image(&self, uri: &Arc<str>) -> Option<ImageBuf> {
        self.images.lock().get(uri).cloned()
    }

    pub fn set_image(&self, uri: Arc<str>, image: ImageBuf) {
        self.images.lock().put(uri, image);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel() -> ImageBuf {
        ImageBuf::from_raw(
            vec![0xff, 0x00, 0x00],
            druid::piet::ImageFormat::Rgb,
            1,
            1,
        )
    }

    #[test]
    fn least_recently_used_image_is_evicted() {
        let cache = WebApiCache::new(2);
        let a: Arc<str> = "https://example.org/a.png".into();
        let b: Arc<str> = "https://example.org/b.png".into();
        let c: Arc<str> = "https://example.org/c.png".into();
        cache.set_image(a.clone(), pixel());
        cache.set_image(b.clone(), pixel());
        assert!(cache.get_image(&a).is_some());
        cache.set_image(c.clone(), pixel());
        assert!(cache.get_image(&a).is_some());
        assert!(cache.get_image(&b).is_none());
        assert!(cache.get_image(&c).is_some());
    }

    #[test]
    fn zero_capacity_still_holds_one_image() {
        let cache = WebApiCache::new(0);
        let a: Arc<str> = "https://example.org/a.png".into();
        cache.set_image(a.clone(), pixel());
        assert_eq!(cache.get_image(&a).map(|image| image.width()), Some(1));
    }
}
