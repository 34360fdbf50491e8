use std::{io::Read, sync::Arc, time::Duration};

use druid::{
    image::{self, ImageFormat},
    ImageBuf,
};
use once_cell::sync::OnceCell;
use ureq::Agent;
use url::Url;

use super::cache::WebApiCache;
use crate::error::Error;

const USER_AGENT: &str = concat!("berlin-tour/", env!("CARGO_PKG_VERSION"));

/// HTTP access for everything the display shows from the network: sight and
/// camera images, and map tiles.
pub struct WebApi {
    agent: Agent,
    cache: WebApiCache,
    offline: bool,
}

impl WebApi {
    pub fn new(proxy_url: Option<&str>, image_cache_size: usize, offline: bool) -> Self {
        let mut agent = Agent::config_builder().timeout_global(Some(Duration::from_secs(5)));
        if let Some(proxy_url) = proxy_url {
            let proxy = ureq::Proxy::new(proxy_url).ok();
            agent = agent.proxy(proxy);
        }
        Self {
            agent: agent.build().into(),
            cache: WebApiCache::new(image_cache_size),
            offline,
        }
    }

    pub fn is_offline(&self) -> bool {
        self.offline
    }
}

static GLOBAL_WEBAPI: OnceCell<Arc<WebApi>> = OnceCell::new();

/// Global instance.
impl WebApi {
    pub fn install_as_global(self) {
        if GLOBAL_WEBAPI.set(Arc::new(self)).is_err() {
            log::warn!("web API is already installed, keeping the first instance");
        }
    }

    pub fn global() -> Option<Arc<Self>> {
        GLOBAL_WEBAPI.get().cloned()
    }
}

/// Image endpoints.
impl WebApi {
    pub fn get_cached_image(&self, uri: &Arc<str>) -> Option<ImageBuf> {
        self.cache.get_image(uri)
    }

    pub fn get_image(&self, uri: Arc<str>) -> Result<ImageBuf, Error> {
        if let Some(cached_image) = self.cache.get_image(&uri) {
            return Ok(cached_image);
        }
        if self.offline {
            return Err(Error::Offline);
        }

        let url = Url::parse(&uri)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::WebApiError(format!(
                "unsupported image location: {}",
                uri
            )));
        }

        log::debug!("fetching image: {}", uri);
        let response = self
            .agent
            .get(url.as_str())
            .header("User-Agent", USER_AGENT)
            .call()?;
        let mut body = Vec::new();
        response.into_body().into_reader().read_to_end(&mut body)?;

        let image_buf = decode_image(&body)?;
        self.cache.set_image(uri, image_buf.clone());
        Ok(image_buf)
    }
}

fn decode_image(body: &[u8]) -> Result<ImageBuf, Error> {
    let format = match infer::get(body) {
        Some(kind) if kind.mime_type() == "image/jpeg" => Some(ImageFormat::Jpeg),
        Some(kind) if kind.mime_type() == "image/png" => Some(ImageFormat::Png),
        _ => None,
    };
    let image = if let Some(format) = format {
        image::load_from_memory_with_format(body, format)?
    } else {
        image::load_from_memory(body)?
    };
    Ok(ImageBuf::from_dynamic_image(image))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offline_mode_does_not_touch_the_network() {
        let webapi = WebApi::new(None, 4, true);
        let result = webapi.get_image("https://upload.wikimedia.org/missing.jpg".into());
        assert!(matches!(result, Err(Error::Offline)));
    }

    #[test]
    fn rejects_non_http_locations() {
        let webapi = WebApi::new(None, 4, false);
        assert!(webapi.get_image("file:///etc/hosts".into()).is_err());
        assert!(webapi.get_image("not a url".into()).is_err());
    }

    #[test]
    fn garbage_does_not_decode() {
        assert!(decode_image(b"definitely not an image").is_err());
    }
}
