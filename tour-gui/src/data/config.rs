use std::{
    env::{self, VarError},
    fs::File,
    io::Read,
    path::PathBuf,
};

use platform_dirs::AppDirs;
use serde::Deserialize;
use tour_core::map::TileLayer;

const APP_NAME: &str = "BerlinTour";
const CONFIG_FILENAME: &str = "config.json";
const PROXY_ENV_VAR: &str = "HTTPS_PROXY";

/// User configuration. Every field is optional in the file; missing ones
/// fall back to the defaults below.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tile_url: String,
    pub tile_subdomains: Vec<String>,
    pub tile_attribution: String,
    /// Skip all network fetches and keep showing placeholders.
    pub offline: bool,
    pub image_cache_size: usize,
    /// Map tiles kept decoded by the map view.
    pub tile_cache_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            tile_subdomains: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            tile_attribution: "© OpenStreetMap contributors".to_string(),
            offline: false,
            image_cache_size: 256,
            tile_cache_size: 128,
        }
    }
}

impl Config {
    fn app_dirs() -> Option<AppDirs> {
        const USE_XDG_ON_MACOS: bool = false;

        AppDirs::new(Some(APP_NAME), USE_XDG_ON_MACOS)
    }

    pub fn config_dir() -> Option<PathBuf> {
        Self::app_dirs().map(|dirs| dirs.config_dir)
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(CONFIG_FILENAME))
    }

    /// Reads the config file, if there is one. A file that fails to parse is
    /// reported and ignored.
    pub fn load() -> Option<Config> {
        let path = Self::config_path()?;
        let mut file = File::open(&path).ok()?;
        log::info!("loading config: {:?}", &path);
        let mut json = String::new();
        if let Err(err) = file.read_to_string(&mut json) {
            log::error!("failed to read config: {}", err);
            return None;
        }
        match Self::parse(&json) {
            Ok(config) => Some(config),
            Err(err) => {
                log::error!("failed to parse config, using defaults: {}", err);
                None
            }
        }
    }

    pub fn parse(json: &str) -> Result<Config, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn proxy() -> Option<String> {
        env::var(PROXY_ENV_VAR).map_or_else(
            |err| match err {
                VarError::NotPresent => None,
                VarError::NotUnicode(_) => {
                    log::error!("proxy URL is not a valid unicode");
                    None
                }
            },
            Some,
        )
    }

    pub fn tile_layer(&self) -> TileLayer {
        TileLayer {
            url_template: self.tile_url.clone(),
            subdomains: self.tile_subdomains.clone(),
            attribution: self.tile_attribution.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Config::parse("{}").unwrap(), Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::parse(r#"{ "offline": true, "image_cache_size": 16 }"#).unwrap();
        assert!(config.offline);
        assert_eq!(config.image_cache_size, 16);
        assert_eq!(config.tile_cache_size, 128);
        assert_eq!(config.tile_subdomains, vec!["a", "b", "c"]);
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(Config::parse(r#"{ "offline": "yes" }"#).is_err());
    }

    #[test]
    fn tile_layer_uses_configured_source() {
        let config = Config::parse(
            r#"{ "tile_url": "https://tiles.example.org/{z}/{x}/{y}.png", "tile_subdomains": [] }"#,
        )
        .unwrap();
        let layer = config.tile_layer();
        assert_eq!(layer.url_template, "https://tiles.example.org/{z}/{x}/{y}.png");
        assert!(layer.subdomains.is_empty());
        assert_eq!(layer.attribution, "© OpenStreetMap contributors");
    }
}
