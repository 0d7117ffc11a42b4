//! Deployment configuration for the two map libraries. Tokens are
//! externally supplied secrets and live in `index.html`, not in source.

use serde::Deserialize;

use crate::util::clog;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapConfig {
    pub mapbox_access_token: String,
    pub mapbox_style: String,
    /// Base URL Cesium loads its workers and widget assets from.
    pub cesium_base_url: String,
    pub cesium_ion_token: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            mapbox_access_token: String::new(),
            mapbox_style: "mapbox://styles/mapbox/streets-v12".to_string(),
            cesium_base_url: "cesium/".to_string(),
            cesium_ion_token: String::new(),
        }
    }
}

/// Reads the embedded `<script id="map-config" type="application/json">`
/// block; anything missing or malformed falls back to the defaults.
pub fn load() -> MapConfig {
    let raw = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id("map-config"))
        .and_then(|el| el.text_content());
    match raw {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
            clog(&format!("map-config parse failed, using defaults: {err}"));
            MapConfig::default()
        }),
        None => MapConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: MapConfig = serde_json::from_str(r#"{ "mapboxAccessToken": "pk.test" }"#).unwrap();
        assert_eq!(cfg.mapbox_access_token, "pk.test");
        assert_eq!(cfg.mapbox_style, MapConfig::default().mapbox_style);
        assert_eq!(cfg.cesium_base_url, "cesium/");
        assert!(cfg.cesium_ion_token.is_empty());
    }

    #[test]
    fn full_config_parses() {
        let cfg: MapConfig = serde_json::from_str(
            r#"{
                "mapboxAccessToken": "pk.abc",
                "mapboxStyle": "mapbox://styles/mapbox/dark-v11",
                "cesiumBaseUrl": "https://unpkg.com/cesium/Build/Cesium/",
                "cesiumIonToken": "ion.def"
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.mapbox_style, "mapbox://styles/mapbox/dark-v11");
        assert_eq!(cfg.cesium_ion_token, "ion.def");
    }
}
