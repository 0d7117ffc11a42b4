//! Bindings to the Mapbox GL JS global loaded from `index.html`.
//! Only the surface the viewer touches: construction, the move-end event,
//! camera getters and `jumpTo`.

use wasm_bindgen::prelude::*;

use crate::model::CameraView;

#[wasm_bindgen]
extern "C" {
    #[derive(Clone)]
    #[wasm_bindgen(js_namespace = mapboxgl)]
    pub type Map;

    #[wasm_bindgen(constructor, js_namespace = mapboxgl)]
    pub fn new(options: &JsValue) -> Map;

    #[wasm_bindgen(method)]
    pub fn on(this: &Map, event: &str, listener: &js_sys::Function);

    #[wasm_bindgen(method)]
    pub fn off(this: &Map, event: &str, listener: &js_sys::Function);

    #[wasm_bindgen(method, js_name = jumpTo)]
    pub fn jump_to(this: &Map, options: &JsValue);

    #[wasm_bindgen(method, js_name = getCenter)]
    pub fn get_center(this: &Map) -> LngLat;

    #[wasm_bindgen(method, js_name = getZoom)]
    pub fn get_zoom(this: &Map) -> f64;

    #[wasm_bindgen(method, js_name = getPitch)]
    pub fn get_pitch(this: &Map) -> f64;

    #[wasm_bindgen(method, js_name = getBearing)]
    pub fn get_bearing(this: &Map) -> f64;

    #[wasm_bindgen(method)]
    pub fn remove(this: &Map);

    #[wasm_bindgen(js_namespace = mapboxgl)]
    pub type LngLat;

    #[wasm_bindgen(method, getter)]
    pub fn lng(this: &LngLat) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn lat(this: &LngLat) -> f64;
}

/// Assigns `mapboxgl.accessToken`. Must run before the first `Map` is
/// constructed.
pub fn set_access_token(token: &str) -> Result<(), JsValue> {
    let namespace = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("mapboxgl"))?;
    js_sys::Reflect::set(
        &namespace,
        &JsValue::from_str("accessToken"),
        &JsValue::from_str(token),
    )?;
    Ok(())
}

/// Constructor options: container element id, style URL and initial view.
pub fn map_options(container: &str, style: &str, view: &CameraView) -> JsValue {
    let options = serde_json::json!({
        "container": container,
        "style": style,
        "center": [view.longitude, view.latitude],
        "zoom": view.zoom,
        "pitch": view.pitch,
        "bearing": view.bearing,
    });
    js_sys::JSON::parse(&options.to_string()).unwrap_or(JsValue::NULL)
}

/// `jumpTo` options carrying the full camera record.
pub fn jump_options(view: &CameraView) -> JsValue {
    let options = serde_json::json!({
        "center": [view.longitude, view.latitude],
        "zoom": view.zoom,
        "pitch": view.pitch,
        "bearing": view.bearing,
    });
    js_sys::JSON::parse(&options.to_string()).unwrap_or(JsValue::NULL)
}

/// Reads the map's camera back into the shared units.
pub fn current_view(map: &Map) -> CameraView {
    let center = map.get_center();
    CameraView {
        longitude: center.lng(),
        latitude: center.lat(),
        zoom: map.get_zoom(),
        pitch: map.get_pitch(),
        bearing: map.get_bearing(),
    }
}
