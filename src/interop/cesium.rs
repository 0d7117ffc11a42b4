//! Bindings to the Cesium global loaded from `index.html`.
//! The viewer drives the globe through `Camera.setView` and listens on the
//! camera's `moveEnd` event; widget chrome is disabled at construction.

use wasm_bindgen::prelude::*;

use crate::model::CameraView;
use crate::state;

#[wasm_bindgen]
extern "C" {
    #[derive(Clone)]
    #[wasm_bindgen(js_namespace = Cesium)]
    pub type Viewer;

    #[wasm_bindgen(constructor, js_namespace = Cesium)]
    pub fn new(container: &str, options: &JsValue) -> Viewer;

    #[wasm_bindgen(method, getter)]
    pub fn camera(this: &Viewer) -> Camera;

    #[wasm_bindgen(method)]
    pub fn destroy(this: &Viewer);

    #[wasm_bindgen(js_namespace = Cesium)]
    pub type Camera;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Camera, options: &JsValue);

    /// Position in radians above the WGS84 ellipsoid.
    #[wasm_bindgen(method, getter, js_name = positionCartographic)]
    pub fn position_cartographic(this: &Camera) -> Cartographic;

    #[wasm_bindgen(method, getter)]
    pub fn heading(this: &Camera) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn pitch(this: &Camera) -> f64;

    #[wasm_bindgen(method, getter, js_name = moveEnd)]
    pub fn move_end(this: &Camera) -> CesiumEvent;

    #[wasm_bindgen(js_namespace = Cesium, js_name = Event)]
    pub type CesiumEvent;

    #[wasm_bindgen(method, js_name = addEventListener)]
    pub fn add_event_listener(this: &CesiumEvent, listener: &js_sys::Function);

    #[wasm_bindgen(method, js_name = removeEventListener)]
    pub fn remove_event_listener(this: &CesiumEvent, listener: &js_sys::Function) -> bool;

    #[wasm_bindgen(js_namespace = Cesium)]
    pub type Cartographic;

    #[wasm_bindgen(method, getter)]
    pub fn longitude(this: &Cartographic) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn latitude(this: &Cartographic) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn height(this: &Cartographic) -> f64;

    #[wasm_bindgen(js_namespace = Cesium)]
    pub type Cartesian3;

    #[wasm_bindgen(static_method_of = Cartesian3, js_namespace = Cesium, js_name = fromDegrees)]
    pub fn from_degrees(longitude: f64, latitude: f64, height: f64) -> Cartesian3;

    /// `Cesium.buildModuleUrl.setBaseUrl` — where the library fetches its
    /// workers and assets from.
    #[wasm_bindgen(js_namespace = ["Cesium", "buildModuleUrl"], js_name = setBaseUrl)]
    pub fn set_base_url(url: &str);
}

/// Assigns `Cesium.Ion.defaultAccessToken` for Ion-hosted imagery.
pub fn set_ion_token(token: &str) -> Result<(), JsValue> {
    let cesium = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("Cesium"))?;
    let ion = js_sys::Reflect::get(&cesium, &JsValue::from_str("Ion"))?;
    js_sys::Reflect::set(
        &ion,
        &JsValue::from_str("defaultAccessToken"),
        &JsValue::from_str(token),
    )?;
    Ok(())
}

/// Viewer constructor options with the widget chrome switched off; the
/// pane is a bare globe.
pub fn viewer_options() -> JsValue {
    let options = serde_json::json!({
        "animation": false,
        "timeline": false,
        "baseLayerPicker": false,
        "geocoder": false,
        "homeButton": false,
        "sceneModePicker": false,
        "navigationHelpButton": false,
        "fullscreenButton": false,
        "infoBox": false,
        "selectionIndicator": false,
    });
    js_sys::JSON::parse(&options.to_string()).unwrap_or(JsValue::NULL)
}

/// `setView` options for a shared camera record. Built with `Reflect`
/// because `destination` is a live `Cartesian3`, not plain JSON.
pub fn view_options(view: &CameraView) -> JsValue {
    let destination = Cartesian3::from_degrees(
        view.longitude,
        view.latitude,
        state::zoom_to_height(view.zoom),
    );
    let orientation = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &orientation,
        &JsValue::from_str("heading"),
        &JsValue::from_f64(state::bearing_to_heading(view.bearing)),
    );
    let _ = js_sys::Reflect::set(
        &orientation,
        &JsValue::from_str("pitch"),
        &JsValue::from_f64(state::pitch_to_cesium(view.pitch)),
    );
    let _ = js_sys::Reflect::set(
        &orientation,
        &JsValue::from_str("roll"),
        &JsValue::from_f64(0.0),
    );
    let options = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&options, &JsValue::from_str("destination"), destination.as_ref());
    let _ = js_sys::Reflect::set(&options, &JsValue::from_str("orientation"), &orientation);
    options.into()
}

/// Reads the globe camera back into the shared Mapbox-style units.
pub fn current_view(camera: &Camera) -> CameraView {
    let position = camera.position_cartographic();
    CameraView {
        longitude: position.longitude().to_degrees(),
        latitude: position.latitude().to_degrees(),
        zoom: state::height_to_zoom(position.height()),
        pitch: state::pitch_from_cesium(camera.pitch()),
        bearing: state::bearing_from_heading(camera.heading()),
    }
}
