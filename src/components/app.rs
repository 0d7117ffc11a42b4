use serde_json::Value;
use yew::prelude::*;

use super::{
    camera_controls::CameraControls, cesium_view::CesiumView, mapbox_view::MapboxView,
    route_panel::RoutePanel, status_panel::StatusPanel,
};
use crate::config;
use crate::model::{CameraView, MapSource, ViewerAction, ViewerState};
use crate::state;
use crate::util::clog;

const CAMERA_STORAGE_KEY: &str = "dm_camera";

#[function_component(App)]
pub fn app() -> Html {
    let viewer = use_reducer(ViewerState::default);
    let config = use_memo((), |_| config::load());

    // Document title, set once on mount.
    use_effect_with((), move |_| {
        if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
            doc.set_title("Dual Map Viewer");
        }
        || ()
    });

    // Restore the last session's camera. The update is tagged None so
    // both maps pick it up.
    {
        let viewer = viewer.clone();
        use_effect_with((), move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(Some(raw)) = store.get_item(CAMERA_STORAGE_KEY) {
                        if let Ok(view) = serde_json::from_str::<CameraView>(&raw) {
                            if state::is_renderable(&view) {
                                viewer.dispatch(ViewerAction::UpdateCamera {
                                    origin: MapSource::None,
                                    view,
                                });
                            }
                        }
                    }
                }
            }
            || ()
        });
    }

    // Log accepted updates (the guard already filtered no-ops).
    {
        let camera = viewer.camera;
        let source = viewer.source;
        use_effect_with((camera, source), move |(camera, source)| {
            clog(&format!(
                "camera <- {:?}: lon {:.4} lat {:.4} zoom {:.2} pitch {:.1} bearing {:.1}",
                source, camera.longitude, camera.latitude, camera.zoom, camera.pitch,
                camera.bearing
            ));
            || ()
        });
    }

    // Persist camera changes.
    {
        let camera = viewer.camera;
        use_effect_with(camera, move |camera| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(raw) = serde_json::to_string(camera) {
                        let _ = store.set_item(CAMERA_STORAGE_KEY, &raw);
                    }
                }
            }
            || ()
        });
    }

    // UI-driven camera nudges are tagged None: foreign to both maps, so
    // both mirror them.
    let nudge = |apply: fn(CameraView) -> CameraView| {
        let viewer = viewer.clone();
        Callback::from(move |_| {
            let view = apply(viewer.camera);
            viewer.dispatch(ViewerAction::UpdateCamera {
                origin: MapSource::None,
                view,
            });
        })
    };
    let zoom_in = nudge(|mut v| {
        v.zoom += 1.0;
        v
    });
    let zoom_out = nudge(|mut v| {
        v.zoom -= 1.0;
        v
    });
    let rotate_left = nudge(|mut v| {
        v.bearing -= 15.0;
        v
    });
    let rotate_right = nudge(|mut v| {
        v.bearing += 15.0;
        v
    });
    let tilt_up = nudge(|mut v| {
        v.pitch += 15.0;
        v
    });
    let tilt_down = nudge(|mut v| {
        v.pitch -= 15.0;
        v
    });
    let home = nudge(|_| state::DEFAULT_VIEW);

    let route_stops = viewer
        .route
        .as_ref()
        .and_then(|v| v.as_array())
        .map_or(0, |stops| stops.len());
    let route_step = viewer
        .zoom_to_step
        .as_ref()
        .and_then(|v| v.as_u64())
        .map(|i| i as usize);

    let add_stop = {
        let viewer = viewer.clone();
        Callback::from(move |_| {
            let mut stops = viewer
                .route
                .as_ref()
                .and_then(|v| v.as_array().cloned())
                .unwrap_or_default();
            match serde_json::to_value(viewer.camera) {
                Ok(stop) => {
                    stops.push(stop);
                    viewer.dispatch(ViewerAction::SetRoute(Some(Value::Array(stops))));
                }
                Err(err) => clog(&format!("route stop encode failed: {err}")),
            }
        })
    };
    let next_stop = {
        let viewer = viewer.clone();
        Callback::from(move |_| {
            let stops = viewer
                .route
                .as_ref()
                .and_then(|v| v.as_array().cloned())
                .unwrap_or_default();
            if stops.is_empty() {
                return;
            }
            let next = viewer
                .zoom_to_step
                .as_ref()
                .and_then(|v| v.as_u64())
                .map_or(0, |i| (i as usize + 1) % stops.len());
            viewer.dispatch(ViewerAction::SetZoomToStep(Some(Value::from(next as u64))));
            match serde_json::from_value::<CameraView>(stops[next].clone()) {
                Ok(view) => viewer.dispatch(ViewerAction::UpdateCamera {
                    origin: MapSource::None,
                    view,
                }),
                Err(err) => clog(&format!("route stop decode failed: {err}")),
            }
        })
    };
    let clear_route = {
        let viewer = viewer.clone();
        Callback::from(move |_| {
            viewer.dispatch(ViewerAction::SetRoute(None));
            viewer.dispatch(ViewerAction::SetZoomToStep(None));
        })
    };

    html! {
        <div id="root" style="width:100vw; height:100vh; display:flex; flex-direction:column; background:#0e1116; color:#c9d1d9;">
            <div id="top-bar" style="display:flex; align-items:center; justify-content:space-between; padding:8px 14px; background:#161b22; border-bottom:1px solid #30363d;">
                <div style="font-weight:600;">{"Dual Map Viewer"}</div>
                <div style="font-size:12px; opacity:0.7;">{"move one map and the other follows"}</div>
            </div>
            <div style="flex:1; display:flex; position:relative; min-height:0;">
                <MapboxView viewer={viewer.clone()} config={(*config).clone()} />
                <div style="width:2px; background:#30363d;"></div>
                <CesiumView viewer={viewer.clone()} config={(*config).clone()} />
                <StatusPanel
                    camera={viewer.camera}
                    source={viewer.source}
                    route_stops={route_stops}
                    route_step={route_step}
                />
                <CameraControls
                    on_zoom_in={zoom_in}
                    on_zoom_out={zoom_out}
                    on_rotate_left={rotate_left}
                    on_rotate_right={rotate_right}
                    on_tilt_up={tilt_up}
                    on_tilt_down={tilt_down}
                    on_home={home}
                />
                <RoutePanel
                    stops={route_stops}
                    current_step={route_step}
                    on_add_stop={add_stop}
                    on_next_stop={next_stop}
                    on_clear={clear_route}
                />
            </div>
        </div>
    }
}
