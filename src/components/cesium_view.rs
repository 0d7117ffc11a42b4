use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use crate::config::MapConfig;
use crate::interop::cesium;
use crate::model::{MapSource, ViewerAction, ViewerState};
use crate::state;
use crate::util::clog;

const CONTAINER_ID: &str = "cesium-view";

#[derive(Properties, PartialEq, Clone)]
pub struct CesiumViewProps {
    pub viewer: UseReducerHandle<ViewerState>,
    pub config: MapConfig,
}

/// 3D pane. Same contract as the Mapbox adapter, translated into Cesium
/// units: camera height instead of zoom, radians instead of degrees.
#[function_component(CesiumView)]
pub fn cesium_view(props: &CesiumViewProps) -> Html {
    let globe_ref = use_mut_ref(|| None::<cesium::Viewer>);

    // Mount: asset base URL, Ion token, viewer, move-end subscription.
    {
        let viewer = props.viewer.clone();
        let config = props.config.clone();
        let globe_ref = globe_ref.clone();
        use_effect_with((), move |_| {
            cesium::set_base_url(&config.cesium_base_url);
            if !config.cesium_ion_token.is_empty() {
                if let Err(err) = cesium::set_ion_token(&config.cesium_ion_token) {
                    clog(&format!("Cesium.Ion token assignment failed: {err:?}"));
                }
            }
            let globe = cesium::Viewer::new(CONTAINER_ID, &cesium::viewer_options());
            let move_end = {
                let viewer = viewer.clone();
                let globe = globe.clone();
                Closure::wrap(Box::new(move || {
                    let view = cesium::current_view(&globe.camera());
                    if !state::is_renderable(&view) {
                        clog("cesium reported a non-finite view, dropping it");
                        return;
                    }
                    viewer.dispatch(ViewerAction::UpdateCamera {
                        origin: MapSource::Cesium,
                        view,
                    });
                }) as Box<dyn FnMut()>)
            };
            globe
                .camera()
                .move_end()
                .add_event_listener(move_end.as_ref().unchecked_ref());
            *globe_ref.borrow_mut() = Some(globe);
            // Cleanup
            move || {
                if let Some(globe) = globe_ref.borrow_mut().take() {
                    let _ = globe
                        .camera()
                        .move_end()
                        .remove_event_listener(move_end.as_ref().unchecked_ref());
                    globe.destroy();
                }
                drop(move_end);
            }
        });
    }

    // Mirror accepted updates, but never back onto their own origin.
    {
        let globe_ref = globe_ref.clone();
        let camera = props.viewer.camera;
        let source = props.viewer.source;
        use_effect_with((camera, source), move |(view, source)| {
            if *source != MapSource::Cesium && state::is_renderable(view) {
                if let Some(globe) = globe_ref.borrow().as_ref() {
                    globe.camera().set_view(&cesium::view_options(view));
                }
            }
            || ()
        });
    }

    html! { <div id={CONTAINER_ID} style="flex:1; height:100%;"></div> }
}
