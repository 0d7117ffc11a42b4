use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use crate::config::MapConfig;
use crate::interop::mapbox;
use crate::model::{MapSource, ViewerAction, ViewerState};
use crate::state;
use crate::util::clog;

const CONTAINER_ID: &str = "mapbox-view";

#[derive(Properties, PartialEq, Clone)]
pub struct MapboxViewProps {
    pub viewer: UseReducerHandle<ViewerState>,
    pub config: MapConfig,
}

/// 2D pane. Owns one `mapboxgl.Map`, feeds its move-end events into the
/// store tagged `MapSource::Mapbox`, and mirrors every accepted update
/// that came from anywhere else.
#[function_component(MapboxView)]
pub fn mapbox_view(props: &MapboxViewProps) -> Html {
    let map_ref = use_mut_ref(|| None::<mapbox::Map>);

    // Mount: token, map instance, move-end subscription.
    {
        let viewer = props.viewer.clone();
        let config = props.config.clone();
        let map_ref = map_ref.clone();
        use_effect_with((), move |_| {
            if let Err(err) = mapbox::set_access_token(&config.mapbox_access_token) {
                clog(&format!("mapboxgl.accessToken assignment failed: {err:?}"));
            }
            let map = mapbox::Map::new(&mapbox::map_options(
                CONTAINER_ID,
                &config.mapbox_style,
                &viewer.camera,
            ));
            let move_end = {
                let viewer = viewer.clone();
                let map = map.clone();
                Closure::wrap(Box::new(move || {
                    let view = mapbox::current_view(&map);
                    if !state::is_renderable(&view) {
                        clog("mapbox reported a non-finite view, dropping it");
                        return;
                    }
                    viewer.dispatch(ViewerAction::UpdateCamera {
                        origin: MapSource::Mapbox,
                        view,
                    });
                }) as Box<dyn FnMut()>)
            };
            map.on("moveend", move_end.as_ref().unchecked_ref());
            *map_ref.borrow_mut() = Some(map);
            // Cleanup
            move || {
                if let Some(map) = map_ref.borrow_mut().take() {
                    map.off("moveend", move_end.as_ref().unchecked_ref());
                    map.remove();
                }
                drop(move_end);
            }
        });
    }

    // Mirror accepted updates, but never back onto their own origin.
    {
        let map_ref = map_ref.clone();
        let camera = props.viewer.camera;
        let source = props.viewer.source;
        use_effect_with((camera, source), move |(view, source)| {
            if *source != MapSource::Mapbox && state::is_renderable(view) {
                if let Some(map) = map_ref.borrow().as_ref() {
                    map.jump_to(&mapbox::jump_options(view));
                }
            }
            || ()
        });
    }

    html! { <div id={CONTAINER_ID} style="flex:1; height:100%;"></div> }
}
