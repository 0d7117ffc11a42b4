use yew::prelude::*;

use crate::model::{CameraView, MapSource};
use crate::util::format_degrees;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusPanelProps {
    pub camera: CameraView,
    pub source: MapSource,
    pub route_stops: usize,
    pub route_step: Option<usize>,
}

#[function_component]
pub fn StatusPanel(props: &StatusPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;";
    let label_style = "flex:1; font-weight:500; opacity:0.8;";
    let value_style =
        "min-width:90px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let source_label = match props.source {
        MapSource::None => "—",
        MapSource::Mapbox => "Mapbox",
        MapSource::Cesium => "Cesium",
    };
    let route_label = match (props.route_stops, props.route_step) {
        (0, _) => "none".to_string(),
        (n, None) => format!("{} stops", n),
        (n, Some(step)) => format!("{} stops · at {}", n, step + 1),
    };
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:220px; display:flex; flex-direction:column; gap:8px; font-size:13px; color:#c9d1d9; z-index:10;">
            <div style={row_style}>
                <span style={label_style}>{"Longitude"}</span>
                <span style={value_style}>{ format_degrees(props.camera.longitude) }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Latitude"}</span>
                <span style={value_style}>{ format_degrees(props.camera.latitude) }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Zoom"}</span>
                <span style={value_style}>{ format!("{:.2}", props.camera.zoom) }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Pitch"}</span>
                <span style={value_style}>{ format_degrees(props.camera.pitch) }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Bearing"}</span>
                <span style={value_style}>{ format_degrees(props.camera.bearing) }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Moved by"}</span>
                <span style={value_style}>{ source_label }</span>
            </div>
            <div style={row_style}>
                <span style={label_style}>{"Route"}</span>
                <span style={value_style}>{ route_label }</span>
            </div>
        </div>
    }
}
