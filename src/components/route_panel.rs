use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RoutePanelProps {
    pub stops: usize,
    pub current_step: Option<usize>,
    pub on_add_stop: Callback<()>,
    pub on_next_stop: Callback<()>,
    pub on_clear: Callback<()>,
}

/// Records camera snapshots as route stops and steps the shared camera
/// through them.
#[function_component]
pub fn RoutePanel(props: &RoutePanelProps) -> Html {
    let add_cb = {
        let cb = props.on_add_stop.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let next_cb = {
        let cb = props.on_next_stop.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let clear_cb = {
        let cb = props.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let step_label = match (props.stops, props.current_step) {
        (0, _) => "no stops recorded".to_string(),
        (n, None) => format!("{} stops recorded", n),
        (n, Some(step)) => format!("stop {}/{}", step + 1, n),
    };
    html! {<div style="position:absolute; right:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:170px; display:flex; flex-direction:column; gap:6px; z-index:10;">
        <button onclick={add_cb}>{"Save stop"}</button>
        <button onclick={next_cb} disabled={props.stops == 0}>{"Next stop"}</button>
        <button onclick={clear_cb} disabled={props.stops == 0}>{"Clear route"}</button>
        <div style="font-size:11px; opacity:0.7; text-align:center;">{ step_label }</div>
    </div>}
}
