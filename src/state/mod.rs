pub mod camera;

pub use camera::{
    DEFAULT_VIEW, bearing_from_heading, bearing_to_heading, height_to_zoom, is_renderable,
    pitch_from_cesium, pitch_to_cesium, zoom_to_height,
};
