pub mod app;
pub mod camera_controls;
pub mod cesium_view;
pub mod mapbox_view;
pub mod route_panel;
pub mod status_panel;
