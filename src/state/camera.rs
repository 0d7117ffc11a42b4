//! Camera defaults and the unit conversions between the two map libraries.
//!
//! Mapbox thinks in web-mercator zoom levels and degrees; Cesium thinks in
//! camera height above the ellipsoid and radians. Both adapters go through
//! the helpers here so the shared store only ever carries Mapbox-style
//! units.

use crate::model::CameraView;

/// Hard-coded start view (Taipei 101).
pub const DEFAULT_VIEW: CameraView = CameraView {
    longitude: 121.5654,
    latitude: 25.0330,
    zoom: 16.0,
    pitch: 0.0,
    bearing: 0.0,
};

/// Earth's equatorial circumference in meters.
const EARTH_CIRCUMFERENCE_M: f64 = 40_075_016.686;
/// 2 * tan(30 deg): width factor of Cesium's default 60 deg frustum.
const FRUSTUM_WIDTH_FACTOR: f64 = 1.154_700_538_379_251_7;

/// Camera height (m) that shows roughly the same ground extent as the
/// given web-mercator zoom level.
pub fn zoom_to_height(zoom: f64) -> f64 {
    EARTH_CIRCUMFERENCE_M / (FRUSTUM_WIDTH_FACTOR * zoom.exp2())
}

/// Inverse of [`zoom_to_height`].
pub fn height_to_zoom(height: f64) -> f64 {
    (EARTH_CIRCUMFERENCE_M / (FRUSTUM_WIDTH_FACTOR * height)).log2()
}

/// Mapbox pitch (degrees, 0 = looking straight down) to Cesium camera
/// pitch (radians, -PI/2 = looking straight down).
pub fn pitch_to_cesium(pitch_deg: f64) -> f64 {
    (pitch_deg - 90.0).to_radians()
}

/// Inverse of [`pitch_to_cesium`].
pub fn pitch_from_cesium(pitch_rad: f64) -> f64 {
    pitch_rad.to_degrees() + 90.0
}

/// Mapbox bearing (degrees clockwise from north) to Cesium heading
/// (radians clockwise from north).
pub fn bearing_to_heading(bearing_deg: f64) -> f64 {
    bearing_deg.to_radians()
}

/// Cesium heading back to a Mapbox bearing, wrapped into (-180, 180] the
/// way `getBearing` reports it.
pub fn bearing_from_heading(heading_rad: f64) -> f64 {
    let mut bearing = heading_rad.to_degrees() % 360.0;
    if bearing > 180.0 {
        bearing -= 360.0;
    } else if bearing <= -180.0 {
        bearing += 360.0;
    }
    bearing
}

/// A view the map libraries can actually display. The store accepts
/// anything; the adapters drop library callbacks that fail this check
/// before dispatching them.
pub fn is_renderable(view: &CameraView) -> bool {
    view.longitude.is_finite()
        && view.latitude.is_finite()
        && view.zoom.is_finite()
        && view.pitch.is_finite()
        && view.bearing.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_height_round_trip() {
        for zoom in [0.0, 4.0, 12.0, 16.0, 22.0] {
            let back = height_to_zoom(zoom_to_height(zoom));
            assert!((back - zoom).abs() < 1e-9, "zoom {zoom} -> {back}");
        }
    }

    #[test]
    fn higher_zoom_means_lower_camera() {
        assert!(zoom_to_height(16.0) < zoom_to_height(12.0));
        assert!(zoom_to_height(0.0) > 10_000_000.0);
    }

    #[test]
    fn pitch_round_trip() {
        for pitch in [0.0, 30.0, 60.0, 85.0] {
            let back = pitch_from_cesium(pitch_to_cesium(pitch));
            assert!((back - pitch).abs() < 1e-9);
        }
        // Straight down in Mapbox is straight down in Cesium.
        assert!((pitch_to_cesium(0.0) + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn heading_wraps_like_get_bearing() {
        assert!((bearing_from_heading(350.0_f64.to_radians()) - (-10.0)).abs() < 1e-9);
        assert!((bearing_from_heading(bearing_to_heading(-45.0)) - (-45.0)).abs() < 1e-9);
        assert!((bearing_from_heading(std::f64::consts::PI) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn non_finite_views_are_not_renderable() {
        assert!(is_renderable(&DEFAULT_VIEW));
        let mut v = DEFAULT_VIEW;
        v.zoom = f64::NAN;
        assert!(!is_renderable(&v));
        v.zoom = 16.0;
        v.longitude = f64::INFINITY;
        assert!(!is_renderable(&v));
    }
}
