//! Shared camera store for the dual-map viewer.
//! One record of viewport parameters is owned by a reducer and mirrored
//! into both embedded map libraries by their adapter components.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::rc::Rc;
use yew::Reducible;

/// Which map component last produced the current camera value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapSource {
    /// Initial state, or an update driven by the UI rather than a map.
    #[default]
    None,
    Mapbox,
    Cesium,
}

/// Viewport parameters shared by both maps. Angles are degrees, zoom is a
/// web-mercator zoom level. Values are carried as the libraries report
/// them; nothing here clamps or validates ranges.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraView {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
}

impl CameraView {
    /// Field-by-field inequality over the five viewport parameters.
    /// NaN in any field compares unequal to itself, so a NaN-bearing view
    /// always reads as changed.
    pub fn differs_from(&self, other: &CameraView) -> bool {
        self.longitude != other.longitude
            || self.latitude != other.latitude
            || self.zoom != other.zoom
            || self.pitch != other.pitch
            || self.bearing != other.bearing
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewerState {
    pub camera: CameraView,
    pub source: MapSource,
    /// Opaque route payload set by the UI; the store never inspects it.
    #[serde(default)]
    pub route: Option<Value>,
    /// Opaque descriptor of the current step while walking a route.
    #[serde(default)]
    pub zoom_to_step: Option<Value>,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self {
            camera: crate::state::DEFAULT_VIEW,
            source: MapSource::None,
            route: None,
            zoom_to_step: None,
        }
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum ViewerAction {
    /// Guarded whole-record camera replacement, stamped with its origin.
    UpdateCamera { origin: MapSource, view: CameraView },
    SetRoute(Option<Value>),
    SetZoomToStep(Option<Value>),
}

impl Reducible for ViewerState {
    type Action = ViewerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use ViewerAction::*;
        match action {
            UpdateCamera { origin, view } => {
                if !self.camera.differs_from(&view) {
                    // Same viewport: hand back the same Rc so subscribers
                    // see no change at all.
                    return self;
                }
                let mut new = (*self).clone();
                new.camera = view;
                new.source = origin;
                Rc::new(new)
            }
            SetRoute(route) => {
                let mut new = (*self).clone();
                new.route = route;
                Rc::new(new)
            }
            SetZoomToStep(step) => {
                let mut new = (*self).clone();
                new.zoom_to_step = step;
                Rc::new(new)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn taipei() -> CameraView {
        CameraView {
            longitude: 121.5654,
            latitude: 25.0330,
            zoom: 12.0,
            pitch: 0.0,
            bearing: 0.0,
        }
    }

    #[test]
    fn default_state_matches_hardcoded_city() {
        let s = ViewerState::default();
        assert_eq!(s.camera.longitude, 121.5654);
        assert_eq!(s.camera.latitude, 25.0330);
        assert_eq!(s.camera.zoom, 16.0);
        assert_eq!(s.camera.pitch, 0.0);
        assert_eq!(s.camera.bearing, 0.0);
        assert_eq!(s.source, MapSource::None);
        assert!(s.route.is_none());
        assert!(s.zoom_to_step.is_none());
    }

    #[test]
    fn repeated_update_is_a_noop() {
        let s0 = Rc::new(ViewerState::default());
        let s1 = s0.reduce(ViewerAction::UpdateCamera {
            origin: MapSource::Mapbox,
            view: taipei(),
        });
        assert_eq!(s1.camera, taipei());
        let s2 = s1.clone().reduce(ViewerAction::UpdateCamera {
            origin: MapSource::Mapbox,
            view: taipei(),
        });
        // Second dispatch with identical coordinates returns the same Rc.
        assert!(Rc::ptr_eq(&s1, &s2));
    }

    #[test]
    fn bearing_only_change_still_updates() {
        let s0 = Rc::new(ViewerState::default());
        let s1 = s0.reduce(ViewerAction::UpdateCamera {
            origin: MapSource::Mapbox,
            view: taipei(),
        });
        let rotated = CameraView {
            bearing: 45.0,
            ..taipei()
        };
        let s2 = s1.clone().reduce(ViewerAction::UpdateCamera {
            origin: MapSource::Mapbox,
            view: rotated,
        });
        assert!(!Rc::ptr_eq(&s1, &s2));
        assert_eq!(s2.camera.bearing, 45.0);
    }

    #[test]
    fn accepted_update_stamps_its_origin() {
        let s0 = Rc::new(ViewerState::default());
        let s1 = s0.reduce(ViewerAction::UpdateCamera {
            origin: MapSource::Mapbox,
            view: taipei(),
        });
        assert_eq!(s1.source, MapSource::Mapbox);
        let moved = CameraView {
            zoom: 8.0,
            ..taipei()
        };
        let s2 = s1.reduce(ViewerAction::UpdateCamera {
            origin: MapSource::Cesium,
            view: moved,
        });
        assert_eq!(s2.source, MapSource::Cesium);
    }

    #[test]
    fn rejected_update_keeps_previous_origin() {
        let s0 = Rc::new(ViewerState::default());
        let s1 = s0.reduce(ViewerAction::UpdateCamera {
            origin: MapSource::Mapbox,
            view: taipei(),
        });
        // Same coordinates from the other map: guard rejects, tag stays.
        let s2 = s1.reduce(ViewerAction::UpdateCamera {
            origin: MapSource::Cesium,
            view: taipei(),
        });
        assert_eq!(s2.source, MapSource::Mapbox);
    }

    #[test]
    fn route_and_step_do_not_touch_the_camera() {
        let s0 = Rc::new(ViewerState::default());
        let s1 = s0.reduce(ViewerAction::SetRoute(Some(json!([
            { "longitude": 121.0, "latitude": 25.0 }
        ]))));
        assert_eq!(s1.camera, ViewerState::default().camera);
        assert_eq!(s1.source, MapSource::None);
        let s2 = s1.reduce(ViewerAction::SetZoomToStep(Some(json!(3))));
        assert_eq!(s2.camera, ViewerState::default().camera);
        assert!(s2.route.is_some());
        assert_eq!(s2.zoom_to_step, Some(json!(3)));
    }

    #[test]
    fn camera_update_preserves_route_fields() {
        let s0 = Rc::new(ViewerState::default());
        let s1 = s0.reduce(ViewerAction::SetRoute(Some(json!([]))));
        let s2 = s1.reduce(ViewerAction::UpdateCamera {
            origin: MapSource::Cesium,
            view: taipei(),
        });
        assert_eq!(s2.route, Some(json!([])));
    }

    #[test]
    fn nan_fields_always_read_as_changed() {
        let broken = CameraView {
            latitude: f64::NAN,
            ..taipei()
        };
        assert!(broken.differs_from(&broken));
    }
}
