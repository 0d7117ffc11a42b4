// Shared helpers for the viewer components.

use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Fixed-width degree readout for the status panel.
pub fn format_degrees(value: f64) -> String {
    format!("{:.4}°", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_formatting() {
        assert_eq!(format_degrees(121.5654), "121.5654°");
        assert_eq!(format_degrees(-0.5), "-0.5000°");
    }
}
