use constants::mount::{CANVAS_ID, CONTAINER_Z_INDEX};
use constants::render_settings::DEVICE_PIXEL_RATIO_RANGE;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MountError {
    #[error("no global `window`")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("document has no body")]
    NoBody,

    #[error("DOM error: {0}")]
    Dom(String),
}

/// Clamp the reported device pixel ratio into the supported range.
pub fn clamp_device_pixel_ratio(ratio: f64) -> f32 {
    let (min, max) = DEVICE_PIXEL_RATIO_RANGE;
    if !ratio.is_finite() {
        return min;
    }
    (ratio as f32).clamp(min, max)
}

/// CSS applied to the container: fixed to the viewport, behind page
/// content, transparent to pointer input.
pub fn container_style() -> Vec<(&'static str, String)> {
    vec![
        ("position", "fixed".to_string()),
        ("inset", "0".to_string()),
        ("width", "100vw".to_string()),
        ("height", "100vh".to_string()),
        ("z-index", CONTAINER_Z_INDEX.to_string()),
        ("pointer-events", "none".to_string()),
    ]
}

/// CSS selector Bevy binds the primary window to.
pub fn canvas_selector() -> String {
    format!("#{CANVAS_ID}")
}

#[cfg(target_arch = "wasm32")]
mod dom {
    use bevy::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlElement};

    use super::*;
    use constants::mount::CONTAINER_ID;

    fn dom_error(err: wasm_bindgen::JsValue) -> MountError {
        MountError::Dom(format!("{err:?}"))
    }

    fn apply_style(element: &Element) -> Result<(), MountError> {
        let html = element
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| MountError::Dom("container is not an HTML element".to_string()))?;
        let style = html.style();
        for (property, value) in container_style() {
            style.set_property(property, &value).map_err(dom_error)?;
        }
        Ok(())
    }

    fn find_or_create_container(document: &Document) -> Result<Element, MountError> {
        if let Some(existing) = document.get_element_by_id(CONTAINER_ID) {
            return Ok(existing);
        }

        let body = document.body().ok_or(MountError::NoBody)?;
        let container = document.create_element("div").map_err(dom_error)?;
        container.set_id(CONTAINER_ID);
        body.append_child(&container).map_err(dom_error)?;
        info!("Created mount container #{CONTAINER_ID}");
        Ok(container)
    }

    fn find_or_create_canvas(document: &Document, container: &Element) -> Result<(), MountError> {
        if document.get_element_by_id(CANVAS_ID).is_some() {
            return Ok(());
        }

        let canvas = document.create_element("canvas").map_err(dom_error)?;
        canvas.set_id(CANVAS_ID);
        if let Some(html) = canvas.dyn_ref::<HtmlElement>() {
            let style = html.style();
            style.set_property("width", "100%").map_err(dom_error)?;
            style.set_property("height", "100%").map_err(dom_error)?;
            style.set_property("display", "block").map_err(dom_error)?;
        }
        container.append_child(&canvas).map_err(dom_error)?;
        Ok(())
    }

    /// Make sure the container and canvas exist, style the container, and
    /// return the clamped device pixel ratio.
    pub fn prepare_mount_surface() -> Result<f32, MountError> {
        let window = web_sys::window().ok_or(MountError::NoWindow)?;
        let document = window.document().ok_or(MountError::NoDocument)?;

        let container = find_or_create_container(&document)?;
        apply_style(&container)?;
        find_or_create_canvas(&document, &container)?;

        Ok(clamp_device_pixel_ratio(window.device_pixel_ratio()))
    }
}

#[cfg(target_arch = "wasm32")]
pub use dom::prepare_mount_surface;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_ratio_is_clamped() {
        assert_eq!(clamp_device_pixel_ratio(0.5), 1.0);
        assert_eq!(clamp_device_pixel_ratio(1.5), 1.5);
        assert_eq!(clamp_device_pixel_ratio(3.0), 2.0);
        assert_eq!(clamp_device_pixel_ratio(f64::NAN), 1.0);
    }

    #[test]
    fn test_container_sits_behind_page_without_input() {
        let style = container_style();
        let get = |name: &str| {
            style
                .iter()
                .find(|(property, _)| *property == name)
                .map(|(_, value)| value.clone())
        };
        assert_eq!(get("position").as_deref(), Some("fixed"));
        assert_eq!(get("z-index").as_deref(), Some("-2"));
        assert_eq!(get("pointer-events").as_deref(), Some("none"));
    }

    #[test]
    fn test_canvas_selector() {
        assert_eq!(canvas_selector(), "#solar-canvas");
    }
}
