use solar_render_engine::engine::core::app_setup::create_app;

#[cfg(target_arch = "wasm32")]
fn prepare_mount() -> Option<f32> {
    use solar_render_engine::engine::core::web_mount::prepare_mount_surface;

    match prepare_mount_surface() {
        Ok(ratio) => Some(ratio),
        Err(err) => {
            let message = js_sys::JsString::from(format!("solar mount failed: {err}"));
            web_sys::console::error_1(&message.into());
            None
        }
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        let mut app = create_app(prepare_mount());
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let mut app = create_app(None);
        app.run();
    }
}
