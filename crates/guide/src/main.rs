fn main() {
    console_error_panic_hook::set_once();
    guide::logging::init(log::LevelFilter::Info);

    if let Err(err) = guide::mount() {
        log::error!("guide failed to start: {err}");
        wasm_bindgen::throw_str(&format!("guide failed to start: {err}"));
    }
}
