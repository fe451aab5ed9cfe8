/// Route `log` records and panics to the browser console.
///
/// Debug builds log everything down to `Debug`; release builds keep `Info`
/// and above.
pub fn setup_logging() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };

    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("Failed to setup logging: {e}").into());
        return;
    }

    log::info!("Logging initialized at {level} (api: {})", crate::config::API_BASE_URL);
}
