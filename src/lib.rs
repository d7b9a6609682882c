#![warn(clippy::all, rust_2018_idioms)]
//! Download buttons for static book pages.
//!
//! Loaded as a wasm module, this binds every `.btn-download-large` control on the page. A click
//! fetches the linked file and saves it under a name taken from `data-filename` or the page's
//! `.book-title`. When the fetch fails, typically because the file is served cross-origin without
//! CORS headers, the file is opened in a new tab and the user is told how to save it by hand.

pub use dltrigger_core::{
    ButtonVisualState, ClickEvent, ClickHandler, ClickResponse, Control, ControlElement,
    DEFAULT_FILENAME, DownloadError, DownloadHost, DownloadOutcome, DownloadPhase,
    DownloadRequest, DownloadTrigger, InFlight, InFlightGuard, LocalTask, Notice, PageText,
    TriggerConfig, intercept_click,
};
pub use dltrigger_strfmt::{filename_from_title, filename_stem};

pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// When compiling to web:
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Redirect `log` message to `console.log` and friends:
    _ = dltrigger_web::WebLogger::init(log::LevelFilter::Debug).ok();
    log::debug!("{APP_NAME} v{APP_VERSION} starting");

    if let Err(e) = dltrigger_web::install() {
        log::error!("Failed installing download controls: {e:#}");
    }
}
