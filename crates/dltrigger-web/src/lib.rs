#![cfg(target_arch = "wasm32")]
//! Browser binding: download controls in a live document, backed by `fetch` and object URLs.

use wasm_bindgen::{JsCast as _, JsValue};

pub use {
    config::{CONFIG_ELEMENT_ID, page_config},
    control::{WebClick, WebControl, WebPage},
    host::WebHost,
    init::{bind_controls, install},
    logger::WebLogger,
};

mod config;
mod control;
mod host;
mod init;
mod logger;

/// Best effort human readable message of a thrown JS value
pub(crate) fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        String::from(err.to_string())
    } else if let Some(s) = value.as_string() {
        s
    } else {
        format!("{value:?}")
    }
}

pub(crate) fn js_anyhow(value: &JsValue) -> anyhow::Error {
    anyhow::anyhow!(js_error_message(value))
}
