use anyhow::Context as _;
use dltrigger_core::{DownloadError, DownloadHost, Notice};
use wasm_bindgen::{JsCast as _, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, Document, HtmlAnchorElement, Response, Url, Window};

use crate::js_error_message;

/// Downloads through the page's own `fetch`, saving via a synthetic `<a download>` click.
#[derive(Debug, Clone)]
pub struct WebHost {
    window: Window,
    document: Document,
}

impl WebHost {
    pub fn new(window: Window) -> anyhow::Result<Self> {
        let document = window.document().context("Window has no document")?;
        Ok(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl DownloadHost for WebHost {
    type Content = Blob;

    async fn retrieve(&self, address: &str) -> Result<Self::Content, DownloadError> {
        let response = JsFuture::from(self.window.fetch_with_str(address))
            .await
            .map_err(|e| DownloadError::Network(js_error_message(&e)))?;
        let response: Response = response.dyn_into().map_err(|v| {
            DownloadError::Network(format!("fetch resolved to a non-Response value: {v:?}"))
        })?;

        if !response.ok() {
            return Err(DownloadError::Status(response.status()));
        }

        let blob = response.blob().map_err(body_error)?;
        let blob = JsFuture::from(blob).await.map_err(body_error)?;
        blob.dyn_into::<Blob>()
            .map_err(|v| DownloadError::Body(format!("body is not a Blob: {v:?}")))
    }

    fn save(&self, content: &Self::Content, filename: &str) -> Result<(), DownloadError> {
        let url = ObjectUrl::new(content)?;
        let body = self
            .document
            .body()
            .ok_or_else(|| DownloadError::Save("Document has no body".to_owned()))?;

        let link: HtmlAnchorElement = self
            .document
            .create_element("a")
            .map_err(save_error)?
            .dyn_into()
            .map_err(|el| DownloadError::Save(format!("<a> is not an anchor element: {el:?}")))?;
        link.set_href(url.as_str());
        link.set_download(filename);

        body.append_child(&link).map_err(save_error)?;
        link.click();
        link.remove();
        Ok(())
    }

    fn open_new_context(&self, address: &str) -> bool {
        match self.window.open_with_url_and_target(address, "_blank") {
            Ok(new_window) => new_window.is_some(),
            Err(e) => {
                log::warn!("Failed opening {address}: {}", js_error_message(&e));
                false
            }
        }
    }

    fn notify(&self, notice: Notice) {
        if let Err(e) = self.window.alert_with_message(&notice.to_string()) {
            log::warn!("Failed showing notice: {}", js_error_message(&e));
        }
    }
}

fn body_error(e: JsValue) -> DownloadError {
    DownloadError::Body(js_error_message(&e))
}

fn save_error(e: JsValue) -> DownloadError {
    DownloadError::Save(js_error_message(&e))
}

/// Object URL for a blob, revoked when dropped.
struct ObjectUrl(String);

impl ObjectUrl {
    fn new(blob: &Blob) -> Result<Self, DownloadError> {
        Url::create_object_url_with_blob(blob)
            .map(Self)
            .map_err(save_error)
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(e) = Url::revoke_object_url(&self.0) {
            log::warn!("Failed revoking {}: {}", self.0, js_error_message(&e));
        }
    }
}
