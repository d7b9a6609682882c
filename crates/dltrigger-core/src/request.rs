use dltrigger_strfmt::filename_from_title;

use crate::{DEFAULT_FILENAME, config::TriggerConfig};

/// One click worth of download: where to fetch from and what to call the saved file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub address: String,
    pub filename: String,
}

impl DownloadRequest {
    pub fn new(address: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            filename: filename.into(),
        }
    }

    /// Resolves a request from what a control and its page provide.
    ///
    /// An explicit, non-empty `filename_hint` wins. Otherwise the name is derived from the page
    /// title, which is only looked up in that case. Returns `None` without an address.
    pub fn resolve(
        address: Option<String>,
        filename_hint: Option<String>,
        page_title: impl FnOnce() -> Option<String>,
        config: &TriggerConfig,
    ) -> Option<Self> {
        let address = address?;
        let filename = match filename_hint {
            Some(hint) if !hint.is_empty() => hint,
            _ => filename_from_title(
                page_title().as_deref(),
                &config.default_stem,
                &config.extension,
            ),
        };
        Some(Self { address, filename })
    }

    /// The name handed to the save mechanism
    pub fn save_name(&self) -> &str {
        if self.filename.is_empty() {
            DEFAULT_FILENAME
        } else {
            &self.filename
        }
    }
}
