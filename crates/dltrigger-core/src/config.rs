use serde::Deserialize;

pub const DEFAULT_CONTROL_SELECTOR: &str = ".btn-download-large";
pub const DEFAULT_TITLE_SELECTOR: &str = ".book-title";
pub const DEFAULT_FILENAME_ATTRIBUTE: &str = "data-filename";
pub const DEFAULT_STEM: &str = "book";
pub const DEFAULT_EXTENSION: &str = "pdf";
pub const DEFAULT_BUSY_LABEL: &str = r#"<span class="download-icon">📥</span> Preparing download..."#;

/// Page-level settings, every field can be left out and falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TriggerConfig {
    /// CSS selector matching the download controls
    pub control_selector: String,
    /// CSS selector of the element whose text names the saved file
    pub title_selector: String,
    /// Attribute on the control holding an explicit filename
    pub filename_attribute: String,
    pub default_stem: String,
    pub extension: String,
    /// Inner HTML shown on the control while the download is pending
    pub busy_label: String,
    /// Ignore clicks on a control while it already has a download in flight
    pub guard_repeated_clicks: bool,
}

impl TriggerConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            control_selector: DEFAULT_CONTROL_SELECTOR.to_owned(),
            title_selector: DEFAULT_TITLE_SELECTOR.to_owned(),
            filename_attribute: DEFAULT_FILENAME_ATTRIBUTE.to_owned(),
            default_stem: DEFAULT_STEM.to_owned(),
            extension: DEFAULT_EXTENSION.to_owned(),
            busy_label: DEFAULT_BUSY_LABEL.to_owned(),
            guard_repeated_clicks: false,
        }
    }
}
