use dltrigger_core::TriggerConfig;
use web_sys::Document;

/// Id of the optional `<script type="application/json">` element holding a [`TriggerConfig`]
pub const CONFIG_ELEMENT_ID: &str = "dltrigger-config";

/// Reads the page's configuration, an absent or invalid config element yields the defaults.
pub fn page_config(document: &Document) -> TriggerConfig {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return TriggerConfig::default();
    };
    let json = element.text_content().unwrap_or_default();
    match TriggerConfig::from_json(&json) {
        Ok(config) => {
            log::debug!("Loaded configuration from #{CONFIG_ELEMENT_ID}: {config:?}");
            config
        }
        Err(e) => {
            log::warn!("Ignoring invalid configuration in #{CONFIG_ELEMENT_ID}, using defaults: {e}");
            TriggerConfig::default()
        }
    }
}
