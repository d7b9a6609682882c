use dltrigger_core::{ButtonVisualState, ClickEvent, Control, ControlElement, PageText};
use web_sys::{Document, Event, HtmlElement};

use crate::js_error_message;

/// A download control element in the document.
#[derive(Debug, Clone)]
pub struct WebControl(HtmlElement);

impl WebControl {
    pub fn new(element: HtmlElement) -> Self {
        Self(element)
    }

    pub fn element(&self) -> &HtmlElement {
        &self.0
    }
}

impl Control for WebControl {
    fn visual_state(&self) -> ButtonVisualState {
        let disabled = self
            .0
            .style()
            .get_property_value("pointer-events")
            .is_ok_and(|v| v == "none");
        ButtonVisualState::new(self.0.inner_html(), !disabled)
    }

    fn set_visual_state(&self, state: &ButtonVisualState) {
        self.0.set_inner_html(&state.label);

        let (opacity, pointer_events) = if state.enabled {
            ("1", "auto")
        } else {
            ("0.7", "none")
        };
        let style = self.0.style();
        if let Err(e) = style
            .set_property("opacity", opacity)
            .and_then(|()| style.set_property("pointer-events", pointer_events))
        {
            log::warn!(
                "Failed updating download control style: {}",
                js_error_message(&e)
            );
        }
    }
}

impl ControlElement for WebControl {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }
}

#[derive(Debug, Clone)]
pub struct WebPage(Document);

impl WebPage {
    pub fn new(document: Document) -> Self {
        Self(document)
    }

    pub fn document(&self) -> &Document {
        &self.0
    }
}

impl PageText for WebPage {
    fn text_of(&self, selector: &str) -> Option<String> {
        match self.0.query_selector(selector) {
            Ok(element) => element.and_then(|el| el.text_content()),
            Err(e) => {
                log::warn!(
                    "Invalid selector {selector:?}: {}",
                    js_error_message(&e)
                );
                None
            }
        }
    }
}

pub struct WebClick<'e>(pub &'e Event);

impl ClickEvent for WebClick<'_> {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}
