use std::rc::Rc;

use anyhow::Context as _;
use dltrigger_core::{ClickHandler, DownloadTrigger, TriggerConfig};
use wasm_bindgen::{JsCast as _, closure::Closure};
use web_sys::{Event, HtmlElement, Window};

use crate::{
    config::page_config,
    control::{WebClick, WebControl, WebPage},
    host::WebHost,
    js_anyhow,
};

/// Binds every download control once the document has been parsed.
///
/// If parsing already finished when this runs, the controls are bound right away.
pub fn install() -> anyhow::Result<()> {
    let window = web_sys::window().context("No window")?;
    let document = window.document().context("No document")?;

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(move || {
            if let Err(e) = bind_controls(&window) {
                log::error!("Failed binding download controls: {e:#}");
            }
        });
        document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
            .map_err(|e| js_anyhow(&e))
            .context("Failed listening for DOMContentLoaded")?;
    } else {
        bind_controls(&window)?;
    }
    Ok(())
}

/// Attaches one click handler to each control in the document, returns how many were bound.
pub fn bind_controls(window: &Window) -> anyhow::Result<usize> {
    let host = WebHost::new(window.clone())?;
    let page = WebPage::new(host.document().clone());
    let config = Rc::new(page_config(page.document()));

    let controls = page
        .document()
        .query_selector_all(&config.control_selector)
        .map_err(|e| js_anyhow(&e))
        .with_context(|| format!("Invalid control selector {:?}", config.control_selector))?;

    let trigger = Rc::new(DownloadTrigger::from_config(host, &config));
    let mut bound = 0;
    for idx in 0..controls.length() {
        let Some(node) = controls.get(idx) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<HtmlElement>() else {
            log::warn!("Skipping download control #{idx}, it is not an HTML element");
            continue;
        };
        attach(
            WebControl::new(element),
            page.clone(),
            Rc::clone(&trigger),
            Rc::clone(&config),
        )?;
        bound += 1;
    }

    log::info!(
        "Bound {bound} download control(s) matching {:?}",
        config.control_selector
    );
    Ok(bound)
}

fn attach(
    control: WebControl,
    page: WebPage,
    trigger: Rc<DownloadTrigger<WebHost>>,
    config: Rc<TriggerConfig>,
) -> anyhow::Result<()> {
    let target = control.element().clone();
    let handler = ClickHandler::new(control, page, trigger, config);

    let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        handler.on_click(&WebClick(&event), wasm_bindgen_futures::spawn_local);
    });

    target
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| js_anyhow(&e))
        .context("Failed attaching click handler")?;
    // The handler lives as long as the page
    on_click.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_dom::{append, remove_config, set_config};
    use wasm_bindgen_test::wasm_bindgen_test;

    fn window() -> Window {
        web_sys::window().expect("No window")
    }

    fn click(target: &web_sys::Element) -> bool {
        let document = window().document().expect("No document");
        let event = document.create_event("Event").expect("Failed creating event");
        event.init_event_with_bubbles_and_cancelable("click", true, true);
        target.dispatch_event(&event).expect("Failed dispatching click")
    }

    #[wasm_bindgen_test]
    fn test_binds_each_matching_html_element() {
        set_config(r#"{ "control_selector": ".bind-count" }"#);
        let first = append("a", "bind-count");
        let second = append("button", "bind-count");
        let unrelated = append("a", "btn-other");

        let bound = bind_controls(&window()).expect("Failed binding controls");

        assert_eq!(bound, 2);
        for el in [first, second, unrelated] {
            el.remove();
        }
        remove_config();
    }

    #[wasm_bindgen_test]
    fn test_skips_non_html_matches() {
        set_config(r#"{ "control_selector": ".bind-svg" }"#);
        let document = window().document().expect("No document");
        let svg = document
            .create_element_ns(Some("http://www.w3.org/2000/svg"), "svg")
            .expect("Failed creating svg");
        svg.set_attribute("class", "bind-svg")
            .expect("Failed setting class");
        document
            .body()
            .expect("No body")
            .append_child(&svg)
            .expect("Failed appending svg");
        let html = append("a", "bind-svg");

        let bound = bind_controls(&window()).expect("Failed binding controls");

        assert_eq!(bound, 1);
        svg.remove();
        html.remove();
        remove_config();
    }

    #[wasm_bindgen_test]
    fn test_bound_click_prevents_navigation() {
        set_config(r#"{ "control_selector": ".bind-click" }"#);
        // No href, so the click is swallowed without starting a download
        let control = append("a", "bind-click");
        bind_controls(&window()).expect("Failed binding controls");

        let not_cancelled = click(&control);

        assert!(!not_cancelled);
        control.remove();
        remove_config();
    }

    #[wasm_bindgen_test]
    fn test_unbound_click_is_not_prevented() {
        let control = append("a", "never-bound");
        assert!(click(&control));
        control.remove();
    }
}
