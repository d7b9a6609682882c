//! What a page binding needs from the host to turn a click into a download.

use std::{future::Future, pin::Pin, rc::Rc};

use crate::{
    config::TriggerConfig,
    control::Control,
    guard::InFlight,
    host::DownloadHost,
    request::DownloadRequest,
    trigger::DownloadTrigger,
};

/// A download started by a click, handed to the host's event loop.
pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

pub trait ClickEvent {
    fn prevent_default(&self);
}

/// A control as found in the page, with its attributes.
pub trait ControlElement: Control {
    fn attribute(&self, name: &str) -> Option<String>;
}

pub trait PageText {
    /// Text content of the first element matching `selector`
    fn text_of(&self, selector: &str) -> Option<String>;
}

/// Stops the control's own navigation and resolves what to download.
///
/// Returns `None` if the control has no `href`, the click is still swallowed in that case.
pub fn intercept_click<E, C, P>(
    event: &E,
    control: &C,
    page: &P,
    config: &TriggerConfig,
) -> Option<DownloadRequest>
where
    E: ClickEvent + ?Sized,
    C: ControlElement + ?Sized,
    P: PageText + ?Sized,
{
    event.prevent_default();

    let request = DownloadRequest::resolve(
        control.attribute("href"),
        control.attribute(&config.filename_attribute),
        || page.text_of(&config.title_selector),
        config,
    );
    if request.is_none() {
        log::warn!("Download control has no href, ignoring click");
    }
    request
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum ClickResponse {
    /// A download task was spawned
    Started,
    NoAddress,
    /// Ignored, the control already has a download running
    AlreadyInFlight,
}

/// Click handling for one bound control.
pub struct ClickHandler<C, P, H> {
    control: C,
    page: P,
    trigger: Rc<DownloadTrigger<H>>,
    config: Rc<TriggerConfig>,
    in_flight: InFlight,
}

impl<C, P, H> ClickHandler<C, P, H>
where
    C: ControlElement + Clone + 'static,
    P: PageText,
    H: DownloadHost + 'static,
{
    pub fn new(
        control: C,
        page: P,
        trigger: Rc<DownloadTrigger<H>>,
        config: Rc<TriggerConfig>,
    ) -> Self {
        Self {
            control,
            page,
            trigger,
            config,
            in_flight: InFlight::default(),
        }
    }

    /// Handles one click, passing the download task to `spawn`.
    ///
    /// With `guard_repeated_clicks` set, the control counts as in flight until the task finishes.
    pub fn on_click<E: ClickEvent + ?Sized>(
        &self,
        event: &E,
        spawn: impl FnOnce(LocalTask),
    ) -> ClickResponse {
        let Some(request) = intercept_click(event, &self.control, &self.page, &self.config) else {
            return ClickResponse::NoAddress;
        };

        let guard = if self.config.guard_repeated_clicks {
            let Some(guard) = self.in_flight.try_begin() else {
                log::debug!("{} already downloading, ignoring click", request.address);
                return ClickResponse::AlreadyInFlight;
            };
            Some(guard)
        } else {
            None
        };

        let trigger = Rc::clone(&self.trigger);
        let control = self.control.clone();
        spawn(Box::pin(async move {
            let outcome = trigger.trigger(&control, &request).await;
            log::info!(
                "Download of {} as {}: {outcome}",
                request.address,
                request.save_name()
            );
            drop(guard);
        }));
        ClickResponse::Started
    }
}
