use std::rc::Rc;

use dltrigger::{
    ButtonVisualState, ClickHandler, DownloadOutcome, DownloadRequest, DownloadTrigger,
    TriggerConfig, intercept_click,
};
use dltrigger_test_util::{EventLog, FakeClick, FakeControl, FakeHost, FakePage};

pub const ORIGINAL_LABEL: &str = "Download PDF";

/// A page with one download control wired to a fake host.
pub struct Harness {
    pub log: EventLog,
    pub control: FakeControl,
    pub page: FakePage,
    pub config: TriggerConfig,
    trigger: Rc<DownloadTrigger<FakeHost>>,
}

impl Harness {
    pub fn new(host: impl FnOnce(FakeHost) -> FakeHost, href: &str) -> Self {
        let log = EventLog::default();
        let config = TriggerConfig::default();
        Self {
            control: FakeControl::new(log.clone(), ORIGINAL_LABEL).with_href(href),
            page: FakePage::default(),
            trigger: Rc::new(DownloadTrigger::from_config(
                host(FakeHost::new(log.clone())),
                &config,
            )),
            config,
            log,
        }
    }

    #[must_use]
    pub fn with_control_attribute(mut self, name: &str, value: &str) -> Self {
        self.control = self.control.with_attribute(name, value);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: &str) -> Self {
        self.page = self.page.with_text(&self.config.title_selector, title);
        self
    }

    /// Resolves the click like the page binding does, without running the download
    pub fn resolve_click(&self) -> (FakeClick, Option<DownloadRequest>) {
        let click = FakeClick::default();
        let request = intercept_click(&click, &self.control, &self.page, &self.config);
        (click, request)
    }

    /// Clicks the control and runs the resulting download to completion
    pub async fn click(&self) -> Option<DownloadOutcome> {
        let (click, request) = self.resolve_click();
        assert!(click.default_prevented());
        let request = request?;
        Some(self.trigger.trigger(&self.control, &request).await)
    }

    /// The handler the page binding would attach to this control
    pub fn handler(
        &self,
        guard_repeated_clicks: bool,
    ) -> ClickHandler<FakeControl, FakePage, FakeHost> {
        let config = TriggerConfig {
            guard_repeated_clicks,
            ..self.config.clone()
        };
        ClickHandler::new(
            self.control.clone(),
            self.page.clone(),
            Rc::clone(&self.trigger),
            Rc::new(config),
        )
    }

    pub fn original_state() -> ButtonVisualState {
        ButtonVisualState::new(ORIGINAL_LABEL, true)
    }

    pub fn busy_state(&self) -> ButtonVisualState {
        ButtonVisualState::busy(self.config.busy_label.as_str())
    }
}
