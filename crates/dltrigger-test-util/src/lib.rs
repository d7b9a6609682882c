//! Recording fakes of the page and host, for driving downloads without a browser.

use std::{cell::RefCell, collections::HashMap, rc::Rc, task::Poll};

use dltrigger_core::{
    ButtonVisualState, ClickEvent, Control, ControlElement, DownloadError, DownloadHost, LocalTask,
    Notice, PageText,
};

pub use testresult::TestResult;

pub const CORS_ERROR: &str = "TypeError: Failed to fetch";

/// Everything the fakes observe, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    VisualState(ButtonVisualState),
    Retrieve(String),
    Save { filename: String, content: Vec<u8> },
    OpenNewContext(String),
    Notice(Notice),
}

#[derive(Debug, Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<Event>>>);

impl EventLog {
    pub fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn position(&self, pred: impl Fn(&Event) -> bool) -> Option<usize> {
        self.0.borrow().iter().position(pred)
    }

    pub fn retrievals(&self) -> usize {
        self.0
            .borrow()
            .iter()
            .filter(|e| matches!(e, Event::Retrieve(_)))
            .count()
    }
}

/// Host serving a fixed set of files, any other address fails like a CORS rejection.
#[derive(Debug)]
pub struct FakeHost {
    log: EventLog,
    files: HashMap<String, Result<Vec<u8>, DownloadError>>,
    popups_blocked: bool,
    save_error: Option<DownloadError>,
}

impl FakeHost {
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            files: HashMap::new(),
            popups_blocked: false,
            save_error: None,
        }
    }

    #[must_use]
    pub fn with_file(mut self, address: &str, content: &[u8]) -> Self {
        self.files.insert(address.to_owned(), Ok(content.to_vec()));
        self
    }

    #[must_use]
    pub fn with_error(mut self, address: &str, error: DownloadError) -> Self {
        self.files.insert(address.to_owned(), Err(error));
        self
    }

    #[must_use]
    pub fn with_popups_blocked(mut self) -> Self {
        self.popups_blocked = true;
        self
    }

    #[must_use]
    pub fn with_save_error(mut self, error: DownloadError) -> Self {
        self.save_error = Some(error);
        self
    }
}

impl DownloadHost for FakeHost {
    type Content = Vec<u8>;

    async fn retrieve(&self, address: &str) -> Result<Self::Content, DownloadError> {
        self.log.push(Event::Retrieve(address.to_owned()));
        // Hand control back to the executor like a real network call would
        yield_now().await;
        self.files
            .get(address)
            .cloned()
            .unwrap_or_else(|| Err(DownloadError::Network(CORS_ERROR.to_owned())))
    }

    fn save(&self, content: &Self::Content, filename: &str) -> Result<(), DownloadError> {
        if let Some(e) = &self.save_error {
            return Err(e.clone());
        }
        self.log.push(Event::Save {
            filename: filename.to_owned(),
            content: content.clone(),
        });
        Ok(())
    }

    fn open_new_context(&self, address: &str) -> bool {
        self.log.push(Event::OpenNewContext(address.to_owned()));
        !self.popups_blocked
    }

    fn notify(&self, notice: Notice) {
        self.log.push(Event::Notice(notice));
    }
}

/// Yields once without depending on a particular runtime.
async fn yield_now() {
    let mut yielded = false;
    std::future::poll_fn(|cx| {
        if yielded {
            Poll::Ready(())
        } else {
            yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    })
    .await;
}

/// Polls all `tasks` in order, round by round, until every one has finished.
///
/// Unlike `join!` the poll order never rotates, so overlapping downloads interleave the same way
/// on every run.
pub async fn run_interleaved(mut tasks: Vec<LocalTask>) {
    std::future::poll_fn(|cx| {
        tasks.retain_mut(|task| task.as_mut().poll(cx).is_pending());
        if tasks.is_empty() {
            Poll::Ready(())
        } else {
            Poll::Pending
        }
    })
    .await;
}

/// Clones share the visual state, like handles to the same DOM element.
#[derive(Debug, Clone)]
pub struct FakeControl {
    log: EventLog,
    state: Rc<RefCell<ButtonVisualState>>,
    attributes: HashMap<String, String>,
}

impl FakeControl {
    pub fn new(log: EventLog, label: &str) -> Self {
        Self {
            log,
            state: Rc::new(RefCell::new(ButtonVisualState::new(label, true))),
            attributes: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_owned(), value.to_owned());
        self
    }

    #[must_use]
    pub fn with_href(self, href: &str) -> Self {
        self.with_attribute("href", href)
    }
}

impl Control for FakeControl {
    fn visual_state(&self) -> ButtonVisualState {
        self.state.borrow().clone()
    }

    fn set_visual_state(&self, state: &ButtonVisualState) {
        self.log.push(Event::VisualState(state.clone()));
        *self.state.borrow_mut() = state.clone();
    }
}

impl ControlElement for FakeControl {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }
}

/// Page with an optional title element.
#[derive(Debug, Clone, Default)]
pub struct FakePage {
    titles: HashMap<String, String>,
}

impl FakePage {
    #[must_use]
    pub fn with_text(mut self, selector: &str, text: &str) -> Self {
        self.titles.insert(selector.to_owned(), text.to_owned());
        self
    }
}

impl PageText for FakePage {
    fn text_of(&self, selector: &str) -> Option<String> {
        self.titles.get(selector).cloned()
    }
}

#[derive(Debug, Default)]
pub struct FakeClick {
    prevented: std::cell::Cell<bool>,
}

impl FakeClick {
    pub fn default_prevented(&self) -> bool {
        self.prevented.get()
    }
}

impl ClickEvent for FakeClick {
    fn prevent_default(&self) {
        self.prevented.set(true);
    }
}
