/// What the user sees on a download control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonVisualState {
    /// Inner HTML of the control
    pub label: String,
    /// `false` renders the control dimmed and swallows pointer events
    pub enabled: bool,
}

impl ButtonVisualState {
    pub fn new(label: impl Into<String>, enabled: bool) -> Self {
        Self {
            label: label.into(),
            enabled,
        }
    }

    /// The state shown while a download is pending
    pub fn busy(label: impl Into<String>) -> Self {
        Self::new(label, false)
    }
}

/// A clickable element that starts a download.
pub trait Control {
    fn visual_state(&self) -> ButtonVisualState;

    fn set_visual_state(&self, state: &ButtonVisualState);
}
