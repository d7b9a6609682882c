use crate::{
    config::TriggerConfig,
    control::{ButtonVisualState, Control},
    error::DownloadError,
    host::{DownloadHost, Notice},
    request::DownloadRequest,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum DownloadPhase {
    Idle,
    Pending,
    Saving,
    Fallback,
}

/// How a download attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum DownloadOutcome {
    /// The file was handed to the save mechanism
    Saved,
    /// Retrieval failed and the address was opened in a new browsing context
    OpenedInNewContext,
    /// Retrieval failed and opening a new browsing context was prevented
    PopupBlocked,
}

/// Runs download attempts against a [`DownloadHost`].
///
/// Attempts are independent, nothing stops a second attempt on the same control while one is
/// pending. [`crate::ClickHandler`] guards a control when `guard_repeated_clicks` is set.
#[derive(Debug)]
pub struct DownloadTrigger<H> {
    host: H,
    busy_label: String,
}

impl<H: DownloadHost> DownloadTrigger<H> {
    pub fn new(host: H, busy_label: impl Into<String>) -> Self {
        Self {
            host,
            busy_label: busy_label.into(),
        }
    }

    pub fn from_config(host: H, config: &TriggerConfig) -> Self {
        Self::new(host, config.busy_label.clone())
    }

    /// Downloads `request` on behalf of `control`.
    ///
    /// The control shows the busy state while the attempt runs and gets its original state back
    /// before the attempt ends, on failure before any notice is shown. Failures never propagate,
    /// they are logged and answered with the fallback.
    pub async fn trigger<C: Control + ?Sized>(
        &self,
        control: &C,
        request: &DownloadRequest,
    ) -> DownloadOutcome {
        let original = control.visual_state();
        log_phase(request, DownloadPhase::Pending);
        control.set_visual_state(&ButtonVisualState::busy(self.busy_label.as_str()));

        let outcome = match self.retrieve_and_save(request).await {
            Ok(()) => {
                control.set_visual_state(&original);
                DownloadOutcome::Saved
            }
            Err(e) => {
                log::error!("Download failed: {e}");
                control.set_visual_state(&original);
                self.fallback(request)
            }
        };

        log_phase(request, DownloadPhase::Idle);
        log::debug!("{}: {outcome}", request.address);
        outcome
    }

    async fn retrieve_and_save(&self, request: &DownloadRequest) -> Result<(), DownloadError> {
        let content = self.host.retrieve(&request.address).await?;
        log_phase(request, DownloadPhase::Saving);
        self.host.save(&content, request.save_name())
    }

    fn fallback(&self, request: &DownloadRequest) -> DownloadOutcome {
        log_phase(request, DownloadPhase::Fallback);
        if self.host.open_new_context(&request.address) {
            self.host.notify(Notice::OpenedInNewContext);
            DownloadOutcome::OpenedInNewContext
        } else {
            log::warn!("Opening {} in a new tab was blocked", request.address);
            self.host.notify(Notice::PopupBlocked);
            DownloadOutcome::PopupBlocked
        }
    }
}

fn log_phase(request: &DownloadRequest, phase: DownloadPhase) {
    log::debug!("{} -> {phase}", request.address);
}
