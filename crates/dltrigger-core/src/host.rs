use crate::error::DownloadError;

/// Blocking messages shown to the user when the file could not be saved directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Notice {
    #[strum(
        serialize = "The PDF will open in a new tab.\n\nTo download:\n1. Wait for the PDF to load in the new tab\n2. Press Ctrl+S (or Cmd+S on Mac) to save\n3. Or right-click and select \"Save As\""
    )]
    OpenedInNewContext,
    #[strum(
        serialize = "Please allow popups and redirects for this site, then try again.\n\nTo download manually:\n1. Right-click the Download button\n2. Select \"Save Link As\" or \"Download Linked File\""
    )]
    PopupBlocked,
}

/// The environment a download runs in: network, save mechanism, new browsing contexts and notices.
// Futures are driven by a single-threaded event loop so no `Send` bound is wanted
#[allow(async_fn_in_trait)]
pub trait DownloadHost {
    /// Retrieved bytes, kept opaque so the host can hand them back to its own save mechanism
    type Content;

    /// Reads the content at `address`. Non-success statuses are errors.
    async fn retrieve(&self, address: &str) -> Result<Self::Content, DownloadError>;

    /// Presents `content` to the user as a file named `filename`.
    fn save(&self, content: &Self::Content, filename: &str) -> Result<(), DownloadError>;

    /// Opens `address` in a new browsing context, returns `false` if that was prevented.
    fn open_new_context(&self, address: &str) -> bool;

    /// Shows a blocking notice.
    fn notify(&self, notice: Notice);
}
