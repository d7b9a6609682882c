pub use {
    binding::{
        ClickEvent, ClickHandler, ClickResponse, ControlElement, LocalTask, PageText, intercept_click,
    },
    config::TriggerConfig,
    control::{ButtonVisualState, Control},
    error::DownloadError,
    guard::{InFlight, InFlightGuard},
    host::{DownloadHost, Notice},
    request::DownloadRequest,
    trigger::{DownloadOutcome, DownloadPhase, DownloadTrigger},
};

pub mod binding;
pub mod config;
pub mod control;
pub mod error;
pub mod guard;
pub mod host;
pub mod request;
pub mod trigger;

/// Saved filename used when neither the control nor the page provides one
pub const DEFAULT_FILENAME: &str = "book.pdf";
