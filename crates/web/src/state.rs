// =============================================================================
// OffGriid Web - Global Application State
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App State
// 3. UI Actions
// =============================================================================

use leptos::prelude::*;

use crate::config::{Environment, StagingConfig};
use crate::services::toast::{show_toast, ToastQueue, ToastVariant};
use crate::staging::Stage;

// -----------------------------------------------------------------------------
// 2. App State
// -----------------------------------------------------------------------------

/// Global application state provided via Leptos context.
#[derive(Clone)]
pub struct AppState {
    /// Current activation stage of the page.
    pub stage: ReadSignal<Stage>,

    /// Build environment.
    pub environment: Environment,

    /// Scheduler timings.
    pub staging: StagingConfig,

    /// Whether the contact modal is open.
    pub contact_open: RwSignal<bool>,

    /// Visible toast notifications.
    pub toasts: RwSignal<ToastQueue>,
}

impl AppState {
    /// Create a new app state instance around a running stage signal.
    pub fn new(stage: ReadSignal<Stage>, staging: StagingConfig) -> Self {
        Self {
            stage,
            environment: Environment::current(),
            staging,
            contact_open: RwSignal::new(false),
            toasts: RwSignal::new(ToastQueue::default()),
        }
    }

    /// Whether features of `stage` may be active.
    pub fn reached(&self, stage: Stage) -> bool {
        self.stage.get() >= stage
    }
}

// -----------------------------------------------------------------------------
// 3. UI Actions
// -----------------------------------------------------------------------------

impl AppState {
    pub fn open_contact(&self) {
        self.contact_open.set(true);
    }

    pub fn close_contact(&self) {
        self.contact_open.set(false);
    }

    /// Show an informational toast.
    pub fn notify(&self, title: impl Into<String>, description: Option<String>) {
        show_toast(self.toasts, title, description, ToastVariant::Default);
    }

    /// Show an error toast.
    pub fn notify_error(&self, title: impl Into<String>, description: Option<String>) {
        show_toast(self.toasts, title, description, ToastVariant::Destructive);
    }
}
