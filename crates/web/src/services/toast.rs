// =============================================================================
// OffGriid Web - Toast Notifications Service
// =============================================================================
// Transient in-page notifications for contact form outcomes.
// =============================================================================

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 4_000;

/// Visual treatment of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// A single notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
}

/// Ordered list of visible toasts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Add a toast and return its id.
    pub fn push(
        &mut self,
        title: impl Into<String>,
        description: Option<String>,
        variant: ToastVariant,
    ) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            title: title.into(),
            description,
            variant,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Show a toast and schedule its dismissal.
pub fn show_toast(
    queue: RwSignal<ToastQueue>,
    title: impl Into<String>,
    description: Option<String>,
    variant: ToastVariant,
) {
    let mut id = 0;
    queue.update(|q| id = q.push(title, description, variant));

    // The queue outlives any single toast; a disposed signal is ignored.
    Timeout::new(TOAST_DURATION_MS, move || {
        let _ = queue.try_update(|q| q.dismiss(id));
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_push_and_dismiss() {
        let mut queue = ToastQueue::default();
        let first = queue.push("Message sent!", None, ToastVariant::Default);
        let second = queue.push(
            "Please fill in all fields",
            Some("missing: name".to_string()),
            ToastVariant::Destructive,
        );
        assert_ne!(first, second);
        assert_eq!(queue.toasts().len(), 2);

        queue.dismiss(first);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, second);

        queue.dismiss(first);
        assert_eq!(queue.toasts().len(), 1);
    }
}
