// =============================================================================
// OffGriid Web - Contact Modal
// =============================================================================
// Table of Contents:
// 1. Outcome Messages
// 2. Contact Modal Component
// =============================================================================

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::common::{Button, CloseIcon};
use crate::components::forms::{TextArea, TextInput};
use crate::config;
use crate::contact::{Accepted, ContactForm, LocalStorageStore, SubmissionGate};
use crate::error::SubmitError;
use crate::state::AppState;
use crate::utils::{navigate_to, now_ms};

// -----------------------------------------------------------------------------
// 1. Outcome Messages
// -----------------------------------------------------------------------------

const SENT_TITLE: &str = "Message sent!";
const SENT_DESCRIPTION: &str = "Your mail app will open with the message ready. We'll get back to you soon.";

/// Toast description for a rejected attempt.
fn rejection_detail(err: &SubmitError) -> Option<String> {
    match err {
        SubmitError::Validation(e) => Some(format!("Missing: {}.", e.missing_fields())),
        SubmitError::RateLimited { retry_after_ms } => Some(format!(
            "You can send another message in {}.",
            crate::utils::format_wait(*retry_after_ms)
        )),
    }
}

// -----------------------------------------------------------------------------
// 2. Contact Modal Component
// -----------------------------------------------------------------------------

/// "Let's Talk" dialog. Accepted messages are handed off to the mail client.
#[component]
pub fn ContactModal() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let close = {
        let app_state = app_state.clone();
        move || app_state.close_contact()
    };

    let handle_submit = {
        let app_state = app_state.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if submitting.get_untracked() {
                return;
            }

            let form = ContactForm::new(
                &name.get_untracked(),
                &email.get_untracked(),
                &message.get_untracked(),
            );

            let gate = SubmissionGate::browser();
            match gate.submit(&form, now_ms()) {
                Ok(accepted) => {
                    submitting.set(true);
                    let app_state = app_state.clone();
                    spawn_local(async move {
                        // Let "Sending..." paint before the page hands off.
                        TimeoutFuture::new(0).await;
                        hand_off(&app_state, &gate, &accepted);
                        let _ = submitting.try_set(false);
                        let _ = name.try_set(String::new());
                        let _ = email.try_set(String::new());
                        let _ = message.try_set(String::new());
                        app_state.close_contact();
                    });
                }
                Err(e) => {
                    log::info!("Contact submission rejected: {}", e);
                    app_state.notify_error(e.title(), rejection_detail(&e));
                }
            }
        }
    };

    let close_backdrop = close.clone();

    view! {
        <div class="modal">
            <div class="modal-backdrop" on:click=move |_| close_backdrop()></div>

            <div class="modal-content" role="dialog" aria-modal="true" aria-labelledby="contact-title">
                <div class="modal-header">
                    <h2 id="contact-title" class="modal-title">"Let's Talk"</h2>
                    <button class="icon-btn" aria-label="Close" on:click=move |_| close()>
                        <CloseIcon />
                    </button>
                </div>

                <form class="modal-form" on:submit=handle_submit>
                    <TextInput
                        id="name"
                        label="Your Name"
                        value=name
                        placeholder="John Doe"
                        max_length=config::NAME_MAX_CHARS
                        disabled=submitting
                    />
                    <TextInput
                        id="email"
                        label="Email Address"
                        input_type="email"
                        value=email
                        placeholder="john@example.com"
                        max_length=config::EMAIL_MAX_CHARS
                        disabled=submitting
                    />
                    <TextArea
                        id="message"
                        label="Your Message"
                        value=message
                        placeholder="Tell us about your project..."
                        max_length=config::MESSAGE_MAX_CHARS
                        disabled=submitting
                    />

                    <Button submit=true class="btn-block btn-lg" disabled=submitting>
                        {move || if submitting.get() { "Sending..." } else { "Send Message" }}
                    </Button>
                </form>
            </div>
        </div>
    }
}

/// Open the mail client. A failed handoff gives the rate-limit slot back.
fn hand_off(app_state: &AppState, gate: &SubmissionGate<LocalStorageStore>, accepted: &Accepted) {
    let handoff = &accepted.handoff;
    match navigate_to(&handoff.mailto_uri()) {
        Ok(()) => app_state.notify(SENT_TITLE, Some(SENT_DESCRIPTION.to_string())),
        Err(e) => {
            log::warn!("Mail client handoff failed: {}", e);
            gate.revert(accepted);
            app_state.notify_error(
                "Failed to open mail app",
                Some(format!("Write to us at {}", handoff.recipient)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Field, ValidationError};

    #[test]
    fn test_rejection_detail_for_rate_limit() {
        let err = SubmitError::RateLimited {
            retry_after_ms: 90 * 60 * 1000,
        };
        assert_eq!(
            rejection_detail(&err).as_deref(),
            Some("You can send another message in 1h 30m.")
        );
    }

    #[test]
    fn test_rejection_detail_lists_missing_fields() {
        let err = SubmitError::from(ValidationError {
            missing: vec![Field::Email],
        });
        let detail = rejection_detail(&err).unwrap_or_default();
        assert_eq!(detail, "Missing: email.");
        assert!(!detail.contains(err.title()));
    }
}
