// =============================================================================
// OffGriid Web - Contact Submission Gate
// =============================================================================
// Validation, rolling-window rate limit and mailto handoff for the contact
// form. Everything here is pure apart from the `SubmissionStore` it is given.
//
// Table of Contents:
// 1. Contact Form
// 2. Validation
// 3. Rate Limit
// 4. Mailto Handoff
// 5. Submission Gate
// =============================================================================

pub mod store;

pub use store::{LocalStorageStore, MemoryStore, SubmissionStore};

use crate::config::{self, EMAIL_MAX_CHARS, MESSAGE_MAX_CHARS, NAME_MAX_CHARS};
use crate::error::{Field, SubmitError, ValidationError};

// -----------------------------------------------------------------------------
// 1. Contact Form
// -----------------------------------------------------------------------------

/// Raw contact form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Build a form, capping each field at its input length limit.
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: cap(name, NAME_MAX_CHARS),
            email: cap(email, EMAIL_MAX_CHARS),
            message: cap(message, MESSAGE_MAX_CHARS),
        }
    }
}

fn cap(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

/// A form whose required fields are all present, trimmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

// -----------------------------------------------------------------------------
// 2. Validation
// -----------------------------------------------------------------------------

/// Require name, email and message to be non-empty after trimming.
pub fn validate(form: &ContactForm) -> Result<ValidForm, ValidationError> {
    let name = form.name.trim();
    let email = form.email.trim();
    let message = form.message.trim();

    let missing: Vec<Field> = [
        (Field::Name, name),
        (Field::Email, email),
        (Field::Message, message),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(field, _)| field)
    .collect();

    if !missing.is_empty() {
        return Err(ValidationError { missing });
    }

    Ok(ValidForm {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
    })
}

// -----------------------------------------------------------------------------
// 3. Rate Limit
// -----------------------------------------------------------------------------

/// Whether a submission at `now_ms` is outside the window of the last one.
///
/// A record in the future (clock moved backwards) does not block.
pub fn can_submit(now_ms: i64, last_submitted_at: Option<i64>, window_ms: i64) -> bool {
    retry_after(now_ms, last_submitted_at, window_ms).is_none()
}

/// Milliseconds left before a new submission is allowed, if any.
pub fn retry_after(now_ms: i64, last_submitted_at: Option<i64>, window_ms: i64) -> Option<i64> {
    let last = last_submitted_at?;
    let elapsed = now_ms.checked_sub(last)?;
    if elapsed < 0 || elapsed >= window_ms {
        None
    } else {
        Some(window_ms - elapsed)
    }
}

// -----------------------------------------------------------------------------
// 4. Mailto Handoff
// -----------------------------------------------------------------------------

/// Pre-filled outbound message, ready for the platform mail handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Handoff {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl Handoff {
    pub fn compose(recipient: &str, form: &ValidForm) -> Self {
        Self {
            recipient: recipient.to_string(),
            subject: format!("OffGriid contact from {}", form.name),
            body: format!(
                "Name: {}\nEmail: {}\n\n{}",
                form.name, form.email, form.message
            ),
        }
    }

    /// `mailto:` URI with percent-encoded subject and body.
    pub fn mailto_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

// -----------------------------------------------------------------------------
// 5. Submission Gate
// -----------------------------------------------------------------------------

/// Phases a submission passes through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    RateCheck,
    RecordAndHandoff,
}

/// An accepted submission: the handoff plus what it replaced in the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accepted {
    pub handoff: Handoff,
    pub recorded_at: i64,
    pub previous: Option<i64>,
}

/// Validation + rate check + record in front of the contact handoff.
pub struct SubmissionGate<S> {
    store: S,
    window_ms: i64,
    recipient: String,
}

impl SubmissionGate<LocalStorageStore> {
    /// Gate backed by browser local storage and the configured recipient.
    pub fn browser() -> Self {
        Self::new(
            LocalStorageStore,
            config::SUBMISSION_WINDOW_MS,
            config::contact_recipient(),
        )
    }
}

impl<S: SubmissionStore> SubmissionGate<S> {
    pub fn new(store: S, window_ms: i64, recipient: impl Into<String>) -> Self {
        Self {
            store,
            window_ms,
            recipient: recipient.into(),
        }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run one submission attempt at `now_ms`.
    ///
    /// Only an accepted attempt writes the store. The caller performs the
    /// handoff; delivery is never confirmed.
    pub fn submit(&self, form: &ContactForm, now_ms: i64) -> Result<Accepted, SubmitError> {
        log::debug!("Contact gate: {:?}", Phase::Validating);
        let valid = validate(form).inspect_err(|e| {
            log::debug!("Contact gate: rejected, {}", e);
        })?;

        log::debug!("Contact gate: {:?}", Phase::RateCheck);
        let last = self.last_submitted_at();
        if let Some(retry_after_ms) = retry_after(now_ms, last, self.window_ms) {
            log::debug!("Contact gate: rate limited for {}ms", retry_after_ms);
            return Err(SubmitError::RateLimited { retry_after_ms });
        }

        log::debug!("Contact gate: {:?}", Phase::RecordAndHandoff);
        if let Err(e) = self.store.record_submission(now_ms) {
            log::warn!("Could not record contact submission: {}", e);
        }

        log::debug!("Contact gate: {:?}", Phase::Idle);
        Ok(Accepted {
            handoff: Handoff::compose(&self.recipient, &valid),
            recorded_at: now_ms,
            previous: last,
        })
    }

    /// Undo the record of a submission whose handoff never happened.
    ///
    /// Leaves the store alone if another submission has overwritten it since.
    pub fn revert(&self, accepted: &Accepted) {
        if self.last_submitted_at() != Some(accepted.recorded_at) {
            return;
        }
        let result = match accepted.previous {
            Some(previous) => self.store.record_submission(previous),
            None => self.store.clear_submission(),
        };
        if let Err(e) = result {
            log::warn!("Could not restore submission record: {}", e);
        }
    }

    fn last_submitted_at(&self) -> Option<i64> {
        match self.store.last_submitted_at() {
            Ok(last) => last,
            Err(e) => {
                log::warn!("Ignoring submission record: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR_MS: i64 = 60 * 60 * 1000;
    const DAY_MS: i64 = 24 * HOUR_MS;
    const T0: i64 = 1_700_000_000_000;

    fn ada() -> ContactForm {
        ContactForm::new("Ada", "ada@example.com", "hello")
    }

    fn gate(store: MemoryStore) -> SubmissionGate<MemoryStore> {
        SubmissionGate::new(store, DAY_MS, "hello@offgriid.dev")
    }

    #[test]
    fn test_can_submit_without_record() {
        for now in [0, 1, T0, i64::MAX] {
            assert!(can_submit(now, None, DAY_MS));
        }
    }

    #[test]
    fn test_can_submit_window_boundaries() {
        assert!(!can_submit(T0, Some(T0), DAY_MS));
        assert!(!can_submit(T0 + 1, Some(T0), DAY_MS));
        assert!(!can_submit(T0 + DAY_MS - 1, Some(T0), DAY_MS));
        assert!(can_submit(T0 + DAY_MS, Some(T0), DAY_MS));
        assert!(can_submit(T0 + 10 * DAY_MS, Some(T0), DAY_MS));
    }

    #[test]
    fn test_future_record_does_not_block() {
        assert!(can_submit(T0, Some(T0 + HOUR_MS), DAY_MS));
    }

    #[test]
    fn test_retry_after_counts_down() {
        assert_eq!(retry_after(T0 + HOUR_MS, Some(T0), DAY_MS), Some(23 * HOUR_MS));
        assert_eq!(retry_after(T0 + DAY_MS, Some(T0), DAY_MS), None);
    }

    #[test]
    fn test_first_submission_accepted_and_recorded() {
        let gate = gate(MemoryStore::new());
        let accepted = gate.submit(&ada(), T0).unwrap();

        assert_eq!(accepted.handoff.recipient, "hello@offgriid.dev");
        assert_eq!(accepted.recorded_at, T0);
        assert_eq!(accepted.previous, None);
        assert_eq!(gate.store().last_submitted_at().unwrap(), Some(T0));
        assert_eq!(gate.store().writes(), 1);
    }

    #[test]
    fn test_second_submission_within_window_rate_limited() {
        let gate = gate(MemoryStore::new());
        gate.submit(&ada(), T0).unwrap();

        let err = gate.submit(&ada(), T0 + HOUR_MS).unwrap_err();
        assert_eq!(
            err,
            SubmitError::RateLimited {
                retry_after_ms: 23 * HOUR_MS
            }
        );
        assert_eq!(gate.store().last_submitted_at().unwrap(), Some(T0));
        assert_eq!(gate.store().writes(), 1);
    }

    #[test]
    fn test_submission_after_window_overwrites_record() {
        let gate = gate(MemoryStore::with_record(T0));
        gate.submit(&ada(), T0 + DAY_MS).unwrap();
        assert_eq!(gate.store().last_submitted_at().unwrap(), Some(T0 + DAY_MS));
    }

    #[test]
    fn test_corrupt_record_treated_as_absent() {
        let gate = gate(MemoryStore::with_raw("abc"));
        let accepted = gate.submit(&ada(), T0).unwrap();

        assert_eq!(accepted.previous, None);
        assert_eq!(gate.store().last_submitted_at().unwrap(), Some(T0));
    }

    #[test]
    fn test_revert_clears_first_record() {
        let gate = gate(MemoryStore::new());
        let accepted = gate.submit(&ada(), T0).unwrap();

        gate.revert(&accepted);
        assert_eq!(gate.store().last_submitted_at().unwrap(), None);
        assert!(gate.submit(&ada(), T0 + 1).is_ok());
    }

    #[test]
    fn test_revert_restores_older_record() {
        let gate = gate(MemoryStore::with_record(T0));
        let accepted = gate.submit(&ada(), T0 + DAY_MS).unwrap();
        assert_eq!(accepted.previous, Some(T0));

        gate.revert(&accepted);
        assert_eq!(gate.store().last_submitted_at().unwrap(), Some(T0));
    }

    #[test]
    fn test_revert_keeps_newer_record() {
        let gate = gate(MemoryStore::new());
        let accepted = gate.submit(&ada(), T0).unwrap();
        gate.store().record_submission(T0 + HOUR_MS).unwrap();

        gate.revert(&accepted);
        assert_eq!(gate.store().last_submitted_at().unwrap(), Some(T0 + HOUR_MS));
    }

    #[test]
    fn test_empty_name_fails_validation_regardless_of_rate_state() {
        let form = ContactForm::new("", "ada@example.com", "hello");

        for store in [MemoryStore::new(), MemoryStore::with_record(T0)] {
            let gate = gate(store);
            let err = gate.submit(&form, T0 + HOUR_MS).unwrap_err();
            assert_eq!(
                err,
                SubmitError::Validation(ValidationError {
                    missing: vec![Field::Name]
                })
            );
            assert_eq!(gate.store().writes(), 0);
        }
    }

    #[test]
    fn test_whitespace_only_fields_are_missing() {
        let form = ContactForm::new("  ", "\t", "\n ");
        let err = validate(&form).unwrap_err();
        assert_eq!(err.missing, vec![Field::Name, Field::Email, Field::Message]);
    }

    #[test]
    fn test_validate_trims() {
        let valid = validate(&ContactForm::new("  Ada ", " ada@example.com", "hi  ")).unwrap();
        assert_eq!(valid.name, "Ada");
        assert_eq!(valid.email, "ada@example.com");
        assert_eq!(valid.message, "hi");
    }

    #[test]
    fn test_form_caps_field_lengths() {
        let long = "x".repeat(5_000);
        let form = ContactForm::new(&long, &long, &long);
        assert_eq!(form.name.chars().count(), NAME_MAX_CHARS);
        assert_eq!(form.email.chars().count(), EMAIL_MAX_CHARS);
        assert_eq!(form.message.chars().count(), MESSAGE_MAX_CHARS);
    }

    #[test]
    fn test_mailto_uri_is_percent_encoded() {
        let valid = validate(&ContactForm::new("Ada Lovelace", "ada@example.com", "hello & bye")).unwrap();
        let uri = Handoff::compose("hello@offgriid.dev", &valid).mailto_uri();

        assert_eq!(
            uri,
            "mailto:hello@offgriid.dev\
             ?subject=OffGriid%20contact%20from%20Ada%20Lovelace\
             &body=Name%3A%20Ada%20Lovelace%0AEmail%3A%20ada%40example.com%0A%0Ahello%20%26%20bye"
        );
    }
}
