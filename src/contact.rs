//! Contact form validation and simulated submission.
//!
//! There is no real delivery backend: submission validates locally, waits a
//! fixed artificial delay, and reports success. No retry, cancellation, or
//! backpressure semantics apply.

use crate::error::ContactError;
use std::time::Duration;

/// Fixed artificial delay standing in for network delivery.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// One contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Local validation: non-empty name and message, plausible email.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::EmptyName);
        }
        if !is_plausible_email(&self.email) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::EmptyMessage);
        }
        Ok(())
    }
}

/// Acknowledgement returned after the simulated delivery completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub sender: String,
}

/// Validate and "send" the form.
pub async fn submit(form: &ContactForm) -> Result<SubmissionReceipt, ContactError> {
    form.validate()?;
    tracing::info!(sender = %form.name, "contact form accepted; simulating delivery");
    tokio::time::sleep(SUBMIT_DELAY).await;
    tracing::info!(sender = %form.name, "contact form delivery simulated");
    Ok(SubmissionReceipt {
        sender: form.name.clone(),
    })
}

/// Shallow shape check: one `@` with a non-empty local part and a dotted
/// domain. Deliverability is out of scope.
fn is_plausible_email(input: &str) -> bool {
    let trimmed = input.trim();
    if trimmed.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = trimmed.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there.".to_string(),
        }
    }

    #[test]
    fn valid_form_passes_validation() {
        assert_eq!(valid_form().validate(), Ok(()));
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut form = valid_form();
        form.name = "   ".to_string();
        assert_eq!(form.validate(), Err(ContactError::EmptyName));
    }

    #[test]
    fn blank_message_is_rejected() {
        let mut form = valid_form();
        form.message = String::new();
        assert_eq!(form.validate(), Err(ContactError::EmptyMessage));
    }

    #[test]
    fn implausible_emails_are_rejected() {
        for bad in ["", "plain", "@example.com", "a@", "a@nodot", "a b@example.com", "a@ex ample.com"] {
            let mut form = valid_form();
            form.email = bad.to_string();
            assert!(
                matches!(form.validate(), Err(ContactError::InvalidEmail(_))),
                "expected rejection for `{bad}`"
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn submit_waits_the_fixed_delay_then_acknowledges() {
        let started = tokio::time::Instant::now();
        let receipt = submit(&valid_form()).await.expect("receipt");
        assert_eq!(receipt.sender, "Ada");
        assert_eq!(started.elapsed(), SUBMIT_DELAY);
    }

    #[tokio::test]
    async fn submit_rejects_invalid_forms_before_the_delay() {
        let mut form = valid_form();
        form.email = "nope".to_string();
        let err = submit(&form).await.expect_err("must reject");
        assert_eq!(err, ContactError::InvalidEmail("nope".to_string()));
    }
}
