//! Contact form state machine.
//!
//! ```text
//! Editing --submit ok--> Sent { reset_at } --tick(now >= reset_at)--> Editing (fields cleared)
//! Editing --rejected / transport error--> Failed { notice } --dismiss--> Editing
//! ```
//! Invalid input is rejected before any network call and leaves the state untouched.

use crate::{
    contact::relay::{MailRelay, RelayResponse},
    foundation::error::{ScrollcueError, ScrollcueResult},
};

/// Notice shown when the relay answers with a non-2xx status.
pub const REJECTED_NOTICE: &str = "Oops! Something went wrong. Please try again.";
/// Notice shown when the relay could not be reached.
pub const TRANSPORT_NOTICE: &str = "Error sending message.";

/// The JSON body sent to the relay.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn validate(&self) -> ScrollcueResult<()> {
        for (field, value) in [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Message, &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ScrollcueError::validation(format!(
                    "{} is required",
                    field.as_str()
                )));
            }
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ScrollcueError::validation(format!(
                "'{}' is not an email address",
                self.email.trim()
            )));
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.subject.is_empty()
            && self.message.is_empty()
    }
}

// `local@domain`, one `@`, no whitespace.
fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !s.chars().any(char::is_whitespace)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FormStatus {
    Editing,
    /// Confirmation showing; fields reset at `reset_at`.
    Sent { reset_at: f64 },
    Failed { notice: String },
}

/// Result of a submission that reached the relay (or tried to).
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Sent { reset_at: f64 },
    Rejected { status: u16 },
    TransportFailed,
}

#[derive(Clone, Debug)]
pub struct ContactForm {
    fields: ContactMessage,
    status: FormStatus,
    reset_after: f64,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub const DEFAULT_RESET_AFTER: f64 = 3.0;

    pub fn new() -> Self {
        Self {
            fields: ContactMessage::default(),
            status: FormStatus::Editing,
            reset_after: Self::DEFAULT_RESET_AFTER,
        }
    }

    #[must_use]
    pub fn with_reset_after(mut self, secs: f64) -> Self {
        if secs.is_finite() && secs >= 0.0 {
            self.reset_after = secs;
        }
        self
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::Subject => self.fields.subject = value,
            Field::Message => self.fields.message = value,
        }
    }

    pub fn fields(&self) -> &ContactMessage {
        &self.fields
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// When the fields will be cleared, if a reset is pending.
    pub fn pending_reset(&self) -> Option<f64> {
        match self.status {
            FormStatus::Sent { reset_at } => Some(reset_at),
            _ => None,
        }
    }

    pub fn notice(&self) -> Option<&str> {
        match &self.status {
            FormStatus::Failed { notice } => Some(notice),
            _ => None,
        }
    }

    /// Validate and send the current fields through `relay`.
    ///
    /// Errors only for input that never reaches the relay (missing fields, or a
    /// confirmation still showing). Relay failures are reported through the outcome
    /// and the form's notice, with fields preserved for a retry.
    pub fn submit(&mut self, relay: &dyn MailRelay, now: f64) -> ScrollcueResult<SubmitOutcome> {
        if let FormStatus::Sent { .. } = self.status {
            return Err(ScrollcueError::validation(
                "a message was just sent; wait for the form to reset",
            ));
        }
        self.fields.validate()?;

        let outcome = match relay.deliver(&self.fields) {
            Ok(RelayResponse::Accepted { status }) => {
                let reset_at = now + self.reset_after;
                tracing::info!(status, reset_at, "contact message sent");
                self.status = FormStatus::Sent { reset_at };
                SubmitOutcome::Sent { reset_at }
            }
            Ok(RelayResponse::Rejected { status }) => {
                tracing::warn!(status, "relay rejected contact message");
                self.status = FormStatus::Failed {
                    notice: REJECTED_NOTICE.to_owned(),
                };
                SubmitOutcome::Rejected { status }
            }
            Err(error) => {
                tracing::warn!(%error, "contact message could not be delivered");
                self.status = FormStatus::Failed {
                    notice: TRANSPORT_NOTICE.to_owned(),
                };
                SubmitOutcome::TransportFailed
            }
        };
        Ok(outcome)
    }

    /// Clear the fields once the confirmation has run its course. Returns whether a
    /// reset happened on this call.
    pub fn tick(&mut self, now: f64) -> bool {
        match self.status {
            FormStatus::Sent { reset_at } if now >= reset_at => {
                self.fields = ContactMessage::default();
                self.status = FormStatus::Editing;
                tracing::debug!("contact form reset");
                true
            }
            _ => false,
        }
    }

    pub fn dismiss_notice(&mut self) {
        if let FormStatus::Failed { .. } = self.status {
            self.status = FormStatus::Editing;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/contact/form.rs"]
mod tests;
