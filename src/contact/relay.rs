//! Outbound delivery of contact messages to a third-party mail relay.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::{
    contact::form::ContactMessage,
    foundation::error::{ScrollcueError, ScrollcueResult},
};

/// How the relay answered a delivered request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelayResponse {
    /// 2xx.
    Accepted { status: u16 },
    /// Any other status.
    Rejected { status: u16 },
}

impl RelayResponse {
    pub fn from_status(status: u16) -> Self {
        if (200..300).contains(&status) {
            Self::Accepted { status }
        } else {
            Self::Rejected { status }
        }
    }

    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn status(self) -> u16 {
        match self {
            Self::Accepted { status } | Self::Rejected { status } => status,
        }
    }
}

/// Sends a contact message somewhere.
///
/// `Err` means the request never produced a response (transport failure); a response
/// with a non-2xx status is `Ok(RelayResponse::Rejected)`.
pub trait MailRelay {
    fn deliver(&self, message: &ContactMessage) -> ScrollcueResult<RelayResponse>;
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RelayConfig {
    pub endpoint: String,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_timeout() -> u64 {
    15
}

impl RelayConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            connect_timeout_secs: default_connect_timeout(),
            timeout_secs: default_timeout(),
        }
    }

    pub fn validate(&self) -> ScrollcueResult<()> {
        let endpoint = self.endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ScrollcueError::validation(format!(
                "relay endpoint '{}' must be an http(s) URL",
                self.endpoint
            )));
        }
        if self.connect_timeout_secs == 0 || self.timeout_secs == 0 {
            return Err(ScrollcueError::validation("relay timeouts must be > 0"));
        }
        Ok(())
    }
}

/// JSON-over-HTTP relay (`POST`, JSON body, JSON accept).
#[derive(Debug)]
pub struct HttpMailRelay {
    client: Client,
    endpoint: String,
}

impl HttpMailRelay {
    pub fn new(config: &RelayConfig) -> ScrollcueResult<Self> {
        config.validate()?;
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.trim().to_owned(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl MailRelay for HttpMailRelay {
    #[tracing::instrument(skip_all, fields(endpoint = %self.endpoint))]
    fn deliver(&self, message: &ContactMessage) -> ScrollcueResult<RelayResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .json(message)
            .send()?;
        let outcome = RelayResponse::from_status(response.status().as_u16());
        tracing::debug!(status = outcome.status(), "relay responded");
        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/contact/relay.rs"]
mod tests;
