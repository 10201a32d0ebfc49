/// Convenience result type used across scrollcue.
pub type ScrollcueResult<T> = Result<T, ScrollcueError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Per-tick evaluation never returns these: bad geometry or timing falls back to the
/// pre-animation state. Errors surface from construction, validation and I/O only.
#[derive(thiserror::Error, Debug)]
pub enum ScrollcueError {
    /// Invalid user-provided page, trace or form data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while validating timelines, easing curves or output ranges.
    #[error("animation error: {0}")]
    Animation(String),

    /// Viewport or region geometry that cannot be used.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// The mail relay could not be reached. Bad relay configuration is a
    /// [`ScrollcueError::Validation`].
    #[error("relay error: {0}")]
    Relay(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Transport-level failure from the HTTP client.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollcueError {
    /// Build a [`ScrollcueError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollcueError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`ScrollcueError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`ScrollcueError::Relay`] value.
    pub fn relay(msg: impl Into<String>) -> Self {
        Self::Relay(msg.into())
    }

    /// Build a [`ScrollcueError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether this error came from the network path rather than from bad input.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Relay(_))
    }
}

impl From<serde_json::Error> for ScrollcueError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
