//! Error types for configuration and page mounting.
//!
//! Validation failures on the contact form are not errors in this sense;
//! they are ordinary data in [`crate::form`].

/// Configuration could not be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The phrase rotation must hold at least one phrase.
    #[error("phrase list must not be empty")]
    EmptyPhrases,

    /// The JSON config blob was malformed.
    #[error("config parse failed: {0}")]
    Parse(String),
}

/// A controller could not be attached to the page.
///
/// Each controller mounts independently; one failing leaves the others in place.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    /// A required element was not found.
    #[error("missing element: {selector}")]
    MissingElement { selector: &'static str },

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A browser API call threw.
    #[error("{context}: {message}")]
    Js { context: &'static str, message: String },
}
