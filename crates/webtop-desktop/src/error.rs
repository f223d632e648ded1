//! Error types for the desktop core
//!
//! Mutating registry and controller operations deliberately no-op on
//! unknown ids; these types serve the remaining fallible seams:
//! pointer-capture degradation and the geometry queries the render layer
//! makes by id.

/// Errors that can occur in desktop operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// No window with the given id is known to the controller
    WindowNotFound(String),

    /// No desktop icon with the given id is known to the controller
    IconNotFound(String),

    /// The runtime does not support pointer capture
    CaptureUnsupported,
}

impl std::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WindowNotFound(id) => write!(f, "window not found: {}", id),
            Self::IconNotFound(id) => write!(f, "icon not found: {}", id),
            Self::CaptureUnsupported => write!(f, "pointer capture unsupported"),
        }
    }
}

impl std::error::Error for DesktopError {}

/// Result type alias for desktop operations
pub type DesktopResult<T> = Result<T, DesktopError>;
