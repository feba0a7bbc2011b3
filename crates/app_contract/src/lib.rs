//! Shared contract types between the desktop window manager and hosted applications.
//!
//! An application is a renderable unit with a stable identifier, a display
//! title, an icon reference, and an optional preferred window size. The shell
//! owns every other concern; hosted content only receives mount/unmount
//! lifecycle from the window frame that contains it.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::View;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fallback content width in pixels when a descriptor declares none.
pub const DEFAULT_CONTENT_WIDTH: i32 = 600;
/// Fallback content height in pixels when a descriptor declares none.
pub const DEFAULT_CONTENT_HEIGHT: i32 = 400;

/// Stable identifier for a hosted application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(String);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejection reasons for candidate application identifiers.
pub enum ApplicationIdError {
    /// The identifier was empty or longer than the allowed maximum.
    #[error("application id has invalid length")]
    InvalidLength,
    /// The identifier contained characters outside `a-z`, `0-9`, and `-`.
    #[error("application id `{0}` contains invalid characters")]
    InvalidCharacters(String),
}

impl ApplicationId {
    /// Returns an identifier when `raw` is a lowercase kebab-case token.
    pub fn new(raw: impl Into<String>) -> Result<Self, ApplicationIdError> {
        let raw = raw.into();
        if raw.is_empty() || raw.len() > 48 {
            return Err(ApplicationIdError::InvalidLength);
        }
        let bytes = raw.as_bytes();
        if !bytes[0].is_ascii_lowercase() {
            return Err(ApplicationIdError::InvalidCharacters(raw));
        }
        let valid = bytes
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-');
        if !valid || raw.ends_with('-') || raw.contains("--") {
            return Err(ApplicationIdError::InvalidCharacters(raw));
        }
        Ok(Self(raw))
    }

    /// Creates an id without validation for compile-time trusted constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Preferred content size declared by an application descriptor.
pub struct PreferredSize {
    /// Preferred width in pixels.
    pub width: i32,
    /// Preferred height in pixels.
    pub height: i32,
}

impl Default for PreferredSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_CONTENT_WIDTH,
            height: DEFAULT_CONTENT_HEIGHT,
        }
    }
}

#[derive(Clone)]
/// Mount context injected by the shell once per hosted window.
///
/// The context deliberately carries no command channel: hosted content may not
/// call back into window operations except through the frame's own controls.
pub struct AppMountContext {
    /// Stable app id from the shell registry.
    pub app_id: ApplicationId,
}

/// Static app mount function used by the shell registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mountable app module held by the shell registry.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a shell-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_id_accepts_lowercase_kebab_tokens() {
        assert!(ApplicationId::new("terminal").is_ok());
        assert!(ApplicationId::new("ai-assistant").is_ok());
        assert!(ApplicationId::new("shooter2").is_ok());
    }

    #[test]
    fn application_id_rejects_malformed_tokens() {
        assert_eq!(
            ApplicationId::new(""),
            Err(ApplicationIdError::InvalidLength)
        );
        assert!(ApplicationId::new("Terminal").is_err());
        assert!(ApplicationId::new("term_inal").is_err());
        assert!(ApplicationId::new("terminal-").is_err());
        assert!(ApplicationId::new("ai--assistant").is_err());
        assert!(ApplicationId::new("9abc").is_err());
    }

    #[test]
    fn preferred_size_defaults_to_content_fallback() {
        let size = PreferredSize::default();
        assert_eq!(size.width, DEFAULT_CONTENT_WIDTH);
        assert_eq!(size.height, DEFAULT_CONTENT_HEIGHT);
    }
}
