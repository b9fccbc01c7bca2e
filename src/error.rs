//! Unified error types for the viewer.

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// ContactError
// ---------------------------------------------------------------------------

/// Validation failures for the contact form.
#[derive(Debug, PartialEq, Eq)]
pub enum ContactError {
    EmptyName,
    InvalidEmail(String),
    EmptyMessage,
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::InvalidEmail(value) => write!(f, "invalid email address `{value}`"),
            Self::EmptyMessage => write!(f, "message must not be empty"),
        }
    }
}

impl std::error::Error for ContactError {}

// ---------------------------------------------------------------------------
// FolioError — top-level
// ---------------------------------------------------------------------------

/// Top-level error type for the viewer binary.
#[derive(Debug)]
pub enum FolioError {
    Config(ConfigError),
    Contact(ContactError),
    Io(std::io::Error),
}

impl fmt::Display for FolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Contact(e) => write!(f, "contact: {e}"),
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for FolioError {}

impl From<ConfigError> for FolioError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<ContactError> for FolioError {
    fn from(e: ContactError) -> Self {
        Self::Contact(e)
    }
}

impl From<std::io::Error> for FolioError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
