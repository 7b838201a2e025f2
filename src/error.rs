// SPDX-License-Identifier: MPL-2.0
use crate::toast::ToastId;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Toast(ToastError),
}

/// Errors raised by the notification registry.
///
/// Unknown ids are deliberately absent: closing, updating or removing a
/// notification that no longer exists is a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastError {
    /// `insert` was given an id that is already registered.
    DuplicateId(ToastId),
}

impl fmt::Display for ToastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToastError::DuplicateId(id) => write!(f, "Duplicate notification id: {}", id),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Toast(e) => write!(f, "Toast Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl std::error::Error for ToastError {}

impl From<ToastError> for Error {
    fn from(err: ToastError) -> Self {
        Error::Toast(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
