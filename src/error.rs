//! Error types for section modeling, ingest, and navigation.

extern crate alloc;

use alloc::string::String;
use core::fmt;

/// Top-level error for all core operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollNavError {
    /// Section descriptor or section set validation failure.
    Section(String),
    /// XHTML ingest failure (malformed markup or limit violation).
    Ingest(String),
    /// Navigation menu construction or href resolution failure.
    Navigation(String),
}

impl ScrollNavError {
    /// Stable machine-readable area tag for this error.
    pub fn area(&self) -> &'static str {
        match self {
            Self::Section(_) => "section",
            Self::Ingest(_) => "ingest",
            Self::Navigation(_) => "navigation",
        }
    }

    /// Human-readable message payload.
    pub fn message(&self) -> &str {
        match self {
            Self::Section(msg) | Self::Ingest(msg) | Self::Navigation(msg) => msg.as_str(),
        }
    }
}

impl fmt::Display for ScrollNavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.area(), self.message())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ScrollNavError {}
