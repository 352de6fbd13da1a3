// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for ingestion.

/// Error produced by the layout pipeline.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the contextual value that
/// triggered the failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The rejected width, for [`ErrorKind::InvalidWidth`].
    width: Option<f32>,

    /// The family name that failed to resolve, for
    /// [`ErrorKind::FontResolution`].
    family: Option<String>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The rejected layout width, when the kind is
    /// [`ErrorKind::InvalidWidth`].
    pub fn width(&self) -> Option<f32> {
        self.width
    }

    /// The unresolvable font family name, when the kind is
    /// [`ErrorKind::FontResolution`].
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    pub(crate) fn invalid_width(width: f32) -> Self {
        Self {
            kind: ErrorKind::InvalidWidth,
            width: Some(width),
            family: None,
        }
    }

    pub(crate) fn font_resolution(family: &str) -> Self {
        Self {
            kind: ErrorKind::FontResolution,
            width: None,
            family: Some(family.to_owned()),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::InvalidWidth => {
                write!(
                    f,
                    "layout width must be finite and positive, got {}",
                    self.width.unwrap_or(f32::NAN)
                )
            }
            ErrorKind::FontResolution => {
                write!(
                    f,
                    "no font family named {:?} is available",
                    self.family.as_deref().unwrap_or("")
                )
            }
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The requested wrap width was zero, negative, or not finite. Fatal to
    /// the ingestion call that supplied it; any previously installed layout
    /// is unaffected.
    InvalidWidth,

    /// A font family name could not be resolved. Always recovered internally
    /// by falling back to the default system font, so this kind is observed
    /// in logs rather than returned from the public API.
    FontResolution,
}
