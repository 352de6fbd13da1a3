// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lowering of segment styles into engine-ready attribute values.

use parley::{FontContext, FontFamily, GenericFamily};
use tracing::debug;

use crate::error::Error;
use crate::style::{Color, TextStyle};

/// The font family a style resolved to.
#[derive(Clone, Debug, PartialEq)]
pub enum ResolvedFamily {
    /// A named family present in the font collection.
    Named(String),
    /// A generic family, either requested as such (`system-ui`, `serif`,
    /// ...) or substituted when a named family could not be found.
    Generic(GenericFamily),
}

/// A segment style lowered to the values the layout engine consumes.
///
/// Resolution is deterministic: for a fixed font collection, the same
/// [`TextStyle`] always lowers to the same `ResolvedStyle`.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedStyle {
    /// The resolved font family.
    pub family: ResolvedFamily,
    /// Font size in layout units.
    pub font_size: f32,
    /// Line height as a multiple of the font size.
    pub line_height: f32,
    /// Foreground brush.
    pub brush: Color,
}

/// Resolves segment styles against a font collection.
pub struct StyleResolver<'a> {
    fonts: &'a mut FontContext,
}

impl<'a> StyleResolver<'a> {
    /// Creates a resolver borrowing the session's font context.
    pub fn new(fonts: &'a mut FontContext) -> Self {
        Self { fonts }
    }

    /// Lowers `style` to engine-ready values.
    ///
    /// A font family that cannot be found does not abort composition: the
    /// failure is logged and the style falls back to the default system
    /// font at the same size.
    pub fn resolve(&mut self, style: &TextStyle) -> ResolvedStyle {
        let family = match FontFamily::parse(&style.font_family) {
            Some(FontFamily::Generic(generic)) => ResolvedFamily::Generic(generic),
            _ => match self.lookup(&style.font_family) {
                Ok(()) => ResolvedFamily::Named(style.font_family.clone()),
                Err(err) => {
                    debug!("{err}; falling back to the system font");
                    ResolvedFamily::Generic(GenericFamily::SystemUi)
                }
            },
        };
        ResolvedStyle {
            family,
            font_size: style.font_size,
            line_height: line_height_factor(style.font_size, style.line_spacing),
            brush: style.color,
        }
    }

    fn lookup(&mut self, family: &str) -> Result<(), Error> {
        if self.fonts.collection.family_id(family).is_some() {
            Ok(())
        } else {
            Err(Error::font_resolution(family))
        }
    }
}

impl core::fmt::Debug for StyleResolver<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StyleResolver").finish_non_exhaustive()
    }
}

/// Converts an additive line spacing into the engine's line height
/// multiplier.
///
/// The spacing value is extra distance between lines in layout units,
/// applied symmetrically. Negative spacing and degenerate font sizes clamp
/// to the plain font-size line.
fn line_height_factor(font_size: f32, line_spacing: f32) -> f32 {
    if font_size <= 0.0 {
        return 1.0;
    }
    (font_size + line_spacing.max(0.0)) / font_size
}
