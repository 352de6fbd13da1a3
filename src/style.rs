// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-facing style descriptions for text and link segments.

/// A simple 8-bit RGBA color.
///
/// This is the brush type carried through layout: it satisfies Parley's
/// `Brush` bound, so renderers receive it back unchanged on every glyph run
/// and can convert it into whatever paint type they use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
    /// Alpha component.
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb8(0, 0, 0);

    /// Opaque white.
    pub const WHITE: Self = Self::rgb8(255, 255, 255);

    /// Creates an opaque color from 8-bit RGB components.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color from 8-bit RGBA components.
    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Style shared by text and link segments.
///
/// Line spacing is a single value in layout units added between lines. It is
/// applied symmetrically (as both the minimum and maximum extra spacing);
/// asymmetric spacing is deliberately not modeled.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font family name. Generic CSS family names such as `system-ui`,
    /// `serif` or `monospace` are understood; an unknown named family falls
    /// back to the default system font at resolution time.
    pub font_family: String,
    /// Font size in layout units.
    pub font_size: f32,
    /// Extra spacing between lines, in layout units.
    pub line_spacing: f32,
    /// Foreground color.
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "system-ui".to_owned(),
            font_size: 16.0,
            line_spacing: 0.0,
            color: Color::BLACK,
        }
    }
}
