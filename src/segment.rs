// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-supplied content segments.

use crate::style::TextStyle;

/// The placeholder character standing in for an inline image in the styled
/// buffer: U+FFFC OBJECT REPLACEMENT CHARACTER.
///
/// Each image segment contributes exactly one such character to the buffer,
/// so its rendered length is the character's UTF-8 length (3 bytes).
pub const OBJECT_REPLACEMENT_CHARACTER: char = '\u{FFFC}';

/// One unit of content in a rich text block.
///
/// Segments are immutable value data: the pipeline reads them during
/// ingestion and never mutates them afterwards.
#[derive(Clone, Debug, PartialEq)]
pub enum Segment {
    /// A run of plain styled text.
    Text(TextSegment),
    /// A run of hyperlink text.
    Link(LinkSegment),
    /// An inline image.
    Image(ImageSegment),
}

impl Segment {
    /// Creates a text segment.
    pub fn text(content: impl Into<String>, style: TextStyle) -> Self {
        Self::Text(TextSegment {
            content: content.into(),
            style,
            width_hint: None,
        })
    }

    /// Creates a link segment.
    pub fn link(content: impl Into<String>, uri: impl Into<String>, style: TextStyle) -> Self {
        Self::Link(LinkSegment {
            content: content.into(),
            uri: uri.into(),
            style,
        })
    }

    /// Creates an image segment from its intrinsic size and source
    /// identifier.
    pub fn image(width: f32, height: f32, source: impl Into<String>) -> Self {
        Self::Image(ImageSegment {
            width,
            height,
            source: source.into(),
            data: None,
        })
    }

    /// The number of bytes this segment contributes to the styled buffer.
    pub fn rendered_len(&self) -> usize {
        match self {
            Self::Text(text) => text.content.len(),
            Self::Link(link) => link.content.len(),
            Self::Image(_) => OBJECT_REPLACEMENT_CHARACTER.len_utf8(),
        }
    }
}

/// A run of plain styled text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSegment {
    /// The text content.
    pub content: String,
    /// The style applied to the whole run.
    pub style: TextStyle,
    /// Advisory wrap width, used only when this segment is laid out on its
    /// own via [`TextFlow::ingest_single`](crate::TextFlow::ingest_single).
    /// Block composition wraps at the block width instead.
    pub width_hint: Option<f32>,
}

/// A run of hyperlink text.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkSegment {
    /// The visible text content.
    pub content: String,
    /// The link target.
    pub uri: String,
    /// The style applied to the whole run.
    pub style: TextStyle,
}

/// An inline image.
///
/// Before layout an image has only an intrinsic size; its on-screen
/// rectangle exists only on the placement record produced after layout.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageSegment {
    /// Intrinsic width in layout units.
    pub width: f32,
    /// Intrinsic height in layout units.
    pub height: f32,
    /// Source identifier (for example a URL or asset name). Carried through
    /// to the placement record; never interpreted.
    pub source: String,
    /// Pre-decoded image bytes, if the caller has them. Carried through
    /// opaquely for the rendering surface; never decoded here.
    pub data: Option<Vec<u8>>,
}
