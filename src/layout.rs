// Copyright 2026 the Textflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driving the layout engine and the retained layout result.

use parley::{
    Alignment, AlignmentOptions, FontContext, FontStack, Layout, LayoutContext, StyleProperty,
};

use crate::compose::Composition;
use crate::error::Error;
use crate::ranges::{ImageRecord, LinkRecord, TextRecord};
use crate::resolve::ResolvedFamily;
use crate::style::{Color, TextStyle};

/// The frame type produced by the layout engine, parameterized over this
/// crate's brush.
pub type Frame = Layout<Color>;

/// Breaks the composed buffer into lines wrapped at `width`.
///
/// Returns the frame and its computed height: the minimal height at which
/// the buffer fits when wrapped at `width` with unbounded vertical space.
/// An empty buffer yields a degenerate zero-line frame of height zero,
/// which is a valid state rather than an error.
pub(crate) fn break_lines(
    fonts: &mut FontContext,
    layout_cx: &mut LayoutContext<Color>,
    composition: &Composition,
    width: f32,
) -> Result<(Frame, f32), Error> {
    if !width.is_finite() || width <= 0.0 {
        return Err(Error::invalid_width(width));
    }
    if composition.text.is_empty() {
        return Ok((Frame::default(), 0.0));
    }

    let default = TextStyle::default();
    let mut builder = layout_cx.ranged_builder(fonts, &composition.text, 1.0);
    builder.push_default(StyleProperty::FontStack(FontStack::from(
        default.font_family.as_str(),
    )));
    builder.push_default(StyleProperty::FontSize(default.font_size));
    builder.push_default(StyleProperty::LineHeight(1.0));
    builder.push_default(StyleProperty::Brush(default.color));

    for span in &composition.spans {
        let stack = match &span.style.family {
            ResolvedFamily::Named(name) => FontStack::from(name.as_str()),
            ResolvedFamily::Generic(generic) => FontStack::from(*generic),
        };
        builder.push(StyleProperty::FontStack(stack), span.range.clone());
        builder.push(
            StyleProperty::FontSize(span.style.font_size),
            span.range.clone(),
        );
        builder.push(
            StyleProperty::LineHeight(span.style.line_height),
            span.range.clone(),
        );
        builder.push(StyleProperty::Brush(span.style.brush), span.range.clone());
    }

    for inline_box in &composition.boxes {
        builder.push_inline_box(inline_box.clone());
    }

    let mut frame = builder.build(&composition.text);
    frame.break_all_lines(Some(width));
    frame.align(Some(width), Alignment::Start, AlignmentOptions::default());
    let height = frame.height();
    Ok((frame, height))
}

/// The retained output of one ingestion: the laid out frame, its height,
/// the styled buffer, and the three range indexes (images annotated with
/// their placed rectangles).
///
/// A `LayoutResult` exclusively owns its frame; replacing or discarding the
/// result releases the frame with it. Hit testing reads the result without
/// re-invoking layout.
pub struct LayoutResult {
    height: f32,
    frame: Frame,
    buffer: String,
    texts: Vec<TextRecord>,
    links: Vec<LinkRecord>,
    images: Vec<ImageRecord>,
}

impl LayoutResult {
    pub(crate) fn new(
        height: f32,
        frame: Frame,
        buffer: String,
        texts: Vec<TextRecord>,
        links: Vec<LinkRecord>,
        images: Vec<ImageRecord>,
    ) -> Self {
        Self {
            height,
            frame,
            buffer,
            texts,
            links,
            images,
        }
    }

    /// The computed block height.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// The laid out frame, for the rendering surface to draw.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// The styled buffer text the frame was built from.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Text records in segment order.
    pub fn texts(&self) -> &[TextRecord] {
        &self.texts
    }

    /// Link records in segment order.
    pub fn links(&self) -> &[LinkRecord] {
        &self.links
    }

    /// Image records in segment order, with placed rectangles where line
    /// capacity allowed.
    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }
}

impl core::fmt::Debug for LayoutResult {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LayoutResult")
            .field("height", &self.height)
            .field("buffer", &self.buffer)
            .field("texts", &self.texts)
            .field("links", &self.links)
            .field("images", &self.images)
            .finish_non_exhaustive()
    }
}
